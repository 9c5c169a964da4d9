//! Chat Heritage translation coverage report
//!
//! Loads the site configuration and translation tables, then reports how
//! complete each locale is relative to the default one.
//!
//! Usage: `chat-heritage [--config <path>] [--print-config]`

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use chat_heritage::{
    config::Settings,
    i18n::{Locale, TranslationLoader},
    links::whatsapp_url,
    ui::missing_required_keys,
    utils::logging,
};

#[derive(Debug, Parser)]
#[command(name = "chat-heritage", about = "Chat Heritage translation coverage report")]
struct Args {
    /// Settings file; defaults to ./config.toml when present
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Load configuration
    let settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Settings::new()?,
    };
    settings.validate()?;

    if args.print_config {
        println!("{}", settings.to_toml()?);
        return Ok(());
    }

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", chat_heritage::info());

    info!("Loading translations from {}...", settings.i18n.translations_dir);
    let catalog = TranslationLoader::new(&settings.i18n).load().await?;
    let report = catalog.coverage();

    let default_locale = catalog.default_locale();
    for key in missing_required_keys(&catalog, default_locale) {
        warn!(locale = %default_locale, key = %key, "Default table lacks a key the site renders");
    }

    for locale in Locale::ALL {
        match report.locales.iter().find(|coverage| coverage.locale == locale) {
            Some(coverage) => {
                info!(
                    locale = %locale,
                    keys = coverage.key_count,
                    missing = coverage.missing.len(),
                    percent = coverage.percent(report.total_keys),
                    "Locale coverage"
                );
                for key in &coverage.missing {
                    warn!(locale = %locale, key = %key, "Falls back to {}", report.default_locale);
                }
            }
            None => warn!(locale = %locale, "No translation table, every key falls back"),
        }
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(link = %whatsapp_url(&settings.links)?, "Chat link");

    Ok(())
}
