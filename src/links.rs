//! Outbound links
//!
//! Every "start chat" button opens the same WhatsApp deep link with a
//! prefilled message.

use url::Url;

use crate::config::LinksConfig;
use crate::utils::errors::Result;

/// Deep link opening a WhatsApp chat with the prefilled message
pub fn whatsapp_url(config: &LinksConfig) -> Result<Url> {
    let raw = format!(
        "https://wa.me/{}?text={}",
        config.whatsapp_number,
        urlencoding::encode(&config.prefill_message)
    );
    Ok(Url::parse(&raw)?)
}
