//! Anchor registry
//!
//! The home page sections that navigation can scroll to. Both the navigation
//! triggers and the page markup take their ids from here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::HeritageError;

/// A named anchor on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Problema,
    ChiSiamo,
    ComeFunziona,
    Percorsi,
    Faq,
    Inizia,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 6] = [
        Section::Problema,
        Section::ChiSiamo,
        Section::ComeFunziona,
        Section::Percorsi,
        Section::Faq,
        Section::Inizia,
    ];

    /// Sections linked from the header navigation
    pub const HEADER: [Section; 3] = [Section::ComeFunziona, Section::Percorsi, Section::Faq];

    /// DOM id of the anchor element
    pub fn id(self) -> &'static str {
        match self {
            Section::Problema => "problema",
            Section::ChiSiamo => "chi-siamo",
            Section::ComeFunziona => "come-funziona",
            Section::Percorsi => "percorsi",
            Section::Faq => "faq",
            Section::Inizia => "inizia",
        }
    }

    /// Translation key of the section's navigation label
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Problema => "problem.title",
            Section::ChiSiamo => "nav.chiSiamo",
            Section::ComeFunziona => "nav.comeFunziona",
            Section::Percorsi => "nav.percorsi",
            Section::Faq => "nav.faq",
            Section::Inizia => "nav.iniziaGratis",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = HeritageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| HeritageError::InvalidInput(format!("Unknown section: {}", s)))
    }
}
