use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    Tr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ar, Language::Tr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Tr => "tr",
        }
    }

    /// Short label shown in the switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
            Language::Tr => "TR",
        }
    }

    pub fn direction(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            _ => "ltr",
        }
    }

    /// Accepts bare and region-tagged codes (`tr`, `tr-TR`, `AR_eg`).
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == primary)
    }
}

/// Stored choice first, then the browser's language, then the default.
pub fn detect(stored: Option<Language>, browser: Option<&str>) -> Language {
    stored
        .or_else(|| browser.and_then(Language::from_code))
        .or_else(|| Language::from_code(config::DEFAULT_LANGUAGE))
        .unwrap_or_default()
}
