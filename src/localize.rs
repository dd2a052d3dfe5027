//! Language resolution for trilingual content columns
//!
//! English is the canonical text for every record; Hindi and Tamil
//! translations are optional per field. Resolution happens per field, per
//! record, so a record with a Hindi title but no Hindi body renders a mixed
//! response rather than dropping back to English wholesale.

use serde::{Deserialize, Serialize};

/// Requested display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Hi,
    Ta,
}

impl Lang {
    /// Parse a `lang` parameter. Unknown or missing values fall back to
    /// English silently, never to an error.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("hi") => Self::Hi,
            Some("ta") => Self::Ta,
            _ => Self::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ta => "ta",
        }
    }
}

/// Pick the localized variant of a field. A missing or blank translation
/// falls back to the English text.
pub fn resolve(lang: Lang, en: &str, hi: Option<&str>, ta: Option<&str>) -> String {
    let localized = match lang {
        Lang::En => None,
        Lang::Hi => hi,
        Lang::Ta => ta,
    };
    match localized {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => en.to_string(),
    }
}
