//! Locale tags and localized text fields.
//!
//! Every user-facing string from the platform arrives localized per
//! market language. Spanish is the store default and the fallback for
//! any missing translation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported content locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish, the store default.
    #[default]
    Es,
    /// English.
    En,
    /// Portuguese.
    Pt,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// Parse a locale tag. Region subtags are tolerated ("es-AR" is
    /// Spanish); anything unknown falls back to the default.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            "pt" => Locale::Pt,
            _ => Locale::Es,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A string with per-locale variants and a designated default.
///
/// Mirrors the platform's localized field shape: Spanish is always
/// present, the other languages are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub es: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pt: Option<String>,
}

impl LocalizedText {
    /// Create a field with only the default language set.
    pub fn new(es: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: None,
            pt: None,
        }
    }

    /// Add an English translation.
    pub fn with_en(mut self, en: impl Into<String>) -> Self {
        self.en = Some(en.into());
        self
    }

    /// Add a Portuguese translation.
    pub fn with_pt(mut self, pt: impl Into<String>) -> Self {
        self.pt = Some(pt.into());
        self
    }

    /// Resolve the text for a locale, falling back to the default
    /// language when the requested translation is absent or empty.
    pub fn resolve(&self, locale: Locale) -> &str {
        let translated = match locale {
            Locale::Es => Some(self.es.as_str()),
            Locale::En => self.en.as_deref(),
            Locale::Pt => self.pt.as_deref(),
        };
        match translated {
            Some(text) if !text.is_empty() => text,
            _ => &self.es,
        }
    }
}
