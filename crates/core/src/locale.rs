//! Content locales.
//!
//! Translations are stored per locale code (`"en"`, `"fr"`, ...). The
//! publishing layer passes a [`Locale`] explicitly into every presenter
//! call instead of relying on a process-wide "current locale".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Locale every translatable record is guaranteed to have.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale codes content may be translated into.
pub const SUPPORTED_LOCALES: &[&str] = &[
    "en", "ar", "az", "be", "bg", "bn", "cs", "cy", "de", "dr", "el", "es", "es-419", "et", "fa",
    "fr", "he", "hi", "hu", "hy", "id", "it", "ja", "ka", "ko", "lt", "lv", "ms", "pl", "ps", "pt",
    "ro", "ru", "si", "sk", "so", "sq", "sr", "sw", "ta", "th", "tk", "tr", "uk", "ur", "uz", "vi",
    "zh", "zh-hk", "zh-tw",
];

/// A validated locale code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// The default (`en`) locale.
    pub fn default_locale() -> Self {
        Locale(DEFAULT_LOCALE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        if SUPPORTED_LOCALES.contains(&code.as_str()) {
            Ok(Locale(code))
        } else {
            Err(CoreError::Validation(format!(
                "Unsupported locale '{s}'"
            )))
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
