mod translations;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language. Exactly two locales are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Guess a locale from a POSIX locale string such as `ar_JO.UTF-8`.
    /// Anything not starting with `ar` maps to English.
    pub fn from_env_lang(lang: &str) -> Self {
        if lang.trim().to_ascii_lowercase().starts_with("ar") {
            Locale::Ar
        } else {
            Locale::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => bail!("Unsupported locale '{}': expected 'en' or 'ar'", other),
        }
    }
}

/// Dictionary lookup for one locale.
///
/// Passed explicitly to whatever renders user-facing text; there is no
/// process-wide "current language".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up `key`, falling back to the key itself when it has no entry.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translations::lookup(self.locale, key).unwrap_or(key)
    }

    /// Display name of a subject identifier. Unknown identifiers pass through unchanged.
    pub fn subject_name<'a>(&self, subject: &'a str) -> &'a str {
        translations::subject(self.locale, subject).unwrap_or(subject)
    }
}
