pub mod storage;
pub mod types;

pub use storage::{get_preferences_path, load_preference, save_preference};
pub use types::{LocalePreference, PREFERENCE_TTL_DAYS};

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::i18n::Locale;

/// Decide the startup locale.
///
/// Order: saved (unexpired) preference, then the configured locale, then the
/// `LANG`-style environment value. An unreadable preference file is logged
/// and skipped.
pub fn resolve_locale(
    path: &Path,
    configured: Option<Locale>,
    env_lang: Option<&str>,
    now: DateTime<Utc>,
) -> Locale {
    match load_preference(path, now) {
        Ok(Some(pref)) => return pref.locale,
        Ok(None) => {}
        Err(e) => log::warn!("Ignoring locale preference: {:#}", e),
    }

    if let Some(locale) = configured {
        return locale;
    }

    Locale::from_env_lang(env_lang.unwrap_or(""))
}
