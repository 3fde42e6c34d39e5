use super::types::LocalePreference;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::i18n::Locale;

/// Get the default preference file path (~/.config/tawjihi/preferences.json)
pub fn get_preferences_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("preferences.json"))
}

/// Load the saved locale preference from a JSON file
///
/// Returns `None` if the file doesn't exist or the preference has expired.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_preference(path: &Path, now: DateTime<Utc>) -> Result<Option<LocalePreference>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open preference file at {}", path.display()))?;

    let pref: LocalePreference =
        serde_json::from_reader(file).context("Failed to load locale preference")?;

    if pref.version != 1 {
        anyhow::bail!("Unsupported preference file version: {}", pref.version);
    }

    if pref.is_expired(now) {
        log::debug!("Locale preference expired at {}", pref.expires_at);
        return Ok(None);
    }

    Ok(Some(pref))
}

/// Save the locale preference atomically, renewing its expiry
///
/// Creates the parent directory if it doesn't exist.
pub fn save_preference(path: &Path, locale: Locale, now: DateTime<Utc>) -> Result<LocalePreference> {
    if let Some(parent) = path.parent() {
        crate::config::ensure_config_dir(parent)?;
    }

    let pref = LocalePreference::new(locale, now);

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, &pref).context("Failed to serialize locale preference")?;

    file.commit().context("Failed to save locale preference")?;

    Ok(pref)
}
