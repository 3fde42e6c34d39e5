use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// How long a saved locale stays valid after its last write.
pub const PREFERENCE_TTL_DAYS: i64 = 365;

/// The single persisted preference: the display locale, with an expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalePreference {
    pub version: u32,
    pub locale: Locale,
    pub saved_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl LocalePreference {
    pub fn new(locale: Locale, now: DateTime<Utc>) -> Self {
        Self {
            version: 1,
            locale,
            saved_at: now,
            expires_at: now + Duration::days(PREFERENCE_TTL_DAYS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expires_in_a_year() {
        let now = Utc::now();
        let pref = LocalePreference::new(Locale::Ar, now);
        assert_eq!(pref.version, 1);
        assert_eq!(pref.expires_at - pref.saved_at, Duration::days(365));
        assert!(!pref.is_expired(now));
        assert!(!pref.is_expired(now + Duration::days(364)));
        assert!(pref.is_expired(now + Duration::days(365)));
    }
}
