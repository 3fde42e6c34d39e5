use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

const PREFIX: &str = "tawjihi-result";
const MAX_SLUG_CHARS: usize = 40;

/// Reduce a student name to something safe in a file name.
///
/// Letters and digits of any script are kept (lowercased); every other run
/// of characters becomes a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug.chars().take(MAX_SLUG_CHARS).collect::<String>().trim_end_matches('-').to_string()
}

/// File stem `tawjihi-result-<name>-<millis>`; the name part is omitted when blank.
pub fn file_stem(student_name: &str, now: DateTime<Utc>) -> String {
    let slug = slugify(student_name);
    let millis = now.timestamp_millis();
    if slug.is_empty() {
        format!("{}-{}", PREFIX, millis)
    } else {
        format!("{}-{}-{}", PREFIX, slug, millis)
    }
}

/// `dir/stem.ext`, or `dir/stem-N.ext` for the first N that does not exist yet.
pub fn unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let candidate = dir.join(format!("{}.{}", stem, ext));
    if !candidate.exists() {
        return candidate;
    }
    (1u32..)
        .map(|n| dir.join(format!("{}-{}.{}", stem, n, ext)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sara Khalil"), "sara-khalil");
        assert_eq!(slugify("  O'Brien / Jr. "), "o-brien-jr");
        assert_eq!(slugify("ليلى أحمد"), "ليلى-أحمد");
        assert_eq!(slugify("../../etc"), "etc");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slug_length_capped() {
        let long = "a".repeat(100);
        assert_eq!(slugify(&long).chars().count(), MAX_SLUG_CHARS);
    }

    #[test]
    fn test_file_stem() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(file_stem("Sara", now), "tawjihi-result-sara-1700000000123");
        assert_eq!(file_stem("", now), "tawjihi-result-1700000000123");
    }

    #[test]
    fn test_unique_path_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let first = unique_path(dir.path(), "cert", "txt");
        assert_eq!(first, dir.path().join("cert.txt"));
        std::fs::write(&first, "x").unwrap();

        let second = unique_path(dir.path(), "cert", "txt");
        assert_eq!(second, dir.path().join("cert-1.txt"));
        std::fs::write(&second, "x").unwrap();

        assert_eq!(unique_path(dir.path(), "cert", "txt"), dir.path().join("cert-2.txt"));
        // Different extension does not collide
        assert_eq!(unique_path(dir.path(), "cert", "pdf"), dir.path().join("cert.pdf"));
    }
}
