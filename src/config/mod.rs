mod schema;

pub use schema::{Config, PdfConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::{default_catalog, SubjectConfig};

/// Get the config directory path (~/.config/tawjihi/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("tawjihi"))
}

/// Get the default config file path (~/.config/tawjihi/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Ensure the config directory exists
pub fn ensure_config_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
    }
    Ok(())
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/tawjihi/config.yaml)
///
/// A missing file at the default path yields the default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

pub fn parse_config(yaml: &str) -> Result<Config> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_saphyr::from_str(yaml)?;
    Ok(config)
}

impl Config {
    /// The subject catalog in effect: the configured one, or the built-in four subjects.
    pub fn catalog(&self) -> Vec<SubjectConfig> {
        self.subjects.clone().unwrap_or_else(default_catalog)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog(), default_catalog());
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
locale: ar
output_dir: /tmp/certs
subjects:
  - { name: english, max_marks: 100 }
  - { name: physics, max_marks: 50 }
pdf:
  font_dir: /usr/share/fonts/truetype/dejavu
  font_family: DejaVuSans
  latin_labels: true
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.locale, Some(Locale::Ar));
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/certs"));
        assert_eq!(config.catalog().len(), 2);
        let pdf = config.pdf.unwrap();
        assert_eq!(pdf.font_family.as_deref(), Some("DejaVuSans"));
        assert!(pdf.latin_labels);
    }

    #[test]
    fn test_pdf_latin_labels_default_on() {
        let config = parse_config("pdf:\n  font_dir: /opt/fonts\n").unwrap();
        assert!(config.pdf.unwrap().latin_labels);

        let config = parse_config("pdf:\n  latin_labels: false\n").unwrap();
        assert!(!config.pdf.unwrap().latin_labels);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_config("theme: dark\n").is_err());
    }

    #[test]
    fn test_invalid_locale_rejected() {
        assert!(parse_config("locale: fr\n").is_err());
    }

    #[test]
    fn test_missing_explicit_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = load_config(Some(missing)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "locale: en\n").unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.locale, Some(Locale::En));
    }

    #[test]
    fn test_ensure_config_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_config_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
