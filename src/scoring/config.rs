use serde::{Deserialize, Serialize};

/// Scale of the weighted percentage: the first year contributes 30% of the final average.
pub const WEIGHT: f64 = 30.0;

/// One catalog entry: a subject identifier and its maximum mark.
///
/// Example YAML:
/// ```yaml
/// subjects:
///   - { name: english, max_marks: 100 }
///   - { name: arabic, max_marks: 100 }
///   - { name: islamic, max_marks: 60 }
///   - { name: history, max_marks: 40 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubjectConfig {
    /// Subject identifier; known identifiers get a translated display name
    pub name: String,

    /// Maximum attainable mark, must be positive
    pub max_marks: u32,
}

impl SubjectConfig {
    pub fn new(name: &str, max_marks: u32) -> Self {
        Self {
            name: name.to_string(),
            max_marks,
        }
    }
}

/// The fixed first-year catalog: english=100, arabic=100, islamic=60, history=40.
pub fn default_catalog() -> Vec<SubjectConfig> {
    vec![
        SubjectConfig::new("english", 100),
        SubjectConfig::new("arabic", 100),
        SubjectConfig::new("islamic", 60),
        SubjectConfig::new("history", 40),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_totals_300() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 4);
        let total: u32 = catalog.iter().map(|s| s.max_marks).sum();
        assert_eq!(total, 300);
    }

    #[test]
    fn test_default_catalog_order() {
        let names: Vec<_> = default_catalog().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["english", "arabic", "islamic", "history"]);
    }

    #[test]
    fn test_subject_config_parse() {
        let yaml = r#"
- name: english
  max_marks: 100
- { name: physics, max_marks: 50 }
"#;
        let parsed: Vec<SubjectConfig> = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], SubjectConfig::new("physics", 50));
    }

    #[test]
    fn test_subject_config_rejects_unknown_fields() {
        let yaml = "name: english\nmax_marks: 100\nweight: 2\n";
        let parsed: Result<SubjectConfig, _> = serde_saphyr::from_str(yaml);
        assert!(parsed.is_err());
    }
}
