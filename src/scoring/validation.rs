use std::collections::HashSet;

use super::config::SubjectConfig;

/// Validate a subject catalog at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(subjects: &[SubjectConfig]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if subjects.is_empty() {
        errors.push("subjects: at least one subject is required".to_string());
    }

    let mut seen = HashSet::new();
    for (i, subject) in subjects.iter().enumerate() {
        let name = subject.name.trim();
        if name.is_empty() {
            errors.push(format!("subjects[{}].name: must not be empty", i));
        } else if !seen.insert(name.to_string()) {
            errors.push(format!("subjects[{}].name: duplicate subject '{}'", i, name));
        }

        if subject.max_marks == 0 {
            errors.push(format!(
                "subjects[{}].max_marks: must be positive (got 0 for '{}')",
                i, subject.name
            ));
        }
    }

    let total = subjects
        .iter()
        .try_fold(0u32, |acc, s| acc.checked_add(s.max_marks));
    if total.is_none() {
        errors.push(format!("subjects: total max_marks exceeds {}", u32::MAX));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::default_catalog;

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(validate_catalog(&default_catalog()).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let errors = validate_catalog(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at least one subject"));
    }

    #[test]
    fn test_zero_max_marks() {
        let catalog = vec![SubjectConfig::new("english", 0)];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("subjects[0].max_marks"));
    }

    #[test]
    fn test_duplicate_name() {
        let catalog = vec![
            SubjectConfig::new("english", 100),
            SubjectConfig::new("english", 50),
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors[0].contains("subjects[1].name: duplicate"));
    }

    #[test]
    fn test_total_max_marks_overflow() {
        let catalog = vec![
            SubjectConfig::new("a", u32::MAX),
            SubjectConfig::new("b", 1),
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("total max_marks exceeds"));
    }

    #[test]
    fn test_large_total_that_fits_is_valid() {
        let catalog = vec![
            SubjectConfig::new("a", u32::MAX - 1),
            SubjectConfig::new("b", 1),
        ];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let catalog = vec![
            SubjectConfig::new("", 10),       // Error 1
            SubjectConfig::new("arabic", 0),  // Error 2
            SubjectConfig::new("arabic", 40), // Error 3
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
