// ⚙️ Configuration - Field bounds for a catalog
//
// Defaults match the published rules:
// - magazine name: 2-16 characters
// - article title: 5-50 characters
// - contributing author: strictly more than 2 articles in one magazine

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::validation::LengthRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub magazine_name: LengthRange,
    pub article_title: LengthRange,

    /// An author needs MORE than this many articles in a magazine
    pub contributor_threshold: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            magazine_name: LengthRange::new(2, 16),
            article_title: LengthRange::new(5, 50),
            contributor_threshold: 2,
        }
    }
}

impl Limits {
    /// Parse limits from JSON. Missing keys keep their defaults.
    ///
    /// Example: `{"article_title": {"min": 3, "max": 80}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let limits: Limits = serde_json::from_str(json).context("Failed to parse limits JSON")?;
        limits.validate()?;
        Ok(limits)
    }

    /// Reject ranges no value could ever satisfy
    pub fn validate(&self) -> Result<()> {
        for (field, range) in [
            ("magazine_name", self.magazine_name),
            ("article_title", self.article_title),
        ] {
            if range.min == 0 {
                bail!("{}: min must be at least 1", field);
            }
            if range.min > range.max {
                bail!("{}: min {} exceeds max {}", field, range.min, range.max);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();

        assert_eq!(limits.magazine_name, LengthRange::new(2, 16));
        assert_eq!(limits.article_title, LengthRange::new(5, 50));
        assert_eq!(limits.contributor_threshold, 2);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let limits = Limits::from_json(r#"{"article_title": {"min": 3, "max": 80}}"#).unwrap();

        assert_eq!(limits.article_title, LengthRange::new(3, 80));
        assert_eq!(limits.magazine_name, LengthRange::new(2, 16));
        assert_eq!(limits.contributor_threshold, 2);
    }

    #[test]
    fn test_from_json_rejects_inverted_range() {
        let result = Limits::from_json(r#"{"magazine_name": {"min": 10, "max": 4}}"#);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds max"));
    }

    #[test]
    fn test_from_json_rejects_zero_min() {
        let result = Limits::from_json(r#"{"article_title": {"min": 0, "max": 4}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Limits::from_json("not json").is_err());
    }
}
