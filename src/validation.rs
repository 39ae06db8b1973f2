// 🛂 Validation Layer - Field rules shared by every entity
//
// Two failure kinds only:
// - InvalidType:  a reference that does not name the right kind of entity
// - InvalidValue: right type, value out of range (length, emptiness)
//
// Silent-discard setters never see these errors. They call the same helpers
// and simply drop the update when a helper says no.

use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid type for `{field}`: {reason}")]
    InvalidType { field: &'static str, reason: String },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl CatalogError {
    pub fn invalid_type(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidType {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Field the failure is about (e.g. "title")
    pub fn field(&self) -> &'static str {
        match self {
            CatalogError::InvalidType { field, .. } | CatalogError::InvalidValue { field, .. } => {
                field
            }
        }
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, CatalogError::InvalidType { .. })
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, CatalogError::InvalidValue { .. })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// FIELD RULES
// ============================================================================

/// Inclusive length bounds, counted in chars rather than bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize) -> Self {
        LengthRange { min, max }
    }

    pub fn contains(&self, value: &str) -> bool {
        let len = value.chars().count();
        self.min <= len && len <= self.max
    }
}

/// String whose char count lies inside `range`
pub fn bounded_len(field: &'static str, value: &str, range: LengthRange) -> CatalogResult<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(CatalogError::invalid_value(
            field,
            format!(
                "must be {}-{} characters, got {}",
                range.min,
                range.max,
                value.chars().count()
            ),
        ))
    }
}

/// String with at least one character (whitespace counts)
pub fn non_empty(field: &'static str, value: &str) -> CatalogResult<()> {
    if value.is_empty() {
        Err(CatalogError::invalid_value(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// String with at least one non-whitespace character
pub fn non_blank(field: &'static str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        Err(CatalogError::invalid_value(field, "must not be blank"))
    } else {
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_len_is_inclusive() {
        let range = LengthRange::new(5, 50);

        assert!(bounded_len("title", "abcd", range).is_err());
        assert!(bounded_len("title", "abcde", range).is_ok());
        assert!(bounded_len("title", &"x".repeat(50), range).is_ok());
        assert!(bounded_len("title", &"x".repeat(51), range).is_err());
    }

    #[test]
    fn test_bounded_len_counts_chars_not_bytes() {
        let range = LengthRange::new(2, 3);

        // 3 chars, 6 bytes
        assert!(bounded_len("name", "ééé", range).is_ok());
    }

    #[test]
    fn test_non_empty_allows_whitespace() {
        assert!(non_empty("category", " ").is_ok());
        assert!(non_empty("category", "").is_err());
    }

    #[test]
    fn test_non_blank_rejects_whitespace() {
        let err = non_blank("name", "   \t").unwrap_err();

        assert!(err.is_invalid_value());
        assert_eq!(err.field(), "name");
        assert!(non_blank("name", " Carol ").is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::invalid_type("author", "unknown author id");
        assert_eq!(err.to_string(), "invalid type for `author`: unknown author id");
        assert!(err.is_invalid_type());
        assert!(!err.is_invalid_value());
    }
}
