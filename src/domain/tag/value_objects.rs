// src/domain/tag/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("tag id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Canonical tag name: lowercase, no whitespace, not wrapped in quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("tag name cannot be empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("tag name cannot contain whitespace"));
        }
        // Some capitals (e.g. `ℝ`) have no lowercase form and are kept as-is.
        if value.to_lowercase() != value {
            return Err(DomainError::validation("tag name must be lowercase"));
        }
        if value.len() > 1 && value.starts_with('"') && value.ends_with('"') {
            return Err(DomainError::validation("tag name cannot be quoted"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do with empty tokens, e.g. from a trailing comma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyTagPolicy {
    #[default]
    Drop,
    Reject,
}

impl FromStr for EmptyTagPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            other => Err(DomainError::validation(format!(
                "unknown empty tag policy `{other}` (expected `drop` or `reject`)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_name_accepts_letters_without_lowercase_form() {
        assert_eq!(TagName::new("ℝ").unwrap().as_str(), "ℝ");
        assert_eq!(TagName::new("𝐀𝐁").unwrap().as_str(), "𝐀𝐁");
    }

    #[test]
    fn tag_name_rejects_lowercasable_capitals() {
        assert!(matches!(TagName::new("Rust"), Err(DomainError::Validation(_))));
        assert!(matches!(TagName::new("Ⅻ"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn tag_name_rejects_whitespace_and_quotes() {
        assert!(TagName::new("a b").is_err());
        assert!(TagName::new("\"go\"").is_err());
        assert!(TagName::new("").is_err());
    }

    #[test]
    fn empty_tag_policy_parses() {
        assert_eq!("drop".parse::<EmptyTagPolicy>().unwrap(), EmptyTagPolicy::Drop);
        assert_eq!("reject".parse::<EmptyTagPolicy>().unwrap(), EmptyTagPolicy::Reject);
        assert!("keep".parse::<EmptyTagPolicy>().is_err());
    }
}
