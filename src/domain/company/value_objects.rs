// src/domain/company/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(i64);

impl CompanyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("company id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CompanyId> for i64 {
    fn from(value: CompanyId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
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

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyEmail(String);

impl CompanyEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("company email cannot be empty"));
        }
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(Self(value)),
            _ => Err(DomainError::validation("company email is malformed")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_blank() {
        assert!(CompanyName::new("   ").is_err());
        assert_eq!(CompanyName::new("Acme").unwrap().as_str(), "Acme");
    }

    #[test]
    fn email_requires_local_and_domain() {
        assert!(CompanyEmail::new("").is_err());
        assert!(CompanyEmail::new("nobody").is_err());
        assert!(CompanyEmail::new("@acme.io").is_err());
        assert_eq!(
            CompanyEmail::new(" jobs@acme.io ").unwrap().as_str(),
            "jobs@acme.io"
        );
    }

    #[test]
    fn id_must_be_positive() {
        assert!(CompanyId::new(0).is_err());
        assert_eq!(i64::from(CompanyId::new(7).unwrap()), 7);
    }
}
