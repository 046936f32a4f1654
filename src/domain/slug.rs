// src/domain/slug.rs
//! URL-safe identifiers for jobs and companies.
//!
//! A base slug is derived deterministically from a display name. Collisions
//! with already stored slugs are resolved by appending a random three digit
//! suffix drawn from an injected [`SuffixSource`]. The storage layer's unique
//! constraint stays the authoritative backstop: resolution only lowers the
//! odds of a duplicate, it cannot rule out a concurrent writer.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::application::ports::util::{SlugGenerator, SuffixSource};
use crate::domain::errors::{DomainError, DomainResult};

/// Lowercase, transliterate to ASCII, collapse every non-alphanumeric run
/// into a single hyphen and strip hyphens at both ends.
pub fn generate_slug(text: &str) -> String {
    ::slug::slugify(text)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits and hyphens",
            ));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::validation(
                "slug cannot start or end with a hyphen or contain consecutive hyphens",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `self` followed by `-<suffix>`. Digits keep the result valid.
    pub fn with_suffix(&self, suffix: u16) -> Self {
        Self(format!("{}-{}", self.0, suffix))
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// How many suffixed candidates are tried once the base slug is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionStrategy {
    /// One suffixed candidate, returned without checking it again.
    SingleRetry,
    /// Fresh suffixes until one is free; a conflict after `max_attempts`.
    Bounded { max_attempts: u32 },
}

impl Default for CollisionStrategy {
    fn default() -> Self {
        Self::Bounded { max_attempts: 10 }
    }
}

/// Return `base` if `exists` reports it free, otherwise a suffixed variant
/// chosen according to `strategy`. Errors from `exists` are returned as-is.
pub async fn resolve_unique_slug<F, Fut, E>(
    base: Slug,
    suffixes: &dyn SuffixSource,
    strategy: CollisionStrategy,
    mut exists: F,
) -> Result<Slug, E>
where
    F: FnMut(Slug) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: From<DomainError>,
{
    if !exists(base.clone()).await? {
        return Ok(base);
    }

    match strategy {
        CollisionStrategy::SingleRetry => Ok(base.with_suffix(suffixes.next_suffix())),
        CollisionStrategy::Bounded { max_attempts } => {
            for _ in 0..max_attempts {
                let candidate = base.with_suffix(suffixes.next_suffix());
                if !exists(candidate.clone()).await? {
                    return Ok(candidate);
                }
            }
            tracing::warn!(base = %base, max_attempts, "slug suffixes exhausted");
            Err(DomainError::conflict(format!(
                "no free slug for `{base}` after {max_attempts} attempts"
            ))
            .into())
        }
    }
}

/// Domain service shared by the job and company slug services.
pub struct SlugResolver {
    generator: Arc<dyn SlugGenerator>,
    suffixes: Arc<dyn SuffixSource>,
    strategy: CollisionStrategy,
}

impl SlugResolver {
    pub fn new(
        generator: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixSource>,
        strategy: CollisionStrategy,
    ) -> Self {
        Self {
            generator,
            suffixes,
            strategy,
        }
    }

    /// Base slug for `text`, or `fallback` when the text has no alphanumerics.
    pub fn base_slug(&self, text: &str, fallback: &str) -> DomainResult<Slug> {
        let base = self.generator.slugify(text);
        if base.is_empty() {
            Slug::new(fallback)
        } else {
            Slug::new(base)
        }
    }

    pub async fn for_create<F, Fut>(&self, text: &str, fallback: &str, exists: F) -> DomainResult<Slug>
    where
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<bool>>,
    {
        let base = self.base_slug(text, fallback)?;
        resolve_unique_slug(base, self.suffixes.as_ref(), self.strategy, exists).await
    }

    /// Keeps `current` untouched, without consulting `exists`, when `text`
    /// produces the same base slug as `previous_text` did. A suffixed slug
    /// therefore survives edits that leave the name alone.
    pub async fn for_update<F, Fut>(
        &self,
        text: &str,
        previous_text: &str,
        fallback: &str,
        current: &Slug,
        exists: F,
    ) -> DomainResult<Slug>
    where
        F: FnMut(Slug) -> Fut,
        Fut: Future<Output = DomainResult<bool>>,
    {
        let base = self.base_slug(text, fallback)?;
        if &base == current || base == self.base_slug(previous_text, fallback)? {
            return Ok(current.clone());
        }
        resolve_unique_slug(base, self.suffixes.as_ref(), self.strategy, exists).await
    }
}
