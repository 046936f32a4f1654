// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Source of collision suffixes. Every value must lie in `100..=999`.
pub trait SuffixSource: Send + Sync {
    fn next_suffix(&self) -> u16;
}
