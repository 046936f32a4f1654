// src/infrastructure/util.rs
use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::application::ports::util::{SlugGenerator, SuffixSource};
use crate::domain::slug::generate_slug;

const SUFFIX_RANGE: std::ops::RangeInclusive<u16> = 100..=999;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}

/// Uniform suffixes from the thread RNG, or from a seeded generator when
/// reproducible output is wanted.
#[derive(Default)]
pub enum RandomSuffixSource {
    #[default]
    Thread,
    Seeded(Mutex<StdRng>),
}

impl RandomSuffixSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => Self::Thread,
        }
    }
}

impl SuffixSource for RandomSuffixSource {
    fn next_suffix(&self) -> u16 {
        match self {
            Self::Thread => rand::rng().random_range(SUFFIX_RANGE),
            Self::Seeded(rng) => {
                // A poisoned lock still holds a usable generator.
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.random_range(SUFFIX_RANGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_stay_in_range() {
        for source in [RandomSuffixSource::from_seed(None), RandomSuffixSource::from_seed(Some(7))] {
            for _ in 0..2_000 {
                let value = source.next_suffix();
                assert!(SUFFIX_RANGE.contains(&value), "out of range: {value}");
            }
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = RandomSuffixSource::from_seed(Some(42));
        let b = RandomSuffixSource::from_seed(Some(42));
        let left: Vec<_> = (0..16).map(|_| a.next_suffix()).collect();
        let right: Vec<_> = (0..16).map(|_| b.next_suffix()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn default_generator_matches_domain_slug() {
        assert_eq!(
            DefaultSlugGenerator.slugify("Senior Backend Engineer!"),
            "senior-backend-engineer"
        );
    }
}
