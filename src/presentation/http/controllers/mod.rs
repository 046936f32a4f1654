// src/presentation/http/controllers/mod.rs
pub mod companies;
pub mod jobs;
pub mod tags;

pub(crate) fn default_limit() -> u32 {
    crate::application::queries::DEFAULT_LIMIT
}
