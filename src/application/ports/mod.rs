// src/application/ports/mod.rs
pub mod time;
pub mod util;

// Trait objects injected into the services.
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type SuffixSourcePort = dyn util::SuffixSource;
