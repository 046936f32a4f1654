// src/application/commands/mod.rs
pub mod companies;
pub mod jobs;
