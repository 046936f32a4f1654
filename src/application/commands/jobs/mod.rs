// src/application/commands/jobs/mod.rs
mod create;
mod service;
mod tags;
mod update;

pub use create::{CreateJobCommand, CreateJobCommandBuilder};
pub use service::JobCommandService;
pub use update::UpdateJobCommand;
