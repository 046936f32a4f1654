// src/domain/job/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Job, JobDetails, JobUpdate, NewJob};
pub use repository::{JobListFilter, JobReadRepository, JobWriteRepository};
pub use value_objects::{CategoryId, JobDescription, JobId, JobStatus, JobTitle};
