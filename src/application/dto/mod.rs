// src/application/dto/mod.rs
pub mod companies;
pub mod jobs;
pub mod serde_time;
pub mod tags;

pub use companies::CompanyDto;
pub use jobs::JobDto;
pub use tags::TagDto;
