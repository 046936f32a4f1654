// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_company;
mod postgres_job;
mod postgres_tag;

pub use error::map_sqlx;
pub use postgres_company::{PostgresCompanyReadRepository, PostgresCompanyWriteRepository};
pub use postgres_job::{PostgresJobReadRepository, PostgresJobWriteRepository};
pub use postgres_tag::PostgresTagRepository;
