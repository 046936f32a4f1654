// src/domain/company/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Company, CompanyProfile, CompanyUpdate, NewCompany};
pub use repository::{CompanyReadRepository, CompanyWriteRepository};
pub use value_objects::{CompanyEmail, CompanyId, CompanyName};
