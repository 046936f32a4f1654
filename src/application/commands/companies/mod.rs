// src/application/commands/companies/mod.rs
mod create;
mod profile;
mod service;
mod update;

pub use create::CreateCompanyCommand;
pub use profile::CompanyProfileInput;
pub use service::CompanyCommandService;
pub use update::UpdateCompanyCommand;
