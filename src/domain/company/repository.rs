// src/domain/company/repository.rs
use crate::domain::company::entity::{Company, CompanyUpdate, NewCompany};
use crate::domain::company::value_objects::CompanyId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CompanyWriteRepository: Send + Sync {
    async fn insert(&self, company: NewCompany) -> DomainResult<Company>;
    async fn update(&self, update: CompanyUpdate) -> DomainResult<Company>;
}

#[async_trait]
pub trait CompanyReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Company>>;
    /// Whether a company other than `exclude` already uses `slug`.
    async fn slug_exists(&self, slug: &Slug, exclude: Option<CompanyId>) -> DomainResult<bool>;
    async fn list(&self, limit: u32) -> DomainResult<Vec<Company>>;
}
