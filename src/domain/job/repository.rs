// src/domain/job/repository.rs
use crate::domain::company::CompanyId;
use crate::domain::errors::DomainResult;
use crate::domain::job::entity::{Job, JobUpdate, NewJob};
use crate::domain::job::value_objects::JobId;
use crate::domain::slug::Slug;
use crate::domain::tag::TagName;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct JobListFilter {
    pub tag: Option<TagName>,
    pub company_id: Option<CompanyId>,
    pub limit: u32,
}

#[async_trait]
pub trait JobWriteRepository: Send + Sync {
    async fn insert(&self, job: NewJob) -> DomainResult<Job>;
    async fn update(&self, update: JobUpdate) -> DomainResult<Job>;
}

#[async_trait]
pub trait JobReadRepository: Send + Sync {
    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Job>>;
    /// Whether a job other than `exclude` already uses `slug`.
    async fn slug_exists(&self, slug: &Slug, exclude: Option<JobId>) -> DomainResult<bool>;
    /// Newest first.
    async fn list(&self, filter: JobListFilter) -> DomainResult<Vec<Job>>;
}
