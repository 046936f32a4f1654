// src/domain/job/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::job::entity::Job;
use crate::domain::job::repository::JobReadRepository;
use crate::domain::job::value_objects::JobTitle;
use crate::domain::slug::{Slug, SlugResolver};

const FALLBACK_SLUG: &str = "job";

/// Domain service responsible for producing unique slugs for jobs.
pub struct JobSlugService {
    read_repo: Arc<dyn JobReadRepository>,
    resolver: Arc<SlugResolver>,
}

impl JobSlugService {
    pub fn new(read_repo: Arc<dyn JobReadRepository>, resolver: Arc<SlugResolver>) -> Self {
        Self {
            read_repo,
            resolver,
        }
    }

    pub async fn slug_for_new(&self, title: &JobTitle) -> DomainResult<Slug> {
        let repo = self.read_repo.as_ref();
        self.resolver
            .for_create(title.as_str(), FALLBACK_SLUG, move |candidate: Slug| async move {
                repo.slug_exists(&candidate, None).await
            })
            .await
    }

    pub async fn slug_for_existing(&self, title: &JobTitle, job: &Job) -> DomainResult<Slug> {
        let repo = self.read_repo.as_ref();
        let exclude = Some(job.id);
        self.resolver
            .for_update(
                title.as_str(),
                job.title.as_str(),
                FALLBACK_SLUG,
                &job.slug,
                move |candidate: Slug| async move { repo.slug_exists(&candidate, exclude).await },
            )
            .await
    }
}
