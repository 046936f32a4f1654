// src/domain/company/services.rs
use std::sync::Arc;

use crate::domain::company::entity::Company;
use crate::domain::company::repository::CompanyReadRepository;
use crate::domain::company::value_objects::CompanyName;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugResolver};

const FALLBACK_SLUG: &str = "company";

/// Domain service responsible for producing unique slugs for companies.
pub struct CompanySlugService {
    read_repo: Arc<dyn CompanyReadRepository>,
    resolver: Arc<SlugResolver>,
}

impl CompanySlugService {
    pub fn new(read_repo: Arc<dyn CompanyReadRepository>, resolver: Arc<SlugResolver>) -> Self {
        Self {
            read_repo,
            resolver,
        }
    }

    pub async fn slug_for_new(&self, name: &CompanyName) -> DomainResult<Slug> {
        let repo = self.read_repo.as_ref();
        self.resolver
            .for_create(name.as_str(), FALLBACK_SLUG, move |candidate: Slug| async move {
                repo.slug_exists(&candidate, None).await
            })
            .await
    }

    pub async fn slug_for_existing(
        &self,
        name: &CompanyName,
        company: &Company,
    ) -> DomainResult<Slug> {
        let repo = self.read_repo.as_ref();
        let exclude = Some(company.id);
        self.resolver
            .for_update(
                name.as_str(),
                company.name.as_str(),
                FALLBACK_SLUG,
                &company.slug,
                move |candidate: Slug| async move { repo.slug_exists(&candidate, exclude).await },
            )
            .await
    }
}
