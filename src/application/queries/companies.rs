// src/application/queries/companies.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CompanyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{company::CompanyReadRepository, slug::Slug},
};

use super::clamp_limit;

pub struct GetCompanyBySlugQuery {
    pub slug: String,
}

pub struct ListCompaniesQuery {
    pub limit: u32,
}

pub struct CompanyQueryService {
    read_repo: Arc<dyn CompanyReadRepository>,
}

impl CompanyQueryService {
    pub fn new(read_repo: Arc<dyn CompanyReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_company_by_slug(
        &self,
        query: GetCompanyBySlugQuery,
    ) -> ApplicationResult<CompanyDto> {
        // Malformed slugs can never match a stored one.
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("company not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(CompanyDto::from)
            .ok_or_else(|| ApplicationError::not_found("company not found"))
    }

    pub async fn list_companies(
        &self,
        query: ListCompaniesQuery,
    ) -> ApplicationResult<Vec<CompanyDto>> {
        let companies = self.read_repo.list(clamp_limit(query.limit)).await?;
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }
}
