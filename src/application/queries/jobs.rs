// src/application/queries/jobs.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::JobDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        company::CompanyId,
        job::{JobListFilter, JobReadRepository},
        slug::Slug,
        tag::{EmptyTagPolicy, canonical_tag_names, parse_tags},
    },
};

use super::clamp_limit;

pub struct GetJobBySlugQuery {
    pub slug: String,
}

pub struct ListJobsQuery {
    /// Raw tag as typed by the user; normalized like submitted tag lists.
    /// More than one name after normalization is a validation error.
    pub tag: Option<String>,
    pub company_id: Option<i64>,
    pub limit: u32,
}

pub struct JobQueryService {
    read_repo: Arc<dyn JobReadRepository>,
}

impl JobQueryService {
    pub fn new(read_repo: Arc<dyn JobReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn get_job_by_slug(&self, query: GetJobBySlugQuery) -> ApplicationResult<JobDto> {
        let slug = Slug::new(query.slug).map_err(|_| ApplicationError::not_found("job not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(JobDto::from)
            .ok_or_else(|| ApplicationError::not_found("job not found"))
    }

    pub async fn list_jobs(&self, query: ListJobsQuery) -> ApplicationResult<Vec<JobDto>> {
        let mut names =
            canonical_tag_names(parse_tags(query.tag.as_deref()), EmptyTagPolicy::Drop)?;
        if names.len() > 1 {
            return Err(ApplicationError::validation("tag filter accepts a single tag"));
        }
        let tag = names.pop();
        let company_id = query.company_id.map(CompanyId::new).transpose()?;

        let filter = JobListFilter {
            tag,
            company_id,
            limit: clamp_limit(query.limit),
        };
        let jobs = self.read_repo.list(filter).await?;
        Ok(jobs.into_iter().map(JobDto::from).collect())
    }
}
