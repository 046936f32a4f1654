// src/domain/job/entity.rs
use crate::domain::company::CompanyId;
use crate::domain::job::value_objects::{CategoryId, JobDescription, JobId, JobStatus, JobTitle};
use crate::domain::slug::Slug;
use crate::domain::tag::{Tag, TagId};
use chrono::{DateTime, Utc};

/// Free-form listing details. None of them take part in slugging or search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDetails {
    pub image: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
    pub office_days: Option<String>,
    pub holidays: Option<String>,
    pub office_start_time: Option<String>,
    pub office_end_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub company_id: CompanyId,
    pub category_id: CategoryId,
    pub title: JobTitle,
    pub slug: Slug,
    pub description: JobDescription,
    pub details: JobDetails,
    pub status: JobStatus,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_id: CompanyId,
    pub category_id: CategoryId,
    pub title: JobTitle,
    pub slug: Slug,
    pub description: JobDescription,
    pub details: JobDetails,
    pub status: JobStatus,
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of a job's editable fields. `tag_ids` replaces the
/// existing associations rather than extending them.
#[derive(Debug, Clone)]
pub struct JobUpdate {
    pub id: JobId,
    pub category_id: CategoryId,
    pub title: JobTitle,
    pub slug: Slug,
    pub description: JobDescription,
    pub details: JobDetails,
    pub tag_ids: Vec<TagId>,
    pub updated_at: DateTime<Utc>,
}
