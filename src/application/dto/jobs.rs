// src/application/dto/jobs.rs
use crate::domain::job::Job;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{TagDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobDto {
    pub id: i64,
    pub company_id: i64,
    pub category_id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub status: String,
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
    pub tags: Vec<TagDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        let details = job.details;
        Self {
            id: job.id.into(),
            company_id: job.company_id.into(),
            category_id: job.category_id.into(),
            title: job.title.into_inner(),
            slug: job.slug.into_inner(),
            description: job.description.into_inner(),
            status: job.status.to_string(),
            image: details.image,
            job_type: details.job_type,
            location: details.location,
            salary_range: details.salary_range,
            position: details.position,
            experience: details.experience,
            office_days: details.office_days,
            holidays: details.holidays,
            office_start_time: details.office_start_time,
            office_end_time: details.office_end_time,
            tags: job.tags.into_iter().map(TagDto::from).collect(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
