// src/presentation/http/controllers/jobs.rs
use crate::application::{
    commands::jobs::{CreateJobCommand, UpdateJobCommand},
    dto::JobDto,
    queries::jobs::{GetJobBySlugQuery, ListJobsQuery},
};
use crate::domain::job::JobDetails;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::default_limit;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct JobListParams {
    /// Only jobs carrying this tag. Normalized like submitted tags; a value
    /// naming more than one tag (e.g. `rust,go`) is rejected with 400.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Either `"full-time"` or `{ "value": "full-time" }`, as sent by select widgets.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum JobTypeInput {
    Labeled { value: String },
    Plain(String),
}

impl From<JobTypeInput> for String {
    fn from(value: JobTypeInput) -> Self {
        match value {
            JobTypeInput::Labeled { value } | JobTypeInput::Plain(value) => value,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct JobDetailsRequest {
    pub image: Option<String>,
    pub job_type: Option<JobTypeInput>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
    pub office_days: Option<String>,
    pub holidays: Option<String>,
    pub office_start_time: Option<String>,
    pub office_end_time: Option<String>,
}

impl From<JobDetailsRequest> for JobDetails {
    fn from(value: JobDetailsRequest) -> Self {
        Self {
            image: value.image,
            job_type: value.job_type.map(String::from),
            location: value.location,
            salary_range: value.salary_range,
            position: value.position,
            experience: value.experience,
            office_days: value.office_days,
            holidays: value.holidays,
            office_start_time: value.office_start_time,
            office_end_time: value.office_end_time,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateJobRequest {
    pub company_id: Option<i64>,
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma separated; double quotes protect commas inside a tag.
    pub tags: Option<String>,
    #[serde(flatten)]
    pub details: JobDetailsRequest,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateJobRequest {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    #[serde(flatten)]
    pub details: JobDetailsRequest,
}

#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    params(JobListParams),
    responses(
        (status = 200, description = "Newest jobs first.", body = [JobDto]),
        (status = 400, description = "Invalid filter, e.g. more than one tag.", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
pub async fn list_jobs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<JobListParams>,
) -> HttpResult<Json<Vec<JobDto>>> {
    state
        .services
        .job_queries
        .list_jobs(ListJobsQuery {
            tag: params.tag,
            company_id: params.company_id,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/jobs/by-slug/{slug}",
    params(("slug" = String, Path, description = "Job slug")),
    responses(
        (status = 200, description = "Job found.", body = JobDto),
        (status = 404, description = "No job with this slug.", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
pub async fn get_job_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<JobDto>> {
    state
        .services
        .job_queries
        .get_job_by_slug(GetJobBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 200, description = "Job created.", body = JobDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 404, description = "Unknown company or category.", body = ErrorResponse),
        (status = 409, description = "No free slug.", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
pub async fn create_job(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateJobRequest>,
) -> HttpResult<Json<JobDto>> {
    let command = CreateJobCommand {
        company_id: payload.company_id,
        category_id: payload.category_id,
        title: payload.title,
        description: payload.description,
        details: payload.details.into(),
        tags: payload.tags,
    };

    state
        .services
        .job_commands
        .create_job(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/jobs/{id}",
    params(("id" = i64, Path, description = "Job id")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated.", body = JobDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 404, description = "Job not found.", body = ErrorResponse),
        (status = 409, description = "No free slug.", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
pub async fn update_job(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateJobRequest>,
) -> HttpResult<Json<JobDto>> {
    let command = UpdateJobCommand {
        id,
        category_id: payload.category_id,
        title: payload.title,
        description: payload.description,
        details: payload.details.into(),
        tags: payload.tags,
    };

    state
        .services
        .job_commands
        .update_job(command)
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_accepts_string_or_object() {
        let plain: CreateJobRequest =
            serde_json::from_str(r#"{"title":"t","job_type":"Full Time"}"#).unwrap();
        let labeled: CreateJobRequest =
            serde_json::from_str(r#"{"title":"t","job_type":{"value":"Full Time","label":"x"}}"#)
                .unwrap();
        let plain: JobDetails = plain.details.into();
        let labeled: JobDetails = labeled.details.into();
        assert_eq!(plain.job_type.as_deref(), Some("Full Time"));
        assert_eq!(labeled.job_type.as_deref(), Some("Full Time"));
    }
}
