// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::jobs::list_jobs,
        crate::presentation::http::controllers::jobs::get_job_by_slug,
        crate::presentation::http::controllers::jobs::create_job,
        crate::presentation::http::controllers::jobs::update_job,
        crate::presentation::http::controllers::companies::list_companies,
        crate::presentation::http::controllers::companies::get_company_by_slug,
        crate::presentation::http::controllers::companies::create_company,
        crate::presentation::http::controllers::companies::update_company,
        crate::presentation::http::controllers::tags::list_tags,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::jobs::CreateJobRequest,
            crate::presentation::http::controllers::jobs::UpdateJobRequest,
            crate::presentation::http::controllers::jobs::JobDetailsRequest,
            crate::presentation::http::controllers::jobs::JobTypeInput,
            crate::presentation::http::controllers::companies::CompanyRequest,
            crate::application::dto::JobDto,
            crate::application::dto::CompanyDto,
            crate::application::dto::TagDto
        )
    ),
    tags(
        (name = "Jobs", description = "Job listings"),
        (name = "Companies", description = "Employer companies"),
        (name = "Tags", description = "Job tags"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Job Board API",
        description = "Job board backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

pub fn snapshot_path_from_env() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string())
}
