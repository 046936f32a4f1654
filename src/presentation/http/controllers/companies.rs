// src/presentation/http/controllers/companies.rs
use crate::application::{
    commands::companies::{CompanyProfileInput, CreateCompanyCommand, UpdateCompanyCommand},
    dto::CompanyDto,
    queries::companies::{GetCompanyBySlugQuery, ListCompaniesQuery},
};
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
pub struct CompanyListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Company form fields. Social links keep the short keys used by the form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompanyRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub revenue: Option<String>,
    pub phone: Option<String>,
    pub company_size: Option<String>,
    /// RFC 3339, `YYYY-MM-DD` or a year; anything else is ignored.
    pub founded: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

impl CompanyRequest {
    fn into_parts(self) -> (Option<String>, Option<String>, CompanyProfileInput) {
        let profile = CompanyProfileInput {
            description: self.description,
            location: self.location,
            revenue: self.revenue,
            phone: self.phone,
            company_size: self.company_size,
            founded: self.founded,
            logo_url: self.logo_url,
            website_url: self.website,
            twitter_url: self.twitter,
            facebook_url: self.facebook,
            linkedin_url: self.linkedin,
            youtube_url: self.youtube,
        };
        (self.name, self.email, profile)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/companies",
    params(CompanyListParams),
    responses((status = 200, description = "Newest companies first.", body = [CompanyDto])),
    tag = "Companies"
)]
pub async fn list_companies(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CompanyListParams>,
) -> HttpResult<Json<Vec<CompanyDto>>> {
    state
        .services
        .company_queries
        .list_companies(ListCompaniesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/companies/by-slug/{slug}",
    params(("slug" = String, Path, description = "Company slug")),
    responses(
        (status = 200, description = "Company found.", body = CompanyDto),
        (status = 404, description = "No company with this slug.", body = ErrorResponse)
    ),
    tag = "Companies"
)]
pub async fn get_company_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CompanyDto>> {
    state
        .services
        .company_queries
        .get_company_by_slug(GetCompanyBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/companies",
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Company created.", body = CompanyDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 409, description = "No free slug.", body = ErrorResponse)
    ),
    tag = "Companies"
)]
pub async fn create_company(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CompanyRequest>,
) -> HttpResult<Json<CompanyDto>> {
    let (name, email, profile) = payload.into_parts();
    state
        .services
        .company_commands
        .create_company(CreateCompanyCommand {
            name,
            email,
            profile,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/companies/{id}",
    params(("id" = i64, Path, description = "Company id")),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Company updated.", body = CompanyDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 404, description = "Company not found.", body = ErrorResponse),
        (status = 409, description = "No free slug.", body = ErrorResponse)
    ),
    tag = "Companies"
)]
pub async fn update_company(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<CompanyRequest>,
) -> HttpResult<Json<CompanyDto>> {
    let (name, email, profile) = payload.into_parts();
    state
        .services
        .company_commands
        .update_company(UpdateCompanyCommand {
            id,
            name,
            email,
            profile,
        })
        .await
        .into_http()
        .map(Json)
}
