// src/presentation/http/controllers/tags.rs
use crate::application::dto::TagDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses((status = 200, description = "All tags, alphabetical.", body = [TagDto])),
    tag = "Tags"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .tag_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}
