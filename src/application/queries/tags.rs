// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::tag::TagRepository,
};

pub struct TagQueryService {
    tag_repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>) -> Self {
        Self { tag_repo }
    }

    /// All tags, alphabetical.
    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let mut tags = self.tag_repo.list().await?;
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}
