// src/application/commands/jobs/tags.rs
use super::JobCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::tag::{TagId, canonical_tag_names, parse_tags},
};

impl JobCommandService {
    /// Normalize the raw tag list and map every name to a stored tag id,
    /// creating tags that do not exist yet.
    pub(super) async fn resolve_tag_ids(&self, raw: Option<&str>) -> ApplicationResult<Vec<TagId>> {
        let names = canonical_tag_names(parse_tags(raw), self.empty_tags)?;
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let tags = self.tag_repo.find_or_create(&names).await?;
        tracing::debug!(requested = names.len(), resolved = tags.len(), "tags resolved");
        Ok(tags.into_iter().map(|tag| tag.id).collect())
    }
}
