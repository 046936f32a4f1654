// src/application/commands/jobs/update.rs
use super::JobCommandService;
use crate::{
    application::{
        dto::JobDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::job::{CategoryId, JobDescription, JobDetails, JobId, JobTitle, JobUpdate},
};

/// Replaces every editable field of a job. The owning company never changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateJobCommand {
    pub id: i64,
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: JobDetails,
    pub tags: Option<String>,
}

impl JobCommandService {
    pub async fn update_job(&self, command: UpdateJobCommand) -> ApplicationResult<JobDto> {
        let UpdateJobCommand {
            id,
            category_id,
            title,
            description,
            details,
            tags,
        } = command;

        let id = JobId::new(id)?;
        let job = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("job not found"))?;

        let (Some(title), Some(description), Some(category_id)) = (
            title.filter(|v| !v.is_empty()),
            description.filter(|v| !v.is_empty()),
            category_id,
        ) else {
            return Err(ApplicationError::validation(
                "title, description and category are required",
            ));
        };

        let title = JobTitle::new(title)?;
        let description = JobDescription::new(description)?;
        let category_id = CategoryId::new(category_id)?;

        let slug = self.slug_service.slug_for_existing(&title, &job).await?;
        let tag_ids = self.resolve_tag_ids(tags.as_deref()).await?;

        let update = JobUpdate {
            id,
            category_id,
            title,
            slug,
            description,
            details,
            tag_ids,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        if updated.slug != job.slug {
            tracing::info!(job_id = i64::from(id), from = %job.slug, to = %updated.slug, "job slug changed");
        }
        tracing::info!(job_id = i64::from(id), "job updated");
        Ok(updated.into())
    }
}
