// src/application/commands/jobs/create.rs
use super::JobCommandService;
use crate::{
    application::{
        dto::JobDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        company::CompanyId,
        job::{CategoryId, JobDescription, JobDetails, JobStatus, JobTitle, NewJob},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateJobCommand {
    pub company_id: Option<i64>,
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: JobDetails,
    /// Comma separated, see [`crate::domain::tag::parse_tags`].
    pub tags: Option<String>,
}

impl CreateJobCommand {
    pub fn builder() -> CreateJobCommandBuilder {
        CreateJobCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateJobCommandBuilder {
    command: CreateJobCommand,
}

impl CreateJobCommandBuilder {
    pub fn company_id(mut self, id: i64) -> Self {
        self.command.company_id = Some(id);
        self
    }

    pub fn category_id(mut self, id: i64) -> Self {
        self.command.category_id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.command.description = Some(description.into());
        self
    }

    pub fn details(mut self, details: JobDetails) -> Self {
        self.command.details = details;
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.command.tags = Some(tags.into());
        self
    }

    pub fn build(self) -> CreateJobCommand {
        self.command
    }
}

impl JobCommandService {
    pub async fn create_job(&self, command: CreateJobCommand) -> ApplicationResult<JobDto> {
        let CreateJobCommand {
            company_id,
            category_id,
            title,
            description,
            details,
            tags,
        } = command;

        let (Some(title), Some(description), Some(company_id), Some(category_id)) = (
            title.filter(|v| !v.is_empty()),
            description.filter(|v| !v.is_empty()),
            company_id,
            category_id,
        ) else {
            return Err(ApplicationError::validation(
                "title, description, company and category are required",
            ));
        };

        let title = JobTitle::new(title)?;
        let description = JobDescription::new(description)?;
        let company_id = CompanyId::new(company_id)?;
        let category_id = CategoryId::new(category_id)?;

        let slug = self.slug_service.slug_for_new(&title).await?;
        let tag_ids = self.resolve_tag_ids(tags.as_deref()).await?;
        let now = self.clock.now();

        let new_job = NewJob {
            company_id,
            category_id,
            title,
            slug,
            description,
            details,
            status: JobStatus::Running,
            tag_ids,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_job).await?;
        tracing::info!(
            job_id = i64::from(created.id),
            slug = %created.slug,
            tags = created.tags.len(),
            "job created"
        );
        Ok(created.into())
    }
}
