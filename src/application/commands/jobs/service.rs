// src/application/commands/jobs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        job::{JobReadRepository, JobWriteRepository, services::JobSlugService},
        tag::{EmptyTagPolicy, TagRepository},
    },
};

pub struct JobCommandService {
    pub(super) write_repo: Arc<dyn JobWriteRepository>,
    pub(super) read_repo: Arc<dyn JobReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<JobSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) empty_tags: EmptyTagPolicy,
}

impl JobCommandService {
    pub fn new(
        write_repo: Arc<dyn JobWriteRepository>,
        read_repo: Arc<dyn JobReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<JobSlugService>,
        clock: Arc<dyn Clock>,
        empty_tags: EmptyTagPolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            slug_service,
            clock,
            empty_tags,
        }
    }
}
