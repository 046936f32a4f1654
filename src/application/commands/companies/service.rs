// src/application/commands/companies/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::company::{CompanyReadRepository, CompanyWriteRepository, services::CompanySlugService},
};

pub struct CompanyCommandService {
    pub(super) write_repo: Arc<dyn CompanyWriteRepository>,
    pub(super) read_repo: Arc<dyn CompanyReadRepository>,
    pub(super) slug_service: Arc<CompanySlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CompanyCommandService {
    pub fn new(
        write_repo: Arc<dyn CompanyWriteRepository>,
        read_repo: Arc<dyn CompanyReadRepository>,
        slug_service: Arc<CompanySlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
