// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{companies::CompanyCommandService, jobs::JobCommandService},
        ports::{ClockPort, SlugGeneratorPort, SuffixSourcePort},
        queries::{companies::CompanyQueryService, jobs::JobQueryService, tags::TagQueryService},
    },
    domain::{
        company::{CompanyReadRepository, CompanyWriteRepository, services::CompanySlugService},
        job::{JobReadRepository, JobWriteRepository, services::JobSlugService},
        slug::{CollisionStrategy, SlugResolver},
        tag::{EmptyTagPolicy, TagRepository},
    },
};

/// Knobs for slug collision handling and tag list parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizationPolicy {
    pub slug_collisions: CollisionStrategy,
    pub empty_tags: EmptyTagPolicy,
}

pub struct ApplicationServices {
    pub job_commands: Arc<JobCommandService>,
    pub job_queries: Arc<JobQueryService>,
    pub company_commands: Arc<CompanyCommandService>,
    pub company_queries: Arc<CompanyQueryService>,
    pub tag_queries: Arc<TagQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_write_repo: Arc<dyn JobWriteRepository>,
        job_read_repo: Arc<dyn JobReadRepository>,
        company_write_repo: Arc<dyn CompanyWriteRepository>,
        company_read_repo: Arc<dyn CompanyReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        suffixes: Arc<SuffixSourcePort>,
        policy: NormalizationPolicy,
    ) -> Self {
        let resolver = Arc::new(SlugResolver::new(
            Arc::clone(&slugger),
            Arc::clone(&suffixes),
            policy.slug_collisions,
        ));

        let job_slugs = Arc::new(JobSlugService::new(
            Arc::clone(&job_read_repo),
            Arc::clone(&resolver),
        ));
        let company_slugs = Arc::new(CompanySlugService::new(
            Arc::clone(&company_read_repo),
            Arc::clone(&resolver),
        ));

        let job_commands = Arc::new(JobCommandService::new(
            Arc::clone(&job_write_repo),
            Arc::clone(&job_read_repo),
            Arc::clone(&tag_repo),
            job_slugs,
            Arc::clone(&clock),
            policy.empty_tags,
        ));
        let company_commands = Arc::new(CompanyCommandService::new(
            Arc::clone(&company_write_repo),
            Arc::clone(&company_read_repo),
            company_slugs,
            Arc::clone(&clock),
        ));

        let job_queries = Arc::new(JobQueryService::new(Arc::clone(&job_read_repo)));
        let company_queries = Arc::new(CompanyQueryService::new(Arc::clone(&company_read_repo)));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));

        Self {
            job_commands,
            job_queries,
            company_commands,
            company_queries,
            tag_queries,
        }
    }
}
