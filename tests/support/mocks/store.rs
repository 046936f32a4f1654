// tests/support/mocks/store.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jobboard_core::domain::company::{
    Company, CompanyId, CompanyReadRepository, CompanyUpdate, CompanyWriteRepository, NewCompany,
};
use jobboard_core::domain::errors::{DomainError, DomainResult};
use jobboard_core::domain::job::{
    Job, JobId, JobListFilter, JobReadRepository, JobUpdate, JobWriteRepository, NewJob,
};
use jobboard_core::domain::slug::Slug;
use jobboard_core::domain::tag::{Tag, TagId, TagName, TagRepository};

/// Categories present in a fresh database.
const SEEDED_CATEGORIES: std::ops::RangeInclusive<i64> = 1..=6;

#[derive(Default)]
struct State {
    companies: Vec<Company>,
    jobs: Vec<Job>,
    tags: Vec<Tag>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn tags_for(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let mut tags = ids
            .iter()
            .map(|id| {
                self.tags
                    .iter()
                    .find(|tag| tag.id == *id)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound("tag not found".into()))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags.dedup();
        Ok(tags)
    }
}

/// One in-memory database backing every repository trait, with the unique
/// and foreign key checks the Postgres schema enforces.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    job_slug_lookups: AtomicUsize,
    company_slug_lookups: AtomicUsize,
    tag_batches: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_slug_lookups(&self) -> usize {
        self.job_slug_lookups.load(Ordering::SeqCst)
    }

    pub fn company_slug_lookups(&self) -> usize {
        self.company_slug_lookups.load(Ordering::SeqCst)
    }

    pub fn tag_batches(&self) -> usize {
        self.tag_batches.load(Ordering::SeqCst)
    }

    pub fn tag_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = state.tags.iter().map(|t| t.name.to_string()).collect();
        names.sort();
        names
    }
}

#[async_trait]
impl CompanyWriteRepository for InMemoryStore {
    async fn insert(&self, company: NewCompany) -> DomainResult<Company> {
        let mut state = self.state.lock().unwrap();
        if state.companies.iter().any(|c| c.slug == company.slug) {
            return Err(DomainError::Conflict("company slug already exists".into()));
        }
        let created = Company {
            id: CompanyId::new(state.next_id())?,
            name: company.name,
            slug: company.slug,
            email: company.email,
            profile: company.profile,
            created_at: company.created_at,
            updated_at: company.updated_at,
        };
        state.companies.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CompanyUpdate) -> DomainResult<Company> {
        let mut state = self.state.lock().unwrap();
        if state
            .companies
            .iter()
            .any(|c| c.slug == update.slug && c.id != update.id)
        {
            return Err(DomainError::Conflict("company slug already exists".into()));
        }
        let company = state
            .companies
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("company not found".into()))?;
        company.name = update.name;
        company.slug = update.slug;
        company.email = update.email;
        company.profile = update.profile;
        company.updated_at = update.updated_at;
        Ok(company.clone())
    }
}

#[async_trait]
impl CompanyReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &Slug, exclude: Option<CompanyId>) -> DomainResult<bool> {
        self.company_slug_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state
            .companies
            .iter()
            .any(|c| &c.slug == slug && Some(c.id) != exclude))
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Company>> {
        let state = self.state.lock().unwrap();
        let mut companies = state.companies.clone();
        companies.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        companies.truncate(limit as usize);
        Ok(companies)
    }
}

#[async_trait]
impl JobWriteRepository for InMemoryStore {
    async fn insert(&self, job: NewJob) -> DomainResult<Job> {
        let mut state = self.state.lock().unwrap();
        if !state.companies.iter().any(|c| c.id == job.company_id) {
            return Err(DomainError::NotFound("company not found".into()));
        }
        if !SEEDED_CATEGORIES.contains(&i64::from(job.category_id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if state.jobs.iter().any(|j| j.slug == job.slug) {
            return Err(DomainError::Conflict("job slug already exists".into()));
        }
        let tags = state.tags_for(&job.tag_ids)?;
        let created = Job {
            id: JobId::new(state.next_id())?,
            company_id: job.company_id,
            category_id: job.category_id,
            title: job.title,
            slug: job.slug,
            description: job.description,
            details: job.details,
            status: job.status,
            tags,
            created_at: job.created_at,
            updated_at: job.updated_at,
        };
        state.jobs.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: JobUpdate) -> DomainResult<Job> {
        let mut state = self.state.lock().unwrap();
        if !SEEDED_CATEGORIES.contains(&i64::from(update.category_id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if state
            .jobs
            .iter()
            .any(|j| j.slug == update.slug && j.id != update.id)
        {
            return Err(DomainError::Conflict("job slug already exists".into()));
        }
        let tags = state.tags_for(&update.tag_ids)?;
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == update.id)
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;
        job.category_id = update.category_id;
        job.title = update.title;
        job.slug = update.slug;
        job.description = update.description;
        job.details = update.details;
        job.tags = tags;
        job.updated_at = update.updated_at;
        Ok(job.clone())
    }
}

#[async_trait]
impl JobReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        let state = self.state.lock().unwrap();
        Ok(state.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Job>> {
        let state = self.state.lock().unwrap();
        Ok(state.jobs.iter().find(|j| &j.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &Slug, exclude: Option<JobId>) -> DomainResult<bool> {
        self.job_slug_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state
            .jobs
            .iter()
            .any(|j| &j.slug == slug && Some(j.id) != exclude))
    }

    async fn list(&self, filter: JobListFilter) -> DomainResult<Vec<Job>> {
        let state = self.state.lock().unwrap();
        let mut jobs: Vec<Job> = state
            .jobs
            .iter()
            .filter(|j| match &filter.tag {
                Some(name) => j.tags.iter().any(|t| &t.name == name),
                None => true,
            })
            .filter(|j| match filter.company_id {
                Some(id) => j.company_id == id,
                None => true,
            })
            .cloned()
            .collect();
        jobs.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        jobs.truncate(filter.limit as usize);
        Ok(jobs)
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn find_or_create(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        self.tag_batches.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let existing = state.tags.iter().find(|t| &t.name == name).cloned();
            let tag = match existing {
                Some(tag) => tag,
                None => {
                    let tag = Tag {
                        id: TagId::new(state.next_id())?,
                        name: name.clone(),
                    };
                    state.tags.push(tag.clone());
                    tag
                }
            };
            resolved.push(tag);
        }
        Ok(resolved)
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.clone())
    }
}
