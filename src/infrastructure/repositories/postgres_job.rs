// src/infrastructure/repositories/postgres_job.rs
use super::map_sqlx;
use crate::domain::company::CompanyId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::{
    CategoryId, Job, JobDescription, JobDetails, JobId, JobListFilter, JobReadRepository,
    JobTitle, JobUpdate, JobWriteRepository, NewJob,
};
use crate::domain::slug::Slug;
use crate::domain::tag::{Tag, TagId, TagName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const JOB_COLUMNS: &str = "id, company_id, category_id, title, slug, description, status, image, \
     job_type, location, salary_range, position, experience, office_days, holidays, \
     office_start_time, office_end_time, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresJobWriteRepository {
    pool: PgPool,
}

impl PostgresJobWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresJobReadRepository {
    pool: PgPool,
}

impl PostgresJobReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i64,
    company_id: i64,
    category_id: i64,
    title: String,
    slug: String,
    description: String,
    status: String,
    image: Option<String>,
    job_type: Option<String>,
    location: Option<String>,
    salary_range: Option<String>,
    position: Option<String>,
    experience: Option<String>,
    office_days: Option<String>,
    holidays: Option<String>,
    office_start_time: Option<String>,
    office_end_time: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct JobTagRow {
    job_id: i64,
    id: i64,
    name: String,
}

impl JobRow {
    fn into_job(self, tags: Vec<Tag>) -> DomainResult<Job> {
        Ok(Job {
            id: JobId::new(self.id)?,
            company_id: CompanyId::new(self.company_id)?,
            category_id: CategoryId::new(self.category_id)?,
            title: JobTitle::new(self.title)?,
            slug: Slug::new(self.slug)?,
            description: JobDescription::new(self.description)?,
            details: JobDetails {
                image: self.image,
                job_type: self.job_type,
                location: self.location,
                salary_range: self.salary_range,
                position: self.position,
                experience: self.experience,
                office_days: self.office_days,
                holidays: self.holidays,
                office_start_time: self.office_start_time,
                office_end_time: self.office_end_time,
            },
            status: self.status.parse()?,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

async fn load_tags<'e, E>(executor: E, job_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Tag>>>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, JobTagRow>(
        "SELECT jt.job_id, t.id, t.name
         FROM job_tags jt
         JOIN tags t ON t.id = jt.tag_id
         WHERE jt.job_id = ANY($1)
         ORDER BY t.name",
    )
    .bind(job_ids)
    .fetch_all(executor)
    .await
    .map_err(map_sqlx)?;

    let mut by_job: HashMap<i64, Vec<Tag>> = HashMap::new();
    for row in rows {
        let tag = Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        };
        by_job.entry(row.job_id).or_default().push(tag);
    }
    Ok(by_job)
}

async fn attach_tags<'e, E>(executor: E, rows: Vec<JobRow>) -> DomainResult<Vec<Job>>
where
    E: PgExecutor<'e>,
{
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(executor, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let job_tags = tags.remove(&row.id).unwrap_or_default();
            row.into_job(job_tags)
        })
        .collect()
}

async fn link_tags<'e, E>(executor: E, job_id: i64, tag_ids: &[TagId]) -> DomainResult<()>
where
    E: PgExecutor<'e>,
{
    if tag_ids.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
    sqlx::query(
        "INSERT INTO job_tags (job_id, tag_id)
         SELECT $1, UNNEST($2::bigint[])
         ON CONFLICT DO NOTHING",
    )
    .bind(job_id)
    .bind(ids.as_slice())
    .execute(executor)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl JobWriteRepository for PostgresJobWriteRepository {
    async fn insert(&self, job: NewJob) -> DomainResult<Job> {
        let NewJob {
            company_id,
            category_id,
            title,
            slug,
            description,
            details,
            status,
            tag_ids,
            created_at,
            updated_at,
        } = job;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO jobs (company_id, category_id, title, slug, description, status, image,
                job_type, location, salary_range, position, experience, office_days, holidays,
                office_start_time, office_end_time, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(i64::from(company_id))
            .bind(i64::from(category_id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(description.as_str())
            .bind(status.as_str())
            .bind(details.image)
            .bind(details.job_type)
            .bind(details.location)
            .bind(details.salary_range)
            .bind(details.position)
            .bind(details.experience)
            .bind(details.office_days)
            .bind(details.holidays)
            .bind(details.office_start_time)
            .bind(details.office_end_time)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        link_tags(&mut *tx, row.id, &tag_ids).await?;
        let mut jobs = attach_tags(&mut *tx, vec![row]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        jobs.pop()
            .ok_or_else(|| DomainError::Persistence("inserted job vanished".into()))
    }

    async fn update(&self, update: JobUpdate) -> DomainResult<Job> {
        let JobUpdate {
            id,
            category_id,
            title,
            slug,
            description,
            details,
            tag_ids,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "UPDATE jobs SET category_id = $2, title = $3, slug = $4, description = $5,
                image = $6, job_type = $7, location = $8, salary_range = $9, position = $10,
                experience = $11, office_days = $12, holidays = $13, office_start_time = $14,
                office_end_time = $15, updated_at = $16
             WHERE id = $1
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(i64::from(id))
            .bind(i64::from(category_id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(description.as_str())
            .bind(details.image)
            .bind(details.job_type)
            .bind(details.location)
            .bind(details.salary_range)
            .bind(details.position)
            .bind(details.experience)
            .bind(details.office_days)
            .bind(details.holidays)
            .bind(details.office_start_time)
            .bind(details.office_end_time)
            .bind(updated_at)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        sqlx::query("DELETE FROM job_tags WHERE job_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        link_tags(&mut *tx, row.id, &tag_ids).await?;

        let mut jobs = attach_tags(&mut *tx, vec![row]).await?;
        tx.commit().await.map_err(map_sqlx)?;

        jobs.pop()
            .ok_or_else(|| DomainError::Persistence("updated job vanished".into()))
    }
}

impl PostgresJobReadRepository {
    async fn fetch_one_where(&self, column: &str, value: QueryValue<'_>) -> DomainResult<Option<Job>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE {column} = "));
        match value {
            QueryValue::Id(id) => builder.push_bind(id),
            QueryValue::Text(text) => builder.push_bind(text),
        };

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(attach_tags(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

enum QueryValue<'a> {
    Id(i64),
    Text(&'a str),
}

#[async_trait]
impl JobReadRepository for PostgresJobReadRepository {
    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        self.fetch_one_where("id", QueryValue::Id(i64::from(id))).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Job>> {
        self.fetch_one_where("slug", QueryValue::Text(slug.as_str()))
            .await
    }

    async fn slug_exists(&self, slug: &Slug, exclude: Option<JobId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM jobs WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list(&self, filter: JobListFilter) -> DomainResult<Vec<Job>> {
        let JobListFilter {
            tag,
            company_id,
            limit,
        } = filter;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs WHERE TRUE"));

        if let Some(tag) = tag {
            builder.push(
                " AND EXISTS (SELECT 1 FROM job_tags jt JOIN tags t ON t.id = jt.tag_id \
                 WHERE jt.job_id = jobs.id AND t.name = ",
            );
            builder.push_bind(tag.into_inner());
            builder.push(")");
        }

        if let Some(company_id) = company_id {
            builder.push(" AND company_id = ");
            builder.push_bind(i64::from(company_id));
        }

        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<JobRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        attach_tags(&self.pool, rows).await
    }
}
