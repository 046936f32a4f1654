// src/infrastructure/repositories/postgres_company.rs
use super::map_sqlx;
use crate::domain::company::{
    Company, CompanyEmail, CompanyId, CompanyName, CompanyProfile, CompanyReadRepository,
    CompanyUpdate, CompanyWriteRepository, NewCompany,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMPANY_COLUMNS: &str = "id, name, slug, email, description, location, revenue, phone, \
     company_size, founded, logo_url, website_url, twitter_url, facebook_url, linkedin_url, \
     youtube_url, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCompanyWriteRepository {
    pool: PgPool,
}

impl PostgresCompanyWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCompanyReadRepository {
    pool: PgPool,
}

impl PostgresCompanyReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    slug: String,
    email: String,
    description: Option<String>,
    location: Option<String>,
    revenue: Option<String>,
    phone: Option<String>,
    company_size: Option<String>,
    founded: Option<DateTime<Utc>>,
    logo_url: Option<String>,
    website_url: Option<String>,
    twitter_url: Option<String>,
    facebook_url: Option<String>,
    linkedin_url: Option<String>,
    youtube_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyRow> for Company {
    type Error = DomainError;

    fn try_from(row: CompanyRow) -> Result<Self, Self::Error> {
        Ok(Company {
            id: CompanyId::new(row.id)?,
            name: CompanyName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            email: CompanyEmail::new(row.email)?,
            profile: CompanyProfile {
                description: row.description,
                location: row.location,
                revenue: row.revenue,
                phone: row.phone,
                company_size: row.company_size,
                founded: row.founded,
                logo_url: row.logo_url,
                website_url: row.website_url,
                twitter_url: row.twitter_url,
                facebook_url: row.facebook_url,
                linkedin_url: row.linkedin_url,
                youtube_url: row.youtube_url,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CompanyWriteRepository for PostgresCompanyWriteRepository {
    async fn insert(&self, company: NewCompany) -> DomainResult<Company> {
        let NewCompany {
            name,
            slug,
            email,
            profile,
            created_at,
            updated_at,
        } = company;

        let sql = format!(
            "INSERT INTO companies (name, slug, email, description, location, revenue, phone,
                company_size, founded, logo_url, website_url, twitter_url, facebook_url,
                linkedin_url, youtube_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING {COMPANY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(email.as_str())
            .bind(profile.description)
            .bind(profile.location)
            .bind(profile.revenue)
            .bind(profile.phone)
            .bind(profile.company_size)
            .bind(profile.founded)
            .bind(profile.logo_url)
            .bind(profile.website_url)
            .bind(profile.twitter_url)
            .bind(profile.facebook_url)
            .bind(profile.linkedin_url)
            .bind(profile.youtube_url)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Company::try_from(row)
    }

    async fn update(&self, update: CompanyUpdate) -> DomainResult<Company> {
        let CompanyUpdate {
            id,
            name,
            slug,
            email,
            profile,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE companies SET name = $2, slug = $3, email = $4, description = $5,
                location = $6, revenue = $7, phone = $8, company_size = $9, founded = $10,
                logo_url = $11, website_url = $12, twitter_url = $13, facebook_url = $14,
                linkedin_url = $15, youtube_url = $16, updated_at = $17
             WHERE id = $1
             RETURNING {COMPANY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(i64::from(id))
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(email.as_str())
            .bind(profile.description)
            .bind(profile.location)
            .bind(profile.revenue)
            .bind(profile.phone)
            .bind(profile.company_size)
            .bind(profile.founded)
            .bind(profile.logo_url)
            .bind(profile.website_url)
            .bind(profile.twitter_url)
            .bind(profile.facebook_url)
            .bind(profile.linkedin_url)
            .bind(profile.youtube_url)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("company not found".into()))?;

        Company::try_from(row)
    }
}

#[async_trait]
impl CompanyReadRepository for PostgresCompanyReadRepository {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1");
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Company::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE slug = $1");
        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Company::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &Slug, exclude: Option<CompanyId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM companies WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Company>> {
        let sql = format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Company::try_from).collect()
    }
}
