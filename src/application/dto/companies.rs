// src/application/dto/companies.rs
use crate::domain::company::Company;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub email: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub revenue: Option<String>,
    pub phone: Option<String>,
    pub company_size: Option<String>,
    #[serde(default, with = "serde_time::option")]
    pub founded: Option<DateTime<Utc>>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        let profile = company.profile;
        Self {
            id: company.id.into(),
            name: company.name.into_inner(),
            slug: company.slug.into_inner(),
            email: company.email.into_inner(),
            description: profile.description,
            location: profile.location,
            revenue: profile.revenue,
            phone: profile.phone,
            company_size: profile.company_size,
            founded: profile.founded,
            logo_url: profile.logo_url,
            website_url: profile.website_url,
            twitter_url: profile.twitter_url,
            facebook_url: profile.facebook_url,
            linkedin_url: profile.linkedin_url,
            youtube_url: profile.youtube_url,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
