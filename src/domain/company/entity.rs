// src/domain/company/entity.rs
use crate::domain::company::value_objects::{CompanyEmail, CompanyId, CompanyName};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

/// Optional descriptive fields, replaced as a whole on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyProfile {
    pub description: Option<String>,
    pub location: Option<String>,
    pub revenue: Option<String>,
    pub phone: Option<String>,
    pub company_size: Option<String>,
    pub founded: Option<DateTime<Utc>>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub slug: Slug,
    pub email: CompanyEmail,
    pub profile: CompanyProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: CompanyName,
    pub slug: Slug,
    pub email: CompanyEmail,
    pub profile: CompanyProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CompanyUpdate {
    pub id: CompanyId,
    pub name: CompanyName,
    pub slug: Slug,
    pub email: CompanyEmail,
    pub profile: CompanyProfile,
    pub updated_at: DateTime<Utc>,
}
