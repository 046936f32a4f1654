// src/application/commands/companies/profile.rs
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::company::CompanyProfile;

/// Optional company fields as submitted. `founded` is free text.
#[derive(Debug, Clone, Default)]
pub struct CompanyProfileInput {
    pub description: Option<String>,
    pub location: Option<String>,
    pub revenue: Option<String>,
    pub phone: Option<String>,
    pub company_size: Option<String>,
    pub founded: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
}

impl CompanyProfileInput {
    pub(super) fn into_profile(self) -> CompanyProfile {
        CompanyProfile {
            description: self.description,
            location: self.location,
            revenue: self.revenue,
            phone: self.phone,
            company_size: self.company_size,
            founded: self.founded.as_deref().and_then(parse_founded),
            logo_url: self.logo_url,
            website_url: self.website_url,
            twitter_url: self.twitter_url,
            facebook_url: self.facebook_url,
            linkedin_url: self.linkedin_url,
            youtube_url: self.youtube_url,
        }
    }
}

/// Accepts an RFC 3339 timestamp, a `YYYY-MM-DD` date or a bare year.
/// Anything else is treated as unknown rather than rejected.
fn parse_founded(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        raw.parse::<i32>()
            .ok()
            .filter(|year| (1000..=9999).contains(year))
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    })?;
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn founded_accepts_common_forms() {
        let midnight = Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_founded("2015-06-01"), Some(midnight));
        assert_eq!(parse_founded("2015-06-01T00:00:00Z"), Some(midnight));
        assert_eq!(
            parse_founded("1998"),
            Some(Utc.with_ymd_and_hms(1998, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_founded_is_dropped() {
        assert_eq!(parse_founded("sometime last year"), None);
        assert_eq!(parse_founded("  "), None);
        assert_eq!(parse_founded("2015-13-40"), None);
    }
}
