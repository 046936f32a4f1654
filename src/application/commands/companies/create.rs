// src/application/commands/companies/create.rs
use super::{CompanyCommandService, CompanyProfileInput};
use crate::{
    application::{
        dto::CompanyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::company::{CompanyEmail, CompanyName, NewCompany},
};

#[derive(Debug, Clone, Default)]
pub struct CreateCompanyCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: CompanyProfileInput,
}

impl CompanyCommandService {
    pub async fn create_company(
        &self,
        command: CreateCompanyCommand,
    ) -> ApplicationResult<CompanyDto> {
        let (Some(name), Some(email)) = (
            command.name.filter(|v| !v.is_empty()),
            command.email.filter(|v| !v.is_empty()),
        ) else {
            return Err(ApplicationError::validation("name and email are required"));
        };

        let name = CompanyName::new(name)?;
        let email = CompanyEmail::new(email)?;
        let slug = self.slug_service.slug_for_new(&name).await?;
        let now = self.clock.now();

        let new_company = NewCompany {
            name,
            slug,
            email,
            profile: command.profile.into_profile(),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_company).await?;
        tracing::info!(
            company_id = i64::from(created.id),
            slug = %created.slug,
            "company created"
        );
        Ok(created.into())
    }
}
