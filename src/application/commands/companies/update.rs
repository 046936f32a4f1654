// src/application/commands/companies/update.rs
use super::{CompanyCommandService, CompanyProfileInput};
use crate::{
    application::{
        dto::CompanyDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::company::{CompanyEmail, CompanyId, CompanyName, CompanyUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyCommand {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: CompanyProfileInput,
}

impl CompanyCommandService {
    pub async fn update_company(
        &self,
        command: UpdateCompanyCommand,
    ) -> ApplicationResult<CompanyDto> {
        let id = CompanyId::new(command.id)?;
        let company = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("company not found"))?;

        let (Some(name), Some(email)) = (
            command.name.filter(|v| !v.is_empty()),
            command.email.filter(|v| !v.is_empty()),
        ) else {
            return Err(ApplicationError::validation("name and email are required"));
        };

        let name = CompanyName::new(name)?;
        let email = CompanyEmail::new(email)?;
        let slug = self.slug_service.slug_for_existing(&name, &company).await?;

        let update = CompanyUpdate {
            id,
            name,
            slug,
            email,
            profile: command.profile.into_profile(),
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(company_id = i64::from(id), slug = %updated.slug, "company updated");
        Ok(updated.into())
    }
}
