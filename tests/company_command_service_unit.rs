use std::sync::Arc;

mod support;

use jobboard_core::application::commands::companies::{
    CompanyProfileInput, CreateCompanyCommand, UpdateCompanyCommand,
};
use jobboard_core::application::error::ApplicationError;
use jobboard_core::application::queries::companies::{GetCompanyBySlugQuery, ListCompaniesQuery};
use jobboard_core::application::services::{ApplicationServices, NormalizationPolicy};
use jobboard_core::domain::errors::DomainError;
use support::{InMemoryStore, ScriptedSuffixes, build_services};

fn services(suffixes: &[u16]) -> (Arc<InMemoryStore>, ApplicationServices) {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(
        store.clone(),
        Arc::new(ScriptedSuffixes::new(suffixes)),
        NormalizationPolicy::default(),
    );
    (store, services)
}

fn acme(name: &str) -> CreateCompanyCommand {
    CreateCompanyCommand {
        name: Some(name.into()),
        email: Some("hello@acme.test".into()),
        profile: CompanyProfileInput {
            founded: Some("2019".into()),
            website_url: Some("https://acme.test".into()),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn create_company_derives_slug_and_profile() {
    let (_, services) = services(&[]);
    let created = services
        .company_commands
        .create_company(acme("Café Déjà Vu"))
        .await
        .unwrap();

    assert_eq!(created.slug, "cafe-deja-vu");
    assert_eq!(created.website_url.as_deref(), Some("https://acme.test"));
    assert_eq!(
        created.founded.map(|d| d.to_rfc3339()),
        Some("2019-01-01T00:00:00+00:00".to_string())
    );
}

#[tokio::test]
async fn duplicate_company_name_gets_suffix() {
    let (_, services) = services(&[427]);
    services
        .company_commands
        .create_company(acme("Acme"))
        .await
        .unwrap();
    let second = services
        .company_commands
        .create_company(acme("ACME"))
        .await
        .unwrap();
    assert_eq!(second.slug, "acme-427");
}

#[tokio::test]
async fn unparseable_founded_is_ignored() {
    let (_, services) = services(&[]);
    let mut command = acme("Initech");
    command.profile.founded = Some("sometime in the nineties".into());
    let created = services.company_commands.create_company(command).await.unwrap();
    assert!(created.founded.is_none());
}

#[tokio::test]
async fn missing_email_is_validation_error() {
    let (store, services) = services(&[]);
    let err = services
        .company_commands
        .create_company(CreateCompanyCommand {
            name: Some("Acme".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(store.company_slug_lookups(), 0);
}

#[tokio::test]
async fn malformed_email_is_domain_validation_error() {
    let (_, services) = services(&[]);
    let mut command = acme("Acme");
    command.email = Some("not-an-email".into());
    let err = services.company_commands.create_company(command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
}

#[tokio::test]
async fn update_keeps_slug_when_name_normalizes_the_same() {
    let (store, services) = services(&[]);
    let created = services
        .company_commands
        .create_company(acme("Globex"))
        .await
        .unwrap();

    let before = store.company_slug_lookups();
    let updated = services
        .company_commands
        .update_company(UpdateCompanyCommand {
            id: created.id,
            name: Some("GLOBEX".into()),
            email: Some("press@globex.test".into()),
            profile: CompanyProfileInput {
                location: Some("Springfield".into()),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(store.company_slug_lookups(), before);
    assert_eq!(updated.slug, "globex");
    assert_eq!(updated.name, "GLOBEX");
    assert_eq!(updated.location.as_deref(), Some("Springfield"));
    assert!(updated.website_url.is_none());
}

#[tokio::test]
async fn renamed_company_gets_new_slug_and_old_one_is_gone() {
    let (_, services) = services(&[]);
    let created = services
        .company_commands
        .create_company(acme("Hooli"))
        .await
        .unwrap();
    services
        .company_commands
        .update_company(UpdateCompanyCommand {
            id: created.id,
            name: Some("Pied Piper".into()),
            email: Some("richard@piedpiper.test".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let found = services
        .company_queries
        .get_company_by_slug(GetCompanyBySlugQuery {
            slug: "pied-piper".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, created.id);

    let err = services
        .company_queries
        .get_company_by_slug(GetCompanyBySlugQuery {
            slug: "hooli".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_companies_newest_first() {
    let (_, services) = services(&[]);
    for name in ["First", "Second", "Third"] {
        services
            .company_commands
            .create_company(acme(name))
            .await
            .unwrap();
    }
    let listed = services
        .company_queries
        .list_companies(ListCompaniesQuery { limit: 2 })
        .await
        .unwrap();
    let slugs: Vec<&str> = listed.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["third", "second"]);
}
