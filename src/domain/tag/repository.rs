// src/domain/tag/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::tag::{entity::Tag, value_objects::TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Look up every name, creating the missing ones. Returns one tag per
    /// input name, in input order.
    async fn find_or_create(&self, names: &[TagName]) -> DomainResult<Vec<Tag>>;
    async fn list(&self) -> DomainResult<Vec<Tag>>;
}
