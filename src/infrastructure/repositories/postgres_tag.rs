// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub(super) id: i64,
    pub(super) name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        })
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn find_or_create(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<String> = names.iter().map(|n| n.as_str().to_owned()).collect();

        // Concurrent creators race on the unique index, not on a lookup.
        sqlx::query(
            "INSERT INTO tags (name) SELECT UNNEST($1::text[]) ON CONFLICT (name) DO NOTHING",
        )
        .bind(raw.as_slice())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE name = ANY($1)")
            .bind(raw.as_slice())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut by_name = HashMap::with_capacity(rows.len());
        for row in rows {
            let tag = Tag::try_from(row)?;
            by_name.insert(tag.name.clone(), tag);
        }

        names
            .iter()
            .map(|name| {
                by_name.get(name).cloned().ok_or_else(|| {
                    DomainError::Persistence(format!("tag `{name}` missing after upsert"))
                })
            })
            .collect()
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Tag::try_from).collect()
    }
}
