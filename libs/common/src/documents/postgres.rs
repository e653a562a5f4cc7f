//! PostgreSQL document store
//!
//! All collections share a single `documents` table keyed by
//! `(collection, id)` with the document body kept as JSONB.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row, types::Json};
use tracing::{error, info};

use super::{DocumentStore, assign_id, prefix_pattern};
use crate::error::StoreResult;

/// PostgreSQL implementation of DocumentStore
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a new document store on top of a connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist yet
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                body JSONB NOT NULL,
                inserted_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Document table ready");
        Ok(())
    }
}

fn bodies(rows: Vec<sqlx::postgres::PgRow>) -> Vec<Value> {
    rows.into_iter()
        .map(|row| row.get::<Json<Value>, _>("body").0)
        .collect()
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn save(&self, collection: &str, mut document: Value) -> StoreResult<Value> {
        let id = assign_id(collection, &mut document)?;

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE SET body = EXCLUDED.body
            "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(Json(&document))
        .execute(&self.pool)
        .await?;

        Ok(document)
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let rows = sqlx::query(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1
            ORDER BY inserted_at, id
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies(rows))
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let row = sqlx::query(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| row.get::<Json<Value>, _>("body").0))
    }

    async fn find_by_prefix(
        &self,
        collection: &str,
        field: &str,
        prefix: &str,
    ) -> StoreResult<Vec<Value>> {
        let rows = sqlx::query(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body ->> $2 ~* $3
            ORDER BY inserted_at, id
            "#,
        )
        .bind(collection)
        .bind(field)
        .bind(prefix_pattern(prefix))
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies(rows))
    }

    async fn delete_all(&self, collection: &str, ids: &[String]) -> StoreResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND id = ANY($2)
            "#,
        )
        .bind(collection)
        .bind(ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => Ok(true),
            Err(e) => {
                error!("Document store health check failed: {}", e);
                Ok(false)
            }
        }
    }
}
