//! PostgreSQL-based record store.
//!
//! Templates and images live in two tables; each insert is a single
//! statement and therefore atomic per record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::template::{ImageRecord, TemplateRecord};

use super::backend::{RecordStore, RecordStoreStats, StoreError};

const CREATE_TEMPLATES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS email_templates (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        image_url TEXT NOT NULL,
        footer TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_IMAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS email_images (
        id UUID PRIMARY KEY,
        image_url TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

type TemplateRow = (Uuid, String, String, String, String, DateTime<Utc>);

fn template_from_row(row: TemplateRow) -> TemplateRecord {
    let (id, title, content, image_url, footer, created_at) = row;
    TemplateRecord {
        id,
        title,
        content,
        image_url,
        footer,
        created_at,
    }
}

/// Unique-violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

fn map_insert_error(id: Uuid, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StoreError::Duplicate(id)
        }
        _ => StoreError::Postgres(err),
    }
}

/// PostgreSQL-based record store.
///
/// Tables:
/// - `email_templates` - saved template records
/// - `email_images` - uploaded image references
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the record tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TEMPLATES_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_IMAGES_TABLE).execute(&self.pool).await?;

        tracing::info!("PostgreSQL record tables ready");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn insert_template(&self, record: TemplateRecord) -> Result<TemplateRecord, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO email_templates (id, title, content, image_url, footer, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.content)
        .bind(&record.image_url)
        .bind(&record.footer)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(record.id, e))?;

        tracing::trace!(template_id = %record.id, "Template inserted into PostgreSQL");

        Ok(record)
    }

    async fn insert_image(&self, record: ImageRecord) -> Result<ImageRecord, StoreError> {
        sqlx::query("INSERT INTO email_images (id, image_url, created_at) VALUES ($1, $2, $3)")
            .bind(record.id)
            .bind(&record.image_url)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(record.id, e))?;

        tracing::trace!(image_id = %record.id, "Image inserted into PostgreSQL");

        Ok(record)
    }

    async fn get_template(&self, id: Uuid) -> Result<Option<TemplateRecord>, StoreError> {
        let row: Option<TemplateRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, image_url, footer, created_at
            FROM email_templates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(template_from_row))
    }

    async fn list_templates(&self) -> Result<Vec<TemplateRecord>, StoreError> {
        let rows: Vec<TemplateRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, image_url, footer, created_at
            FROM email_templates
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(template_from_row).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn stats(&self) -> RecordStoreStats {
        let (templates, images): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM email_templates),
                (SELECT COUNT(*) FROM email_images)
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read record store stats");
            (0, 0)
        });

        RecordStoreStats {
            backend_type: "postgres".to_string(),
            templates: templates as usize,
            images: images as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_from_row() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let record = template_from_row((
            id,
            "Hi".to_string(),
            "Body".to_string(),
            "http://x/y.png".to_string(),
            "Bye".to_string(),
            now,
        ));

        assert_eq!(record.id, id);
        assert_eq!(record.image_url, "http://x/y.png");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_non_database_error_is_postgres() {
        let id = Uuid::new_v4();
        let err = map_insert_error(id, sqlx::Error::PoolClosed);
        assert!(matches!(err, StoreError::Postgres(_)));
    }

    #[test]
    fn test_schema_statements_are_idempotent() {
        assert!(CREATE_TEMPLATES_TABLE.contains("IF NOT EXISTS email_templates"));
        assert!(CREATE_IMAGES_TABLE.contains("IF NOT EXISTS email_images"));
    }
}
