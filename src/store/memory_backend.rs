//! In-memory record store using DashMap.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::template::{ImageRecord, TemplateRecord};

use super::backend::{RecordStore, RecordStoreStats, StoreError};

/// In-memory record storage. Contents are lost on restart.
pub struct MemoryRecordStore {
    templates: DashMap<Uuid, TemplateRecord>,
    images: DashMap<Uuid, ImageRecord>,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
            images: DashMap::new(),
        }
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert_template(&self, record: TemplateRecord) -> Result<TemplateRecord, StoreError> {
        match self.templates.entry(record.id) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                tracing::trace!(template_id = %record.id, "Template stored in memory");
                Ok(record)
            }
        }
    }

    async fn insert_image(&self, record: ImageRecord) -> Result<ImageRecord, StoreError> {
        match self.images.entry(record.id) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(record.id)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                tracing::trace!(image_id = %record.id, "Image stored in memory");
                Ok(record)
            }
        }
    }

    async fn get_template(&self, id: Uuid) -> Result<Option<TemplateRecord>, StoreError> {
        Ok(self.templates.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_templates(&self) -> Result<Vec<TemplateRecord>, StoreError> {
        let mut templates: Vec<TemplateRecord> = self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(templates)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn stats(&self) -> RecordStoreStats {
        RecordStoreStats {
            backend_type: "memory".to_string(),
            templates: self.template_count(),
            images: self.image_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::template::TemplateFields;

    fn sample_fields(title: &str) -> TemplateFields {
        TemplateFields {
            title: title.to_string(),
            content: "Body".to_string(),
            image_url: "http://x/y.png".to_string(),
            footer: "Bye".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_template() {
        let store = MemoryRecordStore::new();
        let record = TemplateRecord::new(sample_fields("Hi"));
        let id = record.id;

        let saved = store.insert_template(record.clone()).await.unwrap();
        assert_eq!(saved, record);

        let fetched = store.get_template(id).await.unwrap();
        assert_eq!(fetched, Some(record));
        assert_eq!(store.template_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = MemoryRecordStore::new();
        let record = TemplateRecord::new(sample_fields("Hi"));

        store.insert_template(record.clone()).await.unwrap();
        assert!(matches!(
            store.insert_template(record).await,
            Err(StoreError::Duplicate(_))
        ));
        assert_eq!(store.template_count(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_template() {
        let store = MemoryRecordStore::new();
        assert!(store.get_template(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryRecordStore::new();

        let mut older = TemplateRecord::new(sample_fields("older"));
        older.created_at = Utc::now() - Duration::minutes(5);
        let newer = TemplateRecord::new(sample_fields("newer"));

        store.insert_template(older).await.unwrap();
        store.insert_template(newer).await.unwrap();

        let titles: Vec<String> = store
            .list_templates()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_images_and_stats() {
        let store = MemoryRecordStore::new();
        store
            .insert_image(ImageRecord::new("https://cdn.example.com/a.png".to_string()))
            .await
            .unwrap();

        let stats = store.stats().await;
        assert_eq!(stats.backend_type, "memory");
        assert_eq!(stats.images, 1);
        assert_eq!(stats.templates, 0);
        assert!(store.ping().await.is_ok());
    }
}
