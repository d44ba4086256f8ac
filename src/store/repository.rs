//! Collection repository on top of the JSON document.
//!
//! Every operation loads the full document, works on it in memory and, for mutations,
//! writes it back in full.

use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::JsonStore;
use crate::errors::AppError;
use crate::models::{parse_record_id, Collection, Document, Record};

/// Repository for all record operations.
pub struct Repository {
    store: JsonStore,
    /// Held across the load-modify-save cycle of every mutation. Reads never take it.
    write_lock: Mutex<()>,
}

impl Repository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Get the full document.
    pub async fn get_document(&self) -> Result<Document, AppError> {
        self.store.load().await
    }

    /// List all records of a collection in stored order.
    pub async fn list(&self, collection: Collection) -> Result<Vec<Record>, AppError> {
        let mut document = self.store.load().await?;
        Ok(std::mem::take(document.records_mut(collection)))
    }

    /// Get a record by its (unparsed) path id.
    pub async fn get(&self, collection: Collection, id: &str) -> Result<Option<Record>, AppError> {
        let document = self.store.load().await?;
        let Some(id) = parse_record_id(id) else {
            return Ok(None);
        };

        Ok(document
            .records(collection)
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    /// Create a record with a server-assigned id and append it to the collection.
    pub async fn create(
        &self,
        collection: Collection,
        body: Map<String, Value>,
    ) -> Result<Record, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let id = document.next_id(collection).ok_or_else(|| {
            AppError::Conflict(format!("No ids left in {}", collection))
        })?;
        let record = Record::new(id, body);
        document.records_mut(collection).push(record.clone());
        self.store.save(&document).await?;

        tracing::debug!(%collection, id = record.id, "record created");
        Ok(record)
    }

    /// Shallow-merge `body` onto an existing record.
    pub async fn update(
        &self,
        collection: Collection,
        id: &str,
        body: Map<String, Value>,
    ) -> Result<Record, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let id = parse_record_id(id);
        let record = document
            .records_mut(collection)
            .iter_mut()
            .find(|record| Some(record.id) == id)
            .ok_or_else(|| AppError::NotFound(collection.not_found_message().to_string()))?;
        record.merge(body);
        let updated = record.clone();

        self.store.save(&document).await?;

        tracing::debug!(%collection, id = updated.id, "record updated");
        Ok(updated)
    }

    /// Remove the record with the given id; other records keep their relative order.
    pub async fn delete(&self, collection: Collection, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let records = document.records_mut(collection);
        let before = records.len();
        if let Some(id) = parse_record_id(id) {
            records.retain(|record| record.id != id);
        }

        if records.len() == before {
            return Err(AppError::NotFound(
                collection.not_found_message().to_string(),
            ));
        }

        self.store.save(&document).await?;

        tracing::debug!(%collection, id, "record deleted");
        Ok(())
    }
}
