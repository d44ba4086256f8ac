//! JSON document storage.
//!
//! The file on disk is the source of truth: every `load` re-reads it in full and every
//! `save` replaces it in full. Nothing is cached between calls.

mod repository;

pub use repository::*;

use std::fs::Permissions;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::errors::AppError;
use crate::models::Document;

/// Handle on the backing JSON document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document. A missing or malformed file is an error.
    pub async fn load(&self) -> Result<Document, AppError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::Storage(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let document = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Storage(format!("failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(document)
    }

    /// Serialize the whole document and replace the file with it.
    ///
    /// Content goes to a sibling temporary file first and is renamed over the target, so a
    /// concurrent reader sees either the old or the new document in full. A symlinked path is
    /// resolved first and the existing file's permissions are carried over.
    pub async fn save(&self, document: &Document) -> Result<(), AppError> {
        let content = serde_json::to_vec_pretty(document)?;

        let target = tokio::fs::canonicalize(&self.path)
            .await
            .unwrap_or_else(|_| self.path.clone());
        let permissions = tokio::fs::metadata(&target)
            .await
            .ok()
            .map(|metadata| metadata.permissions());

        let file_name = target
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("db.json");
        let tmp = target.with_file_name(format!(".{}.tmp.{}", file_name, uuid::Uuid::new_v4()));

        if let Err(e) = write_synced(&tmp, &content, permissions).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(AppError::Storage(format!(
                "failed to write {}: {}",
                tmp.display(),
                e
            )));
        }

        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(AppError::Storage(format!(
                "failed to replace {}: {}",
                target.display(),
                e
            )));
        }

        Ok(())
    }
}

async fn write_synced(
    path: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content).await?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions).await?;
    }
    file.sync_all().await
}
