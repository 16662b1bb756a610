use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tokio::io::AsyncRead;
use uuid::Uuid;

use crate::domain::repository::FileStore;
use crate::error::ReportsServiceError;

/// Blob storage on local disk under a configured root directory.
///
/// Keys are random, so concurrent uploads never collide on disk; replaced
/// blobs are orphaned rather than reclaimed.
#[derive(Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Collision-resistant storage key preserving the original extension.
fn storage_key(original_name: &str) -> String {
    let key = Uuid::new_v4();
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{key}.{ext}"),
        _ => key.to_string(),
    }
}

impl FileStore for LocalFileStore {
    async fn put(&self, data: &[u8], original_name: &str) -> Result<String, ReportsServiceError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create upload directory {}", self.root.display()))?;
        let path = self.root.join(storage_key(original_name));
        tokio::fs::write(&path, data)
            .await
            .with_context(|| format!("write blob {}", path.display()))?;
        Ok(path.to_string_lossy().into_owned())
    }

    async fn open(
        &self,
        location: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, ReportsServiceError> {
        let file = tokio::fs::File::open(location)
            .await
            .with_context(|| format!("open blob {location}"))?;
        Ok(Box::new(file))
    }

    async fn delete(&self, location: &str) -> Result<(), ReportsServiceError> {
        match tokio::fs::remove_file(location).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("delete blob {location}"))
                .into()),
        }
    }
}
