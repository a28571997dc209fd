// src/infrastructure/media/local_storage.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::storage::ObjectStorage,
};
use crate::domain::media::{Bucket, ObjectName};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Objects written below a root directory, one sub-directory per bucket,
/// and served back under `public_base`.
#[derive(Debug, Clone)]
pub struct LocalObjectStorage {
    root: PathBuf,
    public_base: String,
}

impl LocalObjectStorage {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, bucket: Bucket, name: &ObjectName) -> PathBuf {
        self.root.join(bucket.as_str()).join(name.as_str())
    }
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    async fn put(
        &self,
        bucket: Bucket,
        name: &ObjectName,
        body: Bytes,
        content_type: &str,
    ) -> ApplicationResult<String> {
        let path = self.path_for(bucket, name);
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        }
        tokio::fs::write(&path, &body)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tracing::debug!(path = %path.display(), content_type, "object written");
        Ok(self.public_url(bucket, name))
    }

    fn public_url(&self, bucket: Bucket, name: &ObjectName) -> String {
        format!("{}/{}/{}", self.public_base, bucket.as_str(), name.as_str())
    }

    fn public_base(&self) -> &str {
        &self.public_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_under_bucket_and_returns_public_url() {
        let root = std::env::temp_dir().join(format!("caderno-media-{}", uuid::Uuid::new_v4()));
        let storage = LocalObjectStorage::new(&root, "http://localhost:8080/media/");
        let name = ObjectName::parse("abc_1.jpg").unwrap();

        let url = storage
            .put(Bucket::Covers, &name, Bytes::from_static(b"jpeg"), "image/jpeg")
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8080/media/covers/abc_1.jpg");
        let stored = tokio::fs::read(root.join("covers").join("abc_1.jpg")).await.unwrap();
        assert_eq!(stored, b"jpeg");
        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
