// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::media::{Bucket, ObjectName};
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `body` and return its public URL.
    async fn put(
        &self,
        bucket: Bucket,
        name: &ObjectName,
        body: Bytes,
        content_type: &str,
    ) -> ApplicationResult<String>;

    fn public_url(&self, bucket: Bucket, name: &ObjectName) -> String;

    /// Prefix shared by every public URL this storage hands out.
    fn public_base(&self) -> &str;
}
