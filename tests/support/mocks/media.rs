// tests/support/mocks/media.rs
use async_trait::async_trait;
use bytes::Bytes;
use caderno_core::application::{
    ApplicationResult, error::ApplicationError, ports::storage::ObjectStorage,
};
use caderno_core::domain::media::{Bucket, ObjectName};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

pub const STORAGE_BASE: &str = "https://media.test/storage";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: &'static str,
    pub name: String,
    pub content_type: String,
    pub body: Bytes,
}

#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<Vec<StoredObject>>,
    failing: AtomicBool,
}

impl MemoryStorage {
    pub fn fail_uploads(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(
        &self,
        bucket: Bucket,
        name: &ObjectName,
        body: Bytes,
        content_type: &str,
    ) -> ApplicationResult<String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("storage unavailable"));
        }
        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.as_str(),
            name: name.as_str().to_string(),
            content_type: content_type.to_string(),
            body,
        });
        Ok(self.public_url(bucket, name))
    }

    fn public_url(&self, bucket: Bucket, name: &ObjectName) -> String {
        format!("{STORAGE_BASE}/{}/{}", bucket.as_str(), name.as_str())
    }

    fn public_base(&self) -> &str {
        STORAGE_BASE
    }
}
