// tests/support/mocks/util.rs
use caderno_core::application::ports::util::RandomIdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl RandomIdGenerator for SequentialIds {
    fn random_id(&self) -> String {
        format!("{:012x}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
