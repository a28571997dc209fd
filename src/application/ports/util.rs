// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Short random alphanumeric strings used to name stored objects.
pub trait RandomIdGenerator: Send + Sync {
    fn random_id(&self) -> String;
}
