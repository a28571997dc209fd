// src/infrastructure/util.rs
use crate::application::ports::util::{RandomIdGenerator, SlugGenerator};
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// 12 hex characters taken from a v4 UUID.
#[derive(Default, Clone)]
pub struct UuidRandomIdGenerator;

impl RandomIdGenerator for UuidRandomIdGenerator {
    fn random_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_drop_diacritics_and_punctuation() {
        assert_eq!(
            DefaultSlugGenerator.slugify("Equações de Maxwell: uma introdução!"),
            "equacoes-de-maxwell-uma-introducao"
        );
    }

    #[test]
    fn random_ids_are_short_and_alphanumeric() {
        let id = UuidRandomIdGenerator.random_id();
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, UuidRandomIdGenerator.random_id());
    }
}
