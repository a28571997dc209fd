// src/infrastructure/media/mod.rs
mod image_processor;
mod local_storage;

pub use image_processor::RasterImageProcessor;
pub use local_storage::LocalObjectStorage;
