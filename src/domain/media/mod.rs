// src/domain/media/mod.rs
pub mod crop;
pub mod data_url;
pub mod object;
pub mod url;

pub use crop::{AspectRatio, CropView, MAX_OUTPUT_WIDTH, PercentArea, PixelRegion, Point, Size};
pub use data_url::DataUrl;
pub use object::{Bucket, ImageFormat, ObjectName};
pub use url::{THUMBNAIL_WIDTH, optimized_image_url};
