// src/domain/media/url.rs

pub const THUMBNAIL_WIDTH: u32 = 800;

/// Ask the storage host for a resized WebP rendition. URLs outside
/// `storage_base`, and URLs already carrying a width, are returned as-is.
pub fn optimized_image_url(url: &str, storage_base: &str, width: u32) -> String {
    if storage_base.is_empty() || !url.starts_with(storage_base) || url.contains("width=") {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}width={width}&format=webp&quality=80")
}
