// src/domain/media/crop.rs
//! Crop geometry for the cover editor.
//!
//! The preview shows the image fitted into a container at zoom 1. The user
//! pans (`crop`, the offset of the image centre from the crop centre, in
//! display pixels) and zooms. The selected area is first expressed as a
//! percentage of the image, which makes it independent of the display scale,
//! and then projected onto the natural pixel grid.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;
/// Widest cover we keep; larger crops are scaled down.
pub const MAX_OUTPUT_WIDTH: u32 = 1920;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f64);

impl AspectRatio {
    pub const COVER: AspectRatio = AspectRatio(16.0 / 9.0);

    pub fn new(width: f64, height: f64) -> DomainResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(DomainError::validation("aspect ratio must be positive"));
        }
        Ok(Self(width / height))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Interactive crop state in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropView {
    /// Image size as displayed at zoom 1.
    pub media: Size,
    /// Size of the crop window.
    pub crop_size: Size,
    pub crop: Point,
    pub zoom: f64,
}

impl CropView {
    /// Fit a crop window of `aspect` into the displayed media and the container.
    pub fn fitted(media: Size, container: Size, aspect: AspectRatio) -> Self {
        Self {
            media,
            crop_size: crop_size_for(media, container, aspect),
            crop: Point::default(),
            zoom: MIN_ZOOM,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.media.is_positive() || !self.crop_size.is_positive() {
            return Err(DomainError::validation("crop sizes must be positive"));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(DomainError::validation(format!(
                "zoom must be between {MIN_ZOOM} and {MAX_ZOOM}"
            )));
        }
        if !self.crop.x.is_finite() || !self.crop.y.is_finite() {
            return Err(DomainError::validation("crop position must be finite"));
        }
        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.crop = self.clamp_position(self.crop);
    }

    pub fn set_crop(&mut self, crop: Point) {
        self.crop = self.clamp_position(crop);
    }

    /// Keep the crop window inside the zoomed image.
    pub fn clamp_position(&self, crop: Point) -> Point {
        let max_x = ((self.media.width * self.zoom - self.crop_size.width) / 2.0).max(0.0);
        let max_y = ((self.media.height * self.zoom - self.crop_size.height) / 2.0).max(0.0);
        Point {
            x: crop.x.clamp(-max_x, max_x),
            y: crop.y.clamp(-max_y, max_y),
        }
    }

    pub fn percent_area(&self) -> PercentArea {
        let media = self.media;
        let size = self.crop_size;
        let zoom = self.zoom;
        PercentArea {
            x: limit(
                100.0,
                ((media.width - size.width / zoom) / 2.0 - self.crop.x / zoom) / media.width * 100.0,
            ),
            y: limit(
                100.0,
                ((media.height - size.height / zoom) / 2.0 - self.crop.y / zoom) / media.height
                    * 100.0,
            ),
            width: limit(100.0, size.width / media.width * 100.0 / zoom),
            height: limit(100.0, size.height / media.height * 100.0 / zoom),
        }
    }
}

/// Selected area as percentages of the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PercentArea {
    /// Project onto the natural pixel grid, forcing the exact aspect ratio.
    pub fn to_pixels(&self, natural_width: u32, natural_height: u32, aspect: AspectRatio) -> PixelRegion {
        let nw = f64::from(natural_width);
        let nh = f64::from(natural_height);
        let width = limit(nw, self.width * nw / 100.0).round();
        let height = limit(nh, self.height * nh / 100.0).round();

        let (width, height) = if nw >= nh * aspect.value() {
            ((height * aspect.value()).round(), height)
        } else {
            (width, (width / aspect.value()).round())
        };

        let x = limit(nw - width, self.x * nw / 100.0).round();
        let y = limit(nh - height, self.y * nh / 100.0).round();
        PixelRegion {
            x: x as u32,
            y: y as u32,
            width: (width as u32).max(1),
            height: (height as u32).max(1),
        }
    }
}

impl PixelRegion {
    /// Dimensions of the encoded output: the region itself, scaled down to
    /// [`MAX_OUTPUT_WIDTH`] when wider, keeping `aspect`.
    pub fn output_size(&self, aspect: AspectRatio) -> (u32, u32) {
        let width = self.width.min(MAX_OUTPUT_WIDTH);
        let height = (f64::from(width) / aspect.value()).round() as u32;
        (width, height.max(1))
    }
}

/// Largest window of `aspect` that fits both the displayed media and the container.
pub fn crop_size_for(media: Size, container: Size, aspect: AspectRatio) -> Size {
    let fitting_width = media.width.min(container.width);
    let fitting_height = media.height.min(container.height);
    if fitting_width > fitting_height * aspect.value() {
        Size::new(fitting_height * aspect.value(), fitting_height)
    } else {
        Size::new(fitting_width, fitting_width / aspect.value())
    }
}

fn limit(max: f64, value: f64) -> f64 {
    value.max(0.0).min(max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(media: Size, zoom: f64, crop: Point) -> CropView {
        let mut view = CropView::fitted(media, Size::new(800.0, 600.0), AspectRatio::COVER);
        view.set_zoom(zoom);
        view.set_crop(crop);
        view
    }

    #[test]
    fn centered_crop_of_a_wide_image() {
        // 4000x2000 displayed at 800x400.
        let v = view(Size::new(800.0, 400.0), 1.0, Point::default());
        assert_eq!(v.crop_size.width.round(), 711.0);
        let region = v.percent_area().to_pixels(4000, 2000, AspectRatio::COVER);
        assert_eq!(region.height, 2000);
        assert_eq!(region.width, 3556);
        assert_eq!(region.y, 0);
        assert_eq!(region.x, 222);
    }

    #[test]
    fn region_is_independent_of_display_scale() {
        let small = view(Size::new(400.0, 300.0), 2.0, Point { x: 20.0, y: -10.0 });
        let large = view(Size::new(800.0, 600.0), 2.0, Point { x: 40.0, y: -20.0 });
        let a = small.percent_area().to_pixels(3200, 2400, AspectRatio::COVER);
        let b = large.percent_area().to_pixels(3200, 2400, AspectRatio::COVER);
        assert_eq!(a, b);
    }

    #[test]
    fn zoom_shrinks_the_region() {
        let media = Size::new(800.0, 600.0);
        let base = view(media, 1.0, Point::default()).percent_area().to_pixels(1600, 1200, AspectRatio::COVER);
        let zoomed = view(media, 2.0, Point::default()).percent_area().to_pixels(1600, 1200, AspectRatio::COVER);
        assert_eq!(base.width, 1600);
        assert_eq!(base.height, 900);
        assert_eq!(zoomed.width, 800);
        assert_eq!(zoomed.height, 450);
        assert_eq!((zoomed.x, zoomed.y), (400, 375));
    }

    #[test]
    fn output_is_capped_and_keeps_aspect() {
        let region = PixelRegion { x: 0, y: 0, width: 3556, height: 2000 };
        assert_eq!(region.output_size(AspectRatio::COVER), (1920, 1080));
        let small = PixelRegion { x: 0, y: 0, width: 800, height: 450 };
        assert_eq!(small.output_size(AspectRatio::COVER), (800, 450));
    }

    #[test]
    fn panning_is_clamped_to_the_image() {
        let v = view(Size::new(800.0, 600.0), 1.0, Point { x: 10_000.0, y: 10_000.0 });
        assert_eq!(v.crop.x, 0.0);
        assert_eq!(v.crop.y, (600.0 - 450.0) / 2.0);
        let region = v.percent_area().to_pixels(1600, 1200, AspectRatio::COVER);
        assert_eq!(region.y, 0);
    }

    #[test]
    fn invalid_views_are_rejected() {
        let mut v = view(Size::new(800.0, 600.0), 1.0, Point::default());
        v.zoom = 5.0;
        assert!(v.validate().is_err());
        v.zoom = 1.0;
        v.media.width = 0.0;
        assert!(v.validate().is_err());
    }
}
