//! Downsized previews of a result image.

use huematch_core::DisplayImage;
use image::imageops::{self, FilterType};

/// Resize to `width`, keeping the aspect ratio. Height is at least 1.
///
/// Empty images and a zero `width` are returned unchanged.
pub fn resize_to_width(image: &DisplayImage, width: u32) -> DisplayImage {
    if image.is_empty() || width == 0 || width == image.width() {
        return image.clone();
    }
    let ratio = f64::from(width) / f64::from(image.width());
    let height = ((f64::from(image.height()) * ratio).round() as u32).max(1);
    let resized = imageops::resize(&image.to_rgb_image(), width, height, FilterType::Lanczos3);
    DisplayImage::from(&resized)
}
