//! Color transfer — the full source → target pipeline.
//!
//! 1. Convert both images to transfer space
//! 2. Compute per-channel statistics for both
//! 3. Remap the target toward the source statistics
//! 4. Convert the result back to display space
//!
//! Every call is independent; nothing is cached between calls.

use crate::color_management::{to_display_space, to_transfer_space};
use crate::error::Result;
use crate::image::DisplayImage;
use crate::matching::remap::remap_with;
use crate::matching::stats::{ChannelStats, compute_stats};
use crate::options::TransferOptions;

/// Result image together with the statistics that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    /// Recolored target, same dimensions as the target.
    pub image: DisplayImage,
    /// `[L, A, B]` statistics of the source in transfer space.
    pub source_stats: [ChannelStats; 3],
    /// `[L, A, B]` statistics of the target in transfer space.
    pub target_stats: [ChannelStats; 3],
}

/// Recolor `target` so its color distribution matches `source`.
///
/// Fails with `EmptyImage` if either image has no pixels. The output always
/// has the target's dimensions; the source may be any size.
pub fn transfer_color(source: &DisplayImage, target: &DisplayImage) -> Result<DisplayImage> {
    transfer_color_with(source, target, &TransferOptions::default())
}

/// [`transfer_color`] with explicit options.
pub fn transfer_color_with(
    source: &DisplayImage,
    target: &DisplayImage,
    options: &TransferOptions,
) -> Result<DisplayImage> {
    transfer_color_report(source, target, options).map(|outcome| outcome.image)
}

/// [`transfer_color_with`], also returning both images' statistics.
pub fn transfer_color_report(
    source: &DisplayImage,
    target: &DisplayImage,
    options: &TransferOptions,
) -> Result<TransferOutcome> {
    let source_lab = to_transfer_space(source);
    let target_lab = to_transfer_space(target);

    let source_stats = compute_stats(&source_lab)?;
    let target_stats = compute_stats(&target_lab)?;

    let remapped = remap_with(&target_lab, &target_stats, &source_stats, options);
    let image = to_display_space(&remapped)?;

    Ok(TransferOutcome {
        image,
        source_stats,
        target_stats,
    })
}

/// Transfer-space statistics of a display image.
pub fn image_stats(image: &DisplayImage) -> Result<[ChannelStats; 3]> {
    compute_stats(&to_transfer_space(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransferError;

    #[test]
    fn test_flat_target_takes_flat_source_color() {
        let target = DisplayImage::filled(2, 2, [100, 100, 100]);
        let source = DisplayImage::filled(2, 2, [200, 50, 50]);
        let out = transfer_color(&source, &target).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        for px in out.pixels() {
            for c in 0..3 {
                let diff = (i16::from(px[c]) - i16::from([200u8, 50, 50][c])).abs();
                assert!(diff <= 1, "{px:?}");
            }
        }
    }

    #[test]
    fn test_report_carries_statistics() {
        let target = DisplayImage::filled(3, 1, [10, 20, 30]);
        let source = DisplayImage::filled(1, 1, [255, 255, 255]);
        let outcome = transfer_color_report(&source, &target, &TransferOptions::default()).unwrap();
        assert!((outcome.source_stats[0].mean - 255.0).abs() < 1e-3);
        assert_eq!(outcome.target_stats[0].std_dev, 0.0);
        assert_eq!(outcome.image.dimensions(), (3, 1));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let source = DisplayImage::from_pixels(0, 3, Vec::new()).unwrap();
        let target = DisplayImage::filled(2, 2, [1, 2, 3]);
        assert_eq!(
            transfer_color(&source, &target),
            Err(TransferError::EmptyImage {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_image_stats_of_gray_is_neutral() {
        let stats = image_stats(&DisplayImage::filled(4, 4, [119, 119, 119])).unwrap();
        assert!((stats[1].mean - 128.0).abs() < 1e-3);
        assert!((stats[2].mean - 128.0).abs() < 1e-3);
        assert_eq!(stats[0].std_dev, 0.0);
    }
}
