//! Mean/σ remapping of a transfer-space image.
//!
//! For each channel `c` and value `v`:
//!
//! ```text
//! v' = (v − target_mean[c]) · scale[c] + source_mean[c]
//! ```
//!
//! followed by the range policy of [`RangeMode`]. The input image is never
//! modified.

use std::array;

use crate::color_management::lab::TRANSFER_MAX;
use crate::image::TransferImage;
use crate::matching::stats::ChannelStats;
use crate::options::{RangeMode, TransferOptions};

/// Remap `target` toward `source_stats` with the default options
/// (`source σ / target σ`, clip to `[0, 255]`).
pub fn remap(
    target: &TransferImage,
    target_stats: &[ChannelStats; 3],
    source_stats: &[ChannelStats; 3],
) -> TransferImage {
    remap_with(target, target_stats, source_stats, &TransferOptions::default())
}

/// Remap `target` toward `source_stats` using `options`.
///
/// Clipping bounds are `[0, 255]` on all three channels even though `a*`
/// and `b*` never reach the ends of that range.
pub fn remap_with(
    target: &TransferImage,
    target_stats: &[ChannelStats; 3],
    source_stats: &[ChannelStats; 3],
    options: &TransferOptions,
) -> TransferImage {
    let scale: [f64; 3] =
        array::from_fn(|c| options.scale.factor(&target_stats[c], &source_stats[c]));
    let shift = |px: [f32; 3]| -> [f64; 3] {
        array::from_fn(|c| {
            (f64::from(px[c]) - target_stats[c].mean) * scale[c] + source_stats[c].mean
        })
    };

    match options.range {
        RangeMode::Clip => target.map(|px| shift(px).map(clip)),
        RangeMode::Rescale => {
            let shifted = target.map(shift);
            let ranges: [ChannelRange; 3] =
                array::from_fn(|c| ChannelRange::measure(shifted.pixels(), c));
            shifted.map(|px| array::from_fn(|c| ranges[c].apply(px[c])))
        }
    }
}

fn clip(v: f64) -> f32 {
    v.clamp(0.0, TRANSFER_MAX) as f32
}

/// Observed extent of one channel and where it has to go.
#[derive(Debug, Clone, Copy)]
struct ChannelRange {
    min: f64,
    max: f64,
}

impl ChannelRange {
    fn measure(pixels: &[[f64; 3]], channel: usize) -> Self {
        pixels.iter().fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |r, px| Self {
                min: r.min.min(px[channel]),
                max: r.max.max(px[channel]),
            },
        )
    }

    fn apply(&self, v: f64) -> f32 {
        let lo = self.min.max(0.0);
        let hi = self.max.min(TRANSFER_MAX);
        if self.min >= lo && self.max <= hi {
            return v as f32;
        }
        // Nothing left to stretch into: constant channel, or every value on
        // one side of the range.
        if self.max <= self.min || hi <= lo {
            return clip(v);
        }
        clip((hi - lo) * (v - self.min) / (self.max - self.min) + lo)
    }
}
