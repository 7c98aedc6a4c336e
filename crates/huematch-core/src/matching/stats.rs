//! Per-channel mean and population standard deviation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransferError};
use crate::image::TransferImage;

/// Mean and population standard deviation of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// Compute `[L, A, B]` statistics over every pixel of `image`.
///
/// Uses divisor N. Accumulates in `f64` in a single pass (Welford), so a
/// constant channel reports its value as the mean and exactly zero
/// deviation.
///
/// Fails with `EmptyImage` when the image has no pixels.
pub fn compute_stats(image: &TransferImage) -> Result<[ChannelStats; 3]> {
    if image.is_empty() {
        let (width, height) = image.dimensions();
        return Err(TransferError::EmptyImage { width, height });
    }

    let mut acc = [Accumulator::default(); 3];
    for px in image.pixels() {
        for (a, v) in acc.iter_mut().zip(px) {
            a.push(f64::from(*v));
        }
    }
    Ok(acc.map(Accumulator::finish))
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Accumulator {
    fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn finish(self) -> ChannelStats {
        let variance = self.m2 / self.count as f64;
        ChannelStats {
            mean: self.mean,
            std_dev: variance.max(0.0).sqrt(),
        }
    }
}
