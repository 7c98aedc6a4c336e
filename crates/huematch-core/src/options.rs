//! Options that select between the remapping variants.
//!
//! `TransferOptions::default()` is the classic Reinhard transfer: scale by
//! `source σ / target σ` and clip every channel to `[0, 255]`.

use serde::{Deserialize, Serialize};

use crate::matching::stats::ChannelStats;

/// How remapped values are brought back into `[0, 255]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeMode {
    /// Clamp each value to `[0, 255]`.
    #[default]
    Clip,
    /// Linearly squeeze a channel whose values leave `[0, 255]` back into
    /// `[max(min, 0), min(max, 255)]`; in-range channels are untouched.
    Rescale,
}

/// Which standard-deviation ratio scales the centered target values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleDirection {
    /// `source σ / target σ`: the target takes on the source's spread.
    #[default]
    SourceOverTarget,
    /// `target σ / source σ`, the reciprocal.
    TargetOverSource,
}

impl ScaleDirection {
    /// Scale factor for one channel.
    ///
    /// A zero denominator yields 1.0, so the channel is only shifted.
    pub fn factor(self, target: &ChannelStats, source: &ChannelStats) -> f64 {
        let (num, den) = match self {
            Self::SourceOverTarget => (source.std_dev, target.std_dev),
            Self::TargetOverSource => (target.std_dev, source.std_dev),
        };
        if den == 0.0 { 1.0 } else { num / den }
    }
}

/// Full set of remapping choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferOptions {
    pub range: RangeMode,
    pub scale: ScaleDirection,
}
