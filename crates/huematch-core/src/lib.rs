//! Huematch Core — statistical color transfer between images.
//!
//! Recolors a target image so that its per-channel mean and standard
//! deviation in CIE L\*a\*b\* match those of a source image. This crate holds
//! the color science, statistics and remapping. It does no file I/O and
//! never logs.

pub mod color_management;
pub mod error;
pub mod image;
pub mod matching;
pub mod options;
pub mod transfer;

// Re-exports for convenience.
pub use color_management::{to_display_space, to_transfer_space};
pub use error::{Result, TransferError};
pub use image::{DisplayImage, Image, TransferImage};
pub use matching::remap::{remap, remap_with};
pub use matching::stats::{ChannelStats, compute_stats};
pub use options::{RangeMode, ScaleDirection, TransferOptions};
pub use transfer::{
    TransferOutcome, image_stats, transfer_color, transfer_color_report, transfer_color_with,
};
