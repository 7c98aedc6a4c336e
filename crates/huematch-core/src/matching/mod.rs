//! Statistical matching — per-channel statistics and the mean/σ remap.

pub mod remap;
pub mod stats;
