//! JSON report of the statistics behind a transfer.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use huematch_core::{ChannelStats, TransferOptions, TransferOutcome};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::error::CliError;

/// Transfer-space statistics labelled by axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabStats {
    pub lightness: ChannelStats,
    pub a: ChannelStats,
    pub b: ChannelStats,
}

impl From<[ChannelStats; 3]> for LabStats {
    fn from([lightness, a, b]: [ChannelStats; 3]) -> Self {
        Self { lightness, a, b }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub options: TransferOptions,
    pub source_stats: LabStats,
    pub target_stats: LabStats,
    pub elapsed_ms: f64,
}

impl TransferReport {
    pub fn new(
        args: &Args,
        options: &TransferOptions,
        outcome: &TransferOutcome,
        elapsed: Duration,
    ) -> Self {
        Self {
            source: args.source.clone(),
            target: args.target.clone(),
            output: args.output.clone(),
            width: outcome.image.width(),
            height: outcome.image.height(),
            options: *options,
            source_stats: outcome.source_stats.into(),
            target_stats: outcome.target_stats.into(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// Write `report` as pretty-printed JSON.
pub fn write_report(path: &Path, report: &TransferReport) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report).map_err(CliError::Report)?;
    fs::write(path, json).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote report {}", path.display());
    Ok(())
}
