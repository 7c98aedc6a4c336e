//! Command-line arguments and how they combine with an options file.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use huematch_core::{RangeMode, ScaleDirection, TransferOptions};

use crate::error::CliError;

/// Default preview width in pixels.
pub const DEFAULT_PREVIEW_WIDTH: u32 = 500;

#[derive(Debug, Parser)]
#[command(name = "huematch")]
#[command(version, about = "Statistical color transfer between images", long_about = None)]
pub struct Args {
    /// Image whose colors are transferred
    #[arg(short, long, value_name = "PATH")]
    pub source: PathBuf,

    /// Image to recolor
    #[arg(short, long, value_name = "PATH")]
    pub target: PathBuf,

    /// Output image; the format follows the extension
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// JSON file with transfer options (flags below take precedence)
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// How remapped values that leave [0, 255] are handled
    #[arg(long, value_enum, env = "HUEMATCH_RANGE")]
    pub range: Option<RangeArg>,

    /// Which standard-deviation ratio scales the target
    #[arg(long, value_enum, env = "HUEMATCH_SCALE")]
    pub scale: Option<ScaleArg>,

    /// Also write a downsized preview of the result
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Preview width; height follows the aspect ratio
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_PREVIEW_WIDTH)]
    pub preview_width: u32,

    /// Write source/target channel statistics as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeArg {
    Clip,
    Rescale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    SourceOverTarget,
    TargetOverSource,
}

impl From<RangeArg> for RangeMode {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::Clip => Self::Clip,
            RangeArg::Rescale => Self::Rescale,
        }
    }
}

impl From<ScaleArg> for ScaleDirection {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::SourceOverTarget => Self::SourceOverTarget,
            ScaleArg::TargetOverSource => Self::TargetOverSource,
        }
    }
}

impl Args {
    /// Options from `--options` (or defaults), overridden by `--range`/`--scale`.
    pub fn transfer_options(&self) -> Result<TransferOptions, CliError> {
        let mut options = match &self.options {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| CliError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| CliError::Options {
                    path: path.clone(),
                    source,
                })?
            }
            None => TransferOptions::default(),
        };
        if let Some(range) = self.range {
            options.range = range.into();
        }
        if let Some(scale) = self.scale {
            options.scale = scale.into();
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["huematch", "-s", "a.png", "-t", "b.png", "-o", "c.png"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_required_paths() {
        let args = parse(&[]);
        assert_eq!(args.source, PathBuf::from("a.png"));
        assert_eq!(args.target, PathBuf::from("b.png"));
        assert_eq!(args.output, PathBuf::from("c.png"));
        assert_eq!(args.preview_width, DEFAULT_PREVIEW_WIDTH);
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let result = Args::try_parse_from(["huematch", "--source", "a.png", "--output", "c.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_long_flags_and_modes() {
        let args = parse(&["--range", "rescale", "--scale", "target-over-source", "-vv"]);
        assert_eq!(args.range, Some(RangeArg::Rescale));
        assert_eq!(args.scale, Some(ScaleArg::TargetOverSource));
        assert_eq!(args.verbose, 2);
        let options = args.transfer_options().unwrap();
        assert_eq!(options.range, RangeMode::Rescale);
        assert_eq!(options.scale, ScaleDirection::TargetOverSource);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let mut argv = vec!["huematch", "-s", "a", "-t", "b", "-o", "c"];
        argv.extend(["--range", "wrap"]);
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_flags_override_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.json");
        fs::write(&path, r#"{"range":"rescale","scale":"target-over-source"}"#).unwrap();

        let path_str = path.to_str().unwrap();
        let args = parse(&["--options", path_str, "--scale", "source-over-target"]);
        let options = args.transfer_options().unwrap();
        assert_eq!(options.range, RangeMode::Rescale);
        assert_eq!(options.scale, ScaleDirection::SourceOverTarget);
    }

    #[test]
    fn test_malformed_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.json");
        fs::write(&path, "{ not json").unwrap();

        let args = parse(&["--options", path.to_str().unwrap()]);
        assert!(matches!(
            args.transfer_options(),
            Err(CliError::Options { .. })
        ));
    }
}
