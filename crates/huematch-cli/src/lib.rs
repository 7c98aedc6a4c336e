//! Huematch CLI — file I/O, previews and reports around `huematch-core`.

use std::time::Instant;

use huematch_core::transfer_color_report;

pub mod args;
pub mod codec;
pub mod error;
pub mod preview;
pub mod report;

pub use args::Args;
pub use error::CliError;

/// Load both images, run the transfer, and write every requested output.
pub fn run(args: &Args) -> Result<(), CliError> {
    let options = args.transfer_options()?;
    tracing::debug!(?options, "transfer options");

    let source = codec::load_image(&args.source)?;
    let target = codec::load_image(&args.target)?;

    let start = Instant::now();
    let outcome = transfer_color_report(&source, &target, &options)?;
    let elapsed = start.elapsed();
    tracing::info!(
        "transferred {}x{} target in {:.1}ms",
        target.width(),
        target.height(),
        elapsed.as_secs_f64() * 1000.0
    );
    tracing::debug!(
        source_stats = ?outcome.source_stats,
        target_stats = ?outcome.target_stats,
        "channel statistics"
    );

    codec::save_image(&args.output, &outcome.image)?;

    if let Some(path) = &args.preview {
        let small = preview::resize_to_width(&outcome.image, args.preview_width);
        codec::save_image(path, &small)?;
    }

    if let Some(path) = &args.report {
        let report = report::TransferReport::new(args, &options, &outcome, elapsed);
        report::write_report(path, &report)?;
    }

    Ok(())
}
