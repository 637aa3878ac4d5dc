//! Output renderers and formatting helpers for CLI commands.

use std::path::PathBuf;

use anyhow::anyhow;
use clipfold_events::EventEnvelope;
use clipfold_fsops::MoveOutcome;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

/// Per-video result of the `thumbs` command.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ThumbnailReport {
    pub(crate) video: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

impl ThumbnailReport {
    pub(crate) const fn failed(&self) -> bool {
        self.error.is_some()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

pub(crate) fn render_scan(videos: &[PathBuf], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(videos)?),
        OutputFormat::Table => {
            for video in videos {
                println!("{}", video.display());
            }
            println!("{} video(s) found", videos.len());
        }
    }
    Ok(())
}

pub(crate) fn render_thumbnails(reports: &[ThumbnailReport], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(reports)?),
        OutputFormat::Table => {
            for report in reports {
                if let Some(error) = &report.error {
                    println!("FAIL {} {error}", report.video.display());
                    continue;
                }
                if let Some(output) = &report.output {
                    println!(
                        "ok   {} -> {} ({})",
                        report.video.display(),
                        output.display(),
                        format_bytes(report.bytes.unwrap_or_default())
                    );
                }
                if let Some(data_url) = &report.data_url {
                    println!("{} {data_url}", report.video.display());
                }
            }
            let failed = reports.iter().filter(|report| report.failed()).count();
            println!("{} thumbnail(s), {failed} failed", reports.len());
        }
    }
    Ok(())
}

pub(crate) fn render_event(envelope: &EventEnvelope, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(envelope)
                .map_err(|err| CliError::failure(anyhow!("failed to format event JSON: {err}")))?;
            println!("{line}");
        }
        OutputFormat::Table => {
            println!(
                "[{:>3}] {:<8} {}",
                envelope.id,
                envelope.event.kind(),
                envelope.event.message()
            );
        }
    }
    Ok(())
}

pub(crate) fn render_move_outcome(outcome: &MoveOutcome, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(outcome)?),
        OutputFormat::Table => {
            println!("moved: {}", outcome.moved);
            println!("destination: {}", outcome.destination.display());
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
