use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use clipfold_config::ClipfoldConfig;
use clipfold_events::{Event, EventBus, EventStream, Session};
use clipfold_fsops::scan_videos;
use clipfold_thumbs::ThumbnailExtractor;
use futures_util::future::join_all;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::{info, warn};

use crate::cli::{OutputFormat, ThumbsArgs};
use crate::client::{CliError, CliResult};
use crate::output::{ThumbnailReport, render_thumbnails};

pub(crate) async fn handle_thumbs(
    config: &ClipfoldConfig,
    args: ThumbsArgs,
    format: OutputFormat,
) -> CliResult<()> {
    if args.out.is_none() && !args.data_url {
        return Err(CliError::validation(
            "nothing to do: pass --out <DIR> and/or --data-url",
        ));
    }
    let batch_size = args.batch_size.unwrap_or(config.thumbnails.batch_size);
    if batch_size == 0 {
        return Err(CliError::validation("--batch-size must be at least 1"));
    }
    let timeout_secs = args.timeout_secs.unwrap_or(config.thumbnails.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::validation("--timeout-secs must be at least 1"));
    }

    let videos =
        scan_videos(&args.dir, &config.library).map_err(|err| CliError::from_fsops(&err))?;
    if let Some(out) = &args.out {
        tokio::fs::create_dir_all(out).await.map_err(|err| {
            CliError::failure(anyhow!(
                "failed to create output directory {}: {err}",
                out.display()
            ))
        })?;
    }

    let bus = EventBus::new();
    let warnings = tokio::spawn(forward_failures(bus.subscribe()));
    let request = ThumbnailRequest {
        extractor: ThumbnailExtractor::from_policy(&config.thumbnails),
        session: Session::new(Arc::new(bus)),
        timeout: Duration::from_secs(timeout_secs),
        out: args.out,
        data_url: args.data_url,
    };

    let mut reports = Vec::with_capacity(videos.len());
    for batch in videos.chunks(batch_size) {
        let results = join_all(batch.iter().map(|video| request.generate(video))).await;
        reports.extend(results);
    }
    // The session holds the last bus handle; dropping it ends the warning stream.
    drop(request);
    let warned = warnings
        .await
        .map_err(|err| CliError::failure(anyhow!("warning task failed: {err}")))?
        .len();

    let failed = reports.iter().filter(|report| report.failed()).count();
    info!(total = reports.len(), failed, warned, "thumbnail run finished");
    render_thumbnails(&reports, format)?;
    if failed > 0 {
        return Err(CliError::failure(anyhow!(
            "{failed} of {} thumbnail(s) failed",
            reports.len()
        )));
    }
    Ok(())
}

/// Print extractor failures to stderr as they happen and return them once the
/// bus closes.
async fn forward_failures(mut events: EventStream) -> Vec<String> {
    let mut failures = Vec::new();
    while let Some(item) = events.next().await {
        match item {
            Ok(envelope) => {
                if let Event::Failed { message } = envelope.event {
                    eprintln!("warning: {message}");
                    failures.push(message);
                }
            }
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                eprintln!("warning: {skipped} progress event(s) dropped");
            }
        }
    }
    failures
}

struct ThumbnailRequest {
    extractor: ThumbnailExtractor,
    session: Session,
    timeout: Duration,
    out: Option<PathBuf>,
    data_url: bool,
}

impl ThumbnailRequest {
    async fn generate(&self, video: &Path) -> ThumbnailReport {
        let mut report = ThumbnailReport {
            video: video.to_path_buf(),
            output: None,
            data_url: None,
            bytes: None,
            error: None,
        };

        let thumbnail = match tokio::time::timeout(
            self.timeout,
            self.extractor.extract_for(&self.session, video),
        )
        .await
        {
            Ok(Ok(thumbnail)) => thumbnail,
            Ok(Err(err)) => {
                report.error = Some(err.detail());
                return report;
            }
            Err(_) => {
                warn!(path = %video.display(), timeout_secs = self.timeout.as_secs(), "thumbnail timed out");
                report.error = Some(format!("timed out after {}s", self.timeout.as_secs()));
                return report;
            }
        };

        report.bytes = Some(thumbnail.bytes().len());
        if self.data_url {
            report.data_url = Some(thumbnail.data_url());
        }
        if let Some(out) = &self.out {
            let stem = video
                .file_stem()
                .map_or_else(|| "thumbnail".to_string(), |stem| stem.to_string_lossy().into_owned());
            let target = out.join(format!("{stem}.jpg"));
            match tokio::fs::write(&target, thumbnail.bytes()).await {
                Ok(()) => report.output = Some(target),
                Err(err) => {
                    report.error = Some(format!("failed to write {}: {err}", target.display()));
                }
            }
        }
        report
    }
}
