use std::sync::Arc;

use anyhow::anyhow;
use clipfold_config::ClipfoldConfig;
use clipfold_events::{EventBus, Session};
use clipfold_fsops::BatchMover;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::cli::{MoveArgs, OutputFormat};
use crate::client::{CliError, CliResult};
use crate::output::{render_event, render_move_outcome};

pub(crate) async fn handle_move(
    config: &ClipfoldConfig,
    args: MoveArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let bus = EventBus::new();
    let mut events = bus.subscribe();
    let session = Session::new(Arc::new(bus));
    let mover = BatchMover::from_policy(&config.library);
    let files = args.files;

    // The session owns the last bus handle, so the stream ends with the task.
    let task = tokio::task::spawn_blocking(move || mover.move_batch(&session, &files));

    while let Some(item) = events.next().await {
        match item {
            Ok(envelope) => render_event(&envelope, format)?,
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                eprintln!("warning: {skipped} progress event(s) dropped");
            }
        }
    }

    let result = task
        .await
        .map_err(|err| CliError::failure(anyhow!("move task failed: {err}")))?;
    match result {
        Ok(outcome) => render_move_outcome(&outcome, format),
        Err(err) => Err(CliError::from_fsops(&err)),
    }
}
