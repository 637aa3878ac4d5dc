//! External media tool invocation.
//!
//! # Design
//! - Frames are piped through stdout; nothing is written to disk.
//! - The child is killed if the returned future is dropped, so callers can
//!   impose timeouts with `tokio::time::timeout`.
//! - No retries and no fallback seek offsets.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use clipfold_config::ThumbnailPolicy;
use clipfold_events::Session;
use tokio::process::Command;
use tracing::{Instrument, debug, warn};

use crate::error::{ThumbsError, ThumbsResult};
use crate::thumbnail::Thumbnail;

/// Runs the media tool to grab one frame per video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailExtractor {
    program: String,
    seek_offset: String,
}

impl ThumbnailExtractor {
    /// Construct an extractor for `program`, seeking to `seek_offset`
    /// before grabbing the frame.
    #[must_use]
    pub fn new(program: impl Into<String>, seek_offset: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            seek_offset: seek_offset.into(),
        }
    }

    /// Construct an extractor from the thumbnail policy.
    #[must_use]
    pub fn from_policy(policy: &ThumbnailPolicy) -> Self {
        Self::new(policy.program.clone(), policy.seek_offset.clone())
    }

    /// Program started for each request.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the media tool for `video`.
    #[must_use]
    pub fn arguments(&self, video: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(11);
        args.push("-i".into());
        args.push(video.as_os_str().to_os_string());
        for arg in [
            "-ss",
            self.seek_offset.as_str(),
            "-vframes",
            "1",
            "-f",
            "image2pipe",
            "-c:v",
            "mjpeg",
            "-",
        ] {
            args.push(arg.into());
        }
        args
    }

    /// Extract one frame from `video`.
    ///
    /// # Errors
    ///
    /// Returns [`ThumbsError::Invocation`] if the tool cannot be started,
    /// [`ThumbsError::ToolFailed`] if it exits unsuccessfully and
    /// [`ThumbsError::NoData`] if it exits successfully without output.
    pub async fn extract(&self, video: &Path) -> ThumbsResult<Thumbnail> {
        debug!(program = %self.program, path = %video.display(), "starting thumbnail tool");
        let output = Command::new(&self.program)
            .args(self.arguments(video))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ThumbsError::Invocation {
                program: self.program.clone(),
                path: video.to_path_buf(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(ThumbsError::ToolFailed {
                path: video.to_path_buf(),
                code: output.status.code(),
                stderr,
            });
        }
        if output.stdout.is_empty() {
            return Err(ThumbsError::NoData {
                path: video.to_path_buf(),
                stderr,
            });
        }

        debug!(
            path = %video.display(),
            bytes = output.stdout.len(),
            "thumbnail extracted"
        );
        Ok(Thumbnail::jpeg(output.stdout))
    }

    /// Extract one frame from `video`, logging under the session span and
    /// pushing any failure to the session's sink.
    ///
    /// # Errors
    ///
    /// Same as [`ThumbnailExtractor::extract`].
    pub async fn extract_for(&self, session: &Session, video: &Path) -> ThumbsResult<Thumbnail> {
        let span = session.span("thumbnail");
        let result = self.extract(video).instrument(span.clone()).await;
        if let Err(error) = &result {
            let detail = error.detail();
            span.in_scope(|| {
                warn!(error = %error, path = %video.display(), detail = %detail, "thumbnail failed");
            });
            session.sink().on_error(&detail);
        }
        result
    }
}

impl Default for ThumbnailExtractor {
    fn default() -> Self {
        Self::from_policy(&ThumbnailPolicy::default())
    }
}
