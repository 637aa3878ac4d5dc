//! Shell scripts standing in for the external media tool.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write an executable `/bin/sh` script named `name` into `dir`.
///
/// `body` is appended after the shebang line; the script receives the same
/// arguments the real tool would.
///
/// # Errors
///
/// Returns an error if the script cannot be written or made executable.
pub fn write_fake_tool(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("failed to mark {} executable", path.display()))?;
    Ok(path)
}

/// Script that prints fixed JPEG-looking bytes to stdout.
///
/// # Errors
///
/// See [`write_fake_tool`].
pub fn write_jpeg_tool(dir: &Path) -> Result<PathBuf> {
    write_fake_tool(dir, "fake-ffmpeg-ok", r"printf '\377\330\377\340fakejpeg'")
}

/// Script that exits zero without producing output.
///
/// # Errors
///
/// See [`write_fake_tool`].
pub fn write_silent_tool(dir: &Path) -> Result<PathBuf> {
    write_fake_tool(dir, "fake-ffmpeg-silent", "exit 0")
}

/// Script that writes `stderr` to its error stream and exits with `code`.
///
/// # Errors
///
/// See [`write_fake_tool`].
pub fn write_failing_tool(dir: &Path, code: i32, stderr: &str) -> Result<PathBuf> {
    write_fake_tool(
        dir,
        "fake-ffmpeg-fail",
        &format!("echo '{stderr}' >&2\nexit {code}"),
    )
}
