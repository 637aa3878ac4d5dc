use clipfold_config::ClipfoldConfig;
use clipfold_fsops::scan_videos;

use crate::cli::{OutputFormat, ScanArgs};
use crate::client::{CliError, CliResult};
use crate::output::render_scan;

pub(crate) fn handle_scan(
    config: &ClipfoldConfig,
    args: &ScanArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let videos =
        scan_videos(&args.dir, &config.library).map_err(|err| CliError::from_fsops(&err))?;
    render_scan(&videos, format)
}
