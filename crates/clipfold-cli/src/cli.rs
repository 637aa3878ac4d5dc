//! Argument parsing, logging setup and command dispatch.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clipfold_config::{CONFIG_ENV_VAR, ClipfoldConfig, LogFormatSetting, load_config};
use clipfold_telemetry::{LogFormat, LoggingConfig, build_sha, init_logging};
use tracing::{Instrument, debug, info_span};

use crate::client::{CliError, CliResult};
use crate::commands::move_batch::handle_move;
use crate::commands::scan::handle_scan;
use crate::commands::thumbs::handle_thumbs;

/// Parse process arguments, execute the requested command and return the
/// process exit code.
pub async fn run() -> i32 {
    run_with_args(std::env::args_os()).await
}

/// Same as [`run`] with explicit arguments; the first item is the program
/// name.
pub async fn run_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let code = err.exit_code();
            let _ = err.print();
            return code;
        }
    };

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_deref()).map_err(|err| CliError::from_config(&err))?;
    install_logging(&config, cli.log_level.as_deref());
    let label = command_label(&cli.command);
    let span = info_span!("command", command = label, build_sha = build_sha());

    async move {
        debug!("dispatching command");
        match cli.command {
            Command::Scan(args) => handle_scan(&config, &args, cli.output),
            Command::Thumbs(args) => handle_thumbs(&config, args, cli.output).await,
            Command::Move(args) => handle_move(&config, args, cli.output).await,
        }
    }
    .instrument(span)
    .await
}

fn install_logging(config: &ClipfoldConfig, level_override: Option<&str>) {
    let format = match config.telemetry.format {
        Some(LogFormatSetting::Json) => LogFormat::Json,
        Some(LogFormatSetting::Pretty) => LogFormat::Pretty,
        None => LogFormat::infer(),
    };
    let logging = LoggingConfig {
        level: level_override.unwrap_or(&config.telemetry.level),
        format,
        build_sha: option_env!("CLIPFOLD_BUILD_SHA").unwrap_or("dev"),
    };
    // A second install in the same process keeps the first subscriber.
    let _ = init_logging(&logging);
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Scan(_) => "scan",
        Command::Thumbs(_) => "thumbs",
        Command::Move(_) => "move",
    }
}

#[derive(Parser)]
#[command(name = "clipfold", about = "Sort video clips into per-batch folders")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = CONFIG_ENV_VAR,
        help = "Path to a JSON configuration document"
    )]
    config: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[arg(
        long,
        global = true,
        help = "Log level used when RUST_LOG is unset (overrides the configuration)"
    )]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List video files under a directory.
    Scan(ScanArgs),
    /// Extract one still frame per video found under a directory.
    Thumbs(ThumbsArgs),
    /// Move files into a new folder named after the first one.
    Move(MoveArgs),
}

#[derive(Args)]
pub(crate) struct ScanArgs {
    #[arg(help = "Directory to scan recursively")]
    pub(crate) dir: PathBuf,
}

#[derive(Args)]
pub(crate) struct ThumbsArgs {
    #[arg(help = "Directory to scan recursively")]
    pub(crate) dir: PathBuf,
    #[arg(long, help = "Directory receiving one <stem>.jpg per video")]
    pub(crate) out: Option<PathBuf>,
    #[arg(long, help = "Print each thumbnail as a base64 data URL")]
    pub(crate) data_url: bool,
    #[arg(long, help = "Thumbnails generated concurrently (overrides the configuration)")]
    pub(crate) batch_size: Option<usize>,
    #[arg(long, help = "Seconds before one request is abandoned (overrides the configuration)")]
    pub(crate) timeout_secs: Option<u64>,
}

#[derive(Args)]
pub(crate) struct MoveArgs {
    #[arg(help = "Files to move; the first one names the destination folder")]
    pub(crate) files: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
