//! Entry point for the **wsassign** command.
//!
//! Parses the command line, sets up logging, picks a backend for `--wm` and
//! hands it to an [`Assigner`].

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use wsassign::assigner::{AssignError, Assigner};
use wsassign::command::{UnsupportedWm, WmKind};
use wsassign::config::{Config, ConfigError};
use wsassign::hyprland::batch::HyprctlBatch;
use wsassign::hyprland::socket::HyprlandSocket;
use wsassign::range::WorkspaceRange;
use wsassign::sway::SwayIpc;
use wsassign::traits::Compositor;

const EXAMPLES: &str = "\
Examples:
  wsassign --wm=hyprland --name=DP-1 --range=1-5
  wsassign --wm=hyprland --batch --name=DP-1 --range=1-5
  wsassign --wm=sway --name=DP-1 --range=1-5";

#[derive(Parser)]
#[command(
    name = "wsassign",
    version,
    about = "Assign a range of workspaces to a monitor",
    after_help = EXAMPLES
)]
struct Cli {
    /// Window manager type (hyprland or sway)
    #[arg(long, value_name = "WM", value_parser = NonEmptyStringValueParser::new())]
    wm: String,
    /// Monitor name
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    name: String,
    /// Workspace range (e.g., '1-5')
    #[arg(long, value_name = "START-END")]
    range: WorkspaceRange,
    /// Print commands without executing them
    #[arg(long)]
    dry_run: bool,
    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
    /// Send everything in a single `hyprctl --batch` call (Hyprland only)
    #[arg(long)]
    batch: bool,
    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Anything that ends the run with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
enum FatalError {
    #[error(transparent)]
    UnsupportedWm(#[from] UnsupportedWm),
    #[error("--batch is only supported with --wm=hyprland, not {0}")]
    BatchUnsupported(WmKind),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Assign(#[from] AssignError),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Plain messages by default; `--verbose` adds timestamps and debug lines.
/// `RUST_LOG` still wins over both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if verbose {
        builder.format_timestamp_micros();
    } else {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}

/// Load the config from `--config`, or from the default location if it
/// exists.  Only an explicitly requested file is required to be readable.
fn load_config(explicit: Option<&PathBuf>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }
    let path = Config::default_path();
    match Config::load(&path) {
        Ok(cfg) => {
            debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            debug!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

fn run(cli: &Cli) -> Result<(), FatalError> {
    let wm: WmKind = cli.wm.parse()?;
    let config = load_config(cli.config.as_ref())?;

    match (wm, cli.batch) {
        (WmKind::Hyprland, false) => assign(HyprlandSocket::from_env(&config), cli)?,
        (WmKind::Hyprland, true) => assign(HyprctlBatch::from_config(&config), cli)?,
        (WmKind::Sway, false) => assign(SwayIpc::new(), cli)?,
        (WmKind::Sway, true) => return Err(FatalError::BatchUnsupported(wm)),
    }
    Ok(())
}

fn assign<C: Compositor>(compositor: C, cli: &Cli) -> Result<(), AssignError> {
    let mut assigner = Assigner::new(compositor, cli.dry_run);
    assigner.run(&cli.name, cli.range)?;
    Ok(())
}
