use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use legal_notice::app::{load_gate_config, App, StartupState};
use legal_notice::gate::ConsentError;
use legal_notice::host::process::ProcessLifecycle;
use legal_notice::prompt::terminal::stdio_prompt;
use legal_notice::prompt::WindowOwner;
use legal_notice::storage::settings::JsonSettingsStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Kode Beagle host - shows the legal notice on first run
#[derive(Parser, Debug)]
#[command(name = "legal-notice")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the host settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Path to a gate configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Forget any recorded answer and re-enable the plugin
    #[arg(long)]
    reset: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, ConsentError> {
    let settings = Arc::new(match cli.settings {
        Some(path) => JsonSettingsStore::open(path),
        None => JsonSettingsStore::open_default()?,
    });
    let config = cli
        .config
        .as_deref()
        .map(load_gate_config)
        .unwrap_or_default();

    // A relaunch must not reset again.
    let relaunch_args: Vec<OsString> = std::env::args_os()
        .skip(1)
        .filter(|arg| arg.as_os_str() != "--reset")
        .collect();
    let lifecycle = Arc::new(ProcessLifecycle::new(settings.clone(), relaunch_args));

    let plugin_id = config.plugin_id.clone();
    let mut app = App::new(settings, config, stdio_prompt(), lifecycle);
    if cli.reset {
        app.reset()?;
    }

    match app.start(Some(WindowOwner::new("legal-notice"))) {
        StartupState::Active => {
            println!("{plugin_id} is active.");
            Ok(ExitCode::SUCCESS)
        }
        StartupState::Disabled => {
            println!("{plugin_id} is disabled. Run with --reset to review the legal notice again.");
            Ok(ExitCode::SUCCESS)
        }
        StartupState::Pending => {
            println!("The legal notice was not answered; it will be shown on the next launch.");
            Ok(ExitCode::FAILURE)
        }
    }
}
