use clap::Parser;
use movieshell::cli::{Console, SecretInput, SessionOutcome, run_session};
use movieshell::config::{AppConfig, load_config};
use movieshell::{Credentials, MemoryStore, MongoStore, ShellError, logger};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "movieshell", version, about = "Interactive movie lookup over MongoDB", long_about = None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). Only logging and dataset settings are read.")]
    config: Option<PathBuf>,
    #[arg(long, help = "Serve movies from an NDJSON or JSON-array file instead of the remote cluster")]
    dataset: Option<PathBuf>,
    #[arg(long, help = "Read the password without echo when stdin is a terminal")]
    hide_password: bool,
    #[arg(long, help = "Directory for app.log and audit.log")]
    log_dir: Option<PathBuf>,
    #[arg(long, help = "Log level: off|error|warn|info|debug|trace")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = AppConfig {
        log_dir: cli.log_dir,
        log_level: cli.log_level,
        log_retention: None,
        dataset: cli.dataset,
    };
    let (cfg, skipped) = load_config(overrides, cli.config.as_deref());
    for e in &skipped {
        eprintln!("warning: skipping config file: {e}");
    }
    // stdout is the session; logs only go to files, and only when asked for.
    if (cfg.log_dir.is_some() || cfg.log_level.is_some())
        && let Err(e) = logger::configure_logging(
            cfg.log_dir.as_deref(),
            cfg.log_level.as_deref(),
            cfg.log_retention,
        )
    {
        eprintln!("warning: logging disabled: {e}");
    }
    for e in &skipped {
        log::warn!("skipping config file: {e}");
    }

    let secret_input = if cli.hide_password && io::stdin().is_terminal() {
        SecretInput::Hidden
    } else {
        SecretInput::Echo
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let result = match cfg.dataset {
        Some(path) => match MemoryStore::from_path(&path) {
            Ok(store) => run_session(&mut console, secret_input, move |_: &Credentials| {
                log::info!("offline dataset in use; credentials ignored");
                Ok::<_, ShellError>(store)
            }),
            Err(e) => Err(e),
        },
        None => run_session(&mut console, secret_input, MongoStore::connect),
    };
    drop(console);

    match result {
        Ok(SessionOutcome::Exited) => ExitCode::SUCCESS,
        Ok(SessionOutcome::ConnectFailed) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("session aborted: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
