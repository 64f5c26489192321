//! Verification front-end — enter a provider ID, run a verification against
//! the SDK host, and inspect the result payload.

mod config;
mod render;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use reclaim_bridge::HttpProvider;
use reclaim_types::Timestamp;
use reclaim_utils::LogFormat;
use reclaim_verification::state::SUCCESS_STATUS;
use reclaim_verification::{ServiceHandle, VerificationController, VerificationService};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::AppConfig;
use crate::render::Renderer;

const INTERACTIVE_HELP: &str = "\
Type a provider ID, then:
  :submit  (:s)  start verification
  :clear   (:c)  clear input and result
  :quit    (:q)  exit";

#[derive(Parser)]
#[command(name = "reclaim-app", version, about = "In-app verification front-end")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with RECLAIM_APP_ID and RECLAIM_APP_SECRET.
    #[arg(long, env = "RECLAIM_SECRETS")]
    secrets: Option<PathBuf>,

    /// Base URL of the verification SDK host.
    #[arg(long, env = "RECLAIM_BRIDGE_URL")]
    bridge_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "RECLAIM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "RECLAIM_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Print display states as JSON lines.
    #[arg(long)]
    json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run a single verification and print the outcome.
    Verify {
        /// Provider ID to verify against.
        provider_id: String,
    },
    /// Read provider IDs and commands from stdin.
    Interactive,
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Submit,
    Clear,
    Quit,
    Help,
    /// A `:`-prefixed line that names no command.
    Unknown(String),
    /// Anything else replaces the provider ID, as typed.
    Text(String),
}

fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        return Input::Text(line.to_string());
    }
    match trimmed {
        ":submit" | ":s" => Input::Submit,
        ":clear" | ":c" => Input::Clear,
        ":quit" | ":q" => Input::Quit,
        ":help" | ":h" => Input::Help,
        other => Input::Unknown(other.to_string()),
    }
}

/// Layer CLI flags and env vars over the file (or default) configuration.
fn merge(cli: &Cli, file: AppConfig) -> AppConfig {
    AppConfig {
        bridge_url: cli.bridge_url.clone().unwrap_or(file.bridge_url),
        secrets_path: cli.secrets.clone().unwrap_or(file.secrets_path),
        log_format: cli.log_format.unwrap_or(file.log_format),
        log_level: cli.log_level.clone().unwrap_or(file.log_level),
        ..file
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => AppConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let config = merge(&cli, file_config);

    reclaim_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let credentials = config
        .load_credentials()
        .context("loading application credentials")?;
    let provider = Arc::new(HttpProvider::new(&config.bridge_url, config.request_timeout())?);
    tracing::info!(
        bridge = provider.endpoint(),
        app_id = credentials.app_id(),
        "verification front-end ready"
    );

    let (handle, task) =
        VerificationService::spawn(VerificationController::new(credentials), provider);
    let renderer = Renderer::new(cli.json);

    let code = match cli.command {
        Command::Verify { provider_id } => run_once(&handle, renderer, provider_id).await?,
        Command::Interactive => {
            run_interactive(&handle, renderer).await?;
            ExitCode::SUCCESS
        }
    };

    drop(handle);
    task.await.context("verification service task")?;
    Ok(code)
}

async fn run_once(
    handle: &ServiceHandle,
    mut renderer: Renderer,
    provider_id: String,
) -> anyhow::Result<ExitCode> {
    handle.set_input(provider_id).await?;
    if !handle.submit().await? {
        anyhow::bail!("provider ID must not be blank");
    }
    let display = handle.wait_settled().await?;
    println!("{}", renderer.render(&display, Timestamp::now()));

    Ok(if display.status_text == SUCCESS_STATUS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_interactive(handle: &ServiceHandle, mut renderer: Renderer) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut display = handle.subscribe();
    println!("{INTERACTIVE_HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Input::Quit => break,
                    Input::Submit => {
                        if handle.submit().await? {
                            renderer.reset_clock();
                        } else {
                            println!("(submit ignored: input is blank or a verification is running)");
                        }
                    }
                    Input::Clear => handle.clear().await?,
                    Input::Help => println!("{INTERACTIVE_HELP}"),
                    Input::Unknown(command) => {
                        println!("unknown command {command}; type :help for the list");
                    }
                    Input::Text(text) => handle.set_input(text).await?,
                }
            }
            changed = display.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = display.borrow_and_update().clone();
                println!("{}", renderer.render(&current, Timestamp::now()));
            }
        }
        std::io::stdout().flush().context("flushing stdout")?;
    }
    Ok(())
}
