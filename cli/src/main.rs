//! Tally host: replays governance operation scripts against a fresh engine.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tally_cli::{Host, HostConfig, Script};
use tally_utils::LogFormat;

#[derive(Parser)]
#[command(name = "tally", about = "Token-weighted governance state machine")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "TALLY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TALLY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TALLY_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Block height to start at.
    #[arg(long, env = "TALLY_START_HEIGHT")]
    start_height: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Execute a JSON script of operations, printing one JSON line per step.
    Replay {
        script: PathBuf,

        /// Stop at the first failed step.
        #[arg(long)]
        fail_fast: bool,
    },
    /// Print the effective configuration as TOML.
    Params,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => HostConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HostConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(height) = cli.start_height {
        config.start_height = height;
    }

    tally_utils::init_logging(config.log_format, &config.log_level)
        .context("initialising logging")?;

    match cli.command {
        Command::Params => {
            print!("{}", config.to_toml_string()?);
        }
        Command::Replay { script, fail_fast } => {
            let text = std::fs::read_to_string(&script)
                .with_context(|| format!("reading script {}", script.display()))?;
            let script = Script::from_json_str(&text).context("parsing script")?;

            let mut host = Host::new(&config)?;
            tracing::info!(
                steps = script.steps.len(),
                height = host.height().as_u64(),
                "replaying script"
            );
            let reports = host.run(&script, fail_fast);
            for report in &reports {
                println!("{}", serde_json::to_string(report)?);
            }
            let failed = reports.iter().filter(|r| !r.is_ok()).count();
            tracing::info!(
                steps = reports.len(),
                failed,
                height = host.height().as_u64(),
                proposals = host.engine().proposal_count(),
                "replay finished"
            );
            if fail_fast && failed > 0 {
                anyhow::bail!("replay stopped at failed step");
            }
        }
    }
    Ok(())
}
