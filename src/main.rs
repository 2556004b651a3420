/// abi-gen main entry point
use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use abi_gen_codegen::cli;
use abi_gen_codegen::config::LogConfig;

/// Install the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("Invalid log level: {}", logging.level))?,
    };

    // Logs go to stderr so that --dry-run output stays clean
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let (command, sub_matches) = matches
        .subcommand()
        .context("No subcommand given")?;

    let config = cli::load_config(sub_matches)?;
    init_tracing(&config.logging)?;
    debug!("Running {} with {:?}", command, config);

    match command {
        "generate" => cli::handle_generate_command(sub_matches, config).await,
        "verify" => cli::handle_verify_command(sub_matches, config).await,
        other => anyhow::bail!("Unknown command: {}", other),
    }
}
