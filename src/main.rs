// inavcli - command-line client for the INAV transpiler service
// Main entry point

use anyhow::Result;
use clap::{CommandFactory, Parser};

use inavcli::cli::{run_decompile, run_transpile};
use inavcli::client::{ClientConfig, TranspilerClient};

#[derive(Parser, Debug)]
#[command(name = "inavcli")]
#[command(about = "Command-line client for the INAV transpiler API", version)]
#[command(after_help = "\
Examples:
  # Transpile
  inavcli transpile \"if (inav.flight.armed) { inav.flight.disarm(); }\"

  # Decompile
  inavcli decompile \"logic 0 1\" \"setflight_arm\"")]
struct Args {
    /// Base URL of the transpiler service
    #[arg(long = "base-url")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Convert JavaScript code to INAV commands
    Transpile {
        /// JavaScript code tokens, joined with spaces into one snippet
        #[arg(required = true)]
        code: Vec<String>,
    },
    /// Convert INAV commands to JavaScript
    Decompile {
        /// INAV commands, one per argument
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = match args.base_url {
        Some(base_url) => ClientConfig { base_url },
        None => ClientConfig::default(),
    };
    let client = TranspilerClient::new(config)?;

    let outcome = match args.command {
        Some(Command::Transpile { code }) => run_transpile(&client, &code).await,
        Some(Command::Decompile { commands }) => run_decompile(&client, &commands).await,
        None => {
            Args::command().print_help()?;
            return Ok(());
        }
    };

    if let Err(e) = outcome {
        println!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing to stderr.
///
/// Default: INFO level, can be overridden with the RUST_LOG env var.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
