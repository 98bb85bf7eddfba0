use anyhow::Result;
use calculator::CalculatorModule;
use calculator_sdk::Operation;
use calculator_server::{AppConfig, logging, server, shutdown};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio_util::sync::CancellationToken;

use std::path::PathBuf;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator Server - arithmetic evaluation over HTTP
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - arithmetic evaluation over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Evaluate a single binary operation and print the result
    #[command(allow_negative_numbers = true)]
    Eval {
        /// One of: add, subtract, multiply, divide, power
        operation: String,
        a: f64,
        b: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose)?;

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
        Commands::Eval { operation, a, b } => eval(&operation, a, b),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.server.socket_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

fn eval(operation: &str, a: f64, b: f64) -> Result<()> {
    let op: Operation = operation.parse()?;
    let module = CalculatorModule::new();
    let r = module.client().calculate(op, a, b)?;
    println!("{}", r.result);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Calculator Server starting");

    let cancel = CancellationToken::new();
    let signals = shutdown::spawn_signal_listener(cancel.clone());

    let module = CalculatorModule::new();
    let router = server::build_router(&config.server, &module);
    let result = server::serve(&config.server, router, cancel).await;

    signals.abort();
    tracing::info!("Calculator Server stopped");
    result
}
