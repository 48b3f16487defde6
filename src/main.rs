use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobqueue::config::{JobQueueConfig, LoggingConfig};
use jobqueue::driver;
use jobqueue::Command;

#[derive(Parser)]
#[command(
    name = "jobqueue",
    about = "Stable descending priority job queue",
    version,
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration and check its dequeue order
    Demo {
        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// Enqueue a JSON job list, then dequeue until empty
    Drain {
        /// Job list file, or `-` for stdin (defaults to `driver.input`)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Expected dequeue order, comma separated
        #[arg(long, value_delimiter = ',')]
        expect: Vec<String>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_order(order: &[Command], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(order)?);
    } else {
        for command in order {
            println!("{}", command);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = JobQueueConfig::resolve(cli.config.as_deref())?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Demo { json } => {
            tracing::info!("Running demonstration queue");
            let order = driver::run_demo()?;
            print_order(&order, json)?;
        }
        Commands::Drain {
            input,
            expect,
            json,
        } => {
            let input = input
                .or(config.driver.input)
                .context("no job list given: pass --input or set driver.input")?;
            let jobs = if input.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read job list from stdin")?;
                driver::parse_jobs(&buf)?
            } else {
                driver::load_jobs(&input)?
            };

            let order = driver::run(&jobs)?;
            print_order(&order, json)?;

            let expected = if expect.is_empty() {
                config.driver.expected
            } else {
                expect
            };
            if !expected.is_empty() {
                driver::verify(&expected[..], &order)?;
                tracing::info!(count = order.len(), "dequeue order verified");
            }
        }
    }

    Ok(())
}
