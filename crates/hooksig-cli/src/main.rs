//! hooksig CLI - verify and produce signed webhook deliveries.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod errors;
mod normalize;
mod output;

use commands::{keygen, sign, verify};
use errors::{EXIT_INVALID, EXIT_VALID};

#[derive(Parser)]
#[command(name = "hooksig")]
#[command(about = "Verify Ed25519-signed webhook deliveries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a delivery signature against a payload
    Verify(verify::VerifyArgs),
    /// Sign a payload and print the signature header
    Sign(sign::SignArgs),
    /// Generate a signing key pair
    Keygen(keygen::KeygenArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Verify(args) => verify::run(args).map(|valid| {
            if valid {
                EXIT_VALID
            } else {
                EXIT_INVALID
            }
        }),
        Commands::Sign(args) => sign::run(args).map(|()| EXIT_VALID),
        Commands::Keygen(args) => keygen::run(args).map(|()| EXIT_VALID),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
