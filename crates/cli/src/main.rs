mod error;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use dataset::HotelStore;
use runtime::{HotelToolHost, OpenAiBackend, Orchestrator};
use server::AppState;
use tracing_subscriber::EnvFilter;

use error::Result;

const DEFAULT_PORT: u16 = 8000;

/// Sample queries exercised by `concierge test`.
const TEST_QUERIES: &[&str] = &[
    "What hotels are available in Tokyo under $300 per night?",
    "Show me details for The Savoy hotel in London and calculate the cost for 5 nights",
    "What are all the available booking locations?",
    "Find me a luxury hotel in Dubai with spa facilities",
];

#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "An LLM-backed hotel booking query service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Api {
        /// Port to bind
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Run the sample query battery against the orchestrator
    Test,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Api { port }) => cmd_api(port).await,
        Some(Commands::Test) => cmd_test().await,
        None => {
            print_usage();
            Ok(())
        }
    }
}

async fn cmd_api(port: u16) -> Result<()> {
    println!("Starting Hotel Booking API Server...");
    println!("Root: http://localhost:{port}/");
    println!("Health check: http://localhost:{port}/health");

    let state = AppState::from_env();
    server::run(state, port).await?;
    Ok(())
}

async fn cmd_test() -> Result<()> {
    println!("Hotel Booking LLM System");
    println!("{}", "=".repeat(50));

    // Missing credential is fatal here, unlike the API server.
    let backend = OpenAiBackend::from_env()?;
    let store = Arc::new(HotelStore::sample());
    let orchestrator = Orchestrator::new(backend, HotelToolHost::new(store));

    for (i, query) in TEST_QUERIES.iter().enumerate() {
        println!("\nQuery {}: {query}", i + 1);
        println!("{}", "-".repeat(40));
        let response = orchestrator.process(query).await;
        println!("{response}");
    }

    // Programmatic usage example
    let query = "What's the cheapest hotel in Paris?";
    let response = orchestrator.process(query).await;
    println!("\nQuery: {query}");
    println!("Response: {response}");

    Ok(())
}

fn print_usage() {
    println!("Hotel Booking System");
    println!("{}", "=".repeat(30));
    println!("Usage:");
    println!("  concierge api     - Start the REST API server");
    println!("  concierge test    - Run the sample query battery");
}
