//! VendorLens: vendor email-thread analysis server and CLI.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vendorlens_extract::{extract, validate_submission, VendorRecord};

mod routes;
mod state;

use state::AppState;

/// Read a thread from `source`, where `-` means stdin.
fn read_thread(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read thread from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
    }
}

fn analyze_source(source: &str) -> anyhow::Result<VendorRecord> {
    let text = read_thread(source)?;
    let text = validate_submission(&text)?;
    Ok(extract(text))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `extract` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "extract" => {
                if args.len() < 3 {
                    eprintln!("Usage: vendorlens extract <thread-file|->");
                    std::process::exit(1);
                }
                let record = analyze_source(&args[2])?;
                println!("{}", serde_json::to_string_pretty(&record)?);
                return Ok(());
            }
            "export" => {
                if args.len() < 3 {
                    eprintln!("Usage: vendorlens export <thread-file|-> [out-dir]");
                    std::process::exit(1);
                }
                let record = analyze_source(&args[2])?;
                let out_dir = if args.len() > 3 {
                    PathBuf::from(&args[3])
                } else {
                    PathBuf::from(".")
                };
                let path = vendorlens_export::write_xlsx(&record, &out_dir)?;
                println!("{}", path.display());
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("VendorLens — vendor email-thread analysis");
                println!();
                println!("Usage: vendorlens [command]");
                println!();
                println!("Commands:");
                println!("  (none)                      Start the server");
                println!("  extract <file|->            Print the extracted vendor record as JSON");
                println!("  export <file|-> [out-dir]   Write the vendor summary workbook");
                println!("  help                        Show this help message");
                println!();
                println!("Environment:");
                println!("  PORT                             HTTP port (default 3010)");
                println!("  VENDORLENS_SIMULATED_LATENCY_MS  Delay before analysis responses");
                println!("  VENDORLENS_FORWARD_ADDRESS       Address advertised for forwarding");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'vendorlens help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let config = vendorlens_core::VendorLensConfig::from_env()?;
    let port = config.port;

    let state = Arc::new(AppState::new(config));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("VendorLens server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
