//! regdoc-gateway - rate-limited document submission
//!
//! Command line front end for the gateway library

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use regdoc_gateway::utils::{format_duration, init_logging};
use regdoc_gateway::{
    Config, Document, GatewayError, NAME, RateLimitedGateway, Result, Signature, build_info,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("REGDOC_GIT_HASH"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "regdoc-gateway", version = VERSION, about)]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(short, long, env = "REGDOC_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit a document, optionally several copies at once
    Submit {
        /// JSON file holding the document
        #[arg(short, long)]
        document: PathBuf,

        /// Detached signature passed through to the service
        #[arg(short, long, env = "REGDOC_SIGNATURE", hide_env_values = true)]
        signature: String,

        /// Number of concurrent submissions of the same document
        #[arg(long, default_value_t = 1)]
        copies: usize,

        /// Give up on submissions not dispatched within this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Validate and print the effective configuration
    CheckConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Display, not Debug, keeps the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).await?;

    match cli.command {
        Command::CheckConfig => {
            let build = build_info();
            println!("# {} {} ({})", NAME, build.version, build.git_hash);
            print!("{}", config.to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit {
            document,
            signature,
            copies,
            timeout_secs,
        } => {
            init_logging(config.logging())?;
            submit(
                &config,
                &document,
                signature,
                copies,
                timeout_secs.map(Duration::from_secs),
            )
            .await
        }
    }
}

async fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
}

async fn submit(
    config: &Config,
    document_path: &Path,
    signature: String,
    copies: usize,
    timeout: Option<Duration>,
) -> Result<ExitCode> {
    if copies == 0 {
        return Err(GatewayError::invalid_request("--copies must be at least 1"));
    }

    let content = tokio::fs::read_to_string(document_path).await?;
    let document: Arc<Document> = Arc::new(serde_json::from_str(&content)?);
    let signature = Arc::new(Signature::new(signature)?);
    let gateway = Arc::new(RateLimitedGateway::from_config(config)?);

    info!(
        doc_id = %document.doc_id,
        products = document.product_count(),
        copies,
        "Submitting document"
    );

    let handles: Vec<_> = (0..copies)
        .map(|_| {
            let gateway = Arc::clone(&gateway);
            let document = Arc::clone(&document);
            let signature = Arc::clone(&signature);
            tokio::spawn(async move {
                match timeout {
                    Some(timeout) => {
                        gateway
                            .submit_with_timeout(&*document, &signature, timeout)
                            .await
                    }
                    None => gateway.submit(&*document, &signature).await,
                }
            })
        })
        .collect();

    let mut failed = 0usize;
    for (copy, handle) in handles.into_iter().enumerate() {
        let outcome = handle
            .await
            .map_err(|e| GatewayError::internal(format!("Submission task failed: {}", e)))?;

        match outcome {
            Ok(response) => println!(
                "[{}] queued {}: {}",
                copy + 1,
                format_duration(response.queued_for().as_millis() as u64),
                response.text()
            ),
            Err(e) => {
                failed += 1;
                error!(copy = copy + 1, error = %e, "Submission failed");
                eprintln!("[{}] {}", copy + 1, e);
            }
        }
    }

    let stats = gateway.stats().snapshot();
    info!(
        completed = stats.completed,
        transport_failures = stats.transport_failures,
        interrupted = stats.interrupted,
        "All submissions finished"
    );

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
