//! `lambdamux` command line.
//!
//! Builds a route table from a TOML config and inspects or exercises it.
//!
//! ```text
//! lambdamux --config routes.toml routes
//! lambdamux --config routes.toml resolve GET /pet/42
//! lambdamux --config routes.toml invoke GET /pet/42
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use lambdamux::config::{load_config, MuxConfig};
use lambdamux::observability::init_logging;
use lambdamux::{BoxError, LambdaMux, ProxyRequest, RouteError};

#[derive(Parser)]
#[command(name = "lambdamux")]
#[command(about = "Inspect and exercise a radix-tree route table", long_about = None)]
struct Cli {
    /// Route table configuration (TOML). Defaults to an empty table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes
    Routes,
    /// List edge labels of the underlying tree
    Labels,
    /// Show the pattern and captures a request resolves to
    Resolve { method: String, path: String },
    /// Run a synthesized request through the table and print the response
    Invoke {
        method: String,
        path: String,
        /// Request body
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MuxConfig::default(),
    };
    init_logging(&config.observability)?;

    tracing::info!(routes = config.routes.len(), "Configuration loaded");

    let mux = match LambdaMux::from_config(&config.routes) {
        Ok(mux) => mux,
        Err(RouteError::Conflict(conflict)) => {
            tracing::error!(
                route = %conflict.key,
                existing = %conflict.existing,
                conflicting = %conflict.conflicting,
                "Route conflict"
            );
            return Err(conflict.into());
        }
        Err(err) => return Err(err.into()),
    };

    match cli.command {
        Commands::Routes => {
            for route in mux.routes() {
                println!("{route}");
            }
        }
        Commands::Labels => {
            for label in mux.edge_labels() {
                println!("{label:?}");
            }
        }
        Commands::Resolve { method, path } => match mux.resolve(&method, &path) {
            Some(resolved) => {
                let out = json!({ "pattern": resolved.pattern, "params": resolved.params });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            None => {
                eprintln!("No route matches {method} {path}");
                std::process::exit(1);
            }
        },
        Commands::Invoke { method, path, body } => {
            let mut request = ProxyRequest::new(method, path);
            request.body = body;
            let response = mux.handle(request).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
