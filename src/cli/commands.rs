use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::route_table::{load_router, parse_method};
use crate::router::Router;
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for trierouter
#[derive(Parser)]
#[command(name = "trierouter")]
#[command(about = "Inspect and exercise trie route tables", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Load a route table and report how many routes it registers
    Check {
        /// Path to the TOML route table
        #[arg(short, long, env = "TRIEROUTER_ROUTES")]
        routes: PathBuf,
    },
    /// Print every registered route
    List {
        /// Path to the TOML route table
        #[arg(short, long, env = "TRIEROUTER_ROUTES")]
        routes: PathBuf,
    },
    /// Resolve a request against a route table
    Match {
        /// Path to the TOML route table
        #[arg(short, long, env = "TRIEROUTER_ROUTES")]
        routes: PathBuf,

        /// HTTP method (case-insensitive)
        method: String,

        /// Request path, e.g. /users/42
        path: String,
    },
    /// Print the methods that have a route for a path
    Allowed {
        /// Path to the TOML route table
        #[arg(short, long, env = "TRIEROUTER_ROUTES")]
        routes: PathBuf,

        /// Request path, e.g. /users/42
        path: String,
    },
}

/// Execute the parsed command, writing results to stdout.
///
/// # Errors
///
/// Fails when the route table cannot be loaded, the method is not a valid
/// HTTP token, or stdout cannot be written.
pub fn run_cli(cli: Cli) -> Result<ExitCode> {
    let config = RuntimeConfig::from_env();
    let mut out = io::stdout().lock();

    match &cli.command {
        Commands::Check { routes } => {
            let router = load(routes, &config)?;
            writeln!(
                out,
                "OK: {} routes across {} methods",
                router.len(),
                method_count(&router)
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::List { routes } => {
            let router = load(routes, &config)?;
            for (method, pattern, handler) in router.entries() {
                writeln!(out, "{method} {pattern} -> {handler}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match {
            routes,
            method,
            path,
        } => {
            let router = load(routes, &config)?;
            let method = parse_method(method)?;
            match router.route(&method, path) {
                Some(matched) => {
                    writeln!(out, "handler: {}", matched.handler())?;
                    writeln!(out, "pattern: {}", matched.pattern())?;
                    let mut params: Vec<_> = matched.path_params().iter().collect();
                    params.sort();
                    for (name, value) in params {
                        writeln!(out, "{name} = {value}")?;
                    }
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no route for {method} {path}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Allowed { routes, path } => {
            let router = load(routes, &config)?;
            for method in router.allowed_methods(path) {
                writeln!(out, "{method}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Path, config: &RuntimeConfig) -> Result<Router<String>> {
    load_router(path, config)
        .with_context(|| format!("Failed to load routes from {}", path.display()))
}

fn method_count(router: &Router<String>) -> usize {
    let mut methods: Vec<Method> = router.entries().into_iter().map(|(m, _, _)| m).collect();
    methods.dedup();
    methods.len()
}
