//! # CLI Module
//!
//! Command-line access to route tables: validate a table, list its routes and
//! try lookups against it without starting a server.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Load a table and register every route:
//!
//! ```bash
//! trierouter check --routes routes.toml
//! ```
//!
//! ### `list`
//!
//! Print every route as `METHOD PATTERN -> handler`:
//!
//! ```bash
//! trierouter list --routes routes.toml
//! ```
//!
//! ### `match`
//!
//! Resolve one request; exits with status 1 when nothing matches:
//!
//! ```bash
//! trierouter match --routes routes.toml GET /users/42
//! ```
//!
//! ### `allowed`
//!
//! Print the methods that resolve a path:
//!
//! ```bash
//! trierouter allowed --routes routes.toml /users/42
//! ```
//!
//! The table path may also come from `TRIEROUTER_ROUTES`.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use trierouter::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! let code = run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
