//! # Route Table Module
//!
//! Loads a routing table declared as data and registers it into a [`Router`].
//!
//! ## File format
//!
//! ```toml
//! [[routes]]
//! method = "GET"
//! path = "/users/:id(\\d+)"
//! handler = "get_user"
//!
//! [[routes]]
//! method = "GET"
//! path = "/assets/*"
//! handler = "static_files"
//! ```
//!
//! Handlers are names; binding a name to code is up to the caller (e.g. a
//! dispatcher keyed by handler name).
//!
//! ## Error Handling
//!
//! Loading stops at the first entry that fails to parse or register. The error
//! names the entry's position, method and path so the table can be fixed; a
//! partially registered router is never returned.

use anyhow::{Context, Result};
use http::Method;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::router::Router;
use crate::runtime_config::RuntimeConfig;

/// One `[[routes]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSpec {
    /// HTTP method token; case-insensitive in the file, upper-cased on load
    pub method: String,
    /// Route pattern
    pub path: String,
    /// Handler name returned on a match
    pub handler: String,
}

/// A parsed route table file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteTable {
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Parse a route table from TOML text
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or a missing required field.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse route table")
    }

    /// Read and parse a route table file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid route table {}", path.display()))
    }

    /// Register every entry into a new router
    ///
    /// # Errors
    ///
    /// Fails on the first entry with an invalid method or a pattern the router
    /// rejects.
    pub fn build_router(&self, config: &RuntimeConfig) -> Result<Router<String>> {
        let mut router = Router::with_config(config);

        for (index, route) in self.routes.iter().enumerate() {
            let method = parse_method(&route.method)
                .with_context(|| format!("route #{index}: invalid HTTP method '{}'", route.method))?;
            router
                .try_register(method, &route.path, route.handler.clone())
                .with_context(|| {
                    format!("route #{index}: cannot register {} {}", route.method, route.path)
                })?;
        }

        info!(
            routes_count = router.len(),
            "Routing table loaded"
        );
        Ok(router)
    }
}

/// Parse a method token the way route tables and the CLI accept it:
/// surrounding whitespace ignored, case-insensitive.
///
/// # Errors
///
/// Fails if the token is not a valid HTTP method.
pub fn parse_method(raw: &str) -> Result<Method> {
    Method::from_bytes(raw.trim().to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method '{raw}'"))
}

/// Load a route table file and build a router from it
///
/// # Errors
///
/// See [`RouteTable::load`] and [`RouteTable::build_router`].
pub fn load_router<P: AsRef<Path>>(path: P, config: &RuntimeConfig) -> Result<Router<String>> {
    RouteTable::load(path)?.build_router(config)
}
