//! # trierouter
//!
//! **trierouter** maps an HTTP method and request path to a registered handler
//! using one segment trie per method. It is the routing stage of a web server:
//! it knows nothing about sockets, headers or bodies.
//!
//! ## Overview
//!
//! Route patterns are `/`-separated segments, each one of:
//!
//! - **static** - `users` matches exactly that text
//! - **parameter** - `:id` matches any non-empty segment and binds it as `id`
//! - **regex parameter** - `:id(\d+)` binds only when the whole segment matches
//! - **wildcard** - `*` as the last segment matches the rest of the path
//!
//! At each depth a lookup prefers static over regex, regex over parameter and
//! parameter over wildcard. The decision is final: there is no backtracking
//! into a lower-priority branch.
//!
//! ## Architecture
//!
//! - **[`router`]** - The trie, registration and the lookup hot path
//! - **[`route_table`]** - Routes declared in a TOML file
//! - **[`hot_reload`]** - Republish a [`SharedRouter`] when its table file changes
//! - **[`logging`]** - `tracing` subscriber setup from environment variables
//! - **[`runtime_config`]** - Runtime tunables from environment variables
//! - **[`cli`]** - The `trierouter` command-line tool
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use trierouter::Router;
//!
//! let mut router = Router::new();
//! router.get("/", "home");
//! router.get("/users/:id(\\d+)", "get_user");
//! router.post("/users", "create_user");
//! router.get("/assets/*", "assets");
//!
//! let m = router.route(&Method::GET, "/users/42").unwrap();
//! assert_eq!(*m.handler(), "get_user");
//! assert_eq!(m.param("id"), Some("42"));
//!
//! assert_eq!(*router.route(&Method::GET, "/assets/css/site.css").unwrap().handler(), "assets");
//! assert!(router.route(&Method::GET, "/users/bob").is_none());
//! assert_eq!(router.allowed_methods("/users"), vec![Method::POST]);
//! ```
//!
//! ## Concurrency
//!
//! A built [`Router`] is immutable and `Sync` when its handler type is, so it
//! can be shared across threads behind an `Arc`. To change routes while
//! serving, use [`SharedRouter`]: writers build a new router off to the side
//! and publish it atomically, readers keep whatever snapshot they loaded.

pub mod cli;
pub mod hot_reload;
pub mod logging;
pub mod route_table;
pub mod router;
pub mod runtime_config;

pub use route_table::{load_router, RouteSpec, RouteTable};
pub use router::{MatchInfo, Node, NodeKind, RouteError, Router, SharedRouter};
