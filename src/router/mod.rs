//! # Router Module
//!
//! Maps a request's `(method, path)` to exactly one handler plus its path
//! parameters.
//!
//! ## Architecture
//!
//! The router keeps one segment trie per HTTP method:
//!
//! 1. **Registration**: at startup, each pattern is validated, split on `/`, and
//!    walked into the method's tree, creating a [`Node`] per segment. The handler
//!    is attached to the last node. Duplicate routes and ambiguous positions
//!    (two parameter names, or a parameter next to a wildcard) are rejected.
//!
//! 2. **Matching**: for each request, the path is walked segment by segment
//!    with a fixed precedence (static, regex, parameter, wildcard) and without
//!    backtracking. Parameter bindings are collected on the way down.
//!
//! ## Pattern syntax
//!
//! - `/users` - literal segment
//! - `/users/:id` - binds one segment to `id`
//! - `/users/:id(\d+)` - binds one segment that fully matches `\d+`
//! - `/static/*` - matches one or more trailing segments
//! - `/` - the root itself
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::Router;
//!
//! let mut router = Router::new();
//! router.register(Method::GET, "/user/123", "static");
//! router.register(Method::GET, "/user/:id", "param");
//!
//! // static beats param
//! assert_eq!(*router.route(&Method::GET, "/user/123").unwrap().handler(), "static");
//! assert_eq!(router.route(&Method::GET, "/user/7").unwrap().param("id"), Some("7"));
//! ```
//!
//! ## Concurrency
//!
//! A [`Router`] is built by one thread and then only read; share it by `&` or
//! `Arc`. To change routes after startup, wrap it in a [`SharedRouter`], which
//! publishes modified copies atomically.

mod core;
mod error;
mod node;
mod pattern;
mod shared;

pub use self::core::{MatchInfo, Router};
pub use error::RouteError;
pub use node::{Node, NodeKind};
pub use shared::SharedRouter;
