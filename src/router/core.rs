//! Router core module - registration and the lookup hot path.
//!
//! Registration runs once at startup on a single thread; afterwards the forest
//! is only read, so lookups need no locks and can run on any number of threads.

use http::Method;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::error::RouteError;
use super::node::{Node, Step};
use super::pattern;
use crate::runtime_config::RuntimeConfig;

/// Result of successfully matching a request path to a handler
///
/// Path parameters use "last write wins" semantics: with a pattern such as
/// `/user/:id/abc/:id`, the binding closest to the leaf is kept.
#[derive(Debug)]
pub struct MatchInfo<'r, H> {
    node: &'r Node<H>,
    handler: &'r H,
    path_params: HashMap<String, String>,
}

impl<'r, H> MatchInfo<'r, H> {
    /// The handler registered at the matched node
    #[must_use]
    pub fn handler(&self) -> &'r H {
        self.handler
    }

    /// The terminal node reached by the lookup
    #[must_use]
    pub fn node(&self) -> &'r Node<H> {
        self.node
    }

    /// The pattern the handler was registered under (e.g. `/users/:id`)
    #[must_use]
    pub fn pattern(&self) -> &'r str {
        self.node.route().unwrap_or_default()
    }

    /// Get a path parameter by name
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// All bound path parameters
    #[must_use]
    pub fn path_params(&self) -> &HashMap<String, String> {
        &self.path_params
    }

    #[must_use]
    pub fn into_path_params(self) -> HashMap<String, String> {
        self.path_params
    }
}

/// Router that maps `(method, path)` to a handler using one segment trie per method
///
/// `H` is opaque to the router: it is stored at terminal nodes and handed back
/// on a match, never inspected.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use trierouter::Router;
///
/// let mut router = Router::new();
/// router.get("/users/:id", "get_user");
/// router.get("/static/*", "assets");
///
/// let m = router.route(&Method::GET, "/users/42").unwrap();
/// assert_eq!(*m.handler(), "get_user");
/// assert_eq!(m.param("id"), Some("42"));
///
/// assert!(router.route(&Method::POST, "/users/42").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Router<H> {
    trees: HashMap<Method, Node<H>>,
    len: usize,
    slow_match_threshold: Duration,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::with_config(&RuntimeConfig::default())
    }
}

impl<H> Router<H> {
    /// Create an empty router with default runtime settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty router using the given runtime settings
    #[must_use]
    pub fn with_config(config: &RuntimeConfig) -> Self {
        Self {
            trees: HashMap::new(),
            len: 0,
            slow_match_threshold: config.slow_match_threshold,
        }
    }

    /// Register `handler` for `method` and `pattern`.
    ///
    /// The whole pattern is validated and its regex segments compiled before the
    /// tree is modified, so a rejected pattern leaves the router unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] when the pattern is malformed, when the route is
    /// already registered, or when it conflicts with a parameter or wildcard at
    /// the same position.
    pub fn try_register(&mut self, method: Method, pattern: &str, handler: H) -> Result<(), RouteError> {
        let result = self.insert(&method, pattern, handler);
        match &result {
            Ok(()) => debug!(method = %method, pattern = %pattern, "Route registered"),
            Err(err) => warn!(
                method = %method,
                pattern = %pattern,
                error = %err,
                "Route registration rejected"
            ),
        }
        result
    }

    fn insert(&mut self, method: &Method, pattern: &str, handler: H) -> Result<(), RouteError> {
        let segments = pattern::parse(pattern)?;

        let mut node = self.trees.entry(method.clone()).or_insert_with(Node::root);
        for segment in segments {
            node = node.child_or_create(segment, pattern)?;
        }
        node.set_handler(handler, method.as_str(), pattern)?;

        self.len += 1;
        Ok(())
    }

    /// Register `handler` for `method` and `pattern`, panicking on failure.
    ///
    /// An invalid route table is a programming mistake; serving with part of it
    /// silently missing is worse than not starting. Use [`Router::try_register`]
    /// to handle the error instead.
    ///
    /// # Panics
    ///
    /// Panics with the [`RouteError`] message if registration fails.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn register(&mut self, method: Method, pattern: &str, handler: H) {
        if let Err(err) = self.try_register(method, pattern, handler) {
            panic!("router: {err}");
        }
    }

    /// Register a handler for GET requests
    #[track_caller]
    pub fn get(&mut self, pattern: &str, handler: H) {
        self.register(Method::GET, pattern, handler);
    }

    /// Register a handler for POST requests
    #[track_caller]
    pub fn post(&mut self, pattern: &str, handler: H) {
        self.register(Method::POST, pattern, handler);
    }

    /// Register a handler for PUT requests
    #[track_caller]
    pub fn put(&mut self, pattern: &str, handler: H) {
        self.register(Method::PUT, pattern, handler);
    }

    /// Register a handler for PATCH requests
    #[track_caller]
    pub fn patch(&mut self, pattern: &str, handler: H) {
        self.register(Method::PATCH, pattern, handler);
    }

    /// Register a handler for DELETE requests
    #[track_caller]
    pub fn delete(&mut self, pattern: &str, handler: H) {
        self.register(Method::DELETE, pattern, handler);
    }

    /// Match a request to a handler.
    ///
    /// Walks the method's tree one segment at a time, preferring a static child,
    /// then a matching regex parameter, then a path parameter, then a wildcard.
    /// A choice is never revisited: if the chosen branch dead-ends, the lookup
    /// fails. Reaching a node without a handler is also a miss.
    ///
    /// # Returns
    ///
    /// * `Some(MatchInfo)` - handler and bound path parameters
    /// * `None` - no handler for this method and path (404)
    #[must_use]
    pub fn route(&self, method: &Method, path: &str) -> Option<MatchInfo<'_, H>> {
        let Some(root) = self.trees.get(method) else {
            debug!(method = %method, path = %path, "No routes registered for method");
            return None;
        };

        let match_start = Instant::now();
        let result = Self::walk(root, path);
        let match_duration = match_start.elapsed();

        if match_duration > self.slow_match_threshold {
            warn!(
                method = %method,
                path = %path,
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        }

        match &result {
            Some(m) => debug!(
                method = %method,
                path = %path,
                route_pattern = %m.pattern(),
                path_params = ?m.path_params,
                "Route matched"
            ),
            None => debug!(method = %method, path = %path, "No route matched"),
        }

        result
    }

    fn walk<'r>(root: &'r Node<H>, path: &str) -> Option<MatchInfo<'r, H>> {
        if !path.starts_with('/') {
            return None;
        }

        let mut node = root;
        let mut path_params = HashMap::new();

        for segment in pattern::segments(path) {
            match node.child_of(segment)? {
                Step::Exact(child) => node = child,
                Step::Bind(child) => {
                    if let Some(name) = child.param_name() {
                        path_params.insert(name.to_owned(), segment.to_owned());
                    }
                    node = child;
                }
                Step::Rest(child) => {
                    node = child;
                    break;
                }
            }
        }

        let handler = node.handler()?;
        Some(MatchInfo {
            node,
            handler,
            path_params,
        })
    }

    /// Methods whose tree resolves `path` to a handler, sorted by name.
    ///
    /// Lets a server answer 405 with an `Allow` header instead of 404.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut allowed: Vec<Method> = self
            .trees
            .iter()
            .filter(|(_, root)| Self::walk(root, path).is_some())
            .map(|(method, _)| method.clone())
            .collect();
        allowed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        allowed
    }

    /// All registered `(method, pattern)` pairs, sorted by method then pattern
    #[must_use]
    pub fn routes(&self) -> Vec<(Method, String)> {
        self.entries()
            .into_iter()
            .map(|(method, pattern, _)| (method, pattern.to_owned()))
            .collect()
    }

    /// Like [`Router::routes`], with the handler stored for each route
    #[must_use]
    pub fn entries(&self) -> Vec<(Method, &str, &H)> {
        let mut entries = Vec::with_capacity(self.len);
        for (method, root) in &self.trees {
            let mut found = Vec::new();
            root.collect_routes(&mut found);
            entries.extend(
                found
                    .into_iter()
                    .map(|(pattern, handler)| (method.clone(), pattern, handler)),
            );
        }
        entries.sort_by(|(ma, pa, _), (mb, pb, _)| ma.as_str().cmp(mb.as_str()).then_with(|| pa.cmp(pb)));
        entries
    }

    /// Root node of the tree for `method`, if any route was registered for it
    #[must_use]
    pub fn tree(&self, method: &Method) -> Option<&Node<H>> {
        self.trees.get(method)
    }

    /// Number of registered routes across all methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Two routers are equal when their trees are; runtime settings are ignored.
impl<H: PartialEq> PartialEq for Router<H> {
    fn eq(&self, other: &Self) -> bool {
        self.trees == other.trees
    }
}
