//! Copy-on-write publication of router snapshots.
//!
//! Request threads call [`SharedRouter::load`] and get an immutable `Arc<Router>`
//! without taking a lock. Writers build a modified copy and swap it in
//! atomically; a reader holding an older snapshot keeps using it until it drops
//! the `Arc`.

use arc_swap::ArcSwap;
use http::Method;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

use super::core::Router;
use super::error::RouteError;

/// A router that can be changed after startup without blocking lookups
#[derive(Debug)]
pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
    // Serialises writers so concurrent updates cannot drop each other's routes
    writer: Mutex<()>,
}

impl<H: Clone> SharedRouter<H> {
    #[must_use]
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
            writer: Mutex::new(()),
        }
    }

    /// Current snapshot
    #[must_use]
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Apply `f` to a copy of the current router and publish the copy.
    ///
    /// Nothing is published if `f` fails; readers keep the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`.
    pub fn update<F>(&self, f: F) -> Result<(), RouteError>
    where
        F: FnOnce(&mut Router<H>) -> Result<(), RouteError>,
    {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = Router::clone(&self.current.load());
        f(&mut next)?;
        let routes_count = next.len();
        self.current.store(Arc::new(next));
        info!(routes_count, "Published updated routing table");
        Ok(())
    }

    /// Register one route on a copy of the current router and publish it
    ///
    /// # Errors
    ///
    /// See [`Router::try_register`].
    pub fn register(&self, method: Method, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.update(|router| router.try_register(method, pattern, handler))
    }

    /// Publish a router built elsewhere, replacing the current snapshot wholesale
    pub fn replace(&self, router: Router<H>) {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let routes_count = router.len();
        self.current.store(Arc::new(router));
        info!(routes_count, "Replaced routing table");
    }
}

impl<H: Clone> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}
