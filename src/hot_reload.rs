//! # Hot Reload Module
//!
//! Live reloading of a route table file without restarting the process.
//!
//! ## Reload Process
//!
//! When the watched file changes:
//!
//! 1. **Detection** - Filesystem watcher reports a modify/create event
//! 2. **Parse** - The table is loaded and every route registered into a fresh router
//! 3. **Publish** - The new router replaces the old snapshot in the [`SharedRouter`]
//!
//! Requests already holding the old snapshot finish against it; new lookups
//! see the new one. Nothing is locked on the lookup path.
//!
//! ## Error Handling
//!
//! If the new table fails to parse, a route is rejected, or the table has no
//! routes at all, the error is logged and the previous router stays active.
//! Editors and `std::fs::write` truncate a file before writing it, so an empty
//! table on reload is treated as a save in progress, never as "remove every
//! route". Each event waits [`SETTLE_DELAY`] before reading, so a burst of
//! events from one save ends with a read of the finished file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trierouter::hot_reload::watch_routes;
//! use trierouter::route_table::load_router;
//! use trierouter::runtime_config::RuntimeConfig;
//! use trierouter::SharedRouter;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RuntimeConfig::from_env();
//! let shared = Arc::new(SharedRouter::new(load_router("routes.toml", &config)?));
//!
//! // Keep the watcher alive as long as reloads are wanted
//! let _watcher = watch_routes("routes.toml", Arc::clone(&shared), config)?;
//! # Ok(())
//! # }
//! ```

use anyhow::{bail, Result};
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::route_table::load_router;
use crate::router::SharedRouter;
use crate::runtime_config::RuntimeConfig;

/// Time to let a save finish before the table is read
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Load `table_path` and publish it to `shared`, returning the new route count.
///
/// # Errors
///
/// Fails without publishing anything if the table cannot be loaded, a route is
/// rejected, or the table declares no routes.
pub fn reload_routes(
    table_path: &Path,
    shared: &SharedRouter<String>,
    config: &RuntimeConfig,
) -> Result<usize> {
    let router = load_router(table_path, config)?;
    if router.is_empty() {
        bail!("route table {} has no routes", table_path.display());
    }
    let routes_count = router.len();
    info!(
        path = %table_path.display(),
        routes_count,
        "hot-reload: applying route table update"
    );
    shared.replace(router);
    Ok(routes_count)
}

/// Watch a route table file and republish the [`SharedRouter`] when it changes.
///
/// # Errors
///
/// Fails if the watcher cannot be created or the path cannot be watched.
pub fn watch_routes<P>(
    table_path: P,
    shared: Arc<SharedRouter<String>>,
    config: RuntimeConfig,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
{
    let path: PathBuf = table_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    std::thread::sleep(SETTLE_DELAY);
                    if let Err(err) = reload_routes(&watch_path, &shared, &config) {
                        let reason = format!("{err:#}");
                        warn!(
                            path = %watch_path.display(),
                            error = %reason,
                            "hot-reload: rejected route table, keeping previous routes"
                        );
                    }
                }
            }
            Err(e) => warn!(error = ?e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
