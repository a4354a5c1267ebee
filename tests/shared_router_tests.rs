#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use trierouter::{Router, SharedRouter};

#[test]
fn test_register_publishes_new_snapshot() {
    let shared = SharedRouter::new(Router::new());
    let before = shared.load();

    shared.register(Method::GET, "/pets/:id", "get_pet").unwrap();

    let after = shared.load();
    assert!(before.route(&Method::GET, "/pets/1").is_none());
    assert_eq!(*after.route(&Method::GET, "/pets/1").unwrap().handler(), "get_pet");
}

#[test]
fn test_failed_update_keeps_previous_snapshot() {
    let mut router = Router::new();
    router.get("/pets/:id", "get_pet");
    let shared = SharedRouter::from(router);
    let before = shared.load();

    let err = shared
        .update(|router| {
            router.try_register(Method::POST, "/pets", "add_pet")?;
            router.try_register(Method::GET, "/pets/*", "rest")
        })
        .unwrap_err();
    assert!(err.is_conflict());

    // neither route of the failed batch is visible
    let current = shared.load();
    assert!(Arc::ptr_eq(&before, &current));
    assert!(current.route(&Method::POST, "/pets").is_none());
    assert_eq!(current.len(), 1);
}

#[test]
fn test_replace_swaps_whole_table() {
    let mut first = Router::new();
    first.get("/old", "old");
    let shared = SharedRouter::new(first);

    let mut second = Router::new();
    second.get("/new", "new");
    shared.replace(second);

    let current = shared.load();
    assert!(current.route(&Method::GET, "/old").is_none());
    assert_eq!(*current.route(&Method::GET, "/new").unwrap().handler(), "new");
}

#[test]
fn test_readers_run_while_writer_publishes() {
    let mut router = Router::new();
    router.get("/stable/:id", 0usize);
    let shared = Arc::new(SharedRouter::new(router));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut lookups = 0usize;
                while !done.load(Ordering::Relaxed) {
                    let snapshot = shared.load();
                    // routes registered before the readers started stay visible
                    let m = snapshot.route(&Method::GET, "/stable/7").unwrap();
                    assert_eq!(m.param("id"), Some("7"));
                    lookups += 1;
                }
                lookups
            })
        })
        .collect();

    for i in 1..=100usize {
        shared
            .register(Method::GET, &format!("/dyn{i}/:id"), i)
            .unwrap();
    }
    done.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }

    let current = shared.load();
    assert_eq!(current.len(), 101);
    assert_eq!(*current.route(&Method::GET, "/dyn50/x").unwrap().handler(), 50);
}

#[test]
fn test_concurrent_writers_do_not_lose_routes() {
    let shared = Arc::new(SharedRouter::new(Router::new()));

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..25 {
                    shared
                        .register(Method::GET, &format!("/w{w}/r{i}"), (w, i))
                        .unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let current = shared.load();
    assert_eq!(current.len(), 100);
    assert_eq!(*current.route(&Method::GET, "/w3/r24").unwrap().handler(), (3, 24));
}
