use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use http::Method;
use trierouter::Router;

fn verb_zoo() -> Router<&'static str> {
    let mut router = Router::new();
    router.get("/", "root_handler");
    router.get("/zoo/animals", "get_animals");
    router.post("/zoo/animals", "create_animal");
    router.get("/zoo/animals/:id", "get_animal");
    router.put("/zoo/animals/:id", "update_animal");
    router.patch("/zoo/animals/:id", "patch_animal");
    router.delete("/zoo/animals/:id", "delete_animal");
    router.get("/zoo/animals/:id/toys/:toy_id(\\d+)", "animal_toy");
    router.get(
        "/zoo/:category/animals/:id/habitats/:habitat_id/sections/:section_id",
        "habitat_section",
    );
    router.post(
        "/inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id",
        "post_item_batch",
    );
    router.get("/complex/:a/:b/:c/:d/:e/:f/:g/:h/:i", "complex_many_params");
    router.get("/assets/*", "assets");
    router.register(Method::HEAD, "/zoo/health", "health_check");
    router.register(Method::OPTIONS, "/zoo/health", "supported_ops");
    router.register(Method::TRACE, "/zoo/health", "trace_route");
    router
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = verb_zoo();
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/zoo/animals/123"),
            (Method::GET, "/zoo/animals/123/toys/456"),
            (Method::GET, "/zoo/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
            (Method::GET, "/assets/css/site/main.css"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = router.route(method, path);
                black_box(&res);
            }
        })
    });
}

fn bench_route_miss(c: &mut Criterion) {
    let router = verb_zoo();
    c.bench_function("route_miss", |b| {
        b.iter(|| {
            black_box(router.route(&Method::GET, black_box("/zoo/animals/123/toys/ball")));
            black_box(router.route(&Method::DELETE, black_box("/zoo/health")));
        })
    });
}

fn bench_allowed_methods(c: &mut Criterion) {
    let router = verb_zoo();
    c.bench_function("allowed_methods", |b| {
        b.iter(|| black_box(router.allowed_methods(black_box("/zoo/animals/42"))))
    });
}

criterion_group!(
    benches,
    bench_route_throughput,
    bench_route_miss,
    bench_allowed_methods
);
criterion_main!(benches);
