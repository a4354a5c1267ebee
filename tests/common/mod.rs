#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary file with guaranteed unique name to prevent race conditions
    pub fn create_temp_file(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "trierouter_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    /// Creates a temporary route table
    pub fn create_temp_toml(content: &str) -> PathBuf {
        create_temp_file(content, "toml")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod tables {
    /// A small API used across the integration tests
    pub const PETSTORE: &str = r#"
[[routes]]
method = "GET"
path = "/"
handler = "home"

[[routes]]
method = "GET"
path = "/pets"
handler = "list_pets"

[[routes]]
method = "POST"
path = "/pets"
handler = "add_pet"

[[routes]]
method = "GET"
path = "/pets/:id(\\d+)"
handler = "get_pet"

[[routes]]
method = "DELETE"
path = "/pets/:id(\\d+)"
handler = "delete_pet"

[[routes]]
method = "GET"
path = "/users/:user_id/posts/:post_id"
handler = "get_post"

[[routes]]
method = "GET"
path = "/static/*"
handler = "static_files"
"#;
}
