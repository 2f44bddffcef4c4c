//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter (e.g. `"imgui_overlay=debug"`)
///
/// `RUST_LOG` still wins when it is set.
pub fn init_with_filter(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

/// Initialize logging for test runs; safe to call from every test
pub fn try_init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
