//! Test logging initialization shared by unit and integration tests.
//!
//! Level precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`. Output goes
//! through the test writer so cargo and nextest capture it per test.
//!
//! ```bash
//! TEST_LOG=age_of_war=debug cargo test -p age-of-war --test session_flow -- --nocapture
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter directive picked from the environment.
pub fn directive() -> String {
    directive_from(
        std::env::var("TEST_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    )
}

fn directive_from(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .or(rust_log)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Install the test subscriber once per process. Safe to call repeatedly
/// and from several threads.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_new(directive()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
