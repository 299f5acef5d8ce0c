//! Shared test support for the game crates.
//!
//! Integration test binaries install logging from here so unit tests and
//! integration tests honour the same `TEST_LOG` / `RUST_LOG` settings.

pub mod logging;
