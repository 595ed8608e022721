//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic dataset creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod ruling;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::FirelexCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use ruling::TestRuling;
