//! CLI command implementations.
//!
//! - **analyze**: scan a template tree and write the pattern report
//! - **init**: write a starter `.classmap.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, run_analysis, AnalysisOutcome};
pub use init::{default_config_contents, init_config};
