//! GitHub workflow assistant library
//!
//! Lists issues, creates a branch per issue, opens pull requests, and drafts
//! commit messages and pull request descriptions through an
//! OpenAI-compatible chat API.
pub mod api;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod prompt;
pub mod sanitize;
pub mod style;
pub mod suggest;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use config::AutoPrConfig;
pub use error::{AutoPrError, Result};
pub use types::{IssueRecord, PrTitleBody};
