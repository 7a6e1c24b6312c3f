//! Error types for slug generation

use thiserror::Error;

/// Errors that can occur while generating a slug
///
/// Generation itself never fails for degenerate input: malformed candidate
/// values are skipped and unparseable sequence suffixes are treated as zero.
/// The only failures surfaced to callers are store query errors and invalid
/// engine configuration.
#[derive(Debug, Error)]
pub enum SlugError {
	/// The conflict query against the persisted store failed
	#[error("slug store query failed: {0}")]
	Store(String),

	/// Engine configuration is invalid
	#[error("invalid slug configuration: {0}")]
	Config(String),
}

/// Result type for slugforge operations
pub type Result<T> = std::result::Result<T, SlugError>;
