//! Unique fallback tokens
//!
//! When every candidate conflicts, the generator appends a universally
//! unique token instead of retrying sequencing indefinitely. The token
//! guarantees termination; a production system wanting prettier slugs should
//! configure more candidates rather than lean on this path.

use uuid::Uuid;

/// Source of universally unique fallback tokens
pub trait UniqueTokenSource: Send + Sync {
	/// Produce a fresh unique token
	fn token(&self) -> String;
}

/// Default token source backed by UUID v4
///
/// Tokens use the simple (hyphenless) format so they read as a single
/// sequence segment after the separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenSource;

impl UniqueTokenSource for UuidTokenSource {
	fn token(&self) -> String {
		Uuid::new_v4().simple().to_string()
	}
}
