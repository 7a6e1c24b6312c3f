//! Embedded in-memory slug store
//!
//! The reference [`SlugQuery`] implementation: a scan over an in-process row
//! set. Used by tests and by embedded callers that keep their records in
//! memory; anything backed by a real database wants [`crate::sql`] instead.

use async_trait::async_trait;
use parking_lot::RwLock;
use slugforge_core::conflict::{SlugQuery, SlugScope, order_conflicts};
use slugforge_core::error::Result;

/// One persisted slug row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSlug {
	/// Primary key of the owning record
	pub key: i64,
	/// The stored slug value
	pub slug: String,
	/// Scope attributes partitioning uniqueness
	pub scope: SlugScope,
}

/// In-memory [`SlugQuery`] backend
///
/// # Examples
///
/// ```
/// use slugforge_core::conflict::SlugScope;
/// use slugforge_db::memory::MemoryBackend;
///
/// let store = MemoryBackend::new();
/// store.insert(1, "plaza-diner", SlugScope::new());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
	rows: RwLock<Vec<StoredSlug>>,
}

impl MemoryBackend {
	/// An empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a persisted slug
	pub fn insert(&self, key: i64, slug: impl Into<String>, scope: SlugScope) {
		let slug = slug.into();
		tracing::trace!(key, slug = %slug, "recording slug");
		self.rows.write().push(StoredSlug {
			key,
			slug,
			scope,
		});
	}

	/// Drop every row belonging to `key`
	pub fn remove(&self, key: i64) {
		self.rows.write().retain(|row| row.key != key);
	}

	/// Snapshot of all stored slugs, insertion-ordered
	pub fn slugs(&self) -> Vec<String> {
		self.rows.read().iter().map(|row| row.slug.clone()).collect()
	}

	/// Number of stored rows
	pub fn len(&self) -> usize {
		self.rows.read().len()
	}

	/// Whether the store holds no rows
	pub fn is_empty(&self) -> bool {
		self.rows.read().is_empty()
	}
}

#[async_trait]
impl SlugQuery for MemoryBackend {
	async fn find_conflicts(
		&self,
		base: &str,
		separator: char,
		scope: &SlugScope,
		exclude: Option<i64>,
	) -> Result<Vec<String>> {
		let prefix = format!("{base}{separator}");
		let matching: Vec<String> = self
			.rows
			.read()
			.iter()
			.filter(|row| {
				(row.slug == base || row.slug.starts_with(&prefix))
					&& scope.matches(&row.scope)
					&& Some(row.key) != exclude
			})
			.map(|row| row.slug.clone())
			.collect();
		tracing::trace!(
			base,
			conflicts = matching.len(),
			"in-memory conflict scan"
		);
		Ok(order_conflicts(matching))
	}
}
