//! Conflict detection boundary
//!
//! The engine never talks to storage directly; it asks a [`SlugQuery`]
//! implementation for existing slugs that would collide with a candidate.
//! This is the only I/O seam in the crate. Backends live in `slugforge-db`
//! or in the host application's ORM layer.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::candidates::CandidateValue;
use crate::error::Result;

/// Attribute values partitioning slug uniqueness
///
/// Two records conflict only when their scope values match: a slug needs to
/// be unique among siblings sharing a parent, not globally. An empty scope
/// means global uniqueness.
///
/// # Examples
///
/// ```
/// use slugforge_core::conflict::SlugScope;
///
/// let scope = SlugScope::new().with("restaurant_id", 7i64);
/// assert_eq!(scope.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugScope(BTreeMap<String, CandidateValue>);

impl SlugScope {
	/// An empty (global) scope
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a scope attribute, consuming and returning the scope
	pub fn with(mut self, column: impl Into<String>, value: impl Into<CandidateValue>) -> Self {
		self.insert(column, value);
		self
	}

	/// Add a scope attribute
	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CandidateValue>) {
		self.0.insert(column.into(), value.into());
	}

	/// Look up a scope attribute
	pub fn get(&self, column: &str) -> Option<&CandidateValue> {
		self.0.get(column)
	}

	/// Iterate scope attributes in column order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CandidateValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of scope attributes
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the scope is global (no attributes)
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Whether a stored row's scope satisfies this query scope
	///
	/// Every attribute of `self` must match the row; attributes the row
	/// does not carry count as null. Rows may carry extra attributes.
	pub fn matches(&self, row: &SlugScope) -> bool {
		self.iter().all(|(column, value)| {
			row.get(column).unwrap_or(&CandidateValue::Null) == value
		})
	}
}

impl<K, V> FromIterator<(K, V)> for SlugScope
where
	K: Into<String>,
	V: Into<CandidateValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// Query boundary for existing slugs
///
/// Implementations return every persisted slug that equals `base` exactly or
/// matches `base + separator + <anything>`, restricted to rows whose scope
/// attributes equal `scope`, excluding the row identified by `exclude` (the
/// record being updated, when it already has a primary key). Results must be
/// ordered by (length descending, lexicographic descending), see
/// [`order_conflicts`], so the most deeply sequenced variant comes first.
///
/// Returning an empty vector is the common case and means the base is free.
/// Store failures must surface as [`SlugError::Store`], never be swallowed.
///
/// [`SlugError::Store`]: crate::error::SlugError::Store
#[async_trait]
pub trait SlugQuery: Send + Sync {
	/// Find existing slugs conflicting with `base` within `scope`
	async fn find_conflicts(
		&self,
		base: &str,
		separator: char,
		scope: &SlugScope,
		exclude: Option<i64>,
	) -> Result<Vec<String>>;
}

/// Order conflicts the way the sequencer expects
///
/// Length descending, then lexicographically descending. The ordering
/// guarantees the longest (and among equals, most recent) sequenced variant
/// is inspected first, so the next sequence number is computed from it
/// rather than from a shorter historical entry.
///
/// # Examples
///
/// ```
/// use slugforge_core::conflict::order_conflicts;
///
/// let ordered = order_conflicts(vec![
///     "post".into(),
///     "post-10".into(),
///     "post-2".into(),
/// ]);
/// assert_eq!(ordered, vec!["post-10", "post-2", "post"]);
/// ```
pub fn order_conflicts(mut conflicts: Vec<String>) -> Vec<String> {
	conflicts.sort_unstable_by(|a, b| {
		b.chars()
			.count()
			.cmp(&a.chars().count())
			.then_with(|| b.cmp(a))
	});
	conflicts
}
