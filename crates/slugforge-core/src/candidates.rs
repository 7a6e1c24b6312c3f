//! Candidate sources and lazy evaluation
//!
//! A generator carries an ordered list of candidate sources. Sources are
//! only resolved when the previous candidate could not be committed, since
//! resolving one may be expensive (a computed closure, a denormalized
//! lookup). Callers should order sources from least to most qualified so the
//! first committable candidate is also the friendliest one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::SlugConfig;
use crate::normalize::Normalizer;

/// Abstract value produced by a candidate source or a scope attribute
///
/// A closed set of kinds keeps classification and rendering total: there is
/// no "unknown type" failure mode, malformed input simply renders to
/// nothing and the evaluator moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateValue {
	/// Plain text, the common case
	Text(String),
	/// An integer, e.g. a numeric column used inside a list candidate
	Integer(i64),
	/// An ordered list, rendered space-joined before normalization
	List(Vec<CandidateValue>),
	/// Absent value; the source is skipped
	Null,
}

impl CandidateValue {
	/// Render the value to raw text for normalization
	///
	/// Lists render their elements space-joined, skipping nulls. Returns
	/// `None` when there is nothing to render.
	pub fn render(&self) -> Option<String> {
		match self {
			Self::Text(text) => Some(text.clone()),
			Self::Integer(n) => Some(n.to_string()),
			Self::List(items) => {
				let parts: Vec<String> = items.iter().filter_map(Self::render).collect();
				if parts.is_empty() { None } else { Some(parts.join(" ")) }
			}
			Self::Null => None,
		}
	}
}

impl From<&str> for CandidateValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for CandidateValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<i64> for CandidateValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl<T: Into<CandidateValue>> From<Option<T>> for CandidateValue {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Self::Null)
	}
}

impl<T: Into<CandidateValue>> From<Vec<T>> for CandidateValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

/// Whether a value is usable as slug content
///
/// Replaces the original design's type-level "is this value slug-like"
/// extension with a pure classification over [`CandidateValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Friendliness {
	/// Definitely usable as slug content
	Friendly,
	/// Definitely not usable (reads as a primary key or absent value)
	Unfriendly,
	/// Depends on the contents
	Ambiguous,
}

/// Classify a candidate value's slug-friendliness
///
/// Text is friendly; bare integers and nulls are unfriendly (a bare integer
/// reads as a primary key, not a slug); lists are ambiguous since their
/// elements decide.
///
/// # Examples
///
/// ```
/// use slugforge_core::candidates::{classify, CandidateValue, Friendliness};
///
/// assert_eq!(classify(&CandidateValue::Text("post".into())), Friendliness::Friendly);
/// assert_eq!(classify(&CandidateValue::Integer(42)), Friendliness::Unfriendly);
/// assert_eq!(classify(&CandidateValue::Null), Friendliness::Unfriendly);
/// ```
pub fn classify(value: &CandidateValue) -> Friendliness {
	match value {
		CandidateValue::Text(_) => Friendliness::Friendly,
		CandidateValue::Integer(_) | CandidateValue::Null => Friendliness::Unfriendly,
		CandidateValue::List(_) => Friendliness::Ambiguous,
	}
}

/// Resolves a named value from a record instance
///
/// The seam between the engine and the caller's model layer: candidate
/// `Field` sources and scope columns are both looked up through it.
pub trait FieldAccessor {
	/// Resolve the named field, `None` if the record has no such field
	fn field(&self, name: &str) -> Option<CandidateValue>;
}

/// One source of slug content, tried in order
///
/// The original design resolved these dynamically (symbols become method
/// calls, strings stay literal, callables are invoked); here each shape is
/// an explicit variant resolved through [`CandidateSource::resolve`].
pub enum CandidateSource<R> {
	/// A fixed literal value
	Literal(String),
	/// A named field resolved through [`FieldAccessor`]
	Field(String),
	/// A computed expression over the record
	Computed(Arc<dyn Fn(&R) -> Option<CandidateValue> + Send + Sync>),
}

impl<R> CandidateSource<R> {
	/// A literal candidate
	pub fn literal(value: impl Into<String>) -> Self {
		Self::Literal(value.into())
	}

	/// A field-reference candidate
	pub fn field(name: impl Into<String>) -> Self {
		Self::Field(name.into())
	}

	/// A computed candidate
	pub fn computed<F>(f: F) -> Self
	where
		F: Fn(&R) -> Option<CandidateValue> + Send + Sync + 'static,
	{
		Self::Computed(Arc::new(f))
	}
}

impl<R: FieldAccessor> CandidateSource<R> {
	/// Resolve this source against a record
	pub fn resolve(&self, record: &R) -> Option<CandidateValue> {
		match self {
			Self::Literal(value) => Some(CandidateValue::Text(value.clone())),
			Self::Field(name) => record.field(name),
			Self::Computed(f) => f(record),
		}
	}
}

impl<R> Clone for CandidateSource<R> {
	fn clone(&self) -> Self {
		match self {
			Self::Literal(value) => Self::Literal(value.clone()),
			Self::Field(name) => Self::Field(name.clone()),
			Self::Computed(f) => Self::Computed(Arc::clone(f)),
		}
	}
}

impl<R> fmt::Debug for CandidateSource<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
			Self::Computed(_) => f.debug_tuple("Computed").field(&"..").finish(),
		}
	}
}

/// Lazy iterator over normalized candidate slugs
///
/// Each `next()` resolves at most one source. Sources that resolve to
/// nothing, or to a definitely-unfriendly value, are skipped silently; a
/// source whose text normalizes to the empty string is still yielded, since
/// an empty base is a legal (if ugly) slug base.
pub struct Candidates<'a, R> {
	sources: &'a [CandidateSource<R>],
	record: &'a R,
	normalizer: &'a dyn Normalizer,
	config: &'a SlugConfig,
	index: usize,
}

impl<'a, R: FieldAccessor> Candidates<'a, R> {
	/// Create an evaluator over an ordered source list
	pub fn new(
		sources: &'a [CandidateSource<R>],
		record: &'a R,
		normalizer: &'a dyn Normalizer,
		config: &'a SlugConfig,
	) -> Self {
		Self {
			sources,
			record,
			normalizer,
			config,
			index: 0,
		}
	}
}

impl<'a, R: FieldAccessor> Iterator for Candidates<'a, R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		while self.index < self.sources.len() {
			let source = &self.sources[self.index];
			self.index += 1;
			let Some(value) = source.resolve(self.record) else {
				continue;
			};
			if classify(&value) == Friendliness::Unfriendly {
				continue;
			}
			let Some(raw) = value.render() else {
				continue;
			};
			return Some(self.normalizer.normalize(&raw, self.config));
		}
		None
	}
}
