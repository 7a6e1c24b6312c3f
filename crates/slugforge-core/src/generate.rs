//! Generation orchestration
//!
//! [`SlugGenerator`] ties the pieces together: it decides whether a record
//! needs a fresh slug at all, walks the lazy candidate sequence, consults
//! the conflict detector for each candidate, and resolves collisions through
//! sequencing or, as a last resort, a unique fallback token.
//!
//! The orchestrator performs no writes. [`SlugGenerator::apply`] assigns the
//! chosen value to the record in memory; persisting it, and retrying against
//! a storage-level uniqueness constraint if two writers race, is the
//! caller's concern.

use std::sync::Arc;

use crate::candidates::{CandidateSource, CandidateValue, Candidates, FieldAccessor};
use crate::config::SlugConfig;
use crate::conflict::{SlugQuery, SlugScope};
use crate::error::Result;
use crate::normalize::{DefaultNormalizer, Normalizer};
use crate::sequence::{next_slug, strip_sequence};
use crate::token::{UniqueTokenSource, UuidTokenSource};

/// A record that carries a slug
///
/// The engine's view of the caller's model: a stable primary key (absent
/// until first persisted), the stored slug, and field access for candidate
/// sources and scope columns.
///
/// # Examples
///
/// ```rust,ignore
/// struct Restaurant {
///     id: Option<i64>,
///     name: String,
///     city_id: i64,
///     slug: Option<String>,
/// }
///
/// impl Sluggable for Restaurant {
///     fn primary_key(&self) -> Option<i64> {
///         self.id
///     }
///     fn slug(&self) -> Option<&str> {
///         self.slug.as_deref()
///     }
///     fn set_slug(&mut self, slug: String) {
///         self.slug = Some(slug);
///     }
/// }
/// ```
pub trait Sluggable: FieldAccessor {
	/// The record's primary key, `None` until first persisted
	fn primary_key(&self) -> Option<i64>;

	/// The currently stored slug, if any
	fn slug(&self) -> Option<&str>;

	/// Assign the generated slug; no persistence happens here
	fn set_slug(&mut self, slug: String);

	/// Whether the record has never been persisted
	fn is_new(&self) -> bool {
		self.primary_key().is_none()
	}
}

/// Decides whether an existing record's slug should be regenerated
///
/// Consulted only for records that already carry a slug; new records always
/// generate. Implemented for any matching closure.
pub trait RegenerationPolicy<R>: Send + Sync {
	/// Whether to discard the current slug and generate a fresh one
	fn should_regenerate(&self, record: &R, is_new: bool, current: Option<&str>) -> bool;
}

impl<R, F> RegenerationPolicy<R> for F
where
	F: Fn(&R, bool, Option<&str>) -> bool + Send + Sync,
{
	fn should_regenerate(&self, record: &R, is_new: bool, current: Option<&str>) -> bool {
		self(record, is_new, current)
	}
}

struct NeverRegenerate;

impl<R> RegenerationPolicy<R> for NeverRegenerate {
	fn should_regenerate(&self, _record: &R, _is_new: bool, _current: Option<&str>) -> bool {
		false
	}
}

/// The slug generation orchestrator
///
/// Construct through [`SlugGenerator::builder`]. Generation is synchronous
/// string work plus one conflict query per attempted candidate; it holds no
/// locks and performs no writes.
///
/// # Examples
///
/// ```rust,ignore
/// let generator = SlugGenerator::builder()
///     .candidate(CandidateSource::field("name"))
///     .candidate(CandidateSource::computed(|r: &Restaurant| {
///         Some(CandidateValue::List(vec![
///             r.field("name")?,
///             r.field("city")?,
///         ]))
///     }))
///     .scope("city_id")
///     .build();
///
/// let slug = generator.generate(&record, &store).await?;
/// ```
pub struct SlugGenerator<R> {
	config: SlugConfig,
	normalizer: Arc<dyn Normalizer>,
	tokens: Arc<dyn UniqueTokenSource>,
	policy: Arc<dyn RegenerationPolicy<R>>,
	sources: Vec<CandidateSource<R>>,
	scope_columns: Vec<String>,
}

impl<R: Sluggable> SlugGenerator<R> {
	/// Start building a generator
	pub fn builder() -> SlugGeneratorBuilder<R> {
		SlugGeneratorBuilder::default()
	}

	/// The generator's configuration
	pub fn config(&self) -> &SlugConfig {
		&self.config
	}

	fn candidates<'a>(&'a self, record: &'a R) -> Candidates<'a, R> {
		Candidates::new(&self.sources, record, self.normalizer.as_ref(), &self.config)
	}

	/// The freshly computed normalized base for a record
	///
	/// This is the first resolvable candidate's normalized value; `None`
	/// when no source resolves.
	pub fn fresh_base(&self, record: &R) -> Option<String> {
		self.candidates(record).next()
	}

	/// Build the uniqueness scope for a record from the configured columns
	///
	/// A scope column the record cannot resolve contributes a null value,
	/// so records missing the attribute still partition consistently.
	pub fn scope_of(&self, record: &R) -> SlugScope {
		let mut scope = SlugScope::new();
		for column in &self.scope_columns {
			scope.insert(
				column.clone(),
				record.field(column).unwrap_or(CandidateValue::Null),
			);
		}
		scope
	}

	/// Whether generation would replace the record's stored slug
	///
	/// True for new records, records without a slug, and records whose
	/// stored slug's base (stripped of any sequence suffix) no longer
	/// matches the freshly computed base. A manually edited sequence suffix
	/// alone does not trigger regeneration; a changed base does. The
	/// configured [`RegenerationPolicy`] can force regeneration regardless.
	pub fn needs_regeneration(&self, record: &R) -> bool {
		if record.is_new() {
			return true;
		}
		let Some(current) = record.slug() else {
			return true;
		};
		if self
			.policy
			.should_regenerate(record, record.is_new(), Some(current))
		{
			return true;
		}
		let Some(fresh) = self.fresh_base(record) else {
			// Nothing resolves any more; keep what we have
			return false;
		};
		strip_sequence(current, self.config.sequence_separator()) != fresh
	}

	/// Compute the final slug for a record without mutating it
	///
	/// Always produces exactly one string (possibly ending in a fallback
	/// token) and only fails when a conflict query fails.
	pub async fn generate(&self, record: &R, store: &dyn SlugQuery) -> Result<String> {
		if !self.needs_regeneration(record) {
			let current = record.slug().unwrap_or_default().to_string();
			tracing::debug!(slug = %current, "keeping stored slug");
			return Ok(current);
		}

		let separator = self.config.sequence_separator();
		let scope = self.scope_of(record);
		let exclude = record.primary_key();

		let mut first: Option<String> = None;
		let mut last: Option<(String, Vec<String>)> = None;
		let mut resolved = 0usize;

		for candidate in self.candidates(record) {
			resolved += 1;
			if first.is_none() {
				first = Some(candidate.clone());
			}
			let conflicts = store
				.find_conflicts(&candidate, separator, &scope, exclude)
				.await?;
			let reserved = self.config.is_reserved(&candidate);
			if conflicts.is_empty() && !reserved {
				tracing::debug!(slug = %candidate, "candidate committed without conflict");
				return Ok(candidate);
			}
			tracing::trace!(
				slug = %candidate,
				conflicts = conflicts.len(),
				reserved,
				"candidate rejected"
			);
			last = Some((candidate, conflicts));
		}

		let resolution = match (resolved, last) {
			// A single candidate is disambiguated by sequencing
			(1, Some((candidate, mut conflicts))) => {
				if conflicts.is_empty() {
					// Reserved with a clean store: sequence off the bare form
					conflicts.push(candidate.clone());
				}
				next_slug(&candidate, &conflicts, separator)
			}
			// Exhausted multiple candidates (or none resolved): fall back to
			// a unique token on the first candidate's base
			_ => {
				let base = first.unwrap_or_default();
				format!("{base}{separator}{}", self.tokens.token())
			}
		};
		tracing::debug!(slug = %resolution, "resolved conflicting slug");
		Ok(resolution)
	}

	/// Generate and assign the slug, returning whether it changed
	///
	/// The record is only mutated when the computed value differs from the
	/// stored one. The caller persists the record afterwards.
	pub async fn apply(&self, record: &mut R, store: &dyn SlugQuery) -> Result<bool> {
		let slug = self.generate(record, store).await?;
		if record.slug() == Some(slug.as_str()) {
			return Ok(false);
		}
		record.set_slug(slug);
		Ok(true)
	}
}

/// Builder for [`SlugGenerator`]
pub struct SlugGeneratorBuilder<R> {
	config: SlugConfig,
	normalizer: Arc<dyn Normalizer>,
	tokens: Arc<dyn UniqueTokenSource>,
	policy: Arc<dyn RegenerationPolicy<R>>,
	sources: Vec<CandidateSource<R>>,
	scope_columns: Vec<String>,
}

impl<R> Default for SlugGeneratorBuilder<R> {
	fn default() -> Self {
		Self {
			config: SlugConfig::default(),
			normalizer: Arc::new(DefaultNormalizer),
			tokens: Arc::new(UuidTokenSource),
			policy: Arc::new(NeverRegenerate),
			sources: Vec::new(),
			scope_columns: Vec::new(),
		}
	}
}

impl<R> SlugGeneratorBuilder<R> {
	/// Use the given configuration (default: [`SlugConfig::default`])
	pub fn config(mut self, config: SlugConfig) -> Self {
		self.config = config;
		self
	}

	/// Replace the normalization strategy (default: [`DefaultNormalizer`])
	pub fn normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
		self.normalizer = Arc::new(normalizer);
		self
	}

	/// Replace the fallback token source (default: [`UuidTokenSource`])
	pub fn token_source(mut self, tokens: impl UniqueTokenSource + 'static) -> Self {
		self.tokens = Arc::new(tokens);
		self
	}

	/// Force regeneration decisions through a policy
	pub fn policy(mut self, policy: impl RegenerationPolicy<R> + 'static) -> Self {
		self.policy = Arc::new(policy);
		self
	}

	/// Append a candidate source; order matters
	pub fn candidate(mut self, source: CandidateSource<R>) -> Self {
		self.sources.push(source);
		self
	}

	/// Append several candidate sources in order
	pub fn candidates<I>(mut self, sources: I) -> Self
	where
		I: IntoIterator<Item = CandidateSource<R>>,
	{
		self.sources.extend(sources);
		self
	}

	/// Partition uniqueness by the given record field
	pub fn scope(mut self, column: impl Into<String>) -> Self {
		self.scope_columns.push(column.into());
		self
	}

	/// Finish building the generator
	pub fn build(self) -> SlugGenerator<R> {
		SlugGenerator {
			config: self.config,
			normalizer: self.normalizer,
			tokens: self.tokens,
			policy: self.policy,
			sources: self.sources,
			scope_columns: self.scope_columns,
		}
	}
}
