//! Engine configuration
//!
//! All knobs that used to live in process-wide defaults are carried by an
//! explicit [`SlugConfig`] passed to the generator at construction time.
//! There is no hidden mutable global state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlugError};
use crate::normalize::slugify;

/// Configuration for slug generation
///
/// Built through [`SlugConfig::builder`]; the zero-configuration default uses
/// `-` for both separators, reserves nothing, and never truncates.
///
/// # Examples
///
/// ```
/// use slugforge_core::config::SlugConfig;
///
/// let config = SlugConfig::builder()
///     .separator('-')
///     .sequence_separator('-')
///     .reserve("new")
///     .reserve("edit")
///     .build()
///     .unwrap();
///
/// assert!(config.is_reserved("new"));
/// assert!(!config.is_reserved("plaza-diner"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugConfig {
	separator: char,
	sequence_separator: char,
	reserved: Vec<String>,
	max_length: Option<usize>,
}

impl SlugConfig {
	/// Start building a configuration
	pub fn builder() -> SlugConfigBuilder {
		SlugConfigBuilder::default()
	}

	/// Word separator used by the default normalizer
	pub fn separator(&self) -> char {
		self.separator
	}

	/// Delimiter between a base slug and its numeric or fallback suffix
	pub fn sequence_separator(&self) -> char {
		self.sequence_separator
	}

	/// Normalized slugs that may never be committed bare
	pub fn reserved(&self) -> &[String] {
		&self.reserved
	}

	/// Maximum slug length applied by the default normalizer, if any
	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}

	/// Whether the given normalized slug is reserved
	pub fn is_reserved(&self, slug: &str) -> bool {
		self.reserved.iter().any(|r| r == slug)
	}
}

impl Default for SlugConfig {
	fn default() -> Self {
		Self {
			separator: '-',
			sequence_separator: '-',
			reserved: Vec::new(),
			max_length: None,
		}
	}
}

/// Builder for [`SlugConfig`]
///
/// Reserved entries are themselves normalized at build time, so
/// `reserve("New Posts")` reserves `new-posts`.
#[derive(Debug, Clone, Default)]
pub struct SlugConfigBuilder {
	separator: Option<char>,
	sequence_separator: Option<char>,
	reserved: Vec<String>,
	max_length: Option<usize>,
}

impl SlugConfigBuilder {
	/// Set the word separator (default `-`)
	pub fn separator(mut self, separator: char) -> Self {
		self.separator = Some(separator);
		self
	}

	/// Set the sequence suffix delimiter (default `-`)
	pub fn sequence_separator(mut self, separator: char) -> Self {
		self.sequence_separator = Some(separator);
		self
	}

	/// Reserve a slug so it is never committed bare
	pub fn reserve(mut self, slug: impl Into<String>) -> Self {
		self.reserved.push(slug.into());
		self
	}

	/// Reserve several slugs at once
	pub fn reserve_all<I, S>(mut self, slugs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.reserved.extend(slugs.into_iter().map(Into::into));
		self
	}

	/// Truncate normalized slugs to at most `max` characters
	pub fn max_length(mut self, max: usize) -> Self {
		self.max_length = Some(max);
		self
	}

	/// Validate and build the configuration
	///
	/// Separators must be ASCII and not alphanumeric; a letter or digit
	/// separator would make normalization ambiguous and non-idempotent.
	pub fn build(self) -> Result<SlugConfig> {
		let separator = self.separator.unwrap_or('-');
		let sequence_separator = self.sequence_separator.unwrap_or(separator);
		for sep in [separator, sequence_separator] {
			if !sep.is_ascii() || sep.is_ascii_alphanumeric() {
				return Err(SlugError::Config(format!(
					"separator {sep:?} must be a non-alphanumeric ASCII character"
				)));
			}
		}
		if self.max_length == Some(0) {
			return Err(SlugError::Config(
				"max_length must be at least 1".to_string(),
			));
		}
		let reserved = self
			.reserved
			.into_iter()
			.map(|slug| slugify(&slug, separator))
			.collect();
		Ok(SlugConfig {
			separator,
			sequence_separator,
			reserved,
			max_length: self.max_length,
		})
	}
}
