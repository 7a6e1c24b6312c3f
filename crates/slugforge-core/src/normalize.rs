//! Slug normalization
//!
//! Turns arbitrary candidate text into a canonical, URL-safe slug string.
//! The free function [`slugify`] is the default algorithm; callers that need
//! locale-aware transliteration or other custom rules plug in their own
//! [`Normalizer`] implementation instead.

use crate::config::SlugConfig;

/// Convert text to a slug using the given word separator
///
/// Lowercases the input, keeps ASCII alphanumerics, replaces every other
/// character run with a single separator, and trims leading/trailing
/// separators. The result is idempotent: normalizing an already-normalized
/// slug returns it unchanged.
///
/// # Examples
///
/// ```
/// use slugforge_core::normalize::slugify;
///
/// assert_eq!(slugify("Hello World", '-'), "hello-world");
/// assert_eq!(slugify("Hello  World", '-'), "hello-world");
/// assert_eq!(slugify("Plaza Diner", '-'), "plaza-diner");
/// assert_eq!(slugify("Special!@#Characters", '-'), "special-characters");
/// assert_eq!(slugify("Hello World", '_'), "hello_world");
/// ```
pub fn slugify(text: &str, separator: char) -> String {
	let sep = separator.to_string();
	text.to_lowercase()
		.chars()
		.map(|ch| match ch {
			'a'..='z' | '0'..='9' => ch,
			_ => separator,
		})
		.collect::<String>()
		.split(separator)
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(&sep)
}

/// Pluggable normalization strategy
///
/// The engine never hardcodes [`slugify`]; every candidate passes through the
/// generator's configured `Normalizer`. Implementations must be pure: the
/// same input always normalizes to the same output, and
/// `normalize(normalize(s)) == normalize(s)`.
pub trait Normalizer: Send + Sync {
	/// Normalize raw candidate text into a slug
	fn normalize(&self, raw: &str, config: &SlugConfig) -> String;
}

/// Default normalizer: [`slugify`] plus optional max-length truncation
///
/// Truncation cuts back to the last separator boundary when one falls in the
/// second half of the limit, so `"plaza-diner-downtown"` at length 14 becomes
/// `"plaza-diner"` rather than `"plaza-diner-do"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer;

impl Normalizer for DefaultNormalizer {
	fn normalize(&self, raw: &str, config: &SlugConfig) -> String {
		let slug = slugify(raw, config.separator());
		match config.max_length() {
			Some(max) => truncate_slug(&slug, max, config.separator()),
			None => slug,
		}
	}
}

fn truncate_slug(slug: &str, max: usize, separator: char) -> String {
	if slug.chars().count() <= max {
		return slug.to_string();
	}
	let truncated: String = slug.chars().take(max).collect();
	if let Some(pos) = truncated.rfind(separator)
		&& pos > max / 2
	{
		return truncated[..pos].to_string();
	}
	truncated
		.trim_end_matches(separator)
		.to_string()
}
