//! Sequence suffix resolution
//!
//! When a base slug collides with an existing record, the next free variant
//! is `base`, `base-2`, `base-3`, ... The bare form stays the canonical
//! "first" slug, so the first duplicate takes suffix `2`.

/// Compute the next free slug for a base given its ordered conflicts
///
/// `conflicts` must be ordered the way the conflict detector returns them:
/// length descending, then lexicographically descending, so the most deeply
/// sequenced existing variant comes first. An empty conflict list means the
/// base itself is free.
///
/// A conflict whose suffix is missing or unparseable counts as sequence 0
/// (the unsequenced base form), never an error.
///
/// # Examples
///
/// ```
/// use slugforge_core::sequence::next_slug;
///
/// assert_eq!(next_slug("post", &[], '-'), "post");
/// assert_eq!(next_slug("post", &["post".into()], '-'), "post-2");
/// assert_eq!(
///     next_slug("post", &["post-2".into(), "post".into()], '-'),
///     "post-3"
/// );
/// ```
pub fn next_slug(base: &str, conflicts: &[String], separator: char) -> String {
	let Some(top) = conflicts.first() else {
		return base.to_string();
	};
	let current = parse_sequence(top, base, separator);
	let next = if current == 0 { 2 } else { current + 1 };
	format!("{base}{separator}{next}")
}

/// Strip one trailing numeric sequence suffix from a slug
///
/// Returns the slug unchanged when no `separator + digits` suffix is
/// present. Only a single suffix is removed: `post-2-3` strips to `post-2`.
///
/// # Examples
///
/// ```
/// use slugforge_core::sequence::strip_sequence;
///
/// assert_eq!(strip_sequence("post-2", '-'), "post");
/// assert_eq!(strip_sequence("post", '-'), "post");
/// assert_eq!(strip_sequence("top-10-tips", '-'), "top-10");
/// ```
pub fn strip_sequence(slug: &str, separator: char) -> &str {
	match slug.rfind(separator) {
		Some(pos) => {
			let suffix = &slug[pos + separator.len_utf8()..];
			if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
				&slug[..pos]
			} else {
				slug
			}
		}
		None => slug,
	}
}

fn parse_sequence(conflict: &str, base: &str, separator: char) -> u64 {
	conflict
		.strip_prefix(base)
		.and_then(|rest| rest.strip_prefix(separator))
		.and_then(|rest| rest.parse::<u64>().ok())
		.unwrap_or(0)
}
