//! Unit tests for SlugConfig and its builder

use rstest::rstest;
use slugforge_core::config::SlugConfig;
use slugforge_core::error::SlugError;

/// Default configuration uses `-` everywhere and reserves nothing
#[test]
fn test_default_config() {
	// Arrange & Act
	let config = SlugConfig::default();

	// Assert
	assert_eq!(config.separator(), '-');
	assert_eq!(config.sequence_separator(), '-');
	assert!(config.reserved().is_empty());
	assert_eq!(config.max_length(), None);
}

/// Builder without overrides matches the default configuration
#[test]
fn test_builder_defaults_match_default() {
	let built = SlugConfig::builder().build().unwrap();
	assert_eq!(built, SlugConfig::default());
}

/// Sequence separator falls back to the word separator
#[test]
fn test_sequence_separator_defaults_to_separator() {
	let config = SlugConfig::builder().separator('_').build().unwrap();
	assert_eq!(config.sequence_separator(), '_');
}

/// Valid separator characters are accepted
#[rstest]
#[case('-')]
#[case('_')]
#[case('.')]
#[case('~')]
fn test_accepts_url_safe_separators(#[case] separator: char) {
	// Arrange & Act
	let config = SlugConfig::builder().separator(separator).build();

	// Assert
	assert_eq!(config.unwrap().separator(), separator);
}

/// Alphanumeric and non-ASCII separators are rejected
#[rstest]
#[case('a')]
#[case('7')]
#[case('é')]
fn test_rejects_unsafe_separators(#[case] separator: char) {
	// Arrange & Act
	let result = SlugConfig::builder().separator(separator).build();

	// Assert
	assert!(matches!(result, Err(SlugError::Config(_))));
}

/// The sequence separator is validated independently
#[test]
fn test_rejects_unsafe_sequence_separator() {
	let result = SlugConfig::builder().sequence_separator('x').build();
	assert!(matches!(result, Err(SlugError::Config(_))));
}

/// Zero-length truncation makes no sense
#[test]
fn test_rejects_zero_max_length() {
	let result = SlugConfig::builder().max_length(0).build();
	assert!(matches!(result, Err(SlugError::Config(_))));
}

/// Reserved entries are normalized at build time
#[test]
fn test_reserved_entries_are_normalized() {
	// Arrange & Act
	let config = SlugConfig::builder()
		.reserve("New Posts")
		.reserve_all(["edit", "Admin Panel"])
		.build()
		.unwrap();

	// Assert
	assert!(config.is_reserved("new-posts"));
	assert!(config.is_reserved("edit"));
	assert!(config.is_reserved("admin-panel"));
	assert!(!config.is_reserved("New Posts"));
}

/// Reserved lookups are exact, not prefix-based
#[test]
fn test_reserved_lookup_is_exact() {
	let config = SlugConfig::builder().reserve("new").build().unwrap();
	assert!(config.is_reserved("new"));
	assert!(!config.is_reserved("new-2"));
	assert!(!config.is_reserved("newer"));
}
