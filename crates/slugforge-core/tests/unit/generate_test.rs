//! Unit tests for the generation orchestrator
//!
//! Covers the decide/generate/commit flow against the in-memory stub store:
//! passthrough, sequencing, candidate fallthrough, scope isolation,
//! regeneration detection, and the terminal fallback token.

use slugforge_core::candidates::{CandidateSource, CandidateValue, FieldAccessor};
use slugforge_core::config::SlugConfig;
use slugforge_core::conflict::SlugScope;
use slugforge_core::error::SlugError;
use slugforge_core::generate::{SlugGenerator, Sluggable};

use crate::fixtures::{Restaurant, StaticTokenSource, StubStore};

fn name_generator() -> SlugGenerator<Restaurant> {
	SlugGenerator::builder()
		.candidate(CandidateSource::field("name"))
		.build()
}

fn scoped_generator() -> SlugGenerator<Restaurant> {
	SlugGenerator::builder()
		.candidate(CandidateSource::field("name"))
		.scope("city_id")
		.build()
}

fn city_scope(city_id: i64) -> SlugScope {
	SlugScope::new().with("city_id", city_id)
}

/// No conflict: the normalized candidate passes through exactly
#[tokio::test]
async fn test_first_record_gets_bare_slug() {
	// Arrange
	let store = StubStore::new();
	let record = Restaurant::new("Plaza Diner");

	// Act
	let slug = name_generator().generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "plaza-diner");
}

/// The first duplicate takes sequence suffix 2
#[tokio::test]
async fn test_second_record_is_sequenced() {
	// Arrange
	let store = StubStore::new();
	store.seed(1, "plaza-diner", SlugScope::new());
	let record = Restaurant::new("Plaza Diner");

	// Act
	let slug = name_generator().generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "plaza-diner-2");
}

/// Later duplicates increment the deepest existing sequence
#[tokio::test]
async fn test_third_record_increments_sequence() {
	let store = StubStore::new();
	store.seed(1, "plaza-diner", SlugScope::new());
	store.seed(2, "plaza-diner-2", SlugScope::new());
	let record = Restaurant::new("Plaza Diner");

	let slug = name_generator().generate(&record, &store).await.unwrap();
	assert_eq!(slug, "plaza-diner-3");
}

/// With more candidates left, a conflict skips ahead instead of sequencing
#[tokio::test]
async fn test_candidate_fallthrough_beats_sequencing() {
	// Arrange
	let store = StubStore::new();
	store.seed(1, "plaza-diner", SlugScope::new());
	let record = Restaurant::new("Plaza Diner");
	let generator = SlugGenerator::builder()
		.candidate(CandidateSource::field("name"))
		.candidate(CandidateSource::computed(|r: &Restaurant| {
			Some(CandidateValue::List(vec![
				r.field("name")?,
				r.field("city")?,
			]))
		}))
		.build();

	// Act
	let slug = generator.generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "plaza-diner-brooklyn");
}

/// Identical bases in different scopes never conflict
#[tokio::test]
async fn test_scope_isolation() {
	// Arrange
	let store = StubStore::new();
	store.seed(1, "plaza-diner", city_scope(1));
	let brooklyn = Restaurant::new("Plaza Diner").in_city("Brooklyn", 1);
	let queens = Restaurant::new("Plaza Diner").in_city("Queens", 2);
	let generator = scoped_generator();

	// Act
	let brooklyn_slug = generator.generate(&brooklyn, &store).await.unwrap();
	let queens_slug = generator.generate(&queens, &store).await.unwrap();

	// Assert
	assert_eq!(brooklyn_slug, "plaza-diner-2");
	assert_eq!(queens_slug, "plaza-diner");
}

/// A stored slug whose stripped base still matches is kept as-is
#[tokio::test]
async fn test_unchanged_base_skips_regeneration() {
	// Arrange
	let store = StubStore::new();
	let record = Restaurant::persisted(7, "Plaza Diner", "plaza-diner-2");

	// Act
	let slug = name_generator().generate(&record, &store).await.unwrap();

	// Assert: kept even though the store would now hand out "plaza-diner"
	assert_eq!(slug, "plaza-diner-2");
}

/// A manually deepened suffix alone does not trigger regeneration
#[tokio::test]
async fn test_manual_suffix_edit_is_preserved() {
	let store = StubStore::new();
	let record = Restaurant::persisted(7, "Plaza Diner", "plaza-diner-41");
	let slug = name_generator().generate(&record, &store).await.unwrap();
	assert_eq!(slug, "plaza-diner-41");
}

/// A changed base regenerates, excluding the record's own row
#[tokio::test]
async fn test_changed_base_regenerates() {
	// Arrange
	let store = StubStore::new();
	store.seed(7, "plaza-diner", SlugScope::new());
	let mut record = Restaurant::persisted(7, "Plaza Diner", "plaza-diner");
	record.name = "Blue Plate".to_string();

	// Act
	let slug = name_generator().generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "blue-plate");
}

/// The policy can force regeneration of an unchanged slug
#[tokio::test]
async fn test_policy_forces_regeneration() {
	// Arrange: the record's own row is excluded from conflicts
	let store = StubStore::new();
	store.seed(7, "plaza-diner", SlugScope::new());
	let record = Restaurant::persisted(7, "Plaza Diner", "plaza-diner");
	let generator = SlugGenerator::builder()
		.candidate(CandidateSource::field("name"))
		.policy(|_: &Restaurant, _: bool, _: Option<&str>| true)
		.build();

	// Act
	let slug = generator.generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "plaza-diner");
}

/// Exhausting every candidate falls back to the first base plus a token
#[tokio::test]
async fn test_terminal_fallback_token() {
	// Arrange
	let store = StubStore::new();
	store.seed(1, "plaza-diner", SlugScope::new());
	store.seed(2, "plaza-diner-brooklyn", SlugScope::new());
	let record = Restaurant::new("Plaza Diner");
	let generator = SlugGenerator::builder()
		.candidate(CandidateSource::field("name"))
		.candidate(CandidateSource::computed(|r: &Restaurant| {
			Some(CandidateValue::List(vec![
				r.field("name")?,
				r.field("city")?,
			]))
		}))
		.token_source(StaticTokenSource("f81d4fae7dec"))
		.build();

	// Act
	let slug = generator.generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "plaza-diner-f81d4fae7dec");
}

/// An empty normalized base still sequences against its conflicts
#[tokio::test]
async fn test_empty_base_sequences() {
	// Arrange
	let store = StubStore::new();
	store.seed(1, "", SlugScope::new());
	let record = Restaurant::new("unused");
	let generator = SlugGenerator::builder()
		.candidate(CandidateSource::literal("!!!"))
		.build();

	// Act
	let slug = generator.generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "-2");
}

/// No resolvable candidate at all degrades to a bare token
#[tokio::test]
async fn test_no_candidates_degrade_to_token() {
	let store = StubStore::new();
	let record = Restaurant::new("Plaza Diner");
	let generator = SlugGenerator::<Restaurant>::builder()
		.candidate(CandidateSource::field("missing"))
		.token_source(StaticTokenSource("f81d4fae7dec"))
		.build();

	let slug = generator.generate(&record, &store).await.unwrap();
	assert_eq!(slug, "-f81d4fae7dec");
}

/// A reserved word never commits bare, even with a clean store
#[tokio::test]
async fn test_reserved_word_is_sequenced() {
	// Arrange
	let store = StubStore::new();
	let record = Restaurant::new("New");
	let generator = SlugGenerator::builder()
		.config(SlugConfig::builder().reserve("new").build().unwrap())
		.candidate(CandidateSource::field("name"))
		.build();

	// Act
	let slug = generator.generate(&record, &store).await.unwrap();

	// Assert
	assert_eq!(slug, "new-2");
}

/// A reserved word with further candidates falls through instead
#[tokio::test]
async fn test_reserved_word_falls_through_to_next_candidate() {
	let store = StubStore::new();
	let record = Restaurant::new("New");
	let generator = SlugGenerator::builder()
		.config(SlugConfig::builder().reserve("new").build().unwrap())
		.candidate(CandidateSource::field("name"))
		.candidate(CandidateSource::computed(|r: &Restaurant| {
			Some(CandidateValue::List(vec![
				r.field("name")?,
				r.field("city")?,
			]))
		}))
		.build();

	let slug = generator.generate(&record, &store).await.unwrap();
	assert_eq!(slug, "new-brooklyn");
}

/// Store failures surface instead of being swallowed
#[tokio::test]
async fn test_store_failure_propagates() {
	// Arrange
	let store = StubStore::new();
	store.poison();
	let record = Restaurant::new("Plaza Diner");

	// Act
	let result = name_generator().generate(&record, &store).await;

	// Assert
	assert!(matches!(result, Err(SlugError::Store(_))));
}

/// apply() assigns the slug and reports whether it changed
#[tokio::test]
async fn test_apply_sets_slug_once() {
	// Arrange
	let store = StubStore::new();
	let mut record = Restaurant::new("Plaza Diner");
	let generator = name_generator();

	// Act & Assert
	assert!(generator.apply(&mut record, &store).await.unwrap());
	assert_eq!(record.slug(), Some("plaza-diner"));

	// Same inputs, same store state: nothing changes the second time
	assert!(!generator.apply(&mut record, &store).await.unwrap());
	assert_eq!(record.slug(), Some("plaza-diner"));
}

/// needs_regeneration mirrors the decide step
#[test]
fn test_needs_regeneration() {
	let generator = name_generator();

	// New records always regenerate
	assert!(generator.needs_regeneration(&Restaurant::new("Plaza Diner")));

	// Matching stripped base: keep
	let kept = Restaurant::persisted(1, "Plaza Diner", "plaza-diner-2");
	assert!(!generator.needs_regeneration(&kept));

	// Changed base: regenerate
	let mut changed = Restaurant::persisted(1, "Plaza Diner", "plaza-diner");
	changed.name = "Blue Plate".to_string();
	assert!(generator.needs_regeneration(&changed));
}
