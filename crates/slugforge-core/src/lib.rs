//! # slugforge-core
//!
//! Slug generation and conflict-resolution engine: stable, human-readable,
//! URL-safe identifiers for persisted records, kept unique through
//! read-then-write queries against a narrow store boundary. No central
//! sequence generator, no locks.
//!
//! ## How a slug is chosen
//!
//! 1. **Decide**: new records and records whose base value changed get a
//!    fresh slug; a manually edited sequence suffix is left alone.
//! 2. **Evaluate**: an ordered list of candidate sources (literals, field
//!    references, computed expressions) is resolved lazily and normalized.
//! 3. **Detect**: each candidate is checked against existing slugs through
//!    the [`SlugQuery`] boundary, optionally scoped (e.g. per parent).
//! 4. **Resolve**: the first free candidate wins; a lone conflicting
//!    candidate is sequenced (`post`, `post-2`, `post-3`, ...); exhausted
//!    candidate lists fall back to a unique token. Generation always
//!    produces a value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slugforge_core::prelude::*;
//!
//! let generator = SlugGenerator::builder()
//!     .candidate(CandidateSource::field("name"))
//!     .scope("venue_id")
//!     .build();
//!
//! // store implements SlugQuery (see slugforge-db for backends)
//! let slug = generator.generate(&record, &store).await?;
//! assert_eq!(slug, "plaza-diner");
//! ```
//!
//! ## Concurrency
//!
//! The engine computes a candidate slug assuming a consistent read; it does
//! not guarantee global uniqueness under concurrent writers. Back the slug
//! column with a storage-level uniqueness constraint and retry generation
//! from the write path on a genuine race.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod candidates;
pub mod config;
pub mod conflict;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod sequence;
pub mod token;

pub use candidates::{
	CandidateSource, CandidateValue, Candidates, FieldAccessor, Friendliness, classify,
};
pub use config::{SlugConfig, SlugConfigBuilder};
pub use conflict::{SlugQuery, SlugScope, order_conflicts};
pub use error::{Result, SlugError};
pub use generate::{RegenerationPolicy, SlugGenerator, SlugGeneratorBuilder, Sluggable};
pub use normalize::{DefaultNormalizer, Normalizer, slugify};
pub use sequence::{next_slug, strip_sequence};
pub use token::{UniqueTokenSource, UuidTokenSource};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::candidates::{CandidateSource, CandidateValue, FieldAccessor};
	pub use crate::config::SlugConfig;
	pub use crate::conflict::{SlugQuery, SlugScope};
	pub use crate::error::{Result, SlugError};
	pub use crate::generate::{SlugGenerator, Sluggable};
	pub use crate::normalize::{DefaultNormalizer, Normalizer};
	pub use crate::token::UniqueTokenSource;
}
