//! # Slugforge
//!
//! Stable, unique, human-readable slugs for persisted records.
//!
//! Slugforge computes URL-safe identifiers from the values a record already
//! carries (a title, a name, a combination of fields) and keeps them unique
//! through read-then-write conflict queries against a narrow store boundary.
//! There is no central sequence generator and no locking; a storage-level
//! uniqueness constraint backs the engine against true concurrent-writer
//! races.
//!
//! The workspace splits into:
//!
//! - [`slugforge_core`]: the engine. Normalization, candidate evaluation,
//!   conflict detection contracts, sequencing, orchestration
//! - [`slugforge_db`] (feature `db`, on by default): store-side
//!   collaborators. An embedded in-memory backend and a SeaQuery builder
//!   for the conflict `SELECT`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slugforge::prelude::*;
//! use slugforge::db::MemoryBackend;
//!
//! let generator = SlugGenerator::builder()
//!     .candidate(CandidateSource::field("name"))
//!     .scope("venue_id")
//!     .build();
//!
//! let store = MemoryBackend::new();
//! let slug = generator.generate(&record, &store).await?;
//! assert_eq!(slug, "plaza-diner");
//! ```
//!
//! ## Feature Flags
//!
//! - `db` (default) - embedded backend and SQL statement builder

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use slugforge_core::{
	CandidateSource, CandidateValue, Candidates, DefaultNormalizer, FieldAccessor, Friendliness,
	Normalizer, RegenerationPolicy, Result, SlugConfig, SlugConfigBuilder, SlugError,
	SlugGenerator, SlugGeneratorBuilder, SlugQuery, SlugScope, Sluggable, UniqueTokenSource,
	UuidTokenSource, classify, next_slug, order_conflicts, slugify, strip_sequence,
};

/// Engine modules re-exported from slugforge-core
pub mod core {
	pub use slugforge_core::{
		candidates, config, conflict, error, generate, normalize, sequence, token,
	};
}

/// Store-side collaborators from slugforge-db
#[cfg(feature = "db")]
pub mod db {
	pub use slugforge_db::memory::{MemoryBackend, StoredSlug};
	pub use slugforge_db::sql::ConflictSelect;
}

/// Prelude module for convenient imports
pub mod prelude {
	pub use slugforge_core::prelude::*;

	#[cfg(feature = "db")]
	pub use slugforge_db::prelude::*;
}
