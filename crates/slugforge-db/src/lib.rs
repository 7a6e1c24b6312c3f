//! # slugforge-db
//!
//! Store-side collaborators for the slugforge engine:
//!
//! - [`memory::MemoryBackend`]: an embedded, in-process [`SlugQuery`]
//!   implementation for tests and applications that keep records in memory
//! - [`sql::ConflictSelect`]: a SeaQuery builder producing the conflict
//!   detector's `SELECT` for PostgreSQL, MySQL, and SQLite; execution is
//!   left to the host application's ORM or connection pool
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slugforge_core::prelude::*;
//! use slugforge_db::memory::MemoryBackend;
//!
//! let store = MemoryBackend::new();
//! let slug = generator.generate(&record, &store).await?;
//! store.insert(record_id, &slug, generator.scope_of(&record));
//! ```
//!
//! [`SlugQuery`]: slugforge_core::conflict::SlugQuery

pub mod memory;
pub mod sql;

pub use memory::{MemoryBackend, StoredSlug};
pub use sql::ConflictSelect;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::memory::MemoryBackend;
	pub use crate::sql::ConflictSelect;
}
