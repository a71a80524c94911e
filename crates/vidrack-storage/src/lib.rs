//! Storage backends for the Vidrack video catalog.
//!
//! Two implementations of the [`vidrack_core::Repository`] contract are
//! provided: a SQLite backend for persistent deployments and an in-memory
//! backend for tests and ephemeral runs.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryRepository;
pub use sqlite::SqliteRepository;
