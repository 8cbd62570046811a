//! # gatehouse-database
//!
//! PostgreSQL connection management, the migration runner, and the
//! [`store::AccountStore`] trait with its concrete implementations.

pub mod connection;
pub mod migration;
pub mod store;

pub use connection::DatabasePool;
pub use store::{AccountStore, MemoryAccountStore, PgAccountStore};
