//! # gatehouse-service
//!
//! Business logic service layer for Gatehouse. Services orchestrate the
//! account store and the password hasher to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;

pub use account::{AccountService, CreateAccount};
