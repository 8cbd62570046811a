//! # gatehouse-auth
//!
//! Credential verification and token issuance for Gatehouse.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `jwt` — JWT claims, token creation, and validation
//! - `authenticator` — identification-number credential verification
//! - `manager` — login and refresh orchestration

pub mod authenticator;
pub mod jwt;
pub mod manager;
pub mod password;

pub use authenticator::Authenticator;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use manager::{AuthManager, LoginResult};
pub use password::PasswordHasher;
