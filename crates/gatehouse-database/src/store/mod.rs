//! Account persistence seam.
//!
//! The credential verifier and the services receive an
//! `Arc<dyn AccountStore>` at construction time rather than reaching for
//! any process-global state. [`PgAccountStore`] is the production backend;
//! [`MemoryAccountStore`] backs development mode and the test harness.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use gatehouse_core::result::AppResult;
use gatehouse_entity::account::{Account, AccountStatus, NewAccount};

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

/// Persistence operations for accounts.
///
/// Implementations own identifier/email uniqueness and all timestamp
/// management; callers never control `created_at`/`updated_at`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account, generating its `uuid` and timestamps.
    ///
    /// A duplicate `id_number` or `email` fails with a validation error.
    async fn create(&self, data: &NewAccount) -> AppResult<Account>;

    /// Find an account by identification number (exact, case-sensitive).
    async fn find_by_id_number(&self, id_number: &str) -> AppResult<Option<Account>>;

    /// Find an account by its stable unique identifier.
    async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<Account>>;

    /// Find an account by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Update an account's status and return the updated row.
    async fn update_status(&self, uuid: Uuid, status: AccountStatus) -> AppResult<Account>;

    /// Record a successful login time.
    async fn touch_last_login(&self, uuid: Uuid) -> AppResult<()>;
}
