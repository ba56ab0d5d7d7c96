//! The storage seam.

use crate::error::StoreResult;
use async_trait::async_trait;
use cohort_model::{Enrollment, NewEnrollment};

/// Abstract enrollment storage.
///
/// Emails are the lookup key and are compared case-insensitively by every
/// backend. Callers hold a store as `Arc<dyn EnrollmentStore>` and never
/// learn which backend is active.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Name of the backing implementation, for logs.
    fn backend_name(&self) -> &'static str;

    /// Creates a record from submitted data.
    ///
    /// Assigns the id and timestamps and derives the initial payment
    /// status. Fails with [`StoreError::DuplicateEmail`] when a record with
    /// the same email already exists.
    ///
    /// [`StoreError::DuplicateEmail`]: crate::StoreError::DuplicateEmail
    async fn create(&self, new: NewEnrollment) -> StoreResult<Enrollment>;

    /// Looks up a record by email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Enrollment>>;

    /// Records a self-reported payment against an existing record: sets the
    /// transaction ID, forces the status to completed, bumps `updated_at`,
    /// and returns the updated record. Fails with [`StoreError::NotFound`]
    /// when the email is unknown.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    async fn attach_transaction(&self, email: &str, transaction_id: &str)
        -> StoreResult<Enrollment>;

    /// Returns all records, newest first.
    async fn list_all(&self) -> StoreResult<Vec<Enrollment>>;

    /// Deletes every record. Irreversible.
    async fn clear_all(&self) -> StoreResult<()>;
}
