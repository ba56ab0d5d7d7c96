//! In-memory store backend, the default for development and tests.

use crate::error::{StoreError, StoreResult};
use crate::store::EnrollmentStore;
use async_trait::async_trait;
use cohort_model::{normalize_email, Enrollment, NewEnrollment};
use std::collections::HashMap;
use std::sync::RwLock;

/// Enrollment store backed by a process-local map keyed by normalized email.
///
/// Data lives for the lifetime of the process. Lock scopes are short and
/// never cross an await point.
pub struct MemoryStore {
    records: RwLock<HashMap<String, Enrollment>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, new: NewEnrollment) -> StoreResult<Enrollment> {
        let key = normalize_email(&new.email);
        let mut records = self.records.write().unwrap();
        if records.contains_key(&key) {
            return Err(StoreError::DuplicateEmail(new.email));
        }
        let record = Enrollment::create(new);
        records.insert(key, record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Enrollment>> {
        let records = self.records.read().unwrap();
        Ok(records.get(&normalize_email(email)).cloned())
    }

    async fn attach_transaction(
        &self,
        email: &str,
        transaction_id: &str,
    ) -> StoreResult<Enrollment> {
        let mut records = self.records.write().unwrap();
        let record = records
            .get_mut(&normalize_email(email))
            .ok_or_else(|| StoreError::NotFound(email.to_string()))?;
        record.attach_transaction(transaction_id);
        Ok(record.clone())
    }

    async fn list_all(&self) -> StoreResult<Vec<Enrollment>> {
        let records = self.records.read().unwrap();
        let mut all: Vec<Enrollment> = records.values().cloned().collect();
        // Newest first; v7 ids break created_at ties in creation order.
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn clear_all(&self) -> StoreResult<()> {
        self.records.write().unwrap().clear();
        Ok(())
    }
}
