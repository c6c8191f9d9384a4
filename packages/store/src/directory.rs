//! # Directory: a local mirror of one server collection
//!
//! [`Directory`] holds the last list fetched for a record type and keeps it in
//! step with the server through a fixed two-step protocol: issue the mutation,
//! await it, then refetch the whole collection. No local patching ever happens,
//! so the list only ever contains what the server last returned.
//!
//! Every operation swallows its failure. The error is logged with `tracing` and
//! the list keeps its previous contents. Each operation returns whether its
//! closing fetch succeeded.
//!
//! The UI keeps the list in a signal and builds a short-lived `Directory` around
//! it per interaction. Only a successful resync is published, so an operation
//! that fails never puts its stale starting copy over a newer list:
//!
//! ```ignore
//! let mut dir = Directory::with_records(backend, users());
//! if dir.create(&draft).await {
//!     users.set(dir.into_records());
//! }
//! ```

use crate::backend::RecordBackend;
use crate::form::Submission;
use crate::models::Record;

pub struct Directory<B, R> {
    backend: B,
    records: Vec<R>,
}

impl<B: RecordBackend, R: Record> Directory<B, R> {
    /// An empty directory; call [`fetch`](Self::fetch) to populate it.
    pub fn new(backend: B) -> Self {
        Self::with_records(backend, Vec::new())
    }

    /// A directory seeded with a previously fetched list.
    pub fn with_records(backend: B, records: Vec<R>) -> Self {
        Self { backend, records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replace the local list with the server's. Returns `false` and keeps the
    /// current list when the server could not be read.
    pub async fn fetch(&mut self) -> bool {
        match self.backend.list::<R>().await {
            Ok(records) => {
                tracing::debug!(collection = R::COLLECTION, count = records.len(), "resynced");
                self.records = records;
                true
            }
            Err(e) => {
                tracing::error!(collection = R::COLLECTION, "fetch failed: {e}");
                false
            }
        }
    }

    pub async fn create(&mut self, draft: &R::Draft) -> bool {
        if let Err(e) = self.backend.create::<R>(draft).await {
            tracing::error!(collection = R::COLLECTION, "create failed: {e}");
        }
        self.fetch().await
    }

    pub async fn update(&mut self, id: &str, draft: &R::Draft) -> bool {
        if let Err(e) = self.backend.update::<R>(id, draft).await {
            tracing::error!(collection = R::COLLECTION, id, "update failed: {e}");
        }
        self.fetch().await
    }

    pub async fn delete(&mut self, id: &str) -> bool {
        if let Err(e) = self.backend.delete::<R>(id).await {
            tracing::error!(collection = R::COLLECTION, id, "delete failed: {e}");
        }
        self.fetch().await
    }

    /// Send a form submission as a create or an update.
    pub async fn submit(&mut self, submission: Submission<R>) -> bool {
        match submission {
            Submission::Create(draft) => self.create(&draft).await,
            Submission::Update { id, draft } => self.update(&id, &draft).await,
        }
    }
}
