use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::Value;

use crate::backend::{BackendError, RecordBackend};
use crate::models::Record;

/// HTTP verb of a recorded request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request as seen by [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct MemoryState {
    collections: HashMap<&'static str, Vec<Value>>,
    requests: Vec<RecordedRequest>,
    next_id: u64,
    offline: bool,
}

/// In-memory record server for tests.
///
/// Assigns sequential ids (`"1"`, `"2"`, ...), applies mutations and keeps a log
/// of every request in the order it arrived. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Put records straight into a collection without logging a request.
    pub fn seed<R: Record>(&self, records: Vec<R>) {
        let mut state = self.state();
        let values = records
            .iter()
            .filter_map(|r| serde_json::to_value(r).ok())
            .collect::<Vec<_>>();
        state.collections.entry(R::COLLECTION).or_default().extend(values);
    }

    /// Server-side contents of a collection.
    pub fn records<R: Record>(&self) -> Vec<R> {
        self.state()
            .collections
            .get(R::COLLECTION)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }

    /// While offline every request is logged and then fails with
    /// [`BackendError::Transport`].
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    fn record<B: Serialize>(
        &self,
        method: Method,
        path: String,
        body: Option<&B>,
    ) -> Result<MutexGuard<'_, MemoryState>, BackendError> {
        let mut state = self.state();
        let body = body.and_then(|b| serde_json::to_value(b).ok());
        state.requests.push(RecordedRequest { method, path, body });
        if state.offline {
            return Err(BackendError::Transport("connection refused".to_string()));
        }
        Ok(state)
    }
}

fn collection_path<R: Record>() -> String {
    format!("/api/{}", R::COLLECTION)
}

fn record_path<R: Record>(id: &str) -> String {
    format!("/api/{}/{id}", R::COLLECTION)
}

fn decode<R: Record>(value: Value) -> Result<R, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
}

fn encode<R: Record>(record: &R) -> Result<Value, BackendError> {
    serde_json::to_value(record).map_err(|e| BackendError::Decode(e.to_string()))
}

impl RecordBackend for MemoryBackend {
    async fn list<R: Record>(&self) -> Result<Vec<R>, BackendError> {
        let state = self.record::<()>(Method::Get, collection_path::<R>(), None)?;
        state
            .collections
            .get(R::COLLECTION)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(decode::<R>)
            .collect()
    }

    async fn create<R: Record>(&self, draft: &R::Draft) -> Result<(), BackendError> {
        let mut state = self.record(Method::Post, collection_path::<R>(), Some(draft))?;
        state.next_id += 1;
        let record = R::from_draft(state.next_id.to_string(), draft.clone());
        let value = encode(&record)?;
        state.collections.entry(R::COLLECTION).or_default().push(value);
        Ok(())
    }

    async fn update<R: Record>(&self, id: &str, draft: &R::Draft) -> Result<(), BackendError> {
        let mut state = self.record(Method::Put, record_path::<R>(id), Some(draft))?;
        let record = R::from_draft(id.to_string(), draft.clone());
        let value = encode(&record)?;
        let slot = state
            .collections
            .get_mut(R::COLLECTION)
            .and_then(|values| values.iter_mut().find(|v| v["_id"] == id))
            .ok_or_else(|| BackendError::NotFound {
                collection: R::COLLECTION,
                id: id.to_string(),
            })?;
        *slot = value;
        Ok(())
    }

    async fn delete<R: Record>(&self, id: &str) -> Result<(), BackendError> {
        let mut state = self.record::<()>(Method::Delete, record_path::<R>(id), None)?;
        let values = state.collections.entry(R::COLLECTION).or_default();
        let before = values.len();
        values.retain(|v| v["_id"] != id);
        if values.len() == before {
            return Err(BackendError::NotFound {
                collection: R::COLLECTION,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskDraft, User, UserDraft};

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let backend = MemoryBackend::new();

        backend.create::<User>(&draft("Ann")).await.unwrap();
        backend.create::<User>(&draft("Bo")).await.unwrap();

        let users = backend.list::<User>().await.unwrap();
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(users[1].name, "Bo");
    }

    #[tokio::test]
    async fn test_collections_are_separate() {
        let backend = MemoryBackend::new();
        backend.create::<User>(&draft("Ann")).await.unwrap();
        backend
            .create::<Task>(&TaskDraft {
                name: "Plan".to_string(),
                description: "Plan the week".to_string(),
                user: "1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(backend.records::<User>().len(), 1);
        assert_eq!(backend.records::<Task>().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let backend = MemoryBackend::new();

        let err = backend.update::<User>("42", &draft("Ann")).await.unwrap_err();
        assert!(matches!(err, BackendError::NotFound { .. }));

        let err = backend.delete::<User>("42").await.unwrap_err();
        assert!(matches!(err, BackendError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_requests_are_logged_in_order() {
        let backend = MemoryBackend::new();
        backend.create::<User>(&draft("Ann")).await.unwrap();
        backend.update::<User>("1", &draft("Anne")).await.unwrap();
        backend.delete::<User>("1").await.unwrap();

        let log = backend.requests();
        let calls: Vec<_> = log.iter().map(|r| (r.method, r.path.as_str())).collect();
        assert_eq!(
            calls,
            vec![
                (Method::Post, "/api/user"),
                (Method::Put, "/api/user/1"),
                (Method::Delete, "/api/user/1"),
            ]
        );
        assert_eq!(
            log[1].body,
            Some(serde_json::json!({ "name": "Anne", "email": "anne@x.com" }))
        );
        assert_eq!(log[2].body, None);
    }

    #[tokio::test]
    async fn test_offline_logs_then_fails() {
        let backend = MemoryBackend::new();
        backend.seed(vec![User {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        }]);
        backend.set_offline(true);

        let err = backend.list::<User>().await.unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(backend.records::<User>().len(), 1);
    }
}
