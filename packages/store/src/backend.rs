//! The transport seam between [`crate::Directory`] and a record server.
//!
//! [`RecordBackend`] is implemented over HTTP by `api::HttpBackend` and in memory
//! by [`crate::MemoryBackend`]. Every method maps to exactly one request.

use serde::Deserialize;

use crate::models::Record;

/// Why a request failed.
///
/// Callers never branch on the variant: every failure is logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("no {collection} with id {id}")]
    NotFound {
        collection: &'static str,
        id: String,
    },
}

/// Body of a list response.
///
/// `GET /api/user` wraps the array as `{"data": [...]}` while `GET /api/task`
/// returns the bare array. Either shape is accepted for both collections.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListBody<R> {
    Envelope { data: Vec<R> },
    Bare(Vec<R>),
}

impl<R> ListBody<R> {
    pub fn into_records(self) -> Vec<R> {
        match self {
            ListBody::Envelope { data } => data,
            ListBody::Bare(records) => records,
        }
    }
}

/// Async access to the record collections.
pub trait RecordBackend {
    /// `GET /api/{collection}`
    fn list<R: Record>(&self) -> impl std::future::Future<Output = Result<Vec<R>, BackendError>>;

    /// `POST /api/{collection}`
    ///
    /// Only the status counts. Whatever the server echoes back is ignored, the
    /// next `list` is what the UI shows.
    fn create<R: Record>(
        &self,
        draft: &R::Draft,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;

    /// `PUT /api/{collection}/{id}`
    fn update<R: Record>(
        &self,
        id: &str,
        draft: &R::Draft,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;

    /// `DELETE /api/{collection}/{id}`
    fn delete<R: Record>(&self, id: &str)
        -> impl std::future::Future<Output = Result<(), BackendError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, User};

    #[test]
    fn test_list_body_accepts_envelope() {
        let body: ListBody<User> =
            serde_json::from_str(r#"{"data":[{"_id":"u1","name":"Ann","email":"a@x.com"}]}"#)
                .unwrap();
        let users = body.into_records();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u1");
    }

    #[test]
    fn test_list_body_accepts_bare_array() {
        let body: ListBody<Task> = serde_json::from_str(
            r#"[{"_id":"t1","name":"A","description":"B","user":"u1"},{"_id":"t2","name":"C","description":"D","user":"u2"}]"#,
        )
        .unwrap();
        assert_eq!(body.into_records().len(), 2);
    }

    #[test]
    fn test_list_body_rejects_other_shapes() {
        assert!(serde_json::from_str::<ListBody<User>>(r#"{"users":[]}"#).is_err());
    }
}
