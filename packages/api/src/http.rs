//! [`RecordBackend`] over the record API's JSON endpoints.

use reqwest::Client;
use store::{BackendError, ListBody, Record, RecordBackend};

/// HTTP client for `/api/user` and `/api/task`.
///
/// Requests go out unauthenticated; access control is the API's concern.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<R: Record>(&self) -> String {
        format!("{}/api/{}", self.base_url, R::COLLECTION)
    }

    fn record_url<R: Record>(&self, id: &str) -> String {
        format!("{}/api/{}/{id}", self.base_url, R::COLLECTION)
    }
}

fn backend_error(e: reqwest::Error) -> BackendError {
    if let Some(status) = e.status() {
        BackendError::Status(status.as_u16())
    } else if e.is_decode() {
        BackendError::Decode(e.to_string())
    } else {
        BackendError::Transport(e.to_string())
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, BackendError> {
    request
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(backend_error)
}

impl RecordBackend for HttpBackend {
    async fn list<R: Record>(&self) -> Result<Vec<R>, BackendError> {
        let response = send(self.client.get(self.collection_url::<R>())).await?;
        let body: ListBody<R> = response.json().await.map_err(backend_error)?;
        Ok(body.into_records())
    }

    async fn create<R: Record>(&self, draft: &R::Draft) -> Result<(), BackendError> {
        send(self.client.post(self.collection_url::<R>()).json(draft)).await?;
        Ok(())
    }

    async fn update<R: Record>(&self, id: &str, draft: &R::Draft) -> Result<(), BackendError> {
        send(self.client.put(self.record_url::<R>(id)).json(draft)).await?;
        Ok(())
    }

    async fn delete<R: Record>(&self, id: &str) -> Result<(), BackendError> {
        send(self.client.delete(self.record_url::<R>(id))).await?;
        Ok(())
    }
}
