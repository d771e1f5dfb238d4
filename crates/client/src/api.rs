//! Typed HTTP client for the tracking API.
//!
//! One method per server operation; each method performs a single
//! round trip and maps non-success statuses onto [`ClientError`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use trackline_core::types::DbId;

use crate::error::ClientError;
use crate::types::{AnimeEntry, Book, Todo};

/// HTTP request timeout for a single round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the tracking API, rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with a pre-configured HTTP connection pool.
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Read a response body, mapping non-success statuses to errors.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(classify_error(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // -----------------------------------------------------------------------
    // Todos
    // -----------------------------------------------------------------------

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.http.get(self.url("/api/v1/todos")).send().await?;
        Self::read_json(response).await
    }

    pub async fn get_todo(&self, id: DbId) -> Result<Todo, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/todos"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn create_todo(&self, text: &str) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/todos"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Partial update: only the supplied fields are sent.
    pub async fn update_todo(
        &self,
        id: DbId,
        text: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Todo, ClientError> {
        let mut body = serde_json::json!({ "id": id });
        if let Some(text) = text {
            body["text"] = serde_json::Value::from(text);
        }
        if let Some(completed) = completed {
            body["completed"] = serde_json::Value::from(completed);
        }
        let response = self
            .http
            .patch(self.url("/api/v1/todos"))
            .json(&body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Ask the server to invert `completed`; the response carries the
    /// value the store actually holds.
    pub async fn toggle_todo(&self, id: DbId) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/api/v1/todos/{id}/toggle")))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Delete by id; the response is the record's prior state.
    pub async fn delete_todo(&self, id: DbId) -> Result<Todo, ClientError> {
        let response = self
            .http
            .delete(self.url("/api/v1/todos"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    // -----------------------------------------------------------------------
    // Anime
    // -----------------------------------------------------------------------

    pub async fn list_anime(&self) -> Result<Vec<AnimeEntry>, ClientError> {
        let response = self.http.get(self.url("/api/v1/anime")).send().await?;
        Self::read_json(response).await
    }

    pub async fn create_anime(
        &self,
        title: &str,
        status: &str,
        score: f64,
    ) -> Result<AnimeEntry, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/anime"))
            .json(&serde_json::json!({
                "title": title,
                "status": status,
                "score": score,
            }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Partial update: only the supplied fields are sent.
    pub async fn update_anime(
        &self,
        id: DbId,
        title: Option<&str>,
        status: Option<&str>,
        score: Option<f64>,
    ) -> Result<AnimeEntry, ClientError> {
        let mut body = serde_json::json!({ "id": id });
        if let Some(title) = title {
            body["title"] = serde_json::Value::from(title);
        }
        if let Some(status) = status {
            body["status"] = serde_json::Value::from(status);
        }
        if let Some(score) = score {
            body["score"] = serde_json::Value::from(score);
        }
        let response = self
            .http
            .patch(self.url("/api/v1/anime"))
            .json(&body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn delete_anime(&self, id: DbId) -> Result<AnimeEntry, ClientError> {
        let response = self
            .http
            .delete(self.url("/api/v1/anime"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    // -----------------------------------------------------------------------
    // Books
    // -----------------------------------------------------------------------

    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.http.get(self.url("/api/v1/books")).send().await?;
        Self::read_json(response).await
    }

    pub async fn get_book(&self, id: DbId) -> Result<Book, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/books"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn search_books(&self, title: &str) -> Result<Vec<Book>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/books"))
            .query(&[("title", title)])
            .send()
            .await?;
        Self::read_json(response).await
    }
}

/// Map a non-success response onto the client error taxonomy.
///
/// Error bodies are `{ "error": ..., "code": ... }`; fall back to the
/// raw body when the shape does not match.
fn classify_error(status: u16, body: &str) -> ClientError {
    if status == 404 {
        return ClientError::NotFound;
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.to_string());
    ClientError::Api { status, message }
}
