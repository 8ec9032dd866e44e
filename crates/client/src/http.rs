use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::session::Session;

/// HTTP client for the competition backend.
///
/// One instance is shared by every resource endpoint. It attaches the bearer
/// token from the [`Session`] to each request when one is present and funnels
/// every response through the same status handling, so authorization failures
/// and backend error messages are treated uniformly no matter which call
/// produced them.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        self.decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        self.decode(response).await
    }

    /// POST returning the raw response body. The login endpoint answers with
    /// the bearer token either as plain text or as a JSON-quoted string.
    pub(crate) async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        let response = self.check(response).await?;
        let body = response.text().await?;
        match serde_json::from_str::<String>(&body) {
            Ok(unquoted) => Ok(unquoted),
            Err(_) => Ok(body),
        }
    }

    pub(crate) async fn post_empty_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::POST, path).send().await?;
        self.decode(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        let response = self.request(Method::POST, path).send().await?;
        self.check(response).await?;
        Ok(())
    }

    pub(crate) async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        self.check(response).await?;
        Ok(())
    }

    pub(crate) async fn patch_empty(&self, path: &str) -> Result<()> {
        let response = self.request(Method::PATCH, path).send().await?;
        self.check(response).await?;
        Ok(())
    }

    pub(crate) async fn delete_empty(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.check(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let response = self.check(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Central response interceptor: a 401 from any endpoint means the stored
    /// session is no longer valid, so it is cleared before the error is
    /// returned. Other failures surface the backend's message when it sends
    /// one, with a generic fallback.
    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.session.clear() {
                tracing::warn!("Failed to clear stored session: {}", err);
            }
            return Err(ClientError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| extract_message(&body))
            .unwrap_or_else(|| "The server rejected the request".to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|message| message.as_str())
        .map(String::from)
}

/// List responses are inconsistent across resources: some endpoints answer
/// with a bare array, others with a `[rows, count]` pair. Both shapes decode
/// into the same `Vec<T>`, so the rest of the crate sees a single contract.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Counted(Vec<T>, i64),
    Rows(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            ListEnvelope::Counted(rows, _) => rows,
            ListEnvelope::Rows(rows) => rows,
        }
    }
}
