//! Thin REST client shared by every API wrapper.
//!
//! `RestApi` joins paths onto the configured base URL, attaches the bearer
//! token and maps responses onto [`ApiResponse`]. The transport is a trait
//! object so the browser fetch can be swapped for a scripted one in tests.

mod error;
mod transport;

#[cfg(test)]
pub mod testing;

pub use error::{ApiError, ApiResponse};
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

use contracts::shared::api::ApiErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use crate::system::auth::storage::TokenStorage;

#[derive(Clone)]
pub struct RestApi {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    tokens: Rc<dyn TokenStorage>,
}

impl RestApi {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        tokens: Rc<dyn TokenStorage>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            tokens,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let response = self.execute(HttpMethod::Get, path, None).await?;
        decode(&response)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.execute(HttpMethod::Post, path, Some(json)).await?;
        decode(&response)
    }

    /// POST whose response body is ignored
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> ApiResponse<()>
    where
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(HttpMethod::Post, path, Some(json)).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> ApiResponse<HttpResponse> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.tokens.access_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };
        log::debug!("{} {}", method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            e
        })?;

        if response.ok() {
            return Ok(response);
        }

        let error = server_error(&response);
        log::warn!("{} {} -> {}", method, path, error);
        Err(error)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ApiResponse<T> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn server_error(response: &HttpResponse) -> ApiError {
    if response.status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ApiErrorBody>(&response.body)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            let text = response.body.trim();
            if text.is_empty() {
                "request failed".to_string()
            } else {
                text.to_string()
            }
        });
    ApiError::Server {
        status: response.status,
        message,
    }
}
