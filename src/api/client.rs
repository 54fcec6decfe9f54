//! HTTP Client
//!
//! Thin wrapper over `gloo-net` that joins paths onto the configured base
//! URL, attaches the bearer token and maps failures to [`ApiError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{message_from_body, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Request dispatcher for one session
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn builder(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("[API] {:?} {}", verb, url);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.builder(Verb::Get, path).send().await?;
        read_json(response).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .builder(Verb::Get, path)
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await?;
        read_json(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .builder(verb, path)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await?;
        read_json(response).await
    }

    /// Send a request whose response body is ignored
    pub(crate) async fn send_unit<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let builder = self.builder(verb, path);
        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await?,
            None => builder.send().await?,
        };
        if response.ok() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = message_from_body(&body);
    log::warn!("[API] {} {} -> {}", response.url(), status, message.as_deref().unwrap_or("-"));
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("https://localhost:7006/api", None);
        assert_eq!(client.url("/product"), "https://localhost:7006/api/product");
    }

    #[test]
    fn test_authorization_header_value() {
        assert_eq!(ApiClient::new("x", None).authorization(), None);
        assert_eq!(
            ApiClient::new("x", Some("abc.def".into())).authorization().as_deref(),
            Some("Bearer abc.def")
        );
    }
}
