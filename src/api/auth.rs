//! Auth Commands

use serde::{Deserialize, Serialize};

use super::client::{ApiClient, Verb};
use super::error::ApiError;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response: LoginResponse = self
            .send_json(Verb::Post, "/auth/login", &LoginArgs { username, password })
            .await?;
        if response.access_token.is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".into()));
        }
        Ok(response.access_token)
    }
}
