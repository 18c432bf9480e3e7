//! Login and user lookup payloads

use serde::{Deserialize, Serialize};

use super::wire;

/// The only login `message` that means success
pub const LOGIN_SUCCESS: &str = "Login successful";

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Email address or mobile number
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "wire::lenient_text")]
    pub user_id: Option<String>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.message == LOGIN_SUCCESS
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    #[serde(default, deserialize_with = "wire::lenient_text")]
    pub name: Option<String>,
}
