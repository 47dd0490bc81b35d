//! Authentication API client methods

use super::request::ApiRequest;
use super::{ApiClient, ClientError};
use crate::types::{AdminLoginResponse, LoginRequest, RegisterRequest, UserLoginResponse};
use serde_json::Value;

impl ApiClient {
    /// Log in as an administrator and store both admin tokens
    pub async fn admin_login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AdminLoginResponse, ClientError> {
        let request = ApiRequest::post("/admin/login")
            .public()
            .json(&LoginRequest {
                email: email.into(),
                password: password.into(),
            })?;
        let response: AdminLoginResponse = self.execute(request).await?;

        self.session
            .set_admin_tokens(&response.access_token, &response.refresh_token)?;
        tracing::info!("admin logged in");
        Ok(response)
    }

    /// Log in as a student and store the user token
    pub async fn user_login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<UserLoginResponse, ClientError> {
        let request = ApiRequest::post("/login").public().json(&LoginRequest {
            email: email.into(),
            password: password.into(),
        })?;
        let response: UserLoginResponse = self.execute(request).await?;

        self.session.set_user_access_token(&response.access_token)?;
        tracing::info!("user logged in");
        Ok(response)
    }

    /// Create a student account. Does not log in.
    pub async fn user_register(&self, registration: &RegisterRequest) -> Result<Value, ClientError> {
        let request = ApiRequest::post("/register").public().json(registration)?;
        self.execute(request).await
    }

    /// Drop the stored admin credentials
    pub fn admin_logout(&self) -> Result<(), ClientError> {
        self.session.clear_admin()?;
        tracing::info!("admin logged out");
        Ok(())
    }

    /// Drop the stored user credentials
    pub fn user_logout(&self) -> Result<(), ClientError> {
        self.session.clear_user()?;
        tracing::info!("user logged out");
        Ok(())
    }
}
