//! Recovery from 401 responses
//!
//! Admin sessions get one refresh exchange and one replay. User sessions have
//! no refresh credential, so a 401 there ends the session immediately.
//! Refreshes are serialized: a request that waited behind a concurrent
//! successful refresh replays with the new token instead of exchanging again.

use super::ApiClient;
use super::error::ClientError;
use super::events::SessionInvalidated;
use super::request::{ApiRequest, RequestContext};
use crate::types::{RefreshTokenRequest, RefreshTokenResponse};
use learnhub_core::Namespace;
use reqwest::{Response, StatusCode};

/// Admin endpoint exchanging a refresh token for a new access token
pub const REFRESH_TOKEN_PATH: &str = "/admin/refresh-token";

impl ApiClient {
    /// Handle a 401 received by the first dispatch of `request`
    pub(super) async fn recover_unauthorized(
        &self,
        request: &ApiRequest,
        ctx: RequestContext,
        response: Response,
    ) -> Result<Response, ClientError> {
        let rejected = Self::error_from_response(response).await;

        if ctx.is_replay() {
            return Err(self.invalidate(ctx.namespace(), rejected));
        }

        match ctx.namespace() {
            Namespace::User => Err(self.invalidate(Namespace::User, rejected)),
            Namespace::Admin => self.refresh_and_replay(request, ctx, rejected).await,
        }
    }

    async fn refresh_and_replay(
        &self,
        request: &ApiRequest,
        ctx: RequestContext,
        rejected: ClientError,
    ) -> Result<Response, ClientError> {
        let token = {
            let _guard = self.refresh_lock.lock().await;

            match self.session.admin_access_token()? {
                Some(current) if Some(current.as_str()) != ctx.bearer() => {
                    tracing::debug!(path = request.path(), "token already refreshed, replaying");
                    current
                }
                _ => {
                    let Some(refresh_token) = self.session.admin_refresh_token()? else {
                        tracing::info!("no admin refresh token stored");
                        return Err(self.invalidate(Namespace::Admin, rejected));
                    };

                    match self.exchange_refresh_token(&refresh_token).await {
                        Ok(access_token) => {
                            self.session.set_admin_access_token(&access_token)?;
                            tracing::info!("admin access token refreshed");
                            access_token
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "admin token refresh failed");
                            return Err(self.invalidate(Namespace::Admin, err));
                        }
                    }
                }
            }
        };

        let replay = ctx.replay(token);
        let response = self.dispatch(request, &replay).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let err = Self::error_from_response(response).await;
            tracing::warn!(path = request.path(), "refreshed token rejected");
            return Err(self.invalidate(Namespace::Admin, err));
        }

        Self::check_status(response).await
    }

    /// Exchange `refresh_token` for a new admin access token
    ///
    /// Sent directly, without the request interceptor, so a failing exchange
    /// never triggers another refresh.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, REFRESH_TOKEN_PATH);
        let response = self
            .client
            .post(url)
            .json(&RefreshTokenRequest {
                refresh_token: refresh_token.to_string(),
            })
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        let body: RefreshTokenResponse = serde_json::from_slice(&bytes)?;

        if body.access_token.is_empty() {
            return Err(ClientError::AuthenticationFailed(
                "refresh endpoint returned an empty access token".into(),
            ));
        }

        Ok(body.access_token)
    }

    /// Clear `namespace`'s credentials, notify the listener and wrap `cause`
    fn invalidate(&self, namespace: Namespace, cause: ClientError) -> ClientError {
        tracing::warn!(%namespace, error = %cause, "session invalidated");

        if let Err(err) = self.session.clear(namespace) {
            tracing::error!(%namespace, error = %err, "failed to clear credentials");
        }

        self.listener
            .session_invalidated(&SessionInvalidated::new(namespace));

        ClientError::SessionInvalidated {
            namespace,
            source: Box::new(cause),
        }
    }
}
