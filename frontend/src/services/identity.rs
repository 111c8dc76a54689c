use anyhow::{anyhow, Result};
use gloo::net::http::Request;
use shared::{Principal, SessionResponse};

use crate::services::config::AppConfig;

/// Authenticated session handed out by the identity provider.
///
/// Passed down explicitly through component props; there is no ambient
/// "current user" anywhere in the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub principal: Principal,
    pub display_name: String,
    pub email: String,
}

/// Client for the external identity provider. The provider itself is a
/// black box; all this layer sees is whether a session exists.
#[derive(Clone, PartialEq)]
pub struct IdentityClient {
    base_url: String,
}

impl IdentityClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// Probe for an existing session, e.g. on app startup.
    pub async fn current_session(&self) -> Result<Option<AuthSession>> {
        let url = format!("{}/api/auth/session", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("session check failed: {e}"))?;
        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("malformed session response: {e}"))?;
        Ok(Self::into_session(session))
    }

    pub async fn login(&self) -> Result<AuthSession> {
        let url = format!("{}/api/auth/login", self.base_url);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| anyhow!("login failed: {e}"))?;
        if !response.ok() {
            return Err(anyhow!("login rejected with status {}", response.status()));
        }
        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("malformed session response: {e}"))?;
        Self::into_session(session)
            .ok_or_else(|| anyhow!("identity provider returned an unauthenticated session"))
    }

    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/api/auth/logout", self.base_url);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| anyhow!("logout failed: {e}"))?;
        if !response.ok() {
            return Err(anyhow!("logout rejected with status {}", response.status()));
        }
        Ok(())
    }

    fn into_session(response: SessionResponse) -> Option<AuthSession> {
        if !response.authenticated {
            return None;
        }
        Some(AuthSession {
            principal: response.principal?,
            display_name: response.display_name.unwrap_or_default(),
            email: response.email.unwrap_or_default(),
        })
    }
}
