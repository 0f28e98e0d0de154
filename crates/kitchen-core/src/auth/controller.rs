//! Auth controller
//!
//! Credential flows over the gateway. A JSON response carrying a `token`
//! commits the session; anything else (including every failure) leaves it
//! untouched and is handed back as received.

use std::sync::Arc;

use serde_json::Value;

use super::navigator::{Navigator, NoopNavigator};
use crate::error::Result;
use crate::gateway::{ApiResponse, Gateway};
use crate::models::{AuthState, LoginRequest, SignupRequest, User};
use crate::session::SessionStore;

/// Policy layer over the gateway for login, signup, logout and the auth guard
#[derive(Clone)]
pub struct AuthController {
    gateway: Gateway,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl AuthController {
    /// Controller sharing the gateway's session store, with a no-op navigator
    pub fn new(gateway: Gateway) -> Self {
        Self::with_navigator(gateway, Arc::new(NoopNavigator))
    }

    pub fn with_navigator(gateway: Gateway, navigator: Arc<dyn Navigator>) -> Self {
        let session = gateway.session().clone();
        Self {
            gateway,
            session,
            navigator,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// POST credentials to the login endpoint and commit any returned token
    ///
    /// Returns the backend's response whether or not it held a token.
    pub async fn login(&self, username: &str, password: &str) -> Result<ApiResponse> {
        let endpoint = self.gateway.config().endpoints.login.clone();
        let body = LoginRequest { username, password };

        let response = self.gateway.post(&endpoint, &body).await?;
        if self.commit_session(&response)? {
            log::info!("[auth] Logged in as {}", username);
        }
        Ok(response)
    }

    /// POST a new account to the signup endpoint; a returned token logs in
    pub async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<ApiResponse> {
        let endpoint = self.gateway.config().endpoints.signup.clone();
        let body = SignupRequest {
            email,
            username,
            password,
        };

        let response = self.gateway.post(&endpoint, &body).await?;
        if self.commit_session(&response)? {
            log::info!("[auth] Signed up and logged in as {}", username);
        }
        Ok(response)
    }

    /// Drop the session and ask the collaborator to show the login surface
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            log::error!("[auth] Failed to clear session on logout: {}", e);
        }
        log::info!("[auth] Logged out");
        self.navigator.redirect_to_login();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn state(&self) -> AuthState {
        self.session.state()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.get_user()
    }

    /// Guard for authenticated-only actions
    ///
    /// Returns `false` and signals the navigator when no session exists.
    pub fn require_auth(&self) -> bool {
        if self.is_authenticated() {
            return true;
        }
        log::debug!("[auth] Authentication required, redirecting to login");
        self.navigator.redirect_to_login();
        false
    }

    /// Store the session carried by `response`; `false` when it carried none
    fn commit_session(&self, response: &ApiResponse) -> Result<bool> {
        let Some(token) = session_token(response) else {
            log::debug!("[auth] Response carried no token, session unchanged");
            return Ok(false);
        };

        let user = response
            .as_json()
            .and_then(|body| body.get("user"))
            .filter(|u| !u.is_null())
            .cloned()
            .map(User::new);

        self.session.set_session(token, user.as_ref())?;
        Ok(true)
    }
}

/// The non-empty string `token` of a JSON auth response
pub fn session_token(response: &ApiResponse) -> Option<&str> {
    response
        .as_json()?
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
}
