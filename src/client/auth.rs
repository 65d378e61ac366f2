/**
 * Authentication State
 *
 * Tracks whether this client holds a session. The session itself is the
 * cookie inside `ApiClient`; this only mirrors the outcome of the last
 * auth request for display.
 */

use crate::client::api::{ApiClient, ClientError};
use crate::shared::api::{MessageResponse, SignupRequest};

/// Authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    fn finish<T>(&mut self, result: &Result<T, ClientError>, fallback: &str) {
        self.loading = false;
        if let Err(e) = result {
            self.error = Some(e.server_message().unwrap_or(fallback).to_string());
        }
    }

    /// Sign in; on success the client carries the session cookie
    pub async fn sign_in(
        &mut self,
        api: &ApiClient,
        id_number: &str,
        password: &str,
    ) -> Result<MessageResponse, ClientError> {
        self.loading = true;
        self.clear_error();

        let result = api.signin(id_number, password).await;
        self.finish(&result, "Sign in failed");
        if result.is_ok() {
            self.authenticated = true;
        }
        result
    }

    /// Register an admin; does not sign in
    pub async fn sign_up(
        &mut self,
        api: &ApiClient,
        request: &SignupRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.loading = true;
        self.clear_error();

        let result = api.signup(request).await;
        self.finish(&result, "Sign up failed");
        result
    }

    /// Ask the server to clear the cookie
    ///
    /// Local state is signed out even if the request fails.
    pub async fn sign_out(&mut self, api: &ApiClient) -> Result<MessageResponse, ClientError> {
        self.loading = true;
        self.clear_error();

        let result = api.logout().await;
        self.finish(&result, "Logout failed");
        self.authenticated = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_new() {
        let state = AuthState::new();
        assert!(!state.authenticated);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_auth_state_clear_error() {
        let mut state = AuthState::new();
        state.set_error("Test error".to_string());
        assert_eq!(state.error, Some("Test error".to_string()));

        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_finish_prefers_server_message() {
        let mut state = AuthState { loading: true, ..AuthState::new() };
        let result: Result<(), ClientError> = Err(ClientError::Api {
            status: 404,
            message: Some("Error signing in!".to_string()),
        });
        state.finish(&result, "Sign in failed");
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Error signing in!"));

        let result: Result<(), ClientError> = Err(ClientError::Api { status: 500, message: None });
        state.finish(&result, "Sign in failed");
        assert_eq!(state.error.as_deref(), Some("Sign in failed"));
    }
}
