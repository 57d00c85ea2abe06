use crate::models::LoginRequest;
use crate::services::api::ApiClient;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the login endpoint, one user-facing message per status
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or name format. Please check your details.")]
    BadRequest,

    #[error("Authentication failed. Please check your credentials.")]
    Unauthorized,

    #[error("Too many login attempts. Please try again later.")]
    RateLimited,

    #[error("Server error. Please try again later.")]
    ServerError,

    #[error("Login failed. Please try again.")]
    Rejected(u16),

    #[error("Network error. Please check internet and try again")]
    Network(#[from] reqwest::Error),
}

impl AuthError {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => AuthError::BadRequest,
            StatusCode::UNAUTHORIZED => AuthError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => AuthError::RateLimited,
            StatusCode::INTERNAL_SERVER_ERROR => AuthError::ServerError,
            other => AuthError::Rejected(other.as_u16()),
        }
    }
}

/// Client for the authentication endpoints and the session check
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// POST /auth/login
    ///
    /// On success the service sets its session cookie, which lands in the
    /// shared jar.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let url = self.api.url("/auth/login");
        tracing::debug!("Logging in {} via {}", request.email, url);

        let response = self.api.http().post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Login rejected for {}: {}", request.email, status);
            return Err(AuthError::from_status(status));
        }

        Ok(())
    }

    /// POST /auth/logout
    pub async fn logout(&self) -> Result<(), AuthError> {
        let url = self.api.url("/auth/logout");

        let response = self.api.http().post(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected(status.as_u16()));
        }

        Ok(())
    }

    /// Ask the service whether the current cookies carry a live session
    ///
    /// Probes `GET /dogs/breeds`; any failure reads as "not logged in".
    pub async fn check_session(&self) -> bool {
        let url = self.api.url("/dogs/breeds");

        match self.api.http().get(&url).send().await {
            Ok(response) => {
                let valid = response.status().is_success();
                tracing::debug!("Session check returned {}", response.status());
                valid
            }
            Err(e) => {
                tracing::warn!("Session check error: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            AuthError::from_status(StatusCode::BAD_REQUEST).to_string(),
            "Invalid email or name format. Please check your details."
        );
        assert_eq!(
            AuthError::from_status(StatusCode::TOO_MANY_REQUESTS).to_string(),
            "Too many login attempts. Please try again later."
        );
        assert!(matches!(
            AuthError::from_status(StatusCode::FORBIDDEN),
            AuthError::Rejected(403)
        ));
    }
}
