//! Explicit session context and its lifecycle
//!
//! The context is created at login, restored from the session store when the
//! process starts, and cleared at logout. Both storage tiers are passed in by
//! the caller: the durable store outlives logouts, the session store does not.

use crate::core::favorites::favorites_key_for;
use crate::core::validation::{is_valid_email, is_valid_name, validate_login};
use crate::services::{ApiClient, AuthClient, AuthError, KeyValueStore, StoreError};
use chrono::{DateTime, Utc};
use thiserror::Error;

// Durable store
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";
pub const REMEMBERED_USER_KEY: &str = "rememberedUser";

// Session store
pub const CURRENT_EMAIL_KEY: &str = "currentUserEmail";
pub const CURRENT_NAME_KEY: &str = "currentUserName";
pub const IS_REMEMBERED_KEY: &str = "isRememberedUser";
pub const MATCH_FAVORITES_KEY: &str = "matchFavorites";
pub const AUTH_FLAG_KEY: &str = "authenticationSuccessful";
pub const COOKIES_KEY: &str = "sessionCookies";
pub const LOGGED_IN_AT_KEY: &str = "loggedInAt";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(&'static str),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// The logged-in user as far as this client knows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub name: String,
    pub email: String,
    /// The user asked to be remembered; their favorites survive logout
    pub remembered: bool,
    /// The service accepted the login
    pub authenticated: bool,
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl SessionContext {
    pub fn new(name: impl Into<String>, email: impl Into<String>, remembered: bool) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            remembered,
            authenticated: false,
            logged_in_at: None,
        }
    }

    /// Rebuild the context from the session store, if a user is recorded
    pub fn restore<S: KeyValueStore>(session: &S) -> Option<Self> {
        let email = session.get(CURRENT_EMAIL_KEY)?;
        let name = session.get(CURRENT_NAME_KEY).unwrap_or_default();

        Some(Self {
            name,
            email,
            remembered: session.get(IS_REMEMBERED_KEY).as_deref() == Some("true"),
            authenticated: is_flagged(session),
            logged_in_at: session
                .get(LOGGED_IN_AT_KEY)
                .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
                .map(|ts| ts.with_timezone(&Utc)),
        })
    }

    fn persist_identity<S: KeyValueStore>(&self, session: &mut S) -> Result<(), StoreError> {
        session.set(CURRENT_EMAIL_KEY, &self.email)?;
        session.set(CURRENT_NAME_KEY, &self.name)?;
        session.set(IS_REMEMBERED_KEY, if self.remembered { "true" } else { "false" })
    }

    fn clear_identity<S: KeyValueStore>(session: &mut S) -> Result<(), StoreError> {
        session.remove(CURRENT_EMAIL_KEY)?;
        session.remove(CURRENT_NAME_KEY)?;
        session.remove(IS_REMEMBERED_KEY)
    }
}

/// The session store records a login the service accepted
pub fn is_flagged<S: KeyValueStore>(session: &S) -> bool {
    session.get(AUTH_FLAG_KEY).as_deref() == Some("true")
}

/// Name and email saved by an earlier "remember me" login
pub fn remembered_identity<D: KeyValueStore>(durable: &D) -> Option<(String, String)> {
    let email = durable.get(REMEMBERED_EMAIL_KEY)?;
    let name = durable.get(REMEMBERED_USER_KEY).unwrap_or_default();

    if !is_valid_email(&email) || !is_valid_name(&name, 2) {
        tracing::warn!("Ignoring unusable remembered identity");
        return None;
    }

    Some((name, email))
}

/// Log in and create the session context
///
/// Input is sanitized and validated first; invalid input never reaches the
/// network. On a rejected login the identity keys are removed again.
pub async fn login_flow<D: KeyValueStore, S: KeyValueStore>(
    auth: &AuthClient,
    durable: &mut D,
    session: &mut S,
    name: &str,
    email: &str,
    remember: bool,
) -> Result<SessionContext, SessionError> {
    let request = validate_login(name, email).map_err(SessionError::Validation)?;

    if remember {
        durable.set(REMEMBERED_EMAIL_KEY, &request.email)?;
        durable.set(REMEMBERED_USER_KEY, &request.name)?;
    }

    let mut context = SessionContext::new(request.name.clone(), request.email.clone(), remember);
    context.persist_identity(session)?;

    if let Err(e) = auth.login(&request).await {
        SessionContext::clear_identity(session)?;
        return Err(e.into());
    }

    let now = Utc::now();
    session.set(AUTH_FLAG_KEY, "true")?;
    session.set(LOGGED_IN_AT_KEY, &now.to_rfc3339())?;
    persist_cookies(auth.api(), session)?;

    context.authenticated = true;
    context.logged_in_at = Some(now);

    tracing::info!("Logged in as {}", context.email);

    Ok(context)
}

/// Verify the session with the service, keeping the local flag in sync
///
/// Never fails: storage trouble is logged and the server's answer wins.
pub async fn check_existing_session<S: KeyValueStore>(auth: &AuthClient, session: &mut S) -> bool {
    let flagged = is_flagged(session);
    let valid = auth.check_session().await;

    tracing::debug!("Session check: local flag {}, server {}", flagged, valid);

    let result = match (flagged, valid) {
        (true, false) => session.remove(AUTH_FLAG_KEY),
        (false, true) => session.set(AUTH_FLAG_KEY, "true"),
        _ => Ok(()),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to update session flag: {}", e);
    }

    valid
}

/// Tear down the session context
///
/// Favorites of a user who did not ask to be remembered are deleted. The
/// logout call itself is best-effort.
pub async fn logout_flow<D: KeyValueStore, S: KeyValueStore>(
    auth: &AuthClient,
    durable: &mut D,
    session: &mut S,
) -> Result<(), SessionError> {
    session.remove(AUTH_FLAG_KEY)?;

    if let Some(context) = SessionContext::restore(session) {
        if !context.remembered {
            durable.remove(&favorites_key_for(&context.email))?;
        }
    }

    SessionContext::clear_identity(session)?;
    session.remove(MATCH_FAVORITES_KEY)?;
    session.remove(LOGGED_IN_AT_KEY)?;
    session.remove(COOKIES_KEY)?;

    if let Err(e) = auth.logout().await {
        tracing::warn!("Logout request failed: {}", e);
    }

    tracing::info!("Logged out");

    Ok(())
}

/// Save the cookie jar so a later process can reuse the session
pub fn persist_cookies<S: KeyValueStore>(
    api: &ApiClient,
    session: &mut S,
) -> Result<(), StoreError> {
    match api.export_cookies() {
        Some(cookies) => session.set(COOKIES_KEY, &cookies),
        None => Ok(()),
    }
}

/// Load saved cookies into the jar
pub fn restore_cookies<S: KeyValueStore>(api: &ApiClient, session: &S) {
    if let Some(cookies) = session.get(COOKIES_KEY) {
        api.restore_cookies(&cookies);
    }
}
