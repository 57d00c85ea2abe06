// Command exports
pub mod auth;
pub mod locations;
pub mod matches;
pub mod search;

use crate::config::Settings;
use crate::core::session::{self, SessionContext, SessionError};
use crate::core::MatchError;
use crate::services::{
    ApiClient, AuthClient, CatalogClient, CatalogError, JsonFileStore, StoreError,
};
use clap::{Parser, Subcommand};
use config::ConfigError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced to the person at the terminal
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("{0}")]
    Failed(&'static str, #[source] CatalogError),

    #[error("Please log in first.")]
    NotLoggedIn,

    #[error("{0}")]
    Usage(String),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Find a dog to adopt from the command line")]
pub struct Cli {
    /// Configuration file to use instead of config/default.toml
    #[arg(long, global = true, env = "PAWS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with a name and email
    Login(auth::LoginArgs),
    /// End the session
    Logout,
    /// Show who is logged in and whether the session is still valid
    Status,
    /// List dog breeds
    Breeds(search::BreedsArgs),
    /// Search the dog catalog
    Search(search::SearchArgs),
    /// Add or remove dogs from favorites
    Favorite(search::FavoriteArgs),
    /// List favorite dogs
    Favorites,
    /// Generate a match from favorites
    Match(matches::MatchArgs),
    /// Look up locations by zip code or radius
    Locations(locations::LocationsArgs),
}

impl Command {
    fn requires_session(&self) -> bool {
        !matches!(self, Command::Login(_) | Command::Logout | Command::Status)
    }
}

/// Clients and stores shared by all commands
pub struct AppState {
    pub settings: Settings,
    pub auth: AuthClient,
    pub catalog: CatalogClient,
    /// Survives logout
    pub durable: JsonFileStore,
    /// Cleared at logout
    pub session: JsonFileStore,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> Result<Self, CommandError> {
        let api = ApiClient::new(
            settings.api.base_url.clone(),
            Duration::from_secs(settings.api.timeout_secs),
        );

        let durable = JsonFileStore::open(settings.storage.durable_path()?)?;
        let session = JsonFileStore::open(settings.storage.session_path()?)?;

        session::restore_cookies(&api, &session);

        Ok(Self {
            auth: AuthClient::new(api.clone()),
            catalog: CatalogClient::new(api),
            settings,
            durable,
            session,
        })
    }

    /// The session gate for protected commands
    ///
    /// Returns the stored user context, which may be absent when the service
    /// accepts the cookies but no login was recorded locally.
    pub async fn require_session(&mut self) -> Result<Option<SessionContext>, CommandError> {
        if !session::check_existing_session(&self.auth, &mut self.session).await {
            return Err(CommandError::NotLoggedIn);
        }

        Ok(SessionContext::restore(&self.session))
    }

    pub fn page_size(&self) -> u32 {
        self.settings.search.page_size.max(1)
    }
}

/// Run one command against the application state
pub async fn dispatch(state: &mut AppState, command: Command) -> Result<(), CommandError> {
    let context = if command.requires_session() {
        state.require_session().await?
    } else {
        None
    };

    let result = match command {
        Command::Login(args) => auth::login(state, args).await,
        Command::Logout => auth::logout(state).await,
        Command::Status => auth::status(state).await,
        Command::Breeds(args) => search::breeds(state, args).await,
        Command::Search(args) => search::search(state, context.as_ref(), args).await,
        Command::Favorite(args) => search::favorite(state, context.as_ref(), args).await,
        Command::Favorites => search::favorites(state, context.as_ref()).await,
        Command::Match(args) => matches::run(state, context.as_ref(), args).await,
        Command::Locations(args) => locations::run(state, args).await,
    };

    // Keep whatever cookies the service refreshed, unless we just logged out
    if session::is_flagged(&state.session) {
        if let Err(e) = session::persist_cookies(state.auth.api(), &mut state.session) {
            tracing::warn!("Failed to save session cookies: {}", e);
        }
    }

    result
}
