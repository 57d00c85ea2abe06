//! Paws Match - client for the dog adoption matching service
//!
//! This library wraps the adoption service's REST API (login, dog search,
//! match generation, locations) and the client-side logic around it:
//! favorites, pagination, session context and repeat-avoiding matches.

pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    paginate, select_match, toggle_favorite, MatchOrchestrator, MatchTracker, Pagination,
    SessionContext,
};
pub use models::{Dog, Location, SearchQuery, SearchResponse, SortOrder};
pub use services::{ApiClient, AuthClient, CatalogClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let page = paginate(1, 12, 12);
        assert_eq!(page.total_pages, 1);
        assert_eq!(toggle_favorite(&[], "d1"), vec!["d1".to_string()]);
    }
}
