use crate::models::Dog;
use crate::services::{CatalogClient, CatalogError};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Please select at least one dog.")]
    NoFavorites,

    #[error("No match found, try different dogs.")]
    NotFound,

    #[error("An error occurred while generating your match.")]
    Failed(#[source] CatalogError),
}

/// Ids already shown as a match during this process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTracker {
    shown: HashSet<String>,
}

impl MatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shown.contains(id)
    }

    /// Every favorite has been shown at least once
    pub fn covers(&self, favorites: &[String]) -> bool {
        !favorites.is_empty() && favorites.iter().all(|f| self.shown.contains(f))
    }

    fn record(&mut self, id: &str) {
        self.shown.insert(id.to_string());
    }
}

/// Outcome of [`select_match`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSelection {
    pub chosen: String,
    /// The service repeated an earlier match and a local pick replaced it
    pub substituted: bool,
    pub tracker: MatchTracker,
}

/// Decide which favorite to show given the id the service returned
///
/// Tracking is reset in exactly one place: when the incoming tracker already
/// covers every favorite, it starts over empty. A repeat is then replaced by
/// the first favorite not yet shown.
pub fn select_match(
    favorites: &[String],
    returned: &str,
    tracker: &MatchTracker,
) -> MatchSelection {
    let mut next = tracker.clone();
    if next.covers(favorites) {
        next.shown.clear();
    }

    if !next.contains(returned) {
        next.record(returned);
        return MatchSelection {
            chosen: returned.to_string(),
            substituted: false,
            tracker: next,
        };
    }

    match favorites.iter().find(|f| !next.contains(f)) {
        Some(alternative) => {
            let chosen = alternative.clone();
            next.record(&chosen);
            MatchSelection {
                chosen,
                substituted: true,
                tracker: next,
            }
        }
        None => {
            // Only reachable when the tracker holds ids outside `favorites`
            let mut fresh = MatchTracker::new();
            fresh.record(returned);
            MatchSelection {
                chosen: returned.to_string(),
                substituted: false,
                tracker: fresh,
            }
        }
    }
}

/// A match ready to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedDog {
    pub dog: Dog,
    /// How many distinct favorites have been shown so far
    pub shown: usize,
    pub total_favorites: usize,
    pub substituted: bool,
}

/// Generates matches while avoiding immediate repeats
#[derive(Debug, Clone, Default)]
pub struct MatchOrchestrator {
    tracker: MatchTracker,
}

impl MatchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracker(&self) -> &MatchTracker {
        &self.tracker
    }

    /// Ask the service for a match and resolve it to a full dog record
    ///
    /// Tracking only advances once the record has been fetched, so a failed
    /// attempt leaves no trace.
    pub async fn next_match(
        &mut self,
        catalog: &CatalogClient,
        favorites: &[String],
    ) -> Result<MatchedDog, MatchError> {
        if favorites.is_empty() {
            return Err(MatchError::NoFavorites);
        }

        let response = catalog.generate_match(favorites).await.map_err(|e| {
            tracing::error!("Match generation error: {}", e);
            MatchError::Failed(e)
        })?;

        if response.matched.is_empty() {
            return Err(MatchError::NotFound);
        }

        let selection = select_match(favorites, &response.matched, &self.tracker);
        if selection.substituted {
            tracing::info!(
                "Service repeated match {}, showing {} instead",
                response.matched,
                selection.chosen
            );
        }

        let dogs = catalog
            .dog_details(std::slice::from_ref(&selection.chosen))
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch matched dog {}: {}", selection.chosen, e);
                MatchError::Failed(e)
            })?;

        let dog = dogs
            .into_iter()
            .find(|d| d.id == selection.chosen)
            .ok_or(MatchError::NotFound)?;

        self.tracker = selection.tracker;

        Ok(MatchedDog {
            dog,
            shown: self.tracker.shown_count(),
            total_favorites: favorites.len(),
            substituted: selection.substituted,
        })
    }
}
