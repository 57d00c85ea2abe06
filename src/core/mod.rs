// Client-side logic exports
pub mod favorites;
pub mod geo;
pub mod matcher;
pub mod pagination;
pub mod session;
pub mod validation;

pub use favorites::{
    favorites_key, load_favorites, save_favorites, toggle_and_save, toggle_favorite,
};
pub use geo::{haversine_distance, bounding_box_around, nearest_within};
pub use matcher::{
    select_match, MatchError, MatchOrchestrator, MatchSelection, MatchTracker, MatchedDog,
};
pub use pagination::{paginate, page_offset, page_slice, Pagination};
pub use session::{SessionContext, SessionError};

/// Case-insensitive substring filter over breed names
pub fn filter_breeds<'a>(breeds: &'a [String], needle: &str) -> Vec<&'a String> {
    let needle = needle.to_lowercase();
    breeds
        .iter()
        .filter(|breed| breed.to_lowercase().contains(&needle))
        .collect()
}
