// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dog, Location, Coordinates, BoundingBox, SortOrder};
pub use requests::{SearchQuery, LoginRequest, LocationSearchRequest};
pub use responses::{SearchResponse, MatchResponse, LocationSearchResponse};
