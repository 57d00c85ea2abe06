use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dog record as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

impl Dog {
    /// "1 year" / "3 years"
    pub fn age_label(&self) -> String {
        if self.age == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", self.age)
        }
    }
}

/// Location record for a zip code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub county: String,
}

/// A point on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Geospatial bounding box
///
/// Serializes to the `{top, left, bottom, right}` shape the location
/// search endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(rename = "bottom")]
    pub min_lat: f64,
    #[serde(rename = "top")]
    pub max_lat: f64,
    #[serde(rename = "left")]
    pub min_lon: f64,
    #[serde(rename = "right")]
    pub max_lon: f64,
}

/// Sort order accepted by the dog search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "breed:asc")]
    BreedAsc,
    #[serde(rename = "breed:desc")]
    BreedDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::BreedAsc => "breed:asc",
            SortOrder::BreedDesc => "breed:desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breed:asc" | "asc" => Ok(SortOrder::BreedAsc),
            "breed:desc" | "desc" => Ok(SortOrder::BreedDesc),
            other => Err(format!(
                "unknown sort order '{}', expected breed:asc or breed:desc",
                other
            )),
        }
    }
}
