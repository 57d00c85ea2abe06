use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{BoundingBox, SortOrder};

/// Dog search parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub breeds: Vec<String>,
    #[serde(default, rename = "zipCodes")]
    pub zip_codes: Vec<String>,
    #[serde(rename = "ageMin")]
    pub age_min: Option<u32>,
    #[serde(rename = "ageMax")]
    pub age_max: Option<u32>,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default)]
    pub from: u32,
}

pub fn default_page_size() -> u32 {
    12
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            breeds: Vec::new(),
            zip_codes: Vec::new(),
            age_min: None,
            age_max: None,
            sort: SortOrder::default(),
            size: default_page_size(),
            from: 0,
        }
    }
}

impl SearchQuery {
    /// Encode as a query string, without the leading `?`
    ///
    /// Breed and zip filters are repeated keys; empty lists are left out.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        for breed in &self.breeds {
            pairs.push(("breeds", breed.clone()));
        }
        for zip in &self.zip_codes {
            pairs.push(("zipCodes", zip.clone()));
        }
        if let Some(min) = self.age_min {
            pairs.push(("ageMin", min.to_string()));
        }
        if let Some(max) = self.age_max {
            pairs.push(("ageMax", max.to_string()));
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        if self.size > 0 {
            pairs.push(("size", self.size.to_string()));
        }
        pairs.push(("from", self.from.to_string()));

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Login body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// Location search filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(rename = "geoBoundingBox", skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        let query = SearchQuery::default();
        assert_eq!(query.to_query_string(), "sort=breed%3Aasc&size=12&from=0");
    }

    #[test]
    fn test_query_string_repeats_breeds() {
        let query = SearchQuery {
            breeds: vec!["Golden Retriever".to_string(), "Beagle".to_string()],
            zip_codes: vec!["10001".to_string()],
            age_min: Some(2),
            sort: SortOrder::BreedDesc,
            size: 25,
            from: 50,
            ..Default::default()
        };

        assert_eq!(
            query.to_query_string(),
            "breeds=Golden%20Retriever&breeds=Beagle&zipCodes=10001&ageMin=2&sort=breed%3Adesc&size=25&from=50"
        );
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest { name: "Jo".to_string(), email: "jo@example.com".to_string() };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest { name: "J".to_string(), email: "not-an-email".to_string() };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_location_search_skips_empty_fields() {
        let request = LocationSearchRequest {
            states: Some(vec!["NY".to_string()]),
            size: Some(10),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"states": ["NY"], "size": 10}));
    }
}
