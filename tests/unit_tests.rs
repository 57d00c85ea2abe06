// Unit tests for Paws Match

use paws_match::core::{
    filter_breeds,
    geo::{bounding_box_around, haversine_distance},
    page_slice, paginate, select_match, toggle_favorite, MatchTracker,
};
use paws_match::core::validation::{is_valid_email, is_valid_name, sanitize_input};
use paws_match::models::{Coordinates, SearchQuery, SearchResponse};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_paginate_documented_examples() {
    let p = paginate(1, 100, 10);
    assert_eq!(p.visible_pages, vec![1, 2, 3, 4, 5]);
    assert_eq!((p.start_item, p.end_item), (1, 10));

    let p = paginate(10, 100, 10);
    assert_eq!(p.visible_pages, vec![6, 7, 8, 9, 10]);
    assert_eq!((p.start_item, p.end_item), (91, 100));

    let p = paginate(6, 55, 10);
    assert_eq!(p.total_pages, 6);
    assert_eq!((p.start_item, p.end_item), (51, 55));
}

#[test]
fn test_paginate_invariants_hold_across_inputs() {
    for total_items in 0..=60u64 {
        for per_page in 1..=12u64 {
            let total_pages = (total_items + per_page - 1) / per_page;

            for current in 1..=total_pages.max(1) {
                let p = paginate(current, total_items, per_page);

                assert_eq!(p.total_pages, total_pages);
                assert_eq!(p.visible_pages.len() as u64, total_pages.min(5));
                assert_eq!(p.has_next, current < total_pages);
                assert_eq!(p.has_prev, current > 1);

                if total_pages > 0 {
                    assert!(
                        p.visible_pages.contains(&current),
                        "page {} missing from {:?}",
                        current,
                        p.visible_pages
                    );
                    assert!(*p.visible_pages.first().unwrap() >= 1);
                    assert!(*p.visible_pages.last().unwrap() <= total_pages);
                    assert!(p.start_item <= p.end_item);
                    assert!(p.end_item <= total_items);
                }

                // Window entries are consecutive
                for pair in p.visible_pages.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
            }
        }
    }
}

#[test]
fn test_paginate_zero_items() {
    let p = paginate(1, 0, 10);

    assert_eq!(p.total_pages, 0);
    assert!(p.visible_pages.is_empty());
    assert_eq!(p.end_item, 0);
}

#[test]
fn test_toggle_favorite_contract() {
    assert_eq!(toggle_favorite(&[], "d1"), ids(&["d1"]));
    assert_eq!(toggle_favorite(&ids(&["d1", "d2"]), "d1"), ids(&["d2"]));

    // Toggling twice restores the original set
    let start = ids(&["d1", "d2", "d3"]);
    let once = toggle_favorite(&start, "d4");
    assert_eq!(toggle_favorite(&once, "d4"), start);
}

#[test]
fn test_select_match_cycles_through_favorites() {
    let favorites = ids(&["a", "b", "c"]);
    let mut tracker = MatchTracker::new();

    let first = select_match(&favorites, "a", &tracker);
    assert_eq!(first.chosen, "a");
    tracker = first.tracker;

    let second = select_match(&favorites, "a", &tracker);
    assert_ne!(second.chosen, "a");
    assert_eq!(second.chosen, "b");
    assert!(second.substituted);
    tracker = second.tracker;

    let third = select_match(&favorites, "a", &tracker);
    assert_eq!(third.chosen, "c");
    tracker = third.tracker;
    assert!(tracker.covers(&favorites));

    let fourth = select_match(&favorites, "a", &tracker);
    assert_eq!(fourth.chosen, "a");
    assert!(!fourth.substituted);
}

#[test]
fn test_select_match_accepts_new_server_choice() {
    let favorites = ids(&["a", "b", "c"]);
    let first = select_match(&favorites, "a", &MatchTracker::new());
    let second = select_match(&favorites, "c", &first.tracker);

    assert_eq!(second.chosen, "c");
    assert!(!second.substituted);
    assert_eq!(second.tracker.shown_count(), 2);
}

#[test]
fn test_page_slice_for_favorites_view() {
    let favorites = ids(&["a", "b", "c", "d", "e"]);

    assert_eq!(page_slice(&favorites, 1, 2), &favorites[0..2]);
    assert_eq!(page_slice(&favorites, 3, 2), &favorites[4..5]);
    assert!(page_slice(&favorites, 9, 2).is_empty());
}

#[test]
fn test_search_query_omits_empty_filters() {
    let query = SearchQuery::default();
    let encoded = query.to_query_string();

    assert!(!encoded.contains("breeds"));
    assert!(!encoded.contains("zipCodes"));
    assert!(encoded.contains("sort=breed%3Aasc"));
}

#[test]
fn test_search_response_parses_optional_cursor() {
    let response: SearchResponse =
        serde_json::from_str(r#"{"resultIds":["x"],"total":1}"#).unwrap();

    assert_eq!(response.result_ids, ids(&["x"]));
    assert_eq!(response.next, None);
}

#[test]
fn test_breed_filter() {
    let breeds = ids(&["Beagle", "Bernese Mountain Dog", "Boxer"]);
    assert_eq!(filter_breeds(&breeds, "be").len(), 2);
    assert!(filter_breeds(&breeds, "poodle").is_empty());
}

#[test]
fn test_validation_helpers() {
    assert!(is_valid_email("user@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(is_valid_name("Al", 2));
    assert_eq!(sanitize_input(" <Rex> "), "Rex");
}

#[test]
fn test_radius_box_contains_center() {
    let center = Coordinates { lat: 40.7128, lon: -74.0060 };
    let bbox = bounding_box_around(center, 25.0);

    assert!(bbox.min_lat < center.lat && center.lat < bbox.max_lat);
    assert!(bbox.min_lon < center.lon && center.lon < bbox.max_lon);

    // The box corner lies beyond the radius
    let corner = Coordinates { lat: bbox.max_lat, lon: bbox.max_lon };
    assert!(haversine_distance(center, corner) > 25.0);
}
