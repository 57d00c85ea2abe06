use crate::models::{BoundingBox, Coordinates, Location};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
#[inline]
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Bounding box of roughly `radius_km` around a center point
///
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
pub fn bounding_box_around(center: Coordinates, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;
    let lon_delta = radius_km / (111.0 * center.lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: center.lat - lat_delta,
        max_lat: center.lat + lat_delta,
        min_lon: center.lon - lon_delta,
        max_lon: center.lon + lon_delta,
    }
}

/// Keep locations within `radius_km` of `center`, nearest first
///
/// The service filters by box; this trims the corners and orders the rest.
pub fn nearest_within(
    center: Coordinates,
    radius_km: f64,
    locations: Vec<Location>,
) -> Vec<(Location, f64)> {
    let mut within: Vec<(Location, f64)> = locations
        .into_iter()
        .map(|loc| {
            let distance = haversine_distance(
                center,
                Coordinates { lat: loc.latitude, lon: loc.longitude },
            );
            (loc, distance)
        })
        .filter(|(_, distance)| *distance <= radius_km)
        .collect();

    within.sort_by(|a, b| a.1.total_cmp(&b.1));
    within
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinates = Coordinates { lat: 40.7128, lon: -74.0060 };

    fn location(zip: &str, lat: f64, lon: f64) -> Location {
        Location {
            zip_code: zip.to_string(),
            latitude: lat,
            longitude: lon,
            city: "Test".to_string(),
            state: "NY".to_string(),
            county: "Test".to_string(),
        }
    }

    #[test]
    fn test_haversine_distance() {
        // London to Paris is approximately 344 km
        let london = Coordinates { lat: 51.5074, lon: -0.1278 };
        let paris = Coordinates { lat: 48.8566, lon: 2.3522 };

        let distance = haversine_distance(london, paris);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_bounding_box() {
        let bbox = bounding_box_around(NYC, 10.0);

        assert!(bbox.min_lat < NYC.lat && bbox.max_lat > NYC.lat);
        assert!(bbox.min_lon < NYC.lon && bbox.max_lon > NYC.lon);

        let lat_span = bbox.max_lat - bbox.min_lat;
        assert!((lat_span - 0.18).abs() < 0.02, "Lat span should be ~0.18 degrees");
    }

    #[test]
    fn test_nearest_within_orders_and_trims() {
        let locations = vec![
            location("far", 41.5, -74.0),
            location("near", 40.72, -74.01),
            location("here", 40.7128, -74.0060),
        ];

        let result = nearest_within(NYC, 20.0, locations);
        let zips: Vec<&str> = result.iter().map(|(l, _)| l.zip_code.as_str()).collect();

        assert_eq!(zips, vec!["here", "near"]);
    }
}
