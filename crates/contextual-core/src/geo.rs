//! Circular geofence model: zones and their points of interest.
//!
//! All containment is great-circle distance against a radius, inclusive
//! at the boundary. Coordinates are plain WGS84 degrees; degenerate
//! inputs (NaN, out-of-range) are the caller's responsibility.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate (haversine).
    pub fn distance_meters(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin()
                * (d_lon / 2.0).sin();

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }
}

/// What a point of interest is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PoiKind {
    Arrival,
    Coffee,
    Drop,
    Custom,
}

/// A circular sub-region within a zone tied to a physical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub radius_meters: f64,
    pub kind: PoiKind,
    /// Free-form tags; `floorBand` is the one the engine reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<std::collections::HashMap<String, String>>,
}

impl PointOfInterest {
    /// True iff the point is within `radius_meters` of the center
    /// (boundary inclusive).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let location = Coordinate::new(latitude, longitude);
        self.coordinate.distance_meters(&location) <= self.radius_meters
    }
}

/// A circular geofence containing an ordered list of POIs.
///
/// POIs may overlap; only id uniqueness within the zone is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub display_name: String,
    pub center: Coordinate,
    pub radius_meters: f64,
    pub pois: Vec<PointOfInterest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Zone {
    /// True iff the point is within the zone radius (boundary inclusive).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let location = Coordinate::new(latitude, longitude);
        self.center.distance_meters(&location) <= self.radius_meters
    }

    /// First POI (in catalog order) containing the point. First match
    /// wins even under overlap -- there is no nearest-wins semantics.
    pub fn poi_containing(&self, latitude: f64, longitude: f64) -> Option<&PointOfInterest> {
        self.pois
            .iter()
            .find(|poi| poi.contains(latitude, longitude))
    }

    /// POI with the minimum distance to the point, optionally bounded
    /// by `max_distance` meters. Ties keep insertion order.
    pub fn nearest_poi(
        &self,
        latitude: f64,
        longitude: f64,
        max_distance: Option<f64>,
    ) -> Option<&PointOfInterest> {
        let location = Coordinate::new(latitude, longitude);
        self.pois
            .iter()
            .map(|poi| (poi, poi.coordinate.distance_meters(&location)))
            .filter(|(_, d)| max_distance.map_or(true, |max| *d <= max))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(poi, _)| poi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn poi(id: &str, lat: f64, lon: f64, radius: f64) -> PointOfInterest {
        PointOfInterest {
            id: id.to_string(),
            name: id.to_string(),
            coordinate: Coordinate::new(lat, lon),
            radius_meters: radius,
            kind: PoiKind::Custom,
            metadata: None,
        }
    }

    fn zone(pois: Vec<PointOfInterest>) -> Zone {
        Zone {
            id: "test-zone".to_string(),
            display_name: "Test Zone".to_string(),
            center: Coordinate::new(37.78975, -122.40055),
            radius_meters: 260.0,
            pois,
            notes: None,
        }
    }

    #[test]
    fn test_distance_known_pair() {
        // Frontier zone center to the coffee POI, roughly 150m apart.
        let a = Coordinate::new(37.78975, -122.40055);
        let b = Coordinate::new(37.79063, -122.40182);
        let d = a.distance_meters(&b);
        assert!(d > 140.0 && d < 160.0, "got {d}");
    }

    #[test]
    fn test_containment_boundary_inclusive() {
        let p = poi("p", 37.78974, -122.40046, 3.0);
        // Center is always inside.
        assert!(p.contains(37.78974, -122.40046));
        // ~2m east is inside, ~5m east is not (1e-5 deg lon ~ 0.88m here).
        assert!(p.contains(37.78974, -122.40044));
        assert!(!p.contains(37.78974, -122.40040));
    }

    #[test]
    fn test_zone_containment() {
        let z = zone(vec![]);
        assert!(z.contains(37.78975, -122.40055));
        // ~1km away.
        assert!(!z.contains(37.79975, -122.40055));
    }

    #[test]
    fn test_poi_containing_first_match_wins() {
        let z = zone(vec![
            poi("wide", 37.78975, -122.40055, 50.0),
            poi("tight", 37.78975, -122.40055, 2.0),
        ]);
        let hit = z.poi_containing(37.78975, -122.40055).unwrap();
        assert_eq!(hit.id, "wide");
    }

    #[test]
    fn test_nearest_poi_respects_bound() {
        let z = zone(vec![
            poi("near", 37.78976, -122.40055, 1.0),
            poi("far", 37.79063, -122.40182, 1.0),
        ]);
        let nearest = z.nearest_poi(37.78975, -122.40055, None).unwrap();
        assert_eq!(nearest.id, "near");
        assert!(z.nearest_poi(37.78975, -122.40055, Some(0.5)).is_none());
        let bounded = z.nearest_poi(37.78975, -122.40055, Some(10.0)).unwrap();
        assert_eq!(bounded.id, "near");
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            lat1 in -80.0f64..80.0, lon1 in -179.0f64..179.0,
            lat2 in -80.0f64..80.0, lon2 in -179.0f64..179.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let ab = a.distance_meters(&b);
            let ba = b.distance_meters(&a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn prop_center_always_contained(
            lat in -80.0f64..80.0, lon in -179.0f64..179.0,
            radius in 0.1f64..1000.0,
        ) {
            let p = PointOfInterest {
                id: "p".to_string(),
                name: "p".to_string(),
                coordinate: Coordinate::new(lat, lon),
                radius_meters: radius,
                kind: PoiKind::Custom,
                metadata: None,
            };
            prop_assert!(p.contains(lat, lon));
        }
    }
}
