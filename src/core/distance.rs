use std::f64::consts::FRAC_PI_2;

use crate::models::GeoPoint;

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack added to bounding boxes so points sitting exactly on the search
/// circle survive floating-point rounding in the pre-filter
const BBOX_PADDING_DEG: f64 = 1e-9;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers. Non-finite input yields NaN rather than a panic.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2.to_radians() - lon1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two validated points in kilometers
#[inline]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_distance(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

/// Geospatial bounding box
///
/// When `min_lon > max_lon` the box wraps across the ±180° meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    #[inline]
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Check if a point is within the box
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        let lat = point.latitude();
        let lon = point.longitude();

        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }

        if self.crosses_antimeridian() {
            lon >= self.min_lon || lon <= self.max_lon
        } else {
            lon >= self.min_lon && lon <= self.max_lon
        }
    }
}

/// Calculate the bounding box of a search circle
///
/// Much cheaper than Haversine, so it is used to discard far-away candidates
/// first. The box is the exact spherical bound of the circle: every point
/// with `distance_km(center, p) <= radius_km` is inside it. Circles reaching
/// a pole cover every longitude.
pub fn bounding_box(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let angular = radius_km.max(0.0) / EARTH_RADIUS_KM;
    let lat = center.latitude();
    let lon = center.longitude();

    let lat_delta = angular.to_degrees() + BBOX_PADDING_DEG;
    let min_lat = lat - lat_delta;
    let max_lat = lat + lat_delta;

    if min_lat <= -90.0 || max_lat >= 90.0 || angular >= FRAC_PI_2 {
        return BoundingBox {
            min_lat: min_lat.max(-90.0),
            max_lat: max_lat.min(90.0),
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let ratio = (angular.sin() / lat.to_radians().cos()).min(1.0);
    let lon_delta = ratio.asin().to_degrees() + BBOX_PADDING_DEG;

    if lon_delta >= 180.0 {
        return BoundingBox { min_lat, max_lat, min_lon: -180.0, max_lon: 180.0 };
    }

    let mut min_lon = lon - lon_delta;
    let mut max_lon = lon + lon_delta;
    if min_lon < -180.0 {
        min_lon += 360.0;
    }
    if max_lon > 180.0 {
        max_lon -= 360.0;
    }

    BoundingBox { min_lat, max_lat, min_lon, max_lon }
}
