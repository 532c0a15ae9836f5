// Core algorithm exports
pub mod distance;
pub mod proximity;

pub use distance::{bounding_box, distance_km, haversine_distance, BoundingBox, EARTH_RADIUS_KM};
pub use proximity::{
    nearby, within_radius, Nearby, ProximityFilter, SearchResult, DEFAULT_MAX_RADIUS_KM,
    DEFAULT_RADIUS_KM,
};
