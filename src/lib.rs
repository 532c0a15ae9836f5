//! Nearby Cases - proximity search for missing-person case reports
//!
//! The heart of the crate is a great-circle distance function and a stable
//! radius filter over anything with a location. Around it sit the case model,
//! case sources (seed file or remote backend) and a small HTTP service that
//! answers "which cases are near this point".

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{distance_km, within_radius, ProximityFilter};
pub use models::{GeoError, GeoPoint, Located, MissingPerson, NearbyCase};
