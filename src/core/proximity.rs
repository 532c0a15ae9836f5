use crate::core::distance::{bounding_box, distance_km};
use crate::models::{GeoError, GeoPoint, Located};

/// Radius used when a caller does not ask for one
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Upper bound on caller-supplied radii
pub const DEFAULT_MAX_RADIUS_KM: f64 = 500.0;

/// An entity selected by a proximity search, with its distance from the center
#[derive(Debug)]
pub struct Nearby<'a, T> {
    pub entity: &'a T,
    pub distance_km: f64,
}

#[inline]
fn measure<T: Located>(entity: &T, center: GeoPoint, radius_km: f64) -> Option<Nearby<'_, T>> {
    let distance_km = distance_km(center, entity.location());
    (distance_km <= radius_km).then_some(Nearby { entity, distance_km })
}

/// Select the entities within `radius_km` of `center`
///
/// The boundary is inclusive and input order is preserved. A negative or NaN
/// radius matches nothing.
pub fn within_radius<T: Located>(entities: &[T], center: GeoPoint, radius_km: f64) -> Vec<&T> {
    entities
        .iter()
        .filter(|entity| distance_km(center, entity.location()) <= radius_km)
        .collect()
}

/// Same selection as [`within_radius`], keeping each hit's distance
pub fn nearby<T: Located>(entities: &[T], center: GeoPoint, radius_km: f64) -> Vec<Nearby<'_, T>> {
    entities
        .iter()
        .filter_map(|entity| measure(entity, center, radius_km))
        .collect()
}

/// Result of a configured proximity search
#[derive(Debug)]
pub struct SearchResult<'a, T> {
    pub matches: Vec<Nearby<'a, T>>,
    pub radius_km: f64,
    pub total_candidates: usize,
}

/// Proximity search with a default and a maximum radius
///
/// # Pipeline Stages
/// 1. Radius resolution (default, cap, rejection)
/// 2. Bounding box pre-filter
/// 3. Exact Haversine distance check
#[derive(Debug, Clone, Copy)]
pub struct ProximityFilter {
    default_radius_km: f64,
    max_radius_km: f64,
}

impl ProximityFilter {
    pub fn new(default_radius_km: f64, max_radius_km: f64) -> Result<Self, GeoError> {
        for radius in [default_radius_km, max_radius_km] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeoError::InvalidRadius(radius));
            }
        }

        if default_radius_km > max_radius_km {
            return Err(GeoError::InvalidRadius(default_radius_km));
        }

        Ok(Self {
            default_radius_km,
            max_radius_km,
        })
    }

    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }

    pub fn max_radius_km(&self) -> f64 {
        self.max_radius_km
    }

    /// Turn an optional caller radius into the radius to search with
    ///
    /// Missing means the default. Negative or non-finite values are rejected;
    /// anything above the maximum is capped.
    pub fn resolve_radius(&self, requested: Option<f64>) -> Result<f64, GeoError> {
        let Some(radius) = requested else {
            return Ok(self.default_radius_km);
        };

        if !radius.is_finite() || radius < 0.0 {
            return Err(GeoError::InvalidRadius(radius));
        }

        if radius > self.max_radius_km {
            tracing::debug!(
                "Capping requested radius {} km to {} km",
                radius,
                self.max_radius_km
            );
            return Ok(self.max_radius_km);
        }

        Ok(radius)
    }

    /// Find the entities around `center`
    ///
    /// # Arguments
    /// * `entities` - Candidates, typically every case from the case source
    /// * `center` - Where to search from
    /// * `radius_km` - Caller radius, see [`ProximityFilter::resolve_radius`]
    pub fn search<'a, T: Located>(
        &self,
        entities: &'a [T],
        center: GeoPoint,
        radius_km: Option<f64>,
    ) -> Result<SearchResult<'a, T>, GeoError> {
        let radius_km = self.resolve_radius(radius_km)?;
        let bbox = bounding_box(center, radius_km);

        let matches: Vec<Nearby<'a, T>> = entities
            .iter()
            // Stage 2: cheap bounding box check
            .filter(|entity| bbox.contains(entity.location()))
            // Stage 3: exact distance
            .filter_map(|entity| measure(entity, center, radius_km))
            .collect();

        tracing::debug!(
            "Proximity search at ({}, {}) r={} km: {} of {} candidates",
            center.latitude(),
            center.longitude(),
            radius_km,
            matches.len(),
            entities.len()
        );

        Ok(SearchResult {
            matches,
            radius_km,
            total_candidates: entities.len(),
        })
    }
}

impl Default for ProximityFilter {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_RADIUS_KM,
            max_radius_km: DEFAULT_MAX_RADIUS_KM,
        }
    }
}
