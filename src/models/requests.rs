use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::CaseStatus;
use crate::models::geo::{GeoError, GeoPoint};

/// Query for cases around a point
///
/// `radius` is optional; the configured default applies when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "radius_km")]
    pub radius: Option<f64>,
}

impl NearbyQuery {
    /// Search center; also rejects NaN, which range validation lets through
    pub fn center(&self) -> Result<GeoPoint, GeoError> {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Query for the case listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseListQuery {
    #[serde(default)]
    pub status: Option<CaseStatus>,
}
