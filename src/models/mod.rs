// Model exports
pub mod domain;
pub mod geo;
pub mod requests;
pub mod responses;

pub use domain::{CaseId, CaseRecord, CaseStatus, MissingPerson, NearbyCase};
pub use self::geo::{GeoError, GeoPoint, Located};
pub use requests::{CaseListQuery, NearbyQuery};
pub use responses::{CaseListResponse, ErrorResponse, HealthResponse, NearbyResponse};
