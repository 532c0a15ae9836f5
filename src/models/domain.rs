use chrono::NaiveDate;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::geo::{GeoError, GeoPoint, Located};

/// Lifecycle state of a missing-person case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    #[default]
    #[serde(rename = "Open", alias = "open", alias = "MISSING", alias = "missing")]
    Open,
    #[serde(
        rename = "Under Investigation",
        alias = "under_investigation",
        alias = "UNDER_INVESTIGATION"
    )]
    UnderInvestigation,
    #[serde(rename = "Closed", alias = "closed", alias = "FOUND", alias = "found")]
    Closed,
    #[serde(rename = "Deceased", alias = "deceased", alias = "DECEASED")]
    Deceased,
}

/// Case identifier as the source sent it, numeric or text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseId {
    Number(u64),
    Text(String),
}

impl From<u64> for CaseId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for CaseId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A case as delivered by a case source, before any validation
///
/// The backend reports the last known position as two (possibly stringly
/// typed) fields, while seed data uses a `[lat, lon]` pair. Anything not
/// modelled here is kept in `details` untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    #[serde(default)]
    pub case_number: Option<String>,
    pub name: String,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default, alias = "lastSeen", deserialize_with = "lenient_date")]
    pub last_seen_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub last_known_latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub last_known_longitude: Option<f64>,
    #[serde(default)]
    pub location: Option<[f64; 2]>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A case with a validated last known location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingPerson {
    pub id: CaseId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    pub name: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_date: Option<NaiveDate>,
    pub location: GeoPoint,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl TryFrom<CaseRecord> for MissingPerson {
    type Error = GeoError;

    fn try_from(record: CaseRecord) -> Result<Self, Self::Error> {
        let (latitude, longitude) = match (
            record.last_known_latitude,
            record.last_known_longitude,
            record.location,
        ) {
            (Some(lat), Some(lon), _) => (lat, lon),
            (_, _, Some([lat, lon])) => (lat, lon),
            _ => return Err(GeoError::MissingLocation(record.id.to_string())),
        };

        Ok(Self {
            id: record.id,
            case_number: record.case_number,
            name: record.name,
            status: record.status,
            last_seen_date: record.last_seen_date,
            location: GeoPoint::new(latitude, longitude)?,
            details: record.details,
        })
    }
}

impl Located for MissingPerson {
    #[inline]
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// A case returned from a proximity search
#[derive(Debug, Clone, Serialize)]
pub struct NearbyCase {
    #[serde(flatten)]
    pub case: MissingPerson,
    pub distance_km: f64,
}

/// Accepts `28.61`, `"28.61"`, `""` and `null`
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Option::<Coordinate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Coordinate::Number(value)) => Ok(Some(value)),
        Some(Coordinate::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Coordinate::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid coordinate {:?}: {}", text, e))),
    }
}

/// Accepts plain dates as well as full RFC 3339 timestamps
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(date) = NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
        return Ok(Some(date));
    }

    chrono::DateTime::parse_from_rfc3339(&text)
        .map(|ts| Some(ts.date_naive()))
        .map_err(|e| de::Error::custom(format!("invalid date {:?}: {}", text, e)))
}
