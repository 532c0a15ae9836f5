// Unit tests for Nearby Cases

use nearby_cases::core::{
    distance::{distance_km, haversine_distance, EARTH_RADIUS_KM},
    proximity::{within_radius, ProximityFilter},
};
use nearby_cases::models::{CaseId, CaseRecord, GeoPoint, Located, MissingPerson};

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).unwrap()
}

fn case(id: u64, name: &str, lat: f64, lon: f64) -> MissingPerson {
    let record: CaseRecord = serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("Case {}", id),
        "location": [lat, lon],
    }))
    .unwrap();

    MissingPerson::try_from(record).unwrap()
}

fn delhi() -> GeoPoint {
    point(28.6139, 77.2090)
}

#[test]
fn test_distance_identity() {
    for p in [delhi(), point(0.0, 0.0), point(-90.0, 180.0), point(51.5074, -0.1278)] {
        assert_eq!(distance_km(p, p), 0.0);
    }
}

#[test]
fn test_distance_symmetry() {
    let pairs = [
        (delhi(), point(28.7041, 77.1025)),
        (point(40.7128, -74.0060), point(34.0522, -118.2437)),
        (point(-33.8688, 151.2093), point(51.5074, -0.1278)),
        (point(0.0, 179.9), point(0.0, -179.9)),
    ];

    for (a, b) in pairs {
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);
        assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
    }
}

#[test]
fn test_distance_delhi_reference() {
    let distance = distance_km(delhi(), point(28.7041, 77.1025));
    assert!(distance >= 12.0 && distance <= 15.0, "Expected ~13km, got {}", distance);
}

#[test]
fn test_distance_antipodal_is_stable() {
    let distance = distance_km(point(0.0, 0.0), point(0.0, 180.0));

    assert!(!distance.is_nan());
    assert!((distance - 20015.1).abs() < 0.1, "Expected ~20015.1km, got {}", distance);
    assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
}

#[test]
fn test_distance_pole_to_pole() {
    let distance = distance_km(point(90.0, 0.0), point(-90.0, 0.0));
    assert!((distance - 20015.1).abs() < 0.1);
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let distance = haversine_distance(40.7580, -73.9855, 40.6782, -73.9442);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_filter_preserves_order() {
    let cases = vec![
        case(1, "inside-a", 28.6129, 77.2295),
        case(2, "outside", 19.0760, 72.8777),
        case(3, "inside-b", 28.6100, 77.2000),
    ];

    let hits = within_radius(&cases, delhi(), 10.0);

    let ids: Vec<CaseId> = hits.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![CaseId::from(1), CaseId::from(3)]);
}

#[test]
fn test_filter_boundary_is_inclusive() {
    let cases = vec![case(1, "edge", 28.7041, 77.1025)];
    let radius = distance_km(delhi(), cases[0].location());

    let hits = within_radius(&cases, delhi(), radius);

    assert_eq!(hits.len(), 1);
}

#[test]
fn test_filter_empty_input() {
    let cases: Vec<MissingPerson> = vec![];
    assert!(within_radius(&cases, delhi(), 10.0).is_empty());
}

#[test]
fn test_filter_no_matches_is_empty() {
    let cases = vec![case(1, "mumbai", 19.0760, 72.8777)];
    assert!(within_radius(&cases, delhi(), 10.0).is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let cases = vec![
        case(1, "a", 28.6129, 77.2295),
        case(2, "b", 19.0760, 72.8777),
        case(3, "c", 28.6100, 77.2000),
    ];
    let before = cases.clone();

    let hits = within_radius(&cases, delhi(), 10.0);

    // hits borrow straight from the input
    assert!(std::ptr::eq(hits[0], &cases[0]));
    assert!(std::ptr::eq(hits[1], &cases[2]));
    assert_eq!(cases, before);
}

#[test]
fn test_filter_end_to_end_delhi() {
    let cases = vec![
        case(1, "Jane Smith", 28.6129, 77.2295),
        case(2, "Mike Johnson", 28.6100, 77.2000),
        case(3, "Priya Nair", 19.0760, 72.8777),
    ];

    let hits = within_radius(&cases, delhi(), 10.0);

    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Smith", "Mike Johnson"]);
}

#[test]
fn test_configured_search_uses_default_radius() {
    let cases = vec![
        case(1, "near", 28.6129, 77.2295),
        case(2, "fourteen km", 28.7041, 77.1025),
    ];

    let filter = ProximityFilter::default();
    let default = filter.search(&cases, delhi(), None).unwrap();
    let wide = filter.search(&cases, delhi(), Some(20.0)).unwrap();

    assert_eq!(default.radius_km, 10.0);
    assert_eq!(default.matches.len(), 1);
    assert_eq!(wide.matches.len(), 2);
    assert!(wide.matches[1].distance_km > 12.0);
}

#[test]
fn test_configured_search_rejects_negative_radius() {
    let cases = vec![case(1, "near", 28.6129, 77.2295)];
    assert!(ProximityFilter::default().search(&cases, delhi(), Some(-5.0)).is_err());
}
