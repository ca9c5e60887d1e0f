// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use super::*;
use crate::base_types::{TripId, VisitIdx};
use crate::config::{ConflictMode, TimeParsing};
use crate::error::ConfigError;
use crate::sample_data::sample_visits;

fn visit_json(trip: &str, arrival: &str, departure: &str) -> serde_json::Value {
    serde_json::json!({
        "lineId": "1",
        "tripId": trip,
        "stopName": "Bahnhof",
        "platformId": "A",
        "arrival": arrival,
        "departure": departure,
        "vehicleLength": 12,
        "platformCapacity": 25.0,
    })
}

#[test]
fn load_visits_without_config() {
    let input = serde_json::json!({
        "visits": [visit_json("F001", "08:00", "08:05"), visit_json("F002", "8:01", "8:06")],
    });
    let (visits, config) = load_conflict_instance_from_json(input).unwrap();
    assert!(config.is_none());
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[VisitIdx(1)].trip_id(), &TripId::from("F002"));
    assert_eq!(visits[VisitIdx(1)].arrival_minutes(), 481);
    assert_eq!(visits[VisitIdx(0)].vehicle_length(), Length::from_meter(12.0));
}

#[test]
fn load_visits_with_config() {
    let input = serde_json::json!({
        "config": {"timeBuffer": 4, "mode": "grouped", "timeParsing": "strict"},
        "visits": [],
    });
    let (visits, config) = load_conflict_instance_from_json(input).unwrap();
    let config = config.unwrap();
    assert!(visits.is_empty());
    assert_eq!(config.time_buffer.minutes(), 4);
    assert_eq!(config.mode, ConflictMode::Grouped);
    assert_eq!(config.time_parsing, TimeParsing::Strict);
}

#[test]
fn missing_field_is_rejected() {
    let input = serde_json::json!({
        "visits": [{"lineId": "1", "tripId": "F001", "arrival": "08:00"}],
    });
    assert!(matches!(
        load_conflict_instance_from_json(input),
        Err(ModelError::Json(_))
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let input = serde_json::json!({"config": {"timeBuffer": 11}, "visits": []});
    assert!(matches!(
        load_conflict_instance_from_json(input),
        Err(ModelError::Config(ConfigError::Unreadable(_)))
    ));
}

#[test]
fn negative_length_is_rejected() {
    let mut visit = visit_json("F001", "08:00", "08:05");
    visit["vehicleLength"] = serde_json::json!(-12);
    let input = serde_json::json!({ "visits": [visit] });
    assert!(matches!(
        load_conflict_instance_from_json(input),
        Err(ModelError::NonPositiveLength { row: 1, .. })
    ));
}

#[test]
fn sample_survives_json() {
    let visits = sample_visits();
    let (reloaded, _) = load_conflict_instance_from_json(visits_to_json(&visits)).unwrap();
    assert_eq!(reloaded, visits);
}
