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

use serde::{Deserialize, Serialize};

use crate::base_types::Length;
use crate::config::Config;
use crate::error::ModelError;
use crate::time::ScheduledTime;
use crate::visits::{Visit, Visits};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVisit {
    line_id: String,
    trip_id: String,
    stop_name: String,
    platform_id: String,
    arrival: String,
    departure: String,
    vehicle_length: f64,
    platform_capacity: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    #[serde(default)]
    config: Option<serde_json::Value>,
    visits: Vec<JsonVisit>,
}

/// Reads an instance `{"config": {...}, "visits": [...]}`. The config is optional; if it is
/// absent `None` is returned so that the caller can fall back to its own configuration.
pub fn load_conflict_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(Visits, Option<Config>), ModelError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;
    let config = match json_input.config {
        Some(value) => Some(Config::from_json(value)?),
        None => None,
    };
    let visits = create_visits(json_input.visits)?;
    Ok((visits, config))
}

fn create_visits(json_visits: Vec<JsonVisit>) -> Result<Visits, ModelError> {
    json_visits
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            for (column, value) in [
                ("vehicle_length", v.vehicle_length),
                ("platform_capacity", v.platform_capacity),
            ] {
                if !(value > 0.0 && value.is_finite()) {
                    return Err(ModelError::NonPositiveLength {
                        row: i + 1,
                        column: String::from(column),
                        value,
                    });
                }
            }
            Ok(Visit::new(
                v.line_id.into(),
                v.trip_id.into(),
                v.stop_name.into(),
                v.platform_id.into(),
                ScheduledTime::new(&v.arrival),
                ScheduledTime::new(&v.departure),
                Length::from_meter(v.vehicle_length),
                Length::from_meter(v.platform_capacity),
            ))
        })
        .collect::<Result<Vec<Visit>, ModelError>>()
        .map(Visits::new)
}

/// Inverse of the visit part of [`load_conflict_instance_from_json`].
pub fn visits_to_json(visits: &Visits) -> serde_json::Value {
    let json_visits: Vec<JsonVisit> = visits
        .iter()
        .map(|(_, v)| JsonVisit {
            line_id: v.line_id().to_string(),
            trip_id: v.trip_id().to_string(),
            stop_name: v.stop_name().to_string(),
            platform_id: v.platform_id().to_string(),
            arrival: v.arrival().text().to_string(),
            departure: v.departure().text().to_string(),
            vehicle_length: v.vehicle_length().in_meter(),
            platform_capacity: v.platform_capacity().in_meter(),
        })
        .collect();
    serde_json::json!({ "visits": json_visits })
}

#[cfg(test)]
#[path = "json_serialisation/tests.rs"]
mod tests;
