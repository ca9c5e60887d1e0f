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

use crate::conflict::Conflict;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonConflict {
    platform_id: String,
    time: String,
    trip_ids: Vec<String>,
    line_ids: Vec<String>,
    required_length: f64,
    available_length: f64,
    excess_length: f64,
}

pub fn conflicts_to_json(conflicts: &[Conflict]) -> serde_json::Value {
    let json_conflicts: Vec<JsonConflict> = conflicts
        .iter()
        .map(|c| JsonConflict {
            platform_id: c.platform_id().to_string(),
            time: c.time().to_string(),
            trip_ids: c.trip_ids().iter().map(|t| t.to_string()).collect(),
            line_ids: c.line_ids().iter().map(|l| l.to_string()).collect(),
            required_length: c.required_length().in_meter(),
            available_length: c.available_length().in_meter(),
            excess_length: c.excess_length().in_meter(),
        })
        .collect();
    serde_json::json!(json_conflicts)
}

pub fn write_conflicts_to_json(conflicts: &[Conflict], path: &str) -> Result<(), std::io::Error> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &conflicts_to_json(conflicts))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect_conflicts;
    use model::config::{Config, ConflictMode};
    use model::sample_data::sample_visits;

    #[test]
    fn grouped_sample_as_json() {
        let config = Config::default().with_mode(ConflictMode::Grouped);
        let conflicts = detect_conflicts(&sample_visits(), &config).unwrap();
        assert_eq!(
            conflicts_to_json(&conflicts),
            serde_json::json!([
                {
                    "platformId": "A",
                    "time": "08:00",
                    "tripIds": ["F001", "F002", "F003"],
                    "lineIds": ["1", "1", "2"],
                    "requiredLength": 42.0,
                    "availableLength": 25.0,
                    "excessLength": 17.0,
                },
                {
                    "platformId": "A",
                    "time": "08:30",
                    "tripIds": ["F005", "F006"],
                    "lineIds": ["3", "3"],
                    "requiredLength": 30.0,
                    "availableLength": 25.0,
                    "excessLength": 5.0,
                },
            ])
        );
    }
}
