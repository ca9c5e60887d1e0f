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

use detector::json_serialisation::conflicts_to_json;
use detector::ConflictDetector;
use model::config::Config;
use model::json_serialisation::load_conflict_instance_from_json;

use gethostname::gethostname;
use log::info;
use std::time as stdtime;

/// Runs one detection on a json instance. The instance's own `config` wins over
/// `default_config`.
pub fn detect_instance(
    input_data: serde_json::Value,
    default_config: Config,
) -> anyhow::Result<serde_json::Value> {
    let start_time = stdtime::Instant::now();
    let (visits, config) = load_conflict_instance_from_json(input_data)?;
    let config = config.unwrap_or(default_config);
    info!(
        "Instance with {} visits at {} platforms loaded (elapsed time: {:0.2}sec)",
        visits.len(),
        visits.platforms().len(),
        start_time.elapsed().as_secs_f32()
    );

    let conflicts = ConflictDetector::new(config).detect(&visits)?;
    let runtime_duration = start_time.elapsed();
    info!(
        "{} conflicts detected (running time: {:0.2}sec)",
        conflicts.len(),
        runtime_duration.as_secs_f32()
    );

    Ok(serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
            "timestamp(UTC)": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "hostname": gethostname().into_string().unwrap_or("unknown".to_string()),
            "config": config,
        },
        "overview": visits.overview(),
        "conflicts": conflicts_to_json(&conflicts),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::json_serialisation::visits_to_json;
    use model::sample_data::sample_visits;

    #[test]
    fn sample_instance() {
        let output = detect_instance(visits_to_json(&sample_visits()), Config::default()).unwrap();
        assert_eq!(output["overview"]["trips"], 9);
        assert_eq!(output["overview"]["platforms"], 2);
        assert_eq!(output["conflicts"].as_array().unwrap().len(), 5);
        assert_eq!(output["info"]["config"]["timeBuffer"], 2);
    }

    #[test]
    fn instance_config_overrides_default() {
        let mut input = visits_to_json(&sample_visits());
        input["config"] = serde_json::json!({"mode": "grouped"});
        let output = detect_instance(input, Config::default()).unwrap();
        assert_eq!(output["conflicts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn broken_instance_is_an_error() {
        assert!(detect_instance(serde_json::json!({"rows": []}), Config::default()).is_err());
    }
}
