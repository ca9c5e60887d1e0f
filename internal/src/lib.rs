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

use std::path::Path;
use std::time as stdtime;

use anyhow::Context;
use log::info;
use rayon::prelude::*;

use detector::json_serialisation::conflicts_to_json;
use detector::{Conflict, ConflictDetector};
use model::config::{Config, TimeBuffer};
use model::csv_loading::{load_visits_from_csv, write_visits_to_csv};
use model::json_serialisation::load_conflict_instance_from_json;
use model::sample_data::sample_visits;
use model::Visits;

/// Where the timetable comes from.
pub enum Source<'a> {
    Sample,
    File(&'a Path),
}

/// Loads a timetable. Files ending in `.json` are read as json instances (which may carry their
/// own config), everything else as a delimited table.
pub fn load_visits(source: Source, delimiter: u8) -> anyhow::Result<(Visits, Option<Config>)> {
    match source {
        Source::Sample => Ok((sample_visits(), None)),
        Source::File(path) if path.extension().map_or(false, |e| e == "json") => {
            let input = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let input: serde_json::Value = serde_json::from_str(&input)
                .with_context(|| format!("{} is not valid json", path.display()))?;
            load_conflict_instance_from_json(input)
                .with_context(|| format!("cannot load instance {}", path.display()))
        }
        Source::File(path) => {
            let visits = load_visits_from_csv(path, delimiter)
                .with_context(|| format!("cannot load timetable {}", path.display()))?;
            Ok((visits, None))
        }
    }
}

/// Writes the (possibly filtered) timetable as comma separated table.
pub fn export_visits(visits: &Visits, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    write_visits_to_csv(visits, file)
        .with_context(|| format!("cannot write timetable {}", path.display()))?;
    info!("{} visits written to {}", visits.len(), path.display());
    Ok(())
}

/// Runs the detection once and returns the conflicts together with a json report.
pub fn run(visits: &Visits, config: Config) -> anyhow::Result<(Vec<Conflict>, serde_json::Value)> {
    let start_time = stdtime::Instant::now();
    let conflicts = ConflictDetector::new(config).detect(visits)?;
    let runtime_duration = start_time.elapsed();
    info!(
        "Detection finished (running time: {:0.2}sec)",
        runtime_duration.as_secs_f32()
    );

    let output = serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
            "config": config,
        },
        "overview": visits.overview(),
        "conflicts": conflicts_to_json(&conflicts),
    });
    Ok((conflicts, output))
}

/// Number of conflicts for every valid time buffer, detected in parallel.
pub fn buffer_sensitivity(
    visits: &Visits,
    config: Config,
) -> anyhow::Result<Vec<(TimeBuffer, usize)>> {
    let buffers: Vec<TimeBuffer> = TimeBuffer::all().collect();
    let counts = buffers
        .par_iter()
        .map(|&buffer| {
            ConflictDetector::new(config.with_time_buffer(buffer))
                .detect(visits)
                .map(|conflicts| (buffer, conflicts.len()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(counts)
}
