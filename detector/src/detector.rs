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

use log::{debug, info};

use model::base_types::PlatformId;
use model::config::{ConflictMode, Config, TimeParsing};
use model::Visits;

use crate::aggregation::aggregate;
use crate::capacity::PlatformCapacity;
use crate::conflict::Conflict;
use crate::error::DetectionError;
use crate::grouping::group_conflicts;
use crate::overlap::{overlap_finder, AnchorOverlaps, OverlapFinder};

/// Detects platform conflicts. Holds no state besides its configuration, so every call to
/// [`ConflictDetector::detect`] is independent.
pub struct ConflictDetector {
    config: Config,
    finder: Box<dyn OverlapFinder>,
}

impl ConflictDetector {
    pub fn new(config: Config) -> ConflictDetector {
        ConflictDetector {
            config,
            finder: overlap_finder(config.overlap_strategy),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Conflicts ordered by platform (first appearance) and anchor (table order).
    pub fn detect(&self, visits: &Visits) -> Result<Vec<Conflict>, DetectionError> {
        if self.config.time_parsing == TimeParsing::Strict {
            check_times(visits)?;
        }

        let mut conflicts: Vec<Conflict> = Vec::new();
        for (platform, platform_visits) in visits.by_platform() {
            let capacity = PlatformCapacity::resolve(
                self.config.capacity_policy,
                platform,
                visits,
                &platform_visits,
            )?;
            let overlaps =
                self.finder
                    .find_overlaps(visits, &platform_visits, self.config.time_buffer);
            let platform_conflicts = aggregate(platform, visits, overlaps, capacity);
            debug!(
                "platform {}: {} visits, {} conflicts",
                platform,
                platform_visits.len(),
                platform_conflicts.len()
            );
            conflicts.extend(platform_conflicts);
        }

        if self.config.mode == ConflictMode::Grouped {
            conflicts = group_conflicts(conflicts, visits);
        }
        info!(
            "{} conflicts among {} visits (buffer {}, {:?})",
            conflicts.len(),
            visits.len(),
            self.config.time_buffer,
            self.config.mode
        );
        Ok(conflicts)
    }

    /// The raw overlap sets of every platform, before capacities are considered.
    pub fn overlaps(&self, visits: &Visits) -> Vec<(PlatformId, Vec<AnchorOverlaps>)> {
        visits
            .by_platform()
            .into_iter()
            .map(|(platform, platform_visits)| {
                (
                    platform.clone(),
                    self.finder
                        .find_overlaps(visits, &platform_visits, self.config.time_buffer),
                )
            })
            .collect()
    }
}

pub fn detect_conflicts(visits: &Visits, config: &Config) -> Result<Vec<Conflict>, DetectionError> {
    ConflictDetector::new(*config).detect(visits)
}

fn check_times(visits: &Visits) -> Result<(), DetectionError> {
    for (idx, visit) in visits.iter() {
        for time in [visit.arrival(), visit.departure()] {
            if !time.is_valid() {
                return Err(DetectionError::MalformedTime {
                    visit: idx,
                    trip_id: visit.trip_id().clone(),
                    text: time.text().to_string(),
                });
            }
        }
    }
    Ok(())
}
