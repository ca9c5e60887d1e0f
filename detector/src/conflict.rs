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

use std::fmt;

use itertools::Itertools;
use model::base_types::{Length, LineId, PlatformId, TripId, VisitIdx};
use model::Visits;

/// Overlapping visits at one platform whose combined vehicle length exceeds the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    platform_id: PlatformId,
    time: String,
    visits: Vec<VisitIdx>,
    trip_ids: Vec<TripId>,
    line_ids: Vec<LineId>,
    required_length: Length,
    available_length: Length,
}

impl Conflict {
    /// `involved` is ordered as it should be reported (anchor first in anchored mode).
    /// Trip and line ids are taken from `visits` in the same order.
    pub fn new(
        platform_id: PlatformId,
        time: String,
        involved: Vec<VisitIdx>,
        visits: &Visits,
        required_length: Length,
        available_length: Length,
    ) -> Conflict {
        assert!(!involved.is_empty(), "a conflict involves at least one visit");
        assert!(
            required_length > available_length,
            "a conflict requires more than {}m, got {}m",
            available_length,
            required_length
        );
        let trip_ids = involved
            .iter()
            .map(|&v| visits[v].trip_id().clone())
            .collect();
        let line_ids = involved
            .iter()
            .map(|&v| visits[v].line_id().clone())
            .collect();
        Conflict {
            platform_id,
            time,
            visits: involved,
            trip_ids,
            line_ids,
            required_length,
            available_length,
        }
    }

    pub fn platform_id(&self) -> &PlatformId {
        &self.platform_id
    }

    /// Arrival time of the anchor as written in the timetable.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn visits(&self) -> &[VisitIdx] {
        &self.visits
    }

    pub fn anchor(&self) -> VisitIdx {
        self.visits[0]
    }

    pub fn trip_ids(&self) -> &[TripId] {
        &self.trip_ids
    }

    pub fn line_ids(&self) -> &[LineId] {
        &self.line_ids
    }

    pub fn required_length(&self) -> Length {
        self.required_length
    }

    pub fn available_length(&self) -> Length {
        self.available_length
    }

    /// Always positive.
    pub fn excess_length(&self) -> Length {
        self.required_length - self.available_length
    }

    pub fn involves(&self, visit: VisitIdx) -> bool {
        self.visits.contains(&visit)
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "platform {} at {}: {} (lines {}) need {}m of {}m (+{}m)",
            self.platform_id,
            self.time,
            self.trip_ids.iter().join(", "),
            self.line_ids.iter().join(", "),
            self.required_length,
            self.available_length,
            self.excess_length()
        )
    }
}
