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

use std::collections::{HashMap, HashSet};
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::base_types::{Length, LineId, Minutes, PlatformId, StopName, TripId, VisitIdx};
use crate::time::ScheduledTime;

/// One scheduled occupation of a platform by one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    line_id: LineId,
    trip_id: TripId,
    stop_name: StopName,
    platform_id: PlatformId,
    arrival: ScheduledTime,
    departure: ScheduledTime,
    vehicle_length: Length,
    platform_capacity: Length,
}

impl Visit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        line_id: LineId,
        trip_id: TripId,
        stop_name: StopName,
        platform_id: PlatformId,
        arrival: ScheduledTime,
        departure: ScheduledTime,
        vehicle_length: Length,
        platform_capacity: Length,
    ) -> Visit {
        Visit {
            line_id,
            trip_id,
            stop_name,
            platform_id,
            arrival,
            departure,
            vehicle_length,
            platform_capacity,
        }
    }

    pub fn line_id(&self) -> &LineId {
        &self.line_id
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    pub fn stop_name(&self) -> &StopName {
        &self.stop_name
    }

    pub fn platform_id(&self) -> &PlatformId {
        &self.platform_id
    }

    pub fn arrival(&self) -> &ScheduledTime {
        &self.arrival
    }

    pub fn departure(&self) -> &ScheduledTime {
        &self.departure
    }

    pub fn arrival_minutes(&self) -> Minutes {
        self.arrival.minutes()
    }

    pub fn departure_minutes(&self) -> Minutes {
        self.departure.minutes()
    }

    pub fn vehicle_length(&self) -> Length {
        self.vehicle_length
    }

    pub fn platform_capacity(&self) -> Length {
        self.platform_capacity
    }
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (line {}) at {}/{} {}-{} ({}m of {}m)",
            self.trip_id,
            self.line_id,
            self.stop_name,
            self.platform_id,
            self.arrival,
            self.departure,
            self.vehicle_length,
            self.platform_capacity
        )
    }
}

/// Key figures of a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub trips: usize,
    pub stops: usize,
    pub platforms: usize,
    pub lines: usize,
}

/// Arena of all visits in table order. The position of a visit is its `VisitIdx`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Visits {
    visits: Vec<Visit>,
}

// static functions
impl Visits {
    pub fn new(visits: Vec<Visit>) -> Visits {
        Visits { visits }
    }
}

// methods
impl Visits {
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn get(&self, idx: VisitIdx) -> Option<&Visit> {
        self.visits.get(idx.idx())
    }

    pub fn idx_iter(&self) -> impl Iterator<Item = VisitIdx> + '_ {
        (0..self.visits.len()).map(VisitIdx::from)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisitIdx, &Visit)> + '_ {
        self.visits
            .iter()
            .enumerate()
            .map(|(i, v)| (VisitIdx::from(i), v))
    }

    /// Platforms in order of their first appearance.
    pub fn platforms(&self) -> Vec<&PlatformId> {
        self.visits.iter().map(|v| v.platform_id()).unique().collect()
    }

    /// Partitions the visits by platform. Platforms appear in order of their first visit, the
    /// indices of each platform are in table order.
    pub fn by_platform(&self) -> Vec<(&PlatformId, Vec<VisitIdx>)> {
        let mut position: HashMap<&PlatformId, usize> = HashMap::new();
        let mut partition: Vec<(&PlatformId, Vec<VisitIdx>)> = Vec::new();
        for (idx, visit) in self.iter() {
            let platform = visit.platform_id();
            match position.get(platform) {
                Some(&p) => partition[p].1.push(idx),
                None => {
                    position.insert(platform, partition.len());
                    partition.push((platform, vec![idx]));
                }
            }
        }
        partition
    }

    pub fn overview(&self) -> Overview {
        Overview {
            trips: self.visits.len(),
            stops: self.visits.iter().map(|v| v.stop_name()).unique().count(),
            platforms: self.visits.iter().map(|v| v.platform_id()).unique().count(),
            lines: self.visits.iter().map(|v| v.line_id()).unique().count(),
        }
    }

    /// All lines, sorted.
    pub fn lines(&self) -> Vec<&LineId> {
        self.visits.iter().map(|v| v.line_id()).unique().sorted().collect()
    }

    /// All stop names, sorted.
    pub fn stops(&self) -> Vec<&StopName> {
        self.visits
            .iter()
            .map(|v| v.stop_name())
            .unique()
            .sorted()
            .collect()
    }

    /// Keeps the visits whose line is in `lines` and whose stop is in `stops`. `None` keeps
    /// everything for that criterion. The result is a new arena, i.e. indices are reassigned.
    pub fn filter(&self, lines: Option<&[LineId]>, stops: Option<&[StopName]>) -> Visits {
        let lines: Option<HashSet<&LineId>> = lines.map(|l| l.iter().collect());
        let stops: Option<HashSet<&StopName>> = stops.map(|s| s.iter().collect());
        Visits::new(
            self.visits
                .iter()
                .filter(|v| lines.as_ref().map_or(true, |l| l.contains(v.line_id())))
                .filter(|v| stops.as_ref().map_or(true, |s| s.contains(v.stop_name())))
                .cloned()
                .collect(),
        )
    }
}

impl std::ops::Index<VisitIdx> for Visits {
    type Output = Visit;

    fn index(&self, idx: VisitIdx) -> &Visit {
        &self.visits[idx.idx()]
    }
}
