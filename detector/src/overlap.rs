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

//! Finding, for every visit of a platform, the other visits whose (buffered) time windows
//! intersect its own.

use model::base_types::{Minutes, VisitIdx};
use model::config::{OverlapStrategy, TimeBuffer};
use model::{Visit, Visits};

/// The visits overlapping `anchor` (in table order, without the anchor itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOverlaps {
    pub anchor: VisitIdx,
    pub overlapping: Vec<VisitIdx>,
}

/// `candidate` arrives no later than `buffer` after `anchor` departs and departs no earlier than
/// `buffer` before `anchor` arrives. The relation is symmetric.
pub fn windows_overlap(anchor: &Visit, candidate: &Visit, buffer: TimeBuffer) -> bool {
    let b = buffer.minutes();
    candidate.arrival_minutes() <= anchor.departure_minutes() + b
        && candidate.departure_minutes() + b >= anchor.arrival_minutes()
}

pub trait OverlapFinder: Send + Sync {
    /// `platform_visits` are the indices of one platform in table order. The result contains
    /// one entry per anchor in the same order.
    fn find_overlaps(
        &self,
        visits: &Visits,
        platform_visits: &[VisitIdx],
        buffer: TimeBuffer,
    ) -> Vec<AnchorOverlaps>;
}

pub fn overlap_finder(strategy: OverlapStrategy) -> Box<dyn OverlapFinder> {
    match strategy {
        OverlapStrategy::AllPairs => Box::new(AllPairs),
        OverlapStrategy::Sweep => Box::new(Sweep),
    }
}

/// Compares every anchor with every other visit of the platform.
pub struct AllPairs;

impl OverlapFinder for AllPairs {
    fn find_overlaps(
        &self,
        visits: &Visits,
        platform_visits: &[VisitIdx],
        buffer: TimeBuffer,
    ) -> Vec<AnchorOverlaps> {
        platform_visits
            .iter()
            .map(|&anchor| AnchorOverlaps {
                anchor,
                overlapping: platform_visits
                    .iter()
                    .copied()
                    .filter(|&c| c != anchor && windows_overlap(&visits[anchor], &visits[c], buffer))
                    .collect(),
            })
            .collect()
    }
}

/// Sorts the platform's visits by arrival and only inspects the arrival range that can
/// possibly overlap an anchor. Produces exactly the output of [`AllPairs`].
pub struct Sweep;

impl OverlapFinder for Sweep {
    fn find_overlaps(
        &self,
        visits: &Visits,
        platform_visits: &[VisitIdx],
        buffer: TimeBuffer,
    ) -> Vec<AnchorOverlaps> {
        let b = buffer.minutes();

        let mut by_arrival: Vec<VisitIdx> = platform_visits.to_vec();
        by_arrival.sort_by_key(|&v| visits[v].arrival_minutes());
        let arrivals: Vec<Minutes> = by_arrival
            .iter()
            .map(|&v| visits[v].arrival_minutes())
            .collect();

        // every departure is at most this much later than its arrival (departures before
        // arrivals are not rejected and count as zero dwell)
        let max_dwell: Minutes = platform_visits
            .iter()
            .map(|&v| {
                visits[v]
                    .departure_minutes()
                    .saturating_sub(visits[v].arrival_minutes())
            })
            .max()
            .unwrap_or(0);

        platform_visits
            .iter()
            .map(|&anchor| {
                let a = &visits[anchor];
                // candidates arriving earlier than this have departed before the window opens
                let first = arrivals.partition_point(|&arr| arr + max_dwell + b < a.arrival_minutes());
                let end = arrivals.partition_point(|&arr| arr <= a.departure_minutes() + b);
                let mut overlapping: Vec<VisitIdx> = by_arrival[first..end.max(first)]
                    .iter()
                    .copied()
                    .filter(|&c| c != anchor && windows_overlap(a, &visits[c], buffer))
                    .collect();
                overlapping.sort_unstable();
                AnchorOverlaps {
                    anchor,
                    overlapping,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "overlap/tests.rs"]
mod tests;
