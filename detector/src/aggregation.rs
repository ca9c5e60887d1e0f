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

use log::trace;

use model::base_types::{Length, PlatformId};
use model::Visits;

use crate::capacity::PlatformCapacity;
use crate::conflict::Conflict;
use crate::overlap::AnchorOverlaps;

/// Turns the overlaps of one platform into conflicts: an anchor is in conflict if its own
/// vehicle length plus those of all overlapping visits exceeds the available capacity.
/// Overlap alone is not a conflict.
pub fn aggregate(
    platform: &PlatformId,
    visits: &Visits,
    overlaps: Vec<AnchorOverlaps>,
    capacity: PlatformCapacity,
) -> Vec<Conflict> {
    overlaps
        .into_iter()
        .filter(|o| !o.overlapping.is_empty())
        .filter_map(|AnchorOverlaps { anchor, overlapping }| {
            let anchor_visit = &visits[anchor];
            let required_length = anchor_visit.vehicle_length()
                + overlapping
                    .iter()
                    .map(|&v| visits[v].vehicle_length())
                    .sum::<Length>();
            let available_length = capacity.available_for(anchor_visit);
            if required_length <= available_length {
                trace!(
                    "{} overlaps {} visits but fits ({}m of {}m)",
                    anchor_visit.trip_id(),
                    overlapping.len(),
                    required_length,
                    available_length
                );
                return None;
            }

            let mut involved = Vec::with_capacity(overlapping.len() + 1);
            involved.push(anchor);
            involved.extend(overlapping);
            Some(Conflict::new(
                platform.clone(),
                anchor_visit.arrival().text().to_string(),
                involved,
                visits,
                required_length,
                available_length,
            ))
        })
        .collect()
}
