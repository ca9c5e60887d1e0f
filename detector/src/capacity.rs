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

use log::warn;

use model::base_types::{Length, PlatformId, VisitIdx};
use model::config::CapacityPolicy;
use model::{Visit, Visits};

use crate::error::DetectionError;

/// The capacity that applies to the anchors of one platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformCapacity {
    Fixed(Length),
    PerAnchor,
}

impl PlatformCapacity {
    pub fn resolve(
        policy: CapacityPolicy,
        platform: &PlatformId,
        visits: &Visits,
        platform_visits: &[VisitIdx],
    ) -> Result<PlatformCapacity, DetectionError> {
        let first = match platform_visits.first() {
            Some(&v) => visits[v].platform_capacity(),
            None => return Ok(PlatformCapacity::PerAnchor),
        };
        match policy {
            CapacityPolicy::AnchorVisit => Ok(PlatformCapacity::PerAnchor),
            CapacityPolicy::FirstSeen => {
                if let Some(&v) = platform_visits
                    .iter()
                    .find(|&&v| visits[v].platform_capacity() != first)
                {
                    warn!(
                        "Platform {} states different capacities ({}m, {}m for {}); using {}m.",
                        platform,
                        first,
                        visits[v].platform_capacity(),
                        visits[v].trip_id(),
                        first
                    );
                }
                Ok(PlatformCapacity::Fixed(first))
            }
            CapacityPolicy::Uniform => {
                match platform_visits
                    .iter()
                    .find(|&&v| visits[v].platform_capacity() != first)
                {
                    Some(&v) => Err(DetectionError::InconsistentCapacity {
                        platform: platform.clone(),
                        trip_id: visits[v].trip_id().clone(),
                        expected: first,
                        found: visits[v].platform_capacity(),
                    }),
                    None => Ok(PlatformCapacity::Fixed(first)),
                }
            }
        }
    }

    pub fn available_for(&self, anchor: &Visit) -> Length {
        match self {
            PlatformCapacity::Fixed(capacity) => *capacity,
            PlatformCapacity::PerAnchor => anchor.platform_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::visit;

    fn mixed() -> Visits {
        Visits::new(vec![
            visit("T0", "A", "08:00", "08:05", 12.0, 25.0),
            visit("T1", "A", "08:01", "08:06", 12.0, 25.0),
            visit("T2", "A", "08:02", "08:07", 12.0, 30.0),
        ])
    }

    fn indices(visits: &Visits) -> Vec<VisitIdx> {
        visits.idx_iter().collect()
    }

    #[test]
    fn uniform_rejects_inconsistent_capacities() {
        let visits = mixed();
        let result = PlatformCapacity::resolve(
            CapacityPolicy::Uniform,
            &"A".into(),
            &visits,
            &indices(&visits),
        );
        assert_eq!(
            result,
            Err(DetectionError::InconsistentCapacity {
                platform: "A".into(),
                trip_id: "T2".into(),
                expected: Length::from_meter(25.0),
                found: Length::from_meter(30.0),
            })
        );
    }

    #[test]
    fn uniform_accepts_consistent_capacities() {
        let visits = mixed();
        let consistent = &indices(&visits)[..2];
        let capacity =
            PlatformCapacity::resolve(CapacityPolicy::Uniform, &"A".into(), &visits, consistent)
                .unwrap();
        assert_eq!(capacity, PlatformCapacity::Fixed(Length::from_meter(25.0)));
    }

    #[test]
    fn first_seen_and_anchor_visit() {
        let visits = mixed();
        let all = indices(&visits);
        let anchor = &visits[VisitIdx(2)];

        let first_seen =
            PlatformCapacity::resolve(CapacityPolicy::FirstSeen, &"A".into(), &visits, &all)
                .unwrap();
        assert_eq!(first_seen.available_for(anchor), Length::from_meter(25.0));

        let per_anchor =
            PlatformCapacity::resolve(CapacityPolicy::AnchorVisit, &"A".into(), &visits, &all)
                .unwrap();
        assert_eq!(per_anchor.available_for(anchor), Length::from_meter(30.0));
    }
}
