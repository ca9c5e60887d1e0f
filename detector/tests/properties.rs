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

use detector::overlap::windows_overlap;
use detector::test_utilities::generated_visits;
use detector::{detect_conflicts, ConflictDetector};
use model::config::{CapacityPolicy, Config, ConflictMode, OverlapStrategy, TimeBuffer};
use model::base_types::Length;
use model::Visits;

fn timetables() -> Vec<Visits> {
    (0..4).map(|seed| generated_visits(4, 60, seed)).collect()
}

fn overlap_count(visits: &Visits, config: Config) -> usize {
    ConflictDetector::new(config)
        .overlaps(visits)
        .iter()
        .flat_map(|(_, anchors)| anchors.iter())
        .map(|a| a.overlapping.len())
        .sum()
}

#[test]
fn generated_platforms_mix_capacities() {
    for visits in timetables() {
        for (platform, indices) in visits.by_platform() {
            let capacity = visits[indices[0]].platform_capacity();
            assert!(indices
                .iter()
                .all(|&i| visits[i].platform_capacity() == capacity));
            let number: u64 = platform.0[1..].parse().unwrap();
            let expected = if number % 2 == 0 { 25.0 } else { 30.0 };
            assert_eq!(capacity, Length::from_meter(expected));
        }
    }
}

#[test]
fn every_conflict_exceeds_capacity() {
    for visits in timetables() {
        for conflict in detect_conflicts(&visits, &Config::default()).unwrap() {
            assert!(conflict.required_length() > conflict.available_length());
            assert!(conflict.excess_length().is_positive());
        }
    }
}

#[test]
fn every_overlapping_pair_over_capacity_is_reported() {
    let config = Config::default();
    for visits in timetables() {
        let conflicts = detect_conflicts(&visits, &config).unwrap();
        for (a, visit_a) in visits.iter() {
            for (b, visit_b) in visits.iter() {
                if a == b
                    || visit_a.platform_id() != visit_b.platform_id()
                    || !windows_overlap(visit_a, visit_b, config.time_buffer)
                    || visit_a.vehicle_length() + visit_b.vehicle_length()
                        <= visit_a.platform_capacity()
                {
                    continue;
                }
                // reported from both sides
                assert!(conflicts
                    .iter()
                    .any(|c| c.anchor() == a && c.involves(b)));
                assert!(conflicts
                    .iter()
                    .any(|c| c.anchor() == b && c.involves(a)));
            }
        }
    }
}

#[test]
fn wider_buffers_never_lose_overlaps_or_conflicts() {
    for visits in timetables() {
        let mut previous_overlaps = 0;
        let mut previous_conflicts = 0;
        for buffer in TimeBuffer::all() {
            let config = Config::default().with_time_buffer(buffer);
            let overlaps = overlap_count(&visits, config);
            let conflicts = detect_conflicts(&visits, &config).unwrap().len();
            assert!(overlaps >= previous_overlaps, "buffer {}", buffer);
            assert!(conflicts >= previous_conflicts, "buffer {}", buffer);
            previous_overlaps = overlaps;
            previous_conflicts = conflicts;
        }
    }
}

#[test]
fn detection_is_idempotent() {
    let detector = ConflictDetector::new(Config::default());
    for visits in timetables() {
        let first = detector.detect(&visits).unwrap();
        let second = detector.detect(&visits).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn strategies_agree() {
    for visits in timetables() {
        for mode in [ConflictMode::Anchored, ConflictMode::Grouped] {
            for policy in [CapacityPolicy::Uniform, CapacityPolicy::AnchorVisit] {
                let config = Config::default()
                    .with_mode(mode)
                    .with_capacity_policy(policy);
                assert_eq!(
                    detect_conflicts(
                        &visits,
                        &config.with_overlap_strategy(OverlapStrategy::Sweep)
                    )
                    .unwrap(),
                    detect_conflicts(
                        &visits,
                        &config.with_overlap_strategy(OverlapStrategy::AllPairs)
                    )
                    .unwrap()
                );
            }
        }
    }
}

#[test]
fn grouping_never_adds_conflicts() {
    for visits in timetables() {
        let anchored = detect_conflicts(&visits, &Config::default()).unwrap();
        let grouped =
            detect_conflicts(&visits, &Config::default().with_mode(ConflictMode::Grouped))
                .unwrap();
        assert!(grouped.len() <= anchored.len());
        // every anchored conflict is covered by exactly one cluster
        for conflict in anchored.iter() {
            assert_eq!(
                grouped
                    .iter()
                    .filter(|g| g.involves(conflict.anchor()))
                    .count(),
                1
            );
        }
        for cluster in grouped.iter() {
            assert!(cluster.excess_length().is_positive());
        }
    }
}
