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

use super::*;
use crate::test_utilities::{generated_visits, visit};

fn buffer(minutes: i64) -> TimeBuffer {
    TimeBuffer::new(minutes).unwrap()
}

fn all_indices(visits: &Visits) -> Vec<VisitIdx> {
    visits.idx_iter().collect()
}

#[test]
fn predicate_respects_buffer() {
    let a = visit("A", "X", "08:00", "08:05", 12.0, 25.0);
    let later = visit("B", "X", "08:07", "08:10", 12.0, 25.0);
    assert!(windows_overlap(&a, &later, buffer(2)));
    assert!(windows_overlap(&later, &a, buffer(2)));
    assert!(!windows_overlap(&a, &later, buffer(1)));

    let earlier = visit("C", "X", "07:50", "07:57", 12.0, 25.0);
    assert!(!windows_overlap(&a, &earlier, buffer(2)));
    assert!(windows_overlap(&a, &earlier, buffer(3)));
}

#[test]
fn predicate_near_midnight_does_not_underflow() {
    let a = visit("A", "X", "00:00", "00:01", 12.0, 25.0);
    let b = visit("B", "X", "00:00", "00:00", 12.0, 25.0);
    assert!(windows_overlap(&a, &b, buffer(10)));
}

#[test]
fn anchors_exclude_themselves_but_not_twins() {
    let visits = Visits::new(vec![
        visit("T1", "X", "08:00", "08:05", 12.0, 25.0),
        visit("T1", "X", "08:00", "08:05", 12.0, 25.0),
    ]);
    for finder in [overlap_finder(OverlapStrategy::AllPairs), overlap_finder(OverlapStrategy::Sweep)] {
        let overlaps = finder.find_overlaps(&visits, &all_indices(&visits), buffer(2));
        assert_eq!(
            overlaps,
            vec![
                AnchorOverlaps {
                    anchor: VisitIdx(0),
                    overlapping: vec![VisitIdx(1)]
                },
                AnchorOverlaps {
                    anchor: VisitIdx(1),
                    overlapping: vec![VisitIdx(0)]
                },
            ]
        );
    }
}

#[test]
fn overlaps_are_in_table_order() {
    // arrivals are deliberately not sorted
    let visits = Visits::new(vec![
        visit("T0", "X", "08:10", "08:12", 12.0, 25.0),
        visit("T1", "X", "08:00", "08:20", 12.0, 25.0),
        visit("T2", "X", "08:05", "08:06", 12.0, 25.0),
        visit("T3", "X", "09:00", "09:05", 12.0, 25.0),
    ]);
    let overlaps = Sweep.find_overlaps(&visits, &all_indices(&visits), buffer(2));
    assert_eq!(overlaps[1].anchor, VisitIdx(1));
    assert_eq!(overlaps[1].overlapping, vec![VisitIdx(0), VisitIdx(2)]);
    assert_eq!(overlaps[0].overlapping, vec![VisitIdx(1)]);
    assert!(overlaps[3].overlapping.is_empty());
}

#[test]
fn departure_before_arrival_is_tolerated() {
    let visits = Visits::new(vec![
        visit("T0", "X", "08:10", "08:00", 12.0, 25.0),
        visit("T1", "X", "08:04", "08:06", 12.0, 25.0),
        visit("T2", "X", "08:11", "08:12", 12.0, 25.0),
    ]);
    let indices = all_indices(&visits);
    assert_eq!(
        Sweep.find_overlaps(&visits, &indices, buffer(2)),
        AllPairs.find_overlaps(&visits, &indices, buffer(2))
    );
}

#[test]
fn sweep_matches_all_pairs() {
    for seed in 0..5 {
        let visits = generated_visits(3, 120, seed);
        for (_, platform_visits) in visits.by_platform() {
            for b in TimeBuffer::all() {
                assert_eq!(
                    Sweep.find_overlaps(&visits, &platform_visits, b),
                    AllPairs.find_overlaps(&visits, &platform_visits, b),
                    "seed {} buffer {}",
                    seed,
                    b
                );
            }
        }
    }
}

#[test]
fn empty_platform() {
    let visits = Visits::default();
    assert!(Sweep.find_overlaps(&visits, &[], buffer(2)).is_empty());
    assert!(AllPairs.find_overlaps(&visits, &[], buffer(2)).is_empty());
}
