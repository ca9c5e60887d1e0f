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

//! Compact construction of timetables for tests and benchmarks.

use model::base_types::Length;
use model::time::ScheduledTime;
use model::{Visit, Visits};

/// A visit of line "1" at stop "Bahnhof".
pub fn visit(
    trip: &str,
    platform: &str,
    arrival: &str,
    departure: &str,
    vehicle_length: f64,
    platform_capacity: f64,
) -> Visit {
    line_visit(
        "1",
        trip,
        platform,
        arrival,
        departure,
        vehicle_length,
        platform_capacity,
    )
}

pub fn line_visit(
    line: &str,
    trip: &str,
    platform: &str,
    arrival: &str,
    departure: &str,
    vehicle_length: f64,
    platform_capacity: f64,
) -> Visit {
    Visit::new(
        line.into(),
        trip.into(),
        "Bahnhof".into(),
        platform.into(),
        ScheduledTime::new(arrival),
        ScheduledTime::new(departure),
        Length::from_meter(vehicle_length),
        Length::from_meter(platform_capacity),
    )
}

/// Deterministic pseudo-random timetable with `platforms` platforms and `per_platform` visits
/// each. Dwell times are 0 to 9 minutes, lengths 12 or 18 meter, capacities 25 meter on even
/// and 30 meter on odd platform numbers.
pub fn generated_visits(platforms: usize, per_platform: usize, seed: u64) -> Visits {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move |bound: u64| -> u64 {
        // linear congruential generator (Knuth's MMIX constants)
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let mut visits = Vec::with_capacity(platforms * per_platform);
    for i in 0..platforms * per_platform {
        let platform_no = next(platforms as u64);
        let arrival = ScheduledTime::from_minutes(next(1430) as u32);
        let departure = ScheduledTime::from_minutes(
            (arrival.minutes() + next(10) as u32).min(1439),
        );
        let capacity = if platform_no % 2 == 0 { 25.0 } else { 30.0 };
        let length = if next(2) == 0 { 12.0 } else { 18.0 };
        visits.push(Visit::new(
            format!("{}", next(5)).into(),
            format!("T{:05}", i).into(),
            "Bahnhof".into(),
            format!("P{}", platform_no).into(),
            arrival,
            departure,
            Length::from_meter(length),
            Length::from_meter(capacity),
        ));
    }
    Visits::new(visits)
}
