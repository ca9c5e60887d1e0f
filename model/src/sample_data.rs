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

use crate::base_types::Length;
use crate::time::ScheduledTime;
use crate::visits::{Visit, Visits};

/// Small demonstration timetable: nine visits at "Bahnhof" on platforms A (25m) and B (30m).
pub fn sample_visits() -> Visits {
    let rows: [(&str, &str, &str, &str, &str, f64, f64); 9] = [
        ("1", "F001", "08:00", "08:05", "A", 12.0, 25.0),
        ("1", "F002", "08:01", "08:06", "A", 12.0, 25.0),
        ("2", "F003", "08:02", "08:07", "A", 18.0, 25.0),
        ("2", "F004", "08:15", "08:20", "B", 12.0, 30.0),
        ("3", "F005", "08:30", "08:35", "A", 12.0, 25.0),
        ("3", "F006", "08:31", "08:36", "A", 18.0, 25.0),
        ("4", "F007", "08:45", "08:50", "B", 12.0, 30.0),
        ("1", "F008", "08:02", "08:07", "B", 12.0, 30.0),
        ("2", "F009", "08:03", "08:08", "B", 18.0, 30.0),
    ];
    Visits::new(
        rows.iter()
            .map(|&(line, trip, arrival, departure, platform, length, capacity)| {
                Visit::new(
                    line.into(),
                    trip.into(),
                    "Bahnhof".into(),
                    platform.into(),
                    ScheduledTime::new(arrival),
                    ScheduledTime::new(departure),
                    Length::from_meter(length),
                    Length::from_meter(capacity),
                )
            })
            .collect(),
    )
}
