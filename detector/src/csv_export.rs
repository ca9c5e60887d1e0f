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

use std::io::Write;

use itertools::Itertools;
use serde::Serialize;

use crate::conflict::Conflict;

#[derive(Serialize)]
struct CsvConflict<'a> {
    platform_id: &'a str,
    time: &'a str,
    trip_ids: String,
    line_ids: String,
    required_length: String,
    available_length: String,
    excess_length: String,
}

/// Writes one row per conflict; trip and line lists are joined by ", " within their cell.
pub fn write_conflicts_to_csv<W: Write>(conflicts: &[Conflict], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    if conflicts.is_empty() {
        // serialize writes the header only together with the first record
        writer.write_record([
            "platform_id",
            "time",
            "trip_ids",
            "line_ids",
            "required_length",
            "available_length",
            "excess_length",
        ])?;
    }
    for conflict in conflicts {
        writer.serialize(CsvConflict {
            platform_id: &conflict.platform_id().0,
            time: conflict.time(),
            trip_ids: conflict.trip_ids().iter().join(", "),
            line_ids: conflict.line_ids().iter().join(", "),
            required_length: conflict.required_length().to_string(),
            available_length: conflict.available_length().to_string(),
            excess_length: conflict.excess_length().to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn conflicts_to_csv_string(conflicts: &[Conflict]) -> Result<String, csv::Error> {
    let mut buffer: Vec<u8> = Vec::new();
    write_conflicts_to_csv(conflicts, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect_conflicts;
    use model::config::Config;
    use model::sample_data::sample_visits;

    #[test]
    fn sample_conflicts_as_csv() {
        let visits = sample_visits();
        let conflicts = detect_conflicts(&visits, &Config::default()).unwrap();
        let csv = conflicts_to_csv_string(&conflicts).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "platform_id,time,trip_ids,line_ids,required_length,available_length,excess_length"
        );
        assert_eq!(lines[1], "A,08:00,\"F001, F002, F003\",\"1, 1, 2\",42,25,17");
        assert_eq!(lines.len(), 1 + conflicts.len());
    }

    #[test]
    fn empty_export_has_header() {
        let csv = conflicts_to_csv_string(&[]).unwrap();
        assert_eq!(
            csv,
            "platform_id,time,trip_ids,line_ids,required_length,available_length,excess_length\n"
        );
    }
}
