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

//! Loading and writing of timetables as delimited text.
//!
//! Each column can be named in English or with the German headings used by the operators'
//! exports (`Liniennummer`, `Fahrt_ID`, ...). Additional columns are ignored.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::base_types::Length;
use crate::error::ModelError;
use crate::time::ScheduledTime;
use crate::visits::{Visit, Visits};

/// (english heading, german heading) of each required column, in the required order.
pub const REQUIRED_COLUMNS: [(&str, &str); 8] = [
    ("line_id", "Liniennummer"),
    ("trip_id", "Fahrt_ID"),
    ("stop_name", "Haltestelle"),
    ("arrival", "Ankunft"),
    ("departure", "Abfahrt"),
    ("platform_id", "Haltekante"),
    ("vehicle_length", "Fahrzeuglänge"),
    ("platform_capacity", "Kantenlänge"),
];

const LINE_ID: usize = 0;
const TRIP_ID: usize = 1;
const STOP_NAME: usize = 2;
const ARRIVAL: usize = 3;
const DEPARTURE: usize = 4;
const PLATFORM_ID: usize = 5;
const VEHICLE_LENGTH: usize = 6;
const PLATFORM_CAPACITY: usize = 7;

pub fn load_visits_from_csv<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Visits, ModelError> {
    let path = path.as_ref();
    info!("Loading visits from {}", path.display());
    let file = File::open(path)?;
    load_visits_from_reader(file, delimiter)
}

pub fn load_visits_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Visits, ModelError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = locate_columns(&headers)?;

    let mut visits: Vec<Visit> = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        visits.push(Visit::new(
            cell(&record, &columns, row, LINE_ID)?.into(),
            cell(&record, &columns, row, TRIP_ID)?.into(),
            cell(&record, &columns, row, STOP_NAME)?.into(),
            cell(&record, &columns, row, PLATFORM_ID)?.into(),
            ScheduledTime::new(cell(&record, &columns, row, ARRIVAL)?),
            ScheduledTime::new(cell(&record, &columns, row, DEPARTURE)?),
            length(&record, &columns, row, VEHICLE_LENGTH)?,
            length(&record, &columns, row, PLATFORM_CAPACITY)?,
        ));
    }
    debug!("{} visits loaded", visits.len());
    Ok(Visits::new(visits))
}

/// Writes the visits with the English headings, times in their original notation. The
/// output loads back into the same visits.
pub fn write_visits_to_csv<W: Write>(visits: &Visits, writer: W) -> Result<(), ModelError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(REQUIRED_COLUMNS.iter().map(|(english, _)| *english))?;
    for (_, visit) in visits.iter() {
        writer.write_record([
            visit.line_id().0.as_str(),
            visit.trip_id().0.as_str(),
            visit.stop_name().0.as_str(),
            visit.arrival().text(),
            visit.departure().text(),
            visit.platform_id().0.as_str(),
            visit.vehicle_length().to_string().as_str(),
            visit.platform_capacity().to_string().as_str(),
        ])?;
    }
    writer.flush()?;
    debug!("Wrote {} visits", visits.len());
    Ok(())
}

fn cell<'r>(
    record: &'r csv::StringRecord,
    columns: &[usize; 8],
    row: usize,
    column: usize,
) -> Result<&'r str, ModelError> {
    match record.get(columns[column]) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ModelError::MissingField {
            row,
            column: String::from(REQUIRED_COLUMNS[column].0),
        }),
    }
}

fn length(
    record: &csv::StringRecord,
    columns: &[usize; 8],
    row: usize,
    column: usize,
) -> Result<Length, ModelError> {
    let value = cell(record, columns, row, column)?;
    let meter: f64 = value.parse().map_err(|_| ModelError::InvalidNumber {
        row,
        column: String::from(REQUIRED_COLUMNS[column].0),
        value: String::from(value),
    })?;
    if !(meter > 0.0 && meter.is_finite()) {
        return Err(ModelError::NonPositiveLength {
            row,
            column: String::from(REQUIRED_COLUMNS[column].0),
            value: meter,
        });
    }
    Ok(Length::from_meter(meter))
}

/// Returns, for each required column, its position in the header. All missing columns are
/// reported at once.
fn locate_columns(headers: &csv::StringRecord) -> Result<[usize; 8], ModelError> {
    let mut positions = [0; 8];
    let mut missing: Vec<String> = Vec::new();
    for (column, (english, german)) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h == *english || h == *german) {
            Some(p) => positions[column] = p,
            None => missing.push(String::from(*english)),
        }
    }
    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(ModelError::MissingColumns(missing))
    }
}
