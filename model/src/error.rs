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

use thiserror::Error;

/// Errors raised while loading or normalizing timetable data.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The table lacks required columns (listed in the order they are required).
    #[error("missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    /// A required cell is empty.
    #[error("row {row}: missing value for '{column}'")]
    MissingField { row: usize, column: String },
    /// A length cell cannot be read as a number.
    #[error("row {row}: '{value}' in column '{column}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    /// Vehicle lengths and platform capacities must be positive.
    #[error("row {row}: '{column}' must be positive, got {value}")]
    NonPositiveLength {
        row: usize,
        column: String,
        value: f64,
    },
    /// The time is not given in the H:MM or HH:MM format.
    #[error("'{0}' is not a valid time of day; H:MM or HH:MM format is expected")]
    MalformedTime(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid json instance: {0}")]
    Json(#[from] serde_json::Error),
    #[error("impossible to read csv table")]
    Csv(#[from] csv::Error),
    #[error("impossible to read file")]
    IO(#[from] std::io::Error),
}

/// Errors raised while reading a detection configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time buffer must be between {min} and {max} minutes, got {value}")]
    TimeBufferOutOfRange { value: i64, min: u32, max: u32 },
    #[error("'{value}' is not a valid value for '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("config file could not be read: {0}")]
    Unreadable(String),
}
