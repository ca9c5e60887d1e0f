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

//! Normalization of wall-clock times of day ("8:05", "08:05") to minutes since midnight.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::base_types::Minutes;
use crate::error::ModelError;

const MINUTES_PER_HOUR: Minutes = 60;

/// Parses `H:MM` or `HH:MM` into minutes since midnight.
/// Hours past 23 denote the service day's night (`24:01` is 1441).
pub fn parse_minutes(text: &str) -> Result<Minutes, ModelError> {
    let malformed = || ModelError::MalformedTime(String::from(text));

    let mut parts = text.trim().split(':');
    let (hour_str, minute_str) = match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), None) => (h.trim(), m.trim()),
        _ => return Err(malformed()),
    };
    if hour_str.is_empty()
        || minute_str.is_empty()
        || !hour_str.bytes().all(|b| b.is_ascii_digit())
        || !minute_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let hour: Minutes = hour_str.parse().map_err(|_| malformed())?;
    let minute: Minutes = minute_str.parse().map_err(|_| malformed())?;
    if minute >= MINUTES_PER_HOUR {
        return Err(malformed());
    }
    hour.checked_mul(MINUTES_PER_HOUR)
        .and_then(|m| m.checked_add(minute))
        .ok_or_else(malformed)
}

/// Lenient variant of [`parse_minutes`]: every malformed text yields 0.
pub fn time_to_minutes(text: &str) -> Minutes {
    parse_minutes(text).unwrap_or(0)
}

/// A time of day as written in the timetable together with its normalized minute value.
/// The text is kept for display, the minutes are used for comparisons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTime {
    text: String,
    minutes: Option<Minutes>,
}

impl ScheduledTime {
    pub fn new(text: &str) -> ScheduledTime {
        let minutes = parse_minutes(text).ok();
        if minutes.is_none() {
            warn!("Malformed time '{}' is treated as 00:00.", text);
        }
        ScheduledTime {
            text: String::from(text),
            minutes,
        }
    }

    pub fn from_minutes(minutes: Minutes) -> ScheduledTime {
        ScheduledTime {
            text: format!(
                "{:02}:{:02}",
                minutes / MINUTES_PER_HOUR,
                minutes % MINUTES_PER_HOUR
            ),
            minutes: Some(minutes),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Minutes since midnight; 0 if the text could not be parsed.
    pub fn minutes(&self) -> Minutes {
        self.minutes.unwrap_or(0)
    }

    pub fn is_valid(&self) -> bool {
        self.minutes.is_some()
    }

    /// Strict access to the minute value.
    pub fn checked_minutes(&self) -> Result<Minutes, ModelError> {
        self.minutes
            .ok_or_else(|| ModelError::MalformedTime(self.text.clone()))
    }
}

impl From<&str> for ScheduledTime {
    fn from(text: &str) -> ScheduledTime {
        ScheduledTime::new(text)
    }
}

impl fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for ScheduledTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for ScheduledTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ScheduledTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(ScheduledTime::new(&text))
    }
}
