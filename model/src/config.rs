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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yaml_rust::yaml::Yaml;
use yaml_rust::YamlLoader;

use crate::base_types::Minutes;
use crate::error::ConfigError;

/// Tolerance in minutes by which each visit's window is widened on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TimeBuffer(Minutes);

impl TimeBuffer {
    pub const MIN: Minutes = 1;
    pub const MAX: Minutes = 10;
    pub const DEFAULT: TimeBuffer = TimeBuffer(2);

    pub fn new(minutes: i64) -> Result<TimeBuffer, ConfigError> {
        if minutes < TimeBuffer::MIN as i64 || minutes > TimeBuffer::MAX as i64 {
            return Err(ConfigError::TimeBufferOutOfRange {
                value: minutes,
                min: TimeBuffer::MIN,
                max: TimeBuffer::MAX,
            });
        }
        Ok(TimeBuffer(minutes as Minutes))
    }

    pub fn minutes(&self) -> Minutes {
        self.0
    }

    /// All valid buffers in increasing order.
    pub fn all() -> impl Iterator<Item = TimeBuffer> {
        (TimeBuffer::MIN..=TimeBuffer::MAX).map(TimeBuffer)
    }
}

impl Default for TimeBuffer {
    fn default() -> Self {
        TimeBuffer::DEFAULT
    }
}

impl fmt::Display for TimeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}

impl<'de> Deserialize<'de> for TimeBuffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<TimeBuffer, D::Error> {
        let minutes = i64::deserialize(deserializer)?;
        TimeBuffer::new(minutes).map_err(serde::de::Error::custom)
    }
}

/// How conflicts are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictMode {
    /// One conflict per anchor visit. Mutual overlaps show up once per participant.
    #[default]
    Anchored,
    /// One conflict per cluster of anchored conflicts that share visits.
    Grouped,
}

/// Which capacity applies to the visits of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapacityPolicy {
    /// All visits of a platform must state the same capacity.
    #[default]
    Uniform,
    /// The capacity of the first visit (table order) applies to the whole platform.
    FirstSeen,
    /// Each anchor is checked against its own capacity.
    AnchorVisit,
}

/// Treatment of unparsable arrival or departure times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeParsing {
    /// Malformed times count as 00:00.
    #[default]
    Lenient,
    /// Malformed times abort the detection.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlapStrategy {
    AllPairs,
    #[default]
    Sweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub time_buffer: TimeBuffer,
    pub mode: ConflictMode,
    pub capacity_policy: CapacityPolicy,
    pub time_parsing: TimeParsing,
    pub overlap_strategy: OverlapStrategy,
}

impl Config {
    pub fn with_time_buffer(self, time_buffer: TimeBuffer) -> Config {
        Config {
            time_buffer,
            ..self
        }
    }

    pub fn with_mode(self, mode: ConflictMode) -> Config {
        Config { mode, ..self }
    }

    pub fn with_capacity_policy(self, capacity_policy: CapacityPolicy) -> Config {
        Config {
            capacity_policy,
            ..self
        }
    }

    pub fn with_time_parsing(self, time_parsing: TimeParsing) -> Config {
        Config {
            time_parsing,
            ..self
        }
    }

    pub fn with_overlap_strategy(self, overlap_strategy: OverlapStrategy) -> Config {
        Config {
            overlap_strategy,
            ..self
        }
    }

    pub fn from_yaml(path: &str) -> Result<Config, ConfigError> {
        let config_string = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {}", path, e)))?;
        Config::from_yaml_str(&config_string)
    }

    /// Reads a config of the form
    /// ```yaml
    /// time_buffer: 2
    /// mode: anchored            # or grouped
    /// capacity_policy: uniform  # or first_seen, anchor_visit
    /// time_parsing: lenient     # or strict
    /// overlap_strategy: sweep   # or all_pairs
    /// ```
    /// Missing keys keep their default.
    pub fn from_yaml_str(config_string: &str) -> Result<Config, ConfigError> {
        let documents = YamlLoader::load_from_str(config_string)
            .map_err(|e| ConfigError::Unreadable(e.to_string()))?;
        let config = match documents.first() {
            Some(doc) => doc,
            None => return Ok(Config::default()),
        };

        fn enum_from_yaml<T: FromStr<Err = ConfigError>>(
            yaml: &Yaml,
            key: &str,
            default: T,
        ) -> Result<T, ConfigError> {
            match yaml {
                Yaml::BadValue | Yaml::Null => Ok(default),
                Yaml::String(s) => s.parse(),
                other => Err(ConfigError::InvalidValue {
                    key: String::from(key),
                    value: format!("{:?}", other),
                }),
            }
        }

        let defaults = Config::default();
        let time_buffer = match &config["time_buffer"] {
            Yaml::BadValue | Yaml::Null => defaults.time_buffer,
            Yaml::Integer(int) => TimeBuffer::new(*int)?,
            other => {
                return Err(ConfigError::InvalidValue {
                    key: String::from("time_buffer"),
                    value: format!("{:?}", other),
                })
            }
        };

        Ok(Config {
            time_buffer,
            mode: enum_from_yaml(&config["mode"], "mode", defaults.mode)?,
            capacity_policy: enum_from_yaml(
                &config["capacity_policy"],
                "capacity_policy",
                defaults.capacity_policy,
            )?,
            time_parsing: enum_from_yaml(
                &config["time_parsing"],
                "time_parsing",
                defaults.time_parsing,
            )?,
            overlap_strategy: enum_from_yaml(
                &config["overlap_strategy"],
                "overlap_strategy",
                defaults.overlap_strategy,
            )?,
        })
    }

    /// Reads the `config` object of a json instance (camelCase keys, all optional).
    pub fn from_json(value: serde_json::Value) -> Result<Config, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Unreadable(e.to_string()))
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: String::from(key),
        value: String::from(value),
    }
}

impl FromStr for ConflictMode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anchored" => Ok(ConflictMode::Anchored),
            "grouped" => Ok(ConflictMode::Grouped),
            _ => Err(invalid("mode", s)),
        }
    }
}

impl FromStr for CapacityPolicy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(CapacityPolicy::Uniform),
            "first_seen" => Ok(CapacityPolicy::FirstSeen),
            "anchor_visit" => Ok(CapacityPolicy::AnchorVisit),
            _ => Err(invalid("capacity_policy", s)),
        }
    }
}

impl FromStr for TimeParsing {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(TimeParsing::Lenient),
            "strict" => Ok(TimeParsing::Strict),
            _ => Err(invalid("time_parsing", s)),
        }
    }
}

impl FromStr for OverlapStrategy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_pairs" => Ok(OverlapStrategy::AllPairs),
            "sweep" => Ok(OverlapStrategy::Sweep),
            _ => Err(invalid("overlap_strategy", s)),
        }
    }
}
