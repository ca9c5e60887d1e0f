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

use derive_more::Display;
use derive_more::From;
use serde::{Deserialize, Serialize};

pub mod length;

pub use length::Length;

pub type Idx = usize;

/// Minutes since midnight.
pub type Minutes = u32;

/// Position of a visit in its `Visits` arena (table order). Two visits with identical fields
/// are still distinct as long as their indices differ.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisitIdx(pub Idx);

impl VisitIdx {
    pub fn idx(&self) -> Idx {
        self.0
    }
}

#[derive(
    Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LineId(pub String);

#[derive(
    Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TripId(pub String);

/// Identifier of a shared physical edge (Haltekante).
#[derive(
    Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlatformId(pub String);

#[derive(
    Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StopName(pub String);

impl From<&str> for LineId {
    fn from(s: &str) -> LineId {
        LineId(String::from(s))
    }
}

impl From<&str> for TripId {
    fn from(s: &str) -> TripId {
        TripId(String::from(s))
    }
}

impl From<&str> for PlatformId {
    fn from(s: &str) -> PlatformId {
        PlatformId(String::from(s))
    }
}

impl From<&str> for StopName {
    fn from(s: &str) -> StopName {
        StopName(String::from(s))
    }
}
