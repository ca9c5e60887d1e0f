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

use model::base_types::{Length, PlatformId, TripId, VisitIdx};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// Under the uniform capacity policy a platform stated two different capacities.
    #[error(
        "platform {platform}: trip {trip_id} states a capacity of {found}m, \
         but {expected}m was stated before"
    )]
    InconsistentCapacity {
        platform: PlatformId,
        trip_id: TripId,
        expected: Length,
        found: Length,
    },
    /// Under strict time parsing a visit carries an unparsable arrival or departure.
    #[error("trip {trip_id} (visit {visit}) has the malformed time '{text}'")]
    MalformedTime {
        visit: VisitIdx,
        trip_id: TripId,
        text: String,
    },
}
