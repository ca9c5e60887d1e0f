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

pub mod aggregation;
pub mod capacity;
pub mod conflict;
pub mod csv_export;
pub mod detector;
pub mod error;
pub mod grouping;
pub mod json_serialisation;
pub mod overlap;
pub mod test_utilities;

pub use conflict::Conflict;
pub use detector::{detect_conflicts, ConflictDetector};
pub use error::DetectionError;
