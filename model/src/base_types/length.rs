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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A length in meter (vehicle lengths and platform capacities).
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(f64);

// static functions:
impl Length {
    pub const ZERO: Length = Length(0.0);

    pub fn from_meter(m: f64) -> Length {
        Length(m)
    }
}

// methods:
impl Length {
    pub fn in_meter(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Length(self.0 + other.0)
    }
}

impl Sub for Length {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Length(self.0 - other.0)
    }
}

impl std::iter::Sum<Self> for Length {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Length::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // integral lengths are printed without decimals ("12", not "12.0")
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_lengths() {
        let lengths = vec![
            Length::from_meter(12.0),
            Length::from_meter(18.0),
            Length::from_meter(2.5),
        ];
        let sum: Length = lengths.into_iter().sum();
        assert_eq!(sum, Length::from_meter(32.5));
    }

    #[test]
    fn display_without_trailing_zeros() {
        assert_eq!(format!("{}", Length::from_meter(25.0)), "25");
        assert_eq!(format!("{}", Length::from_meter(12.5)), "12.5");
    }

    #[test]
    fn sub_can_become_negative() {
        let diff = Length::from_meter(24.0) - Length::from_meter(25.0);
        assert!(!diff.is_positive());
    }
}
