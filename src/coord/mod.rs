// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Celestial coordinates and conversions from sexagesimal.

mod sexagesimal;
#[cfg(test)]
mod tests;

pub use sexagesimal::*;

use crate::math::angular_distance;

/// A struct containing a Right Ascension and Declination. All units are in
/// degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RADec {
    /// Right ascension [degrees]
    pub ra: f64,
    /// Declination [degrees]
    pub dec: f64,
}

impl RADec {
    /// Make a new `RADec` struct from values in degrees.
    pub fn from_degrees(ra: f64, dec: f64) -> RADec {
        Self { ra, dec }
    }

    /// Make a new `RADec` from a right ascension in hours, minutes and seconds
    /// and a signed declination.
    pub fn from_sexagesimal((h, m, s): (f64, f64, f64), dec: Dms) -> RADec {
        Self {
            ra: hms_to_degrees(h, m, s),
            dec: dec.to_degrees(),
        }
    }

    /// Get the great-circle separation between two coordinates [degrees].
    pub fn separation(self, other: RADec) -> f64 {
        angular_distance(self.ra, self.dec, other.ra, other.dec)
    }
}

impl std::fmt::Display for RADec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.ra, self.dec)
    }
}
