// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Catalogue coordinates are kept in
degrees, and conversions to radians happen only inside the distance
calculation.
 */

/// The number of degrees of right ascension in one hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// The number of (arc)minutes in one hour or degree.
pub const MINUTES_PER_UNIT: f64 = 60.0;

/// The number of (arc)seconds in one hour or degree.
pub const SECONDS_PER_UNIT: f64 = 3600.0;

/// The number of arcminutes in a degree.
pub const ARCMIN_PER_DEGREE: f64 = 60.0;

/// The number of arcseconds in a degree.
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// When summarising a crossmatch, this many matches and non-matches are
/// listed by default.
pub const DEFAULT_NUM_PRINT: usize = 3;
