// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into plain numbers or some quantity with a unit.

mod error;

pub(crate) use error::*;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::constants::{ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE};

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
#[allow(non_camel_case_types)]
pub(crate) enum AngleFormat {
    /// Degrees
    deg,

    /// Arcminutes
    arcmin,

    /// Arcseconds
    arcsec,

    NoUnit,
}

impl AngleFormat {
    /// Convert a value in this unit to degrees. Values without a unit are
    /// already in degrees.
    pub(crate) fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleFormat::deg | AngleFormat::NoUnit => value,
            AngleFormat::arcmin => value / ARCMIN_PER_DEGREE,
            AngleFormat::arcsec => value / ARCSEC_PER_DEGREE,
        }
    }
}

/// Parse a string that may have a unit of angle attached to it.
pub(crate) fn parse_angle(s: &str) -> Result<(f64, AngleFormat), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, AngleFormat::NoUnit));
    };

    // That didn't work; let's search over our supported formats. The
    // number in front of the unit may be in scientific notation.
    let lower = s.trim().to_lowercase();
    for angle_format in AngleFormat::iter().filter(|&af| af != AngleFormat::NoUnit) {
        let angle_format_str: &'static str = angle_format.into();
        let prefix = match lower.strip_suffix(angle_format_str) {
            Some(p) => p.trim(),
            None => continue,
        };
        if !prefix
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e'))
        {
            continue;
        }
        return match prefix.parse() {
            Ok(number) => Ok((number, angle_format)),
            Err(_) => Err(UnitParseError::GotAngleUnitButCantParse {
                input: s.to_string(),
                unit: angle_format_str,
            }),
        };
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "angle",
    })
}

/// Parse a string that may have a unit of angle attached to it, returning the
/// value in degrees.
pub(crate) fn parse_angle_degrees(s: &str) -> Result<f64, UnitParseError> {
    let (value, format) = parse_angle(s)?;
    Ok(format.to_degrees(value))
}
