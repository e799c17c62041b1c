// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for handling conversion to and from sexagesimal.
 */

use thiserror::Error;

use crate::constants::{DEGREES_PER_HOUR, MINUTES_PER_UNIT, SECONDS_PER_UNIT};

/// Convert a right ascension in hours, minutes and seconds to decimal degrees.
/// All fields are expected to be non-negative; no validation is done.
///
/// # Examples
///
/// ```
/// # use catmatch::coord::hms_to_degrees;
/// assert_eq!(hms_to_degrees(12.0, 0.0, 0.0), 180.0);
/// ```
pub fn hms_to_degrees(h: f64, m: f64, s: f64) -> f64 {
    DEGREES_PER_HOUR * (h + m / MINUTES_PER_UNIT + s / SECONDS_PER_UNIT)
}

/// Convert a declination in degrees, minutes and seconds to decimal degrees.
///
/// Only the sign of `d` determines the sign of the whole angle; `m` and `s`
/// are unsigned magnitudes. A `d` of zero (including -0.0) always yields a
/// non-negative angle; use [`Dms`] when a negative angle with zero degrees
/// must be represented.
///
/// # Examples
///
/// ```
/// # use catmatch::coord::dms_to_degrees;
/// assert_eq!(dms_to_degrees(-5.0, 30.0, 0.0), -5.5);
/// assert_eq!(dms_to_degrees(5.0, 30.0, 0.0), 5.5);
/// ```
pub fn dms_to_degrees(d: f64, m: f64, s: f64) -> f64 {
    if d >= 0.0 {
        d + m / MINUTES_PER_UNIT + s / SECONDS_PER_UNIT
    } else {
        -(d.abs() + m / MINUTES_PER_UNIT + s / SECONDS_PER_UNIT)
    }
}

/// The sign of a sexagesimal angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Get the sign of a textual sexagesimal field. Only a leading '-' makes
    /// the field negative, so "-00" is negative even though it parses to a
    /// number equal to zero.
    pub fn of_field(field: &str) -> Sign {
        if field.trim_start().starts_with('-') {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// A sexagesimal angle in "degrees minutes seconds" with its sign held
/// separately from the (unsigned) magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub sign: Sign,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    pub fn new(sign: Sign, degrees: f64, minutes: f64, seconds: f64) -> Dms {
        Dms {
            sign,
            degrees: degrees.abs(),
            minutes: minutes.abs(),
            seconds: seconds.abs(),
        }
    }

    /// Build a [`Dms`] from a textual degree field and numeric minutes and
    /// seconds. The sign is taken from the text of the degree field.
    ///
    /// # Examples
    ///
    /// ```
    /// # use catmatch::coord::*;
    /// # fn main() -> Result<(), SexagesimalError> {
    /// let dms = Dms::from_fields("-00", 30.0, 0.0)?;
    /// assert_eq!(dms.sign, Sign::Negative);
    /// assert_eq!(dms.to_degrees(), -0.5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_fields(d: &str, m: f64, s: f64) -> Result<Dms, SexagesimalError> {
        let degrees: f64 = d.trim().parse()?;
        Ok(Dms::new(Sign::of_field(d), degrees, m, s))
    }

    /// Convert to decimal degrees [degrees].
    pub fn to_degrees(self) -> f64 {
        let magnitude =
            self.degrees + self.minutes / MINUTES_PER_UNIT + self.seconds / SECONDS_PER_UNIT;
        match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

/// Split a string delimited by colons into its three fields.
fn colon_fields(s: &str) -> Result<[&str; 3], SexagesimalError> {
    let split: Vec<&str> = s.trim().split(':').collect();
    match split.as_slice() {
        &[a, b, c] => Ok([a, b, c]),
        _ => Err(SexagesimalError::WrongFieldCount(s.to_string())),
    }
}

/// Convert a sexagesimal-formatted string delimited by colons to a float
/// \[degrees\]. The input is assumed to be in "degrees minutes seconds".
///
/// # Examples
///
/// ```
/// # use catmatch::coord::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_colon_str_to_degrees("-22:58:52.56")?;
/// assert_abs_diff_eq!(f, -22.981267, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_colon_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let [d, m, s] = colon_fields(s)?;
    Ok(Dms::from_fields(d, m.parse()?, s.parse()?)?.to_degrees())
}

/// Convert a sexagesimal-formatted string delimited by colons to a float
/// \[degrees\]. The input is assumed to be in "hours minutes seconds".
pub fn sexagesimal_colon_hms_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let [h, m, s] = colon_fields(s)?;
    Ok(hms_to_degrees(h.parse()?, m.parse()?, s.parse()?))
}

/// Pull out the three fields of a string like "11h49m01.062s", where `unit`
/// is the separator following the first field ('h' or 'd').
fn unit_fields(input: &str, unit: char) -> Result<[&str; 3], SexagesimalError> {
    let missing_first = || match unit {
        'h' => SexagesimalError::MissingH(input.to_string()),
        _ => SexagesimalError::MissingD(input.to_string()),
    };
    let (first, rest) = input.trim().split_once(unit).ok_or_else(missing_first)?;
    let (m, rest) = rest
        .split_once('m')
        .ok_or_else(|| SexagesimalError::MissingM(input.to_string()))?;
    let (s, _) = rest
        .split_once('s')
        .ok_or_else(|| SexagesimalError::MissingS(input.to_string()))?;
    Ok([first, m, s])
}

/// Convert a sexagesimal-formatted string in "degrees minutes seconds" to a
/// float \[degrees\].
///
/// # Examples
///
/// ```
/// # use catmatch::coord::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_dms_string_to_degrees("-11d49m01.062s")?;
/// assert_abs_diff_eq!(f, -11.81696167, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_dms_string_to_degrees(dms: &str) -> Result<f64, SexagesimalError> {
    let [d, m, s] = unit_fields(dms, 'd')?;
    Ok(Dms::from_fields(d, m.parse()?, s.parse()?)?.to_degrees())
}

/// Convert a sexagesimal-formatted string in "hours minutes seconds" to a
/// float \[degrees\].
///
/// # Examples
///
/// ```
/// # use catmatch::coord::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_hms_string_to_degrees("11h34m23.7854s")?;
/// assert_abs_diff_eq!(f, 173.59910583, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_hms_string_to_degrees(hms: &str) -> Result<f64, SexagesimalError> {
    let [h, m, s] = unit_fields(hms, 'h')?;
    Ok(hms_to_degrees(h.parse()?, m.parse()?, s.parse()?))
}

/// Read a right ascension from user input. Plain numbers are taken as
/// degrees; "12h30m00s" and "12:30:00" are taken as hours.
pub fn parse_ra(s: &str) -> Result<f64, SexagesimalError> {
    if let Ok(f) = s.trim().parse() {
        return Ok(f);
    }
    if s.contains('h') {
        sexagesimal_hms_string_to_degrees(s)
    } else if s.contains(':') {
        sexagesimal_colon_hms_str_to_degrees(s)
    } else {
        Err(SexagesimalError::Unrecognised(s.to_string()))
    }
}

/// Read a declination from user input. Plain numbers are taken as degrees;
/// "-05d30m00s" and "-05:30:00" are taken as degrees minutes seconds.
pub fn parse_dec(s: &str) -> Result<f64, SexagesimalError> {
    if let Ok(f) = s.trim().parse() {
        return Ok(f);
    }
    if s.contains('d') {
        sexagesimal_dms_string_to_degrees(s)
    } else if s.contains(':') {
        sexagesimal_colon_str_to_degrees(s)
    } else {
        Err(SexagesimalError::Unrecognised(s.to_string()))
    }
}

/// Convert a number in degrees to a sexagesimal-formatted string in "degrees
/// minutes seconds".
///
/// # Examples
///
/// ```
/// # use catmatch::coord::*;
/// let dms = degrees_to_sexagesimal_dms(-165.0169619);
/// assert_eq!(dms, "-165d01m01.0628s");
/// ```
pub fn degrees_to_sexagesimal_dms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let degrees = f_abs.floor();
    let minutes = (f_abs - degrees) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;

    format!(
        "{sign}{deg}d{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        deg = degrees as u32,
        min = minutes.floor() as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4) as u32,
    )
}

/// Convert a number in degrees to a sexagesimal-formatted string in "hours
/// minutes seconds".
///
/// # Examples
///
/// ```
/// # use catmatch::coord::*;
/// let hms = degrees_to_sexagesimal_hms(177.254425);
/// assert_eq!(hms, "11h49m01.0619s");
/// ```
pub fn degrees_to_sexagesimal_hms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let hours = (f_abs / DEGREES_PER_HOUR).floor();
    let minutes = ((f_abs / DEGREES_PER_HOUR - hours) * 60.0).floor();
    let seconds = (((f_abs / DEGREES_PER_HOUR - hours) * 60.0) - minutes) * 60.0;

    format!(
        "{sign}{hrs}h{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        hrs = hours as u32,
        min = minutes as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4) as u32,
    )
}

#[derive(Error, Debug)]
pub enum SexagesimalError {
    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Did not find 'h' when attempting to read sexagesimal string: {0}")]
    MissingH(String),

    #[error("Did not find 'd' when attempting to read sexagesimal string: {0}")]
    MissingD(String),

    #[error("Did not find 'm' when attempting to read sexagesimal string: {0}")]
    MissingM(String),

    #[error("Did not find 's' when attempting to read sexagesimal string: {0}")]
    MissingS(String),

    #[error("Could not interpret '{0}' as a number or a sexagesimal angle")]
    Unrecognised(String),

    #[error("{0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
