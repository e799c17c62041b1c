// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


/// The great-circle separation between two celestial coordinates. All
/// arguments and the result are in degrees.
///
/// This uses the haversine formula, which is well conditioned for small
/// separations. The right ascension difference is used as-is; sin² of half
/// the difference is the same for a difference and its 360° complement, so no
/// wrapping is required.
///
/// The result is always within [0°, 180°] for finite inputs and is exactly
/// 0° for identical coordinates. Non-finite inputs give NaN.
///
/// # Examples
///
/// ```
/// # use catmatch::math::angular_distance;
/// # use approx::assert_abs_diff_eq;
/// assert_abs_diff_eq!(angular_distance(180.0, 0.0, 180.0, 1.0), 1.0, epsilon = 1e-12);
/// assert_eq!(angular_distance(10.0, -30.0, 10.0, -30.0), 0.0);
/// ```
pub fn angular_distance(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let r1 = ra1.to_radians();
    let r2 = ra2.to_radians();
    let d1 = dec1.to_radians();
    let d2 = dec2.to_radians();

    let a = sin_squared((d1 - d2).abs() / 2.0);
    let b = d1.cos() * d2.cos() * sin_squared((r1 - r2).abs() / 2.0);

    // Rounding can push the sum a hair over 1 for antipodal points. Don't use
    // `f64::min` here; it would swallow a NaN.
    let h = a + b;
    let h = if h > 1.0 { 1.0 } else { h };
    (2.0 * h.sqrt().asin()).to_degrees()
}

#[inline]
fn sin_squared(x: f64) -> f64 {
    let s = x.sin();
    s * s
}
