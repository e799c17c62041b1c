// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_hms_to_degrees() {
    assert_eq!(hms_to_degrees(0.0, 0.0, 0.0), 0.0);
    assert_eq!(hms_to_degrees(12.0, 0.0, 0.0), 180.0);
    assert_abs_diff_eq!(hms_to_degrees(23.0, 12.0, 6.0), 348.025, epsilon = 1e-10);
    assert_abs_diff_eq!(hms_to_degrees(0.0, 0.0, 1.0), 15.0 / 3600.0, epsilon = 1e-15);
}

#[test]
fn test_dms_to_degrees() {
    assert_eq!(dms_to_degrees(-5.0, 30.0, 0.0), -5.5);
    assert_eq!(dms_to_degrees(5.0, 30.0, 0.0), 5.5);
    assert_abs_diff_eq!(dms_to_degrees(22.0, 57.0, 18.0), 22.955, epsilon = 1e-10);
    assert_abs_diff_eq!(dms_to_degrees(-66.0, 5.0, 2.2), -66.08394444, epsilon = 1e-8);
}

#[test]
fn test_dms_to_degrees_sign_only_from_degrees() {
    // Zero degrees can't carry a negative sign in a float comparison; -0.0
    // behaves the same as 0.0.
    assert_eq!(dms_to_degrees(0.0, 30.0, 0.0), 0.5);
    assert_eq!(dms_to_degrees(-0.0, 30.0, 0.0), 0.5);
    // The minutes and seconds are magnitudes; the degrees set the sign.
    assert_abs_diff_eq!(dms_to_degrees(-1.0, 30.0, 36.0), -1.51, epsilon = 1e-12);
}

#[test]
fn test_dms_keeps_sign_with_zero_degrees() {
    let dms = Dms::new(Sign::Negative, 0.0, 30.0, 0.0);
    assert_eq!(dms.to_degrees(), -0.5);

    let dms = Dms::new(Sign::Positive, 0.0, 30.0, 0.0);
    assert_eq!(dms.to_degrees(), 0.5);

    let result = Dms::from_fields("-00", 30.0, 0.0);
    assert!(result.is_ok(), "{}", result.unwrap_err());
    let dms = result.unwrap();
    assert_eq!(dms.sign, Sign::Negative);
    assert_eq!(dms.degrees, 0.0);
    assert_eq!(dms.to_degrees(), -0.5);

    let dms = Dms::from_fields("+12", 0.0, 36.0).unwrap();
    assert_eq!(dms.sign, Sign::Positive);
    assert_abs_diff_eq!(dms.to_degrees(), 12.01, epsilon = 1e-12);

    assert!(Dms::from_fields("twelve", 0.0, 0.0).is_err());
}

#[test]
fn test_dms_agrees_with_dms_to_degrees() {
    for (d, m, s) in [(-5.0, 30.0, 0.0), (5.0, 30.0, 0.0), (-89.0, 59.0, 59.9)] {
        let sign = if d < 0.0 { Sign::Negative } else { Sign::Positive };
        assert_eq!(
            Dms::new(sign, d, m, s).to_degrees(),
            dms_to_degrees(d, m, s)
        );
    }
}

#[test]
fn test_sex2float_1() {
    let result = sexagesimal_colon_str_to_degrees("-22:58:52.56");
    assert!(result.is_ok());
    assert_abs_diff_eq!(result.unwrap(), -22.981266666666667, epsilon = 1e-10);
}

#[test]
fn test_sex2float_2() {
    let result = sexagesimal_colon_str_to_degrees("12:30:45");
    assert!(result.is_ok());
    assert_abs_diff_eq!(result.unwrap(), 12.5125, epsilon = 1e-10);
}

#[test]
fn test_sex2float_negative_zero() {
    let result = sexagesimal_colon_str_to_degrees("-00:30:00");
    assert!(result.is_ok());
    assert_abs_diff_eq!(result.unwrap(), -0.5, epsilon = 1e-10);
}

#[test]
fn test_sex2float_wrong_field_count() {
    let result = sexagesimal_colon_str_to_degrees("12:30");
    assert!(matches!(result, Err(SexagesimalError::WrongFieldCount(_))));
}

#[test]
fn test_sex_hms_1() {
    let result = sexagesimal_hms_string_to_degrees("11h34m23.7854s");
    assert!(result.is_ok(), "{}", result.unwrap_err());
    assert_abs_diff_eq!(result.unwrap(), 173.59910583333334);
}

#[test]
fn test_sex_dms_missing_fields() {
    assert!(matches!(
        sexagesimal_dms_string_to_degrees("11"),
        Err(SexagesimalError::MissingD(_))
    ));
    assert!(matches!(
        sexagesimal_dms_string_to_degrees("11d30"),
        Err(SexagesimalError::MissingM(_))
    ));
    assert!(matches!(
        sexagesimal_hms_string_to_degrees("11h30m12"),
        Err(SexagesimalError::MissingS(_))
    ));
}

#[test]
fn test_parse_ra_and_dec() {
    assert_abs_diff_eq!(parse_ra("180.5").unwrap(), 180.5);
    assert_abs_diff_eq!(parse_ra("12h00m00s").unwrap(), 180.0);
    assert_abs_diff_eq!(parse_ra("12:00:36").unwrap(), 180.15, epsilon = 1e-10);
    assert!(matches!(
        parse_ra("noon"),
        Err(SexagesimalError::Unrecognised(_))
    ));

    assert_abs_diff_eq!(parse_dec("-45.25").unwrap(), -45.25);
    assert_abs_diff_eq!(parse_dec("-05d30m00s").unwrap(), -5.5);
    assert_abs_diff_eq!(parse_dec("-00:30:00").unwrap(), -0.5);
}

#[test]
fn test_degrees_to_sexagesimal() {
    assert_eq!(degrees_to_sexagesimal_dms(-165.0169619), "-165d01m01.0628s");
    assert_eq!(degrees_to_sexagesimal_hms(177.254425), "11h49m01.0619s");
    assert_eq!(degrees_to_sexagesimal_dms(-0.5), "-0d30m00.0000s");
}

#[test]
fn test_radec_from_sexagesimal() {
    let radec = RADec::from_sexagesimal(
        (0.0, 2.0, 26.0),
        Dms::from_fields("-01", 31.0, 19.0).unwrap(),
    );
    assert_abs_diff_eq!(radec.ra, 0.6083333333, epsilon = 1e-9);
    assert_abs_diff_eq!(radec.dec, -1.5219444444, epsilon = 1e-9);
}

#[test]
fn test_radec_separation() {
    let a = RADec::from_degrees(10.0, 20.0);
    let b = RADec::from_degrees(10.0, 21.0);
    assert_abs_diff_eq!(a.separation(b), 1.0, epsilon = 1e-10);
    assert_eq!(a.separation(b), b.separation(a));
    assert_eq!(a.separation(a), 0.0);
}
