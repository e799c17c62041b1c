// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of whitespace-delimited sexagesimal catalogues, e.g. the AT20G
//! Bright Source Sample table.
//!
//! Each row has (at least) seven columns:
//!
//! `NAME RA_H RA_M RA_S DEC_D DEC_M DEC_S [anything else ...]`
//!
//! The sign of the declination is read from the text of the `DEC_D` column,
//! so "-00 30 00" is -0.5°.

use log::trace;

use super::{Catalogue, ReadCatalogueError};
use crate::{
    cli::Warn,
    coord::{hms_to_degrees, Dms, RADec, Sign},
};

const NUM_COLUMNS: usize = 7;

/// Parse a buffer containing a whitespace-delimited sexagesimal catalogue.
pub fn parse_sexagesimal_catalogue<T: std::io::BufRead>(
    buf: &mut T,
) -> Result<Catalogue, ReadCatalogueError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut catalogue = Catalogue::new();

    let parse_float = |string: &str, line_num: u32| -> Result<f64, ReadCatalogueError> {
        string.parse().map_err(|_| ReadCatalogueError::ParseFloat {
            line_num,
            string: string.to_string(),
        })
    };

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;

        // Handle lines that aren't intended to parsed (comments and blank
        // lines).
        if line.trim_start().starts_with('#') || line.trim().is_empty() {
            line.clear();
            continue;
        }

        let items: Vec<&str> = line.split_ascii_whitespace().collect();
        if items.len() < NUM_COLUMNS {
            return Err(ReadCatalogueError::IncompleteLine {
                line_num,
                expected: NUM_COLUMNS,
                got: items.len(),
            });
        }

        let ra_h = parse_float(items[1], line_num)?;
        let ra_m = parse_float(items[2], line_num)?;
        let ra_s = parse_float(items[3], line_num)?;
        let dec_d = parse_float(items[4], line_num)?;
        let dec_m = parse_float(items[5], line_num)?;
        let dec_s = parse_float(items[6], line_num)?;

        for (field, value) in [
            ("RA minutes", ra_m),
            ("RA seconds", ra_s),
            ("Dec minutes", dec_m),
            ("Dec seconds", dec_s),
        ] {
            if !(0.0..60.0).contains(&value) {
                format!("Catalogue line {line_num}: {field} ({value}) is outside of 0 to 60")
                    .warn();
            }
        }

        let dec = Dms::new(Sign::of_field(items[4]), dec_d, dec_m, dec_s).to_degrees();
        let ra = hms_to_degrees(ra_h, ra_m, ra_s);
        ReadCatalogueError::check_radec(line_num, ra, dec)?;

        let id = catalogue.push(RADec::from_degrees(ra, dec));
        trace!("Catalogue line {line_num}: {} is entry {id}", items[0]);

        line.clear();
    }

    Ok(catalogue)
}
