// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of comma-separated catalogues, e.g. a SuperCOSMOS all-sky
//! extract.
//!
//! The first row is a header and is skipped. The first two columns of every
//! other row are RA and Dec in decimal degrees; other columns are ignored.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, trace};

use super::{Catalogue, ReadCatalogueError};
use crate::{cli::Warn, coord::RADec};

const NUM_COLUMNS: usize = 2;

/// Comment lines and lines with only whitespace don't hold an entry.
fn is_blank_or_comment(record: &StringRecord) -> bool {
    match record.get(0) {
        Some(first) if first.starts_with('#') => true,
        _ => record.iter().all(|field| field.is_empty()),
    }
}

/// Parse a buffer containing a comma-separated catalogue.
pub fn parse_csv_catalogue<T: std::io::BufRead>(
    buf: &mut T,
) -> Result<Catalogue, ReadCatalogueError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(buf);
    let mut catalogue = Catalogue::new();

    let header = reader.headers()?;
    if header.is_empty() {
        return Err(ReadCatalogueError::MissingHeader);
    }
    debug!("CSV catalogue header: {}", header.iter().collect::<Vec<_>>().join(","));
    if header
        .iter()
        .take(NUM_COLUMNS)
        .all(|s| s.parse::<f64>().is_ok())
    {
        "The first row of the CSV catalogue looks like data, but it is always treated as a header"
            .warn();
    }

    for record in reader.records() {
        let record = record?;
        let line_num = record.position().map_or(0, |p| p.line() as u32);
        if is_blank_or_comment(&record) {
            continue;
        }

        if record.len() < NUM_COLUMNS {
            return Err(ReadCatalogueError::IncompleteLine {
                line_num,
                expected: NUM_COLUMNS,
                got: record.len(),
            });
        }

        let mut floats = [0.0; NUM_COLUMNS];
        for (f, s) in floats.iter_mut().zip(record.iter()) {
            *f = s.parse().map_err(|_| ReadCatalogueError::ParseFloat {
                line_num,
                string: s.to_string(),
            })?;
        }
        let [ra, dec] = floats;
        ReadCatalogueError::check_radec(line_num, ra, dec)?;

        let id = catalogue.push(RADec::from_degrees(ra, dec));
        trace!("Catalogue line {line_num} is entry {id}");
    }

    Ok(catalogue)
}
