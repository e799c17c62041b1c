// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::CATALOGUE_TYPES_COMMA_SEPARATED;

/// Errors associated with reading in any kind of catalogue.
#[derive(Error, Debug)]
pub enum ReadCatalogueError {
    #[error("Catalogue line {line_num}: Could not parse '{string}' as a float")]
    ParseFloat { line_num: u32, string: String },

    #[error("Catalogue line {line_num}: Expected at least {expected} columns, but found {got}")]
    IncompleteLine {
        line_num: u32,
        expected: usize,
        got: usize,
    },

    #[error("Catalogue line {line_num}: RA {ra}° is out of range (0° <= RA < 360°)")]
    InvalidRa { line_num: u32, ra: f64 },

    #[error("Catalogue line {line_num}: Dec {dec}° is out of range (-90° <= Dec <= 90°)")]
    InvalidDec { line_num: u32, dec: f64 },

    #[error("The catalogue is empty, but a header row was expected")]
    MissingHeader,

    #[error("Could not interpret the contents of the catalogue. Specify which type of catalogue it is ({}), and a more specific error can be shown.", *CATALOGUE_TYPES_COMMA_SEPARATED)]
    FailedToReadAsAnyType,

    #[error("Could not read the CSV catalogue: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl ReadCatalogueError {
    /// Check that a coordinate read from a catalogue is sensible. This is the
    /// only place coordinates are validated; the crossmatching code trusts
    /// what it's given.
    pub(super) fn check_radec(line_num: u32, ra: f64, dec: f64) -> Result<(), ReadCatalogueError> {
        if !(0.0..360.0).contains(&ra) {
            return Err(ReadCatalogueError::InvalidRa { line_num, ra });
        }
        if !(-90.0..=90.0).contains(&dec) {
            return Err(ReadCatalogueError::InvalidDec { line_num, dec });
        }
        Ok(())
    }
}
