// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the catalogue entry closest to a position.

use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::{
    cli::common::{
        display_warnings, parse_catalogue_type, read_and_describe_catalogue, InfoPrinter,
        CATALOGUE_TYPE_HELP,
    },
    constants::ARCSEC_PER_DEGREE,
    coord::{degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms, parse_dec, parse_ra, RADec},
    crossmatch::find_closest_radec,
    CatmatchError,
};

/// Find the entry of a catalogue that is closest to a position on the sky.
#[derive(Parser, Debug)]
pub(crate) struct ClosestArgs {
    /// Path to the catalogue to search.
    #[clap(name = "CATALOGUE", parse(from_os_str))]
    pub(super) catalogue: PathBuf,

    /// The right ascension of the position. Either degrees (e.g. 187.5) or
    /// hours minutes seconds (e.g. 12h30m00s or 12:30:00).
    #[clap(name = "RA", allow_hyphen_values = true)]
    pub(super) ra: String,

    /// The declination of the position. Either degrees (e.g. -30.5) or
    /// degrees minutes seconds (e.g. -30d30m00s or -30:30:00).
    #[clap(name = "DEC", allow_hyphen_values = true)]
    pub(super) dec: String,

    #[clap(short = 'i', long, help = CATALOGUE_TYPE_HELP.as_str())]
    pub(super) input_type: Option<String>,
}

impl ClosestArgs {
    pub(crate) fn run(&self) -> Result<(), CatmatchError> {
        let (id, radec, dist) = self.find()?;

        let mut printer = InfoPrinter::new("Closest entry".into());
        printer.push_block(vec![
            format!("Entry {id}").into(),
            format!(
                "{radec} ({} {})",
                degrees_to_sexagesimal_hms(radec.ra),
                degrees_to_sexagesimal_dms(radec.dec)
            )
            .into(),
        ]);
        printer.push_line(
            format!(
                "Separation: {dist:.6}° ({:.3}\")",
                dist * ARCSEC_PER_DEGREE
            )
            .into(),
        );
        printer.display();
        Ok(())
    }

    /// Get the identifier and position of the closest entry, and the distance
    /// to it [degrees].
    pub(super) fn find(&self) -> Result<(usize, RADec, f64), CatmatchError> {
        let position = RADec::from_degrees(parse_ra(&self.ra)?, parse_dec(&self.dec)?);
        debug!("Searching for the entry closest to {position}");
        let input_type = parse_catalogue_type(self.input_type.as_deref()).map_err(|s| {
            CatmatchError::Catalogue(format!("'{s}' is not a recognised catalogue type"))
        })?;

        let (catalogue, block) = read_and_describe_catalogue(&self.catalogue, input_type)?;
        let mut printer = InfoPrinter::new("Searching".into());
        printer.push_block(block);
        printer.push_line(format!("Position: {position}").into());
        printer.display();
        display_warnings();

        let (id, dist) = find_closest_radec(&catalogue, position)?;
        let entry = catalogue.get_by_id(id).ok_or_else(|| {
            CatmatchError::Generic(format!("Entry {id} disappeared from the catalogue"))
        })?;
        Ok((id, entry.radec, dist))
    }
}
