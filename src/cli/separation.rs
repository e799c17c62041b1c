// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print the angular separation between two positions.

use clap::Parser;
use log::info;

use crate::{
    constants::{ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE},
    coord::{parse_dec, parse_ra, RADec},
    CatmatchError,
};

/// Print the great-circle distance between two positions on the sky.
/// Positions may be given in degrees or sexagesimal (e.g. 12h30m00s
/// -30d15m00s).
#[derive(Parser, Debug)]
pub(super) struct SeparationArgs {
    #[clap(name = "RA1", allow_hyphen_values = true)]
    ra1: String,

    #[clap(name = "DEC1", allow_hyphen_values = true)]
    dec1: String,

    #[clap(name = "RA2", allow_hyphen_values = true)]
    ra2: String,

    #[clap(name = "DEC2", allow_hyphen_values = true)]
    dec2: String,
}

impl SeparationArgs {
    pub(super) fn run(&self) -> Result<(), CatmatchError> {
        let dist = self.separation()?;
        info!(
            "Separation: {dist}° ({}' or {}\")",
            dist * ARCMIN_PER_DEGREE,
            dist * ARCSEC_PER_DEGREE
        );
        Ok(())
    }

    fn separation(&self) -> Result<f64, CatmatchError> {
        let a = RADec::from_degrees(parse_ra(&self.ra1)?, parse_dec(&self.dec1)?);
        let b = RADec::from_degrees(parse_ra(&self.ra2)?, parse_dec(&self.dec2)?);
        info!("{a} to {b}");
        Ok(a.separation(b))
    }
}
