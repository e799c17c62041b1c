// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify catalogue files.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::{
    catalogue::CatalogueType,
    cli::common::{
        display_warnings, parse_catalogue_type, read_and_describe_catalogue,
        CATALOGUE_INPUT_TYPE_HELP,
    },
    CatmatchError,
};

/// Verify that catalogues can be read by catmatch.
#[derive(Parser, Debug)]
pub(crate) struct CatalogueVerifyArgs {
    /// Path to the catalogue(s) to be verified.
    #[clap(name = "CATALOGUES", parse(from_os_str))]
    pub(super) catalogues: Vec<PathBuf>,

    #[clap(short = 'i', long, help = CATALOGUE_INPUT_TYPE_HELP.as_str())]
    pub(super) input_type: Option<String>,
}

impl CatalogueVerifyArgs {
    /// Run [verify] with these arguments. If the `input_type` is given, then
    /// all provided catalogues are assumed to be of that type, otherwise each
    /// catalogue's type is guessed.
    pub(crate) fn run(&self) -> Result<(), CatmatchError> {
        let input_type = parse_catalogue_type(self.input_type.as_deref()).map_err(|s| {
            CatmatchError::Catalogue(format!("'{s}' is not a recognised catalogue type"))
        })?;
        let num_failed = verify(&self.catalogues, input_type)?;
        if num_failed > 0 {
            return Err(CatmatchError::Catalogue(format!(
                "{num_failed} of {} catalogues could not be read",
                self.catalogues.len()
            )));
        }
        Ok(())
    }
}

/// Read and print stats out for each input catalogue. If a catalogue couldn't
/// be read, print the error, and continue trying to read the other
/// catalogues. The number of catalogues that couldn't be read is returned.
fn verify<P: AsRef<Path>>(
    catalogues: &[P],
    input_type: Option<CatalogueType>,
) -> Result<usize, CatmatchError> {
    if catalogues.is_empty() {
        return Err(CatmatchError::Generic(
            "No catalogues were supplied!".to_string(),
        ));
    }

    let mut num_failed = 0;
    for catalogue in catalogues {
        match read_and_describe_catalogue(catalogue.as_ref(), input_type) {
            Ok((_, block)) => {
                let mut lines = block.into_iter();
                if let Some(name) = lines.next() {
                    info!("{name}:");
                }
                for line in lines {
                    info!("    {line}");
                }
            }
            Err(e) => {
                num_failed += 1;
                info!("{}:", catalogue.as_ref().display());
                info!("    {e}");
            }
        }
        display_warnings();
        info!("");
    }

    Ok(num_failed)
}
