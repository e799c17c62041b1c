// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Here, we abstract aspects of
//! `catmatch` shared between subcommands, e.g. `crossmatch`,
//! `catalogue-verify` and `closest` all read catalogue files and may be told
//! what type a catalogue is.

mod printers;

pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use std::{path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::catalogue::{
    read_catalogue_file, Catalogue, CatalogueType, ReadCatalogueError,
    CATALOGUE_TYPES_COMMA_SEPARATED,
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref CATALOGUE_TYPE_HELP: String =
        format!("The type of catalogue. Valid types are: {}. If not specified, the type is guessed from the file extension, and then all types are attempted", *CATALOGUE_TYPES_COMMA_SEPARATED);

    pub(super) static ref CATALOGUE_INPUT_TYPE_HELP: String =
        format!("Specifies the type of the input catalogue(s). Currently supported types: {}", *CATALOGUE_TYPES_COMMA_SEPARATED);
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(CatmatchError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(CatmatchError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(CatmatchError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Turn a user-supplied catalogue type into a [`CatalogueType`]. `Err` holds
/// the unrecognised string.
pub(super) fn parse_catalogue_type(
    catalogue_type: Option<&str>,
) -> Result<Option<CatalogueType>, String> {
    match catalogue_type {
        None => Ok(None),
        Some(s) => CatalogueType::from_str(&s.to_lowercase())
            .map(Some)
            .map_err(|_| s.to_string()),
    }
}

/// Read a catalogue and describe it in the returned block of lines, which is
/// suitable for an [`InfoPrinter`].
pub(super) fn read_and_describe_catalogue(
    path: &Path,
    catalogue_type: Option<CatalogueType>,
) -> Result<(Catalogue, Vec<std::borrow::Cow<'static, str>>), ReadCatalogueError> {
    debug!("Reading catalogue {}", path.display());
    let (catalogue, catalogue_type) = read_catalogue_file(path, catalogue_type)?;

    let mut block = vec![
        format!("{}", path.display()).into(),
        format!("{catalogue_type} catalogue with {} entries", catalogue.len()).into(),
    ];
    if let (Some((ra_min, ra_max)), Some((dec_min, dec_max))) =
        (catalogue.ra_range(), catalogue.dec_range())
    {
        block.push(format!("RA range:  {ra_min:.6}° to {ra_max:.6}°").into());
        block.push(format!("Dec range: {dec_min:.6}° to {dec_max:.6}°").into());
    }
    Ok((catalogue, block))
}
