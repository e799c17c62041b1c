// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common code for reading catalogue files.

use std::{fs::File, io::BufReader, path::Path};

use log::{debug, trace};

use super::{csv, table, Catalogue, CatalogueType, ReadCatalogueError};

/// Given the path to a catalogue file (and optionally its type), return a
/// [`Catalogue`]. The [`CatalogueType`] is also returned in case that's
/// interesting to the caller.
///
/// If the type isn't given, it is guessed from the file extension ("csv" is
/// CSV, "dat" and "txt" are sexagesimal tables), and failing that, each type
/// is attempted in turn.
pub fn read_catalogue_file<P: AsRef<Path>>(
    path: P,
    cat_type: Option<CatalogueType>,
) -> Result<(Catalogue, CatalogueType), ReadCatalogueError> {
    fn read_as(path: &Path, cat_type: CatalogueType) -> Result<Catalogue, ReadCatalogueError> {
        let mut f = BufReader::new(File::open(path)?);
        match cat_type {
            CatalogueType::Sexagesimal => table::parse_sexagesimal_catalogue(&mut f),
            CatalogueType::Csv => csv::parse_csv_catalogue(&mut f),
        }
    }

    fn inner(
        path: &Path,
        cat_type: Option<CatalogueType>,
    ) -> Result<(Catalogue, CatalogueType), ReadCatalogueError> {
        debug!("Attempting to read catalogue {}", path.display());

        let cat_type = cat_type.or_else(|| {
            let ext = path
                .extension()
                .and_then(|os_str| os_str.to_str())
                .map(|s| s.to_lowercase());
            match ext.as_deref() {
                Some("csv") => Some(CatalogueType::Csv),
                Some("dat" | "txt") => Some(CatalogueType::Sexagesimal),
                _ => None,
            }
        });

        match cat_type {
            Some(cat_type) => {
                debug!("Reading as a {cat_type} catalogue");
                read_as(path, cat_type).map(|c| (c, cat_type))
            }

            None => {
                // Try all kinds. A sexagesimal table is attempted first,
                // because a one-line table would otherwise be read as a CSV
                // file with only a header.
                for cat_type in [CatalogueType::Sexagesimal, CatalogueType::Csv] {
                    match read_as(path, cat_type) {
                        Ok(c) => return Ok((c, cat_type)),
                        Err(e @ ReadCatalogueError::IO(_)) => return Err(e),
                        Err(e) => trace!("Failed to read catalogue as {cat_type}: {e}"),
                    }
                }
                Err(ReadCatalogueError::FailedToReadAsAnyType)
            }
        }
    }
    inner(path.as_ref(), cat_type)
}
