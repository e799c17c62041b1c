// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Astronomical catalogues and the code to read them from files.
//!
//! Entries are given 1-based identifiers in the order they're read; these
//! identifiers are not related to any naming scheme the catalogue itself may
//! have.

pub mod csv;
mod error;
mod read;
pub mod table;

pub use error::ReadCatalogueError;
pub use read::read_catalogue_file;

use std::ops::Deref;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::coord::RADec;

/// All of the possible catalogue file types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
)]
pub enum CatalogueType {
    /// Whitespace-delimited columns: a name, then RA as hours minutes seconds,
    /// then Dec as degrees minutes seconds.
    #[strum(serialize = "sexagesimal")]
    Sexagesimal,

    /// Comma-separated values with a header row; the first two columns are RA
    /// and Dec in decimal degrees.
    #[strum(serialize = "csv")]
    Csv,
}

lazy_static::lazy_static! {
    pub(crate) static ref CATALOGUE_TYPES_COMMA_SEPARATED: String = CatalogueType::iter().join(", ");
}

/// A single catalogue object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueEntry {
    /// 1-based identifier, unique within its catalogue.
    pub id: usize,

    pub radec: RADec,
}

impl CatalogueEntry {
    pub fn new(id: usize, ra: f64, dec: f64) -> CatalogueEntry {
        CatalogueEntry {
            id,
            radec: RADec::from_degrees(ra, dec),
        }
    }

    /// Right ascension [degrees]
    pub fn ra(&self) -> f64 {
        self.radec.ra
    }

    /// Declination [degrees]
    pub fn dec(&self) -> f64 {
        self.radec.dec
    }
}

/// An ordered collection of catalogue entries. The order is the order the
/// entries were read in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue(Vec<CatalogueEntry>);

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Catalogue {
        Catalogue::default()
    }

    /// Create a catalogue from coordinates, assigning identifiers 1, 2, 3,
    /// ... in iteration order.
    pub fn from_radecs<I: IntoIterator<Item = RADec>>(radecs: I) -> Catalogue {
        let mut catalogue = Catalogue::new();
        for radec in radecs {
            catalogue.push(radec);
        }
        catalogue
    }

    /// Create a catalogue from entries that already have identifiers. The
    /// identifiers are used verbatim.
    pub fn from_entries(entries: Vec<CatalogueEntry>) -> Catalogue {
        Catalogue(entries)
    }

    /// Add a coordinate to the end of the catalogue, returning the identifier
    /// it was given.
    pub fn push(&mut self, radec: RADec) -> usize {
        let id = self.0.last().map(|e| e.id + 1).unwrap_or(1);
        self.0.push(CatalogueEntry { id, radec });
        id
    }

    /// Get the entry with the given identifier.
    pub fn get_by_id(&self, id: usize) -> Option<&CatalogueEntry> {
        // Identifiers are normally positions + 1; only search if that's not
        // the case.
        match id.checked_sub(1).and_then(|i| self.0.get(i)) {
            Some(e) if e.id == id => Some(e),
            _ => self.0.iter().find(|e| e.id == id),
        }
    }

    /// The smallest and largest right ascensions [degrees]. `None` if the
    /// catalogue is empty.
    pub fn ra_range(&self) -> Option<(f64, f64)> {
        min_max(self.0.iter().map(|e| e.radec.ra))
    }

    /// The smallest and largest declinations [degrees]. `None` if the
    /// catalogue is empty.
    pub fn dec_range(&self) -> Option<(f64, f64)> {
        min_max(self.0.iter().map(|e| e.radec.dec))
    }
}

fn min_max<I: Iterator<Item = f64>>(iter: I) -> Option<(f64, f64)> {
    iter.fold(None, |acc, x| match acc {
        None => Some((x, x)),
        Some((min, max)) => Some((min.min(x), max.max(x))),
    })
}

impl Deref for Catalogue {
    type Target = [CatalogueEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<RADec> for Catalogue {
    fn from_iter<I: IntoIterator<Item = RADec>>(iter: I) -> Self {
        Catalogue::from_radecs(iter)
    }
}
