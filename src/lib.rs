// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Nearest-neighbour crossmatching of small astronomical catalogues.

For every entry of a primary catalogue, the closest entry of a secondary
catalogue (by great-circle separation) is found, and the pair is classified as
a match if it is within a caller-supplied angular distance.
 */

pub mod catalogue;
mod cli;
pub mod constants;
pub mod coord;
pub mod crossmatch;
pub mod math;
mod params;
mod unit_parsing;

// Re-exports.
pub use catalogue::{Catalogue, CatalogueEntry, CatalogueType, ReadCatalogueError};
pub use cli::{Catmatch, CatmatchError};
pub use coord::{RADec, SexagesimalError};
pub use crossmatch::{crossmatch, find_closest, CrossmatchError, CrossmatchResults, Match};
pub use math::angular_distance;
