// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Nearest-neighbour crossmatching between two catalogues.
//!
//! Every search here is a linear scan; crossmatching catalogues of sizes n and
//! m costs O(n m) distance calculations. That's fine for catalogues of a few
//! thousand entries.


use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use crate::{catalogue::CatalogueEntry, coord::RADec, math::angular_distance};

/// A primary-catalogue entry and its closest secondary-catalogue entry,
/// within the maximum distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match {
    pub primary_id: usize,
    pub secondary_id: usize,
    /// [degrees]
    pub dist_deg: f64,
}

/// The results of [`crossmatch`]. Both lists are in primary-catalogue order,
/// and every primary identifier is in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrossmatchResults {
    pub matches: Vec<Match>,
    pub non_matches: Vec<usize>,
}

impl CrossmatchResults {
    pub fn num_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn num_non_matches(&self) -> usize {
        self.non_matches.len()
    }

    /// The number of primary-catalogue entries that were crossmatched.
    pub fn len(&self) -> usize {
        self.matches.len() + self.non_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CrossmatchError {
    #[error("Cannot search an empty catalogue for the closest entry")]
    EmptyCatalogue,
}

/// Find the entry of `catalogue` closest to (`ra`, `dec`) [degrees], returning
/// its identifier and the distance to it [degrees].
///
/// If more than one entry is equally close, the first one is used. An empty
/// catalogue is an error.
pub fn find_closest(
    catalogue: &[CatalogueEntry],
    ra: f64,
    dec: f64,
) -> Result<(usize, f64), CrossmatchError> {
    let (first, rest) = catalogue
        .split_first()
        .ok_or(CrossmatchError::EmptyCatalogue)?;

    let mut closest_id = first.id;
    let mut closest_dist = angular_distance(first.radec.ra, first.radec.dec, ra, dec);
    for entry in rest {
        let dist = angular_distance(entry.radec.ra, entry.radec.dec, ra, dec);
        // Only a strict improvement replaces the current best.
        if dist < closest_dist {
            closest_id = entry.id;
            closest_dist = dist;
        }
    }

    Ok((closest_id, closest_dist))
}

/// [`find_closest`], but with a [`RADec`].
pub fn find_closest_radec(
    catalogue: &[CatalogueEntry],
    radec: RADec,
) -> Result<(usize, f64), CrossmatchError> {
    find_closest(catalogue, radec.ra, radec.dec)
}

/// For each entry of `primary`, find the closest entry of `secondary`. If
/// they are at most `max_dist_deg` apart [degrees], the pair is a match,
/// otherwise the primary entry is a non-match.
///
/// A negative `max_dist_deg` makes every primary entry a non-match. An empty
/// `secondary` is an error, even if `primary` is also empty.
pub fn crossmatch(
    primary: &[CatalogueEntry],
    secondary: &[CatalogueEntry],
    max_dist_deg: f64,
) -> Result<CrossmatchResults, CrossmatchError> {
    if secondary.is_empty() {
        return Err(CrossmatchError::EmptyCatalogue);
    }
    debug!(
        "Crossmatching {} entries against {} entries (max. distance {max_dist_deg}°)",
        primary.len(),
        secondary.len()
    );

    let mut results = CrossmatchResults::default();
    for entry in primary {
        let (closest_id, dist) = find_closest(secondary, entry.radec.ra, entry.radec.dec)?;
        if dist <= max_dist_deg {
            trace!(
                "Primary {} matches secondary {closest_id} ({dist}°)",
                entry.id
            );
            results.matches.push(Match {
                primary_id: entry.id,
                secondary_id: closest_id,
                dist_deg: dist,
            });
        } else {
            results.non_matches.push(entry.id);
        }
    }

    debug!(
        "{} matches, {} non-matches",
        results.num_matches(),
        results.num_non_matches()
    );
    Ok(results)
}
