// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all catmatch-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::crossmatch::CrossmatchArgsError;
use crate::{
    catalogue::ReadCatalogueError, coord::SexagesimalError, crossmatch::CrossmatchError,
    params::CrossmatchRunError, unit_parsing::UnitParseError,
};

/// The *only* publicly visible error from catmatch.
#[derive(Error, Debug)]
pub enum CatmatchError {
    /// An error related to crossmatching.
    #[error("{0}")]
    Crossmatch(String),

    /// Generic error surrounding catalogues.
    #[error("{0}\n\nSupported catalogue types: {}", *crate::catalogue::CATALOGUE_TYPES_COMMA_SEPARATED)]
    Catalogue(String),

    /// An error related to parsing coordinates given on the command line.
    #[error("{0}\n\nCoordinates may be decimal degrees, colon-separated (e.g. 12:30:00) or unit-separated (e.g. 12h30m00s, -30d15m00s)")]
    Coordinate(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<CrossmatchArgsError> for CatmatchError {
    fn from(e: CrossmatchArgsError) -> Self {
        let s = e.to_string();
        match e {
            CrossmatchArgsError::NoPrimary
            | CrossmatchArgsError::NoSecondary
            | CrossmatchArgsError::NoMaxDist
            | CrossmatchArgsError::ParseMaxDist(_)
            | CrossmatchArgsError::EmptySecondary(_) => Self::Crossmatch(s),
            CrossmatchArgsError::InvalidCatalogueType(_) => Self::Catalogue(s),
        }
    }
}

impl From<CrossmatchRunError> for CatmatchError {
    fn from(e: CrossmatchRunError) -> Self {
        match e {
            CrossmatchRunError::Crossmatch(e) => Self::from(e),
            CrossmatchRunError::Json(e) => Self::Generic(e.to_string()),
        }
    }
}

// Library code errors.

impl From<CrossmatchError> for CatmatchError {
    fn from(e: CrossmatchError) -> Self {
        Self::Crossmatch(e.to_string())
    }
}

impl From<ReadCatalogueError> for CatmatchError {
    fn from(e: ReadCatalogueError) -> Self {
        let s = e.to_string();
        match e {
            ReadCatalogueError::ParseFloat { .. }
            | ReadCatalogueError::IncompleteLine { .. }
            | ReadCatalogueError::InvalidRa { .. }
            | ReadCatalogueError::InvalidDec { .. }
            | ReadCatalogueError::MissingHeader
            | ReadCatalogueError::Csv(_)
            | ReadCatalogueError::FailedToReadAsAnyType => Self::Catalogue(s),
            ReadCatalogueError::IO(e) => Self::from(e),
        }
    }
}

impl From<SexagesimalError> for CatmatchError {
    fn from(e: SexagesimalError) -> Self {
        Self::Coordinate(e.to_string())
    }
}

impl From<UnitParseError> for CatmatchError {
    fn from(e: UnitParseError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for CatmatchError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
