// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::{borrow::Cow, path::PathBuf};

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{
    display_warnings, parse_catalogue_type, read_and_describe_catalogue, InfoPrinter, Warn,
    ARG_FILE_HELP, CATALOGUE_TYPE_HELP,
};
use crate::{
    constants::{ARCSEC_PER_DEGREE, DEFAULT_NUM_PRINT},
    params::CrossmatchParams,
    unit_parsing::{parse_angle_degrees, UnitParseError},
    CatmatchError,
};

lazy_static::lazy_static! {
    static ref NUM_PRINT_HELP: String =
        format!("The number of matches and non-matches to report. Default: {DEFAULT_NUM_PRINT}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct CrossmatchArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the primary catalogue. Every entry of this catalogue is either
    /// a match or a non-match.
    #[clap(short, long, parse(from_os_str), help_heading = "CATALOGUES")]
    pub(super) primary: Option<PathBuf>,

    #[clap(long, help = CATALOGUE_TYPE_HELP.as_str(), help_heading = "CATALOGUES")]
    pub(super) primary_type: Option<String>,

    /// Path to the secondary catalogue. This catalogue is searched for the
    /// entry closest to each primary entry; it must not be empty.
    #[clap(short, long, parse(from_os_str), help_heading = "CATALOGUES")]
    pub(super) secondary: Option<PathBuf>,

    #[clap(long, help = CATALOGUE_TYPE_HELP.as_str(), help_heading = "CATALOGUES")]
    pub(super) secondary_type: Option<String>,

    /// The maximum distance between a primary entry and its closest secondary
    /// entry for the pair to be a match (inclusive). Supports the units deg,
    /// arcmin and arcsec (e.g. 5arcsec); without a unit, degrees are assumed.
    #[clap(short, long, allow_hyphen_values = true, help_heading = "CROSSMATCHING")]
    pub(super) max_dist: Option<String>,

    #[clap(short, long, help = NUM_PRINT_HELP.as_str(), help_heading = "OUTPUT")]
    pub(super) num_print: Option<usize>,

    /// Print all of the results to stdout as a single line of JSON.
    #[clap(long, help_heading = "OUTPUT")]
    #[serde(default)]
    pub(super) json: bool,
}

impl CrossmatchArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<CrossmatchArgs, CatmatchError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let CrossmatchArgs {
                args_file: _,
                primary,
                primary_type,
                secondary,
                secondary_type,
                max_dist,
                num_print,
                json,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(CrossmatchArgs {
                args_file: None,
                primary: cli_args.primary.or(primary),
                primary_type: cli_args.primary_type.or(primary_type),
                secondary: cli_args.secondary.or(secondary),
                secondary_type: cli_args.secondary_type.or(secondary_type),
                max_dist: cli_args.max_dist.or(max_dist),
                num_print: cli_args.num_print.or(num_print),
                json: cli_args.json || json,
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<CrossmatchParams, CatmatchError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            primary,
            primary_type,
            secondary,
            secondary_type,
            max_dist,
            num_print,
            json,
        } = self;

        let primary = primary.ok_or(CrossmatchArgsError::NoPrimary)?;
        let secondary = secondary.ok_or(CrossmatchArgsError::NoSecondary)?;
        let max_dist = max_dist.ok_or(CrossmatchArgsError::NoMaxDist)?;
        let primary_type = parse_catalogue_type(primary_type.as_deref())
            .map_err(CrossmatchArgsError::InvalidCatalogueType)?;
        let secondary_type = parse_catalogue_type(secondary_type.as_deref())
            .map_err(CrossmatchArgsError::InvalidCatalogueType)?;

        let max_dist_deg =
            parse_angle_degrees(&max_dist).map_err(CrossmatchArgsError::ParseMaxDist)?;
        if max_dist_deg < 0.0 {
            format!("The maximum distance ({max_dist_deg}°) is negative; every primary entry will be a non-match").warn();
        }

        let (primary, primary_block) = read_and_describe_catalogue(&primary, primary_type)?;
        let (secondary_catalogue, secondary_block) =
            read_and_describe_catalogue(&secondary, secondary_type)?;
        if secondary_catalogue.is_empty() {
            return Err(CrossmatchArgsError::EmptySecondary(secondary).into());
        }

        let mut printer = InfoPrinter::new("Crossmatching".into());
        for (title, block) in [
            ("Primary catalogue", primary_block),
            ("Secondary catalogue", secondary_block),
        ] {
            let mut lines: Vec<Cow<'static, str>> = vec![title.into()];
            lines.extend(block);
            printer.push_block(lines);
        }
        printer.push_line(
            format!(
                "Maximum distance: {max_dist_deg}° ({}\")",
                max_dist_deg * ARCSEC_PER_DEGREE
            )
            .into(),
        );
        printer.display();

        display_warnings();

        Ok(CrossmatchParams {
            primary,
            secondary: secondary_catalogue,
            max_dist_deg,
            num_print: num_print.unwrap_or(DEFAULT_NUM_PRINT),
            json,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), CatmatchError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum CrossmatchArgsError {
    #[error("No primary catalogue was specified")]
    NoPrimary,

    #[error("No secondary catalogue was specified")]
    NoSecondary,

    #[error("No maximum distance was specified")]
    NoMaxDist,

    #[error("Couldn't parse the maximum distance: {0}")]
    ParseMaxDist(UnitParseError),

    #[error("'{0}' is not a recognised catalogue type")]
    InvalidCatalogueType(String),

    #[error("The secondary catalogue {} has no entries, so nothing can be matched against it", .0.display())]
    EmptySecondary(PathBuf),
}
