// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::borrow::Cow;

use itertools::Itertools;

use crate::{
    catalogue::Catalogue,
    cli::InfoPrinter,
    constants::ARCSEC_PER_DEGREE,
    coord::{degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms},
    crossmatch::{crossmatch, CrossmatchError, CrossmatchResults},
};

pub(crate) struct CrossmatchParams {
    pub(crate) primary: Catalogue,
    pub(crate) secondary: Catalogue,

    /// [degrees]
    pub(crate) max_dist_deg: f64,

    /// The number of matches and non-matches to report.
    pub(crate) num_print: usize,

    /// Print everything as JSON, rather than a summary.
    pub(crate) json: bool,
}

impl CrossmatchParams {
    pub(crate) fn run(&self) -> Result<CrossmatchResults, CrossmatchRunError> {
        let Self {
            primary,
            secondary,
            max_dist_deg,
            num_print,
            json,
        } = self;

        let results = crossmatch(primary, secondary, *max_dist_deg)?;

        if *json {
            // JSON goes straight to stdout so it can be separated from the
            // log.
            println!("{}", serde_json::to_string(&results)?);
        } else {
            self.summarise(&results, *num_print).display();
        }

        Ok(results)
    }

    fn summarise(&self, results: &CrossmatchResults, num_print: usize) -> InfoPrinter {
        let mut printer = InfoPrinter::new("Crossmatch results".into());
        printer.push_line(
            format!(
                "{} matches, {} non-matches",
                results.num_matches(),
                results.num_non_matches()
            )
            .into(),
        );

        let mut block: Vec<Cow<'static, str>> = vec![];
        for m in results.matches.iter().take(num_print) {
            let line = match self.primary.get_by_id(m.primary_id) {
                Some(p) => format!(
                    "Primary {} ({} {}) -> secondary {}: {:.3}\"",
                    m.primary_id,
                    degrees_to_sexagesimal_hms(p.ra()),
                    degrees_to_sexagesimal_dms(p.dec()),
                    m.secondary_id,
                    m.dist_deg * ARCSEC_PER_DEGREE
                ),
                None => format!(
                    "Primary {} -> secondary {}: {:.3}\"",
                    m.primary_id,
                    m.secondary_id,
                    m.dist_deg * ARCSEC_PER_DEGREE
                ),
            };
            block.push(line.into());
        }
        if results.num_matches() > num_print {
            block.push(format!("... and {} more", results.num_matches() - num_print).into());
        }
        printer.push_block(block);

        if num_print > 0 && !results.non_matches.is_empty() {
            let mut line = format!(
                "Non-matches: {}",
                results.non_matches.iter().take(num_print).join(", ")
            );
            if results.num_non_matches() > num_print {
                line.push_str(", ...");
            }
            printer.push_line(line.into());
        }

        printer
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum CrossmatchRunError {
    #[error(transparent)]
    Crossmatch(#[from] CrossmatchError),

    #[error("Couldn't serialise the crossmatch results: {0}")]
    Json(#[from] serde_json::Error),
}
