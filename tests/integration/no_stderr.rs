// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use crate::{catmatch, get_cmd_output, PRIMARY, SECONDARY};

#[test]
fn test_crossmatch_no_stderr() {
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "--primary", PRIMARY,
            "--secondary", SECONDARY,
            "--max-dist", "3arcsec",
        ])
        .ok();
    assert!(
        cmd.is_ok(),
        "crossmatch failed on simple test data: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_verify_no_stderr() {
    let cmd = catmatch()
        .args(["catalogue-verify", PRIMARY, SECONDARY])
        .ok();
    assert!(
        cmd.is_ok(),
        "catalogue-verify failed on simple test data: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_separation_no_stderr() {
    let cmd = catmatch()
        .args(["separation", "10", "-30", "10", "-29"])
        .ok();
    assert!(cmd.is_ok(), "separation failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(stdout.contains("Separation: "), "{stdout}");
}
