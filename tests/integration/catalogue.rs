// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the catalogue utilities.

use crate::{catmatch, get_cmd_output, EMPTY, PRIMARY, SECONDARY};

#[test]
fn test_verify() {
    let cmd = catmatch()
        .args(["verify", PRIMARY, SECONDARY, EMPTY])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("sexagesimal catalogue with 4 entries"),
        "{stdout}"
    );
    assert!(stdout.contains("csv catalogue with 3 entries"), "{stdout}");
    assert!(stdout.contains("csv catalogue with 0 entries"), "{stdout}");
}

#[test]
fn test_verify_bad_type() {
    let cmd = catmatch()
        .args(["catalogue-verify", "-i", "csv", PRIMARY])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("Catalogue line"), "{stdout}");
    assert!(
        stderr.contains("1 of 1 catalogues could not be read"),
        "{stderr}"
    );
}

#[test]
fn test_closest() {
    let cmd = catmatch()
        .args(["closest", PRIMARY, "12h00m00s", "-00d30m00s"])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Entry 4"), "{stdout}");
    assert!(stdout.contains("Separation: 0.000000°"), "{stdout}");
}

#[test]
fn test_closest_empty_catalogue() {
    let cmd = catmatch().args(["closest", EMPTY, "0", "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("empty catalogue"), "{stderr}");
}
