// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests against the "crossmatch" command-line interface.

use std::io::Write;

use tempfile::tempdir;

use crate::{catmatch, get_cmd_output, make_file_in_dir, EMPTY, PRIMARY, SECONDARY};

/// Pull the JSON results out of stdout; the log shares stdout.
fn get_json(stdout: &str) -> serde_json::Value {
    let line = stdout
        .lines()
        .find(|l| l.starts_with(r#"{"matches""#))
        .unwrap_or_else(|| panic!("no JSON in stdout: {stdout}"));
    serde_json::from_str(line).unwrap()
}

#[test]
fn test_crossmatch_summary() {
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "--primary", PRIMARY,
            "--secondary", SECONDARY,
            "--max-dist", "3arcsec",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("3 matches, 1 non-matches"), "{stdout}");
    assert!(stdout.contains("Non-matches: 2"), "{stdout}");
}

#[test]
fn test_crossmatch_json() {
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "xmatch",
            "-p", PRIMARY,
            "-s", SECONDARY,
            "-m", "3arcsec",
            "--json",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    let json = get_json(&stdout);

    let matches = json["matches"].as_array().unwrap();
    let primary_ids: Vec<u64> = matches
        .iter()
        .map(|m| m["primary_id"].as_u64().unwrap())
        .collect();
    assert_eq!(primary_ids, [1, 3, 4]);
    let secondary_ids: Vec<u64> = matches
        .iter()
        .map(|m| m["secondary_id"].as_u64().unwrap())
        .collect();
    assert_eq!(secondary_ids, [1, 1, 2]);
    for m in matches {
        let dist = m["dist_deg"].as_f64().unwrap();
        assert!(dist <= 3.0 / 3600.0);
    }
    assert_eq!(json["non_matches"], serde_json::json!([2]));
}

#[test]
fn test_crossmatch_swapped_catalogues() {
    // Secondary entries are now the ones that each get a verdict.
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "-p", SECONDARY,
            "-s", PRIMARY,
            "-m", "3arcsec",
            "--json",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    let json = get_json(&stdout);
    assert_eq!(
        json["matches"],
        serde_json::json!([
            {"primary_id": 1, "secondary_id": 1, "dist_deg": json["matches"][0]["dist_deg"]},
            {"primary_id": 2, "secondary_id": 4, "dist_deg": json["matches"][1]["dist_deg"]},
        ]),
        "{json}"
    );
    assert_eq!(json["non_matches"], serde_json::json!([3]));
}

#[test]
fn test_crossmatch_dry_run() {
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "-p", PRIMARY,
            "-s", SECONDARY,
            "-m", "3arcsec",
            "--json",
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run"));
    assert!(!stdout.contains(r#"{"matches""#));
}

#[test]
fn test_empty_secondary_fails() {
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "-p", PRIMARY,
            "-s", EMPTY,
            "-m", "1deg",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: "), "{stderr}");
    assert!(stderr.contains("no entries"), "{stderr}");
}

#[test]
fn test_empty_primary_succeeds() {
    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "-p", EMPTY,
            "-s", SECONDARY,
            "-m", "1deg",
            "--json",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(
        get_json(&stdout),
        serde_json::json!({"matches": [], "non_matches": []})
    );
}

#[test]
fn test_missing_max_dist_fails() {
    let cmd = catmatch()
        .args(["crossmatch", "-p", PRIMARY, "-s", SECONDARY])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No maximum distance"), "{stderr}");
}

#[test]
fn test_save_toml_and_reuse() {
    let temp_dir = tempdir().expect("Couldn't make tempdir");
    let toml = temp_dir.path().join("crossmatch.toml");

    #[rustfmt::skip]
    let cmd = catmatch()
        .args([
            "crossmatch",
            "-p", PRIMARY,
            "-s", SECONDARY,
            "-m", "3arcsec",
            "--save-toml", &toml.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    assert!(toml.exists());

    let cmd = catmatch()
        .args(["crossmatch", &toml.display().to_string(), "--json"])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(get_json(&stdout)["matches"].as_array().unwrap().len(), 3);
}

#[test]
fn test_json_arg_file() {
    let temp_dir = tempdir().expect("Couldn't make tempdir");
    let (json, mut json_file) = make_file_in_dir("crossmatch.json", temp_dir.path());
    write!(
        json_file,
        r#"{{"primary": "{PRIMARY}", "secondary": "{SECONDARY}", "max_dist": "-1", "json": true}}"#
    )
    .unwrap();
    json_file.flush().unwrap();

    let cmd = catmatch()
        .args(["crossmatch", &json.display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "{}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    let results = get_json(&stdout);
    assert_eq!(results["matches"], serde_json::json!([]));
    assert_eq!(results["non_matches"], serde_json::json!([1, 2, 3, 4]));
    // A negative maximum distance is only a warning.
    assert!(stdout.contains("negative"), "{stdout}");
}
