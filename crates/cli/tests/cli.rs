// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

#[test]
fn help_lists_commands() {
    Sandbox::new()
        .beermap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("profile"));
}

#[test]
fn unconfigured_store_is_reported() {
    Sandbox::new()
        .beermap()
        .arg("profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote store is not configured"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn config_path_honors_env() {
    let sandbox = Sandbox::new();
    sandbox
        .beermap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            sandbox.temp.path().to_string_lossy().as_ref(),
        ));
}

#[test]
fn config_show_reads_file_and_masks_key() {
    let sandbox = Sandbox::new();
    sandbox.write_config(
        "[remote]\nurl = \"https://xyz.supabase.co\"\nanon_key = \"public-anon-key\"\n\n[profile]\nusername = \"Sam\"\n",
    );
    sandbox
        .beermap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://xyz.supabase.co"))
        .stdout(predicate::str::contains("****-key"))
        .stdout(predicate::str::contains("Sam"))
        .stdout(predicate::str::contains("public-anon").not());
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[remote]\nurl = \"ftp://example.com\"\n");
    sandbox
        .beermap()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with http"));
}

#[parameterized(
    empty = { "" },
    spaces = { "   " },
)]
fn add_with_blank_name_fails_before_network(name: &str) {
    Sandbox::new()
        .beermap_at(UNREACHABLE_URL)
        .args(["add", "--name", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Beer name cannot be empty"));
}

#[test]
fn map_tap_suggests_add_command() {
    Sandbox::new()
        .beermap_at(UNREACHABLE_URL)
        .args(["map", "--tap", "40.7128,-74.006"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add a beer at 40.7128, -74.006"))
        .stdout(predicate::str::contains("--lat 40.7128 --lon -74.006"));
}

#[test]
fn map_lists_markers_newest_first() {
    let body = format!(
        "[{},{}]",
        spot_json("2", "Dark Stout", "Stout", 4.5, 2),
        spot_json("1", "Pale Ale", "IPA", 4.0, 1)
    );
    let server = StubServer::start(vec![(200, body)]);

    let output = Sandbox::new()
        .beermap_at(&server.url)
        .arg("map")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let stout = stdout.find("Dark Stout  Stout - 4.5⭐").unwrap();
    let ale = stdout.find("Pale Ale  IPA - 4⭐").unwrap();
    assert!(stout < ale);

    let requests = server.requests();
    assert!(requests[0].starts_with("GET /rest/v1/beer_spots?select=*&order=created_at.desc"));
    assert!(requests[0].contains("apikey: test-anon-key"));
}

#[test]
fn map_placeholder_when_unsupported() {
    // Nothing listens at the store URL: the placeholder needs no data.
    let sandbox = Sandbox::new();
    sandbox.write_config("[map]\nsupported = false\n");
    sandbox
        .beermap_at(UNREACHABLE_URL)
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Maps are not supported on this platform",
        ))
        .stdout(predicate::str::contains(
            "Please use the iOS or Android app to view the map",
        ));
}

#[test]
fn map_marker_details() {
    let body = format!("[{}]", spot_json("abc", "Pale Ale", "IPA", 4.0, 1));
    let server = StubServer::start(vec![(200, body)]);
    Sandbox::new()
        .beermap_at(&server.url)
        .args(["map", "--marker", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: IPA"))
        .stdout(predicate::str::contains("Pale Ale notes"));
}

#[test]
fn map_unknown_marker_fails() {
    let server = StubServer::start(vec![(200, "[]".to_string())]);
    Sandbox::new()
        .beermap_at(&server.url)
        .args(["map", "--marker", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beer spot not found: nope"));
}

#[test]
fn profile_shows_totals() {
    let body = format!(
        "[{},{}]",
        spot_json("2", "Dark Stout", "Stout", 4.5, 2),
        spot_json("1", "Pale Ale", "IPA", 4.0, 1)
    );
    let server = StubServer::start(vec![(200, body)]);
    Sandbox::new()
        .beermap_at(&server.url)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beer Enthusiast"))
        .stdout(predicate::str::contains("Beer Collector"))
        .stdout(predicate::str::contains("Beers tasted: 2"))
        .stdout(predicate::str::contains("Average rating: 4.3"));
}

#[test]
fn profile_json_for_empty_collection() {
    let server = StubServer::start(vec![(200, "[]".to_string())]);
    let output = Sandbox::new()
        .beermap_at(&server.url)
        .args(["profile", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total_count"], 0);
    assert_eq!(json["average_rating"], 0.0);
    assert_eq!(json["entries"], serde_json::json!([]));
}

#[test]
fn failed_fetch_is_reported() {
    let server = StubServer::start(vec![(
        500,
        r#"{"message":"database is down"}"#.to_string(),
    )]);
    Sandbox::new()
        .beermap_at(&server.url)
        .arg("profile")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Beers tasted: 0"))
        .stderr(predicate::str::contains("database is down"));
}

#[test]
fn add_posts_draft_and_confirms() {
    let stored = format!(
        "[{}]",
        spot_json("new-1", "IPA Delight", "IPA", 5.0, 3)
    );
    let server = StubServer::start(vec![(201, stored)]);
    Sandbox::new()
        .beermap_at(&server.url)
        .args([
            "add",
            "--name",
            "IPA Delight",
            "--rating",
            "5",
            "--comment",
            "Great hoppy flavor",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added IPA Delight (IPA) with rating 5/5 at coordinates 37.7749, -122.4194",
        ))
        .stdout(predicate::str::contains("id: new-1"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("POST /rest/v1/beer_spots"));
    assert!(requests[0].contains("\"name\":\"IPA Delight\""));
    assert!(requests[0].contains("\"type\":\"IPA\""));
}

#[test]
fn add_failure_is_reported() {
    let server = StubServer::start(vec![(
        403,
        r#"{"message":"permission denied for table beer_spots"}"#.to_string(),
    )]);
    Sandbox::new()
        .beermap_at(&server.url)
        .args(["add", "--name", "Hazy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(403)"))
        .stderr(predicate::str::contains("permission denied"));
}

#[test]
fn logout_without_session() {
    Sandbox::new()
        .beermap_at(UNREACHABLE_URL)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn config_set_then_show() {
    let sandbox = Sandbox::new();
    sandbox
        .beermap()
        .args([
            "config",
            "set",
            "--url",
            "https://xyz.supabase.co",
            "--anon-key",
            "public-anon-key",
            "--username",
            "Hop Hunter",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    assert!(sandbox.config_path().exists());
    sandbox
        .beermap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://xyz.supabase.co"))
        .stdout(predicate::str::contains("Hop Hunter"));
}
