//! End-to-end tests of the `catalog` binary against a temporary data dir.

use std::{fs, path::PathBuf};

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn media_dir(&self) -> PathBuf {
        self.dir.path().join("media")
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("catalog");
        cmd.current_dir(self.dir.path())
            .env("CATALOG_STORAGE__DATA_DIR", self.dir.path().join("data"))
            .env("CATALOG_STORAGE__MEDIA_DIR", self.media_dir())
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR");
        cmd
    }

    /// Run a command with JSON output and parse stdout.
    fn json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .arg("--output-format")
            .arg("json")
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn create(&self, args: &[&str]) -> String {
        self.json(args)["id"].as_str().unwrap().to_owned()
    }

    fn file(&self, name: &str, content: &[u8]) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.display().to_string()
    }
}

#[test]
fn help_lists_aggregate_commands() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("category"))
        .stdout(predicate::str::contains("cast-member"))
        .stdout(predicate::str::contains("video"));
}

#[test]
fn category_lifecycle() {
    let sandbox = Sandbox::new();
    let id = sandbox.create(&["category", "create", "--name", "Movies", "-d", "Feature films"]);

    let category = sandbox.json(&["category", "get", &id]);
    assert_eq!(category["name"], "Movies");
    assert_eq!(category["description"], "Feature films");
    assert_eq!(category["is_active"], true);

    sandbox.json(&["category", "update", &id, "--name", "Films", "--inactive"]);
    let category = sandbox.json(&["category", "get", &id]);
    assert_eq!(category["name"], "Films");
    assert_eq!(category["is_active"], false);
    assert!(category["deleted_at"].is_string());

    sandbox.json(&["category", "delete", &id]);
    assert_eq!(sandbox.json(&["category", "list"]), Value::Array(Vec::new()));
}

#[test]
fn every_cast_member_error_is_reported() {
    Sandbox::new()
        .cmd()
        .args(["cast-member", "create", "--name", " "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'name' should not be empty"))
        .stderr(predicate::str::contains("'type' should not be null"));
}

#[test]
fn missing_aggregate_exits_with_not_found() {
    Sandbox::new()
        .cmd()
        .args(["genre", "get", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Genre with ID nope was not found"))
        .stderr(predicate::str::contains("catalog genre list"));
}

#[test]
fn unknown_video_references_are_reported_together() {
    let sandbox = Sandbox::new();
    let category = sandbox.create(&["category", "create", "--name", "Movies"]);

    sandbox
        .cmd()
        .args([
            "video", "create", "--title", "Fast", "--launched-at", "2022", "--rating", "14",
            "--category", &category, "--category", "c-missing", "--genre", "g-missing",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Some categories could not be found: c-missing",
        ))
        .stderr(predicate::str::contains("Some genres could not be found: g-missing"));

    assert_eq!(sandbox.json(&["video", "list"]), Value::Array(Vec::new()));
}

#[test]
fn genre_links_existing_categories() {
    let sandbox = Sandbox::new();
    let category = sandbox.create(&["category", "create", "--name", "Movies"]);
    let genre = sandbox.create(&["genre", "create", "--name", "Action", "--category", &category]);

    let stored = sandbox.json(&["genre", "get", &genre]);
    assert_eq!(stored["categories"], serde_json::json!([category]));
}

#[test]
fn video_media_round_trip() {
    let sandbox = Sandbox::new();
    let movie = sandbox.file("movie.mp4", b"not really a movie");
    let banner = sandbox.file("banner.png", b"png bytes");

    let id = sandbox.create(&[
        "video", "create", "--title", "Fast", "--launched-at", "2022", "--rating", "L",
        "--video", &movie, "--banner", &banner,
    ]);

    let video = sandbox.json(&["video", "get", &id]);
    assert_eq!(video["video"]["status"], "PENDING");
    assert_eq!(video["banner"]["name"], "banner.png");
    assert!(video["trailer"].is_null());

    let copy = sandbox.dir.path().join("copy.mp4");
    sandbox
        .cmd()
        .args(["video", "media", &id, "--type", "video", "-o"])
        .arg(&copy)
        .assert()
        .success();
    assert_eq!(fs::read(&copy).unwrap(), b"not really a movie");

    let checksum = video["video"]["checksum"].as_str().unwrap().to_owned();
    sandbox.json(&[
        "video", "media-status", &id, "--checksum", &checksum, "--status", "completed",
        "--folder", "encoded", "--file", "movie.mp4",
    ]);
    let video = sandbox.json(&["video", "get", &id]);
    assert_eq!(video["video"]["status"], "COMPLETED");
    assert_eq!(video["video"]["encoded_location"], "encoded/movie.mp4");

    sandbox.json(&["video", "delete", &id]);
    assert!(!sandbox.media_dir().join(format!("videoId-{id}")).exists());
}

#[test]
fn video_delete_with_a_path_like_id_leaves_storage_intact() {
    let sandbox = Sandbox::new();
    let category = sandbox.create(&["category", "create", "--name", "Movies"]);
    let banner = sandbox.file("banner.png", b"png bytes");
    let id = sandbox.create(&[
        "video", "create", "--title", "Fast", "--launched-at", "2022", "--rating", "L",
        "--banner", &banner,
    ]);

    sandbox
        .cmd()
        .args(["video", "delete", &format!("{id}/../..")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid media folder name"));

    assert!(sandbox.dir.path().join("data").exists());
    assert_eq!(sandbox.json(&["category", "get", &category])["name"], "Movies");
    assert_eq!(sandbox.json(&["video", "get", &id])["banner"]["name"], "banner.png");
    assert!(sandbox.media_dir().join(format!("videoId-{id}")).exists());
}

#[test]
fn missing_media_slot_is_not_found() {
    let sandbox = Sandbox::new();
    let id = sandbox.create(&[
        "video", "create", "--title", "Fast", "--launched-at", "2022", "--rating", "18",
    ]);

    sandbox
        .cmd()
        .args(["video", "media", &id, "--type", "trailer"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("media TRAILER was not found"));
}

#[test]
fn missing_media_file_is_rejected_before_storing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args([
            "video", "create", "--title", "Fast", "--launched-at", "2022", "--rating", "L",
            "--video", "does-not-exist.mp4",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Media file not found"));

    assert!(!sandbox.media_dir().exists());
}

#[test]
fn explicit_missing_config_file_is_a_configuration_error() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["-c", "absent.toml", "category", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_get_reflects_environment() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "get", "storage.media_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            sandbox.media_dir().display().to_string(),
        ));
}

#[test]
fn init_writes_a_loadable_config() {
    let sandbox = Sandbox::new();
    let path = sandbox.dir.path().join("conf/catalog.toml");

    sandbox.cmd().arg("-c").arg(&path).arg("init").assert().success();
    assert!(path.exists());

    sandbox
        .cmd()
        .arg("-c")
        .arg(&path)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"));
}

#[test]
fn completions_are_generated() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"));
}
