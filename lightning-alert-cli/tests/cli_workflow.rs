//! Integration tests for the `lightning-alert` binary.
//!
//! Each test runs the built binary against files in a temporary directory,
//! with `HOME` pointed at that directory so no user configuration is read.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const ASSETS: &str = r#"[{"assetName":"Dante Street","quadKey":"023113203031","assetOwner":"6720"},
{"assetName":"Monica Geller","quadKey":"000000000000","assetOwner":"00003"},
{"assetName":"Olive Crescent","quadKey":"033321132201","assetOwner":"325"}]"#;

const EVENTS: &str = r#"{"flashType":1,"strikeTime":1446760902510,"latitude":33.5524951,"longitude":-94.5822016}
{"flashType":9,"strikeTime":1446761402510,"latitude":8.7020914,"longitude":-12.5358549}
{"flashType":0,"strikeTime":1446761902510,"latitude":8.7020914,"longitude":-12.5358549}
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Run with `-a <assets> -r <events>` followed by `extra`.
    fn run(&self, assets: &Path, events: &Path, extra: &[&OsStr]) -> Output {
        let mut args: Vec<&OsStr> = vec![
            OsStr::new("-a"),
            assets.as_os_str(),
            OsStr::new("-r"),
            events.as_os_str(),
        ];
        args.extend_from_slice(extra);
        self.run_args(&args)
    }

    fn run_args(&self, args: &[&OsStr]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_lightning-alert"))
            .args(args)
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute CLI command")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_prints_alerts_in_catalog_order() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);
    let events = ws.write("lightning.json", EVENTS);

    let output = ws.run_args(&[
        OsStr::new("--assets"),
        assets.as_os_str(),
        OsStr::new("--requests"),
        events.as_os_str(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "lightning alert for 6720:Dante Street\nlightning alert for 325:Olive Crescent\n"
    );
}

#[test]
fn test_no_output_without_matches() {
    let ws = Workspace::new();
    let assets = ws.write(
        "assets.json",
        r#"[{"assetName":"Name3","quadKey":"33333","assetOwner":"3"}]"#,
    );
    let events = ws.write("lightning.json", EVENTS);

    let output = ws.run(&assets, &events, &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_missing_assets_file_fails() {
    let ws = Workspace::new();
    let assets = ws.path("missing-assets.json");
    let events = ws.write("lightning.json", EVENTS);

    let output = ws.run(&assets, &events, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(&format!("File '{}' not found", assets.display())));
}

#[test]
fn test_missing_events_file_fails() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);
    let events = ws.path("missing-lightning.json");

    let output = ws.run(&assets, &events, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(&format!("File '{}' not found", events.display())));
}

#[test]
fn test_malformed_lines_are_skipped_by_default() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);
    let events = ws.write("lightning.json", &format!("not json\n{}", EVENTS));

    let output = ws.run(&assets, &events, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 2);
    assert!(stderr(&output).contains("line 1"));
}

#[test]
fn test_abort_policy_from_config_file() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);
    let events = ws.write("lightning.json", &format!("{}not json\n", EVENTS));
    let config = ws.write("alert.ini", "[events]\nmalformed_records = abort\n");

    let output = ws.run(&assets, &events, &[OsStr::new("--config"), config.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Malformed event at line 4"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);
    let events = ws.write("lightning.json", EVENTS);
    let config = ws.path("nope.ini");

    let output = ws.run(&assets, &events, &[OsStr::new("--config"), config.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
}

#[test]
fn test_log_file_from_config() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);
    let events = ws.write("lightning.json", EVENTS);
    let log_path = ws.path("logs/alert.log");
    let config = ws.write(
        "alert.ini",
        &format!("[logging]\nlevel = info\nfile = {}\n", log_path.display()),
    );

    let output = ws.run(&assets, &events, &[OsStr::new("--config"), config.as_os_str()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 2);

    let log = fs::read_to_string(&log_path).expect("Log file should exist");
    assert!(log.contains("Loaded asset catalog"));
}

#[test]
fn test_requires_both_inputs() {
    let ws = Workspace::new();
    let assets = ws.write("assets.json", ASSETS);

    let output = ws.run_args(&[OsStr::new("-a"), assets.as_os_str()]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
}
