//! Shared test infrastructure for integration tests.
//!
//! Every test gets its own data directory and a scrubbed environment, so runs
//! never touch the real tasting log.

use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A private data directory plus helpers for running `teanote` against it.
pub struct TestDataDir {
    dir: TempDir,
}

/// Captured result of one `teanote` invocation.
#[derive(Debug)]
pub struct RunOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl TestDataDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp data dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn records_path(&self) -> PathBuf {
        self.path().join("records.json")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_teanote"));
        command
            .arg("--data-dir")
            .arg(self.path())
            .args(args)
            .env_remove("TEANOTE_HOME")
            .env_remove("TEANOTE_LM_COMMAND")
            .env_remove("TEANOTE_LOG");
        command
    }

    /// Run `teanote <args>` with no stdin.
    pub fn run(&self, args: &[&str]) -> RunOutput {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("run teanote")
            .into()
    }

    /// Run `teanote <args>` with extra environment variables.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> RunOutput {
        let mut command = self.command(args);
        for (key, value) in env {
            command.env(key, value);
        }
        command
            .stdin(Stdio::null())
            .output()
            .expect("run teanote")
            .into()
    }

    /// Run `teanote <args>` feeding `input` on stdin.
    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> RunOutput {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn teanote");
        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait teanote").into()
    }

    /// Run and require success, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.success,
            "teanote {args:?} failed\nstdout: {}\nstderr: {}",
            output.stdout, output.stderr
        );
        output.stdout
    }

    /// The stored collection as raw JSON.
    #[allow(dead_code)]
    pub fn records(&self) -> Vec<Value> {
        let text = std::fs::read_to_string(self.records_path()).expect("read records.json");
        serde_json::from_str(&text).expect("records.json is a JSON array")
    }

    /// Log a drink from flags and return its stored id.
    #[allow(dead_code)]
    pub fn add(&self, args: &[&str]) -> String {
        let before = self.existing_ids();
        let mut full = vec!["add"];
        full.extend_from_slice(args);
        self.run_ok(&full);
        self.existing_ids()
            .into_iter()
            .find(|id| !before.contains(id))
            .expect("a new record id")
    }

    /// Ids currently on disk; missing or unparseable data counts as none.
    fn existing_ids(&self) -> Vec<String> {
        let Ok(text) = std::fs::read_to_string(self.records_path()) else {
            return Vec::new();
        };
        let records: Vec<Value> = serde_json::from_str(&text).unwrap_or_default();
        records
            .iter()
            .filter_map(|record| record["id"].as_str().map(String::from))
            .collect()
    }
}
