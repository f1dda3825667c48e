//! Shared fixtures for CLI specs

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use serde_json::Value;

/// Two-step catalog: `trim` feeds its output to `align`
pub const CATALOG: &str = r#"
[[analysis]]
id = "trim-align"
name = "Trim and align"

[[analysis.step]]
name = "trim"
template = "t-trim"

[analysis.step.transformation]
quality = "20"

[[analysis.step]]
name = "align"
template = "t-align"

[[analysis.mapping]]
source = "trim"
target = "align"

[analysis.mapping.relation]
"trim_trimmed" = "reads"

[[template]]
id = "t-trim"
name = "Trimmer"
component = "c-trim"

[[template.input]]
id = "raw"
name = "raw.fq"
switch = "-i"
info_type = "FastQ"
order = 1

[[template.output]]
id = "trimmed"
name = "trimmed.fq"
switch = "-o"
info_type = "FastQ"
order = 3

[[template.group]]
name = "Options"

[[template.group.property]]
id = "raw"
name = "Reads"
type = "Input"
data_object = "raw"
order = 1

[[template.group.property]]
id = "quality"
name = "-q"
order = 2

[[template.group.property]]
id = "notes"
type = "Info"
name = "Trims adapters"

[[template]]
id = "t-align"
name = "Aligner"
component = "c-align"

[[template.input]]
id = "reads"
name = "reads.fq"
switch = "-r"
info_type = "FastQ"
order = 1

[[template.output]]
id = "bam"
name = "aligned.bam"
info_type = "Bam"
order = -1

[[template.group]]
name = "Options"

[[template.group.property]]
id = "threads"
name = "-t"
order = 2
visible = false
default = "4"

[[component]]
id = "c-trim"
name = "trimmer"
location = "/usr/local/bin"
type = "executable"

[[component]]
id = "c-align"
name = "aligner"
location = "/usr/local/bin"
type = "executable"
"#;

pub const REQUEST: &str = r#"{
  "analysis_id": "trim-align",
  "workspace_id": 42,
  "name": "nightly",
  "config": { "trim_raw": "/data/raw.fq" }
}"#;

/// A scratch directory the CLI runs in, isolated from user settings
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Workspace with `catalog.toml` and `request.json`
    pub fn with_catalog() -> Self {
        let workspace = Self::empty();
        workspace.file("catalog.toml", CATALOG);
        workspace.file("request.json", REQUEST);
        workspace
    }

    pub fn file(&self, path: &str, content: &str) -> &Self {
        let path = self.path(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn path(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn jf(&self) -> Cli {
        let mut cmd = Command::cargo_bin("jf").unwrap();
        cmd.current_dir(self.root())
            .env("HOME", self.root())
            .env("XDG_CONFIG_HOME", self.path(".config"))
            .env_remove("JF_CONFIG")
            .env_remove("JF_LOG");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and require success
    pub fn passes(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        let result = Output::from(output.clone());
        assert!(
            output.status.success(),
            "expected success\nstdout:\n{}\nstderr:\n{}",
            result.stdout,
            result.stderr
        );
        result
    }

    /// Run and require failure
    pub fn fails(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        let result = Output::from(output.clone());
        assert!(
            !output.status.success(),
            "expected failure\nstdout:\n{}",
            result.stdout
        );
        result
    }
}

pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
