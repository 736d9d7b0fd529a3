//! Shared testing utilities for envstage CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

pub const EMBED_ARCHIVE: &str = "python-3.12.8-embed-amd64.zip";

/// Files of a minimal embeddable distribution, as shipped upstream.
pub const EMBED_ENTRIES: &[(&str, &str)] = &[
    ("python.exe", "MZ-python"),
    ("python3.dll", "MZ-dll"),
    ("python312.zip", "stdlib-archive"),
    (
        "python312._pth",
        "python312.zip\n.\n\n# Uncomment to run site.main() automatically\n#import site\n",
    ),
    ("LICENSE.txt", "PSF"),
];

/// Testing harness providing an isolated repository for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Repository root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `envstage` binary within the repository.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("envstage").expect("Failed to locate envstage binary");
        cmd.current_dir(&self.work_dir).env_remove("ENVSTAGE_LOG");
        cmd
    }

    pub fn build_root(&self) -> PathBuf {
        self.work_dir.join("build")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.build_root().join("resources")
    }

    pub fn env_dir(&self) -> PathBuf {
        self.build_root().join("env")
    }

    pub fn env_archive(&self) -> PathBuf {
        self.build_root().join("env.7z")
    }

    /// Write `envstage.toml` at the repository root.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("envstage.toml"), content).expect("write envstage.toml");
    }

    /// Config pointing at the fake compressor and the given artifact URLs.
    pub fn write_config_with_artifacts(&self, artifacts: &[String]) {
        let list = artifacts.iter().map(|a| format!("\"{}\"", a)).collect::<Vec<_>>().join(", ");
        self.write_config(&format!(
            "[layout]\ncompressor = \"tools/fake-7z.sh\"\n\n\
             [fetch]\ntimeout_secs = 10\nartifacts = [{}]\n",
            list
        ));
    }

    /// Write the embed zip into the resources cache.
    pub fn write_embed_archive(&self, entries: &[(&str, &str)]) -> PathBuf {
        fs::create_dir_all(self.resources_dir()).expect("create resources dir");
        let path = self.resources_dir().join(EMBED_ARCHIVE);
        let mut writer = ZipWriter::new(File::create(&path).expect("create embed zip"));
        for (name, content) in entries {
            writer.start_file(*name, FileOptions::default()).expect("start zip entry");
            writer.write_all(content.as_bytes()).expect("write zip entry");
        }
        writer.finish().expect("finish embed zip");
        path
    }

    /// Install a stand-in for `7z a <archive> <dir>/*` under `tools/`.
    ///
    /// The produced "archive" lists the files under the source directory, and
    /// the working directory of the last run is written to `tools/last-cwd`.
    #[cfg(unix)]
    pub fn install_fake_compressor(&self, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let tools = self.work_dir.join("tools");
        fs::create_dir_all(&tools).expect("create tools dir");
        let script = tools.join("fake-7z.sh");
        let body = format!(
            r#"#!/bin/sh
set -e
pwd > "$(dirname "$0")/last-cwd"
[ "$1" = "a" ] || exit 64
if [ {exit_code} -ne 0 ]; then exit {exit_code}; fi
target="$2"
src="${{3%/*}}"
if [ -e "$target" ]; then echo "[appended]" >> "$target"; exit 0; fi
( cd "$src" && find . -type f | sort ) > "$target"
"#
        );
        fs::write(&script, body).expect("write fake compressor");
        let mut perms = fs::metadata(&script).expect("stat fake compressor").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("chmod fake compressor");
    }

    /// Working directory recorded by the fake compressor's last run.
    pub fn compressor_cwd(&self) -> Option<String> {
        fs::read_to_string(self.work_dir.join("tools/last-cwd")).ok().map(|s| s.trim().to_string())
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(path.as_ref())
            .unwrap_or_else(|e| panic!("read {}: {}", path.as_ref().display(), e))
    }
}
