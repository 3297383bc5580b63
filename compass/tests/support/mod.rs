// Copyright 2024 The Compass Terminal Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// This module is used from multiple different test files, each of
// which gets compiled into its own binary. Not all the binaries use
// all the stuff here.
#![allow(dead_code)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tempfile::TempDir;

// These mirror the bundle layout contract the packaging pipeline
// follows. Keeping them as independent literals means a test fails
// if the shipped layout drifts.
pub const TERMINAL_SUBDIR: &str = "compass-terminal";
pub const TERMINAL_BIN: &str = "compass-terminal";

pub fn launcher_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_compass"))
}

pub fn tmpdir() -> anyhow::Result<TempDir> {
    tempfile::Builder::new()
        .prefix("compass-test")
        .rand_bytes(20)
        .tempdir()
        .context("creating tmp dir")
}

/// Copy the launcher binary into `dir` so that the copy resolves
/// `dir` as its install directory. Tests must copy rather than
/// symlink here: a symlink would resolve back to the cargo target
/// dir and the fixture bundle would never be found.
pub fn install_launcher(dir: &Path) -> anyhow::Result<PathBuf> {
    let dst = dir.join("compass");
    fs::copy(launcher_bin(), &dst).context("copying launcher into fixture dir")?;
    Ok(dst)
}

/// Lay out a fake terminal bundle under `dir`, backed by the given
/// shell script body.
pub fn install_terminal(dir: &Path, script: &str) -> anyhow::Result<PathBuf> {
    let subdir = dir.join(TERMINAL_SUBDIR);
    fs::create_dir_all(&subdir).context("creating bundle subdir")?;

    let bin = subdir.join(TERMINAL_BIN);
    fs::write(&bin, script).context("writing fake terminal script")?;
    let mut perms = fs::metadata(&bin)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&bin, perms).context("marking fake terminal executable")?;

    Ok(bin)
}

pub fn dump_err<F>(f: F) -> anyhow::Result<()>
where
    F: FnOnce() -> anyhow::Result<()>,
{
    let res = f();
    if let Err(e) = &res {
        eprintln!("TEST ERR: {:?}", e);
    }
    res
}
