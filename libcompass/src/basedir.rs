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

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};

/// Resolve the directory that physically contains the launcher
/// binary. Symlinks are followed, so a launcher reached through a
/// link in $PATH or a relative invocation still lands on the real
/// install directory. A launcher that cannot locate itself cannot
/// find the terminal bundle either, so any failure here is fatal.
pub fn resolve() -> anyhow::Result<PathBuf> {
    let exe = env::current_exe().context("locating launcher binary")?;
    dir_of(&exe)
}

fn dir_of(exe: &Path) -> anyhow::Result<PathBuf> {
    let exe = exe
        .canonicalize()
        .with_context(|| format!("canonicalizing launcher path {}", exe.display()))?;
    let dir = exe.parent().ok_or(anyhow!("launcher binary has no parent directory"))?;
    Ok(dir.to_path_buf())
}
