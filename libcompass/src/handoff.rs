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
    os::unix::process::CommandExt,
    path::{Path, PathBuf},
    process,
};

use anyhow::{bail, Context};
use nix::unistd::{access, AccessFlags};
use tracing::info;

use crate::consts;

fn target_path(base_dir: &Path) -> PathBuf {
    base_dir.join(consts::TERMINAL_SUBDIR).join(consts::TERMINAL_BIN)
}

/// Replace the launcher process with the bundled terminal.
///
/// The launcher forwards no arguments, leaves the environment
/// untouched, and does not redirect stdio. On success this never
/// returns: the terminal owns the process from here on, and its exit
/// status is what the launcher's caller eventually observes.
pub fn run(base_dir: &Path) -> anyhow::Result<()> {
    let target = target_path(base_dir);

    if !target.is_file() {
        bail!("terminal binary missing at {}", target.display());
    }
    access(&target, AccessFlags::X_OK)
        .with_context(|| format!("terminal binary at {} is not executable", target.display()))?;

    info!("handing off to {:?}", target);
    let err = process::Command::new(&target).exec();

    // exec only returns on failure
    Err(err).with_context(|| format!("launching {}", target.display()))
}
