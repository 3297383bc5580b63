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

use std::io::{self, Write};

use anyhow::{anyhow, Context};
use nix::unistd::isatty;
use tracing::debug;

/// Clear the terminal, if there is one to clear.
///
/// Everything that can go wrong here is cosmetic. With piped output
/// or a broken terminfo setup the launcher just moves on and prints
/// the banner into whatever the output is.
pub fn clear() {
    if !isatty(io::stdout()).unwrap_or(false) {
        debug!("stdout is not a tty, skipping clear");
        return;
    }

    match clear_code() {
        Ok(code) => {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(&code);
            let _ = stdout.flush();
        }
        Err(err) => {
            debug!("could not fetch clear code: {:?}", err);
        }
    }
}

fn clear_code() -> anyhow::Result<Vec<u8>> {
    let term_db = termini::TermInfo::from_env().context("loading terminfo db")?;
    let code = term_db
        .raw_string_cap(termini::StringCapability::ClearScreen)
        .ok_or(anyhow!("terminfo entry has no clear screen code"))?;
    Ok(Vec::from(code))
}
