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
/// compass is the launcher shim that ships at the root of the
/// Compass Terminal install bundle. It shows the retirement notice
/// and a startup tip, then execs the bundled terminal binary that
/// lives alongside it.
use clap::Parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    let args = libcompass::Args::parse();

    if args.version {
        println!("compass {}", VERSION);
        return Ok(());
    }

    libcompass::run(args)
}
