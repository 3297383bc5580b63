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

use std::{fs, sync::Mutex};

use anyhow::Context;
use clap::Parser;
use tracing::info;

mod banner;
mod basedir;
mod consts;
mod handoff;
mod screen;
mod tips;

/// The command line arguments that the launcher expects.
/// These can be directly parsed with clap or manually
/// constructed in order to present some other user
/// interface.
///
/// NOTE: You must check the `version` flag and handle it
/// yourself in the wrapping binary. Clap won't do a good job
/// with its automatic version support for a library.
#[derive(Parser, Debug, Default)]
#[clap(author, about)]
pub struct Args {
    #[clap(
        short,
        long,
        action,
        long_help = "The file to write logs to

Logs are discarded by default so that nothing pollutes the
tty inherited by the bundled terminal."
    )]
    pub log_file: Option<String>,

    #[clap(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Show more in logs, may be provided multiple times",
    )]
    pub verbose: u8,

    #[clap(long, action, help = "Print the launcher version, then exit")]
    pub version: bool,
}

/// Run the launcher with the given arguments.
///
/// The sequence is fixed: resolve the install directory, clear the
/// screen, print the banner and retirement notice, print a startup
/// tip, then exec the bundled terminal. On a successful hand-off this
/// never returns because the process image has been replaced.
pub fn run(args: Args) -> anyhow::Result<()> {
    init_logging(&args)?;
    info!("\n\n======================== STARTING LAUNCHER ============================\n\n");

    let base_dir = basedir::resolve().context("resolving launcher install directory")?;
    info!("launcher lives in {:?}", base_dir);

    screen::clear();
    banner::print();
    tips::print_one();

    handoff::run(&base_dir)
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    // Without a log file we install no subscriber at all, which
    // makes every tracing macro a no-op. The launcher shares its
    // stdio with the terminal it is about to become, so stderr is
    // not an acceptable default sink here.
    let Some(log_file) = &args.log_file else {
        return Ok(());
    };

    let log_level = if args.verbose == 0 {
        tracing_subscriber::filter::LevelFilter::INFO
    } else if args.verbose == 1 {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::TRACE
    };

    let file = fs::File::create(log_file).context("unable to create log file")?;
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
