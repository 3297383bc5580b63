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

use rand::Rng;

// Most slots are intentionally blank so that most launches stay
// quiet. Resist the urge to fill them in.
const TIPS: [&str; 13] = [
    "",
    "Tip: `..` always takes you one menu up, and `home` jumps back to the root.",
    "",
    "",
    "Tip: chain menu names with `/` to jump straight in, like `stocks/ta`.",
    "",
    "",
    "",
    "Tip: `record` and `stop` capture your session as a routine you can replay with `exe`.",
    "",
    "",
    "Tip: run `about` from any menu to open that menu's documentation page.",
    "",
];

fn pick<R: Rng>(rng: &mut R) -> &'static str {
    TIPS[rng.gen_range(0..TIPS.len())]
}

/// Draw one entry from the tip pool and print it. A blank draw
/// prints an empty line, which keeps the spacing above the terminal
/// output consistent from run to run.
pub fn print_one() {
    println!("{}", pick(&mut rand::thread_rng()));
}
