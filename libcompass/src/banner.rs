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

// The banner and the notice are frozen literals. Users pattern-match
// on this output by eye, so edits here are user visible in a way that
// normal code changes are not.

const BANNER: &str = r#"
   ______
  / ____/___  ____ ___  ____  ____ ___________
 / /   / __ \/ __ `__ \/ __ \/ __ `/ ___/ ___/
/ /___/ /_/ / / / / / / /_/ / /_/ (__  |__  )
\____/\____/_/ /_/ /_/ .___/\__,_/____/____/
                    /_/

              C o m p a s s   T e r m i n a l
"#;

const NOTICE: &str = "The Compass Terminal as you know it is being retired.

Active development has moved to the Compass CLI, a leaner command
line interface built directly on the Compass data platform. This
bundled terminal keeps working, but it no longer receives new
features or data source fixes.

Install the successor and bring your routines with you:

    https://docs.compasshq.dev/cli/migration
";

/// Write the banner and the retirement notice to stdout.
pub fn print() {
    println!("{BANNER}");
    println!("{NOTICE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_multiline_art() {
        assert!(BANNER.lines().count() > 5);
        assert!(BANNER.contains("C o m p a s s"));
    }

    #[test]
    fn notice_points_at_the_successor() {
        assert!(NOTICE.contains("Compass CLI"));
        assert!(NOTICE.contains("https://docs.compasshq.dev/cli/migration"));
    }
}
