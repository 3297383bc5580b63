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

// The bundle layout is a contract with the packaging pipeline, which
// places the launcher and the terminal directory side by side. Both
// values are relative to the launcher's own resolved directory and
// must never become absolute paths.
pub const TERMINAL_SUBDIR: &str = "compass-terminal";
pub const TERMINAL_BIN: &str = "compass-terminal";
