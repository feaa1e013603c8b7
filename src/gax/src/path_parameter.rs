// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Encoding of path parameters.
//!
//! Path parameters in the Discovery API are identifiers (project, collection,
//! document, ...) substituted into a single segment of the request path. The
//! options builders already reject empty identifiers, this module only
//! escapes the characters that would change the meaning of the path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// The set of characters that are percent encoded in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent encodes `value` so it can be used as a single path segment.
///
/// # Example
/// ```
/// # use discovery_gax::path_parameter::enc;
/// assert_eq!(enc("my project/1"), "my%20project%2F1");
/// ```
pub fn enc(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abc123", "abc123"; "plain")]
    #[test_case("a-b_c.d~e", "a-b_c.d~e"; "unreserved")]
    #[test_case("a/b", "a%2Fb"; "slash")]
    #[test_case("a b", "a%20b"; "space")]
    #[test_case("a?b#c", "a%3Fb%23c"; "query and fragment")]
    #[test_case("50%", "50%25"; "percent")]
    #[test_case("caf\u{e9}", "caf%C3%A9"; "utf8")]
    fn encode(input: &str, want: &str) {
        assert_eq!(enc(input), want);
    }
}
