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

/// Formats a scalar for use in the request URL or headers.
///
/// The trait is public so it can appear in the bounds of public functions,
/// but the module is private: applications cannot implement it.
pub trait RequestParameter {
    fn format(&self) -> String;
}

impl RequestParameter for i32 {
    fn format(&self) -> String {
        format!("{self}")
    }
}
impl RequestParameter for i64 {
    fn format(&self) -> String {
        format!("{self}")
    }
}
impl RequestParameter for u32 {
    fn format(&self) -> String {
        format!("{self}")
    }
}
impl RequestParameter for f64 {
    fn format(&self) -> String {
        format!("{self}")
    }
}
impl RequestParameter for bool {
    fn format(&self) -> String {
        format!("{self}")
    }
}
impl RequestParameter for String {
    fn format(&self) -> String {
        self.clone()
    }
}
impl RequestParameter for &str {
    fn format(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&42_i32, "42")]
    #[test_case(&-7_i64, "-7")]
    #[test_case(&3_u32, "3")]
    #[test_case(&0.25_f64, "0.25")]
    #[test_case(&true, "true")]
    #[test_case(&false, "false")]
    #[test_case(&"abc", "abc")]
    fn format(input: &dyn RequestParameter, want: &str) {
        assert_eq!(input.format(), want);
    }
}
