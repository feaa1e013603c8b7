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

//! Response decoding.
//!
//! The transport hands the raw payload of a successful response to
//! [decode], with the response type named by the
//! [Binding][crate::request::Binding] of the options used in the call.
//!
//! # Example
//! ```
//! # use discovery_gax::response::decode;
//! #[derive(serde::Deserialize)]
//! struct Completions {
//!     completions: Option<Vec<String>>,
//! }
//! let got: Completions = decode(br#"{"completions": ["ibm", "ibm cloud"]}"#)?;
//! assert_eq!(got.completions.map(|v| v.len()), Some(2));
//!
//! // Operations without content decode to `()`.
//! decode::<()>(b"")?;
//! # discovery_gax::Result::<()>::Ok(())
//! ```

use crate::Result;
use crate::error::Error;

/// Decodes `payload` as `T`.
///
/// An empty (or all whitespace) payload is treated as JSON `null`, so
/// operations without content decode to `()` and optional responses to
/// `None`.
pub fn decode<T>(payload: &[u8]) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let payload: &[u8] = if payload.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        payload
    };
    serde_json::from_slice(payload).map_err(|e| {
        tracing::debug!("cannot decode response payload: {e}");
        Error::deser(e)
    })
}
