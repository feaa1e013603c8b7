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

//! Field-presence checks used by the options builders.
//!
//! Each options builder calls these helpers from its `build()` function, in
//! declaration order, and returns the first failure. The failures are
//! [Error][crate::error::Error] values of the
//! [invalid argument][crate::error::Error::is_invalid_argument] kind, wrapping
//! a [ValidationError] that names the offending field.

use crate::Result;
use crate::error::Error;

/// The precondition that an options value failed.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required string field is unset or empty.
    #[error("`{0}` cannot be empty")]
    Empty(&'static str),
    /// A required non-string field is unset.
    #[error("`{0}` must be set")]
    Missing(&'static str),
    /// A constraint across several fields is violated.
    #[error("{0}")]
    Constraint(&'static str),
}

impl ValidationError {
    /// The name of the field that failed validation, if the failure is
    /// attributed to a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Empty(f) | Self::Missing(f) => Some(f),
            Self::Constraint(_) => None,
        }
    }
}

/// Returns the value of a required string field.
///
/// Fails if the value is unset or the empty string.
///
/// # Example
/// ```
/// # use discovery_gax::validator;
/// let id = validator::not_empty("project_id", Some("p1".to_string()))?;
/// assert_eq!(id, "p1");
/// let err = validator::not_empty("project_id", None).unwrap_err();
/// assert!(err.is_invalid_argument());
/// # discovery_gax::Result::<()>::Ok(())
/// ```
pub fn not_empty(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::invalid_argument(ValidationError::Empty(field))),
    }
}

/// Returns the value of a required, non-string, field.
pub fn not_null<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::invalid_argument(ValidationError::Missing(field)))
}

/// Fails with `message` unless `condition` holds.
pub fn is_true(condition: bool, message: &'static str) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(Error::invalid_argument(ValidationError::Constraint(message)))
}
