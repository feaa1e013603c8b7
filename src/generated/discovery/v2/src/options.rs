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

//! The options for each operation.
//!
//! Each operation takes one options value. Options are immutable once built:
//! use the builder to set values, [build()] to validate them, and
//! `to_builder()` to derive a modified copy.
//!
//! Required values can be passed to the builder's `new()` function or set
//! one at a time. `build()` fails with an invalid argument error naming the
//! first required value that is missing or empty.
//!
//! # Example
//! ```
//! # use discovery_v2::options::{AddDocumentOptions, CreateCollectionOptionsBuilder};
//! let options = CreateCollectionOptionsBuilder::new("p1", "Contracts")
//!     .set_language("en")
//!     .build()?;
//! assert_eq!(options.project_id(), "p1");
//! assert_eq!(options.name(), "Contracts");
//!
//! let err = AddDocumentOptions::builder()
//!     .set_project_id("p1")
//!     .build()
//!     .unwrap_err();
//! assert!(err.is_invalid_argument(), "{err:?}");
//! assert!(err.to_string().contains("collection_id"), "{err}");
//! # discovery_v2::Result::<()>::Ok(())
//! ```
//!
//! [build()]: CreateCollectionOptionsBuilder::build

mod classifiers;
mod collections;
mod documents;
mod enrichments;
mod projects;
mod queries;
mod training;
mod user_data;

pub use classifiers::*;
pub use collections::*;
pub use documents::*;
pub use enrichments::*;
pub use projects::*;
pub use queries::*;
pub use training::*;
pub use user_data::*;
