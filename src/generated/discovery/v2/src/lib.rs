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

//! Rust client library for the IBM Watson Discovery v2 API.
//!
//! This crate contains the request options, the response models, and a client
//! facade for every Discovery v2 operation. The client delegates each call to a
//! [stub][crate::stub::Discovery], which owns the transport. Every options
//! type also implements [Binding], which describes the HTTP request for the
//! operation, and [decode] turns a response payload into the operation's
//! response type.
//!
//! # Example
//! ```
//! # use discovery_v2::{Binding, ClientConfig};
//! # use discovery_v2::options::CreateCollectionOptionsBuilder;
//! let options = CreateCollectionOptionsBuilder::new("p1", "Contracts")
//!     .set_description("Signed contracts")
//!     .build()?;
//! let config = ClientConfig::new("2023-03-31")?;
//! let request = options.bind(&config)?;
//! assert_eq!(request.path(), "/v2/projects/p1/collections");
//! assert_eq!(request.query_value("version"), Some("2023-03-31"));
//! # discovery_v2::Result::<()>::Ok(())
//! ```

pub use gax::Result;
pub use gax::client_config::ClientConfig;
pub use gax::error::Error;
pub use gax::request::{Binding, Body, FormPart, HttpRequest};
pub use gax::response::decode;

pub mod client;
pub mod model;
pub mod options;
pub mod stub;

mod tracing;
mod transport;
