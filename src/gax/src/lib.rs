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

//! Request plumbing shared by the Discovery client libraries.
//!
//! This crate contains the types and functions used by the generated
//! Discovery client to validate options, bind them to HTTP requests, and
//! decode the service responses. The crate never performs network I/O: the
//! [HttpRequest][request::HttpRequest] descriptors it produces are handed to
//! whatever transport the application uses.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions validating, binding, or
/// decoding requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Helpers to validate required fields in options builders.
pub mod validator;

/// Defines helpers to format and encode path parameters.
pub mod path_parameter;

/// Defines a trait to serialize query parameters.
pub mod query_parameter;

/// Implementation details for [query_parameter] and [path_parameter].
mod request_parameter;

/// Service endpoint, API version, and logging configuration.
pub mod client_config;

/// The transport-neutral description of an HTTP request.
pub mod request;

/// Decoding of service responses.
pub mod response;

/// Loads local files used as upload payloads.
pub mod upload_source;

#[doc(hidden)]
pub mod unimplemented;
