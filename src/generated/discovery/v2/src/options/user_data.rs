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

//! Options to delete labeled user data.

use crate::Result;
use gax::validator;

/// The options for [delete_user_data][crate::client::Discovery::delete_user_data].
///
/// Deletes all data associated with a specified customer ID. The method has no
/// effect if no data is associated with the customer ID.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteUserDataOptions {
    customer_id: String,
}

impl DeleteUserDataOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteUserDataOptionsBuilder {
        DeleteUserDataOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteUserDataOptionsBuilder {
        DeleteUserDataOptionsBuilder {
            customer_id: Some(self.customer_id.clone()),
        }
    }

    /// Returns the value of `customer_id`.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

/// A builder for [DeleteUserDataOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteUserDataOptionsBuilder {
    customer_id: std::option::Option<String>,
}

impl DeleteUserDataOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
        }
    }

    /// Sets the value of [customer_id][DeleteUserDataOptions::customer_id].
    ///
    /// The customer ID for which all data is to be deleted.
    pub fn set_customer_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.customer_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteUserDataOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteUserDataOptions> {
        let customer_id = validator::not_empty("customer_id", self.customer_id)?;
        Ok(DeleteUserDataOptions {
            customer_id,
        })
    }
}
