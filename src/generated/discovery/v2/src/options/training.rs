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

//! Options for the training data operations.

use crate::Result;
use gax::validator;

/// The options for [list_training_queries][crate::client::Discovery::list_training_queries].
///
/// List the training queries for the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListTrainingQueriesOptions {
    project_id: String,
}

impl ListTrainingQueriesOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListTrainingQueriesOptionsBuilder {
        ListTrainingQueriesOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListTrainingQueriesOptionsBuilder {
        ListTrainingQueriesOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [ListTrainingQueriesOptions].
#[derive(Clone, Debug, Default)]
pub struct ListTrainingQueriesOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl ListTrainingQueriesOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][ListTrainingQueriesOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [ListTrainingQueriesOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListTrainingQueriesOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(ListTrainingQueriesOptions {
            project_id,
        })
    }
}

/// The options for [delete_training_queries][crate::client::Discovery::delete_training_queries].
///
/// Removes all training queries for the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteTrainingQueriesOptions {
    project_id: String,
}

impl DeleteTrainingQueriesOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteTrainingQueriesOptionsBuilder {
        DeleteTrainingQueriesOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteTrainingQueriesOptionsBuilder {
        DeleteTrainingQueriesOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [DeleteTrainingQueriesOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteTrainingQueriesOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl DeleteTrainingQueriesOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteTrainingQueriesOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteTrainingQueriesOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteTrainingQueriesOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(DeleteTrainingQueriesOptions {
            project_id,
        })
    }
}

/// The options for [create_training_query][crate::client::Discovery::create_training_query].
///
/// Add a query to the training data for this project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CreateTrainingQueryOptions {
    project_id: String,
    natural_language_query: String,
    examples: std::vec::Vec<crate::model::TrainingExample>,
    filter: std::option::Option<String>,
}

impl CreateTrainingQueryOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> CreateTrainingQueryOptionsBuilder {
        CreateTrainingQueryOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> CreateTrainingQueryOptionsBuilder {
        CreateTrainingQueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            natural_language_query: Some(self.natural_language_query.clone()),
            examples: Some(self.examples.clone()),
            filter: self.filter.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `natural_language_query`.
    pub fn natural_language_query(&self) -> &str {
        &self.natural_language_query
    }

    /// Returns the value of `examples`.
    pub fn examples(&self) -> &[crate::model::TrainingExample] {
        &self.examples
    }

    /// Returns the value of `filter`.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

/// A builder for [CreateTrainingQueryOptions].
#[derive(Clone, Debug, Default)]
pub struct CreateTrainingQueryOptionsBuilder {
    project_id: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    examples: std::option::Option<std::vec::Vec<crate::model::TrainingExample>>,
    filter: std::option::Option<String>,
}

impl CreateTrainingQueryOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        natural_language_query: impl Into<String>,
        examples: impl IntoIterator<Item = impl Into<crate::model::TrainingExample>>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            natural_language_query: Some(natural_language_query.into()),
            examples: Some(examples.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][CreateTrainingQueryOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [natural_language_query][CreateTrainingQueryOptions::natural_language_query].
    ///
    /// The natural text query that is used as the training query.
    pub fn set_natural_language_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.natural_language_query = Some(v.into());
        self
    }

    /// Sets the value of [examples][CreateTrainingQueryOptions::examples].
    ///
    /// Array of training examples.
    pub fn set_examples<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TrainingExample>,
    {
        self.examples = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [examples][CreateTrainingQueryOptions::examples].
    pub fn add_example<T: std::convert::Into<crate::model::TrainingExample>>(
        mut self,
        v: T,
    ) -> Self {
        self.examples.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [filter][CreateTrainingQueryOptions::filter].
    ///
    /// The filter used on the collection before the `natural_language_query` is
    /// applied.
    pub fn set_filter<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][CreateTrainingQueryOptions::filter].
    pub fn set_or_clear_filter<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [CreateTrainingQueryOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<CreateTrainingQueryOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let natural_language_query =
            validator::not_empty("natural_language_query", self.natural_language_query)?;
        let examples = validator::not_null("examples", self.examples)?;
        Ok(CreateTrainingQueryOptions {
            project_id,
            natural_language_query,
            examples,
            filter: self.filter,
        })
    }
}

/// The options for [get_training_query][crate::client::Discovery::get_training_query].
///
/// Get details for a specific training data query.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetTrainingQueryOptions {
    project_id: String,
    query_id: String,
}

impl GetTrainingQueryOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetTrainingQueryOptionsBuilder {
        GetTrainingQueryOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetTrainingQueryOptionsBuilder {
        GetTrainingQueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            query_id: Some(self.query_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `query_id`.
    pub fn query_id(&self) -> &str {
        &self.query_id
    }
}

/// A builder for [GetTrainingQueryOptions].
#[derive(Clone, Debug, Default)]
pub struct GetTrainingQueryOptionsBuilder {
    project_id: std::option::Option<String>,
    query_id: std::option::Option<String>,
}

impl GetTrainingQueryOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, query_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            query_id: Some(query_id.into()),
        }
    }

    /// Sets the value of [project_id][GetTrainingQueryOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [query_id][GetTrainingQueryOptions::query_id].
    pub fn set_query_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetTrainingQueryOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetTrainingQueryOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let query_id = validator::not_empty("query_id", self.query_id)?;
        Ok(GetTrainingQueryOptions {
            project_id,
            query_id,
        })
    }
}

/// The options for [update_training_query][crate::client::Discovery::update_training_query].
///
/// Updates an existing training query and its examples.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateTrainingQueryOptions {
    project_id: String,
    query_id: String,
    natural_language_query: String,
    examples: std::vec::Vec<crate::model::TrainingExample>,
    filter: std::option::Option<String>,
}

impl UpdateTrainingQueryOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateTrainingQueryOptionsBuilder {
        UpdateTrainingQueryOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateTrainingQueryOptionsBuilder {
        UpdateTrainingQueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            query_id: Some(self.query_id.clone()),
            natural_language_query: Some(self.natural_language_query.clone()),
            examples: Some(self.examples.clone()),
            filter: self.filter.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `query_id`.
    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    /// Returns the value of `natural_language_query`.
    pub fn natural_language_query(&self) -> &str {
        &self.natural_language_query
    }

    /// Returns the value of `examples`.
    pub fn examples(&self) -> &[crate::model::TrainingExample] {
        &self.examples
    }

    /// Returns the value of `filter`.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

/// A builder for [UpdateTrainingQueryOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateTrainingQueryOptionsBuilder {
    project_id: std::option::Option<String>,
    query_id: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    examples: std::option::Option<std::vec::Vec<crate::model::TrainingExample>>,
    filter: std::option::Option<String>,
}

impl UpdateTrainingQueryOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        query_id: impl Into<String>,
        natural_language_query: impl Into<String>,
        examples: impl IntoIterator<Item = impl Into<crate::model::TrainingExample>>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            query_id: Some(query_id.into()),
            natural_language_query: Some(natural_language_query.into()),
            examples: Some(examples.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateTrainingQueryOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [query_id][UpdateTrainingQueryOptions::query_id].
    pub fn set_query_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query_id = Some(v.into());
        self
    }

    /// Sets the value of [natural_language_query][UpdateTrainingQueryOptions::natural_language_query].
    ///
    /// The natural text query that is used as the training query.
    pub fn set_natural_language_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.natural_language_query = Some(v.into());
        self
    }

    /// Sets the value of [examples][UpdateTrainingQueryOptions::examples].
    ///
    /// Array of training examples.
    pub fn set_examples<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TrainingExample>,
    {
        self.examples = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [examples][UpdateTrainingQueryOptions::examples].
    pub fn add_example<T: std::convert::Into<crate::model::TrainingExample>>(
        mut self,
        v: T,
    ) -> Self {
        self.examples.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [filter][UpdateTrainingQueryOptions::filter].
    ///
    /// The filter used on the collection before the `natural_language_query` is
    /// applied.
    pub fn set_filter<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][UpdateTrainingQueryOptions::filter].
    pub fn set_or_clear_filter<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [UpdateTrainingQueryOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<UpdateTrainingQueryOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let query_id = validator::not_empty("query_id", self.query_id)?;
        let natural_language_query =
            validator::not_empty("natural_language_query", self.natural_language_query)?;
        let examples = validator::not_null("examples", self.examples)?;
        Ok(UpdateTrainingQueryOptions {
            project_id,
            query_id,
            natural_language_query,
            examples,
            filter: self.filter,
        })
    }
}

/// The options for [delete_training_query][crate::client::Discovery::delete_training_query].
///
/// Removes details from a training data query, including the query string and
/// all examples.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteTrainingQueryOptions {
    project_id: String,
    query_id: String,
}

impl DeleteTrainingQueryOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteTrainingQueryOptionsBuilder {
        DeleteTrainingQueryOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteTrainingQueryOptionsBuilder {
        DeleteTrainingQueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            query_id: Some(self.query_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `query_id`.
    pub fn query_id(&self) -> &str {
        &self.query_id
    }
}

/// A builder for [DeleteTrainingQueryOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteTrainingQueryOptionsBuilder {
    project_id: std::option::Option<String>,
    query_id: std::option::Option<String>,
}

impl DeleteTrainingQueryOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, query_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            query_id: Some(query_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteTrainingQueryOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [query_id][DeleteTrainingQueryOptions::query_id].
    pub fn set_query_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteTrainingQueryOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteTrainingQueryOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let query_id = validator::not_empty("query_id", self.query_id)?;
        Ok(DeleteTrainingQueryOptions {
            project_id,
            query_id,
        })
    }
}
