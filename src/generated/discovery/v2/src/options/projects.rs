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

//! Options for the project operations.

use crate::Result;
use gax::validator;

/// The options for [list_projects][crate::client::Discovery::list_projects].
///
/// Lists existing projects for this instance.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListProjectsOptions {}

impl ListProjectsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListProjectsOptionsBuilder {
        ListProjectsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListProjectsOptionsBuilder {
        ListProjectsOptionsBuilder::default()
    }
}

/// A builder for [ListProjectsOptions].
#[derive(Clone, Debug, Default)]
pub struct ListProjectsOptionsBuilder {}

impl ListProjectsOptionsBuilder {
    /// Validates the values and returns the [ListProjectsOptions].
    pub fn build(self) -> Result<ListProjectsOptions> {
        Ok(ListProjectsOptions {})
    }
}

/// The options for [create_project][crate::client::Discovery::create_project].
///
/// Create a new project for this instance.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CreateProjectOptions {
    name: String,
    project_type: String,
    default_query_parameters: std::option::Option<crate::model::DefaultQueryParams>,
}

impl CreateProjectOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> CreateProjectOptionsBuilder {
        CreateProjectOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> CreateProjectOptionsBuilder {
        CreateProjectOptionsBuilder {
            name: Some(self.name.clone()),
            project_type: Some(self.project_type.clone()),
            default_query_parameters: self.default_query_parameters.clone(),
        }
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of `project_type`.
    pub fn project_type(&self) -> &str {
        &self.project_type
    }

    /// Returns the value of `default_query_parameters`.
    pub fn default_query_parameters(&self) -> Option<&crate::model::DefaultQueryParams> {
        self.default_query_parameters.as_ref()
    }
}

/// A builder for [CreateProjectOptions].
#[derive(Clone, Debug, Default)]
pub struct CreateProjectOptionsBuilder {
    name: std::option::Option<String>,
    project_type: std::option::Option<String>,
    default_query_parameters: std::option::Option<crate::model::DefaultQueryParams>,
}

impl CreateProjectOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            project_type: Some(project_type.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [name][CreateProjectOptions::name].
    ///
    /// The human readable name of this project.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [project_type][CreateProjectOptions::project_type].
    ///
    /// The type of project.
    ///
    /// See [project_details::r#type][crate::model::project_details::r#type] for the known values.
    pub fn set_project_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_type = Some(v.into());
        self
    }

    /// Sets the value of [default_query_parameters][CreateProjectOptions::default_query_parameters].
    ///
    /// Default query parameters for this project.
    pub fn set_default_query_parameters<T: std::convert::Into<crate::model::DefaultQueryParams>>(
        mut self,
        v: T,
    ) -> Self {
        self.default_query_parameters = Some(v.into());
        self
    }

    /// Sets or clears the value of [default_query_parameters][CreateProjectOptions::default_query_parameters].
    pub fn set_or_clear_default_query_parameters<T: std::convert::Into<crate::model::DefaultQueryParams>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.default_query_parameters = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [CreateProjectOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<CreateProjectOptions> {
        let name = validator::not_empty("name", self.name)?;
        let project_type = validator::not_empty("project_type", self.project_type)?;
        Ok(CreateProjectOptions {
            name,
            project_type,
            default_query_parameters: self.default_query_parameters,
        })
    }
}

/// The options for [get_project][crate::client::Discovery::get_project].
///
/// Get details on the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetProjectOptions {
    project_id: String,
}

impl GetProjectOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetProjectOptionsBuilder {
        GetProjectOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetProjectOptionsBuilder {
        GetProjectOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [GetProjectOptions].
#[derive(Clone, Debug, Default)]
pub struct GetProjectOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl GetProjectOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][GetProjectOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetProjectOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetProjectOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(GetProjectOptions {
            project_id,
        })
    }
}

/// The options for [update_project][crate::client::Discovery::update_project].
///
/// Update the specified project's name.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateProjectOptions {
    project_id: String,
    name: std::option::Option<String>,
}

impl UpdateProjectOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateProjectOptionsBuilder {
        UpdateProjectOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateProjectOptionsBuilder {
        UpdateProjectOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            name: self.name.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A builder for [UpdateProjectOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateProjectOptionsBuilder {
    project_id: std::option::Option<String>,
    name: std::option::Option<String>,
}

impl UpdateProjectOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateProjectOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateProjectOptions::name].
    ///
    /// The new name to give this project.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateProjectOptions::name].
    pub fn set_or_clear_name<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [UpdateProjectOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<UpdateProjectOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(UpdateProjectOptions {
            project_id,
            name: self.name,
        })
    }
}

/// The options for [delete_project][crate::client::Discovery::delete_project].
///
/// Deletes the specified project.
///
/// **Important:** Deleting a project deletes everything that is part of the
/// specified project, including all collections.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteProjectOptions {
    project_id: String,
}

impl DeleteProjectOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteProjectOptionsBuilder {
        DeleteProjectOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteProjectOptionsBuilder {
        DeleteProjectOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [DeleteProjectOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteProjectOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl DeleteProjectOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteProjectOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteProjectOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteProjectOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(DeleteProjectOptions {
            project_id,
        })
    }
}

/// The options for [list_fields][crate::client::Discovery::list_fields].
///
/// Gets a list of the unique fields (and their types) stored in the specified
/// collections.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListFieldsOptions {
    project_id: String,
    collection_ids: std::option::Option<std::vec::Vec<String>>,
}

impl ListFieldsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListFieldsOptionsBuilder {
        ListFieldsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListFieldsOptionsBuilder {
        ListFieldsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_ids: self.collection_ids.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `collection_ids`.
    pub fn collection_ids(&self) -> Option<&[String]> {
        self.collection_ids.as_deref()
    }
}

/// A builder for [ListFieldsOptions].
#[derive(Clone, Debug, Default)]
pub struct ListFieldsOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_ids: std::option::Option<std::vec::Vec<String>>,
}

impl ListFieldsOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][ListFieldsOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_ids][ListFieldsOptions::collection_ids].
    ///
    /// Comma separated list of the collection IDs. If this parameter is not
    /// specified, all collections in the project are used.
    pub fn set_collection_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.collection_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [collection_ids][ListFieldsOptions::collection_ids].
    pub fn add_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_ids.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Validates the values and returns the [ListFieldsOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListFieldsOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(ListFieldsOptions {
            project_id,
            collection_ids: self.collection_ids,
        })
    }
}
