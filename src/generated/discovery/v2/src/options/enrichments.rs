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

//! Options for the enrichment operations.

use crate::Result;
use gax::upload_source::FileSource;
use gax::validator;

/// The options for [list_enrichments][crate::client::Discovery::list_enrichments].
///
/// Lists the enrichments available to this project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListEnrichmentsOptions {
    project_id: String,
}

impl ListEnrichmentsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListEnrichmentsOptionsBuilder {
        ListEnrichmentsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListEnrichmentsOptionsBuilder {
        ListEnrichmentsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [ListEnrichmentsOptions].
#[derive(Clone, Debug, Default)]
pub struct ListEnrichmentsOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl ListEnrichmentsOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][ListEnrichmentsOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [ListEnrichmentsOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListEnrichmentsOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(ListEnrichmentsOptions {
            project_id,
        })
    }
}

/// The options for [create_enrichment][crate::client::Discovery::create_enrichment].
///
/// Create an enrichment for use with the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CreateEnrichmentOptions {
    project_id: String,
    enrichment: crate::model::CreateEnrichment,
    file: std::option::Option<bytes::Bytes>,
}

impl CreateEnrichmentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> CreateEnrichmentOptionsBuilder {
        CreateEnrichmentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> CreateEnrichmentOptionsBuilder {
        CreateEnrichmentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            enrichment: Some(self.enrichment.clone()),
            file: self.file.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `enrichment`.
    pub fn enrichment(&self) -> &crate::model::CreateEnrichment {
        &self.enrichment
    }

    /// Returns the value of `file`.
    pub fn file(&self) -> Option<&bytes::Bytes> {
        self.file.as_ref()
    }
}

/// A builder for [CreateEnrichmentOptions].
#[derive(Clone, Debug, Default)]
pub struct CreateEnrichmentOptionsBuilder {
    project_id: std::option::Option<String>,
    enrichment: std::option::Option<crate::model::CreateEnrichment>,
    file: std::option::Option<bytes::Bytes>,
}

impl CreateEnrichmentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        enrichment: impl Into<crate::model::CreateEnrichment>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            enrichment: Some(enrichment.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][CreateEnrichmentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [enrichment][CreateEnrichmentOptions::enrichment].
    ///
    /// Information about a specific enrichment.
    pub fn set_enrichment<T: std::convert::Into<crate::model::CreateEnrichment>>(
        mut self,
        v: T,
    ) -> Self {
        self.enrichment = Some(v.into());
        self
    }

    /// Sets the value of [file][CreateEnrichmentOptions::file].
    ///
    /// The enrichment file to upload. Expected file types per enrichment are as
    /// follows: `.zip` for `uima_annotator`, `.zip` for `rule_based`, and `.pear`
    /// for `watson_knowledge_studio_model`.
    pub fn set_file<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets or clears the value of [file][CreateEnrichmentOptions::file].
    pub fn set_or_clear_file<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file = v.map(|x| x.into());
        self
    }

    /// Sets [file][CreateEnrichmentOptions::file] to the contents of the file at
    /// `path`.
    pub fn set_file_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let source = FileSource::from_path(path)?;
        Ok(self.set_file(source.into_parts().0))
    }

    /// Validates the values and returns the [CreateEnrichmentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<CreateEnrichmentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let enrichment = validator::not_null("enrichment", self.enrichment)?;
        Ok(CreateEnrichmentOptions {
            project_id,
            enrichment,
            file: self.file,
        })
    }
}

/// The options for [get_enrichment][crate::client::Discovery::get_enrichment].
///
/// Get details about a specific enrichment.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetEnrichmentOptions {
    project_id: String,
    enrichment_id: String,
}

impl GetEnrichmentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetEnrichmentOptionsBuilder {
        GetEnrichmentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetEnrichmentOptionsBuilder {
        GetEnrichmentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            enrichment_id: Some(self.enrichment_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `enrichment_id`.
    pub fn enrichment_id(&self) -> &str {
        &self.enrichment_id
    }
}

/// A builder for [GetEnrichmentOptions].
#[derive(Clone, Debug, Default)]
pub struct GetEnrichmentOptionsBuilder {
    project_id: std::option::Option<String>,
    enrichment_id: std::option::Option<String>,
}

impl GetEnrichmentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, enrichment_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            enrichment_id: Some(enrichment_id.into()),
        }
    }

    /// Sets the value of [project_id][GetEnrichmentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [enrichment_id][GetEnrichmentOptions::enrichment_id].
    pub fn set_enrichment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enrichment_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetEnrichmentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetEnrichmentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let enrichment_id = validator::not_empty("enrichment_id", self.enrichment_id)?;
        Ok(GetEnrichmentOptions {
            project_id,
            enrichment_id,
        })
    }
}

/// The options for [update_enrichment][crate::client::Discovery::update_enrichment].
///
/// Updates an existing enrichment's name and description.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateEnrichmentOptions {
    project_id: String,
    enrichment_id: String,
    name: String,
    description: std::option::Option<String>,
}

impl UpdateEnrichmentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateEnrichmentOptionsBuilder {
        UpdateEnrichmentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateEnrichmentOptionsBuilder {
        UpdateEnrichmentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            enrichment_id: Some(self.enrichment_id.clone()),
            name: Some(self.name.clone()),
            description: self.description.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `enrichment_id`.
    pub fn enrichment_id(&self) -> &str {
        &self.enrichment_id
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of `description`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A builder for [UpdateEnrichmentOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateEnrichmentOptionsBuilder {
    project_id: std::option::Option<String>,
    enrichment_id: std::option::Option<String>,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
}

impl UpdateEnrichmentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        enrichment_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            enrichment_id: Some(enrichment_id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateEnrichmentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [enrichment_id][UpdateEnrichmentOptions::enrichment_id].
    pub fn set_enrichment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enrichment_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateEnrichmentOptions::name].
    ///
    /// A new name for the enrichment.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateEnrichmentOptions::description].
    ///
    /// A new description for the enrichment.
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][UpdateEnrichmentOptions::description].
    pub fn set_or_clear_description<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [UpdateEnrichmentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<UpdateEnrichmentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let enrichment_id = validator::not_empty("enrichment_id", self.enrichment_id)?;
        let name = validator::not_empty("name", self.name)?;
        Ok(UpdateEnrichmentOptions {
            project_id,
            enrichment_id,
            name,
            description: self.description,
        })
    }
}

/// The options for [delete_enrichment][crate::client::Discovery::delete_enrichment].
///
/// Deletes an existing enrichment from the specified project.
///
/// **Note:** Only enrichments that have been manually created can be deleted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteEnrichmentOptions {
    project_id: String,
    enrichment_id: String,
}

impl DeleteEnrichmentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteEnrichmentOptionsBuilder {
        DeleteEnrichmentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteEnrichmentOptionsBuilder {
        DeleteEnrichmentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            enrichment_id: Some(self.enrichment_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `enrichment_id`.
    pub fn enrichment_id(&self) -> &str {
        &self.enrichment_id
    }
}

/// A builder for [DeleteEnrichmentOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteEnrichmentOptionsBuilder {
    project_id: std::option::Option<String>,
    enrichment_id: std::option::Option<String>,
}

impl DeleteEnrichmentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, enrichment_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            enrichment_id: Some(enrichment_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteEnrichmentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [enrichment_id][DeleteEnrichmentOptions::enrichment_id].
    pub fn set_enrichment_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enrichment_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteEnrichmentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteEnrichmentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let enrichment_id = validator::not_empty("enrichment_id", self.enrichment_id)?;
        Ok(DeleteEnrichmentOptions {
            project_id,
            enrichment_id,
        })
    }
}
