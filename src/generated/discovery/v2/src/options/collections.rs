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

//! Options for the collection operations.

use crate::Result;
use gax::validator;

/// The options for [list_collections][crate::client::Discovery::list_collections].
///
/// Lists existing collections for the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListCollectionsOptions {
    project_id: String,
}

impl ListCollectionsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListCollectionsOptionsBuilder {
        ListCollectionsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListCollectionsOptionsBuilder {
        ListCollectionsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [ListCollectionsOptions].
#[derive(Clone, Debug, Default)]
pub struct ListCollectionsOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl ListCollectionsOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][ListCollectionsOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [ListCollectionsOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListCollectionsOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(ListCollectionsOptions {
            project_id,
        })
    }
}

/// The options for [create_collection][crate::client::Discovery::create_collection].
///
/// Create a new collection in the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CreateCollectionOptions {
    project_id: String,
    name: String,
    description: std::option::Option<String>,
    language: std::option::Option<String>,
    ocr_enabled: std::option::Option<bool>,
    enrichments: std::option::Option<std::vec::Vec<crate::model::CollectionEnrichment>>,
    smart_document_understanding: std::option::Option<crate::model::CollectionDetailsSmartDocumentUnderstanding>,
}

impl CreateCollectionOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> CreateCollectionOptionsBuilder {
        CreateCollectionOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> CreateCollectionOptionsBuilder {
        CreateCollectionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            name: Some(self.name.clone()),
            description: self.description.clone(),
            language: self.language.clone(),
            ocr_enabled: self.ocr_enabled,
            enrichments: self.enrichments.clone(),
            smart_document_understanding: self.smart_document_understanding.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of `description`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the value of `language`.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the value of `ocr_enabled`.
    pub fn ocr_enabled(&self) -> Option<bool> {
        self.ocr_enabled
    }

    /// Returns the value of `enrichments`.
    pub fn enrichments(&self) -> Option<&[crate::model::CollectionEnrichment]> {
        self.enrichments.as_deref()
    }

    /// Returns the value of `smart_document_understanding`.
    pub fn smart_document_understanding(&self) -> Option<&crate::model::CollectionDetailsSmartDocumentUnderstanding> {
        self.smart_document_understanding.as_ref()
    }
}

/// A builder for [CreateCollectionOptions].
#[derive(Clone, Debug, Default)]
pub struct CreateCollectionOptionsBuilder {
    project_id: std::option::Option<String>,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
    language: std::option::Option<String>,
    ocr_enabled: std::option::Option<bool>,
    enrichments: std::option::Option<std::vec::Vec<crate::model::CollectionEnrichment>>,
    smart_document_understanding: std::option::Option<crate::model::CollectionDetailsSmartDocumentUnderstanding>,
}

impl CreateCollectionOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][CreateCollectionOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [name][CreateCollectionOptions::name].
    ///
    /// The name of the collection.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateCollectionOptions::description].
    ///
    /// A description of the collection.
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][CreateCollectionOptions::description].
    pub fn set_or_clear_description<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language][CreateCollectionOptions::language].
    ///
    /// The language of the collection. For a list of supported languages, see the
    /// product documentation.
    pub fn set_language<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Sets or clears the value of [language][CreateCollectionOptions::language].
    pub fn set_or_clear_language<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.language = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ocr_enabled][CreateCollectionOptions::ocr_enabled].
    ///
    /// If set to `true`, optical character recognition (OCR) is enabled.
    pub fn set_ocr_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.ocr_enabled = Some(v.into());
        self
    }

    /// Sets or clears the value of [ocr_enabled][CreateCollectionOptions::ocr_enabled].
    pub fn set_or_clear_ocr_enabled<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ocr_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enrichments][CreateCollectionOptions::enrichments].
    ///
    /// An array of enrichments that are applied to this collection.
    pub fn set_enrichments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CollectionEnrichment>,
    {
        self.enrichments = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [enrichments][CreateCollectionOptions::enrichments].
    pub fn add_enrichment<T: std::convert::Into<crate::model::CollectionEnrichment>>(
        mut self,
        v: T,
    ) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [smart_document_understanding][CreateCollectionOptions::smart_document_understanding].
    pub fn set_smart_document_understanding<T: std::convert::Into<crate::model::CollectionDetailsSmartDocumentUnderstanding>>(
        mut self,
        v: T,
    ) -> Self {
        self.smart_document_understanding = Some(v.into());
        self
    }

    /// Sets or clears the value of [smart_document_understanding][CreateCollectionOptions::smart_document_understanding].
    pub fn set_or_clear_smart_document_understanding<T: std::convert::Into<crate::model::CollectionDetailsSmartDocumentUnderstanding>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.smart_document_understanding = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [CreateCollectionOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<CreateCollectionOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let name = validator::not_empty("name", self.name)?;
        Ok(CreateCollectionOptions {
            project_id,
            name,
            description: self.description,
            language: self.language,
            ocr_enabled: self.ocr_enabled,
            enrichments: self.enrichments,
            smart_document_understanding: self.smart_document_understanding,
        })
    }
}

/// The options for [get_collection][crate::client::Discovery::get_collection].
///
/// Get details about the specified collection.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetCollectionOptions {
    project_id: String,
    collection_id: String,
}

impl GetCollectionOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetCollectionOptionsBuilder {
        GetCollectionOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetCollectionOptionsBuilder {
        GetCollectionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `collection_id`.
    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }
}

/// A builder for [GetCollectionOptions].
#[derive(Clone, Debug, Default)]
pub struct GetCollectionOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
}

impl GetCollectionOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
        }
    }

    /// Sets the value of [project_id][GetCollectionOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][GetCollectionOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetCollectionOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetCollectionOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        Ok(GetCollectionOptions {
            project_id,
            collection_id,
        })
    }
}

/// The options for [update_collection][crate::client::Discovery::update_collection].
///
/// Updates the specified collection's name, description, and enrichments.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateCollectionOptions {
    project_id: String,
    collection_id: String,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
    ocr_enabled: std::option::Option<bool>,
    enrichments: std::option::Option<std::vec::Vec<crate::model::CollectionEnrichment>>,
}

impl UpdateCollectionOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateCollectionOptionsBuilder {
        UpdateCollectionOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateCollectionOptionsBuilder {
        UpdateCollectionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            ocr_enabled: self.ocr_enabled,
            enrichments: self.enrichments.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `collection_id`.
    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the value of `description`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the value of `ocr_enabled`.
    pub fn ocr_enabled(&self) -> Option<bool> {
        self.ocr_enabled
    }

    /// Returns the value of `enrichments`.
    pub fn enrichments(&self) -> Option<&[crate::model::CollectionEnrichment]> {
        self.enrichments.as_deref()
    }
}

/// A builder for [UpdateCollectionOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateCollectionOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
    ocr_enabled: std::option::Option<bool>,
    enrichments: std::option::Option<std::vec::Vec<crate::model::CollectionEnrichment>>,
}

impl UpdateCollectionOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateCollectionOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][UpdateCollectionOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateCollectionOptions::name].
    ///
    /// The new name of the collection.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateCollectionOptions::name].
    pub fn set_or_clear_name<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][UpdateCollectionOptions::description].
    ///
    /// The new description of the collection.
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][UpdateCollectionOptions::description].
    pub fn set_or_clear_description<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ocr_enabled][UpdateCollectionOptions::ocr_enabled].
    pub fn set_ocr_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.ocr_enabled = Some(v.into());
        self
    }

    /// Sets or clears the value of [ocr_enabled][UpdateCollectionOptions::ocr_enabled].
    pub fn set_or_clear_ocr_enabled<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.ocr_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enrichments][UpdateCollectionOptions::enrichments].
    ///
    /// An array of enrichments that are applied to this collection.
    pub fn set_enrichments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CollectionEnrichment>,
    {
        self.enrichments = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [enrichments][UpdateCollectionOptions::enrichments].
    pub fn add_enrichment<T: std::convert::Into<crate::model::CollectionEnrichment>>(
        mut self,
        v: T,
    ) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Validates the values and returns the [UpdateCollectionOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<UpdateCollectionOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        Ok(UpdateCollectionOptions {
            project_id,
            collection_id,
            name: self.name,
            description: self.description,
            ocr_enabled: self.ocr_enabled,
            enrichments: self.enrichments,
        })
    }
}

/// The options for [delete_collection][crate::client::Discovery::delete_collection].
///
/// Deletes the specified collection from the project. All documents stored in
/// the specified collection and not shared is also deleted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteCollectionOptions {
    project_id: String,
    collection_id: String,
}

impl DeleteCollectionOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteCollectionOptionsBuilder {
        DeleteCollectionOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteCollectionOptionsBuilder {
        DeleteCollectionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `collection_id`.
    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }
}

/// A builder for [DeleteCollectionOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteCollectionOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
}

impl DeleteCollectionOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteCollectionOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][DeleteCollectionOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteCollectionOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteCollectionOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        Ok(DeleteCollectionOptions {
            project_id,
            collection_id,
        })
    }
}
