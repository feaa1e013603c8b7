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

//! Options for the document operations.

use crate::Result;
use gax::upload_source::FileSource;
use gax::validator;

/// The options for [list_documents][crate::client::Discovery::list_documents].
///
/// Lists the documents in the specified collection.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListDocumentsOptions {
    project_id: String,
    collection_id: String,
    count: std::option::Option<i64>,
    status: std::option::Option<std::vec::Vec<String>>,
    has_notices: std::option::Option<bool>,
    is_parent: std::option::Option<bool>,
    parent_document_id: std::option::Option<String>,
    sha256: std::option::Option<String>,
}

impl ListDocumentsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListDocumentsOptionsBuilder {
        ListDocumentsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListDocumentsOptionsBuilder {
        ListDocumentsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            count: self.count,
            status: self.status.clone(),
            has_notices: self.has_notices,
            is_parent: self.is_parent,
            parent_document_id: self.parent_document_id.clone(),
            sha256: self.sha256.clone(),
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

    /// Returns the value of `count`.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Returns the value of `status`.
    pub fn status(&self) -> Option<&[String]> {
        self.status.as_deref()
    }

    /// Returns the value of `has_notices`.
    pub fn has_notices(&self) -> Option<bool> {
        self.has_notices
    }

    /// Returns the value of `is_parent`.
    pub fn is_parent(&self) -> Option<bool> {
        self.is_parent
    }

    /// Returns the value of `parent_document_id`.
    pub fn parent_document_id(&self) -> Option<&str> {
        self.parent_document_id.as_deref()
    }

    /// Returns the value of `sha256`.
    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }
}

/// A builder for [ListDocumentsOptions].
#[derive(Clone, Debug, Default)]
pub struct ListDocumentsOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    count: std::option::Option<i64>,
    status: std::option::Option<std::vec::Vec<String>>,
    has_notices: std::option::Option<bool>,
    is_parent: std::option::Option<bool>,
    parent_document_id: std::option::Option<String>,
    sha256: std::option::Option<String>,
}

impl ListDocumentsOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][ListDocumentsOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][ListDocumentsOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [count][ListDocumentsOptions::count].
    ///
    /// The maximum number of documents to return. Up to 1,000 documents are
    /// returned by default.
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][ListDocumentsOptions::count].
    pub fn set_or_clear_count<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][ListDocumentsOptions::status].
    ///
    /// Filters the documents to include only documents with the specified
    /// ingestion status.
    pub fn set_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.status = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [status][ListDocumentsOptions::status].
    pub fn add_status<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.status.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [has_notices][ListDocumentsOptions::has_notices].
    ///
    /// If set to `true`, only documents that have notices, meaning documents for
    /// which errors or warnings were generated during the ingestion, are returned.
    pub fn set_has_notices<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.has_notices = Some(v.into());
        self
    }

    /// Sets or clears the value of [has_notices][ListDocumentsOptions::has_notices].
    pub fn set_or_clear_has_notices<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.has_notices = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_parent][ListDocumentsOptions::is_parent].
    ///
    /// If set to `true`, only parent documents, meaning documents that were split
    /// during the ingestion process and resulted in two or more child documents,
    /// are returned.
    pub fn set_is_parent<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_parent = Some(v.into());
        self
    }

    /// Sets or clears the value of [is_parent][ListDocumentsOptions::is_parent].
    pub fn set_or_clear_is_parent<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.is_parent = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parent_document_id][ListDocumentsOptions::parent_document_id].
    ///
    /// Filters the documents to include only child documents that were generated
    /// when the specified parent document was processed.
    pub fn set_parent_document_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.parent_document_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [parent_document_id][ListDocumentsOptions::parent_document_id].
    pub fn set_or_clear_parent_document_id<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.parent_document_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sha256][ListDocumentsOptions::sha256].
    ///
    /// Filters the documents to include only documents with the specified SHA-256
    /// hash.
    pub fn set_sha256<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.sha256 = Some(v.into());
        self
    }

    /// Sets or clears the value of [sha256][ListDocumentsOptions::sha256].
    pub fn set_or_clear_sha256<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.sha256 = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [ListDocumentsOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListDocumentsOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        Ok(ListDocumentsOptions {
            project_id,
            collection_id,
            count: self.count,
            status: self.status,
            has_notices: self.has_notices,
            is_parent: self.is_parent,
            parent_document_id: self.parent_document_id,
            sha256: self.sha256,
        })
    }
}

/// The options for [add_document][crate::client::Discovery::add_document].
///
/// Add a document to a collection with optional metadata.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct AddDocumentOptions {
    project_id: String,
    collection_id: String,
    file: std::option::Option<bytes::Bytes>,
    filename: std::option::Option<String>,
    file_content_type: std::option::Option<String>,
    metadata: std::option::Option<String>,
    x_watson_discovery_force: std::option::Option<bool>,
}

impl AddDocumentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            file: self.file.clone(),
            filename: self.filename.clone(),
            file_content_type: self.file_content_type.clone(),
            metadata: self.metadata.clone(),
            x_watson_discovery_force: self.x_watson_discovery_force,
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

    /// Returns the value of `file`.
    pub fn file(&self) -> Option<&bytes::Bytes> {
        self.file.as_ref()
    }

    /// Returns the value of `filename`.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the value of `file_content_type`.
    pub fn file_content_type(&self) -> Option<&str> {
        self.file_content_type.as_deref()
    }

    /// Returns the value of `metadata`.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Returns the value of `x_watson_discovery_force`.
    pub fn x_watson_discovery_force(&self) -> Option<bool> {
        self.x_watson_discovery_force
    }
}

/// A builder for [AddDocumentOptions].
#[derive(Clone, Debug, Default)]
pub struct AddDocumentOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    file: std::option::Option<bytes::Bytes>,
    filename: std::option::Option<String>,
    file_content_type: std::option::Option<String>,
    metadata: std::option::Option<String>,
    x_watson_discovery_force: std::option::Option<bool>,
}

impl AddDocumentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][AddDocumentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][AddDocumentOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [file][AddDocumentOptions::file].
    ///
    /// The content of the document to ingest. For the supported file types and
    /// maximum supported file size limits when adding a document, see the
    /// product documentation.
    pub fn set_file<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets or clears the value of [file][AddDocumentOptions::file].
    pub fn set_or_clear_file<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file = v.map(|x| x.into());
        self
    }

    /// Sets [file][AddDocumentOptions::file] to the contents of the file at
    /// `path`.
    ///
    /// Also sets [filename][AddDocumentOptions::filename] to the name of the file.
    pub fn set_file_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let (content, filename) = FileSource::from_path(path)?.into_parts();
        Ok(self.set_file(content).set_filename(filename))
    }

    /// Sets the value of [filename][AddDocumentOptions::filename].
    ///
    /// The filename for the file. Required when `file` is set.
    pub fn set_filename<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets or clears the value of [filename][AddDocumentOptions::filename].
    pub fn set_or_clear_filename<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filename = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_content_type][AddDocumentOptions::file_content_type].
    ///
    /// The content type of file.
    pub fn set_file_content_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.file_content_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_content_type][AddDocumentOptions::file_content_type].
    pub fn set_or_clear_file_content_type<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file_content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][AddDocumentOptions::metadata].
    ///
    /// Add information about the file that you want to include in the response.
    ///
    /// The maximum supported metadata file size is 1 MB. Metadata parts larger
    /// than 1 MB are rejected.
    pub fn set_metadata<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][AddDocumentOptions::metadata].
    pub fn set_or_clear_metadata<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_watson_discovery_force][AddDocumentOptions::x_watson_discovery_force].
    ///
    /// When `true`, the uploaded document is added to the collection even if the
    /// data for that collection is shared with other collections.
    pub fn set_x_watson_discovery_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.x_watson_discovery_force = Some(v.into());
        self
    }

    /// Sets or clears the value of [x_watson_discovery_force][AddDocumentOptions::x_watson_discovery_force].
    pub fn set_or_clear_x_watson_discovery_force<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_watson_discovery_force = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [AddDocumentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    /// Also fails if `file` is set without `filename`.
    pub fn build(self) -> Result<AddDocumentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        validator::is_true(
            self.file.is_none() || self.filename.is_some(),
            "`filename` must be set when `file` is set",
        )?;
        Ok(AddDocumentOptions {
            project_id,
            collection_id,
            file: self.file,
            filename: self.filename,
            file_content_type: self.file_content_type,
            metadata: self.metadata,
            x_watson_discovery_force: self.x_watson_discovery_force,
        })
    }
}

/// The options for [get_document][crate::client::Discovery::get_document].
///
/// Get details about a specific document, whether the document is added by
/// uploading a file or by crawling an external data source.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetDocumentOptions {
    project_id: String,
    collection_id: String,
    document_id: String,
}

impl GetDocumentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetDocumentOptionsBuilder {
        GetDocumentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetDocumentOptionsBuilder {
        GetDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            document_id: Some(self.document_id.clone()),
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

    /// Returns the value of `document_id`.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

/// A builder for [GetDocumentOptions].
#[derive(Clone, Debug, Default)]
pub struct GetDocumentOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    document_id: std::option::Option<String>,
}

impl GetDocumentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
        }
    }

    /// Sets the value of [project_id][GetDocumentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][GetDocumentOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [document_id][GetDocumentOptions::document_id].
    pub fn set_document_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetDocumentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetDocumentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        let document_id = validator::not_empty("document_id", self.document_id)?;
        Ok(GetDocumentOptions {
            project_id,
            collection_id,
            document_id,
        })
    }
}

/// The options for [update_document][crate::client::Discovery::update_document].
///
/// Replace an existing document or add a document with a specified document ID.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateDocumentOptions {
    project_id: String,
    collection_id: String,
    document_id: String,
    file: std::option::Option<bytes::Bytes>,
    filename: std::option::Option<String>,
    file_content_type: std::option::Option<String>,
    metadata: std::option::Option<String>,
    x_watson_discovery_force: std::option::Option<bool>,
}

impl UpdateDocumentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            document_id: Some(self.document_id.clone()),
            file: self.file.clone(),
            filename: self.filename.clone(),
            file_content_type: self.file_content_type.clone(),
            metadata: self.metadata.clone(),
            x_watson_discovery_force: self.x_watson_discovery_force,
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

    /// Returns the value of `document_id`.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Returns the value of `file`.
    pub fn file(&self) -> Option<&bytes::Bytes> {
        self.file.as_ref()
    }

    /// Returns the value of `filename`.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the value of `file_content_type`.
    pub fn file_content_type(&self) -> Option<&str> {
        self.file_content_type.as_deref()
    }

    /// Returns the value of `metadata`.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Returns the value of `x_watson_discovery_force`.
    pub fn x_watson_discovery_force(&self) -> Option<bool> {
        self.x_watson_discovery_force
    }
}

/// A builder for [UpdateDocumentOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateDocumentOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    document_id: std::option::Option<String>,
    file: std::option::Option<bytes::Bytes>,
    filename: std::option::Option<String>,
    file_content_type: std::option::Option<String>,
    metadata: std::option::Option<String>,
    x_watson_discovery_force: std::option::Option<bool>,
}

impl UpdateDocumentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateDocumentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][UpdateDocumentOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [document_id][UpdateDocumentOptions::document_id].
    pub fn set_document_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Sets the value of [file][UpdateDocumentOptions::file].
    ///
    /// The content of the document to ingest. For the supported file types and
    /// maximum supported file size limits when adding a document, see the
    /// product documentation.
    pub fn set_file<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets or clears the value of [file][UpdateDocumentOptions::file].
    pub fn set_or_clear_file<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file = v.map(|x| x.into());
        self
    }

    /// Sets [file][UpdateDocumentOptions::file] to the contents of the file at
    /// `path`.
    ///
    /// Also sets [filename][UpdateDocumentOptions::filename] to the name of the file.
    pub fn set_file_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let (content, filename) = FileSource::from_path(path)?.into_parts();
        Ok(self.set_file(content).set_filename(filename))
    }

    /// Sets the value of [filename][UpdateDocumentOptions::filename].
    ///
    /// The filename for the file. Required when `file` is set.
    pub fn set_filename<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets or clears the value of [filename][UpdateDocumentOptions::filename].
    pub fn set_or_clear_filename<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filename = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_content_type][UpdateDocumentOptions::file_content_type].
    ///
    /// The content type of file.
    pub fn set_file_content_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.file_content_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_content_type][UpdateDocumentOptions::file_content_type].
    pub fn set_or_clear_file_content_type<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file_content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][UpdateDocumentOptions::metadata].
    ///
    /// Add information about the file that you want to include in the response.
    ///
    /// The maximum supported metadata file size is 1 MB. Metadata parts larger
    /// than 1 MB are rejected.
    pub fn set_metadata<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][UpdateDocumentOptions::metadata].
    pub fn set_or_clear_metadata<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_watson_discovery_force][UpdateDocumentOptions::x_watson_discovery_force].
    ///
    /// When `true`, the uploaded document is added to the collection even if the
    /// data for that collection is shared with other collections.
    pub fn set_x_watson_discovery_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.x_watson_discovery_force = Some(v.into());
        self
    }

    /// Sets or clears the value of [x_watson_discovery_force][UpdateDocumentOptions::x_watson_discovery_force].
    pub fn set_or_clear_x_watson_discovery_force<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_watson_discovery_force = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [UpdateDocumentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    /// Also fails if `file` is set without `filename`.
    pub fn build(self) -> Result<UpdateDocumentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        let document_id = validator::not_empty("document_id", self.document_id)?;
        validator::is_true(
            self.file.is_none() || self.filename.is_some(),
            "`filename` must be set when `file` is set",
        )?;
        Ok(UpdateDocumentOptions {
            project_id,
            collection_id,
            document_id,
            file: self.file,
            filename: self.filename,
            file_content_type: self.file_content_type,
            metadata: self.metadata,
            x_watson_discovery_force: self.x_watson_discovery_force,
        })
    }
}

/// The options for [delete_document][crate::client::Discovery::delete_document].
///
/// Deletes the document with the document ID that you specify from the
/// collection.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteDocumentOptions {
    project_id: String,
    collection_id: String,
    document_id: String,
    x_watson_discovery_force: std::option::Option<bool>,
}

impl DeleteDocumentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteDocumentOptionsBuilder {
        DeleteDocumentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteDocumentOptionsBuilder {
        DeleteDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            document_id: Some(self.document_id.clone()),
            x_watson_discovery_force: self.x_watson_discovery_force,
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

    /// Returns the value of `document_id`.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Returns the value of `x_watson_discovery_force`.
    pub fn x_watson_discovery_force(&self) -> Option<bool> {
        self.x_watson_discovery_force
    }
}

/// A builder for [DeleteDocumentOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteDocumentOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    document_id: std::option::Option<String>,
    x_watson_discovery_force: std::option::Option<bool>,
}

impl DeleteDocumentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][DeleteDocumentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][DeleteDocumentOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [document_id][DeleteDocumentOptions::document_id].
    pub fn set_document_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Sets the value of [x_watson_discovery_force][DeleteDocumentOptions::x_watson_discovery_force].
    ///
    /// When `true`, the uploaded document is added to the collection even if the
    /// data for that collection is shared with other collections.
    pub fn set_x_watson_discovery_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.x_watson_discovery_force = Some(v.into());
        self
    }

    /// Sets or clears the value of [x_watson_discovery_force][DeleteDocumentOptions::x_watson_discovery_force].
    pub fn set_or_clear_x_watson_discovery_force<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_watson_discovery_force = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [DeleteDocumentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteDocumentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        let document_id = validator::not_empty("document_id", self.document_id)?;
        Ok(DeleteDocumentOptions {
            project_id,
            collection_id,
            document_id,
            x_watson_discovery_force: self.x_watson_discovery_force,
        })
    }
}

/// The options for [analyze_document][crate::client::Discovery::analyze_document].
///
/// Process a document and return it for realtime use.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct AnalyzeDocumentOptions {
    project_id: String,
    collection_id: String,
    file: std::option::Option<bytes::Bytes>,
    filename: std::option::Option<String>,
    file_content_type: std::option::Option<String>,
    metadata: std::option::Option<String>,
}

impl AnalyzeDocumentOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> AnalyzeDocumentOptionsBuilder {
        AnalyzeDocumentOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> AnalyzeDocumentOptionsBuilder {
        AnalyzeDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            file: self.file.clone(),
            filename: self.filename.clone(),
            file_content_type: self.file_content_type.clone(),
            metadata: self.metadata.clone(),
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

    /// Returns the value of `file`.
    pub fn file(&self) -> Option<&bytes::Bytes> {
        self.file.as_ref()
    }

    /// Returns the value of `filename`.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the value of `file_content_type`.
    pub fn file_content_type(&self) -> Option<&str> {
        self.file_content_type.as_deref()
    }

    /// Returns the value of `metadata`.
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }
}

/// A builder for [AnalyzeDocumentOptions].
#[derive(Clone, Debug, Default)]
pub struct AnalyzeDocumentOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    file: std::option::Option<bytes::Bytes>,
    filename: std::option::Option<String>,
    file_content_type: std::option::Option<String>,
    metadata: std::option::Option<String>,
}

impl AnalyzeDocumentOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][AnalyzeDocumentOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][AnalyzeDocumentOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [file][AnalyzeDocumentOptions::file].
    ///
    /// The content of the document to ingest. For the supported file types and
    /// maximum supported file size limits when adding a document, see the
    /// product documentation.
    pub fn set_file<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.file = Some(v.into());
        self
    }

    /// Sets or clears the value of [file][AnalyzeDocumentOptions::file].
    pub fn set_or_clear_file<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file = v.map(|x| x.into());
        self
    }

    /// Sets [file][AnalyzeDocumentOptions::file] to the contents of the file at
    /// `path`.
    ///
    /// Also sets [filename][AnalyzeDocumentOptions::filename] to the name of the file.
    pub fn set_file_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let (content, filename) = FileSource::from_path(path)?.into_parts();
        Ok(self.set_file(content).set_filename(filename))
    }

    /// Sets the value of [filename][AnalyzeDocumentOptions::filename].
    ///
    /// The filename for the file. Required when `file` is set.
    pub fn set_filename<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filename = Some(v.into());
        self
    }

    /// Sets or clears the value of [filename][AnalyzeDocumentOptions::filename].
    pub fn set_or_clear_filename<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filename = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_content_type][AnalyzeDocumentOptions::file_content_type].
    ///
    /// The content type of file.
    pub fn set_file_content_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.file_content_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [file_content_type][AnalyzeDocumentOptions::file_content_type].
    pub fn set_or_clear_file_content_type<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.file_content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][AnalyzeDocumentOptions::metadata].
    ///
    /// Add information about the file that you want to include in the response.
    ///
    /// The maximum supported metadata file size is 1 MB. Metadata parts larger
    /// than 1 MB are rejected.
    pub fn set_metadata<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][AnalyzeDocumentOptions::metadata].
    pub fn set_or_clear_metadata<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [AnalyzeDocumentOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    /// Also fails if `file` is set without `filename`.
    pub fn build(self) -> Result<AnalyzeDocumentOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        validator::is_true(
            self.file.is_none() || self.filename.is_some(),
            "`filename` must be set when `file` is set",
        )?;
        Ok(AnalyzeDocumentOptions {
            project_id,
            collection_id,
            file: self.file,
            filename: self.filename,
            file_content_type: self.file_content_type,
            metadata: self.metadata,
        })
    }
}
