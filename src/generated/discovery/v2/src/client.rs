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

//! Contains the Discovery client and related types.

use crate::Result;
use crate::options::*;
use gax::client_config::ClientConfig;
use std::sync::Arc;

/// Implements a client for the Watson Discovery v2 API.
///
/// # Example
/// ```
/// # use discovery_v2::client::Discovery;
/// # use discovery_v2::model::ListProjectsResponse;
/// # use discovery_v2::options::ListProjectsOptions;
/// #[derive(Debug)]
/// struct Fake;
///
/// impl discovery_v2::stub::Discovery for Fake {
///     async fn list_projects(
///         &self,
///         _options: ListProjectsOptions,
///     ) -> discovery_v2::Result<ListProjectsResponse> {
///         Ok(ListProjectsResponse::default())
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let client = Discovery::from_stub(Fake);
/// let response = client
///     .list_projects(ListProjectsOptions::builder().build()?)
///     .await?;
/// assert!(response.projects.is_none());
/// # discovery_v2::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// IBM Watson Discovery is a cognitive search and content analytics engine
/// that you can add to applications to identify patterns, trends and
/// actionable insights to drive better decision-making.
///
/// # Pooling and Cloning
///
/// `Discovery` holds a reference-counted stub, so creating clones is cheap.
/// Prefer cloning over creating a new client per request.
///
/// # Transport
///
/// The client delegates every call to a [stub][crate::stub::Discovery]. Each
/// options type implements [Binding][gax::request::Binding], which returns the
/// HTTP request a stub sends for that operation.
#[derive(Clone, Debug)]
pub struct Discovery {
    inner: Arc<dyn super::stub::dynamic::Discovery>,
}

impl Discovery {
    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Discovery + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    /// Creates a new client from the provided stub and configuration.
    ///
    /// Wraps the stub with a tracing decorator if `config` enables tracing.
    pub fn from_stub_with_config<T>(stub: T, config: &ClientConfig) -> Self
    where
        T: super::stub::Discovery + 'static,
    {
        if config.tracing_enabled() {
            Self::from_stub(super::tracing::Discovery::new(stub))
        } else {
            Self::from_stub(stub)
        }
    }

    /// Lists existing projects for this instance.
    pub async fn list_projects(
        &self,
        options: ListProjectsOptions,
    ) -> Result<crate::model::ListProjectsResponse> {
        self.inner.list_projects(options).await
    }

    /// Create a new project for this instance.
    pub async fn create_project(
        &self,
        options: CreateProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        self.inner.create_project(options).await
    }

    /// Get details on the specified project.
    pub async fn get_project(
        &self,
        options: GetProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        self.inner.get_project(options).await
    }

    /// Update the specified project's name.
    pub async fn update_project(
        &self,
        options: UpdateProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        self.inner.update_project(options).await
    }

    /// Deletes the specified project.
    ///
    /// **Important:** Deleting a project deletes everything that is part of the
    /// specified project, including all collections.
    pub async fn delete_project(&self, options: DeleteProjectOptions) -> Result<()> {
        self.inner.delete_project(options).await
    }

    /// Gets a list of the unique fields (and their types) stored in the specified
    /// collections.
    pub async fn list_fields(
        &self,
        options: ListFieldsOptions,
    ) -> Result<crate::model::ListFieldsResponse> {
        self.inner.list_fields(options).await
    }

    /// Lists existing collections for the specified project.
    pub async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> Result<crate::model::ListCollectionsResponse> {
        self.inner.list_collections(options).await
    }

    /// Create a new collection in the specified project.
    pub async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        self.inner.create_collection(options).await
    }

    /// Get details about the specified collection.
    pub async fn get_collection(
        &self,
        options: GetCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        self.inner.get_collection(options).await
    }

    /// Updates the specified collection's name, description, and enrichments.
    pub async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        self.inner.update_collection(options).await
    }

    /// Deletes the specified collection from the project. All documents stored in
    /// the specified collection and not shared is also deleted.
    pub async fn delete_collection(&self, options: DeleteCollectionOptions) -> Result<()> {
        self.inner.delete_collection(options).await
    }

    /// Search your data by submitting queries that are written in natural language
    /// or formatted in the Discovery Query Language.
    pub async fn query(&self, options: QueryOptions) -> Result<crate::model::QueryResponse> {
        self.inner.query(options).await
    }

    /// Returns completion query suggestions for the specified prefix.
    pub async fn get_autocompletion(
        &self,
        options: GetAutocompletionOptions,
    ) -> Result<crate::model::Completions> {
        self.inner.get_autocompletion(options).await
    }

    /// Finds collection-level notices (errors and warnings) that are generated
    /// when documents are ingested.
    pub async fn query_collection_notices(
        &self,
        options: QueryCollectionNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse> {
        self.inner.query_collection_notices(options).await
    }

    /// Finds project-level notices (errors and warnings).
    pub async fn query_notices(
        &self,
        options: QueryNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse> {
        self.inner.query_notices(options).await
    }

    /// Returns default configuration settings for components.
    pub async fn get_component_settings(
        &self,
        options: GetComponentSettingsOptions,
    ) -> Result<crate::model::ComponentSettingsResponse> {
        self.inner.get_component_settings(options).await
    }

    /// Lists the documents in the specified collection.
    pub async fn list_documents(
        &self,
        options: ListDocumentsOptions,
    ) -> Result<crate::model::ListDocumentsResponse> {
        self.inner.list_documents(options).await
    }

    /// Add a document to a collection with optional metadata.
    pub async fn add_document(
        &self,
        options: AddDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted> {
        self.inner.add_document(options).await
    }

    /// Get details about a specific document, whether the document is added by
    /// uploading a file or by crawling an external data source.
    pub async fn get_document(
        &self,
        options: GetDocumentOptions,
    ) -> Result<crate::model::DocumentDetails> {
        self.inner.get_document(options).await
    }

    /// Replace an existing document or add a document with a specified document ID.
    pub async fn update_document(
        &self,
        options: UpdateDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted> {
        self.inner.update_document(options).await
    }

    /// Deletes the document with the document ID that you specify from the
    /// collection.
    pub async fn delete_document(
        &self,
        options: DeleteDocumentOptions,
    ) -> Result<crate::model::DeleteDocumentResponse> {
        self.inner.delete_document(options).await
    }

    /// Process a document and return it for realtime use.
    pub async fn analyze_document(
        &self,
        options: AnalyzeDocumentOptions,
    ) -> Result<crate::model::AnalyzedDocument> {
        self.inner.analyze_document(options).await
    }

    /// List the training queries for the specified project.
    pub async fn list_training_queries(
        &self,
        options: ListTrainingQueriesOptions,
    ) -> Result<crate::model::TrainingQuerySet> {
        self.inner.list_training_queries(options).await
    }

    /// Removes all training queries for the specified project.
    pub async fn delete_training_queries(
        &self,
        options: DeleteTrainingQueriesOptions,
    ) -> Result<()> {
        self.inner.delete_training_queries(options).await
    }

    /// Add a query to the training data for this project.
    pub async fn create_training_query(
        &self,
        options: CreateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        self.inner.create_training_query(options).await
    }

    /// Get details for a specific training data query.
    pub async fn get_training_query(
        &self,
        options: GetTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        self.inner.get_training_query(options).await
    }

    /// Updates an existing training query and its examples.
    pub async fn update_training_query(
        &self,
        options: UpdateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        self.inner.update_training_query(options).await
    }

    /// Removes details from a training data query, including the query string and
    /// all examples.
    pub async fn delete_training_query(&self, options: DeleteTrainingQueryOptions) -> Result<()> {
        self.inner.delete_training_query(options).await
    }

    /// Lists the enrichments available to this project.
    pub async fn list_enrichments(
        &self,
        options: ListEnrichmentsOptions,
    ) -> Result<crate::model::Enrichments> {
        self.inner.list_enrichments(options).await
    }

    /// Create an enrichment for use with the specified project.
    pub async fn create_enrichment(
        &self,
        options: CreateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        self.inner.create_enrichment(options).await
    }

    /// Get details about a specific enrichment.
    pub async fn get_enrichment(
        &self,
        options: GetEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        self.inner.get_enrichment(options).await
    }

    /// Updates an existing enrichment's name and description.
    pub async fn update_enrichment(
        &self,
        options: UpdateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        self.inner.update_enrichment(options).await
    }

    /// Deletes an existing enrichment from the specified project.
    ///
    /// **Note:** Only enrichments that have been manually created can be deleted.
    pub async fn delete_enrichment(&self, options: DeleteEnrichmentOptions) -> Result<()> {
        self.inner.delete_enrichment(options).await
    }

    /// Get a list of the document classifiers in a project.
    pub async fn list_document_classifiers(
        &self,
        options: ListDocumentClassifiersOptions,
    ) -> Result<crate::model::DocumentClassifiers> {
        self.inner.list_document_classifiers(options).await
    }

    /// Create a document classifier.
    pub async fn create_document_classifier(
        &self,
        options: CreateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        self.inner.create_document_classifier(options).await
    }

    /// Get details about a specific document classifier.
    pub async fn get_document_classifier(
        &self,
        options: GetDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        self.inner.get_document_classifier(options).await
    }

    /// Update the document classifier name or description, update the training
    /// data, or add or update the test data.
    pub async fn update_document_classifier(
        &self,
        options: UpdateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        self.inner.update_document_classifier(options).await
    }

    /// Deletes an existing document classifier from the specified project.
    pub async fn delete_document_classifier(
        &self,
        options: DeleteDocumentClassifierOptions,
    ) -> Result<()> {
        self.inner.delete_document_classifier(options).await
    }

    /// Get a list of the document classifier models in a project.
    pub async fn list_document_classifier_models(
        &self,
        options: ListDocumentClassifierModelsOptions,
    ) -> Result<crate::model::DocumentClassifierModels> {
        self.inner.list_document_classifier_models(options).await
    }

    /// Create a document classifier model by training a model that uses the data
    /// and classifier settings defined in the specified document classifier.
    pub async fn create_document_classifier_model(
        &self,
        options: CreateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        self.inner.create_document_classifier_model(options).await
    }

    /// Get details about a specific document classifier model.
    pub async fn get_document_classifier_model(
        &self,
        options: GetDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        self.inner.get_document_classifier_model(options).await
    }

    /// Update the document classifier model name or description.
    pub async fn update_document_classifier_model(
        &self,
        options: UpdateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        self.inner.update_document_classifier_model(options).await
    }

    /// Deletes an existing document classifier model from the specified project.
    pub async fn delete_document_classifier_model(
        &self,
        options: DeleteDocumentClassifierModelOptions,
    ) -> Result<()> {
        self.inner.delete_document_classifier_model(options).await
    }

    /// Deletes all data associated with a specified customer ID. The method has no
    /// effect if no data is associated with the customer ID.
    pub async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<()> {
        self.inner.delete_user_data(options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Discovery: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(CreateCollectionOptions: Clone, std::fmt::Debug, Send, Sync);
    assert_impl_all!(AddDocumentOptionsBuilder: Clone, std::fmt::Debug, Default, Send, Sync);
}
