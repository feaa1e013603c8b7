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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

use crate::Result;
use crate::options::*;
use gax::unimplemented::UNIMPLEMENTED;

/// Defines the trait used to implement [crate::client::Discovery].
///
/// Application developers may need to implement this trait to mock
/// `client::Discovery`. In other use-cases, application developers only
/// use `client::Discovery` and need not be concerned with this trait or
/// its implementations.
///
/// The service gains new operations routinely. Consequently, this trait gains
/// new methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic.
pub trait Discovery: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Discovery::list_projects].
    fn list_projects(
        &self,
        _options: ListProjectsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListProjectsResponse>> + Send {
        unimplemented_stub::<crate::model::ListProjectsResponse>()
    }

    /// Implements [crate::client::Discovery::create_project].
    fn create_project(
        &self,
        _options: CreateProjectOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ProjectDetails>> + Send {
        unimplemented_stub::<crate::model::ProjectDetails>()
    }

    /// Implements [crate::client::Discovery::get_project].
    fn get_project(
        &self,
        _options: GetProjectOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ProjectDetails>> + Send {
        unimplemented_stub::<crate::model::ProjectDetails>()
    }

    /// Implements [crate::client::Discovery::update_project].
    fn update_project(
        &self,
        _options: UpdateProjectOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ProjectDetails>> + Send {
        unimplemented_stub::<crate::model::ProjectDetails>()
    }

    /// Implements [crate::client::Discovery::delete_project].
    fn delete_project(
        &self,
        _options: DeleteProjectOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::list_fields].
    fn list_fields(
        &self,
        _options: ListFieldsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListFieldsResponse>> + Send {
        unimplemented_stub::<crate::model::ListFieldsResponse>()
    }

    /// Implements [crate::client::Discovery::list_collections].
    fn list_collections(
        &self,
        _options: ListCollectionsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListCollectionsResponse>> + Send {
        unimplemented_stub::<crate::model::ListCollectionsResponse>()
    }

    /// Implements [crate::client::Discovery::create_collection].
    fn create_collection(
        &self,
        _options: CreateCollectionOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::CollectionDetails>> + Send {
        unimplemented_stub::<crate::model::CollectionDetails>()
    }

    /// Implements [crate::client::Discovery::get_collection].
    fn get_collection(
        &self,
        _options: GetCollectionOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::CollectionDetails>> + Send {
        unimplemented_stub::<crate::model::CollectionDetails>()
    }

    /// Implements [crate::client::Discovery::update_collection].
    fn update_collection(
        &self,
        _options: UpdateCollectionOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::CollectionDetails>> + Send {
        unimplemented_stub::<crate::model::CollectionDetails>()
    }

    /// Implements [crate::client::Discovery::delete_collection].
    fn delete_collection(
        &self,
        _options: DeleteCollectionOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::query].
    fn query(
        &self,
        _options: QueryOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::QueryResponse>> + Send {
        unimplemented_stub::<crate::model::QueryResponse>()
    }

    /// Implements [crate::client::Discovery::get_autocompletion].
    fn get_autocompletion(
        &self,
        _options: GetAutocompletionOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Completions>> + Send {
        unimplemented_stub::<crate::model::Completions>()
    }

    /// Implements [crate::client::Discovery::query_collection_notices].
    fn query_collection_notices(
        &self,
        _options: QueryCollectionNoticesOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::QueryNoticesResponse>> + Send {
        unimplemented_stub::<crate::model::QueryNoticesResponse>()
    }

    /// Implements [crate::client::Discovery::query_notices].
    fn query_notices(
        &self,
        _options: QueryNoticesOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::QueryNoticesResponse>> + Send {
        unimplemented_stub::<crate::model::QueryNoticesResponse>()
    }

    /// Implements [crate::client::Discovery::get_component_settings].
    fn get_component_settings(
        &self,
        _options: GetComponentSettingsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ComponentSettingsResponse>> + Send {
        unimplemented_stub::<crate::model::ComponentSettingsResponse>()
    }

    /// Implements [crate::client::Discovery::list_documents].
    fn list_documents(
        &self,
        _options: ListDocumentsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::ListDocumentsResponse>> + Send {
        unimplemented_stub::<crate::model::ListDocumentsResponse>()
    }

    /// Implements [crate::client::Discovery::add_document].
    fn add_document(
        &self,
        _options: AddDocumentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentAccepted>> + Send {
        unimplemented_stub::<crate::model::DocumentAccepted>()
    }

    /// Implements [crate::client::Discovery::get_document].
    fn get_document(
        &self,
        _options: GetDocumentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentDetails>> + Send {
        unimplemented_stub::<crate::model::DocumentDetails>()
    }

    /// Implements [crate::client::Discovery::update_document].
    fn update_document(
        &self,
        _options: UpdateDocumentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentAccepted>> + Send {
        unimplemented_stub::<crate::model::DocumentAccepted>()
    }

    /// Implements [crate::client::Discovery::delete_document].
    fn delete_document(
        &self,
        _options: DeleteDocumentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DeleteDocumentResponse>> + Send {
        unimplemented_stub::<crate::model::DeleteDocumentResponse>()
    }

    /// Implements [crate::client::Discovery::analyze_document].
    fn analyze_document(
        &self,
        _options: AnalyzeDocumentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::AnalyzedDocument>> + Send {
        unimplemented_stub::<crate::model::AnalyzedDocument>()
    }

    /// Implements [crate::client::Discovery::list_training_queries].
    fn list_training_queries(
        &self,
        _options: ListTrainingQueriesOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::TrainingQuerySet>> + Send {
        unimplemented_stub::<crate::model::TrainingQuerySet>()
    }

    /// Implements [crate::client::Discovery::delete_training_queries].
    fn delete_training_queries(
        &self,
        _options: DeleteTrainingQueriesOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::create_training_query].
    fn create_training_query(
        &self,
        _options: CreateTrainingQueryOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::TrainingQuery>> + Send {
        unimplemented_stub::<crate::model::TrainingQuery>()
    }

    /// Implements [crate::client::Discovery::get_training_query].
    fn get_training_query(
        &self,
        _options: GetTrainingQueryOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::TrainingQuery>> + Send {
        unimplemented_stub::<crate::model::TrainingQuery>()
    }

    /// Implements [crate::client::Discovery::update_training_query].
    fn update_training_query(
        &self,
        _options: UpdateTrainingQueryOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::TrainingQuery>> + Send {
        unimplemented_stub::<crate::model::TrainingQuery>()
    }

    /// Implements [crate::client::Discovery::delete_training_query].
    fn delete_training_query(
        &self,
        _options: DeleteTrainingQueryOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::list_enrichments].
    fn list_enrichments(
        &self,
        _options: ListEnrichmentsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Enrichments>> + Send {
        unimplemented_stub::<crate::model::Enrichments>()
    }

    /// Implements [crate::client::Discovery::create_enrichment].
    fn create_enrichment(
        &self,
        _options: CreateEnrichmentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Enrichment>> + Send {
        unimplemented_stub::<crate::model::Enrichment>()
    }

    /// Implements [crate::client::Discovery::get_enrichment].
    fn get_enrichment(
        &self,
        _options: GetEnrichmentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Enrichment>> + Send {
        unimplemented_stub::<crate::model::Enrichment>()
    }

    /// Implements [crate::client::Discovery::update_enrichment].
    fn update_enrichment(
        &self,
        _options: UpdateEnrichmentOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::Enrichment>> + Send {
        unimplemented_stub::<crate::model::Enrichment>()
    }

    /// Implements [crate::client::Discovery::delete_enrichment].
    fn delete_enrichment(
        &self,
        _options: DeleteEnrichmentOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::list_document_classifiers].
    fn list_document_classifiers(
        &self,
        _options: ListDocumentClassifiersOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifiers>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifiers>()
    }

    /// Implements [crate::client::Discovery::create_document_classifier].
    fn create_document_classifier(
        &self,
        _options: CreateDocumentClassifierOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifier>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifier>()
    }

    /// Implements [crate::client::Discovery::get_document_classifier].
    fn get_document_classifier(
        &self,
        _options: GetDocumentClassifierOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifier>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifier>()
    }

    /// Implements [crate::client::Discovery::update_document_classifier].
    fn update_document_classifier(
        &self,
        _options: UpdateDocumentClassifierOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifier>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifier>()
    }

    /// Implements [crate::client::Discovery::delete_document_classifier].
    fn delete_document_classifier(
        &self,
        _options: DeleteDocumentClassifierOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::list_document_classifier_models].
    fn list_document_classifier_models(
        &self,
        _options: ListDocumentClassifierModelsOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifierModels>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifierModels>()
    }

    /// Implements [crate::client::Discovery::create_document_classifier_model].
    fn create_document_classifier_model(
        &self,
        _options: CreateDocumentClassifierModelOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifierModel>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifierModel>()
    }

    /// Implements [crate::client::Discovery::get_document_classifier_model].
    fn get_document_classifier_model(
        &self,
        _options: GetDocumentClassifierModelOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifierModel>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifierModel>()
    }

    /// Implements [crate::client::Discovery::update_document_classifier_model].
    fn update_document_classifier_model(
        &self,
        _options: UpdateDocumentClassifierModelOptions,
    ) -> impl std::future::Future<Output = Result<crate::model::DocumentClassifierModel>> + Send {
        unimplemented_stub::<crate::model::DocumentClassifierModel>()
    }

    /// Implements [crate::client::Discovery::delete_document_classifier_model].
    fn delete_document_classifier_model(
        &self,
        _options: DeleteDocumentClassifierModelOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements [crate::client::Discovery::delete_user_data].
    fn delete_user_data(
        &self,
        _options: DeleteUserDataOptions,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }
}

async fn unimplemented_stub<T: Send>() -> Result<T> {
    unimplemented!("{UNIMPLEMENTED}");
}
