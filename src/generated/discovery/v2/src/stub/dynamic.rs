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

use crate::Result;
use crate::options::*;

/// A dyn-compatible, crate-private version of [super::Discovery].
#[async_trait::async_trait]
pub trait Discovery: std::fmt::Debug + Send + Sync {
    async fn list_projects(
        &self,
        options: ListProjectsOptions,
    ) -> Result<crate::model::ListProjectsResponse>;
    async fn create_project(
        &self,
        options: CreateProjectOptions,
    ) -> Result<crate::model::ProjectDetails>;
    async fn get_project(&self, options: GetProjectOptions) -> Result<crate::model::ProjectDetails>;
    async fn update_project(
        &self,
        options: UpdateProjectOptions,
    ) -> Result<crate::model::ProjectDetails>;
    async fn delete_project(&self, options: DeleteProjectOptions) -> Result<()>;
    async fn list_fields(
        &self,
        options: ListFieldsOptions,
    ) -> Result<crate::model::ListFieldsResponse>;
    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> Result<crate::model::ListCollectionsResponse>;
    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails>;
    async fn get_collection(
        &self,
        options: GetCollectionOptions,
    ) -> Result<crate::model::CollectionDetails>;
    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails>;
    async fn delete_collection(&self, options: DeleteCollectionOptions) -> Result<()>;
    async fn query(&self, options: QueryOptions) -> Result<crate::model::QueryResponse>;
    async fn get_autocompletion(
        &self,
        options: GetAutocompletionOptions,
    ) -> Result<crate::model::Completions>;
    async fn query_collection_notices(
        &self,
        options: QueryCollectionNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse>;
    async fn query_notices(
        &self,
        options: QueryNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse>;
    async fn get_component_settings(
        &self,
        options: GetComponentSettingsOptions,
    ) -> Result<crate::model::ComponentSettingsResponse>;
    async fn list_documents(
        &self,
        options: ListDocumentsOptions,
    ) -> Result<crate::model::ListDocumentsResponse>;
    async fn add_document(
        &self,
        options: AddDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted>;
    async fn get_document(
        &self,
        options: GetDocumentOptions,
    ) -> Result<crate::model::DocumentDetails>;
    async fn update_document(
        &self,
        options: UpdateDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted>;
    async fn delete_document(
        &self,
        options: DeleteDocumentOptions,
    ) -> Result<crate::model::DeleteDocumentResponse>;
    async fn analyze_document(
        &self,
        options: AnalyzeDocumentOptions,
    ) -> Result<crate::model::AnalyzedDocument>;
    async fn list_training_queries(
        &self,
        options: ListTrainingQueriesOptions,
    ) -> Result<crate::model::TrainingQuerySet>;
    async fn delete_training_queries(&self, options: DeleteTrainingQueriesOptions) -> Result<()>;
    async fn create_training_query(
        &self,
        options: CreateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery>;
    async fn get_training_query(
        &self,
        options: GetTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery>;
    async fn update_training_query(
        &self,
        options: UpdateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery>;
    async fn delete_training_query(&self, options: DeleteTrainingQueryOptions) -> Result<()>;
    async fn list_enrichments(
        &self,
        options: ListEnrichmentsOptions,
    ) -> Result<crate::model::Enrichments>;
    async fn create_enrichment(
        &self,
        options: CreateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment>;
    async fn get_enrichment(
        &self,
        options: GetEnrichmentOptions,
    ) -> Result<crate::model::Enrichment>;
    async fn update_enrichment(
        &self,
        options: UpdateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment>;
    async fn delete_enrichment(&self, options: DeleteEnrichmentOptions) -> Result<()>;
    async fn list_document_classifiers(
        &self,
        options: ListDocumentClassifiersOptions,
    ) -> Result<crate::model::DocumentClassifiers>;
    async fn create_document_classifier(
        &self,
        options: CreateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier>;
    async fn get_document_classifier(
        &self,
        options: GetDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier>;
    async fn update_document_classifier(
        &self,
        options: UpdateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier>;
    async fn delete_document_classifier(
        &self,
        options: DeleteDocumentClassifierOptions,
    ) -> Result<()>;
    async fn list_document_classifier_models(
        &self,
        options: ListDocumentClassifierModelsOptions,
    ) -> Result<crate::model::DocumentClassifierModels>;
    async fn create_document_classifier_model(
        &self,
        options: CreateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel>;
    async fn get_document_classifier_model(
        &self,
        options: GetDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel>;
    async fn update_document_classifier_model(
        &self,
        options: UpdateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel>;
    async fn delete_document_classifier_model(
        &self,
        options: DeleteDocumentClassifierModelOptions,
    ) -> Result<()>;
    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<()>;
}

/// All implementations of [super::Discovery] also implement [Discovery].
#[async_trait::async_trait]
impl<T: super::Discovery> Discovery for T {
    async fn list_projects(
        &self,
        options: ListProjectsOptions,
    ) -> Result<crate::model::ListProjectsResponse> {
        T::list_projects(self, options).await
    }

    async fn create_project(
        &self,
        options: CreateProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        T::create_project(self, options).await
    }

    async fn get_project(
        &self,
        options: GetProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        T::get_project(self, options).await
    }

    async fn update_project(
        &self,
        options: UpdateProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        T::update_project(self, options).await
    }

    async fn delete_project(&self, options: DeleteProjectOptions) -> Result<()> {
        T::delete_project(self, options).await
    }

    async fn list_fields(
        &self,
        options: ListFieldsOptions,
    ) -> Result<crate::model::ListFieldsResponse> {
        T::list_fields(self, options).await
    }

    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> Result<crate::model::ListCollectionsResponse> {
        T::list_collections(self, options).await
    }

    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        T::create_collection(self, options).await
    }

    async fn get_collection(
        &self,
        options: GetCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        T::get_collection(self, options).await
    }

    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        T::update_collection(self, options).await
    }

    async fn delete_collection(&self, options: DeleteCollectionOptions) -> Result<()> {
        T::delete_collection(self, options).await
    }

    async fn query(&self, options: QueryOptions) -> Result<crate::model::QueryResponse> {
        T::query(self, options).await
    }

    async fn get_autocompletion(
        &self,
        options: GetAutocompletionOptions,
    ) -> Result<crate::model::Completions> {
        T::get_autocompletion(self, options).await
    }

    async fn query_collection_notices(
        &self,
        options: QueryCollectionNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse> {
        T::query_collection_notices(self, options).await
    }

    async fn query_notices(
        &self,
        options: QueryNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse> {
        T::query_notices(self, options).await
    }

    async fn get_component_settings(
        &self,
        options: GetComponentSettingsOptions,
    ) -> Result<crate::model::ComponentSettingsResponse> {
        T::get_component_settings(self, options).await
    }

    async fn list_documents(
        &self,
        options: ListDocumentsOptions,
    ) -> Result<crate::model::ListDocumentsResponse> {
        T::list_documents(self, options).await
    }

    async fn add_document(
        &self,
        options: AddDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted> {
        T::add_document(self, options).await
    }

    async fn get_document(
        &self,
        options: GetDocumentOptions,
    ) -> Result<crate::model::DocumentDetails> {
        T::get_document(self, options).await
    }

    async fn update_document(
        &self,
        options: UpdateDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted> {
        T::update_document(self, options).await
    }

    async fn delete_document(
        &self,
        options: DeleteDocumentOptions,
    ) -> Result<crate::model::DeleteDocumentResponse> {
        T::delete_document(self, options).await
    }

    async fn analyze_document(
        &self,
        options: AnalyzeDocumentOptions,
    ) -> Result<crate::model::AnalyzedDocument> {
        T::analyze_document(self, options).await
    }

    async fn list_training_queries(
        &self,
        options: ListTrainingQueriesOptions,
    ) -> Result<crate::model::TrainingQuerySet> {
        T::list_training_queries(self, options).await
    }

    async fn delete_training_queries(&self, options: DeleteTrainingQueriesOptions) -> Result<()> {
        T::delete_training_queries(self, options).await
    }

    async fn create_training_query(
        &self,
        options: CreateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        T::create_training_query(self, options).await
    }

    async fn get_training_query(
        &self,
        options: GetTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        T::get_training_query(self, options).await
    }

    async fn update_training_query(
        &self,
        options: UpdateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        T::update_training_query(self, options).await
    }

    async fn delete_training_query(&self, options: DeleteTrainingQueryOptions) -> Result<()> {
        T::delete_training_query(self, options).await
    }

    async fn list_enrichments(
        &self,
        options: ListEnrichmentsOptions,
    ) -> Result<crate::model::Enrichments> {
        T::list_enrichments(self, options).await
    }

    async fn create_enrichment(
        &self,
        options: CreateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        T::create_enrichment(self, options).await
    }

    async fn get_enrichment(
        &self,
        options: GetEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        T::get_enrichment(self, options).await
    }

    async fn update_enrichment(
        &self,
        options: UpdateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        T::update_enrichment(self, options).await
    }

    async fn delete_enrichment(&self, options: DeleteEnrichmentOptions) -> Result<()> {
        T::delete_enrichment(self, options).await
    }

    async fn list_document_classifiers(
        &self,
        options: ListDocumentClassifiersOptions,
    ) -> Result<crate::model::DocumentClassifiers> {
        T::list_document_classifiers(self, options).await
    }

    async fn create_document_classifier(
        &self,
        options: CreateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        T::create_document_classifier(self, options).await
    }

    async fn get_document_classifier(
        &self,
        options: GetDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        T::get_document_classifier(self, options).await
    }

    async fn update_document_classifier(
        &self,
        options: UpdateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        T::update_document_classifier(self, options).await
    }

    async fn delete_document_classifier(
        &self,
        options: DeleteDocumentClassifierOptions,
    ) -> Result<()> {
        T::delete_document_classifier(self, options).await
    }

    async fn list_document_classifier_models(
        &self,
        options: ListDocumentClassifierModelsOptions,
    ) -> Result<crate::model::DocumentClassifierModels> {
        T::list_document_classifier_models(self, options).await
    }

    async fn create_document_classifier_model(
        &self,
        options: CreateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        T::create_document_classifier_model(self, options).await
    }

    async fn get_document_classifier_model(
        &self,
        options: GetDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        T::get_document_classifier_model(self, options).await
    }

    async fn update_document_classifier_model(
        &self,
        options: UpdateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        T::update_document_classifier_model(self, options).await
    }

    async fn delete_document_classifier_model(
        &self,
        options: DeleteDocumentClassifierModelOptions,
    ) -> Result<()> {
        T::delete_document_classifier_model(self, options).await
    }

    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<()> {
        T::delete_user_data(self, options).await
    }
}
