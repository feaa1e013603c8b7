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
use std::future::Future;
use tracing::Instrument;

/// Implements a [Discovery](super::stub::Discovery) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Discovery<T>
where
    T: super::stub::Discovery + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Discovery<T>
where
    T: super::stub::Discovery + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

async fn traced<F, R>(operation: &'static str, future: F) -> Result<R>
where
    F: Future<Output = Result<R>>,
{
    let span = tracing::info_span!("client_request", operation);
    async move {
        let result = future.await;
        if let Err(e) = &result {
            tracing::debug!(error = %e, "request failed");
        }
        result
    }
    .instrument(span)
    .await
}

impl<T> super::stub::Discovery for Discovery<T>
where
    T: super::stub::Discovery + std::fmt::Debug + Send + Sync,
{
    async fn list_projects(
        &self,
        options: ListProjectsOptions,
    ) -> Result<crate::model::ListProjectsResponse> {
        traced("listProjects", self.inner.list_projects(options)).await
    }

    async fn create_project(
        &self,
        options: CreateProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        traced("createProject", self.inner.create_project(options)).await
    }

    async fn get_project(
        &self,
        options: GetProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        traced("getProject", self.inner.get_project(options)).await
    }

    async fn update_project(
        &self,
        options: UpdateProjectOptions,
    ) -> Result<crate::model::ProjectDetails> {
        traced("updateProject", self.inner.update_project(options)).await
    }

    async fn delete_project(&self, options: DeleteProjectOptions) -> Result<()> {
        traced("deleteProject", self.inner.delete_project(options)).await
    }

    async fn list_fields(
        &self,
        options: ListFieldsOptions,
    ) -> Result<crate::model::ListFieldsResponse> {
        traced("listFields", self.inner.list_fields(options)).await
    }

    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> Result<crate::model::ListCollectionsResponse> {
        traced("listCollections", self.inner.list_collections(options)).await
    }

    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        traced("createCollection", self.inner.create_collection(options)).await
    }

    async fn get_collection(
        &self,
        options: GetCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        traced("getCollection", self.inner.get_collection(options)).await
    }

    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> Result<crate::model::CollectionDetails> {
        traced("updateCollection", self.inner.update_collection(options)).await
    }

    async fn delete_collection(&self, options: DeleteCollectionOptions) -> Result<()> {
        traced("deleteCollection", self.inner.delete_collection(options)).await
    }

    async fn query(&self, options: QueryOptions) -> Result<crate::model::QueryResponse> {
        traced("query", self.inner.query(options)).await
    }

    async fn get_autocompletion(
        &self,
        options: GetAutocompletionOptions,
    ) -> Result<crate::model::Completions> {
        traced("getAutocompletion", self.inner.get_autocompletion(options)).await
    }

    async fn query_collection_notices(
        &self,
        options: QueryCollectionNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse> {
        traced("queryCollectionNotices", self.inner.query_collection_notices(options)).await
    }

    async fn query_notices(
        &self,
        options: QueryNoticesOptions,
    ) -> Result<crate::model::QueryNoticesResponse> {
        traced("queryNotices", self.inner.query_notices(options)).await
    }

    async fn get_component_settings(
        &self,
        options: GetComponentSettingsOptions,
    ) -> Result<crate::model::ComponentSettingsResponse> {
        traced("getComponentSettings", self.inner.get_component_settings(options)).await
    }

    async fn list_documents(
        &self,
        options: ListDocumentsOptions,
    ) -> Result<crate::model::ListDocumentsResponse> {
        traced("listDocuments", self.inner.list_documents(options)).await
    }

    async fn add_document(
        &self,
        options: AddDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted> {
        traced("addDocument", self.inner.add_document(options)).await
    }

    async fn get_document(
        &self,
        options: GetDocumentOptions,
    ) -> Result<crate::model::DocumentDetails> {
        traced("getDocument", self.inner.get_document(options)).await
    }

    async fn update_document(
        &self,
        options: UpdateDocumentOptions,
    ) -> Result<crate::model::DocumentAccepted> {
        traced("updateDocument", self.inner.update_document(options)).await
    }

    async fn delete_document(
        &self,
        options: DeleteDocumentOptions,
    ) -> Result<crate::model::DeleteDocumentResponse> {
        traced("deleteDocument", self.inner.delete_document(options)).await
    }

    async fn analyze_document(
        &self,
        options: AnalyzeDocumentOptions,
    ) -> Result<crate::model::AnalyzedDocument> {
        traced("analyzeDocument", self.inner.analyze_document(options)).await
    }

    async fn list_training_queries(
        &self,
        options: ListTrainingQueriesOptions,
    ) -> Result<crate::model::TrainingQuerySet> {
        traced("listTrainingQueries", self.inner.list_training_queries(options)).await
    }

    async fn delete_training_queries(&self, options: DeleteTrainingQueriesOptions) -> Result<()> {
        traced("deleteTrainingQueries", self.inner.delete_training_queries(options)).await
    }

    async fn create_training_query(
        &self,
        options: CreateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        traced("createTrainingQuery", self.inner.create_training_query(options)).await
    }

    async fn get_training_query(
        &self,
        options: GetTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        traced("getTrainingQuery", self.inner.get_training_query(options)).await
    }

    async fn update_training_query(
        &self,
        options: UpdateTrainingQueryOptions,
    ) -> Result<crate::model::TrainingQuery> {
        traced("updateTrainingQuery", self.inner.update_training_query(options)).await
    }

    async fn delete_training_query(&self, options: DeleteTrainingQueryOptions) -> Result<()> {
        traced("deleteTrainingQuery", self.inner.delete_training_query(options)).await
    }

    async fn list_enrichments(
        &self,
        options: ListEnrichmentsOptions,
    ) -> Result<crate::model::Enrichments> {
        traced("listEnrichments", self.inner.list_enrichments(options)).await
    }

    async fn create_enrichment(
        &self,
        options: CreateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        traced("createEnrichment", self.inner.create_enrichment(options)).await
    }

    async fn get_enrichment(
        &self,
        options: GetEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        traced("getEnrichment", self.inner.get_enrichment(options)).await
    }

    async fn update_enrichment(
        &self,
        options: UpdateEnrichmentOptions,
    ) -> Result<crate::model::Enrichment> {
        traced("updateEnrichment", self.inner.update_enrichment(options)).await
    }

    async fn delete_enrichment(&self, options: DeleteEnrichmentOptions) -> Result<()> {
        traced("deleteEnrichment", self.inner.delete_enrichment(options)).await
    }

    async fn list_document_classifiers(
        &self,
        options: ListDocumentClassifiersOptions,
    ) -> Result<crate::model::DocumentClassifiers> {
        traced("listDocumentClassifiers", self.inner.list_document_classifiers(options)).await
    }

    async fn create_document_classifier(
        &self,
        options: CreateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        traced("createDocumentClassifier", self.inner.create_document_classifier(options)).await
    }

    async fn get_document_classifier(
        &self,
        options: GetDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        traced("getDocumentClassifier", self.inner.get_document_classifier(options)).await
    }

    async fn update_document_classifier(
        &self,
        options: UpdateDocumentClassifierOptions,
    ) -> Result<crate::model::DocumentClassifier> {
        traced("updateDocumentClassifier", self.inner.update_document_classifier(options)).await
    }

    async fn delete_document_classifier(
        &self,
        options: DeleteDocumentClassifierOptions,
    ) -> Result<()> {
        traced("deleteDocumentClassifier", self.inner.delete_document_classifier(options)).await
    }

    async fn list_document_classifier_models(
        &self,
        options: ListDocumentClassifierModelsOptions,
    ) -> Result<crate::model::DocumentClassifierModels> {
        traced(
            "listDocumentClassifierModels",
            self.inner.list_document_classifier_models(options),
        )
        .await
    }

    async fn create_document_classifier_model(
        &self,
        options: CreateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        traced(
            "createDocumentClassifierModel",
            self.inner.create_document_classifier_model(options),
        )
        .await
    }

    async fn get_document_classifier_model(
        &self,
        options: GetDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        traced(
            "getDocumentClassifierModel",
            self.inner.get_document_classifier_model(options),
        )
        .await
    }

    async fn update_document_classifier_model(
        &self,
        options: UpdateDocumentClassifierModelOptions,
    ) -> Result<crate::model::DocumentClassifierModel> {
        traced(
            "updateDocumentClassifierModel",
            self.inner.update_document_classifier_model(options),
        )
        .await
    }

    async fn delete_document_classifier_model(
        &self,
        options: DeleteDocumentClassifierModelOptions,
    ) -> Result<()> {
        traced(
            "deleteDocumentClassifierModel",
            self.inner.delete_document_classifier_model(options),
        )
        .await
    }

    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<()> {
        traced("deleteUserData", self.inner.delete_user_data(options)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListProjectsResponse;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::{Subscriber, span};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    #[derive(Debug)]
    struct Fake;

    impl crate::stub::Discovery for Fake {
        async fn list_projects(
            &self,
            _options: ListProjectsOptions,
        ) -> Result<ListProjectsResponse> {
            Ok(ListProjectsResponse::default())
        }

        async fn delete_project(&self, options: DeleteProjectOptions) -> Result<()> {
            Err(crate::Error::invalid_argument(format!(
                "cannot delete {}",
                options.project_id()
            )))
        }
    }

    // Captures the name and fields of each span, and the fields of each event.
    #[derive(Clone, Default)]
    struct TestLayer {
        spans: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
        events: Arc<Mutex<Vec<HashMap<String, String>>>>,
    }

    impl<S> Layer<S> for TestLayer
    where
        S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            attrs: &span::Attributes<'_>,
            _id: &span::Id,
            _ctx: Context<'_, S>,
        ) {
            let mut fields = HashMap::new();
            attrs.record(&mut TestVisitor(&mut fields));
            let name = attrs.metadata().name().to_string();
            self.spans.lock().unwrap().push((name, fields));
        }

        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut TestVisitor(&mut fields));
            self.events.lock().unwrap().push(fields);
        }
    }

    struct TestVisitor<'a>(&'a mut HashMap<String, String>);

    impl tracing::field::Visit for TestVisitor<'_> {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    #[tokio::test]
    async fn span_per_request() -> anyhow::Result<()> {
        let layer = TestLayer::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(layer.clone()));

        let stub = Discovery::new(Fake);
        let options = ListProjectsOptions::builder().build()?;
        let response = crate::stub::Discovery::list_projects(&stub, options).await?;
        assert_eq!(response, ListProjectsResponse::default());

        let spans = layer.spans.lock().unwrap().clone();
        assert_eq!(spans.len(), 1, "{spans:?}");
        let (name, fields) = &spans[0];
        assert_eq!(name, "client_request");
        assert_eq!(fields.get("operation").map(String::as_str), Some("listProjects"));
        assert!(layer.events.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failures_are_logged() -> anyhow::Result<()> {
        let layer = TestLayer::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(layer.clone()));

        let stub = Discovery::new(Fake);
        let options = crate::options::DeleteProjectOptionsBuilder::new("p1").build()?;
        let err = crate::stub::Discovery::delete_project(&stub, options)
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");

        let events = layer.events.lock().unwrap().clone();
        assert_eq!(events.len(), 1, "{events:?}");
        let error = events[0].get("error").cloned().unwrap_or_default();
        assert!(error.contains("cannot delete p1"), "{events:?}");
        Ok(())
    }
}
