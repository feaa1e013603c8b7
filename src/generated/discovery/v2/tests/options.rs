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

#[cfg(test)]
mod tests {
    use discovery_v2::model::{
        CollectionEnrichment, CreateDocumentClassifier, CreateEnrichment, TrainingExample,
        UpdateDocumentClassifier,
    };
    use discovery_v2::options::*;
    use gax::validator::ValidationError;
    use std::io::Write;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    fn missing_field(err: &discovery_v2::Error) -> Option<&'static str> {
        err.as_inner::<ValidationError>().and_then(ValidationError::field)
    }

    #[test]
    fn create_collection_required_values() -> Result {
        let options = CreateCollectionOptionsBuilder::new("p1", "Contracts").build()?;
        assert_eq!(options.project_id(), "p1");
        assert_eq!(options.name(), "Contracts");
        assert_eq!(options.description(), None);
        assert_eq!(options.language(), None);
        assert_eq!(options.ocr_enabled(), None);
        assert_eq!(options.enrichments(), None);
        assert_eq!(options.smart_document_understanding(), None);
        Ok(())
    }

    #[test]
    fn create_collection_missing_project() {
        let err = CreateCollectionOptions::builder()
            .set_name("Contracts")
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(missing_field(&err), Some("project_id"), "{err:?}");
    }

    #[test]
    fn first_missing_value_is_reported() {
        let err = CreateCollectionOptions::builder().build().unwrap_err();
        assert_eq!(missing_field(&err), Some("project_id"), "{err:?}");
        let err = CreateCollectionOptions::builder()
            .set_project_id("p1")
            .build()
            .unwrap_err();
        assert_eq!(missing_field(&err), Some("name"), "{err:?}");
    }

    fn classifier() -> CreateDocumentClassifier {
        CreateDocumentClassifier::new()
            .set_name("Greetings")
            .set_language("en")
            .set_answer_field("label")
    }

    #[test_case(CreateProjectOptions::builder().set_project_type("x").build().map(drop), "name"; "create_project name unset")]
    #[test_case(CreateProjectOptions::builder().set_name("").set_project_type("x").build().map(drop), "name"; "create_project name empty")]
    #[test_case(CreateProjectOptions::builder().set_name("x").build().map(drop), "project_type"; "create_project project_type unset")]
    #[test_case(CreateProjectOptions::builder().set_name("x").set_project_type("").build().map(drop), "project_type"; "create_project project_type empty")]
    #[test_case(GetProjectOptions::builder().build().map(drop), "project_id"; "get_project project_id unset")]
    #[test_case(GetProjectOptions::builder().set_project_id("").build().map(drop), "project_id"; "get_project project_id empty")]
    #[test_case(UpdateProjectOptions::builder().build().map(drop), "project_id"; "update_project project_id unset")]
    #[test_case(UpdateProjectOptions::builder().set_project_id("").build().map(drop), "project_id"; "update_project project_id empty")]
    #[test_case(DeleteProjectOptions::builder().build().map(drop), "project_id"; "delete_project project_id unset")]
    #[test_case(DeleteProjectOptions::builder().set_project_id("").build().map(drop), "project_id"; "delete_project project_id empty")]
    #[test_case(ListFieldsOptions::builder().build().map(drop), "project_id"; "list_fields project_id unset")]
    #[test_case(ListFieldsOptions::builder().set_project_id("").build().map(drop), "project_id"; "list_fields project_id empty")]
    #[test_case(ListCollectionsOptions::builder().build().map(drop), "project_id"; "list_collections project_id unset")]
    #[test_case(ListCollectionsOptions::builder().set_project_id("").build().map(drop), "project_id"; "list_collections project_id empty")]
    #[test_case(CreateCollectionOptions::builder().set_name("x").build().map(drop), "project_id"; "create_collection project_id unset")]
    #[test_case(CreateCollectionOptions::builder().set_project_id("").set_name("x").build().map(drop), "project_id"; "create_collection project_id empty")]
    #[test_case(CreateCollectionOptions::builder().set_project_id("x").build().map(drop), "name"; "create_collection name unset")]
    #[test_case(CreateCollectionOptions::builder().set_project_id("x").set_name("").build().map(drop), "name"; "create_collection name empty")]
    #[test_case(GetCollectionOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "get_collection project_id unset")]
    #[test_case(GetCollectionOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "get_collection project_id empty")]
    #[test_case(GetCollectionOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "get_collection collection_id unset")]
    #[test_case(GetCollectionOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "get_collection collection_id empty")]
    #[test_case(UpdateCollectionOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "update_collection project_id unset")]
    #[test_case(UpdateCollectionOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "update_collection project_id empty")]
    #[test_case(UpdateCollectionOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "update_collection collection_id unset")]
    #[test_case(UpdateCollectionOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "update_collection collection_id empty")]
    #[test_case(DeleteCollectionOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "delete_collection project_id unset")]
    #[test_case(DeleteCollectionOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "delete_collection project_id empty")]
    #[test_case(DeleteCollectionOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "delete_collection collection_id unset")]
    #[test_case(DeleteCollectionOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "delete_collection collection_id empty")]
    #[test_case(QueryOptions::builder().build().map(drop), "project_id"; "query project_id unset")]
    #[test_case(QueryOptions::builder().set_project_id("").build().map(drop), "project_id"; "query project_id empty")]
    #[test_case(GetAutocompletionOptions::builder().set_prefix("x").build().map(drop), "project_id"; "get_autocompletion project_id unset")]
    #[test_case(GetAutocompletionOptions::builder().set_project_id("").set_prefix("x").build().map(drop), "project_id"; "get_autocompletion project_id empty")]
    #[test_case(GetAutocompletionOptions::builder().set_project_id("x").build().map(drop), "prefix"; "get_autocompletion prefix unset")]
    #[test_case(GetAutocompletionOptions::builder().set_project_id("x").set_prefix("").build().map(drop), "prefix"; "get_autocompletion prefix empty")]
    #[test_case(QueryCollectionNoticesOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "query_collection_notices project_id unset")]
    #[test_case(QueryCollectionNoticesOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "query_collection_notices project_id empty")]
    #[test_case(QueryCollectionNoticesOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "query_collection_notices collection_id unset")]
    #[test_case(QueryCollectionNoticesOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "query_collection_notices collection_id empty")]
    #[test_case(QueryNoticesOptions::builder().build().map(drop), "project_id"; "query_notices project_id unset")]
    #[test_case(QueryNoticesOptions::builder().set_project_id("").build().map(drop), "project_id"; "query_notices project_id empty")]
    #[test_case(GetComponentSettingsOptions::builder().build().map(drop), "project_id"; "get_component_settings project_id unset")]
    #[test_case(GetComponentSettingsOptions::builder().set_project_id("").build().map(drop), "project_id"; "get_component_settings project_id empty")]
    #[test_case(ListDocumentsOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "list_documents project_id unset")]
    #[test_case(ListDocumentsOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "list_documents project_id empty")]
    #[test_case(ListDocumentsOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "list_documents collection_id unset")]
    #[test_case(ListDocumentsOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "list_documents collection_id empty")]
    #[test_case(AddDocumentOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "add_document project_id unset")]
    #[test_case(AddDocumentOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "add_document project_id empty")]
    #[test_case(AddDocumentOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "add_document collection_id unset")]
    #[test_case(AddDocumentOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "add_document collection_id empty")]
    #[test_case(GetDocumentOptions::builder().set_collection_id("x").set_document_id("x").build().map(drop), "project_id"; "get_document project_id unset")]
    #[test_case(GetDocumentOptions::builder().set_project_id("").set_collection_id("x").set_document_id("x").build().map(drop), "project_id"; "get_document project_id empty")]
    #[test_case(GetDocumentOptions::builder().set_project_id("x").set_document_id("x").build().map(drop), "collection_id"; "get_document collection_id unset")]
    #[test_case(GetDocumentOptions::builder().set_project_id("x").set_collection_id("").set_document_id("x").build().map(drop), "collection_id"; "get_document collection_id empty")]
    #[test_case(GetDocumentOptions::builder().set_project_id("x").set_collection_id("x").build().map(drop), "document_id"; "get_document document_id unset")]
    #[test_case(GetDocumentOptions::builder().set_project_id("x").set_collection_id("x").set_document_id("").build().map(drop), "document_id"; "get_document document_id empty")]
    #[test_case(UpdateDocumentOptions::builder().set_collection_id("x").set_document_id("x").build().map(drop), "project_id"; "update_document project_id unset")]
    #[test_case(UpdateDocumentOptions::builder().set_project_id("").set_collection_id("x").set_document_id("x").build().map(drop), "project_id"; "update_document project_id empty")]
    #[test_case(UpdateDocumentOptions::builder().set_project_id("x").set_document_id("x").build().map(drop), "collection_id"; "update_document collection_id unset")]
    #[test_case(UpdateDocumentOptions::builder().set_project_id("x").set_collection_id("").set_document_id("x").build().map(drop), "collection_id"; "update_document collection_id empty")]
    #[test_case(UpdateDocumentOptions::builder().set_project_id("x").set_collection_id("x").build().map(drop), "document_id"; "update_document document_id unset")]
    #[test_case(UpdateDocumentOptions::builder().set_project_id("x").set_collection_id("x").set_document_id("").build().map(drop), "document_id"; "update_document document_id empty")]
    #[test_case(DeleteDocumentOptions::builder().set_collection_id("x").set_document_id("x").build().map(drop), "project_id"; "delete_document project_id unset")]
    #[test_case(DeleteDocumentOptions::builder().set_project_id("").set_collection_id("x").set_document_id("x").build().map(drop), "project_id"; "delete_document project_id empty")]
    #[test_case(DeleteDocumentOptions::builder().set_project_id("x").set_document_id("x").build().map(drop), "collection_id"; "delete_document collection_id unset")]
    #[test_case(DeleteDocumentOptions::builder().set_project_id("x").set_collection_id("").set_document_id("x").build().map(drop), "collection_id"; "delete_document collection_id empty")]
    #[test_case(DeleteDocumentOptions::builder().set_project_id("x").set_collection_id("x").build().map(drop), "document_id"; "delete_document document_id unset")]
    #[test_case(DeleteDocumentOptions::builder().set_project_id("x").set_collection_id("x").set_document_id("").build().map(drop), "document_id"; "delete_document document_id empty")]
    #[test_case(AnalyzeDocumentOptions::builder().set_collection_id("x").build().map(drop), "project_id"; "analyze_document project_id unset")]
    #[test_case(AnalyzeDocumentOptions::builder().set_project_id("").set_collection_id("x").build().map(drop), "project_id"; "analyze_document project_id empty")]
    #[test_case(AnalyzeDocumentOptions::builder().set_project_id("x").build().map(drop), "collection_id"; "analyze_document collection_id unset")]
    #[test_case(AnalyzeDocumentOptions::builder().set_project_id("x").set_collection_id("").build().map(drop), "collection_id"; "analyze_document collection_id empty")]
    #[test_case(ListTrainingQueriesOptions::builder().build().map(drop), "project_id"; "list_training_queries project_id unset")]
    #[test_case(ListTrainingQueriesOptions::builder().set_project_id("").build().map(drop), "project_id"; "list_training_queries project_id empty")]
    #[test_case(DeleteTrainingQueriesOptions::builder().build().map(drop), "project_id"; "delete_training_queries project_id unset")]
    #[test_case(DeleteTrainingQueriesOptions::builder().set_project_id("").build().map(drop), "project_id"; "delete_training_queries project_id empty")]
    #[test_case(CreateTrainingQueryOptions::builder().set_natural_language_query("x").set_examples([TrainingExample::new()]).build().map(drop), "project_id"; "create_training_query project_id unset")]
    #[test_case(CreateTrainingQueryOptions::builder().set_project_id("").set_natural_language_query("x").set_examples([TrainingExample::new()]).build().map(drop), "project_id"; "create_training_query project_id empty")]
    #[test_case(CreateTrainingQueryOptions::builder().set_project_id("x").set_examples([TrainingExample::new()]).build().map(drop), "natural_language_query"; "create_training_query natural_language_query unset")]
    #[test_case(CreateTrainingQueryOptions::builder().set_project_id("x").set_natural_language_query("").set_examples([TrainingExample::new()]).build().map(drop), "natural_language_query"; "create_training_query natural_language_query empty")]
    #[test_case(CreateTrainingQueryOptions::builder().set_project_id("x").set_natural_language_query("x").build().map(drop), "examples"; "create_training_query examples unset")]
    #[test_case(GetTrainingQueryOptions::builder().set_query_id("x").build().map(drop), "project_id"; "get_training_query project_id unset")]
    #[test_case(GetTrainingQueryOptions::builder().set_project_id("").set_query_id("x").build().map(drop), "project_id"; "get_training_query project_id empty")]
    #[test_case(GetTrainingQueryOptions::builder().set_project_id("x").build().map(drop), "query_id"; "get_training_query query_id unset")]
    #[test_case(GetTrainingQueryOptions::builder().set_project_id("x").set_query_id("").build().map(drop), "query_id"; "get_training_query query_id empty")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_query_id("x").set_natural_language_query("x").set_examples([TrainingExample::new()]).build().map(drop), "project_id"; "update_training_query project_id unset")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_project_id("").set_query_id("x").set_natural_language_query("x").set_examples([TrainingExample::new()]).build().map(drop), "project_id"; "update_training_query project_id empty")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_project_id("x").set_natural_language_query("x").set_examples([TrainingExample::new()]).build().map(drop), "query_id"; "update_training_query query_id unset")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_project_id("x").set_query_id("").set_natural_language_query("x").set_examples([TrainingExample::new()]).build().map(drop), "query_id"; "update_training_query query_id empty")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_project_id("x").set_query_id("x").set_examples([TrainingExample::new()]).build().map(drop), "natural_language_query"; "update_training_query natural_language_query unset")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_project_id("x").set_query_id("x").set_natural_language_query("").set_examples([TrainingExample::new()]).build().map(drop), "natural_language_query"; "update_training_query natural_language_query empty")]
    #[test_case(UpdateTrainingQueryOptions::builder().set_project_id("x").set_query_id("x").set_natural_language_query("x").build().map(drop), "examples"; "update_training_query examples unset")]
    #[test_case(DeleteTrainingQueryOptions::builder().set_query_id("x").build().map(drop), "project_id"; "delete_training_query project_id unset")]
    #[test_case(DeleteTrainingQueryOptions::builder().set_project_id("").set_query_id("x").build().map(drop), "project_id"; "delete_training_query project_id empty")]
    #[test_case(DeleteTrainingQueryOptions::builder().set_project_id("x").build().map(drop), "query_id"; "delete_training_query query_id unset")]
    #[test_case(DeleteTrainingQueryOptions::builder().set_project_id("x").set_query_id("").build().map(drop), "query_id"; "delete_training_query query_id empty")]
    #[test_case(ListEnrichmentsOptions::builder().build().map(drop), "project_id"; "list_enrichments project_id unset")]
    #[test_case(ListEnrichmentsOptions::builder().set_project_id("").build().map(drop), "project_id"; "list_enrichments project_id empty")]
    #[test_case(CreateEnrichmentOptions::builder().set_enrichment(CreateEnrichment::new()).build().map(drop), "project_id"; "create_enrichment project_id unset")]
    #[test_case(CreateEnrichmentOptions::builder().set_project_id("").set_enrichment(CreateEnrichment::new()).build().map(drop), "project_id"; "create_enrichment project_id empty")]
    #[test_case(CreateEnrichmentOptions::builder().set_project_id("x").build().map(drop), "enrichment"; "create_enrichment enrichment unset")]
    #[test_case(GetEnrichmentOptions::builder().set_enrichment_id("x").build().map(drop), "project_id"; "get_enrichment project_id unset")]
    #[test_case(GetEnrichmentOptions::builder().set_project_id("").set_enrichment_id("x").build().map(drop), "project_id"; "get_enrichment project_id empty")]
    #[test_case(GetEnrichmentOptions::builder().set_project_id("x").build().map(drop), "enrichment_id"; "get_enrichment enrichment_id unset")]
    #[test_case(GetEnrichmentOptions::builder().set_project_id("x").set_enrichment_id("").build().map(drop), "enrichment_id"; "get_enrichment enrichment_id empty")]
    #[test_case(UpdateEnrichmentOptions::builder().set_enrichment_id("x").set_name("x").build().map(drop), "project_id"; "update_enrichment project_id unset")]
    #[test_case(UpdateEnrichmentOptions::builder().set_project_id("").set_enrichment_id("x").set_name("x").build().map(drop), "project_id"; "update_enrichment project_id empty")]
    #[test_case(UpdateEnrichmentOptions::builder().set_project_id("x").set_name("x").build().map(drop), "enrichment_id"; "update_enrichment enrichment_id unset")]
    #[test_case(UpdateEnrichmentOptions::builder().set_project_id("x").set_enrichment_id("").set_name("x").build().map(drop), "enrichment_id"; "update_enrichment enrichment_id empty")]
    #[test_case(UpdateEnrichmentOptions::builder().set_project_id("x").set_enrichment_id("x").build().map(drop), "name"; "update_enrichment name unset")]
    #[test_case(UpdateEnrichmentOptions::builder().set_project_id("x").set_enrichment_id("x").set_name("").build().map(drop), "name"; "update_enrichment name empty")]
    #[test_case(DeleteEnrichmentOptions::builder().set_enrichment_id("x").build().map(drop), "project_id"; "delete_enrichment project_id unset")]
    #[test_case(DeleteEnrichmentOptions::builder().set_project_id("").set_enrichment_id("x").build().map(drop), "project_id"; "delete_enrichment project_id empty")]
    #[test_case(DeleteEnrichmentOptions::builder().set_project_id("x").build().map(drop), "enrichment_id"; "delete_enrichment enrichment_id unset")]
    #[test_case(DeleteEnrichmentOptions::builder().set_project_id("x").set_enrichment_id("").build().map(drop), "enrichment_id"; "delete_enrichment enrichment_id empty")]
    #[test_case(ListDocumentClassifiersOptions::builder().build().map(drop), "project_id"; "list_document_classifiers project_id unset")]
    #[test_case(ListDocumentClassifiersOptions::builder().set_project_id("").build().map(drop), "project_id"; "list_document_classifiers project_id empty")]
    #[test_case(CreateDocumentClassifierOptions::builder().set_training_data(&b"text,label"[..]).set_classifier(classifier()).build().map(drop), "project_id"; "create_document_classifier project_id unset")]
    #[test_case(CreateDocumentClassifierOptions::builder().set_project_id("").set_training_data(&b"text,label"[..]).set_classifier(classifier()).build().map(drop), "project_id"; "create_document_classifier project_id empty")]
    #[test_case(CreateDocumentClassifierOptions::builder().set_project_id("x").set_classifier(classifier()).build().map(drop), "training_data"; "create_document_classifier training_data unset")]
    #[test_case(CreateDocumentClassifierOptions::builder().set_project_id("x").set_training_data(&b"text,label"[..]).build().map(drop), "classifier"; "create_document_classifier classifier unset")]
    #[test_case(GetDocumentClassifierOptions::builder().set_classifier_id("x").build().map(drop), "project_id"; "get_document_classifier project_id unset")]
    #[test_case(GetDocumentClassifierOptions::builder().set_project_id("").set_classifier_id("x").build().map(drop), "project_id"; "get_document_classifier project_id empty")]
    #[test_case(GetDocumentClassifierOptions::builder().set_project_id("x").build().map(drop), "classifier_id"; "get_document_classifier classifier_id unset")]
    #[test_case(GetDocumentClassifierOptions::builder().set_project_id("x").set_classifier_id("").build().map(drop), "classifier_id"; "get_document_classifier classifier_id empty")]
    #[test_case(UpdateDocumentClassifierOptions::builder().set_classifier_id("x").set_classifier(UpdateDocumentClassifier::new()).build().map(drop), "project_id"; "update_document_classifier project_id unset")]
    #[test_case(UpdateDocumentClassifierOptions::builder().set_project_id("").set_classifier_id("x").set_classifier(UpdateDocumentClassifier::new()).build().map(drop), "project_id"; "update_document_classifier project_id empty")]
    #[test_case(UpdateDocumentClassifierOptions::builder().set_project_id("x").set_classifier(UpdateDocumentClassifier::new()).build().map(drop), "classifier_id"; "update_document_classifier classifier_id unset")]
    #[test_case(UpdateDocumentClassifierOptions::builder().set_project_id("x").set_classifier_id("").set_classifier(UpdateDocumentClassifier::new()).build().map(drop), "classifier_id"; "update_document_classifier classifier_id empty")]
    #[test_case(UpdateDocumentClassifierOptions::builder().set_project_id("x").set_classifier_id("x").build().map(drop), "classifier"; "update_document_classifier classifier unset")]
    #[test_case(DeleteDocumentClassifierOptions::builder().set_classifier_id("x").build().map(drop), "project_id"; "delete_document_classifier project_id unset")]
    #[test_case(DeleteDocumentClassifierOptions::builder().set_project_id("").set_classifier_id("x").build().map(drop), "project_id"; "delete_document_classifier project_id empty")]
    #[test_case(DeleteDocumentClassifierOptions::builder().set_project_id("x").build().map(drop), "classifier_id"; "delete_document_classifier classifier_id unset")]
    #[test_case(DeleteDocumentClassifierOptions::builder().set_project_id("x").set_classifier_id("").build().map(drop), "classifier_id"; "delete_document_classifier classifier_id empty")]
    #[test_case(ListDocumentClassifierModelsOptions::builder().set_classifier_id("x").build().map(drop), "project_id"; "list_document_classifier_models project_id unset")]
    #[test_case(ListDocumentClassifierModelsOptions::builder().set_project_id("").set_classifier_id("x").build().map(drop), "project_id"; "list_document_classifier_models project_id empty")]
    #[test_case(ListDocumentClassifierModelsOptions::builder().set_project_id("x").build().map(drop), "classifier_id"; "list_document_classifier_models classifier_id unset")]
    #[test_case(ListDocumentClassifierModelsOptions::builder().set_project_id("x").set_classifier_id("").build().map(drop), "classifier_id"; "list_document_classifier_models classifier_id empty")]
    #[test_case(CreateDocumentClassifierModelOptions::builder().set_classifier_id("x").set_name("x").build().map(drop), "project_id"; "create_document_classifier_model project_id unset")]
    #[test_case(CreateDocumentClassifierModelOptions::builder().set_project_id("").set_classifier_id("x").set_name("x").build().map(drop), "project_id"; "create_document_classifier_model project_id empty")]
    #[test_case(CreateDocumentClassifierModelOptions::builder().set_project_id("x").set_name("x").build().map(drop), "classifier_id"; "create_document_classifier_model classifier_id unset")]
    #[test_case(CreateDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("").set_name("x").build().map(drop), "classifier_id"; "create_document_classifier_model classifier_id empty")]
    #[test_case(CreateDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").build().map(drop), "name"; "create_document_classifier_model name unset")]
    #[test_case(CreateDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").set_name("").build().map(drop), "name"; "create_document_classifier_model name empty")]
    #[test_case(GetDocumentClassifierModelOptions::builder().set_classifier_id("x").set_model_id("x").build().map(drop), "project_id"; "get_document_classifier_model project_id unset")]
    #[test_case(GetDocumentClassifierModelOptions::builder().set_project_id("").set_classifier_id("x").set_model_id("x").build().map(drop), "project_id"; "get_document_classifier_model project_id empty")]
    #[test_case(GetDocumentClassifierModelOptions::builder().set_project_id("x").set_model_id("x").build().map(drop), "classifier_id"; "get_document_classifier_model classifier_id unset")]
    #[test_case(GetDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("").set_model_id("x").build().map(drop), "classifier_id"; "get_document_classifier_model classifier_id empty")]
    #[test_case(GetDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").build().map(drop), "model_id"; "get_document_classifier_model model_id unset")]
    #[test_case(GetDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").set_model_id("").build().map(drop), "model_id"; "get_document_classifier_model model_id empty")]
    #[test_case(UpdateDocumentClassifierModelOptions::builder().set_classifier_id("x").set_model_id("x").build().map(drop), "project_id"; "update_document_classifier_model project_id unset")]
    #[test_case(UpdateDocumentClassifierModelOptions::builder().set_project_id("").set_classifier_id("x").set_model_id("x").build().map(drop), "project_id"; "update_document_classifier_model project_id empty")]
    #[test_case(UpdateDocumentClassifierModelOptions::builder().set_project_id("x").set_model_id("x").build().map(drop), "classifier_id"; "update_document_classifier_model classifier_id unset")]
    #[test_case(UpdateDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("").set_model_id("x").build().map(drop), "classifier_id"; "update_document_classifier_model classifier_id empty")]
    #[test_case(UpdateDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").build().map(drop), "model_id"; "update_document_classifier_model model_id unset")]
    #[test_case(UpdateDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").set_model_id("").build().map(drop), "model_id"; "update_document_classifier_model model_id empty")]
    #[test_case(DeleteDocumentClassifierModelOptions::builder().set_classifier_id("x").set_model_id("x").build().map(drop), "project_id"; "delete_document_classifier_model project_id unset")]
    #[test_case(DeleteDocumentClassifierModelOptions::builder().set_project_id("").set_classifier_id("x").set_model_id("x").build().map(drop), "project_id"; "delete_document_classifier_model project_id empty")]
    #[test_case(DeleteDocumentClassifierModelOptions::builder().set_project_id("x").set_model_id("x").build().map(drop), "classifier_id"; "delete_document_classifier_model classifier_id unset")]
    #[test_case(DeleteDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("").set_model_id("x").build().map(drop), "classifier_id"; "delete_document_classifier_model classifier_id empty")]
    #[test_case(DeleteDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").build().map(drop), "model_id"; "delete_document_classifier_model model_id unset")]
    #[test_case(DeleteDocumentClassifierModelOptions::builder().set_project_id("x").set_classifier_id("x").set_model_id("").build().map(drop), "model_id"; "delete_document_classifier_model model_id empty")]
    #[test_case(DeleteUserDataOptions::builder().build().map(drop), "customer_id"; "delete_user_data customer_id unset")]
    #[test_case(DeleteUserDataOptions::builder().set_customer_id("").build().map(drop), "customer_id"; "delete_user_data customer_id empty")]
    fn required_value(got: discovery_v2::Result<()>, field: &str) {
        let err = got.unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(missing_field(&err), Some(field), "{err:?}");
        assert!(err.to_string().contains(field), "{err}");
    }

    #[test_case(CreateDocumentClassifier::new().set_language("en").set_answer_field("label"), "classifier.name"; "name unset")]
    #[test_case(classifier().set_name(""), "classifier.name"; "name empty")]
    #[test_case(CreateDocumentClassifier::new().set_name("c").set_answer_field("label"), "classifier.language"; "language unset")]
    #[test_case(classifier().set_language(""), "classifier.language"; "language empty")]
    #[test_case(CreateDocumentClassifier::new().set_name("c").set_language("en"), "classifier.answer_field"; "answer_field unset")]
    #[test_case(CreateDocumentClassifier::new(), "classifier.name"; "all unset")]
    fn classifier_required_values(input: CreateDocumentClassifier, field: &str) {
        let err = CreateDocumentClassifierOptionsBuilder::new("p1", &b"text,label"[..], input)
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(missing_field(&err), Some(field), "{err:?}");
    }

    #[test]
    fn classifier_with_required_values() -> Result {
        let options =
            CreateDocumentClassifierOptionsBuilder::new("p1", &b"text,label"[..], classifier())
                .build()?;
        assert_eq!(options.classifier().name.as_deref(), Some("Greetings"));
        assert_eq!(options.classifier().answer_field.as_deref(), Some("label"));
        Ok(())
    }

    #[test]
    fn no_required_values() -> Result {
        let _ = ListProjectsOptions::builder().build()?;
        Ok(())
    }

    #[test]
    fn add_appends_in_order() -> Result {
        let options = QueryOptionsBuilder::new("p1")
            .add_collection_id("c1")
            .add_collection_id("c2")
            .add_return_field("title")
            .build()?;
        assert_eq!(
            options.collection_ids(),
            Some(["c1".to_string(), "c2".to_string()].as_slice())
        );
        assert_eq!(options.return_fields(), Some(["title".to_string()].as_slice()));
        Ok(())
    }

    #[test]
    fn set_replaces_list() -> Result {
        let options = QueryOptionsBuilder::new("p1")
            .add_collection_id("c1")
            .set_collection_ids(["c2", "c3"])
            .add_collection_id("c4")
            .build()?;
        assert_eq!(
            options.collection_ids(),
            Some(["c2", "c3", "c4"].map(String::from).as_slice())
        );

        let options = QueryOptionsBuilder::new("p1")
            .set_collection_ids(Vec::<String>::new())
            .build()?;
        assert_eq!(options.collection_ids(), Some([].as_slice()));
        Ok(())
    }

    #[test]
    fn add_model_values() -> Result {
        let options = CreateCollectionOptionsBuilder::new("p1", "Contracts")
            .add_enrichment(
                CollectionEnrichment::new()
                    .set_enrichment_id("e1")
                    .set_fields(["text"]),
            )
            .add_enrichment(CollectionEnrichment::new().set_enrichment_id("e2"))
            .build()?;
        let ids = options
            .enrichments()
            .unwrap_or_default()
            .iter()
            .map(|e| e.enrichment_id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![Some("e1"), Some("e2")]);
        Ok(())
    }

    #[test]
    fn to_builder_round_trip() -> Result {
        let options = QueryCollectionNoticesOptionsBuilder::new("p1", "c1")
            .set_filter("error")
            .set_count(10)
            .build()?;
        let copy = options.to_builder().build()?;
        assert_eq!(copy, options);

        let changed = options.to_builder().set_count(20).build()?;
        assert_eq!(changed.count(), Some(20));
        assert_eq!(changed.filter(), Some("error"));
        assert_eq!(options.count(), Some(10));

        let cleared = options.to_builder().set_or_clear_filter(None::<String>).build()?;
        assert_eq!(cleared.filter(), None);
        assert_eq!(cleared.project_id(), "p1");
        Ok(())
    }

    #[test]
    fn file_requires_filename() -> Result {
        let err = AddDocumentOptionsBuilder::new("p1", "c1")
            .set_file(bytes::Bytes::from_static(b"hello"))
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("filename"), "{err}");

        let options = AddDocumentOptionsBuilder::new("p1", "c1")
            .set_file(bytes::Bytes::from_static(b"hello"))
            .set_filename("hello.txt")
            .set_file_content_type("text/plain")
            .build()?;
        assert_eq!(options.file().map(|b| b.to_vec()), Some(b"hello".to_vec()));
        assert_eq!(options.filename(), Some("hello.txt"));
        assert_eq!(options.file_content_type(), Some("text/plain"));
        Ok(())
    }

    #[test]
    fn metadata_only_document() -> Result {
        let options = UpdateDocumentOptionsBuilder::new("p1", "c1", "d1")
            .set_metadata(r#"{"author": "me"}"#)
            .set_x_watson_discovery_force(true)
            .build()?;
        assert_eq!(options.file(), None);
        assert_eq!(options.metadata(), Some(r#"{"author": "me"}"#));
        assert_eq!(options.x_watson_discovery_force(), Some(true));
        Ok(())
    }

    #[test]
    fn file_path() -> Result {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"a,b\n1,2\n")?;
        file.flush()?;
        let expected = file
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);

        let options = AnalyzeDocumentOptionsBuilder::new("p1", "c1")
            .set_file_path(file.path())?
            .build()?;
        assert_eq!(options.file().map(|b| b.to_vec()), Some(b"a,b\n1,2\n".to_vec()));
        assert_eq!(options.filename().map(str::to_string), expected);

        let options = CreateDocumentClassifierOptionsBuilder::new(
            "p1",
            bytes::Bytes::new(),
            classifier(),
        )
        .set_training_data_path(file.path())?
        .build()?;
        assert_eq!(options.training_data().to_vec(), b"a,b\n1,2\n".to_vec());
        Ok(())
    }

    #[test]
    fn file_path_missing() -> Result {
        let dir = tempfile::tempdir()?;
        let err = AddDocumentOptionsBuilder::new("p1", "c1")
            .set_file_path(dir.path().join("missing.pdf"))
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");

        let err = CreateEnrichmentOptionsBuilder::new("p1", CreateEnrichment::new())
            .set_file_path(dir.path().join("missing.zip"))
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[test]
    fn training_query() -> Result {
        let options = CreateTrainingQueryOptionsBuilder::new(
            "p1",
            "who wrote this",
            [TrainingExample::new()
                .set_document_id("d1")
                .set_collection_id("c1")
                .set_relevance(10)],
        )
        .add_example(
            TrainingExample::new()
                .set_document_id("d2")
                .set_collection_id("c1")
                .set_relevance(0),
        )
        .set_filter("enriched_text.entities.type:Person")
        .build()?;
        let ids = options
            .examples()
            .iter()
            .map(|e| e.document_id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![Some("d1"), Some("d2")]);
        assert_eq!(
            options.filter(),
            Some("enriched_text.entities.type:Person")
        );
        Ok(())
    }

    #[test]
    fn classifier_model_values() -> Result {
        let options = CreateDocumentClassifierModelOptionsBuilder::new("p1", "cl1", "model")
            .set_learning_rate(0.1)
            .add_l1_regularization_strength(0.000001)
            .add_l1_regularization_strength(0.0001)
            .set_l2_regularization_strengths([0.01])
            .set_training_max_steps(10_000)
            .set_improvement_ratio(0.000012)
            .build()?;
        assert_eq!(options.learning_rate(), Some(0.1));
        assert_eq!(
            options.l1_regularization_strengths(),
            Some([0.000001, 0.0001].as_slice())
        );
        assert_eq!(options.l2_regularization_strengths(), Some([0.01].as_slice()));
        assert_eq!(options.training_max_steps(), Some(10_000));
        assert_eq!(options.improvement_ratio(), Some(0.000012));
        Ok(())
    }
}
