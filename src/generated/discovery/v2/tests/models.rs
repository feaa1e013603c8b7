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
    use discovery_v2::model::*;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};

    type Result = anyhow::Result<()>;

    // Deserializes `value`, and verifies the result serializes back to the
    // same JSON.
    fn round_trip<T>(value: Value) -> anyhow::Result<T>
    where
        T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
    {
        let got = serde_json::from_value::<T>(value.clone())?;
        assert_eq!(serde_json::to_value(&got)?, value, "{got:?}");
        let again = serde_json::from_value::<T>(serde_json::to_value(&got)?)?;
        assert_eq!(again, got);
        Ok(got)
    }

    #[test]
    fn query_response() -> Result {
        let got = round_trip::<QueryResponse>(json!({
            "matching_results": 24,
            "retrieval_details": {"document_retrieval_strategy": "untrained"},
            "suggested_query": "contracts",
            "results": [{
                "document_id": "d1",
                "metadata": {"parent_document_id": "p1"},
                "result_metadata": {
                    "document_retrieval_source": "search",
                    "collection_id": "c1",
                    "confidence": 0.75,
                },
                "document_passages": [{
                    "passage_text": "the <em>contract</em> is signed",
                    "start_offset": 10,
                    "end_offset": 40,
                    "field": "text",
                    "answers": [{
                        "answer_text": "signed",
                        "start_offset": 34,
                        "end_offset": 40,
                        "confidence": 0.5,
                    }],
                }],
                "title": "Contract A",
                "enriched_text": {"entities": [{"type": "Person", "text": "Alice"}]},
            }],
            "aggregations": [{
                "type": "term",
                "field": "enriched_text.entities.text",
                "count": 2,
                "results": [{"key": "Alice", "matching_results": 3}],
            }],
            "suggested_refinements": [{"text": "signed contracts"}],
            "passages": [{
                "passage_text": "signed by Alice",
                "passage_score": 12.5,
                "document_id": "d1",
                "collection_id": "c1",
                "start_offset": 1,
                "end_offset": 16,
                "field": "text",
            }],
        }))?;

        assert_eq!(got.matching_results, Some(24));
        let result = &got.results.as_deref().unwrap_or_default()[0];
        assert_eq!(result.document_id.as_deref(), Some("d1"));
        assert_eq!(result.properties.get("title"), Some(&json!("Contract A")));
        assert!(result.properties.contains_key("enriched_text"));
        assert!(!result.properties.contains_key("document_id"));
        let metadata = result.result_metadata.as_ref().and_then(|m| m.confidence);
        assert_eq!(metadata, Some(0.75));

        let aggregations = got.aggregations.unwrap_or_default();
        let QueryAggregation::Term(term) = &aggregations[0] else {
            panic!("expected a term aggregation, got {aggregations:?}");
        };
        assert_eq!(term.count, Some(2));
        Ok(())
    }

    #[test]
    fn table_results() -> Result {
        let got = round_trip::<QueryTableResult>(json!({
            "table_id": "t1",
            "source_document_id": "d1",
            "collection_id": "c1",
            "table_html": "<table></table>",
            "table_html_offset": 42,
            "table": {
                "location": {"begin": 0, "end": 100},
                "text": "Revenue 2023",
                "section_title": {"text": "Financials", "location": {"begin": 0, "end": 10}},
                "title": {"text": "Revenue"},
                "table_headers": [{"cell_id": "h1", "text": "Revenue", "row_index_begin": 0}],
                "row_headers": [{"cell_id": "r1", "text": "2023", "text_normalized": "2023"}],
                "column_headers": [{"cell_id": "c1", "text_normalized": "revenue"}],
                "key_value_pairs": [{
                    "key": {"cell_id": "k1", "text": "Total"},
                    "value": [{"cell_id": "v1", "text": "100"}],
                }],
                "body_cells": [{
                    "cell_id": "b1",
                    "text": "100",
                    "row_index_begin": 1,
                    "row_index_end": 1,
                    "column_index_begin": 1,
                    "column_index_end": 1,
                    "row_header_ids": [{"id": "r1"}],
                    "row_header_texts": [{"text": "2023"}],
                    "column_header_texts_normalized": [{"text_normalized": "revenue"}],
                    "attributes": [{"type": "Currency", "text": "100"}],
                }],
                "contexts": [{"text": "All values in USD"}],
            },
        }))?;
        let table = got.table.unwrap_or_default();
        let cells = table.body_cells.unwrap_or_default();
        assert_eq!(cells[0].row_index_begin, Some(1));
        Ok(())
    }

    #[test]
    fn project_details() -> Result {
        let got = round_trip::<ProjectDetails>(json!({
            "project_id": "p1",
            "name": "Support",
            "type": "conversational_search",
            "collection_count": 2,
            "relevancy_training_status": {
                "data_updated": "2023-01-01T00:00:00Z",
                "total_examples": 12,
                "sufficient_label_diversity": true,
                "processing": false,
                "minimum_examples_added": true,
                "successfully_trained": "2023-01-02T00:00:00Z",
                "available": true,
                "notices": 0,
                "minimum_queries_added": true,
            },
            "default_query_parameters": {
                "collection_ids": ["c1"],
                "passages": {"enabled": true, "count": 3, "fields": ["text"], "characters": 200},
                "table_results": {"enabled": false},
                "aggregation": "term(enriched_text.entities.text)",
                "suggested_refinements": {"enabled": false, "count": 5},
                "spelling_suggestions": true,
                "highlight": false,
                "count": 10,
                "sort": "-date",
                "return": ["title", "text"],
            },
        }))?;
        assert_eq!(
            got.r#type.as_deref(),
            Some(project_details::r#type::CONVERSATIONAL_SEARCH)
        );
        let params = got.default_query_parameters.unwrap_or_default();
        assert_eq!(
            params.r#return,
            Some(vec!["title".to_string(), "text".to_string()])
        );
        Ok(())
    }

    #[test]
    fn document_details() -> Result {
        let got = round_trip::<DocumentDetails>(json!({
            "document_id": "d1",
            "created": "2023-01-01T00:00:00Z",
            "updated": "2023-01-02T00:00:00Z",
            "status": "failed",
            "notices": [{
                "notice_id": "index_failed",
                "created": "2023-01-01T00:00:00Z",
                "document_id": "d1",
                "collection_id": "c1",
                "severity": "error",
                "step": "indexing",
                "description": "The document could not be indexed",
            }],
            "children": {"have_notices": false, "count": 2},
            "filename": "contract.pdf",
            "file_type": "pdf",
            "sha256": "abc123",
        }))?;
        assert_eq!(got.status.as_deref(), Some(document_details::status::FAILED));
        assert_eq!(got.file_type.as_deref(), Some(document_details::file_type::PDF));
        let notices = got.notices.unwrap_or_default();
        assert_eq!(notices[0].severity.as_deref(), Some(notice::severity::ERROR));
        Ok(())
    }

    #[test]
    fn unknown_status_is_kept() -> Result {
        let got = serde_json::from_value::<DocumentAccepted>(json!({
            "document_id": "d1",
            "status": "quarantined",
        }))?;
        assert_eq!(got.status.as_deref(), Some("quarantined"));
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> Result {
        let got = serde_json::from_value::<CollectionDetails>(json!({
            "collection_id": "c1",
            "name": "Contracts",
            "a_field_added_later": {"nested": [1, 2, 3]},
        }))?;
        assert_eq!(got.collection_id.as_deref(), Some("c1"));
        assert_eq!(
            serde_json::to_value(&got)?,
            json!({"collection_id": "c1", "name": "Contracts"})
        );
        Ok(())
    }

    #[test]
    fn missing_fields_are_none() -> Result {
        let got = serde_json::from_value::<DocumentClassifierModel>(json!({}))?;
        assert_eq!(got, DocumentClassifierModel::default());
        assert_eq!(got.evaluation, None);

        let got = serde_json::from_value::<QueryResponse>(json!({}))?;
        assert_eq!(got.results, None);
        assert_eq!(got.aggregations, None);

        let got = serde_json::from_value::<AnalyzedDocument>(json!({"result": {}}))?;
        let result = got.result.unwrap_or_default();
        assert_eq!(result.metadata, None);
        assert!(result.properties.is_empty(), "{result:?}");
        Ok(())
    }

    #[test]
    fn wrong_type_is_an_error() {
        let got = serde_json::from_value::<ListDocumentsResponse>(json!({
            "matching_results": "many",
        }));
        assert!(got.is_err(), "{got:?}");
        let err = discovery_v2::decode::<ListDocumentsResponse>(br#"{"matching_results": "many"}"#)
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn analyzed_document() -> Result {
        let got = round_trip::<AnalyzedDocument>(json!({
            "notices": [],
            "result": {
                "metadata": {"author": "Alice"},
                "enriched_text": [{"entities": []}],
                "text": ["The contract is signed."],
            },
        }))?;
        let result = got.result.unwrap_or_default();
        assert_eq!(
            result.properties.get("text"),
            Some(&json!(["The contract is signed."]))
        );
        Ok(())
    }

    #[test]
    fn enrichments() -> Result {
        let got = round_trip::<Enrichments>(json!({
            "enrichments": [{
                "enrichment_id": "e1",
                "name": "Webhook",
                "description": "Calls an external service",
                "type": "webhook",
                "options": {
                    "url": "https://example.com/enrich",
                    "version": "v1",
                    "secret": "s3cr3t",
                    "headers": [{"name": "x-api-key", "value": "k"}],
                    "location_encoding": "`utf-16`",
                },
            }, {
                "enrichment_id": "e2",
                "type": "classifier",
                "options": {
                    "languages": ["en"],
                    "classifier_id": "cl1",
                    "model_id": "m1",
                    "confidence_threshold": 0.25,
                    "top_k": 3,
                },
            }],
        }))?;
        let all = got.enrichments.unwrap_or_default();
        assert_eq!(all[0].r#type.as_deref(), Some(enrichment::r#type::WEBHOOK));
        assert_eq!(all[1].r#type.as_deref(), Some(enrichment::r#type::CLASSIFIER));
        Ok(())
    }

    #[test]
    fn classifier_model() -> Result {
        let got = round_trip::<DocumentClassifierModels>(json!({
            "models": [{
                "model_id": "m1",
                "name": "model",
                "description": "first try",
                "created": "2023-01-01T00:00:00Z",
                "updated": "2023-01-01T01:00:00Z",
                "training_data_file": "train.csv",
                "test_data_file": "test.csv",
                "status": "available",
                "evaluation": {
                    "micro_average": {"precision": 0.5, "recall": 0.25, "f1": 0.125},
                    "macro_average": {"precision": 0.5, "recall": 0.25, "f1": 0.125},
                    "per_class": [{"name": "greeting", "precision": 1.0, "recall": 0.5, "f1": 0.75}],
                },
                "enrichment_id": "e1",
                "deployed_at": "2023-01-02T00:00:00Z",
            }],
        }))?;
        let models = got.models.unwrap_or_default();
        assert_eq!(
            models[0].status.as_deref(),
            Some(document_classifier_model::status::AVAILABLE)
        );
        Ok(())
    }

    #[test]
    fn component_settings() -> Result {
        round_trip::<ComponentSettingsResponse>(json!({
            "fields_shown": {"body": {"use_passage": true, "field": "text"}, "title": {"field": "title"}},
            "autocomplete": true,
            "structured_search": false,
            "results_per_page": 10,
            "aggregations": [{
                "name": "entities",
                "label": "Top entities",
                "multiple_selections_allowed": true,
                "visualization_type": "auto",
            }],
        }))?;
        Ok(())
    }

    #[test]
    fn request_side_records_serialize_set_fields() -> Result {
        let enrichment = CreateEnrichment::new()
            .set_name("Patterns")
            .set_type(create_enrichment::r#type::REGULAR_EXPRESSION)
            .set_options(
                EnrichmentOptions::new()
                    .set_languages(["en"])
                    .set_entity_type("zip")
                    .set_regular_expression("[0-9]{5}"),
            );
        assert_eq!(
            serde_json::to_value(&enrichment)?,
            json!({
                "name": "Patterns",
                "type": "regular_expression",
                "options": {
                    "languages": ["en"],
                    "entity_type": "zip",
                    "regular_expression": "[0-9]{5}",
                },
            })
        );
        Ok(())
    }

    #[test]
    fn training_query_set() -> Result {
        let got = round_trip::<TrainingQuerySet>(json!({
            "queries": [{
                "query_id": "q1",
                "natural_language_query": "who signed",
                "filter": "collection_id:c1",
                "created": "2023-01-01T00:00:00Z",
                "updated": "2023-01-01T00:00:00Z",
                "examples": [{
                    "document_id": "d1",
                    "collection_id": "c1",
                    "relevance": 10,
                    "created": "2023-01-01T00:00:00Z",
                    "updated": "2023-01-01T00:00:00Z",
                }],
            }],
        }))?;
        assert_eq!(got.queries.map(|q| q.len()), Some(1));
        Ok(())
    }
}
