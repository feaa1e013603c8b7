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
        CollectionEnrichment, CreateDocumentClassifier, CreateEnrichment, EnrichmentOptions,
        TrainingExample, UpdateDocumentClassifier,
    };
    use discovery_v2::options::*;
    use discovery_v2::{Binding, Body, ClientConfig, FormPart, HttpRequest};
    use http::Method;
    use serde_json::json;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    const VERSION: &str = "2023-03-31";

    fn config() -> anyhow::Result<ClientConfig> {
        Ok(ClientConfig::new(VERSION)?)
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn json_body(request: &HttpRequest) -> serde_json::Value {
        let Body::Json(body) = request.body() else {
            panic!("expected a JSON body, got {:?}", request.body());
        };
        body.clone()
    }

    fn parts(request: &HttpRequest) -> Vec<FormPart> {
        let Body::Multipart(parts) = request.body() else {
            panic!("expected a multipart body, got {:?}", request.body());
        };
        parts.clone()
    }

    #[test_case(ListProjectsOptions::builder().build().unwrap().bind(&config().unwrap()).unwrap(), "listProjects")]
    #[test_case(GetProjectOptionsBuilder::new("p1").build().unwrap().bind(&config().unwrap()).unwrap(), "getProject")]
    #[test_case(ListCollectionsOptionsBuilder::new("p1").build().unwrap().bind(&config().unwrap()).unwrap(), "listCollections")]
    #[test_case(QueryNoticesOptionsBuilder::new("p1").build().unwrap().bind(&config().unwrap()).unwrap(), "queryNotices")]
    #[test_case(DeleteUserDataOptionsBuilder::new("c").build().unwrap().bind(&config().unwrap()).unwrap(), "deleteUserData")]
    fn common_values(request: HttpRequest, operation_id: &str) {
        assert_eq!(request.query_value("version"), Some(VERSION), "{request:?}");
        let want = format!("service_name=discovery;service_version=v2;operation_id={operation_id}");
        assert_eq!(
            header(&request, "x-ibmcloud-sdk-analytics"),
            Some(want.as_str()),
            "{request:?}"
        );
    }

    #[test]
    fn service_name_in_analytics() -> Result {
        let config = config()?.set_service_name("my-discovery");
        let request = ListProjectsOptions::builder().build()?.bind(&config)?;
        assert_eq!(
            header(&request, "x-ibmcloud-sdk-analytics"),
            Some("service_name=my-discovery;service_version=v2;operation_id=listProjects")
        );
        Ok(())
    }

    #[test]
    fn create_collection() -> Result {
        let options = CreateCollectionOptionsBuilder::new("p1", "Contracts")
            .set_description("Signed contracts")
            .add_enrichment(
                CollectionEnrichment::new()
                    .set_enrichment_id("e1")
                    .set_fields(["text"]),
            )
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "/v2/projects/p1/collections");
        assert_eq!(header(&request, "accept"), Some("application/json"));
        assert_eq!(
            json_body(&request),
            json!({
                "name": "Contracts",
                "description": "Signed contracts",
                "enrichments": [{"enrichment_id": "e1", "fields": ["text"]}],
            })
        );
        Ok(())
    }

    #[test]
    fn create_project_renames_type() -> Result {
        let options = CreateProjectOptionsBuilder::new("My project", "document_retrieval").build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects");
        assert_eq!(
            json_body(&request),
            json!({"name": "My project", "type": "document_retrieval"})
        );
        Ok(())
    }

    #[test]
    fn path_values_are_encoded() -> Result {
        let options = GetDocumentOptionsBuilder::new("p 1", "c/1", "d?1").build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(
            request.path(),
            "/v2/projects/p%201/collections/c%2F1/documents/d%3F1"
        );
        Ok(())
    }

    #[test]
    fn query_body() -> Result {
        let options = QueryOptionsBuilder::new("p1")
            .set_collection_ids(["c1", "c2"])
            .set_natural_language_query("who signed")
            .set_count(5)
            .add_return_field("title")
            .set_highlight(true)
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "/v2/projects/p1/query");
        assert_eq!(request.query_value("collection_ids"), None);
        assert_eq!(
            json_body(&request),
            json!({
                "collection_ids": ["c1", "c2"],
                "natural_language_query": "who signed",
                "count": 5,
                "return": ["title"],
                "highlight": true,
            })
        );
        Ok(())
    }

    #[test]
    fn list_fields_joins_ids() -> Result {
        let options = ListFieldsOptionsBuilder::new("p1")
            .add_collection_id("c1")
            .add_collection_id("c2")
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/fields");
        assert_eq!(request.query_value("collection_ids"), Some("c1,c2"));

        let request = ListFieldsOptionsBuilder::new("p1").build()?.bind(&config()?)?;
        assert_eq!(request.query_value("collection_ids"), None);
        Ok(())
    }

    #[test]
    fn list_documents_query() -> Result {
        let options = ListDocumentsOptionsBuilder::new("p1", "c1")
            .set_count(100)
            .set_status(["available", "failed"])
            .set_has_notices(true)
            .set_sha256("abc")
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "/v2/projects/p1/collections/c1/documents");
        let got = request
            .query_pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                format!("version={VERSION}"),
                "count=100".to_string(),
                "status=available,failed".to_string(),
                "has_notices=true".to_string(),
                "sha256=abc".to_string(),
            ]
        );
        assert!(matches!(request.body(), Body::Empty), "{request:?}");
        Ok(())
    }

    #[test]
    fn autocompletion_query() -> Result {
        let options = GetAutocompletionOptionsBuilder::new("p1", "Ho")
            .set_field("title")
            .set_count(3)
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/autocompletion");
        assert_eq!(request.query_value("prefix"), Some("Ho"));
        assert_eq!(request.query_value("field"), Some("title"));
        assert_eq!(request.query_value("count"), Some("3"));
        Ok(())
    }

    #[test]
    fn add_document() -> Result {
        let options = AddDocumentOptionsBuilder::new("p1", "c1")
            .set_file(bytes::Bytes::from_static(b"%PDF-1.4"))
            .set_filename("contract.pdf")
            .set_metadata(r#"{"author": "me"}"#)
            .set_x_watson_discovery_force(true)
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "/v2/projects/p1/collections/c1/documents");
        assert_eq!(header(&request, "x-watson-discovery-force"), Some("true"));

        let parts = parts(&request);
        assert_eq!(parts.len(), 2, "{parts:?}");
        assert_eq!(parts[0].name(), "file");
        assert_eq!(parts[0].filename(), Some("contract.pdf"));
        assert_eq!(parts[0].content_type(), Some("application/octet-stream"));
        assert_eq!(&parts[0].content()[..], b"%PDF-1.4");
        assert_eq!(parts[1].name(), "metadata");
        assert_eq!(parts[1].filename(), None);
        assert_eq!(&parts[1].content()[..], br#"{"author": "me"}"#);
        Ok(())
    }

    #[test]
    fn update_document_content_type() -> Result {
        let options = UpdateDocumentOptionsBuilder::new("p1", "c1", "d1")
            .set_file("hello")
            .set_filename("hello.txt")
            .set_file_content_type("text/plain")
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(
            request.path(),
            "/v2/projects/p1/collections/c1/documents/d1"
        );
        assert_eq!(header(&request, "x-watson-discovery-force"), None);
        let parts = parts(&request);
        assert_eq!(parts.len(), 1, "{parts:?}");
        assert_eq!(parts[0].content_type(), Some("text/plain"));
        Ok(())
    }

    #[test]
    fn document_needs_file_or_metadata() -> Result {
        let options = AddDocumentOptionsBuilder::new("p1", "c1").build()?;
        let err = options.bind(&config()?).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("metadata"), "{err}");

        let options = AnalyzeDocumentOptionsBuilder::new("p1", "c1").build()?;
        let err = options.bind(&config()?).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[test]
    fn analyze_document() -> Result {
        let options = AnalyzeDocumentOptionsBuilder::new("p1", "c1")
            .set_metadata("{}")
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/collections/c1/analyze");
        let parts = parts(&request);
        assert_eq!(parts.len(), 1, "{parts:?}");
        assert_eq!(parts[0].name(), "metadata");
        Ok(())
    }

    #[test]
    fn delete_document() -> Result {
        let options = DeleteDocumentOptionsBuilder::new("p1", "c1", "d1")
            .set_x_watson_discovery_force(false)
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(header(&request, "x-watson-discovery-force"), Some("false"));
        assert_eq!(header(&request, "accept"), Some("application/json"));
        Ok(())
    }

    #[test]
    fn create_enrichment() -> Result {
        let enrichment = CreateEnrichment::new()
            .set_name("Dictionary")
            .set_type("dictionary")
            .set_options(EnrichmentOptions::new().set_languages(["en"]));
        let options = CreateEnrichmentOptionsBuilder::new("p1", enrichment)
            .set_file("term1\nterm2\n")
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/enrichments");

        let parts = parts(&request);
        assert_eq!(parts.len(), 2, "{parts:?}");
        assert_eq!(parts[0].name(), "enrichment");
        assert_eq!(parts[0].content_type(), Some("application/json"));
        let got = serde_json::from_slice::<serde_json::Value>(parts[0].content())?;
        assert_eq!(
            got,
            json!({"name": "Dictionary", "type": "dictionary", "options": {"languages": ["en"]}})
        );
        assert_eq!(parts[1].name(), "file");
        assert_eq!(parts[1].filename(), Some("filename"));
        assert_eq!(parts[1].content_type(), Some("application/octet-stream"));
        Ok(())
    }

    #[test]
    fn create_classifier_parts() -> Result {
        let options = CreateDocumentClassifierOptionsBuilder::new(
            "p1",
            "text,label\nhello,greeting\n",
            CreateDocumentClassifier::new()
                .set_name("Greetings")
                .set_language("en")
                .set_answer_field("label"),
        )
        .set_test_data("text,label\nhi,greeting\n")
        .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/document_classifiers");
        let parts = parts(&request);
        let names = parts.iter().map(FormPart::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["training_data", "classifier", "test_data"]);
        assert_eq!(parts[0].filename(), Some("filename"));
        assert_eq!(parts[0].content_type(), Some("text/csv"));
        assert_eq!(parts[2].content_type(), Some("text/csv"));
        let got = serde_json::from_slice::<serde_json::Value>(parts[1].content())?;
        assert_eq!(
            got,
            json!({"name": "Greetings", "language": "en", "answer_field": "label"})
        );
        Ok(())
    }

    #[test]
    fn update_classifier_without_data() -> Result {
        let options = UpdateDocumentClassifierOptionsBuilder::new(
            "p1",
            "cl1",
            UpdateDocumentClassifier::new().set_name("Renamed"),
        )
        .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/document_classifiers/cl1");
        let parts = parts(&request);
        let names = parts.iter().map(FormPart::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["classifier"]);
        Ok(())
    }

    #[test]
    fn classifier_model_body() -> Result {
        let options = CreateDocumentClassifierModelOptionsBuilder::new("p1", "cl1", "model")
            .set_learning_rate(0.1)
            .set_l1_regularization_strengths([0.0001])
            .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(
            request.path(),
            "/v2/projects/p1/document_classifiers/cl1/models"
        );
        assert_eq!(
            json_body(&request),
            json!({"name": "model", "learning_rate": 0.1, "l1_regularization_strengths": [0.0001]})
        );
        Ok(())
    }

    #[test]
    fn training_query_body() -> Result {
        let options = UpdateTrainingQueryOptionsBuilder::new(
            "p1",
            "q1",
            "who signed",
            [TrainingExample::new()
                .set_document_id("d1")
                .set_collection_id("c1")
                .set_relevance(10)],
        )
        .build()?;
        let request = options.bind(&config()?)?;
        assert_eq!(request.path(), "/v2/projects/p1/training_data/queries/q1");
        assert_eq!(
            json_body(&request),
            json!({
                "natural_language_query": "who signed",
                "examples": [{"document_id": "d1", "collection_id": "c1", "relevance": 10}],
            })
        );
        Ok(())
    }

    #[test_case(DeleteProjectOptionsBuilder::new("p1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1")]
    #[test_case(DeleteCollectionOptionsBuilder::new("p1", "c1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1/collections/c1")]
    #[test_case(DeleteTrainingQueriesOptionsBuilder::new("p1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1/training_data/queries")]
    #[test_case(DeleteTrainingQueryOptionsBuilder::new("p1", "q1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1/training_data/queries/q1")]
    #[test_case(DeleteEnrichmentOptionsBuilder::new("p1", "e1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1/enrichments/e1")]
    #[test_case(DeleteDocumentClassifierOptionsBuilder::new("p1", "cl1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1/document_classifiers/cl1")]
    #[test_case(DeleteDocumentClassifierModelOptionsBuilder::new("p1", "cl1", "m1").build().unwrap().bind(&config().unwrap()).unwrap(), "/v2/projects/p1/document_classifiers/cl1/models/m1")]
    fn no_content_deletes(request: HttpRequest, path: &str) {
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.path(), path);
        assert_eq!(header(&request, "accept"), None);
        assert!(matches!(request.body(), Body::Empty), "{request:?}");
    }

    #[test]
    fn delete_user_data() -> Result {
        let request = DeleteUserDataOptionsBuilder::new("customer 1")
            .build()?
            .bind(&config()?)?;
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.path(), "/v2/user_data");
        assert_eq!(request.query_value("customer_id"), Some("customer 1"));
        let url = request.url()?;
        assert_eq!(
            url.as_str(),
            "https://api.us-south.discovery.watson.cloud.ibm.com/v2/user_data?version=2023-03-31&customer_id=customer+1"
        );
        Ok(())
    }

    #[test]
    fn custom_service_url() -> Result {
        let config = config()?.set_service_url("https://example.com/instances/123")?;
        let request = GetCollectionOptionsBuilder::new("p1", "c1")
            .build()?
            .bind(&config)?;
        let url = request.url()?;
        assert_eq!(
            url.as_str(),
            "https://example.com/instances/123/v2/projects/p1/collections/c1?version=2023-03-31"
        );
        Ok(())
    }

    #[test]
    fn decode_responses() -> Result {
        type Response = <CreateCollectionOptions as Binding>::Response;
        let got: Response = discovery_v2::decode(
            br#"{"collection_id": "c1", "name": "Contracts", "created": "2023-01-01T00:00:00Z"}"#,
        )?;
        assert_eq!(got.collection_id.as_deref(), Some("c1"));
        assert_eq!(got.name.as_deref(), Some("Contracts"));

        let () = discovery_v2::decode::<<DeleteProjectOptions as Binding>::Response>(b"")?;
        Ok(())
    }
}
