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

//! Maps each operation to the HTTP request the service expects.
//!
//! The bindings are transport neutral: they produce a
//! [HttpRequest][gax::request::HttpRequest] and leave sending it to the stub.

use crate::Result;
use crate::model::CreateEnrichment;
use crate::options::*;
use gax::client_config::ClientConfig;
use gax::path_parameter::enc;
use gax::request::{Binding, FormPart, HttpRequest};
use gax::validator;
use http::Method;

const FORCE_HEADER: &str = "x-watson-discovery-force";
const OCTET_STREAM: &str = "application/octet-stream";
const TEXT_CSV: &str = "text/csv";
// Part filename the service expects for uploads that carry no name of their own.
const DEFAULT_FILENAME: &str = "filename";

fn document_parts(
    file: Option<&bytes::Bytes>,
    filename: Option<&str>,
    content_type: Option<&str>,
    metadata: Option<&str>,
) -> Result<Vec<FormPart>> {
    validator::is_true(
        file.is_some() || metadata.is_some(),
        "at least one of `file` or `metadata` must be set",
    )?;
    let mut parts = Vec::new();
    if let Some(content) = file {
        let part = FormPart::new("file", content.clone())
            .set_content_type(content_type.unwrap_or(OCTET_STREAM));
        parts.push(match filename {
            Some(name) => part.set_filename(name),
            None => part,
        });
    }
    if let Some(metadata) = metadata {
        parts.push(FormPart::new("metadata", metadata.to_string()));
    }
    Ok(parts)
}

fn enrichment_parts(
    enrichment: &CreateEnrichment,
    file: Option<&bytes::Bytes>,
) -> Result<Vec<FormPart>> {
    let mut parts = vec![FormPart::json("enrichment", enrichment)?];
    if let Some(content) = file {
        parts.push(
            FormPart::new("file", content.clone())
                .set_filename(DEFAULT_FILENAME)
                .set_content_type(OCTET_STREAM),
        );
    }
    Ok(parts)
}

fn classifier_parts<T: serde::Serialize>(
    classifier: &T,
    training_data: Option<&bytes::Bytes>,
    test_data: Option<&bytes::Bytes>,
) -> Result<Vec<FormPart>> {
    let csv = |name: &str, content: &bytes::Bytes| {
        FormPart::new(name, content.clone())
            .set_filename(DEFAULT_FILENAME)
            .set_content_type(TEXT_CSV)
    };
    let mut parts = Vec::new();
    if let Some(content) = training_data {
        parts.push(csv("training_data", content));
    }
    parts.push(FormPart::json("classifier", classifier)?);
    if let Some(content) = test_data {
        parts.push(csv("test_data", content));
    }
    Ok(parts)
}

impl Binding for ListProjectsOptions {
    type Response = crate::model::ListProjectsResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = "/v2/projects".to_string();
        let request = HttpRequest::new(Method::GET, config, path, "listProjects")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct CreateProjectBody<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    project_type: &'a str,
    default_query_parameters: Option<&'a crate::model::DefaultQueryParams>,
}

impl Binding for CreateProjectOptions {
    type Response = crate::model::ProjectDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = "/v2/projects".to_string();
        let body = CreateProjectBody {
            name: self.name(),
            project_type: self.project_type(),
            default_query_parameters: self.default_query_parameters(),
        };
        HttpRequest::new(Method::POST, config, path, "createProject")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for GetProjectOptions {
    type Response = crate::model::ProjectDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "getProject")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateProjectBody<'a> {
    name: Option<&'a str>,
}

impl Binding for UpdateProjectOptions {
    type Response = crate::model::ProjectDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}", enc(self.project_id()));
        let body = UpdateProjectBody {
            name: self.name(),
        };
        HttpRequest::new(Method::POST, config, path, "updateProject")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for DeleteProjectOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}", enc(self.project_id()));
        HttpRequest::new(Method::DELETE, config, path, "deleteProject")
    }
}

impl Binding for ListFieldsOptions {
    type Response = crate::model::ListFieldsResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/fields", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "listFields")?
            .accept_json()
            .query("collection_ids", &self.collection_ids().map(<[String]>::to_vec));
        Ok(request)
    }
}

impl Binding for ListCollectionsOptions {
    type Response = crate::model::ListCollectionsResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/collections", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "listCollections")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct CreateCollectionBody<'a> {
    name: &'a str,
    description: Option<&'a str>,
    language: Option<&'a str>,
    ocr_enabled: Option<bool>,
    enrichments: Option<&'a [crate::model::CollectionEnrichment]>,
    smart_document_understanding: Option<&'a crate::model::CollectionDetailsSmartDocumentUnderstanding>,
}

impl Binding for CreateCollectionOptions {
    type Response = crate::model::CollectionDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/collections", enc(self.project_id()));
        let body = CreateCollectionBody {
            name: self.name(),
            description: self.description(),
            language: self.language(),
            ocr_enabled: self.ocr_enabled(),
            enrichments: self.enrichments(),
            smart_document_understanding: self.smart_document_understanding(),
        };
        HttpRequest::new(Method::POST, config, path, "createCollection")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for GetCollectionOptions {
    type Response = crate::model::CollectionDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "getCollection")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateCollectionBody<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
    ocr_enabled: Option<bool>,
    enrichments: Option<&'a [crate::model::CollectionEnrichment]>,
}

impl Binding for UpdateCollectionOptions {
    type Response = crate::model::CollectionDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        let body = UpdateCollectionBody {
            name: self.name(),
            description: self.description(),
            ocr_enabled: self.ocr_enabled(),
            enrichments: self.enrichments(),
        };
        HttpRequest::new(Method::POST, config, path, "updateCollection")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for DeleteCollectionOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        HttpRequest::new(Method::DELETE, config, path, "deleteCollection")
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct QueryBody<'a> {
    collection_ids: Option<&'a [String]>,
    filter: Option<&'a str>,
    query: Option<&'a str>,
    natural_language_query: Option<&'a str>,
    aggregation: Option<&'a str>,
    count: Option<i64>,
    #[serde(rename = "return")]
    return_fields: Option<&'a [String]>,
    offset: Option<i64>,
    sort: Option<&'a str>,
    highlight: Option<bool>,
    spelling_suggestions: Option<bool>,
    table_results: Option<&'a crate::model::QueryLargeTableResults>,
    suggested_refinements: Option<&'a crate::model::QueryLargeSuggestedRefinements>,
    passages: Option<&'a crate::model::QueryLargePassages>,
    similar: Option<&'a crate::model::QueryLargeSimilar>,
}

impl Binding for QueryOptions {
    type Response = crate::model::QueryResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/query", enc(self.project_id()));
        let body = QueryBody {
            collection_ids: self.collection_ids(),
            filter: self.filter(),
            query: self.query(),
            natural_language_query: self.natural_language_query(),
            aggregation: self.aggregation(),
            count: self.count(),
            return_fields: self.return_fields(),
            offset: self.offset(),
            sort: self.sort(),
            highlight: self.highlight(),
            spelling_suggestions: self.spelling_suggestions(),
            table_results: self.table_results(),
            suggested_refinements: self.suggested_refinements(),
            passages: self.passages(),
            similar: self.similar(),
        };
        HttpRequest::new(Method::POST, config, path, "query")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for GetAutocompletionOptions {
    type Response = crate::model::Completions;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/autocompletion", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "getAutocompletion")?
            .accept_json()
            .query("prefix", &self.prefix())
            .query("collection_ids", &self.collection_ids().map(<[String]>::to_vec))
            .query("field", &self.field())
            .query("count", &self.count());
        Ok(request)
    }
}

impl Binding for QueryCollectionNoticesOptions {
    type Response = crate::model::QueryNoticesResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/notices",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "queryCollectionNotices")?
            .accept_json()
            .query("filter", &self.filter())
            .query("query", &self.query())
            .query("natural_language_query", &self.natural_language_query())
            .query("count", &self.count())
            .query("offset", &self.offset());
        Ok(request)
    }
}

impl Binding for QueryNoticesOptions {
    type Response = crate::model::QueryNoticesResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/notices", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "queryNotices")?
            .accept_json()
            .query("filter", &self.filter())
            .query("query", &self.query())
            .query("natural_language_query", &self.natural_language_query())
            .query("count", &self.count())
            .query("offset", &self.offset());
        Ok(request)
    }
}

impl Binding for GetComponentSettingsOptions {
    type Response = crate::model::ComponentSettingsResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/component_settings", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "getComponentSettings")?
            .accept_json();
        Ok(request)
    }
}

impl Binding for ListDocumentsOptions {
    type Response = crate::model::ListDocumentsResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/documents",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "listDocuments")?
            .accept_json()
            .query("count", &self.count())
            .query("status", &self.status().map(<[String]>::to_vec))
            .query("has_notices", &self.has_notices())
            .query("is_parent", &self.is_parent())
            .query("parent_document_id", &self.parent_document_id())
            .query("sha256", &self.sha256());
        Ok(request)
    }
}

impl Binding for AddDocumentOptions {
    type Response = crate::model::DocumentAccepted;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/documents",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        let parts = document_parts(
            self.file(),
            self.filename(),
            self.file_content_type(),
            self.metadata(),
        )?;
        let request = HttpRequest::new(Method::POST, config, path, "addDocument")?
            .accept_json()
            .header(FORCE_HEADER, self.x_watson_discovery_force().as_ref())?
            .multipart(parts);
        Ok(request)
    }
}

impl Binding for GetDocumentOptions {
    type Response = crate::model::DocumentDetails;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/documents/{}",
            enc(self.project_id()),
            enc(self.collection_id()),
            enc(self.document_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "getDocument")?
            .accept_json();
        Ok(request)
    }
}

impl Binding for UpdateDocumentOptions {
    type Response = crate::model::DocumentAccepted;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/documents/{}",
            enc(self.project_id()),
            enc(self.collection_id()),
            enc(self.document_id()),
        );
        let parts = document_parts(
            self.file(),
            self.filename(),
            self.file_content_type(),
            self.metadata(),
        )?;
        let request = HttpRequest::new(Method::POST, config, path, "updateDocument")?
            .accept_json()
            .header(FORCE_HEADER, self.x_watson_discovery_force().as_ref())?
            .multipart(parts);
        Ok(request)
    }
}

impl Binding for DeleteDocumentOptions {
    type Response = crate::model::DeleteDocumentResponse;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/documents/{}",
            enc(self.project_id()),
            enc(self.collection_id()),
            enc(self.document_id()),
        );
        let request = HttpRequest::new(Method::DELETE, config, path, "deleteDocument")?
            .accept_json()
            .header(FORCE_HEADER, self.x_watson_discovery_force().as_ref())?;
        Ok(request)
    }
}

impl Binding for AnalyzeDocumentOptions {
    type Response = crate::model::AnalyzedDocument;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/collections/{}/analyze",
            enc(self.project_id()),
            enc(self.collection_id()),
        );
        let parts = document_parts(
            self.file(),
            self.filename(),
            self.file_content_type(),
            self.metadata(),
        )?;
        let request = HttpRequest::new(Method::POST, config, path, "analyzeDocument")?
            .accept_json()
            .multipart(parts);
        Ok(request)
    }
}

impl Binding for ListTrainingQueriesOptions {
    type Response = crate::model::TrainingQuerySet;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/training_data/queries", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "listTrainingQueries")?
            .accept_json();
        Ok(request)
    }
}

impl Binding for DeleteTrainingQueriesOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/training_data/queries", enc(self.project_id()));
        HttpRequest::new(Method::DELETE, config, path, "deleteTrainingQueries")
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct CreateTrainingQueryBody<'a> {
    natural_language_query: &'a str,
    examples: &'a [crate::model::TrainingExample],
    filter: Option<&'a str>,
}

impl Binding for CreateTrainingQueryOptions {
    type Response = crate::model::TrainingQuery;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/training_data/queries", enc(self.project_id()));
        let body = CreateTrainingQueryBody {
            natural_language_query: self.natural_language_query(),
            examples: self.examples(),
            filter: self.filter(),
        };
        HttpRequest::new(Method::POST, config, path, "createTrainingQuery")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for GetTrainingQueryOptions {
    type Response = crate::model::TrainingQuery;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/training_data/queries/{}",
            enc(self.project_id()),
            enc(self.query_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "getTrainingQuery")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateTrainingQueryBody<'a> {
    natural_language_query: &'a str,
    examples: &'a [crate::model::TrainingExample],
    filter: Option<&'a str>,
}

impl Binding for UpdateTrainingQueryOptions {
    type Response = crate::model::TrainingQuery;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/training_data/queries/{}",
            enc(self.project_id()),
            enc(self.query_id()),
        );
        let body = UpdateTrainingQueryBody {
            natural_language_query: self.natural_language_query(),
            examples: self.examples(),
            filter: self.filter(),
        };
        HttpRequest::new(Method::POST, config, path, "updateTrainingQuery")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for DeleteTrainingQueryOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/training_data/queries/{}",
            enc(self.project_id()),
            enc(self.query_id()),
        );
        HttpRequest::new(Method::DELETE, config, path, "deleteTrainingQuery")
    }
}

impl Binding for ListEnrichmentsOptions {
    type Response = crate::model::Enrichments;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/enrichments", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "listEnrichments")?
            .accept_json();
        Ok(request)
    }
}

impl Binding for CreateEnrichmentOptions {
    type Response = crate::model::Enrichment;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/enrichments", enc(self.project_id()));
        let parts = enrichment_parts(self.enrichment(), self.file())?;
        let request = HttpRequest::new(Method::POST, config, path, "createEnrichment")?
            .accept_json()
            .multipart(parts);
        Ok(request)
    }
}

impl Binding for GetEnrichmentOptions {
    type Response = crate::model::Enrichment;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/enrichments/{}",
            enc(self.project_id()),
            enc(self.enrichment_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "getEnrichment")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateEnrichmentBody<'a> {
    name: &'a str,
    description: Option<&'a str>,
}

impl Binding for UpdateEnrichmentOptions {
    type Response = crate::model::Enrichment;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/enrichments/{}",
            enc(self.project_id()),
            enc(self.enrichment_id()),
        );
        let body = UpdateEnrichmentBody {
            name: self.name(),
            description: self.description(),
        };
        HttpRequest::new(Method::POST, config, path, "updateEnrichment")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for DeleteEnrichmentOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/enrichments/{}",
            enc(self.project_id()),
            enc(self.enrichment_id()),
        );
        HttpRequest::new(Method::DELETE, config, path, "deleteEnrichment")
    }
}

impl Binding for ListDocumentClassifiersOptions {
    type Response = crate::model::DocumentClassifiers;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/document_classifiers", enc(self.project_id()));
        let request = HttpRequest::new(Method::GET, config, path, "listDocumentClassifiers")?
            .accept_json();
        Ok(request)
    }
}

impl Binding for CreateDocumentClassifierOptions {
    type Response = crate::model::DocumentClassifier;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/document_classifiers", enc(self.project_id()));
        let parts = classifier_parts(
            self.classifier(),
            Some(self.training_data()),
            self.test_data(),
        )?;
        let request = HttpRequest::new(Method::POST, config, path, "createDocumentClassifier")?
            .accept_json()
            .multipart(parts);
        Ok(request)
    }
}

impl Binding for GetDocumentClassifierOptions {
    type Response = crate::model::DocumentClassifier;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}",
            enc(self.project_id()),
            enc(self.classifier_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "getDocumentClassifier")?
            .accept_json();
        Ok(request)
    }
}

impl Binding for UpdateDocumentClassifierOptions {
    type Response = crate::model::DocumentClassifier;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}",
            enc(self.project_id()),
            enc(self.classifier_id()),
        );
        let parts = classifier_parts(self.classifier(), self.training_data(), self.test_data())?;
        let request = HttpRequest::new(Method::POST, config, path, "updateDocumentClassifier")?
            .accept_json()
            .multipart(parts);
        Ok(request)
    }
}

impl Binding for DeleteDocumentClassifierOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}",
            enc(self.project_id()),
            enc(self.classifier_id()),
        );
        HttpRequest::new(Method::DELETE, config, path, "deleteDocumentClassifier")
    }
}

impl Binding for ListDocumentClassifierModelsOptions {
    type Response = crate::model::DocumentClassifierModels;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}/models",
            enc(self.project_id()),
            enc(self.classifier_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "listDocumentClassifierModels")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct CreateDocumentClassifierModelBody<'a> {
    name: &'a str,
    description: Option<&'a str>,
    learning_rate: Option<f64>,
    l1_regularization_strengths: Option<&'a [f64]>,
    l2_regularization_strengths: Option<&'a [f64]>,
    training_max_steps: Option<i64>,
    improvement_ratio: Option<f64>,
}

impl Binding for CreateDocumentClassifierModelOptions {
    type Response = crate::model::DocumentClassifierModel;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}/models",
            enc(self.project_id()),
            enc(self.classifier_id()),
        );
        let body = CreateDocumentClassifierModelBody {
            name: self.name(),
            description: self.description(),
            learning_rate: self.learning_rate(),
            l1_regularization_strengths: self.l1_regularization_strengths(),
            l2_regularization_strengths: self.l2_regularization_strengths(),
            training_max_steps: self.training_max_steps(),
            improvement_ratio: self.improvement_ratio(),
        };
        HttpRequest::new(Method::POST, config, path, "createDocumentClassifierModel")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for GetDocumentClassifierModelOptions {
    type Response = crate::model::DocumentClassifierModel;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}/models/{}",
            enc(self.project_id()),
            enc(self.classifier_id()),
            enc(self.model_id()),
        );
        let request = HttpRequest::new(Method::GET, config, path, "getDocumentClassifierModel")?
            .accept_json();
        Ok(request)
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct UpdateDocumentClassifierModelBody<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
}

impl Binding for UpdateDocumentClassifierModelOptions {
    type Response = crate::model::DocumentClassifierModel;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}/models/{}",
            enc(self.project_id()),
            enc(self.classifier_id()),
            enc(self.model_id()),
        );
        let body = UpdateDocumentClassifierModelBody {
            name: self.name(),
            description: self.description(),
        };
        HttpRequest::new(Method::POST, config, path, "updateDocumentClassifierModel")?
            .accept_json()
            .json(&body)
    }
}

impl Binding for DeleteDocumentClassifierModelOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!(
            "/v2/projects/{}/document_classifiers/{}/models/{}",
            enc(self.project_id()),
            enc(self.classifier_id()),
            enc(self.model_id()),
        );
        HttpRequest::new(Method::DELETE, config, path, "deleteDocumentClassifierModel")
    }
}

impl Binding for DeleteUserDataOptions {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = "/v2/user_data".to_string();
        let request = HttpRequest::new(Method::DELETE, config, path, "deleteUserData")?
            .query("customer_id", &self.customer_id());
        Ok(request)
    }
}
