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

//! The request and response types for the Discovery v2 API.
//!
//! All fields are optional: the service omits fields that do not apply, and
//! the client library omits unset fields when it sends a request. Fields
//! with a fixed set of values are plain strings, the known values are listed
//! in a module named after the type (for example
//! [document_details::status]), and the service may return other values.
//!
//! Types used in requests provide `new()` and `set_*` functions to build
//! them.
//!
//! # Example
//! ```
//! # use discovery_v2::model::{DocumentDetails, document_details};
//! let details: DocumentDetails = serde_json::from_value(serde_json::json!({
//!     "document_id": "d1",
//!     "status": "available",
//!     "a_field_added_later": true,
//! }))?;
//! assert_eq!(details.status.as_deref(), Some(document_details::status::AVAILABLE));
//! assert_eq!(details.filename, None);
//! # anyhow::Result::<()>::Ok(())
//! ```

mod aggregation;
pub use aggregation::*;

/// A list of projects in this instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ListProjectsResponse {
    /// An array of project details.
    pub projects: Option<Vec<ProjectListDetails>>,
}

/// Details about a specific project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ProjectListDetails {
    /// The unique identifier of this project.
    pub project_id: Option<String>,

    /// The human readable name of this project.
    pub name: Option<String>,

    /// The type of project.
    ///
    /// See [project_list_details::r#type] for the known values.
    pub r#type: Option<String>,

    /// Relevancy training status information for this project.
    pub relevancy_training_status: Option<ProjectListDetailsRelevancyTrainingStatus>,

    /// The number of collections configured in this project.
    pub collection_count: Option<i64>,
}

/// Defines additional types related to [ProjectListDetails].
pub mod project_list_details {
    /// Known values for [type][super::ProjectListDetails::r#type].
    ///
    /// The service may return values not listed here.
    pub mod r#type {
        pub const INTELLIGENT_DOCUMENT_PROCESSING: &str = "intelligent_document_processing";
        pub const DOCUMENT_RETRIEVAL: &str = "document_retrieval";
        pub const CONVERSATIONAL_SEARCH: &str = "conversational_search";
        pub const CONTENT_MINING: &str = "content_mining";
        pub const CONTENT_INTELLIGENCE: &str = "content_intelligence";
        pub const OTHER: &str = "other";
    }
}

/// Detailed information about the specified project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ProjectDetails {
    /// The unique identifier of this project.
    pub project_id: Option<String>,

    /// The human readable name of this project.
    pub name: Option<String>,

    /// The type of project.
    ///
    /// The `content_intelligence` type is a *Document Retrieval for Contracts*
    /// project and the `other` type is a *Custom* project.
    pub r#type: Option<String>,

    pub relevancy_training_status: Option<ProjectListDetailsRelevancyTrainingStatus>,

    /// The number of collections configured in this project.
    pub collection_count: Option<i64>,

    /// Default query parameters for this project.
    pub default_query_parameters: Option<DefaultQueryParams>,
}

/// Defines additional types related to [ProjectDetails].
pub mod project_details {
    /// Known values for [type][super::ProjectDetails::r#type].
    ///
    /// The service may return values not listed here.
    pub mod r#type {
        pub const INTELLIGENT_DOCUMENT_PROCESSING: &str = "intelligent_document_processing";
        pub const DOCUMENT_RETRIEVAL: &str = "document_retrieval";
        pub const CONVERSATIONAL_SEARCH: &str = "conversational_search";
        pub const CONTENT_MINING: &str = "content_mining";
        pub const CONTENT_INTELLIGENCE: &str = "content_intelligence";
        pub const OTHER: &str = "other";
    }
}

/// Relevancy training status information for this project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ProjectListDetailsRelevancyTrainingStatus {
    /// When the training data was updated.
    pub data_updated: Option<String>,

    /// The total number of examples.
    pub total_examples: Option<i64>,

    pub sufficient_label_diversity: Option<bool>,

    /// When `true`, relevancy training is in progress.
    pub processing: Option<bool>,

    pub minimum_examples_added: Option<bool>,

    /// The time that the most recent successful training occurred.
    pub successfully_trained: Option<String>,

    /// When `true`, relevancy training is available when querying collections in the project.
    pub available: Option<bool>,

    /// The number of notices generated during the relevancy training.
    pub notices: Option<i64>,

    pub minimum_queries_added: Option<bool>,
}

/// Default query parameters for this project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DefaultQueryParams {
    /// An array of collection identifiers to query. If empty or omitted all
    /// collections in the project are queried.
    pub collection_ids: Option<Vec<String>>,

    /// Default settings configuration for passage search options.
    pub passages: Option<DefaultQueryParamsPassages>,

    /// Default project query settings for table results.
    pub table_results: Option<DefaultQueryParamsTableResults>,

    /// A string representing the default aggregation query for the project.
    pub aggregation: Option<String>,

    pub suggested_refinements: Option<DefaultQueryParamsSuggestedRefinements>,

    /// When `true`, a spelling suggestions for the query are returned by default.
    pub spelling_suggestions: Option<bool>,

    /// When `true`, highlights for the query are returned by default.
    pub highlight: Option<bool>,

    /// The number of document results returned by default.
    pub count: Option<i64>,

    /// A comma separated list of document fields to sort results by default.
    pub sort: Option<String>,

    /// An array of field names to return in document results if present by default.
    pub r#return: Option<Vec<String>>,
}

impl DefaultQueryParams {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [collection_ids][DefaultQueryParams::collection_ids].
    pub fn set_collection_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.collection_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [passages][DefaultQueryParams::passages].
    pub fn set_passages<T: Into<DefaultQueryParamsPassages>>(mut self, v: T) -> Self {
        self.passages = Some(v.into());
        self
    }

    /// Sets or clears the value of [passages][DefaultQueryParams::passages].
    pub fn set_or_clear_passages<T: Into<DefaultQueryParamsPassages>>(mut self, v: Option<T>) -> Self {
        self.passages = v.map(Into::into);
        self
    }

    /// Sets the value of [table_results][DefaultQueryParams::table_results].
    pub fn set_table_results<T: Into<DefaultQueryParamsTableResults>>(mut self, v: T) -> Self {
        self.table_results = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_results][DefaultQueryParams::table_results].
    pub fn set_or_clear_table_results<T: Into<DefaultQueryParamsTableResults>>(mut self, v: Option<T>) -> Self {
        self.table_results = v.map(Into::into);
        self
    }

    /// Sets the value of [aggregation][DefaultQueryParams::aggregation].
    pub fn set_aggregation<T: Into<String>>(mut self, v: T) -> Self {
        self.aggregation = Some(v.into());
        self
    }

    /// Sets the value of [suggested_refinements][DefaultQueryParams::suggested_refinements].
    pub fn set_suggested_refinements<T: Into<DefaultQueryParamsSuggestedRefinements>>(mut self, v: T) -> Self {
        self.suggested_refinements = Some(v.into());
        self
    }

    /// Sets or clears the value of [suggested_refinements][DefaultQueryParams::suggested_refinements].
    pub fn set_or_clear_suggested_refinements<T: Into<DefaultQueryParamsSuggestedRefinements>>(mut self, v: Option<T>) -> Self {
        self.suggested_refinements = v.map(Into::into);
        self
    }

    /// Sets the value of [spelling_suggestions][DefaultQueryParams::spelling_suggestions].
    pub fn set_spelling_suggestions<T: Into<bool>>(mut self, v: T) -> Self {
        self.spelling_suggestions = Some(v.into());
        self
    }

    /// Sets the value of [highlight][DefaultQueryParams::highlight].
    pub fn set_highlight<T: Into<bool>>(mut self, v: T) -> Self {
        self.highlight = Some(v.into());
        self
    }

    /// Sets the value of [count][DefaultQueryParams::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets the value of [sort][DefaultQueryParams::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [return][DefaultQueryParams::r#return].
    pub fn set_return<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.r#return = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Default settings configuration for passage search options.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DefaultQueryParamsPassages {
    /// When `true`, a passage search is performed by default.
    pub enabled: Option<bool>,

    /// The number of passages to return.
    pub count: Option<i64>,

    /// An array of field names to perform the passage search on.
    pub fields: Option<Vec<String>>,

    /// The approximate number of characters that each returned passage will contain.
    pub characters: Option<i64>,

    /// When `true` the number of passages that can be returned from a single document is restricted to the `max_per_document` value.
    pub per_document: Option<bool>,

    /// The default maximum number of passages that can be taken from a single document.
    pub max_per_document: Option<i64>,
}

impl DefaultQueryParamsPassages {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][DefaultQueryParamsPassages::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [count][DefaultQueryParamsPassages::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets the value of [fields][DefaultQueryParamsPassages::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [characters][DefaultQueryParamsPassages::characters].
    pub fn set_characters<T: Into<i64>>(mut self, v: T) -> Self {
        self.characters = Some(v.into());
        self
    }

    /// Sets the value of [per_document][DefaultQueryParamsPassages::per_document].
    pub fn set_per_document<T: Into<bool>>(mut self, v: T) -> Self {
        self.per_document = Some(v.into());
        self
    }

    /// Sets the value of [max_per_document][DefaultQueryParamsPassages::max_per_document].
    pub fn set_max_per_document<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_per_document = Some(v.into());
        self
    }
}

/// Default project query settings for table results.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DefaultQueryParamsTableResults {
    /// When `true`, a table results for the query are returned by default.
    pub enabled: Option<bool>,

    /// The number of table results to return by default.
    pub count: Option<i64>,

    /// The number of table results to include in each result document.
    pub per_document: Option<i64>,
}

impl DefaultQueryParamsTableResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][DefaultQueryParamsTableResults::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [count][DefaultQueryParamsTableResults::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets the value of [per_document][DefaultQueryParamsTableResults::per_document].
    pub fn set_per_document<T: Into<i64>>(mut self, v: T) -> Self {
        self.per_document = Some(v.into());
        self
    }
}

/// Object containing suggested refinement settings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DefaultQueryParamsSuggestedRefinements {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

impl DefaultQueryParamsSuggestedRefinements {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][DefaultQueryParamsSuggestedRefinements::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [count][DefaultQueryParamsSuggestedRefinements::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }
}

/// The list of fetched fields.
///
/// The fields are returned using a fully qualified name format, however, the
/// format differs slightly from that used by the query operations.
///
/// - Fields which contain nested objects are assigned a type of `nested`.
/// - Fields which belong to a nested object are prefixed with `.properties`
///   (for example, `warnings.properties.severity` means that the `warnings`
///   object has a property called `severity`).
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ListFieldsResponse {
    /// An array containing information about each field in the collections.
    pub fields: Option<Vec<Field>>,
}

/// Object containing field details.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Field {
    /// The name of the field.
    pub field: Option<String>,

    /// The type of the field.
    pub r#type: Option<String>,

    /// The collection Id of the collection where the field was found.
    pub collection_id: Option<String>,
}

/// Defines additional types related to [Field].
pub mod field {
    /// Known values for [type][super::Field::r#type].
    ///
    /// The service may return values not listed here.
    pub mod r#type {
        pub const NESTED: &str = "nested";
        pub const STRING: &str = "string";
        pub const DATE: &str = "date";
        pub const LONG: &str = "long";
        pub const INTEGER: &str = "integer";
        pub const SHORT: &str = "short";
        pub const BYTE: &str = "byte";
        pub const DOUBLE: &str = "double";
        pub const FLOAT: &str = "float";
        pub const BOOLEAN: &str = "boolean";
        pub const BINARY: &str = "binary";
    }
}

/// Response object containing an array of collection details.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ListCollectionsResponse {
    /// An array containing information about each collection in the project.
    pub collections: Option<Vec<Collection>>,
}

/// A collection for storing documents.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Collection {
    /// The unique identifier of the collection.
    pub collection_id: Option<String>,

    /// The name of the collection.
    pub name: Option<String>,
}

/// A collection for storing documents.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CollectionDetails {
    /// The unique identifier of the collection.
    pub collection_id: Option<String>,

    /// The name of the collection.
    pub name: Option<String>,

    /// A description of the collection.
    pub description: Option<String>,

    /// The date that the collection was created.
    pub created: Option<String>,

    /// The language of the collection. For a list of supported languages, see
    /// the product documentation.
    pub language: Option<String>,

    /// If set to `true`, optical character recognition (OCR) is enabled.
    pub ocr_enabled: Option<bool>,

    /// An array of enrichments that are applied to this collection.
    pub enrichments: Option<Vec<CollectionEnrichment>>,

    pub smart_document_understanding: Option<CollectionDetailsSmartDocumentUnderstanding>,
}

/// An object describing an enrichment for a collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CollectionEnrichment {
    /// The unique identifier of this enrichment.
    pub enrichment_id: Option<String>,

    /// An array of field names that the enrichment is applied to.
    ///
    /// If you apply an enrichment to a field from a JSON file, the data is
    /// converted to an array automatically, even if the field contains a single
    /// value.
    pub fields: Option<Vec<String>>,
}

impl CollectionEnrichment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrichment_id][CollectionEnrichment::enrichment_id].
    pub fn set_enrichment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.enrichment_id = Some(v.into());
        self
    }

    /// Sets the value of [fields][CollectionEnrichment::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// An object that describes the Smart Document Understanding model for a collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CollectionDetailsSmartDocumentUnderstanding {
    /// When `true`, smart document understanding conversion is enabled for the collection.
    pub enabled: Option<bool>,

    /// Specifies the type of Smart Document Understanding (SDU) model that is
    /// enabled for the collection.
    pub model: Option<String>,
}

impl CollectionDetailsSmartDocumentUnderstanding {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][CollectionDetailsSmartDocumentUnderstanding::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [model][CollectionDetailsSmartDocumentUnderstanding::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = Some(v.into());
        self
    }
}

/// Defines additional types related to [CollectionDetailsSmartDocumentUnderstanding].
pub mod collection_details_smart_document_understanding {
    /// Known values for [model][super::CollectionDetailsSmartDocumentUnderstanding::model].
    ///
    /// The service may return values not listed here.
    pub mod model {
        pub const CUSTOM: &str = "custom";
        pub const PRE_TRAINED: &str = "pre_trained";
        pub const TEXT_EXTRACTION: &str = "text_extraction";
    }
}

/// A response that contains the documents and aggregations for the query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryResponse {
    /// The number of matching results for the query. Results that match due to
    /// a curation only are not counted in the total.
    pub matching_results: Option<i64>,

    /// Array of document results for the query.
    pub results: Option<Vec<QueryResult>>,

    /// Array of aggregations for the query.
    pub aggregations: Option<Vec<QueryAggregation>>,

    /// An object containing retrieval type information.
    pub retrieval_details: Option<RetrievalDetails>,

    /// Suggested correction to the submitted `natural_language_query` value.
    pub suggested_query: Option<String>,

    pub suggested_refinements: Option<Vec<QuerySuggestedRefinement>>,

    /// Array of table results.
    pub table_results: Option<Vec<QueryTableResult>>,

    /// Passages that best match the query from across all of the collections in the project.
    pub passages: Option<Vec<QueryResponsePassage>>,
}

/// Result document for the specified query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryResult {
    /// The unique identifier of the document.
    pub document_id: Option<String>,

    /// Metadata of the document.
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// Metadata of a query result.
    pub result_metadata: Option<QueryResultMetadata>,

    /// Passages from the document that best matches the query.
    pub document_passages: Option<Vec<QueryResultPassage>>,

    /// The document fields returned by the query.
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Metadata of a query result.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryResultMetadata {
    /// The document retrieval source that produced this search result.
    pub document_retrieval_source: Option<String>,

    /// The collection id associated with this training data set.
    pub collection_id: Option<String>,

    /// The confidence score for the given result. Calculated based on how
    /// relevant the result is estimated to be. The score can range from `0.0` to
    /// `1.0`.
    pub confidence: Option<f64>,
}

/// Defines additional types related to [QueryResultMetadata].
pub mod query_result_metadata {
    /// Known values for [document_retrieval_source][super::QueryResultMetadata::document_retrieval_source].
    ///
    /// The service may return values not listed here.
    pub mod document_retrieval_source {
        pub const SEARCH: &str = "search";
        pub const CURATION: &str = "curation";
    }
}

/// A passage query result.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryResultPassage {
    /// The content of the extracted passage.
    pub passage_text: Option<String>,

    /// The position of the first character of the extracted passage in the originating field.
    pub start_offset: Option<i64>,

    /// The position after the last character of the extracted passage in the originating field.
    pub end_offset: Option<i64>,

    /// The label of the field from which the passage has been extracted.
    pub field: Option<String>,

    /// An array of extracted answers to the specified query.
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

/// Object that contains a potential answer to the specified query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ResultPassageAnswer {
    /// Answer text for the specified query as identified by Discovery.
    pub answer_text: Option<String>,

    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,

    /// An estimate of the probability that the answer is relevant.
    pub confidence: Option<f64>,
}

/// An object containing retrieval type information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct RetrievalDetails {
    /// Identifies the document retrieval strategy used for this query.
    pub document_retrieval_strategy: Option<String>,
}

/// Defines additional types related to [RetrievalDetails].
pub mod retrieval_details {
    /// Known values for [document_retrieval_strategy][super::RetrievalDetails::document_retrieval_strategy].
    ///
    /// The service may return values not listed here.
    pub mod document_retrieval_strategy {
        pub const UNTRAINED: &str = "untrained";
        pub const RELEVANCY_TRAINING: &str = "relevancy_training";
    }
}

/// A suggested additional query term or terms user to filter results.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QuerySuggestedRefinement {
    /// The text used to filter.
    pub text: Option<String>,
}

/// A passage query response.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryResponsePassage {
    /// The content of the extracted passage.
    pub passage_text: Option<String>,

    /// The confidence score of the passage's analysis.
    pub passage_score: Option<f64>,

    /// The unique identifier of the ingested document.
    pub document_id: Option<String>,

    /// The unique identifier of the collection.
    pub collection_id: Option<String>,

    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,

    /// The label of the field from which the passage has been extracted.
    pub field: Option<String>,

    pub answers: Option<Vec<ResultPassageAnswer>>,
}

/// A tables whose content or context match a search query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTableResult {
    /// The identifier for the retrieved table.
    pub table_id: Option<String>,

    /// The identifier of the document the table was retrieved from.
    pub source_document_id: Option<String>,

    /// The identifier of the collection the table was retrieved from.
    pub collection_id: Option<String>,

    /// HTML snippet of the table info.
    pub table_html: Option<String>,

    /// The offset of the table html snippet in the original document html.
    pub table_html_offset: Option<i64>,

    /// Full table object retrieved from Table Understanding Enrichment.
    pub table: Option<TableResultTable>,
}

/// Full table object retrieved from Table Understanding Enrichment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableResultTable {
    pub location: Option<TableElementLocation>,

    /// The textual contents of the current table from the input document without associated markup content.
    pub text: Option<String>,

    pub section_title: Option<TableTextLocation>,
    pub title: Option<TableTextLocation>,

    /// An array of table-level cells that apply as headers to all the other cells in the current table.
    pub table_headers: Option<Vec<TableHeaders>>,

    /// An array of row-level cells, each applicable as a header to other cells in the same row as itself.
    pub row_headers: Option<Vec<TableRowHeaders>>,

    /// An array of column-level cells, each applicable as a header to other cells in the same column as itself.
    pub column_headers: Option<Vec<TableColumnHeaders>>,

    /// An array of key-value pairs identified in the current table.
    pub key_value_pairs: Option<Vec<TableKeyValuePairs>>,

    /// An array of cells that are neither table header nor column header nor row header cells.
    pub body_cells: Option<Vec<TableBodyCells>>,

    /// An array of lists of textual entries across the document related to the current table being parsed.
    pub contexts: Option<Vec<TableTextLocation>>,
}

/// The numeric location of the identified element in the document, represented with two integers labeled `begin` and `end`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableElementLocation {
    /// The element's `begin` index.
    pub begin: Option<i64>,

    /// The element's `end` index.
    pub end: Option<i64>,
}

/// Text and associated location within a table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableTextLocation {
    pub text: Option<String>,
    pub location: Option<TableElementLocation>,
}

/// The contents of the current table's header.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableHeaders {
    /// The unique ID of the cell in the current table.
    pub cell_id: Option<String>,

    /// The location of the table header cell in the current table as defined by
    /// its `begin` and `end` offsets, respectively, in the input document.
    pub location: Option<serde_json::Map<String, serde_json::Value>>,

    /// The textual contents of the cell from the input document without associated markup content.
    pub text: Option<String>,

    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

/// Row-level cells, each applicable as a header to other cells in the same row as itself, of the current table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableRowHeaders {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,

    /// If you provide customization input, the normalized version of the cell text. Otherwise, this is the same as `text`.
    pub text_normalized: Option<String>,

    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

/// Column-level cells, each applicable as a header to other cells in the same column as itself, of the current table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableColumnHeaders {
    pub cell_id: Option<String>,
    pub location: Option<serde_json::Map<String, serde_json::Value>>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
}

/// Key-value pairs detected across cell boundaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableKeyValuePairs {
    pub key: Option<TableCellKey>,

    /// A list of values in a key-value pair.
    pub value: Option<Vec<TableCellValues>>,
}

/// A key in a key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableCellKey {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
}

/// A value in a key-value pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableCellValues {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
}

/// Cells that are not table header, column header, or row header cells.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableBodyCells {
    pub cell_id: Option<String>,
    pub location: Option<TableElementLocation>,
    pub text: Option<String>,
    pub row_index_begin: Option<i64>,
    pub row_index_end: Option<i64>,
    pub column_index_begin: Option<i64>,
    pub column_index_end: Option<i64>,
    pub row_header_ids: Option<Vec<TableRowHeaderIds>>,
    pub row_header_texts: Option<Vec<TableRowHeaderTexts>>,
    pub row_header_texts_normalized: Option<Vec<TableRowHeaderTextsNormalized>>,
    pub column_header_ids: Option<Vec<TableColumnHeaderIds>>,
    pub column_header_texts: Option<Vec<TableColumnHeaderTexts>>,
    pub column_header_texts_normalized: Option<Vec<TableColumnHeaderTextsNormalized>>,
    pub attributes: Option<Vec<DocumentAttribute>>,
}

/// An array of values, each being the `id` value of a row header that is applicable to the current cell.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableRowHeaderIds {
    pub id: Option<String>,
}

/// An array of values, each being the `text` value of a row header that is applicable to the current cell.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableRowHeaderTexts {
    pub text: Option<String>,
}

/// If you provide customization input, the normalized version of the row header texts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableRowHeaderTextsNormalized {
    pub text_normalized: Option<String>,
}

/// An array of values, each being the `id` value of a column header that is applicable to the current cell.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableColumnHeaderIds {
    pub id: Option<String>,
}

/// An array of values, each being the `text` value of a column header that is applicable to the current cell.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableColumnHeaderTexts {
    pub text: Option<String>,
}

/// If you provide customization input, the normalized version of the column header texts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TableColumnHeaderTextsNormalized {
    pub text_normalized: Option<String>,
}

/// List of document attributes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentAttribute {
    /// The type of attribute.
    pub r#type: Option<String>,

    /// The text associated with the attribute.
    pub text: Option<String>,

    pub location: Option<TableElementLocation>,
}

/// Configuration for table retrieval.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryLargeTableResults {
    /// Whether to enable table retrieval.
    pub enabled: Option<bool>,

    /// Maximum number of tables to return.
    pub count: Option<i64>,
}

impl QueryLargeTableResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][QueryLargeTableResults::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [count][QueryLargeTableResults::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }
}

/// Configuration for suggested refinements.
///
/// Suggested refinements are available only with Premium plans.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryLargeSuggestedRefinements {
    /// Whether to perform suggested refinements.
    pub enabled: Option<bool>,

    /// Maximum number of suggested refinements texts to be returned. The maximum is `100`.
    pub count: Option<i64>,
}

impl QueryLargeSuggestedRefinements {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][QueryLargeSuggestedRefinements::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [count][QueryLargeSuggestedRefinements::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }
}

/// Configuration for passage retrieval.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryLargePassages {
    /// A passages query that returns the most relevant passages from the results.
    pub enabled: Option<bool>,

    /// If `true`, ranks the documents by document quality, and then returns the
    /// highest-ranked passages per document in a `document_passages` field for
    /// each document entry in the results list of the response.
    pub per_document: Option<bool>,

    /// The maximum number of passages to return per document in the result.
    pub max_per_document: Option<i64>,

    /// A list of fields to extract passages from.
    pub fields: Option<Vec<String>>,

    /// The maximum number of passages to return. Ignored if `passages.per_document` is `true`.
    pub count: Option<i64>,

    /// The approximate number of characters that any one passage will have.
    pub characters: Option<i64>,

    /// When true, `answer` objects are returned as part of each passage in the query results.
    pub find_answers: Option<bool>,

    /// The number of `answer` objects to return per passage if the `find_answers` parameter is specified as `true`.
    pub max_answers_per_passage: Option<i64>,
}

impl QueryLargePassages {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][QueryLargePassages::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [per_document][QueryLargePassages::per_document].
    pub fn set_per_document<T: Into<bool>>(mut self, v: T) -> Self {
        self.per_document = Some(v.into());
        self
    }

    /// Sets the value of [max_per_document][QueryLargePassages::max_per_document].
    pub fn set_max_per_document<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_per_document = Some(v.into());
        self
    }

    /// Sets the value of [fields][QueryLargePassages::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [count][QueryLargePassages::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets the value of [characters][QueryLargePassages::characters].
    pub fn set_characters<T: Into<i64>>(mut self, v: T) -> Self {
        self.characters = Some(v.into());
        self
    }

    /// Sets the value of [find_answers][QueryLargePassages::find_answers].
    pub fn set_find_answers<T: Into<bool>>(mut self, v: T) -> Self {
        self.find_answers = Some(v.into());
        self
    }

    /// Sets the value of [max_answers_per_passage][QueryLargePassages::max_answers_per_passage].
    pub fn set_max_answers_per_passage<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_answers_per_passage = Some(v.into());
        self
    }
}

/// Finds results from documents that are similar to documents of interest.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryLargeSimilar {
    /// When `true`, includes documents in the query results that are similar to
    /// documents you specify.
    pub enabled: Option<bool>,

    /// The list of documents of interest. Required if `enabled` is `true`.
    pub document_ids: Option<Vec<String>>,

    /// Looks for similarities in the specified subset of fields in the documents.
    /// If not specified, all of the document fields are used.
    pub fields: Option<Vec<String>>,
}

impl QueryLargeSimilar {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enabled][QueryLargeSimilar::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [document_ids][QueryLargeSimilar::document_ids].
    pub fn set_document_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.document_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [fields][QueryLargeSimilar::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// An object that contains an array of autocompletion suggestions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Completions {
    /// Array of autocomplete suggestion based on the provided prefix.
    pub completions: Option<Vec<String>>,
}

/// Object that contains notice query results.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryNoticesResponse {
    /// The number of matching results.
    pub matching_results: Option<i64>,

    /// Array of document results that match the query.
    pub notices: Option<Vec<Notice>>,
}

/// A notice produced for the collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Notice {
    /// Identifies the notice. Many notices might have the same ID. This field
    /// exists so that user applications can programmatically identify a notice
    /// and take automatic corrective action.
    pub notice_id: Option<String>,

    /// The creation date of the collection in the format yyyy-MM-dd'T'HH:mm:ss.SSS'Z'.
    pub created: Option<String>,

    /// Unique identifier of the document.
    pub document_id: Option<String>,

    /// Unique identifier of the collection.
    pub collection_id: Option<String>,

    /// Unique identifier of the query used for relevance training.
    pub query_id: Option<String>,

    /// Severity level of the notice.
    pub severity: Option<String>,

    /// Ingestion or training step in which the notice occurred.
    pub step: Option<String>,

    /// The description of the notice.
    pub description: Option<String>,
}

/// Defines additional types related to [Notice].
pub mod notice {
    /// Known values for [severity][super::Notice::severity].
    ///
    /// The service may return values not listed here.
    pub mod severity {
        pub const WARNING: &str = "warning";
        pub const ERROR: &str = "error";
    }
}

/// The default component settings for this project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ComponentSettingsResponse {
    /// Fields shown in the results section of the UI.
    pub fields_shown: Option<ComponentSettingsFieldsShown>,

    /// Whether or not autocomplete is enabled.
    pub autocomplete: Option<bool>,

    /// Whether or not structured search is enabled.
    pub structured_search: Option<bool>,

    /// Number of results shown per page.
    pub results_per_page: Option<i64>,

    /// A list of component setting aggregations.
    pub aggregations: Option<Vec<ComponentSettingsAggregation>>,
}

/// Fields shown in the results section of the UI.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ComponentSettingsFieldsShown {
    pub body: Option<ComponentSettingsFieldsShownBody>,
    pub title: Option<ComponentSettingsFieldsShownTitle>,
}

/// Body label.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ComponentSettingsFieldsShownBody {
    /// Use the whole passage as the body.
    pub use_passage: Option<bool>,

    /// Use a specific field as the title.
    pub field: Option<String>,
}

/// Title label.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ComponentSettingsFieldsShownTitle {
    /// Use a specific field as the title.
    pub field: Option<String>,
}

/// Display settings for aggregations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ComponentSettingsAggregation {
    /// Identifier used to map aggregation settings to aggregation configuration.
    pub name: Option<String>,

    /// User-friendly alias for the aggregation.
    pub label: Option<String>,

    /// Whether users are allowed to select more than one of the aggregation terms.
    pub multiple_selections_allowed: Option<bool>,

    /// Type of visualization to use when rendering the aggregation.
    pub visualization_type: Option<String>,
}

/// Defines additional types related to [ComponentSettingsAggregation].
pub mod component_settings_aggregation {
    /// Known values for [visualization_type][super::ComponentSettingsAggregation::visualization_type].
    ///
    /// The service may return values not listed here.
    pub mod visualization_type {
        pub const AUTO: &str = "auto";
        pub const FACET_TABLE: &str = "facet_table";
        pub const WORD_CLOUD: &str = "word_cloud";
        pub const MAP: &str = "map";
    }
}

/// Information returned after an uploaded document is accepted.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentAccepted {
    /// The unique identifier of the ingested document.
    pub document_id: Option<String>,

    /// Status of the document in the ingestion process.
    pub status: Option<String>,
}

/// Defines additional types related to [DocumentAccepted].
pub mod document_accepted {
    /// Known values for [status][super::DocumentAccepted::status].
    ///
    /// The service may return values not listed here.
    pub mod status {
        pub const PROCESSING: &str = "processing";
        pub const PENDING: &str = "pending";
    }
}

/// Information returned when a document is deleted.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DeleteDocumentResponse {
    /// The unique identifier of the document.
    pub document_id: Option<String>,

    /// Status of the document. A deleted document has the status deleted.
    pub status: Option<String>,
}

/// Defines additional types related to [DeleteDocumentResponse].
pub mod delete_document_response {
    /// Known values for [status][super::DeleteDocumentResponse::status].
    ///
    /// The service may return values not listed here.
    pub mod status {
        pub const DELETED: &str = "deleted";
    }
}

/// Response object that contains an array of documents.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ListDocumentsResponse {
    /// The number of matching results for the document query.
    pub matching_results: Option<i64>,

    /// An array that lists the documents in a collection. Only the document ID of
    /// each document is returned in the list. You can use the get document
    /// operation to get more information about a document.
    pub documents: Option<Vec<DocumentDetails>>,
}

/// Information about a document.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentDetails {
    /// The unique identifier of the document.
    pub document_id: Option<String>,

    /// Date and time that the document is added to the collection.
    pub created: Option<String>,

    /// Date and time that the document is finished being processed and is indexed.
    pub updated: Option<String>,

    /// The status of the ingestion of the document.
    pub status: Option<String>,

    /// Array of JSON objects for notices, meaning warning or error messages, that
    /// are produced by the document ingestion process.
    pub notices: Option<Vec<Notice>>,

    pub children: Option<DocumentDetailsChildren>,

    /// Name of the original source file (if available).
    pub filename: Option<String>,

    /// The type of the original source file.
    pub file_type: Option<String>,

    /// The SHA-256 hash of the original source file. The hash is formatted as a hexadecimal string.
    pub sha256: Option<String>,
}

/// Defines additional types related to [DocumentDetails].
pub mod document_details {
    /// Known values for [status][super::DocumentDetails::status].
    ///
    /// The service may return values not listed here.
    pub mod status {
        pub const AVAILABLE: &str = "available";
        pub const FAILED: &str = "failed";
        pub const PENDING: &str = "pending";
        pub const PROCESSING: &str = "processing";
    }

    /// Known values for [file_type][super::DocumentDetails::file_type].
    ///
    /// The service may return values not listed here.
    pub mod file_type {
        pub const PDF: &str = "pdf";
        pub const HTML: &str = "html";
        pub const WORD: &str = "word";
        pub const JSON: &str = "json";
        pub const CSV: &str = "csv";
        pub const TEXT: &str = "text";
        pub const PNG: &str = "png";
    }
}

/// Information about the child documents that are generated from a single document during ingestion or other processing.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentDetailsChildren {
    /// Indicates whether the child documents have any notices.
    pub have_notices: Option<bool>,

    /// Number of child documents.
    pub count: Option<i64>,
}

/// An object that contains the converted document and any identified enrichments.
///
/// Root-level fields from the original file are returned also.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct AnalyzedDocument {
    /// Array of notices that are triggered when the files are processed.
    pub notices: Option<Vec<Notice>>,

    /// Result of the document analysis.
    pub result: Option<AnalyzedResult>,
}

/// Result of the document analysis.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct AnalyzedResult {
    /// Metadata that was specified with the request.
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// The converted document fields and the enrichments.
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Object specifying the training queries contained in the identified training set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TrainingQuerySet {
    /// Array of training queries. At least 50 queries are required for training to begin.
    pub queries: Option<Vec<TrainingQuery>>,
}

/// Object that contains training query details.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TrainingQuery {
    /// The query ID associated with the training query.
    pub query_id: Option<String>,

    /// The natural text query that is used as the training query.
    pub natural_language_query: Option<String>,

    /// The filter used on the collection before the `natural_language_query` is applied.
    pub filter: Option<String>,

    /// The date and time the query was created.
    pub created: Option<String>,

    /// The date and time the query was updated.
    pub updated: Option<String>,

    /// Array of training examples.
    pub examples: Option<Vec<TrainingExample>>,
}

/// Object that contains example response details for a training query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct TrainingExample {
    /// The document ID associated with this training example.
    pub document_id: Option<String>,

    /// The collection ID associated with this training example.
    pub collection_id: Option<String>,

    /// The relevance score of the training example. Scores range from `0` to `100`.
    pub relevance: Option<i64>,

    /// The date and time the example was created.
    pub created: Option<String>,

    /// The date and time the example was updated.
    pub updated: Option<String>,
}

impl TrainingExample {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [document_id][TrainingExample::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][TrainingExample::collection_id].
    pub fn set_collection_id<T: Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [relevance][TrainingExample::relevance].
    pub fn set_relevance<T: Into<i64>>(mut self, v: T) -> Self {
        self.relevance = Some(v.into());
        self
    }

    /// Sets the value of [created][TrainingExample::created].
    pub fn set_created<T: Into<String>>(mut self, v: T) -> Self {
        self.created = Some(v.into());
        self
    }

    /// Sets the value of [updated][TrainingExample::updated].
    pub fn set_updated<T: Into<String>>(mut self, v: T) -> Self {
        self.updated = Some(v.into());
        self
    }
}

/// An object that contains an array of enrichment definitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Enrichments {
    /// An array of enrichment definitions.
    pub enrichments: Option<Vec<Enrichment>>,
}

/// Information about a specific enrichment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Enrichment {
    /// The unique identifier of this enrichment.
    pub enrichment_id: Option<String>,

    /// The human readable name for this enrichment.
    pub name: Option<String>,

    /// The description of this enrichment.
    pub description: Option<String>,

    /// The type of this enrichment.
    pub r#type: Option<String>,

    /// An object that contains options for the current enrichment.
    pub options: Option<EnrichmentOptions>,
}

/// Defines additional types related to [Enrichment].
pub mod enrichment {
    /// Known values for [type][super::Enrichment::r#type].
    ///
    /// The service may return values not listed here.
    pub mod r#type {
        pub const PART_OF_SPEECH: &str = "part_of_speech";
        pub const SENTIMENT: &str = "sentiment";
        pub const NATURAL_LANGUAGE_UNDERSTANDING: &str = "natural_language_understanding";
        pub const DICTIONARY: &str = "dictionary";
        pub const REGULAR_EXPRESSION: &str = "regular_expression";
        pub const UIMA_ANNOTATOR: &str = "uima_annotator";
        pub const RULE_BASED: &str = "rule_based";
        pub const WATSON_KNOWLEDGE_STUDIO_MODEL: &str = "watson_knowledge_studio_model";
        pub const CLASSIFIER: &str = "classifier";
        pub const WEBHOOK: &str = "webhook";
        pub const SENTENCE_CLASSIFIER: &str = "sentence_classifier";
    }
}

/// An object that contains options for the current enrichment.
///
/// Starting with version `2020-08-30`, the enrichment options are not included
/// in responses from the list enrichments operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct EnrichmentOptions {
    /// An array of supported languages for this enrichment. Required when `type`
    /// is `dictionary`. Optional when `type` is `rule_based`. Not valid when
    /// creating any other type of enrichment.
    pub languages: Option<Vec<String>>,

    /// The name of the entity type. This value is used as the field name in the index.
    pub entity_type: Option<String>,

    /// The regular expression to apply for this enrichment.
    pub regular_expression: Option<String>,

    /// The name of the result document field that this enrichment creates.
    pub result_field: Option<String>,

    /// A unique identifier of the document classifier.
    pub classifier_id: Option<String>,

    /// A unique identifier of the document classifier model.
    pub model_id: Option<String>,

    /// Specifies a threshold. Only classes with evaluation confidence scores that
    /// are higher than the specified threshold are included in the output.
    pub confidence_threshold: Option<f64>,

    /// Evaluates only the classes that fall in the top set of results when ranked
    /// by confidence.
    pub top_k: Option<i64>,

    /// A URL that uses the SSL protocol (begins with https) for the webhook.
    pub url: Option<String>,

    /// The Discovery API version that allows to distinguish the schema.
    pub version: Option<String>,

    /// A private key can be included in the request to authenticate with the
    /// external service.
    pub secret: Option<String>,

    /// An array of headers to be included in the webhook request.
    pub headers: Option<Vec<WebhookHeader>>,

    /// Discovery calculates offsets of the text's location with this encoding type
    /// in documents.
    pub location_encoding: Option<String>,
}

impl EnrichmentOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [languages][EnrichmentOptions::languages].
    pub fn set_languages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.languages = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [entity_type][EnrichmentOptions::entity_type].
    pub fn set_entity_type<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_type = Some(v.into());
        self
    }

    /// Sets the value of [regular_expression][EnrichmentOptions::regular_expression].
    pub fn set_regular_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.regular_expression = Some(v.into());
        self
    }

    /// Sets the value of [result_field][EnrichmentOptions::result_field].
    pub fn set_result_field<T: Into<String>>(mut self, v: T) -> Self {
        self.result_field = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][EnrichmentOptions::classifier_id].
    pub fn set_classifier_id<T: Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Sets the value of [model_id][EnrichmentOptions::model_id].
    pub fn set_model_id<T: Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [confidence_threshold][EnrichmentOptions::confidence_threshold].
    pub fn set_confidence_threshold<T: Into<f64>>(mut self, v: T) -> Self {
        self.confidence_threshold = Some(v.into());
        self
    }

    /// Sets the value of [top_k][EnrichmentOptions::top_k].
    pub fn set_top_k<T: Into<i64>>(mut self, v: T) -> Self {
        self.top_k = Some(v.into());
        self
    }

    /// Sets the value of [url][EnrichmentOptions::url].
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Sets the value of [version][EnrichmentOptions::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [secret][EnrichmentOptions::secret].
    pub fn set_secret<T: Into<String>>(mut self, v: T) -> Self {
        self.secret = Some(v.into());
        self
    }

    /// Sets the value of [headers][EnrichmentOptions::headers].
    pub fn set_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WebhookHeader>,
    {
        self.headers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [location_encoding][EnrichmentOptions::location_encoding].
    pub fn set_location_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.location_encoding = Some(v.into());
        self
    }
}

/// An object that contains a header name and value for a webhook request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct WebhookHeader {
    /// The name of an HTTP header.
    pub name: Option<String>,

    /// The value of an HTTP header.
    pub value: Option<String>,
}

impl WebhookHeader {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][WebhookHeader::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [value][WebhookHeader::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// Information about a specific enrichment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateEnrichment {
    /// The human readable name for this enrichment.
    pub name: Option<String>,

    /// The description of this enrichment.
    pub description: Option<String>,

    /// The type of this enrichment.
    pub r#type: Option<String>,

    /// An object that contains options for the current enrichment.
    pub options: Option<EnrichmentOptions>,
}

impl CreateEnrichment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateEnrichment::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateEnrichment::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [type][CreateEnrichment::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [options][CreateEnrichment::options].
    pub fn set_options<T: Into<EnrichmentOptions>>(mut self, v: T) -> Self {
        self.options = Some(v.into());
        self
    }

    /// Sets or clears the value of [options][CreateEnrichment::options].
    pub fn set_or_clear_options<T: Into<EnrichmentOptions>>(mut self, v: Option<T>) -> Self {
        self.options = v.map(Into::into);
        self
    }
}

/// Defines additional types related to [CreateEnrichment].
pub mod create_enrichment {
    /// Known values for [type][super::CreateEnrichment::r#type].
    ///
    /// The service may return values not listed here.
    pub mod r#type {
        pub const CLASSIFIER: &str = "classifier";
        pub const DICTIONARY: &str = "dictionary";
        pub const REGULAR_EXPRESSION: &str = "regular_expression";
        pub const UIMA_ANNOTATOR: &str = "uima_annotator";
        pub const RULE_BASED: &str = "rule_based";
        pub const WATSON_KNOWLEDGE_STUDIO_MODEL: &str = "watson_knowledge_studio_model";
        pub const WEBHOOK: &str = "webhook";
        pub const SENTENCE_CLASSIFIER: &str = "sentence_classifier";
    }
}

/// An object that contains a list of document classifier definitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentClassifiers {
    /// An array of document classifier definitions.
    pub classifiers: Option<Vec<DocumentClassifier>>,
}

/// Information about a document classifier.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentClassifier {
    /// A unique identifier of the document classifier.
    pub classifier_id: Option<String>,

    /// A human-readable name of the document classifier.
    pub name: Option<String>,

    /// A description of the document classifier.
    pub description: Option<String>,

    /// The date that the document classifier was created.
    pub created: Option<String>,

    /// The language of the training data that is associated with the document classifier.
    pub language: Option<String>,

    /// An array of enrichments to apply to the data that is used to train and test the document classifier.
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,

    /// An array of fields that are used to train the document classifier.
    pub recognized_fields: Option<Vec<String>>,

    /// The name of the field from the training and test data that contains the
    /// classification labels.
    pub answer_field: Option<String>,

    /// Name of the CSV file with training data that is used to train the document classifier.
    pub training_data_file: Option<String>,

    /// Name of the CSV file with data that is used to test the document classifier.
    pub test_data_file: Option<String>,

    pub federated_classification: Option<ClassifierFederatedModel>,
}

/// An object that describes enrichments that are applied to the training and test data that is used by the document classifier.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentClassifierEnrichment {
    /// A unique identifier of the enrichment.
    pub enrichment_id: Option<String>,

    /// An array of field names where the enrichment is applied.
    pub fields: Option<Vec<String>>,
}

impl DocumentClassifierEnrichment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrichment_id][DocumentClassifierEnrichment::enrichment_id].
    pub fn set_enrichment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.enrichment_id = Some(v.into());
        self
    }

    /// Sets the value of [fields][DocumentClassifierEnrichment::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// An object with details for creating federated document classifier models.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ClassifierFederatedModel {
    /// Name of the field that contains the values from which multiple classifier
    /// models are defined.
    pub field: Option<String>,
}

impl ClassifierFederatedModel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field][ClassifierFederatedModel::field].
    pub fn set_field<T: Into<String>>(mut self, v: T) -> Self {
        self.field = Some(v.into());
        self
    }
}

/// An object that manages the settings and data that is required to train a document classification model.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateDocumentClassifier {
    /// A human-readable name of the document classifier.
    pub name: Option<String>,

    /// A description of the document classifier.
    pub description: Option<String>,

    /// The language of the training data that is associated with the document classifier.
    pub language: Option<String>,

    /// The name of the field from the training and test data that contains the classification labels.
    pub answer_field: Option<String>,

    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

impl CreateDocumentClassifier {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateDocumentClassifier::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateDocumentClassifier::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [language][CreateDocumentClassifier::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Sets the value of [answer_field][CreateDocumentClassifier::answer_field].
    pub fn set_answer_field<T: Into<String>>(mut self, v: T) -> Self {
        self.answer_field = Some(v.into());
        self
    }

    /// Sets the value of [enrichments][CreateDocumentClassifier::enrichments].
    pub fn set_enrichments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DocumentClassifierEnrichment>,
    {
        self.enrichments = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [federated_classification][CreateDocumentClassifier::federated_classification].
    pub fn set_federated_classification<T: Into<ClassifierFederatedModel>>(mut self, v: T) -> Self {
        self.federated_classification = Some(v.into());
        self
    }

    /// Sets or clears the value of [federated_classification][CreateDocumentClassifier::federated_classification].
    pub fn set_or_clear_federated_classification<T: Into<ClassifierFederatedModel>>(mut self, v: Option<T>) -> Self {
        self.federated_classification = v.map(Into::into);
        self
    }
}

/// An object that contains a new name or description for a document classifier, updated training data, or new or updated test data.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateDocumentClassifier {
    /// A new name for the classifier.
    pub name: Option<String>,

    /// A new description for the classifier.
    pub description: Option<String>,
}

impl UpdateDocumentClassifier {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][UpdateDocumentClassifier::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][UpdateDocumentClassifier::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// An object that contains a list of document classifier model definitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentClassifierModels {
    /// An array of document classifier model definitions.
    pub models: Option<Vec<DocumentClassifierModel>>,
}

/// Information about a document classifier model.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DocumentClassifierModel {
    /// A unique identifier of the document classifier model.
    pub model_id: Option<String>,

    /// A human-readable name of the document classifier model.
    pub name: Option<String>,

    /// A description of the document classifier model.
    pub description: Option<String>,

    /// The date that the document classifier model was created.
    pub created: Option<String>,

    /// The date that the document classifier model was last updated.
    pub updated: Option<String>,

    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,

    /// The status of the training run.
    pub status: Option<String>,

    pub evaluation: Option<ClassifierModelEvaluation>,

    /// A unique identifier of the enrichment that is generated by this document classifier model.
    pub enrichment_id: Option<String>,

    /// The date that the document classifier model was deployed.
    pub deployed_at: Option<String>,
}

/// Defines additional types related to [DocumentClassifierModel].
pub mod document_classifier_model {
    /// Known values for [status][super::DocumentClassifierModel::status].
    ///
    /// The service may return values not listed here.
    pub mod status {
        pub const TRAINING: &str = "training";
        pub const AVAILABLE: &str = "available";
        pub const FAILED: &str = "failed";
    }
}

/// An object that contains information about a trained document classifier model.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ClassifierModelEvaluation {
    pub micro_average: Option<ModelEvaluationMicroAverage>,
    pub macro_average: Option<ModelEvaluationMacroAverage>,

    /// An array of evaluation metrics, one set of metrics for each class, where
    /// the class is identified by its `name`.
    pub per_class: Option<Vec<PerClassModelEvaluation>>,
}

/// A micro-average aggregates the contributions of all classes to compute the average metric.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ModelEvaluationMicroAverage {
    /// A metric that measures how many of the overall documents are classified correctly.
    pub precision: Option<f64>,

    /// A metric that measures how often documents that should be classified into certain classes are classified into those classes.
    pub recall: Option<f64>,

    /// A metric that measures how well the model balances precision and recall.
    pub f1: Option<f64>,
}

/// A macro-average computes metric independently for each class and then takes the average.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ModelEvaluationMacroAverage {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

/// An object that measures the metrics from a training run for each classification label separately.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct PerClassModelEvaluation {
    /// Class name. Each class name is derived from a value in the answer field.
    pub name: Option<String>,

    /// A metric that measures how many of the overall documents are classified correctly.
    pub precision: Option<f64>,

    /// A metric that measures how often documents that should be classified into certain classes are classified into those classes.
    pub recall: Option<f64>,

    /// A metric that measures how well the model balances precision and recall.
    pub f1: Option<f64>,
}

