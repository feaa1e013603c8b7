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

//! Options for the query operations.
//!
//! Includes autocompletion, notices, and the component settings used by
//! tooling that renders query results.

use crate::Result;
use gax::validator;

/// The options for [query][crate::client::Discovery::query].
///
/// Search your data by submitting queries that are written in natural language
/// or formatted in the Discovery Query Language.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct QueryOptions {
    project_id: String,
    collection_ids: std::option::Option<std::vec::Vec<String>>,
    filter: std::option::Option<String>,
    query: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    aggregation: std::option::Option<String>,
    count: std::option::Option<i64>,
    return_fields: std::option::Option<std::vec::Vec<String>>,
    offset: std::option::Option<i64>,
    sort: std::option::Option<String>,
    highlight: std::option::Option<bool>,
    spelling_suggestions: std::option::Option<bool>,
    table_results: std::option::Option<crate::model::QueryLargeTableResults>,
    suggested_refinements: std::option::Option<crate::model::QueryLargeSuggestedRefinements>,
    passages: std::option::Option<crate::model::QueryLargePassages>,
    similar: std::option::Option<crate::model::QueryLargeSimilar>,
}

impl QueryOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> QueryOptionsBuilder {
        QueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_ids: self.collection_ids.clone(),
            filter: self.filter.clone(),
            query: self.query.clone(),
            natural_language_query: self.natural_language_query.clone(),
            aggregation: self.aggregation.clone(),
            count: self.count,
            return_fields: self.return_fields.clone(),
            offset: self.offset,
            sort: self.sort.clone(),
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
            table_results: self.table_results.clone(),
            suggested_refinements: self.suggested_refinements.clone(),
            passages: self.passages.clone(),
            similar: self.similar.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `collection_ids`.
    pub fn collection_ids(&self) -> Option<&[String]> {
        self.collection_ids.as_deref()
    }

    /// Returns the value of `filter`.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the value of `query`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the value of `natural_language_query`.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.natural_language_query.as_deref()
    }

    /// Returns the value of `aggregation`.
    pub fn aggregation(&self) -> Option<&str> {
        self.aggregation.as_deref()
    }

    /// Returns the value of `count`.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Returns the value of `return_fields`.
    pub fn return_fields(&self) -> Option<&[String]> {
        self.return_fields.as_deref()
    }

    /// Returns the value of `offset`.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Returns the value of `sort`.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Returns the value of `highlight`.
    pub fn highlight(&self) -> Option<bool> {
        self.highlight
    }

    /// Returns the value of `spelling_suggestions`.
    pub fn spelling_suggestions(&self) -> Option<bool> {
        self.spelling_suggestions
    }

    /// Returns the value of `table_results`.
    pub fn table_results(&self) -> Option<&crate::model::QueryLargeTableResults> {
        self.table_results.as_ref()
    }

    /// Returns the value of `suggested_refinements`.
    pub fn suggested_refinements(&self) -> Option<&crate::model::QueryLargeSuggestedRefinements> {
        self.suggested_refinements.as_ref()
    }

    /// Returns the value of `passages`.
    pub fn passages(&self) -> Option<&crate::model::QueryLargePassages> {
        self.passages.as_ref()
    }

    /// Returns the value of `similar`.
    pub fn similar(&self) -> Option<&crate::model::QueryLargeSimilar> {
        self.similar.as_ref()
    }
}

/// A builder for [QueryOptions].
#[derive(Clone, Debug, Default)]
pub struct QueryOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_ids: std::option::Option<std::vec::Vec<String>>,
    filter: std::option::Option<String>,
    query: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    aggregation: std::option::Option<String>,
    count: std::option::Option<i64>,
    return_fields: std::option::Option<std::vec::Vec<String>>,
    offset: std::option::Option<i64>,
    sort: std::option::Option<String>,
    highlight: std::option::Option<bool>,
    spelling_suggestions: std::option::Option<bool>,
    table_results: std::option::Option<crate::model::QueryLargeTableResults>,
    suggested_refinements: std::option::Option<crate::model::QueryLargeSuggestedRefinements>,
    passages: std::option::Option<crate::model::QueryLargePassages>,
    similar: std::option::Option<crate::model::QueryLargeSimilar>,
}

impl QueryOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][QueryOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_ids][QueryOptions::collection_ids].
    ///
    /// A comma-separated list of collection IDs to be queried against.
    pub fn set_collection_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.collection_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [collection_ids][QueryOptions::collection_ids].
    pub fn add_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_ids.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [filter][QueryOptions::filter].
    ///
    /// Searches for documents that match the Discovery Query Language criteria
    /// that is specified as input. Filter calls are cached and are faster than
    /// query calls because the results are not ordered by relevance.
    pub fn set_filter<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][QueryOptions::filter].
    pub fn set_or_clear_filter<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [query][QueryOptions::query].
    ///
    /// A query search that is written in the Discovery Query Language and returns
    /// all matching documents in your data set with full enrichments and full
    /// text, and with the most relevant documents listed first.
    pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets or clears the value of [query][QueryOptions::query].
    pub fn set_or_clear_query<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [natural_language_query][QueryOptions::natural_language_query].
    ///
    /// A natural language query that returns relevant documents by using training
    /// data and natural language understanding.
    pub fn set_natural_language_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.natural_language_query = Some(v.into());
        self
    }

    /// Sets or clears the value of [natural_language_query][QueryOptions::natural_language_query].
    pub fn set_or_clear_natural_language_query<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.natural_language_query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [aggregation][QueryOptions::aggregation].
    ///
    /// An aggregation search that returns an exact answer by combining query
    /// search with filters.
    pub fn set_aggregation<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.aggregation = Some(v.into());
        self
    }

    /// Sets or clears the value of [aggregation][QueryOptions::aggregation].
    pub fn set_or_clear_aggregation<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.aggregation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [count][QueryOptions::count].
    ///
    /// Number of results to return.
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][QueryOptions::count].
    pub fn set_or_clear_count<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [return_fields][QueryOptions::return_fields].
    ///
    /// A list of the fields in the document hierarchy to return.
    pub fn set_return_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.return_fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [return_fields][QueryOptions::return_fields].
    pub fn add_return_field<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.return_fields.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [offset][QueryOptions::offset].
    ///
    /// The number of query results to skip at the beginning.
    pub fn set_offset<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][QueryOptions::offset].
    pub fn set_or_clear_offset<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sort][QueryOptions::sort].
    ///
    /// A comma-separated list of fields in the document to sort on. You can
    /// optionally specify a sort direction by prefixing the field with `-` for
    /// descending or `+` for ascending.
    pub fn set_sort<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets or clears the value of [sort][QueryOptions::sort].
    pub fn set_or_clear_sort<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.sort = v.map(|x| x.into());
        self
    }

    /// Sets the value of [highlight][QueryOptions::highlight].
    ///
    /// When `true`, a highlight field is returned for each result that contains
    /// the fields that match the query.
    pub fn set_highlight<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.highlight = Some(v.into());
        self
    }

    /// Sets or clears the value of [highlight][QueryOptions::highlight].
    pub fn set_or_clear_highlight<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.highlight = v.map(|x| x.into());
        self
    }

    /// Sets the value of [spelling_suggestions][QueryOptions::spelling_suggestions].
    ///
    /// When `true` and the `natural_language_query` parameter is used, the query
    /// is checked for misspelled words, and suggested corrections are returned.
    pub fn set_spelling_suggestions<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.spelling_suggestions = Some(v.into());
        self
    }

    /// Sets or clears the value of [spelling_suggestions][QueryOptions::spelling_suggestions].
    pub fn set_or_clear_spelling_suggestions<T: std::convert::Into<bool>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.spelling_suggestions = v.map(|x| x.into());
        self
    }

    /// Sets the value of [table_results][QueryOptions::table_results].
    pub fn set_table_results<T: std::convert::Into<crate::model::QueryLargeTableResults>>(
        mut self,
        v: T,
    ) -> Self {
        self.table_results = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_results][QueryOptions::table_results].
    pub fn set_or_clear_table_results<T: std::convert::Into<crate::model::QueryLargeTableResults>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.table_results = v.map(|x| x.into());
        self
    }

    /// Sets the value of [suggested_refinements][QueryOptions::suggested_refinements].
    pub fn set_suggested_refinements<T: std::convert::Into<crate::model::QueryLargeSuggestedRefinements>>(
        mut self,
        v: T,
    ) -> Self {
        self.suggested_refinements = Some(v.into());
        self
    }

    /// Sets or clears the value of [suggested_refinements][QueryOptions::suggested_refinements].
    pub fn set_or_clear_suggested_refinements<T: std::convert::Into<crate::model::QueryLargeSuggestedRefinements>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.suggested_refinements = v.map(|x| x.into());
        self
    }

    /// Sets the value of [passages][QueryOptions::passages].
    pub fn set_passages<T: std::convert::Into<crate::model::QueryLargePassages>>(
        mut self,
        v: T,
    ) -> Self {
        self.passages = Some(v.into());
        self
    }

    /// Sets or clears the value of [passages][QueryOptions::passages].
    pub fn set_or_clear_passages<T: std::convert::Into<crate::model::QueryLargePassages>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.passages = v.map(|x| x.into());
        self
    }

    /// Sets the value of [similar][QueryOptions::similar].
    pub fn set_similar<T: std::convert::Into<crate::model::QueryLargeSimilar>>(
        mut self,
        v: T,
    ) -> Self {
        self.similar = Some(v.into());
        self
    }

    /// Sets or clears the value of [similar][QueryOptions::similar].
    pub fn set_or_clear_similar<T: std::convert::Into<crate::model::QueryLargeSimilar>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.similar = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [QueryOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<QueryOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(QueryOptions {
            project_id,
            collection_ids: self.collection_ids,
            filter: self.filter,
            query: self.query,
            natural_language_query: self.natural_language_query,
            aggregation: self.aggregation,
            count: self.count,
            return_fields: self.return_fields,
            offset: self.offset,
            sort: self.sort,
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
            table_results: self.table_results,
            suggested_refinements: self.suggested_refinements,
            passages: self.passages,
            similar: self.similar,
        })
    }
}

/// The options for [get_autocompletion][crate::client::Discovery::get_autocompletion].
///
/// Returns completion query suggestions for the specified prefix.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetAutocompletionOptions {
    project_id: String,
    prefix: String,
    collection_ids: std::option::Option<std::vec::Vec<String>>,
    field: std::option::Option<String>,
    count: std::option::Option<i64>,
}

impl GetAutocompletionOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetAutocompletionOptionsBuilder {
        GetAutocompletionOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetAutocompletionOptionsBuilder {
        GetAutocompletionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            prefix: Some(self.prefix.clone()),
            collection_ids: self.collection_ids.clone(),
            field: self.field.clone(),
            count: self.count,
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `prefix`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the value of `collection_ids`.
    pub fn collection_ids(&self) -> Option<&[String]> {
        self.collection_ids.as_deref()
    }

    /// Returns the value of `field`.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the value of `count`.
    pub fn count(&self) -> Option<i64> {
        self.count
    }
}

/// A builder for [GetAutocompletionOptions].
#[derive(Clone, Debug, Default)]
pub struct GetAutocompletionOptionsBuilder {
    project_id: std::option::Option<String>,
    prefix: std::option::Option<String>,
    collection_ids: std::option::Option<std::vec::Vec<String>>,
    field: std::option::Option<String>,
    count: std::option::Option<i64>,
}

impl GetAutocompletionOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            prefix: Some(prefix.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][GetAutocompletionOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [prefix][GetAutocompletionOptions::prefix].
    ///
    /// The prefix to use for autocompletion. For example, the prefix `Ho` could
    /// autocomplete to `hot`, `housing`, or `how`.
    pub fn set_prefix<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    /// Sets the value of [collection_ids][GetAutocompletionOptions::collection_ids].
    pub fn set_collection_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.collection_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [collection_ids][GetAutocompletionOptions::collection_ids].
    pub fn add_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_ids.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [field][GetAutocompletionOptions::field].
    ///
    /// The field in the result documents that autocompletion suggestions are
    /// identified from.
    pub fn set_field<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.field = Some(v.into());
        self
    }

    /// Sets or clears the value of [field][GetAutocompletionOptions::field].
    pub fn set_or_clear_field<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.field = v.map(|x| x.into());
        self
    }

    /// Sets the value of [count][GetAutocompletionOptions::count].
    ///
    /// The number of autocompletion suggestions to return.
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][GetAutocompletionOptions::count].
    pub fn set_or_clear_count<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.count = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [GetAutocompletionOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetAutocompletionOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let prefix = validator::not_empty("prefix", self.prefix)?;
        Ok(GetAutocompletionOptions {
            project_id,
            prefix,
            collection_ids: self.collection_ids,
            field: self.field,
            count: self.count,
        })
    }
}

/// The options for [query_collection_notices][crate::client::Discovery::query_collection_notices].
///
/// Finds collection-level notices (errors and warnings) that are generated
/// when documents are ingested.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct QueryCollectionNoticesOptions {
    project_id: String,
    collection_id: String,
    filter: std::option::Option<String>,
    query: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    count: std::option::Option<i64>,
    offset: std::option::Option<i64>,
}

impl QueryCollectionNoticesOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> QueryCollectionNoticesOptionsBuilder {
        QueryCollectionNoticesOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> QueryCollectionNoticesOptionsBuilder {
        QueryCollectionNoticesOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            filter: self.filter.clone(),
            query: self.query.clone(),
            natural_language_query: self.natural_language_query.clone(),
            count: self.count,
            offset: self.offset,
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

    /// Returns the value of `filter`.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the value of `query`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the value of `natural_language_query`.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.natural_language_query.as_deref()
    }

    /// Returns the value of `count`.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Returns the value of `offset`.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }
}

/// A builder for [QueryCollectionNoticesOptions].
#[derive(Clone, Debug, Default)]
pub struct QueryCollectionNoticesOptionsBuilder {
    project_id: std::option::Option<String>,
    collection_id: std::option::Option<String>,
    filter: std::option::Option<String>,
    query: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    count: std::option::Option<i64>,
    offset: std::option::Option<i64>,
}

impl QueryCollectionNoticesOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][QueryCollectionNoticesOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [collection_id][QueryCollectionNoticesOptions::collection_id].
    pub fn set_collection_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.collection_id = Some(v.into());
        self
    }

    /// Sets the value of [filter][QueryCollectionNoticesOptions::filter].
    ///
    /// Searches for documents that match the Discovery Query Language criteria
    /// that is specified as input.
    pub fn set_filter<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][QueryCollectionNoticesOptions::filter].
    pub fn set_or_clear_filter<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [query][QueryCollectionNoticesOptions::query].
    pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets or clears the value of [query][QueryCollectionNoticesOptions::query].
    pub fn set_or_clear_query<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [natural_language_query][QueryCollectionNoticesOptions::natural_language_query].
    pub fn set_natural_language_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.natural_language_query = Some(v.into());
        self
    }

    /// Sets or clears the value of [natural_language_query][QueryCollectionNoticesOptions::natural_language_query].
    pub fn set_or_clear_natural_language_query<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.natural_language_query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [count][QueryCollectionNoticesOptions::count].
    ///
    /// The number of results to return.
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][QueryCollectionNoticesOptions::count].
    pub fn set_or_clear_count<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [offset][QueryCollectionNoticesOptions::offset].
    ///
    /// The number of query results to skip at the beginning.
    pub fn set_offset<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][QueryCollectionNoticesOptions::offset].
    pub fn set_or_clear_offset<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [QueryCollectionNoticesOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<QueryCollectionNoticesOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let collection_id = validator::not_empty("collection_id", self.collection_id)?;
        Ok(QueryCollectionNoticesOptions {
            project_id,
            collection_id,
            filter: self.filter,
            query: self.query,
            natural_language_query: self.natural_language_query,
            count: self.count,
            offset: self.offset,
        })
    }
}

/// The options for [query_notices][crate::client::Discovery::query_notices].
///
/// Finds project-level notices (errors and warnings).
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct QueryNoticesOptions {
    project_id: String,
    filter: std::option::Option<String>,
    query: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    count: std::option::Option<i64>,
    offset: std::option::Option<i64>,
}

impl QueryNoticesOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            filter: self.filter.clone(),
            query: self.query.clone(),
            natural_language_query: self.natural_language_query.clone(),
            count: self.count,
            offset: self.offset,
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `filter`.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the value of `query`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the value of `natural_language_query`.
    pub fn natural_language_query(&self) -> Option<&str> {
        self.natural_language_query.as_deref()
    }

    /// Returns the value of `count`.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// Returns the value of `offset`.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }
}

/// A builder for [QueryNoticesOptions].
#[derive(Clone, Debug, Default)]
pub struct QueryNoticesOptionsBuilder {
    project_id: std::option::Option<String>,
    filter: std::option::Option<String>,
    query: std::option::Option<String>,
    natural_language_query: std::option::Option<String>,
    count: std::option::Option<i64>,
    offset: std::option::Option<i64>,
}

impl QueryNoticesOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][QueryNoticesOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [filter][QueryNoticesOptions::filter].
    ///
    /// Searches for documents that match the Discovery Query Language criteria
    /// that is specified as input.
    pub fn set_filter<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][QueryNoticesOptions::filter].
    pub fn set_or_clear_filter<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [query][QueryNoticesOptions::query].
    pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets or clears the value of [query][QueryNoticesOptions::query].
    pub fn set_or_clear_query<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [natural_language_query][QueryNoticesOptions::natural_language_query].
    pub fn set_natural_language_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.natural_language_query = Some(v.into());
        self
    }

    /// Sets or clears the value of [natural_language_query][QueryNoticesOptions::natural_language_query].
    pub fn set_or_clear_natural_language_query<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.natural_language_query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [count][QueryNoticesOptions::count].
    ///
    /// The number of results to return.
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][QueryNoticesOptions::count].
    pub fn set_or_clear_count<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [offset][QueryNoticesOptions::offset].
    ///
    /// The number of query results to skip at the beginning.
    pub fn set_offset<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][QueryNoticesOptions::offset].
    pub fn set_or_clear_offset<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [QueryNoticesOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<QueryNoticesOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(QueryNoticesOptions {
            project_id,
            filter: self.filter,
            query: self.query,
            natural_language_query: self.natural_language_query,
            count: self.count,
            offset: self.offset,
        })
    }
}

/// The options for [get_component_settings][crate::client::Discovery::get_component_settings].
///
/// Returns default configuration settings for components.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetComponentSettingsOptions {
    project_id: String,
}

impl GetComponentSettingsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetComponentSettingsOptionsBuilder {
        GetComponentSettingsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetComponentSettingsOptionsBuilder {
        GetComponentSettingsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [GetComponentSettingsOptions].
#[derive(Clone, Debug, Default)]
pub struct GetComponentSettingsOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl GetComponentSettingsOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][GetComponentSettingsOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetComponentSettingsOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetComponentSettingsOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(GetComponentSettingsOptions {
            project_id,
        })
    }
}
