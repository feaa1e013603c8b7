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

//! Aggregations returned by the query operation.
//!
//! The service returns each aggregation as a JSON object with a `type`
//! field. The value of `type` selects the shape of the remaining fields.
//! Aggregations nest: `nested`, `filter`, and most result buckets contain
//! further aggregations, to any depth.

use serde::de::Error as _;

/// An aggregation produced by a query.
///
/// Each variant holds the fields for one aggregation shape, selected by the
/// `type` field of the JSON object. Several calculation types (`min`, `max`,
/// `sum`, `average`, and `unique_count`) share the
/// [Calculation][QueryAggregation::Calculation] shape, use
/// [aggregation_type][QueryAggregation::aggregation_type] to distinguish
/// them.
///
/// The service may add new aggregation types. Objects with an unrecognized,
/// or missing, `type` deserialize as [Generic][QueryAggregation::Generic].
///
/// # Example
/// ```
/// # use discovery_v2::model::QueryAggregation;
/// let aggregation: QueryAggregation = serde_json::from_value(serde_json::json!({
///     "type": "histogram",
///     "field": "price",
///     "interval": 5,
/// }))?;
/// match &aggregation {
///     QueryAggregation::Histogram(h) => assert_eq!(h.interval, Some(5)),
///     _ => panic!("unexpected aggregation {aggregation:?}"),
/// }
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum QueryAggregation {
    Term(QueryTermAggregation),
    GroupBy(QueryGroupByAggregation),
    Histogram(QueryHistogramAggregation),
    Timeslice(QueryTimesliceAggregation),
    Nested(QueryNestedAggregation),
    Filter(QueryFilterAggregation),
    /// One of the `min`, `max`, `sum`, `average`, or `unique_count`
    /// aggregations.
    Calculation(QueryCalculationAggregation),
    TopHits(QueryTopHitsAggregation),
    Pair(QueryPairAggregation),
    Trend(QueryTrendAggregation),
    Topic(QueryTopicAggregation),
    /// An aggregation with a missing or unrecognized `type`.
    Generic(QueryGenericAggregation),
}

impl QueryAggregation {
    /// The value of the `type` field.
    pub fn aggregation_type(&self) -> Option<&str> {
        match self {
            Self::Term(a) => a.r#type.as_deref(),
            Self::GroupBy(a) => a.r#type.as_deref(),
            Self::Histogram(a) => a.r#type.as_deref(),
            Self::Timeslice(a) => a.r#type.as_deref(),
            Self::Nested(a) => a.r#type.as_deref(),
            Self::Filter(a) => a.r#type.as_deref(),
            Self::Calculation(a) => a.r#type.as_deref(),
            Self::TopHits(a) => a.r#type.as_deref(),
            Self::Pair(a) => a.r#type.as_deref(),
            Self::Trend(a) => a.r#type.as_deref(),
            Self::Topic(a) => a.r#type.as_deref(),
            Self::Generic(a) => a.r#type.as_deref(),
        }
    }

    /// The aggregations directly contained in this aggregation, if the shape
    /// carries any at the top level.
    pub fn sub_aggregations(&self) -> Option<&[QueryAggregation]> {
        match self {
            Self::Nested(a) => a.aggregations.as_deref(),
            Self::Filter(a) => a.aggregations.as_deref(),
            Self::Generic(a) => a.aggregations.as_deref(),
            _ => None,
        }
    }
}

/// The aggregation shapes, as selected by the `type` field.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Term,
    GroupBy,
    Histogram,
    Timeslice,
    Nested,
    Filter,
    Calculation,
    TopHits,
    Pair,
    Trend,
    Topic,
}

/// Maps each known `type` value to its shape. Many values may map to the
/// same shape.
const DISCRIMINATORS: [(&str, Shape); 15] = {
    use query_aggregation::aggregation_type::*;
    [
        (TERM, Shape::Term),
        (GROUP_BY, Shape::GroupBy),
        (HISTOGRAM, Shape::Histogram),
        (TIMESLICE, Shape::Timeslice),
        (NESTED, Shape::Nested),
        (FILTER, Shape::Filter),
        (MIN, Shape::Calculation),
        (MAX, Shape::Calculation),
        (SUM, Shape::Calculation),
        (AVERAGE, Shape::Calculation),
        (UNIQUE_COUNT, Shape::Calculation),
        (TOP_HITS, Shape::TopHits),
        (PAIR, Shape::Pair),
        (TREND, Shape::Trend),
        (TOPIC, Shape::Topic),
    ]
};

fn shape_of(discriminator: &str) -> Option<Shape> {
    DISCRIMINATORS
        .iter()
        .find(|(k, _)| *k == discriminator)
        .map(|(_, s)| *s)
}

impl<'de> serde::Deserialize<'de> for QueryAggregation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        let discriminator = value.get("type").and_then(serde_json::Value::as_str);
        let Some(shape) = discriminator.and_then(shape_of) else {
            tracing::debug!(
                aggregation_type = ?discriminator,
                "unrecognized aggregation type, using the generic shape"
            );
            return serde_json::from_value(value)
                .map(Self::Generic)
                .map_err(D::Error::custom);
        };
        let aggregation = match shape {
            Shape::Term => serde_json::from_value(value).map(Self::Term),
            Shape::GroupBy => serde_json::from_value(value).map(Self::GroupBy),
            Shape::Histogram => serde_json::from_value(value).map(Self::Histogram),
            Shape::Timeslice => serde_json::from_value(value).map(Self::Timeslice),
            Shape::Nested => serde_json::from_value(value).map(Self::Nested),
            Shape::Filter => serde_json::from_value(value).map(Self::Filter),
            Shape::Calculation => serde_json::from_value(value).map(Self::Calculation),
            Shape::TopHits => serde_json::from_value(value).map(Self::TopHits),
            Shape::Pair => serde_json::from_value(value).map(Self::Pair),
            Shape::Trend => serde_json::from_value(value).map(Self::Trend),
            Shape::Topic => serde_json::from_value(value).map(Self::Topic),
        };
        aggregation.map_err(D::Error::custom)
    }
}

impl serde::Serialize for QueryAggregation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Term(a) => serde::Serialize::serialize(a, serializer),
            Self::GroupBy(a) => serde::Serialize::serialize(a, serializer),
            Self::Histogram(a) => serde::Serialize::serialize(a, serializer),
            Self::Timeslice(a) => serde::Serialize::serialize(a, serializer),
            Self::Nested(a) => serde::Serialize::serialize(a, serializer),
            Self::Filter(a) => serde::Serialize::serialize(a, serializer),
            Self::Calculation(a) => serde::Serialize::serialize(a, serializer),
            Self::TopHits(a) => serde::Serialize::serialize(a, serializer),
            Self::Pair(a) => serde::Serialize::serialize(a, serializer),
            Self::Trend(a) => serde::Serialize::serialize(a, serializer),
            Self::Topic(a) => serde::Serialize::serialize(a, serializer),
            Self::Generic(a) => serde::Serialize::serialize(a, serializer),
        }
    }
}

/// Defines additional types related to [QueryAggregation].
pub mod query_aggregation {
    /// Known values for the `type` field of an aggregation.
    ///
    /// The service may return values not listed here.
    pub mod aggregation_type {
        pub const TERM: &str = "term";
        pub const GROUP_BY: &str = "group_by";
        pub const HISTOGRAM: &str = "histogram";
        pub const TIMESLICE: &str = "timeslice";
        pub const NESTED: &str = "nested";
        pub const FILTER: &str = "filter";
        pub const MIN: &str = "min";
        pub const MAX: &str = "max";
        pub const SUM: &str = "sum";
        pub const AVERAGE: &str = "average";
        pub const UNIQUE_COUNT: &str = "unique_count";
        pub const TOP_HITS: &str = "top_hits";
        pub const PAIR: &str = "pair";
        pub const TREND: &str = "trend";
        pub const TOPIC: &str = "topic";
    }
}

/// Returns results for the specified field sorted by the number of documents
/// that contain the field value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTermAggregation {
    /// Always `term`.
    pub r#type: Option<String>,

    /// The field in the document where the values come from.
    pub field: Option<String>,

    /// The number of results returned. Not returned if `relevancy:true` is
    /// specified in the request.
    pub count: Option<i64>,

    /// Identifier specified in the query request of this aggregation.
    pub name: Option<String>,

    /// An array of results.
    pub results: Option<Vec<QueryTermAggregationResult>>,
}

/// Top value result for the `term` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTermAggregationResult {
    /// Value of the field with a nonzero frequency in the document set.
    pub key: Option<String>,

    /// Number of documents that contain the `key`.
    pub matching_results: Option<i64>,

    /// The relevancy score for this result. Returned only if `relevancy:true`
    /// is specified in the request.
    pub relevancy: Option<f64>,

    /// Number of documents in the collection that contain the term in the
    /// specified field.
    pub total_matching_documents: Option<i64>,

    /// Number of documents that are estimated to match the query and also meet
    /// the condition.
    pub estimated_matching_results: Option<f64>,

    /// An array of subaggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Separates document results into groups that meet the conditions you
/// specify.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryGroupByAggregation {
    pub r#type: Option<String>,

    /// An array of results.
    pub results: Option<Vec<QueryGroupByAggregationResult>>,
}

/// Result group for the `group_by` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryGroupByAggregationResult {
    /// The condition that is met by the documents in this group. For example,
    /// `YEARTXT<2000`.
    pub key: Option<String>,
    pub matching_results: Option<i64>,
    pub relevancy: Option<f64>,
    pub total_matching_documents: Option<i64>,
    pub estimated_matching_results: Option<f64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Numeric interval segments to categorize documents by using field values
/// from a single numeric field to describe the category.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryHistogramAggregation {
    pub r#type: Option<String>,

    /// The numeric field name used to create the histogram.
    pub field: Option<String>,

    /// The size of the sections that the results are split into.
    pub interval: Option<i64>,

    /// Identifier that can optionally be specified in the query request of
    /// this aggregation.
    pub name: Option<String>,

    /// Array of numeric intervals.
    pub results: Option<Vec<QueryHistogramAggregationResult>>,
}

/// Histogram numeric interval result.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryHistogramAggregationResult {
    /// The value of the upper bound for the numeric segment.
    pub key: Option<i64>,

    /// Number of documents with the specified key as the upper bound.
    pub matching_results: Option<i64>,

    /// An array of subaggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A specialized histogram aggregation that uses dates to create interval
/// segments.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTimesliceAggregation {
    pub r#type: Option<String>,

    /// The date field name used to create the timeslice.
    pub field: Option<String>,

    /// The date interval value. Valid values are seconds, minutes, hours, days,
    /// weeks, and years.
    pub interval: Option<String>,

    pub name: Option<String>,

    /// Array of aggregation results.
    pub results: Option<Vec<QueryTimesliceAggregationResult>>,
}

/// A timeslice interval segment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTimesliceAggregationResult {
    /// String date value of the upper bound for the timeslice interval in
    /// ISO-8601 format.
    pub key_as_string: Option<String>,

    /// Numeric date value of the upper bound for the timeslice interval in
    /// UNIX milliseconds since epoch.
    pub key: Option<i64>,

    /// Number of documents with the specified key as the upper bound.
    pub matching_results: Option<i64>,

    /// An array of subaggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A restriction that alters the document set that is used for
/// sub-aggregations it precedes to nested documents found in the field
/// specified.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryNestedAggregation {
    pub r#type: Option<String>,

    /// The path to the document field to scope subsequent aggregations to.
    pub path: Option<String>,

    /// Number of nested documents found in the specified field.
    pub matching_results: Option<i64>,

    /// An array of subaggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A modifier that narrows the document set of the subaggregations it
/// precedes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryFilterAggregation {
    pub r#type: Option<String>,

    /// The filter that is written in Discovery Query Language syntax and
    /// applied to the documents before subaggregations are run.
    pub r#match: Option<String>,

    /// Number of documents that match the filter.
    pub matching_results: Option<i64>,

    /// An array of subaggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Returns a scalar calculation across all documents for the field specified.
///
/// Possible calculations include min, max, sum, average, and unique_count.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryCalculationAggregation {
    /// The calculation: `min`, `max`, `sum`, `average`, or `unique_count`.
    pub r#type: Option<String>,

    /// The field to perform the calculation on.
    pub field: Option<String>,

    /// The value of the calculation.
    pub value: Option<f64>,
}

/// Returns the top documents ranked by the score of the query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTopHitsAggregation {
    pub r#type: Option<String>,

    /// The number of documents to return.
    pub size: Option<i64>,

    pub name: Option<String>,
    pub hits: Option<QueryTopHitsAggregationResult>,
}

/// A query response that contains the matching documents for the preceding
/// aggregations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTopHitsAggregationResult {
    /// Number of matching results.
    pub matching_results: Option<i64>,

    /// An array of the document results in an ordered list.
    pub hits: Option<Vec<serde_json::Map<String, serde_json::Value>>>,
}

/// Calculates relevancy values using combinations of document sets from
/// results of the specified pair of aggregations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryPairAggregation {
    pub r#type: Option<String>,

    /// Specifies the first aggregation in the pair. The aggregation must be a
    /// `term`, `group_by`, `histogram`, or `timeslice` aggregation type.
    pub first: Option<String>,

    /// Specifies the second aggregation in the pair.
    pub second: Option<String>,

    /// Indicates whether to include estimated matching result information.
    pub show_estimated_matching_results: Option<bool>,

    /// Indicates whether to include total matching documents information.
    pub show_total_matching_documents: Option<bool>,

    /// An array of aggregations.
    pub results: Option<Vec<QueryPairAggregationResult>>,
}

/// Result for the `pair` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryPairAggregationResult {
    /// Array of subaggregations of type `term`, `group_by`, `histogram`, or
    /// `timeslice`.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Detects sharp and unexpected changes in the frequency of a facet or facet
/// value over time based on the past history of frequency changes of the
/// facet value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTrendAggregation {
    pub r#type: Option<String>,

    /// Specifies the `term` or `group_by` aggregation for the facet that you
    /// want to analyze.
    pub facet: Option<String>,

    /// Specifies the `timeslice` aggregation that defines the time segments.
    pub time_segments: Option<String>,

    pub show_estimated_matching_results: Option<bool>,
    pub show_total_matching_documents: Option<bool>,
    pub results: Option<Vec<QueryTrendAggregationResult>>,
}

/// Result for the `trend` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTrendAggregationResult {
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Detects how much the frequency of a given facet value deviates from the
/// expected average for the given time period.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTopicAggregation {
    pub r#type: Option<String>,

    /// Specifies the `term` or `group_by` aggregation for the facet that you
    /// want to analyze.
    pub facet: Option<String>,

    /// Specifies the `timeslice` aggregation that defines the time segments.
    pub time_segments: Option<String>,

    pub show_estimated_matching_results: Option<bool>,
    pub show_total_matching_documents: Option<bool>,
    pub results: Option<Vec<QueryTopicAggregationResult>>,
}

/// Result for the `topic` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryTopicAggregationResult {
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// The fields common to all aggregations.
///
/// Used for aggregations with a `type` unknown to this version of the client
/// library. All the fields are optional, any fields not listed here are kept
/// in [additional][QueryGenericAggregation::additional].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct QueryGenericAggregation {
    /// The value of the `type` field, if present.
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub field: Option<String>,
    pub path: Option<String>,
    pub r#match: Option<String>,
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,

    /// The remaining fields, as returned by the service.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test_case("term", Shape::Term)]
    #[test_case("group_by", Shape::GroupBy)]
    #[test_case("histogram", Shape::Histogram)]
    #[test_case("timeslice", Shape::Timeslice)]
    #[test_case("nested", Shape::Nested)]
    #[test_case("filter", Shape::Filter)]
    #[test_case("min", Shape::Calculation)]
    #[test_case("max", Shape::Calculation)]
    #[test_case("sum", Shape::Calculation)]
    #[test_case("average", Shape::Calculation)]
    #[test_case("unique_count", Shape::Calculation)]
    #[test_case("top_hits", Shape::TopHits)]
    #[test_case("pair", Shape::Pair)]
    #[test_case("trend", Shape::Trend)]
    #[test_case("topic", Shape::Topic)]
    fn discriminator_table(input: &str, want: Shape) {
        assert_eq!(shape_of(input), Some(want));
    }

    #[test_case(""; "empty")]
    #[test_case("Term"; "case sensitive")]
    #[test_case("unknown_future_type"; "unknown")]
    fn discriminator_table_unknown(input: &str) {
        assert_eq!(shape_of(input), None);
    }

    #[test]
    fn histogram() -> Result {
        let got = serde_json::from_value::<QueryAggregation>(json!({
            "type": "histogram",
            "field": "price",
            "interval": 5,
            "results": [{"key": 10, "matching_results": 3}],
        }))?;
        let QueryAggregation::Histogram(h) = &got else {
            panic!("expected a histogram {got:?}");
        };
        assert_eq!(h.interval, Some(5));
        assert_eq!(h.field.as_deref(), Some("price"));
        let key = h.results.as_ref().and_then(|r| r.first()).and_then(|r| r.key);
        assert_eq!(key, Some(10));
        assert_eq!(got.aggregation_type(), Some("histogram"));
        Ok(())
    }

    #[test]
    fn calculations_share_shape() -> Result {
        let min = serde_json::from_value::<QueryAggregation>(json!({"type": "min", "value": 3.5}))?;
        let max = serde_json::from_value::<QueryAggregation>(json!({"type": "max", "value": 7.0}))?;
        let (QueryAggregation::Calculation(min), QueryAggregation::Calculation(max)) = (&min, &max)
        else {
            panic!("expected calculations {min:?} {max:?}");
        };
        assert_eq!(min.value, Some(3.5));
        assert_eq!(min.r#type.as_deref(), Some("min"));
        assert_eq!(max.value, Some(7.0));
        assert_eq!(max.r#type.as_deref(), Some("max"));
        Ok(())
    }

    #[test_case(json!({"type": "unknown_future_type", "name": "x"}); "unknown type")]
    #[test_case(json!({"name": "x"}); "missing type")]
    fn generic(input: serde_json::Value) -> Result {
        let got = serde_json::from_value::<QueryAggregation>(input)?;
        let QueryAggregation::Generic(g) = &got else {
            panic!("expected the generic shape {got:?}");
        };
        assert_eq!(g.name.as_deref(), Some("x"));
        Ok(())
    }

    #[test]
    fn generic_keeps_unknown_fields() -> Result {
        let input = json!({
            "type": "percentile",
            "field": "price",
            "percents": [50, 99],
            "aggregations": [{"type": "sum", "field": "price", "value": 10.0}],
        });
        let got = serde_json::from_value::<QueryAggregation>(input.clone())?;
        let QueryAggregation::Generic(g) = &got else {
            panic!("expected the generic shape {got:?}");
        };
        assert_eq!(g.additional.get("percents"), Some(&json!([50, 99])));
        assert!(
            matches!(
                got.sub_aggregations(),
                Some([QueryAggregation::Calculation(_)])
            ),
            "{got:?}"
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn recursive() -> Result {
        let input = json!({
            "type": "filter",
            "match": "enriched_text.entities.type:Organization",
            "matching_results": 12,
            "aggregations": [{
                "type": "nested",
                "path": "enriched_text.entities",
                "matching_results": 40,
                "aggregations": [{
                    "type": "term",
                    "field": "enriched_text.entities.text",
                    "count": 2,
                    "results": [{
                        "key": "IBM",
                        "matching_results": 8,
                        "aggregations": [{"type": "unique_count", "field": "document_id", "value": 8.0}]
                    }]
                }]
            }]
        });
        let got = serde_json::from_value::<QueryAggregation>(input.clone())?;
        let QueryAggregation::Filter(filter) = &got else {
            panic!("expected a filter {got:?}");
        };
        assert_eq!(
            filter.r#match.as_deref(),
            Some("enriched_text.entities.type:Organization")
        );
        let nested = got.sub_aggregations().and_then(|a| a.first());
        let Some(QueryAggregation::Nested(nested)) = nested else {
            panic!("expected a nested aggregation {got:?}");
        };
        let term = nested.aggregations.as_ref().and_then(|a| a.first());
        let Some(QueryAggregation::Term(term)) = term else {
            panic!("expected a term aggregation {nested:?}");
        };
        let bucket = term.results.as_ref().and_then(|r| r.first());
        assert_eq!(bucket.and_then(|b| b.key.as_deref()), Some("IBM"));
        let inner = bucket
            .and_then(|b| b.aggregations.as_ref())
            .and_then(|a| a.first());
        assert!(
            matches!(inner, Some(QueryAggregation::Calculation(c)) if c.value == Some(8.0)),
            "{inner:?}"
        );

        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn malformed_known_shape() {
        let got = serde_json::from_value::<QueryAggregation>(json!({
            "type": "histogram",
            "interval": "not a number",
        }));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn top_hits() -> Result {
        let input = json!({
            "type": "top_hits",
            "size": 1,
            "hits": {
                "matching_results": 1,
                "hits": [{"document_id": "d1", "title": "Contract"}]
            }
        });
        let got = serde_json::from_value::<QueryAggregation>(input.clone())?;
        let QueryAggregation::TopHits(t) = &got else {
            panic!("expected top hits {got:?}");
        };
        let first = t
            .hits
            .as_ref()
            .and_then(|h| h.hits.as_ref())
            .and_then(|h| h.first())
            .and_then(|h| h.get("title"));
        assert_eq!(first, Some(&json!("Contract")));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }
}
