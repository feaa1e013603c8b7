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

use crate::request_parameter::RequestParameter;

/// The query string of a request, as ordered `name=value` pairs.
///
/// Values are stored unencoded, the transport encodes them when it builds
/// the request URL.
pub type QueryPairs = Vec<(String, String)>;

/// Adds a query parameter to a set of query pairs.
///
/// The Discovery API sends some options as query parameters:
/// - Simple scalars are formatted as usual.
/// - [Option] fields that do not contain a value are not included in the
///   query.
/// - List fields are sent as a single comma-separated parameter.
///
/// # Example
/// ```
/// # use discovery_gax::query_parameter;
/// let mut query = Vec::new();
/// query_parameter::add(&mut query, "count", &Some(10_i32));
/// query_parameter::add(&mut query, "field", &None::<String>);
/// query_parameter::add(&mut query, "collection_ids", &Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(query, vec![
///     ("count".to_string(), "10".to_string()),
///     ("collection_ids".to_string(), "a,b".to_string()),
/// ]);
/// ```
pub fn add<T>(query: &mut QueryPairs, name: &str, parameter: &T)
where
    T: QueryParameter,
{
    QueryParameter::add(parameter, query, name)
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(&self, query: &mut QueryPairs, name: &str);
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, query: &mut QueryPairs, name: &str) {
        if let Some(t) = self {
            t.add(query, name);
        }
    }
}

impl<T: RequestParameter> QueryParameter for Vec<T> {
    fn add(&self, query: &mut QueryPairs, name: &str) {
        let joined = self
            .iter()
            .map(RequestParameter::format)
            .collect::<Vec<_>>()
            .join(",");
        query.push((name.to_string(), joined));
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn add(&self, query: &mut QueryPairs, name: &str) {
        query.push((name.to_string(), self.format()));
    }
}
