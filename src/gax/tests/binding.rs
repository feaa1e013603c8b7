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

//! Exercises [Binding] end to end with a hand-written options type, the way
//! the generated client uses it.

use discovery_gax::Result;
use discovery_gax::client_config::ClientConfig;
use discovery_gax::path_parameter::enc;
use discovery_gax::request::{Binding, Body, FormPart, HttpRequest};
use discovery_gax::response::decode;
use discovery_gax::validator::{self, ValidationError};

#[derive(Clone, Debug)]
struct ListThings {
    project_id: String,
    names: Option<Vec<String>>,
    force: Option<bool>,
}

impl ListThings {
    fn build(project_id: Option<String>, names: Option<Vec<String>>) -> Result<Self> {
        Ok(Self {
            project_id: validator::not_empty("project_id", project_id)?,
            names,
            force: Some(true),
        })
    }
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Things {
    things: Option<Vec<String>>,
}

impl Binding for ListThings {
    type Response = Things;

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let path = format!("/v2/projects/{}/things", enc(&self.project_id));
        HttpRequest::new(http::Method::GET, config, path, "listThings")?
            .accept_json()
            .query("names", &self.names)
            .header("x-watson-discovery-force", self.force.as_ref())
    }
}

#[derive(Clone, Debug)]
struct UploadThing {
    content: bytes::Bytes,
}

impl Binding for UploadThing {
    type Response = ();

    fn bind(&self, config: &ClientConfig) -> Result<HttpRequest> {
        let part = FormPart::new("file", self.content.clone())
            .set_filename("thing.txt")
            .set_content_type("text/plain");
        Ok(
            HttpRequest::new(http::Method::POST, config, "/v2/things".to_string(), "upload")?
                .multipart(vec![part]),
        )
    }
}

#[test]
fn bind_and_decode() -> anyhow::Result<()> {
    let config = ClientConfig::new("2023-03-31")?;
    let options = ListThings::build(
        Some("my project".to_string()),
        Some(vec!["a".to_string(), "b".to_string()]),
    )?;
    let request = options.bind(&config)?;
    assert_eq!(request.method(), http::Method::GET);
    assert_eq!(request.path(), "/v2/projects/my%20project/things");
    assert_eq!(
        request.query_pairs(),
        &[
            ("version".to_string(), "2023-03-31".to_string()),
            ("names".to_string(), "a,b".to_string()),
        ]
    );
    let force = request
        .headers()
        .get("x-watson-discovery-force")
        .and_then(|v| v.to_str().ok());
    assert_eq!(force, Some("true"));
    assert_eq!(request.body(), &Body::Empty);

    let response: <ListThings as Binding>::Response = decode(br#"{"things": ["x"]}"#)?;
    assert_eq!(
        response,
        Things {
            things: Some(vec!["x".to_string()])
        }
    );
    Ok(())
}

#[test]
fn missing_required_field() {
    let err = ListThings::build(None, None).unwrap_err();
    assert!(err.is_invalid_argument(), "{err:?}");
    let field = err.as_inner::<ValidationError>().and_then(|e| e.field());
    assert_eq!(field, Some("project_id"));
}

#[test]
fn multipart_body() -> anyhow::Result<()> {
    let config = ClientConfig::new("2023-03-31")?;
    let options = UploadThing {
        content: bytes::Bytes::from_static(b"hello"),
    };
    let request = options.bind(&config)?;
    let parts = match request.body() {
        Body::Multipart(parts) => parts,
        b => panic!("expected a multipart body, got {b:?}"),
    };
    assert_eq!(parts.len(), 1, "{parts:?}");
    assert_eq!(parts[0].name(), "file");
    assert_eq!(parts[0].filename(), Some("thing.txt"));
    assert_eq!(parts[0].content_type(), Some("text/plain"));
    assert_eq!(&parts[0].content()[..], b"hello");

    decode::<<UploadThing as Binding>::Response>(b"")?;
    Ok(())
}
