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
    use discovery_v2::client::Discovery;
    use discovery_v2::model::{CollectionDetails, DocumentAccepted, QueryResponse, document_accepted};
    use discovery_v2::options::*;
    use discovery_v2::{ClientConfig, Error, Result};

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        Discovery {}
        impl discovery_v2::stub::Discovery for Discovery {
            async fn create_collection(&self, options: CreateCollectionOptions) -> Result<CollectionDetails>;
            async fn add_document(&self, options: AddDocumentOptions) -> Result<DocumentAccepted>;
            async fn query(&self, options: QueryOptions) -> Result<QueryResponse>;
            async fn delete_project(&self, options: DeleteProjectOptions) -> Result<()>;
        }
    }

    fn collection(id: &str) -> CollectionDetails {
        let mut details = CollectionDetails::default();
        details.collection_id = Some(id.to_string());
        details.name = Some("Contracts".to_string());
        details
    }

    #[tokio::test]
    async fn forwards_options() -> TestResult {
        let mut mock = MockDiscovery::new();
        mock.expect_create_collection()
            .withf(|o: &CreateCollectionOptions| {
                o.project_id() == "p1" && o.name() == "Contracts" && o.description().is_none()
            })
            .times(1)
            .returning(|_| Ok(collection("c1")));

        let client = Discovery::from_stub(mock);
        let options = CreateCollectionOptionsBuilder::new("p1", "Contracts").build()?;
        let got = client.create_collection(options).await?;
        assert_eq!(got, collection("c1"));
        Ok(())
    }

    #[tokio::test]
    async fn forwards_errors() -> TestResult {
        let mut mock = MockDiscovery::new();
        mock.expect_delete_project()
            .times(1)
            .returning(|_| Err(Error::invalid_argument("project is locked")));

        let client = Discovery::from_stub(mock);
        let options = DeleteProjectOptionsBuilder::new("p1").build()?;
        let err = client.delete_project(options).await.unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("project is locked"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn forwards_file_payload() -> TestResult {
        let mut mock = MockDiscovery::new();
        mock.expect_add_document()
            .withf(|o: &AddDocumentOptions| {
                o.file().map(|b| b.to_vec()) == Some(b"hello".to_vec())
                    && o.filename() == Some("hello.txt")
                    && o.x_watson_discovery_force() == Some(true)
            })
            .times(1)
            .returning(|_| {
                let mut accepted = DocumentAccepted::default();
                accepted.document_id = Some("d1".to_string());
                accepted.status = Some(document_accepted::status::PROCESSING.to_string());
                Ok(accepted)
            });

        let client = Discovery::from_stub(mock);
        let options = AddDocumentOptionsBuilder::new("p1", "c1")
            .set_file("hello")
            .set_filename("hello.txt")
            .set_x_watson_discovery_force(true)
            .build()?;
        let got = client.add_document(options).await?;
        assert_eq!(got.document_id.as_deref(), Some("d1"));
        assert_eq!(
            got.status.as_deref(),
            Some(document_accepted::status::PROCESSING)
        );
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_the_stub() -> TestResult {
        let mut mock = MockDiscovery::new();
        mock.expect_query()
            .withf(|o: &QueryOptions| o.project_id() == "p1")
            .times(2)
            .returning(|_| {
                let mut response = QueryResponse::default();
                response.matching_results = Some(0);
                Ok(response)
            });

        let client = Discovery::from_stub(mock);
        let clone = client.clone();
        let options = QueryOptionsBuilder::new("p1").set_query("text:contract").build()?;
        let a = client.query(options.clone()).await?;
        let b = clone.query(options).await?;
        assert_eq!(a, b);
        assert_eq!(a.matching_results, Some(0));
        Ok(())
    }

    #[tokio::test]
    async fn with_tracing_config() -> TestResult {
        let mut mock = MockDiscovery::new();
        mock.expect_delete_project()
            .withf(|o: &DeleteProjectOptions| o.project_id() == "p1")
            .times(1)
            .returning(|_| Ok(()));

        let config = ClientConfig::new("2023-03-31")?.enable_tracing();
        let client = Discovery::from_stub_with_config(mock, &config);
        let options = DeleteProjectOptionsBuilder::new("p1").build()?;
        client.delete_project(options).await?;
        Ok(())
    }

    #[tokio::test]
    #[should_panic]
    async fn unimplemented_operations_panic() {
        let client = Discovery::from_stub(MockDiscovery::new());
        let options = ListProjectsOptions::builder().build().unwrap();
        let _ = client.list_projects(options).await;
    }
}
