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

//! Options for the document classifier and classifier model operations.

use crate::Result;
use gax::upload_source::FileSource;
use gax::validator;

/// The options for [list_document_classifiers][crate::client::Discovery::list_document_classifiers].
///
/// Get a list of the document classifiers in a project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListDocumentClassifiersOptions {
    project_id: String,
}

impl ListDocumentClassifiersOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListDocumentClassifiersOptionsBuilder {
        ListDocumentClassifiersOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListDocumentClassifiersOptionsBuilder {
        ListDocumentClassifiersOptionsBuilder {
            project_id: Some(self.project_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// A builder for [ListDocumentClassifiersOptions].
#[derive(Clone, Debug, Default)]
pub struct ListDocumentClassifiersOptionsBuilder {
    project_id: std::option::Option<String>,
}

impl ListDocumentClassifiersOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// Sets the value of [project_id][ListDocumentClassifiersOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [ListDocumentClassifiersOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListDocumentClassifiersOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        Ok(ListDocumentClassifiersOptions {
            project_id,
        })
    }
}

/// The options for [create_document_classifier][crate::client::Discovery::create_document_classifier].
///
/// Create a document classifier.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CreateDocumentClassifierOptions {
    project_id: String,
    training_data: bytes::Bytes,
    classifier: crate::model::CreateDocumentClassifier,
    test_data: std::option::Option<bytes::Bytes>,
}

impl CreateDocumentClassifierOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> CreateDocumentClassifierOptionsBuilder {
        CreateDocumentClassifierOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> CreateDocumentClassifierOptionsBuilder {
        CreateDocumentClassifierOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            training_data: Some(self.training_data.clone()),
            classifier: Some(self.classifier.clone()),
            test_data: self.test_data.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `training_data`.
    pub fn training_data(&self) -> &bytes::Bytes {
        &self.training_data
    }

    /// Returns the value of `classifier`.
    pub fn classifier(&self) -> &crate::model::CreateDocumentClassifier {
        &self.classifier
    }

    /// Returns the value of `test_data`.
    pub fn test_data(&self) -> Option<&bytes::Bytes> {
        self.test_data.as_ref()
    }
}

/// A builder for [CreateDocumentClassifierOptions].
#[derive(Clone, Debug, Default)]
pub struct CreateDocumentClassifierOptionsBuilder {
    project_id: std::option::Option<String>,
    training_data: std::option::Option<bytes::Bytes>,
    classifier: std::option::Option<crate::model::CreateDocumentClassifier>,
    test_data: std::option::Option<bytes::Bytes>,
}

impl CreateDocumentClassifierOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        training_data: impl Into<bytes::Bytes>,
        classifier: impl Into<crate::model::CreateDocumentClassifier>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            training_data: Some(training_data.into()),
            classifier: Some(classifier.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][CreateDocumentClassifierOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [training_data][CreateDocumentClassifierOptions::training_data].
    ///
    /// The training data CSV file to upload. The CSV file must have headers. The
    /// file must include a field that contains the text you want to classify and
    /// a field that contains the classification labels that you want to use to
    /// classify your data.
    pub fn set_training_data<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.training_data = Some(v.into());
        self
    }

    /// Sets [training_data][CreateDocumentClassifierOptions::training_data] to the contents of the file at
    /// `path`.
    pub fn set_training_data_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let source = FileSource::from_path(path)?;
        Ok(self.set_training_data(source.into_parts().0))
    }

    /// Sets the value of [classifier][CreateDocumentClassifierOptions::classifier].
    ///
    /// An object that manages the settings and data that is required to train a
    /// document classification model.
    pub fn set_classifier<T: std::convert::Into<crate::model::CreateDocumentClassifier>>(
        mut self,
        v: T,
    ) -> Self {
        self.classifier = Some(v.into());
        self
    }

    /// Sets the value of [test_data][CreateDocumentClassifierOptions::test_data].
    ///
    /// The CSV with test data to upload. The column values in the test file must
    /// be the same as the column values in the training data file.
    pub fn set_test_data<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.test_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [test_data][CreateDocumentClassifierOptions::test_data].
    pub fn set_or_clear_test_data<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.test_data = v.map(|x| x.into());
        self
    }

    /// Sets [test_data][CreateDocumentClassifierOptions::test_data] to the contents of the file at
    /// `path`.
    pub fn set_test_data_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let source = FileSource::from_path(path)?;
        Ok(self.set_test_data(source.into_parts().0))
    }

    /// Validates the values and returns the [CreateDocumentClassifierOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty. The `name`, `language`, and `answer_field` of the classifier are
    /// required too.
    pub fn build(self) -> Result<CreateDocumentClassifierOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let training_data = validator::not_null("training_data", self.training_data)?;
        let classifier = validator::not_null("classifier", self.classifier)?;
        validator::not_empty("classifier.name", classifier.name.clone())?;
        validator::not_empty("classifier.language", classifier.language.clone())?;
        validator::not_empty("classifier.answer_field", classifier.answer_field.clone())?;
        Ok(CreateDocumentClassifierOptions {
            project_id,
            training_data,
            classifier,
            test_data: self.test_data,
        })
    }
}

/// The options for [get_document_classifier][crate::client::Discovery::get_document_classifier].
///
/// Get details about a specific document classifier.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetDocumentClassifierOptions {
    project_id: String,
    classifier_id: String,
}

impl GetDocumentClassifierOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetDocumentClassifierOptionsBuilder {
        GetDocumentClassifierOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetDocumentClassifierOptionsBuilder {
        GetDocumentClassifierOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }
}

/// A builder for [GetDocumentClassifierOptions].
#[derive(Clone, Debug, Default)]
pub struct GetDocumentClassifierOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
}

impl GetDocumentClassifierOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, classifier_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
        }
    }

    /// Sets the value of [project_id][GetDocumentClassifierOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][GetDocumentClassifierOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetDocumentClassifierOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetDocumentClassifierOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        Ok(GetDocumentClassifierOptions {
            project_id,
            classifier_id,
        })
    }
}

/// The options for [update_document_classifier][crate::client::Discovery::update_document_classifier].
///
/// Update the document classifier name or description, update the training
/// data, or add or update the test data.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateDocumentClassifierOptions {
    project_id: String,
    classifier_id: String,
    classifier: crate::model::UpdateDocumentClassifier,
    training_data: std::option::Option<bytes::Bytes>,
    test_data: std::option::Option<bytes::Bytes>,
}

impl UpdateDocumentClassifierOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateDocumentClassifierOptionsBuilder {
        UpdateDocumentClassifierOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateDocumentClassifierOptionsBuilder {
        UpdateDocumentClassifierOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            classifier: Some(self.classifier.clone()),
            training_data: self.training_data.clone(),
            test_data: self.test_data.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Returns the value of `classifier`.
    pub fn classifier(&self) -> &crate::model::UpdateDocumentClassifier {
        &self.classifier
    }

    /// Returns the value of `training_data`.
    pub fn training_data(&self) -> Option<&bytes::Bytes> {
        self.training_data.as_ref()
    }

    /// Returns the value of `test_data`.
    pub fn test_data(&self) -> Option<&bytes::Bytes> {
        self.test_data.as_ref()
    }
}

/// A builder for [UpdateDocumentClassifierOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateDocumentClassifierOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
    classifier: std::option::Option<crate::model::UpdateDocumentClassifier>,
    training_data: std::option::Option<bytes::Bytes>,
    test_data: std::option::Option<bytes::Bytes>,
}

impl UpdateDocumentClassifierOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        classifier_id: impl Into<String>,
        classifier: impl Into<crate::model::UpdateDocumentClassifier>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            classifier: Some(classifier.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateDocumentClassifierOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][UpdateDocumentClassifierOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier][UpdateDocumentClassifierOptions::classifier].
    ///
    /// An object that contains a new name or description for a document
    /// classifier, updated training data, or new or updated test data.
    pub fn set_classifier<T: std::convert::Into<crate::model::UpdateDocumentClassifier>>(
        mut self,
        v: T,
    ) -> Self {
        self.classifier = Some(v.into());
        self
    }

    /// Sets the value of [training_data][UpdateDocumentClassifierOptions::training_data].
    ///
    /// The training data CSV file to upload. The CSV file must have headers. The
    /// file must include a field that contains the text you want to classify and
    /// a field that contains the classification labels that you want to use to
    /// classify your data.
    pub fn set_training_data<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.training_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [training_data][UpdateDocumentClassifierOptions::training_data].
    pub fn set_or_clear_training_data<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.training_data = v.map(|x| x.into());
        self
    }

    /// Sets [training_data][UpdateDocumentClassifierOptions::training_data] to the contents of the file at
    /// `path`.
    pub fn set_training_data_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let source = FileSource::from_path(path)?;
        Ok(self.set_training_data(source.into_parts().0))
    }

    /// Sets the value of [test_data][UpdateDocumentClassifierOptions::test_data].
    ///
    /// The CSV with test data to upload. The column values in the test file must
    /// be the same as the column values in the training data file.
    pub fn set_test_data<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.test_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [test_data][UpdateDocumentClassifierOptions::test_data].
    pub fn set_or_clear_test_data<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.test_data = v.map(|x| x.into());
        self
    }

    /// Sets [test_data][UpdateDocumentClassifierOptions::test_data] to the contents of the file at
    /// `path`.
    pub fn set_test_data_path<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let source = FileSource::from_path(path)?;
        Ok(self.set_test_data(source.into_parts().0))
    }

    /// Validates the values and returns the [UpdateDocumentClassifierOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<UpdateDocumentClassifierOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        let classifier = validator::not_null("classifier", self.classifier)?;
        Ok(UpdateDocumentClassifierOptions {
            project_id,
            classifier_id,
            classifier,
            training_data: self.training_data,
            test_data: self.test_data,
        })
    }
}

/// The options for [delete_document_classifier][crate::client::Discovery::delete_document_classifier].
///
/// Deletes an existing document classifier from the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteDocumentClassifierOptions {
    project_id: String,
    classifier_id: String,
}

impl DeleteDocumentClassifierOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteDocumentClassifierOptionsBuilder {
        DeleteDocumentClassifierOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteDocumentClassifierOptionsBuilder {
        DeleteDocumentClassifierOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }
}

/// A builder for [DeleteDocumentClassifierOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteDocumentClassifierOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
}

impl DeleteDocumentClassifierOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, classifier_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteDocumentClassifierOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][DeleteDocumentClassifierOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteDocumentClassifierOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteDocumentClassifierOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        Ok(DeleteDocumentClassifierOptions {
            project_id,
            classifier_id,
        })
    }
}

/// The options for [list_document_classifier_models][crate::client::Discovery::list_document_classifier_models].
///
/// Get a list of the document classifier models in a project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ListDocumentClassifierModelsOptions {
    project_id: String,
    classifier_id: String,
}

impl ListDocumentClassifierModelsOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> ListDocumentClassifierModelsOptionsBuilder {
        ListDocumentClassifierModelsOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> ListDocumentClassifierModelsOptionsBuilder {
        ListDocumentClassifierModelsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }
}

/// A builder for [ListDocumentClassifierModelsOptions].
#[derive(Clone, Debug, Default)]
pub struct ListDocumentClassifierModelsOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
}

impl ListDocumentClassifierModelsOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(project_id: impl Into<String>, classifier_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
        }
    }

    /// Sets the value of [project_id][ListDocumentClassifierModelsOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][ListDocumentClassifierModelsOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [ListDocumentClassifierModelsOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<ListDocumentClassifierModelsOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        Ok(ListDocumentClassifierModelsOptions {
            project_id,
            classifier_id,
        })
    }
}

/// The options for [create_document_classifier_model][crate::client::Discovery::create_document_classifier_model].
///
/// Create a document classifier model by training a model that uses the data
/// and classifier settings defined in the specified document classifier.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CreateDocumentClassifierModelOptions {
    project_id: String,
    classifier_id: String,
    name: String,
    description: std::option::Option<String>,
    learning_rate: std::option::Option<f64>,
    l1_regularization_strengths: std::option::Option<std::vec::Vec<f64>>,
    l2_regularization_strengths: std::option::Option<std::vec::Vec<f64>>,
    training_max_steps: std::option::Option<i64>,
    improvement_ratio: std::option::Option<f64>,
}

impl CreateDocumentClassifierModelOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> CreateDocumentClassifierModelOptionsBuilder {
        CreateDocumentClassifierModelOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> CreateDocumentClassifierModelOptionsBuilder {
        CreateDocumentClassifierModelOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            name: Some(self.name.clone()),
            description: self.description.clone(),
            learning_rate: self.learning_rate,
            l1_regularization_strengths: self.l1_regularization_strengths.clone(),
            l2_regularization_strengths: self.l2_regularization_strengths.clone(),
            training_max_steps: self.training_max_steps,
            improvement_ratio: self.improvement_ratio,
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of `description`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the value of `learning_rate`.
    pub fn learning_rate(&self) -> Option<f64> {
        self.learning_rate
    }

    /// Returns the value of `l1_regularization_strengths`.
    pub fn l1_regularization_strengths(&self) -> Option<&[f64]> {
        self.l1_regularization_strengths.as_deref()
    }

    /// Returns the value of `l2_regularization_strengths`.
    pub fn l2_regularization_strengths(&self) -> Option<&[f64]> {
        self.l2_regularization_strengths.as_deref()
    }

    /// Returns the value of `training_max_steps`.
    pub fn training_max_steps(&self) -> Option<i64> {
        self.training_max_steps
    }

    /// Returns the value of `improvement_ratio`.
    pub fn improvement_ratio(&self) -> Option<f64> {
        self.improvement_ratio
    }
}

/// A builder for [CreateDocumentClassifierModelOptions].
#[derive(Clone, Debug, Default)]
pub struct CreateDocumentClassifierModelOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
    learning_rate: std::option::Option<f64>,
    l1_regularization_strengths: std::option::Option<std::vec::Vec<f64>>,
    l2_regularization_strengths: std::option::Option<std::vec::Vec<f64>>,
    training_max_steps: std::option::Option<i64>,
    improvement_ratio: std::option::Option<f64>,
}

impl CreateDocumentClassifierModelOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        classifier_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][CreateDocumentClassifierModelOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][CreateDocumentClassifierModelOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Sets the value of [name][CreateDocumentClassifierModelOptions::name].
    ///
    /// The name of the document classifier model.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateDocumentClassifierModelOptions::description].
    ///
    /// A description of the document classifier model.
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][CreateDocumentClassifierModelOptions::description].
    pub fn set_or_clear_description<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [learning_rate][CreateDocumentClassifierModelOptions::learning_rate].
    ///
    /// A tuning parameter in an optimization algorithm that determines the step
    /// size at each iteration of the training process.
    pub fn set_learning_rate<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.learning_rate = Some(v.into());
        self
    }

    /// Sets or clears the value of [learning_rate][CreateDocumentClassifierModelOptions::learning_rate].
    pub fn set_or_clear_learning_rate<T: std::convert::Into<f64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.learning_rate = v.map(|x| x.into());
        self
    }

    /// Sets the value of [l1_regularization_strengths][CreateDocumentClassifierModelOptions::l1_regularization_strengths].
    ///
    /// Avoids overfitting by shrinking the coefficient of less important features
    /// to zero, which removes some features altogether.
    pub fn set_l1_regularization_strengths<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<f64>,
    {
        self.l1_regularization_strengths = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [l1_regularization_strengths][CreateDocumentClassifierModelOptions::l1_regularization_strengths].
    pub fn add_l1_regularization_strength<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.l1_regularization_strengths.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [l2_regularization_strengths][CreateDocumentClassifierModelOptions::l2_regularization_strengths].
    ///
    /// A method you can apply to avoid overfitting your model on the training
    /// data.
    pub fn set_l2_regularization_strengths<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<f64>,
    {
        self.l2_regularization_strengths = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends a value to [l2_regularization_strengths][CreateDocumentClassifierModelOptions::l2_regularization_strengths].
    pub fn add_l2_regularization_strength<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.l2_regularization_strengths.get_or_insert_with(Vec::new).push(v.into());
        self
    }

    /// Sets the value of [training_max_steps][CreateDocumentClassifierModelOptions::training_max_steps].
    ///
    /// Maximum number of training steps to complete. This setting is useful if
    /// you need the training process to finish in a specific time frame to fit
    /// into an automated process.
    pub fn set_training_max_steps<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.training_max_steps = Some(v.into());
        self
    }

    /// Sets or clears the value of [training_max_steps][CreateDocumentClassifierModelOptions::training_max_steps].
    pub fn set_or_clear_training_max_steps<T: std::convert::Into<i64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.training_max_steps = v.map(|x| x.into());
        self
    }

    /// Sets the value of [improvement_ratio][CreateDocumentClassifierModelOptions::improvement_ratio].
    ///
    /// Stops the training run early if the improvement ratio is not met by the
    /// time the process reaches a certain point.
    pub fn set_improvement_ratio<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.improvement_ratio = Some(v.into());
        self
    }

    /// Sets or clears the value of [improvement_ratio][CreateDocumentClassifierModelOptions::improvement_ratio].
    pub fn set_or_clear_improvement_ratio<T: std::convert::Into<f64>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.improvement_ratio = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [CreateDocumentClassifierModelOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<CreateDocumentClassifierModelOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        let name = validator::not_empty("name", self.name)?;
        Ok(CreateDocumentClassifierModelOptions {
            project_id,
            classifier_id,
            name,
            description: self.description,
            learning_rate: self.learning_rate,
            l1_regularization_strengths: self.l1_regularization_strengths,
            l2_regularization_strengths: self.l2_regularization_strengths,
            training_max_steps: self.training_max_steps,
            improvement_ratio: self.improvement_ratio,
        })
    }
}

/// The options for [get_document_classifier_model][crate::client::Discovery::get_document_classifier_model].
///
/// Get details about a specific document classifier model.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct GetDocumentClassifierModelOptions {
    project_id: String,
    classifier_id: String,
    model_id: String,
}

impl GetDocumentClassifierModelOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> GetDocumentClassifierModelOptionsBuilder {
        GetDocumentClassifierModelOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> GetDocumentClassifierModelOptionsBuilder {
        GetDocumentClassifierModelOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            model_id: Some(self.model_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Returns the value of `model_id`.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// A builder for [GetDocumentClassifierModelOptions].
#[derive(Clone, Debug, Default)]
pub struct GetDocumentClassifierModelOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
    model_id: std::option::Option<String>,
}

impl GetDocumentClassifierModelOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        classifier_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            model_id: Some(model_id.into()),
        }
    }

    /// Sets the value of [project_id][GetDocumentClassifierModelOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][GetDocumentClassifierModelOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Sets the value of [model_id][GetDocumentClassifierModelOptions::model_id].
    pub fn set_model_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [GetDocumentClassifierModelOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<GetDocumentClassifierModelOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        let model_id = validator::not_empty("model_id", self.model_id)?;
        Ok(GetDocumentClassifierModelOptions {
            project_id,
            classifier_id,
            model_id,
        })
    }
}

/// The options for [update_document_classifier_model][crate::client::Discovery::update_document_classifier_model].
///
/// Update the document classifier model name or description.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UpdateDocumentClassifierModelOptions {
    project_id: String,
    classifier_id: String,
    model_id: String,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
}

impl UpdateDocumentClassifierModelOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> UpdateDocumentClassifierModelOptionsBuilder {
        UpdateDocumentClassifierModelOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> UpdateDocumentClassifierModelOptionsBuilder {
        UpdateDocumentClassifierModelOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            model_id: Some(self.model_id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Returns the value of `model_id`.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns the value of `name`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the value of `description`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A builder for [UpdateDocumentClassifierModelOptions].
#[derive(Clone, Debug, Default)]
pub struct UpdateDocumentClassifierModelOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
    model_id: std::option::Option<String>,
    name: std::option::Option<String>,
    description: std::option::Option<String>,
}

impl UpdateDocumentClassifierModelOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        classifier_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            model_id: Some(model_id.into()),
            ..Default::default()
        }
    }

    /// Sets the value of [project_id][UpdateDocumentClassifierModelOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][UpdateDocumentClassifierModelOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Sets the value of [model_id][UpdateDocumentClassifierModelOptions::model_id].
    pub fn set_model_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateDocumentClassifierModelOptions::name].
    ///
    /// A new name for the enrichment.
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][UpdateDocumentClassifierModelOptions::name].
    pub fn set_or_clear_name<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][UpdateDocumentClassifierModelOptions::description].
    ///
    /// A new description for the enrichment.
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][UpdateDocumentClassifierModelOptions::description].
    pub fn set_or_clear_description<T: std::convert::Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Validates the values and returns the [UpdateDocumentClassifierModelOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<UpdateDocumentClassifierModelOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        let model_id = validator::not_empty("model_id", self.model_id)?;
        Ok(UpdateDocumentClassifierModelOptions {
            project_id,
            classifier_id,
            model_id,
            name: self.name,
            description: self.description,
        })
    }
}

/// The options for [delete_document_classifier_model][crate::client::Discovery::delete_document_classifier_model].
///
/// Deletes an existing document classifier model from the specified project.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DeleteDocumentClassifierModelOptions {
    project_id: String,
    classifier_id: String,
    model_id: String,
}

impl DeleteDocumentClassifierModelOptions {
    /// Returns a builder with no values set.
    pub fn builder() -> DeleteDocumentClassifierModelOptionsBuilder {
        DeleteDocumentClassifierModelOptionsBuilder::default()
    }

    /// Returns a builder initialized with the values in `self`.
    pub fn to_builder(&self) -> DeleteDocumentClassifierModelOptionsBuilder {
        DeleteDocumentClassifierModelOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            model_id: Some(self.model_id.clone()),
        }
    }

    /// Returns the value of `project_id`.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the value of `classifier_id`.
    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    /// Returns the value of `model_id`.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// A builder for [DeleteDocumentClassifierModelOptions].
#[derive(Clone, Debug, Default)]
pub struct DeleteDocumentClassifierModelOptionsBuilder {
    project_id: std::option::Option<String>,
    classifier_id: std::option::Option<String>,
    model_id: std::option::Option<String>,
}

impl DeleteDocumentClassifierModelOptionsBuilder {
    /// Returns a builder with the required values set.
    pub fn new(
        project_id: impl Into<String>,
        classifier_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            model_id: Some(model_id.into()),
        }
    }

    /// Sets the value of [project_id][DeleteDocumentClassifierModelOptions::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [classifier_id][DeleteDocumentClassifierModelOptions::classifier_id].
    pub fn set_classifier_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.classifier_id = Some(v.into());
        self
    }

    /// Sets the value of [model_id][DeleteDocumentClassifierModelOptions::model_id].
    pub fn set_model_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.model_id = Some(v.into());
        self
    }

    /// Validates the values and returns the [DeleteDocumentClassifierModelOptions].
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error if a required value is missing or
    /// empty.
    pub fn build(self) -> Result<DeleteDocumentClassifierModelOptions> {
        let project_id = validator::not_empty("project_id", self.project_id)?;
        let classifier_id = validator::not_empty("classifier_id", self.classifier_id)?;
        let model_id = validator::not_empty("model_id", self.model_id)?;
        Ok(DeleteDocumentClassifierModelOptions {
            project_id,
            classifier_id,
            model_id,
        })
    }
}
