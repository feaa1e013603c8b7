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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the client library.
///
/// Options builders, request bindings, and response decoding all report
/// problems with this type. Most applications will just return the error or
/// log it, without any further action. Applications that need to react to
/// specific problems can use the predicates to determine the error kind, and
/// query the [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use discovery_gax::error::Error;
/// use discovery_gax::validator::ValidationError;
/// match example_function() {
///     Err(e) if e.is_invalid_argument() => { println!("fix the options {e}"); },
///     Err(e) if e.is_io() => { println!("cannot read the payload {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::invalid_argument(ValidationError::Empty("project_id")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a precondition violation.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use discovery_gax::error::Error;
    /// use discovery_gax::validator::ValidationError;
    /// let error = Error::invalid_argument(ValidationError::Missing("name"));
    /// assert!(error.is_invalid_argument());
    /// assert!(error.source().is_some());
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
        }
    }

    /// The options were missing required fields, or the fields violate a
    /// constraint.
    ///
    /// # Troubleshooting
    ///
    /// This always indicates a problem in the application. The error message
    /// names the field that was not initialized, or the constraint that the
    /// fields do not satisfy. Set the field in the builder before calling
    /// `build()`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Creates an error representing a local I/O problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use discovery_gax::error::Error;
    /// let error = Error::io(std::io::Error::from(std::io::ErrorKind::NotFound));
    /// assert!(error.is_io());
    /// assert!(error.source().is_some());
    /// ```
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// A local resource, such as a file used as an upload payload, could not
    /// be read.
    ///
    /// # Troubleshooting
    ///
    /// Verify the path exists and the application has permissions to read it.
    /// The [source][std::error::Error::source] is the original
    /// [std::io::Error].
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request body could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. The serialization is deterministic, so the same
    /// options will fail again.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The models tolerate unknown fields and unknown enumeration values, so
    /// this error means the payload is not JSON, or a known field has an
    /// unexpected JSON type. The most common cause is handing an error page
    /// or a truncated body to the decoder.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Returns the source of the error if it is of type `T`.
    ///
    /// # Example
    /// ```
    /// use discovery_gax::error::Error;
    /// use discovery_gax::validator::ValidationError;
    /// let error = Error::invalid_argument(ValidationError::Empty("project_id"));
    /// let inner = error.as_inner::<ValidationError>();
    /// assert!(matches!(inner, Some(ValidationError::Empty("project_id"))));
    /// ```
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_ref()?.as_ref() as &(dyn StdError + 'static);
        loop {
            match error.downcast_ref::<T>() {
                Some(e) => return Some(e),
                None => error = error.source()?,
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidArgument, Some(e)) => {
                write!(f, "invalid argument: {e}")
            }
            (ErrorKind::Io, Some(e)) => write!(f, "cannot read local resource: {e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn StdError)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    InvalidArgument,
    Io,
    Serialization,
    Deserialization,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ValidationError;

    #[test]
    fn invalid_argument() {
        let error = Error::invalid_argument(ValidationError::Empty("project_id"));
        assert!(error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error.as_inner::<ValidationError>();
        assert!(
            matches!(got, Some(ValidationError::Empty("project_id"))),
            "{error:?}"
        );
        assert!(error.to_string().contains("project_id"), "{error}");
    }

    #[test]
    fn io() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = Error::io(source);
        assert!(error.is_io(), "{error:?}");
        assert!(!error.is_invalid_argument(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .map(|e| e.kind());
        assert_eq!(got, Some(std::io::ErrorKind::NotFound), "{error:?}");
        assert!(error.to_string().contains("no such file"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("simulated problem");
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("simulated problem"), "{error}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser("simulated problem");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated problem"), "{error}");
        assert!(error.as_inner::<ValidationError>().is_none(), "{error:?}");
    }
}
