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

use discovery_gax::error::Error;

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf error")
        }
    }

    impl std::error::Error for LeafError {}

    #[derive(Debug)]
    struct MiddleError {
        pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    }

    impl std::fmt::Display for MiddleError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "middle error")
        }
    }

    impl std::error::Error for MiddleError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.source.as_ref().map(|e| e.as_ref() as _)
        }
    }

    #[test]
    fn downcast() -> anyhow::Result<()> {
        let middle_err = MiddleError {
            source: Some(Box::new(LeafError::default())),
        };
        let root_err = Error::io(middle_err);
        assert!(root_err.is_io(), "{root_err:?}");
        let msg = root_err.as_inner::<LeafError>().map(LeafError::hey);
        assert_eq!(msg, Some("hey"));

        let root_err = Error::io(MiddleError { source: None });
        assert!(root_err.as_inner::<LeafError>().is_none());
        assert!(root_err.as_inner::<MiddleError>().is_some());
        Ok(())
    }

    #[test]
    fn display_includes_source() {
        let err = Error::invalid_argument(LeafError::default());
        assert!(err.to_string().contains("leaf error"), "{err}");
        let err = Error::deser(LeafError::default());
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.to_string().contains("leaf error"), "{err}");
    }

    #[test]
    fn source_chain() {
        use std::error::Error as _;
        let err = Error::io(MiddleError {
            source: Some(Box::new(LeafError::default())),
        });
        let source = err.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("middle error"));
    }
}
