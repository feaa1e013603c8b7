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

//! Defines upload data sources.

use crate::Result;
use crate::error::Error;
use crate::validator::ValidationError;
use std::path::Path;

/// The contents of a local file, and the name used to upload it.
///
/// The document, analyze, enrichment, and classifier operations upload
/// files as parts of a `multipart/form-data` body. The service uses the
/// filename to detect the file type, so options that carry a file also carry
/// its name. Loading the file through this type keeps both in sync.
///
/// # Example
/// ```
/// # use discovery_gax::upload_source::FileSource;
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("contract.json");
/// std::fs::write(&path, r#"{"title": "Contract"}"#)?;
/// let source = FileSource::from_path(&path)?;
/// assert_eq!(source.filename(), "contract.json");
/// assert_eq!(source.content().len(), 21);
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FileSource {
    content: bytes::Bytes,
    filename: String,
}

impl FileSource {
    /// Reads the file at `path`.
    ///
    /// Fails with an [io][Error::is_io] error if the file cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::invalid_argument(ValidationError::Constraint("path must name a file"))
            })?;
        let content = std::fs::read(path).map_err(Error::io)?;
        tracing::debug!(path = %path.display(), size = content.len(), "loaded upload payload");
        Ok(Self {
            content: bytes::Bytes::from(content),
            filename,
        })
    }

    pub fn content(&self) -> &bytes::Bytes {
        &self.content
    }

    /// The final component of the path the file was read from.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Consumes the source, returning the content and the filename.
    pub fn into_parts(self) -> (bytes::Bytes, String) {
        (self.content, self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path() -> anyhow::Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        std::fs::write(file.path(), "the quick brown fox")?;
        let source = FileSource::from_path(file.path())?;
        let want = file
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        assert_eq!(Some(source.filename().to_string()), want);
        let (content, _) = source.into_parts();
        assert_eq!(content, bytes::Bytes::from_static(b"the quick brown fox"));
        Ok(())
    }

    #[test]
    fn missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let err = FileSource::from_path(dir.path().join("missing.pdf")).unwrap_err();
        assert!(err.is_io(), "{err:?}");
        let kind = err.as_inner::<std::io::Error>().map(|e| e.kind());
        assert_eq!(kind, Some(std::io::ErrorKind::NotFound));
        Ok(())
    }

    #[test]
    fn no_filename() {
        let err = FileSource::from_path("/").unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }
}
