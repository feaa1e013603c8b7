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

use crate::Result;
use crate::error::Error;
use crate::validator;

/// The default endpoint for the Discovery service.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";

/// The default service name, used to find configuration in the environment.
pub const DEFAULT_SERVICE_NAME: &str = "discovery";

const LOGGING_VAR: &str = "DISCOVERY_RUST_LOGGING";

/// Configure a client.
///
/// A client library configuration holds the API version date sent with each
/// request, the endpoint for the service, and the logging switch. The
/// version is required, all the other settings have defaults that work for
/// most applications.
///
/// # Example
/// ```
/// # use discovery_gax::client_config::ClientConfig;
/// let config = ClientConfig::new("2023-03-31")?
///     .set_service_url("https://api.eu-de.discovery.watson.cloud.ibm.com")?
///     .enable_tracing();
/// assert_eq!(config.version(), "2023-03-31");
/// # discovery_gax::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    version: String,
    service_url: String,
    service_name: String,
    tracing: bool,
}

impl ClientConfig {
    /// Returns a [ClientConfig] for the given API version date.
    ///
    /// Fails if `version` is empty.
    pub fn new<T: Into<String>>(version: T) -> Result<Self> {
        let version = validator::not_empty("version", Some(version.into()))?;
        Ok(Self {
            version,
            service_url: DEFAULT_SERVICE_URL.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            tracing: false,
        })
    }

    /// The API version date, sent as the `version` query parameter.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The base URL for all requests.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The service name used to find overrides in the environment.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Sets an endpoint that overrides the default endpoint for the service.
    ///
    /// Fails if `v` is not an absolute URL.
    pub fn set_service_url<T: Into<String>>(mut self, v: T) -> Result<Self> {
        let v = v.into();
        url::Url::parse(&v).map_err(Error::invalid_argument)?;
        self.service_url = v.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Sets the service name used by [with_env_overrides][Self::with_env_overrides].
    pub fn set_service_name<T: Into<String>>(mut self, v: T) -> Self {
        self.service_name = v.into();
        self
    }

    /// Applies the overrides found in the environment.
    ///
    /// If `<SERVICE_NAME>_URL` is set (e.g. `DISCOVERY_URL`), its value
    /// replaces the service URL.
    pub fn with_env_overrides(self) -> Result<Self> {
        let var = format!(
            "{}_URL",
            self.service_name.to_ascii_uppercase().replace('-', "_")
        );
        match std::env::var(&var) {
            Ok(v) if !v.is_empty() => {
                tracing::debug!("service URL overridden by {var}");
                self.set_service_url(v)
            }
            _ => Ok(self),
        }
    }

    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ValidationError;

    type Result = anyhow::Result<()>;

    #[test]
    fn defaults() -> Result {
        let config = ClientConfig::new("2023-03-31")?;
        assert_eq!(config.version(), "2023-03-31");
        assert_eq!(config.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(config.service_name(), "discovery");
        Ok(())
    }

    #[test]
    fn empty_version() {
        let err = ClientConfig::new("").unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert_eq!(
            err.as_inner::<ValidationError>(),
            Some(&ValidationError::Empty("version"))
        );
    }

    #[test]
    fn service_url() -> Result {
        let config =
            ClientConfig::new("2023-03-31")?.set_service_url("https://example.com/api/")?;
        assert_eq!(config.service_url(), "https://example.com/api");

        let err = ClientConfig::new("2023-03-31")?
            .set_service_url("not a url")
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    // These tests must run serially because `std::env::remove_var` and
    // `std::env::set_var` are unsafe otherwise.
    #[test]
    #[serial_test::serial]
    fn config_tracing() -> Result {
        unsafe {
            std::env::remove_var(LOGGING_VAR);
        }
        let config = ClientConfig::new("2023-03-31")?;
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        let config = config.enable_tracing();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");
        let config = config.disable_tracing();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");

        unsafe {
            std::env::set_var(LOGGING_VAR, "true");
        }
        let config = ClientConfig::new("2023-03-31")?;
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        unsafe {
            std::env::set_var(LOGGING_VAR, "not-true");
        }
        let config = ClientConfig::new("2023-03-31")?;
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        unsafe {
            std::env::remove_var(LOGGING_VAR);
        }
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn env_overrides() -> Result {
        unsafe {
            std::env::set_var("MY_DISCOVERY_URL", "https://private.example.com");
        }
        let config = ClientConfig::new("2023-03-31")?
            .set_service_name("my-discovery")
            .with_env_overrides()?;
        assert_eq!(config.service_url(), "https://private.example.com");

        unsafe {
            std::env::remove_var("MY_DISCOVERY_URL");
        }
        let config = ClientConfig::new("2023-03-31")?
            .set_service_name("my-discovery")
            .with_env_overrides()?;
        assert_eq!(config.service_url(), DEFAULT_SERVICE_URL);
        Ok(())
    }
}
