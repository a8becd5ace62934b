use std::collections::HashMap;
use std::str::FromStr;

use super::client::BuildError;

const DEFAULT_BASE_URL: &str = "https://app.launchdarkly.com";
const FEDERAL_BASE_URL: &str = "https://app.launchdarkly.us";

/// Specifies the base URLs the client sends requests to.
#[derive(Clone, Debug)]
pub struct ServiceEndpoints {
    base_url: String,
    operation_base_urls: HashMap<String, String>,
}

impl ServiceEndpoints {
    /// Returns the base URL used by every operation without an override.
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Returns the base URL used for the operation with the given identifier.
    pub fn base_url_for(&self, operation_id: &str) -> &str {
        self.operation_base_urls
            .get(operation_id)
            .map_or(self.base_url.as_ref(), String::as_str)
    }
}

/// Used for configuring the API base URLs.
///
/// The default behavior, if you do not change any of these properties, is that the client will
/// connect to the standard commercial LaunchDarkly instance. There are several use cases for
/// changing these properties:
///
/// - Your account lives on the LaunchDarkly federal instance. In this case, use
///   [ServiceEndpointsBuilder::federal].
///
/// - You are connecting to a private instance of LaunchDarkly, or to a test fixture that
///   simulates the API. In this case, use [ServiceEndpointsBuilder::base_url].
///
/// - A single operation must be routed somewhere else than the rest of the API. In this case,
///   use [ServiceEndpointsBuilder::operation_base_url] with the identifier of the operation as
///   it appears in the LaunchDarkly API documentation (e.g. `getAIConfig`).
///
/// # Examples
///
/// Configure for the federal instance.
/// ```
/// # use launchdarkly_api_client::{ServiceEndpointsBuilder, ConfigBuilder};
/// # fn main() {
///     ConfigBuilder::new().service_endpoints(ServiceEndpointsBuilder::new().federal());
/// # }
/// ```
///
/// Route one operation to a different host.
/// ```
/// # use launchdarkly_api_client::{ServiceEndpointsBuilder, ConfigBuilder};
/// # fn main() {
///    ConfigBuilder::new().service_endpoints(ServiceEndpointsBuilder::new()
///         .base_url("https://app.my-private-instance.com")
///         .operation_base_url("getIps", "https://ips.my-private-instance.com"));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ServiceEndpointsBuilder {
    base_url: Option<String>,
    operation_base_urls: HashMap<String, String>,
}

impl ServiceEndpointsBuilder {
    /// Create a new instance of [ServiceEndpointsBuilder] with no URLs specified.
    pub fn new() -> ServiceEndpointsBuilder {
        ServiceEndpointsBuilder {
            base_url: None,
            operation_base_urls: HashMap::new(),
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(&mut self, url: &str) -> &mut Self {
        self.base_url = Some(String::from(url));
        self
    }

    /// Use the LaunchDarkly federal instance.
    pub fn federal(&mut self) -> &mut Self {
        self.base_url(FEDERAL_BASE_URL)
    }

    /// Sets a custom base URL for a single operation.
    pub fn operation_base_url(&mut self, operation_id: &str, url: &str) -> &mut Self {
        self.operation_base_urls
            .insert(String::from(operation_id), String::from(url));
        self
    }

    /// Called internally by the client to create a configuration instance. Applications do not
    /// need to call this method.
    ///
    /// # Errors
    ///
    /// Every URL must parse as an absolute URI with a scheme and a host.
    pub fn build(&self) -> Result<ServiceEndpoints, BuildError> {
        let base_url = match &self.base_url {
            Some(url) => normalize(url)?,
            None => String::from(DEFAULT_BASE_URL),
        };

        let operation_base_urls = self
            .operation_base_urls
            .iter()
            .map(|(operation_id, url)| Ok((operation_id.clone(), normalize(url)?)))
            .collect::<Result<HashMap<_, _>, BuildError>>()?;

        Ok(ServiceEndpoints {
            base_url,
            operation_base_urls,
        })
    }
}

impl Default for ServiceEndpointsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(url: &str) -> Result<String, BuildError> {
    let trimmed = url.trim_end_matches('/');
    let uri = hyper::Uri::from_str(trimmed)
        .map_err(|_| BuildError::InvalidConfig(format!("Invalid base url provided: {}", url)))?;

    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(BuildError::InvalidConfig(format!(
            "Base url must include a scheme and a host: {}",
            url
        )));
    }

    Ok(trimmed.to_string())
}
