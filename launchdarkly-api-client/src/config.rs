use std::sync::Arc;

use crate::credentials::{ApiKey, CredentialProvider};
use crate::transport::HttpTransport;
use crate::ServiceEndpointsBuilder;

/// Immutable configuration object for [crate::Client].
///
/// [Config] instances can be created using a [ConfigBuilder].
pub struct Config {
    service_endpoints_builder: ServiceEndpointsBuilder,
    credentials: Option<Arc<dyn CredentialProvider>>,
    default_headers: Vec<(String, String)>,
    user_agent: String,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Config {
    /// Returns the [ServiceEndpointsBuilder]
    pub fn service_endpoints_builder(&self) -> &ServiceEndpointsBuilder {
        &self.service_endpoints_builder
    }

    /// Returns the credential provider, if one was configured
    pub fn credentials(&self) -> Option<&Arc<dyn CredentialProvider>> {
        self.credentials.as_ref()
    }

    /// Returns the headers added to every request
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the user agent sent with every request
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the custom transport, if one was configured
    pub fn transport(&self) -> Option<&Arc<dyn HttpTransport>> {
        self.transport.as_ref()
    }
}

/// Used to create a [Config] struct for creating [crate::Client] instances.
///
/// # Examples
///
/// Authenticate with an access token and talk to the federal instance.
/// ```
/// # use launchdarkly_api_client::{ConfigBuilder, ServiceEndpointsBuilder};
/// # fn main() {
///     let config = ConfigBuilder::new()
///         .api_key("api-0123")
///         .service_endpoints(ServiceEndpointsBuilder::new().federal())
///         .default_header("X-Request-Source", "deploy-pipeline")
///         .build();
/// # }
/// ```
pub struct ConfigBuilder {
    service_endpoints_builder: Option<ServiceEndpointsBuilder>,
    credentials: Option<Arc<dyn CredentialProvider>>,
    default_headers: Vec<(String, String)>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ConfigBuilder {
    /// Create a new instance of the [ConfigBuilder] with no credentials.
    pub fn new() -> Self {
        Self {
            service_endpoints_builder: None,
            credentials: None,
            default_headers: Vec::new(),
            user_agent: None,
            transport: None,
        }
    }

    /// Authenticate every request with the provided access token.
    ///
    /// This is shorthand for `credentials(ApiKey::new(api_key))`.
    pub fn api_key(self, api_key: &str) -> Self {
        self.credentials(ApiKey::new(api_key))
    }

    /// Set the provider of the `Authorization` header. For usage see [ApiKey].
    pub fn credentials(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    /// Set the URLs to use for this client. For usage see [ServiceEndpointsBuilder]
    pub fn service_endpoints(mut self, builder: &ServiceEndpointsBuilder) -> Self {
        self.service_endpoints_builder = Some(builder.clone());
        self
    }

    /// Add a header which will be sent with every request.
    ///
    /// Header names and values are validated when the client is built.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Replace the default `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Set the HTTP transport requests are sent through.
    ///
    /// By default, the client uses a [hyper::Client] with an HTTPS connector backed by the
    /// system's native certificate store.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Create a new instance of [Config] based on the [ConfigBuilder] configuration.
    pub fn build(self) -> Config {
        let service_endpoints_builder = match &self.service_endpoints_builder {
            None => ServiceEndpointsBuilder::new(),
            Some(service_endpoints_builder) => service_endpoints_builder.clone(),
        };

        if self.credentials.is_none() {
            warn!("No credentials configured; requests will be sent without an Authorization header");
        }

        let user_agent = match self.user_agent {
            Some(user_agent) => user_agent,
            None => crate::USER_AGENT.clone(),
        };

        Config {
            service_endpoints_builder,
            credentials: self.credentials,
            default_headers: self.default_headers,
            user_agent,
            transport: self.transport,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_configured_with_custom_endpoints() {
        let builder = ConfigBuilder::new().service_endpoints(
            ServiceEndpointsBuilder::new().base_url("http://my-private-instance:8080"),
        );

        let endpoints = builder.service_endpoints_builder.unwrap().build().unwrap();
        assert_eq!(endpoints.base_url(), "http://my-private-instance:8080");
    }

    #[test]
    fn unconfigured_builder_uses_defaults() {
        let config = ConfigBuilder::new().build();

        assert!(config.credentials().is_none());
        assert!(config.transport().is_none());
        assert!(config.default_headers().is_empty());
        assert_eq!(crate::USER_AGENT.as_str(), config.user_agent());
        assert_eq!(
            "https://app.launchdarkly.com",
            config.service_endpoints_builder().build().unwrap().base_url()
        );
    }

    #[test]
    fn api_key_configures_credentials() {
        let config = ConfigBuilder::new().api_key("api-0123").build();

        let authorization = config.credentials().and_then(|c| c.authorization());
        assert_eq!(Some("api-0123".to_string()), authorization);
    }

    #[test]
    fn default_headers_keep_insertion_order() {
        let config = ConfigBuilder::new()
            .default_header("X-First", "1")
            .default_header("X-Second", "2")
            .user_agent("my-integration/1.0")
            .build();

        assert_eq!(
            &[
                ("X-First".to_string(), "1".to_string()),
                ("X-Second".to_string(), "2".to_string())
            ],
            config.default_headers()
        );
        assert_eq!("my-integration/1.0", config.user_agent());
    }
}
