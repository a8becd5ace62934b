use std::sync::Arc;

use hyper::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use hyper::{Body, HeaderMap, Request, Uri};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::apis::{AccountMembersApi, AiConfigsApi, CodeRefsApi, FeatureFlagsApi, OtherApi};
use super::config::Config;
use super::credentials::CredentialProvider;
use super::error::Error as ApiError;
use super::operation::Operation;
use super::request::ApiRequest;
use super::response::ApiResponse;
use super::service_endpoints::ServiceEndpoints;
use super::transport::{default_transport, HttpTransport};

/// Error type used to represent failures when building a [Client] instance.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    /// Error used when a configuration setting is invalid. This typically indicates an invalid
    /// URL or header.
    #[error("invalid client config: {0}")]
    InvalidConfig(String),
}

struct ClientInner {
    endpoints: ServiceEndpoints,
    credentials: Option<Arc<dyn CredentialProvider>>,
    default_headers: HeaderMap,
    user_agent: HeaderValue,
    transport: Arc<dyn HttpTransport>,
}

/// A client for the LaunchDarkly REST API.
///
/// In order to create a client instance you must first create a [crate::Config]. The client is
/// cheap to clone; clones share the same configuration and transport and can be used from
/// any number of tasks at once.
///
/// # Examples
///
/// Creating a client, with default configuration.
/// ```
/// # use launchdarkly_api_client::{Client, ConfigBuilder, BuildError};
/// # fn main() -> Result<(), BuildError> {
///     let client = Client::build(ConfigBuilder::new().api_key("api-key").build())?;
/// #   Ok(())
/// # }
/// ```
///
/// Creating an instance which talks to the federal instance.
/// ```
/// # use launchdarkly_api_client::{Client, ConfigBuilder, ServiceEndpointsBuilder, BuildError};
/// # fn main() -> Result<(), BuildError> {
///     let client = Client::build(ConfigBuilder::new()
///         .api_key("api-key")
///         .service_endpoints(ServiceEndpointsBuilder::new().federal())
///         .build()
///     )?;
/// #   Ok(())
/// # }
/// ```
///
/// Operations are grouped the way the API documentation groups them; see [Client::feature_flags],
/// [Client::account_members] and friends.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// Create a new instance of a [Client] based on the provided [Config] parameter.
    pub fn build(config: Config) -> Result<Self, BuildError> {
        let endpoints = config.service_endpoints_builder().build()?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in config.default_headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                BuildError::InvalidConfig(format!("invalid header name {:?}: {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                BuildError::InvalidConfig(format!("invalid value for header {}: {}", name, e))
            })?;
            default_headers.append(header_name, header_value);
        }

        let user_agent = HeaderValue::from_str(config.user_agent())
            .map_err(|e| BuildError::InvalidConfig(format!("invalid user agent: {}", e)))?;

        let transport = match config.transport() {
            Some(transport) => transport.clone(),
            None => default_transport(),
        };

        debug!("Client configured for {}", endpoints.base_url());

        Ok(Client {
            inner: Arc::new(ClientInner {
                endpoints,
                credentials: config.credentials().cloned(),
                default_headers,
                user_agent,
                transport,
            }),
        })
    }

    /// Operations on AI Configs. These are in beta and require [crate::apis::LdApiVersion].
    pub fn ai_configs(&self) -> AiConfigsApi {
        AiConfigsApi::new(self.clone())
    }

    /// Operations on the members of the account.
    pub fn account_members(&self) -> AccountMembersApi {
        AccountMembersApi::new(self.clone())
    }

    /// Operations on code reference repositories and statistics.
    pub fn code_refs(&self) -> CodeRefsApi {
        CodeRefsApi::new(self.clone())
    }

    /// Operations on feature flags.
    pub fn feature_flags(&self) -> FeatureFlagsApi {
        FeatureFlagsApi::new(self.clone())
    }

    /// The API root and the public IP list.
    pub fn other(&self) -> OtherApi {
        OtherApi::new(self.clone())
    }

    /// Sends the request and decodes a successful response body as `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static Operation,
        request: ApiRequest,
    ) -> Result<(T, ApiResponse), ApiError> {
        let response = self.send(operation, request).await?;
        if !response.is_success() {
            return Err(operation_error(operation, response));
        }

        let decoded = serde_json::from_slice::<T>(response.body());
        match decoded {
            Ok(value) => Ok((value, response)),
            Err(source) => {
                debug!("{} returned a body that could not be decoded: {}", operation.id, source);
                Err(ApiError::Decode { response, source })
            }
        }
    }

    /// Sends the request for an operation which has no response payload.
    pub(crate) async fn execute_no_content(
        &self,
        operation: &'static Operation,
        request: ApiRequest,
    ) -> Result<ApiResponse, ApiError> {
        let response = self.send(operation, request).await?;
        if !response.is_success() {
            return Err(operation_error(operation, response));
        }
        Ok(response)
    }

    async fn send(
        &self,
        operation: &'static Operation,
        request: ApiRequest,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.prepare_request(operation, request)?;
        debug!("{} {} ({})", request.method(), request.uri(), operation.id);

        let response = self
            .inner
            .transport
            .send(request)
            .await
            .map_err(ApiError::Transport)?;

        let (parts, body) = response.into_parts();
        let body = hyper::body::to_bytes(body)
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        let response = ApiResponse::new(parts.status, parts.headers, body);
        debug!("{} responded with {}", operation.id, response.status_text());

        Ok(response)
    }

    pub(crate) fn prepare_request(
        &self,
        operation: &Operation,
        request: ApiRequest,
    ) -> Result<Request<Body>, ApiError> {
        let url = format!(
            "{}{}",
            self.inner.endpoints.base_url_for(operation.id),
            request.path_and_query()
        );
        let uri = url
            .parse::<Uri>()
            .map_err(|e| ApiError::InvalidRequest(format!("invalid URL {}: {}", url, e)))?;

        let mut headers = self.inner.default_headers.clone();
        headers.insert(USER_AGENT, self.inner.user_agent.clone());

        if let Some(accept) = operation.accept_header() {
            headers.insert(ACCEPT, header_value(&accept)?);
        }

        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            headers.insert(name, header_value(value)?);
        }

        if let Some(authorization) = self
            .inner
            .credentials
            .as_ref()
            .and_then(|credentials| credentials.authorization())
        {
            let mut value = header_value(&authorization)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let body = match request.body {
            Some(body) => {
                if let Some(content_type) = operation.content_type(body.content_type) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
                }
                Body::from(body.bytes)
            }
            None => Body::empty(),
        };

        let mut http_request = Request::new(body);
        *http_request.method_mut() = operation.method.clone();
        *http_request.uri_mut() = uri;
        *http_request.headers_mut() = headers;

        Ok(http_request)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Maps an unsuccessful response onto the error shape the operation declares for its status.
fn operation_error(operation: &Operation, response: ApiResponse) -> ApiError {
    let kind = match operation.error_kind(response.status()) {
        Some(kind) => kind,
        None => return ApiError::Http { response },
    };

    let decoded = kind.decode(response.body());
    match decoded {
        Ok(body) => ApiError::Api { response, body },
        Err(source) => ApiError::Decode { response, source },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ErrorKind, GenericErrorRep};
    use crate::operation::{APPLICATION_JSON, SEMANTIC_PATCH};
    use crate::query::QueryParams;
    use crate::test_common::{client_for, UnreachableTransport};
    use crate::{ApiErrorBody, ApiKey, ConfigBuilder, ServiceEndpointsBuilder};
    use hyper::Method;
    use test_case::test_case;

    static GET_THING: Operation = Operation {
        id: "getThing",
        method: Method::GET,
        path: "/api/v2/things/{key}",
        accepts: &[APPLICATION_JSON],
        content_types: &[],
        errors: &[(404, ErrorKind::NotFound), (500, ErrorKind::Generic)],
    };

    static PATCH_THING: Operation = Operation {
        id: "patchThing",
        method: Method::PATCH,
        path: "/api/v2/things/{key}",
        accepts: &[APPLICATION_JSON],
        content_types: &[APPLICATION_JSON, SEMANTIC_PATCH],
        errors: &[(422, ErrorKind::UnprocessableEntity)],
    };

    fn offline_client(config: ConfigBuilder) -> Client {
        let mut endpoints = ServiceEndpointsBuilder::new();
        endpoints
            .base_url("https://ld.example.com/")
            .operation_base_url("patchThing", "https://patch.example.com");
        Client::build(
            config
                .service_endpoints(&endpoints)
                .transport(UnreachableTransport::default())
                .build(),
        )
        .expect("client should build")
    }

    #[test]
    fn prepared_requests_carry_url_and_standard_headers() {
        let client = offline_client(ConfigBuilder::new().api_key("api-123"));
        let request = ApiRequest::new("/api/v2/things/a%2Fb".into())
            .query(QueryParams::new().push("limit", 20));

        let prepared = client.prepare_request(&GET_THING, request).unwrap();

        assert_eq!(Method::GET, prepared.method());
        assert_eq!(
            "https://ld.example.com/api/v2/things/a%2Fb?limit=20",
            prepared.uri().to_string()
        );
        assert_eq!("api-123", prepared.headers()[AUTHORIZATION]);
        assert_eq!("application/json", prepared.headers()[ACCEPT]);
        assert_eq!(crate::USER_AGENT.as_str(), prepared.headers()[USER_AGENT]);
        assert!(prepared.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn operation_overrides_change_the_base_url() {
        let client = offline_client(ConfigBuilder::new());
        let prepared = client
            .prepare_request(&PATCH_THING, ApiRequest::new("/api/v2/things/x".into()))
            .unwrap();

        assert_eq!(Method::PATCH, prepared.method());
        assert_eq!("https://patch.example.com/api/v2/things/x", prepared.uri().to_string());
    }

    #[test]
    fn missing_credentials_send_no_authorization_header() {
        let client = offline_client(ConfigBuilder::new().credentials(ApiKey::new("")));
        let prepared = client
            .prepare_request(&GET_THING, ApiRequest::new("/api/v2/things/x".into()))
            .unwrap();

        assert!(prepared.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn prefixed_credentials_are_marked_sensitive() {
        let client =
            offline_client(ConfigBuilder::new().credentials(ApiKey::new("abc").with_prefix("Bearer")));
        let prepared = client
            .prepare_request(&GET_THING, ApiRequest::new("/".into()))
            .unwrap();

        let authorization = &prepared.headers()[AUTHORIZATION];
        assert_eq!("Bearer abc", authorization.to_str().unwrap());
        assert!(authorization.is_sensitive());
    }

    #[test_case(None, APPLICATION_JSON)]
    #[test_case(Some(SEMANTIC_PATCH), SEMANTIC_PATCH)]
    fn content_type_follows_the_body(requested: Option<&'static str>, expected: &str) {
        let client = offline_client(ConfigBuilder::new());
        let request = ApiRequest::new("/api/v2/things/x".into());
        let request = match requested {
            Some(content_type) => request.json_as(content_type, &json!({"instructions": []})),
            None => request.json(&json!([])),
        }
        .unwrap();

        let prepared = client.prepare_request(&PATCH_THING, request).unwrap();
        assert_eq!(expected, prepared.headers()[CONTENT_TYPE]);
    }

    #[test]
    fn operation_headers_and_default_headers_are_sent() {
        let client = offline_client(
            ConfigBuilder::new()
                .default_header("X-Request-Source", "ci")
                .user_agent("deploy-bot/1.0"),
        );
        let request = ApiRequest::new("/".into()).header("LD-API-Version", "beta");

        let prepared = client.prepare_request(&GET_THING, request).unwrap();

        assert_eq!("beta", prepared.headers()["ld-api-version"]);
        assert_eq!("ci", prepared.headers()["x-request-source"]);
        assert_eq!("deploy-bot/1.0", prepared.headers()[USER_AGENT]);
    }

    #[test]
    fn invalid_operation_header_values_are_rejected() {
        let client = offline_client(ConfigBuilder::new());
        let request = ApiRequest::new("/".into()).header("LD-API-Version", "beta\n");

        let result = client.prepare_request(&GET_THING, request);
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[test_case("Bad Header", "value")]
    #[test_case("X-Good", "bad\nvalue")]
    fn invalid_default_headers_fail_the_build(name: &str, value: &str) {
        let result = Client::build(
            ConfigBuilder::new()
                .default_header(name, value)
                .transport(UnreachableTransport::default())
                .build(),
        );
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn invalid_base_url_fails_the_build() {
        let mut endpoints = ServiceEndpointsBuilder::new();
        endpoints.base_url("not a url");
        let result = Client::build(ConfigBuilder::new().service_endpoints(&endpoints).build());
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn transport_failures_are_passed_through() {
        let transport = UnreachableTransport::default();
        let client = Client::build(ConfigBuilder::new().transport(transport.clone()).build())
            .expect("client should build");

        let result = client
            .execute::<serde_json::Value>(&GET_THING, ApiRequest::new("/api/v2/things/x".into()))
            .await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
        assert_eq!(1, transport.calls());
    }

    #[tokio::test]
    async fn generic_error_shapes_decode_from_the_table() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/things/x")
            .with_status(500)
            .with_body(r#"{"code": "internal_error", "message": "Something broke", "id": "req-9"}"#)
            .create_async()
            .await;

        let result = client_for(&server)
            .execute::<serde_json::Value>(&GET_THING, ApiRequest::new("/api/v2/things/x".into()))
            .await;

        mock.assert_async().await;
        match result {
            Err(ApiError::Api { response, body }) => {
                assert_eq!(500, response.status());
                assert_eq!(
                    ApiErrorBody::Generic(GenericErrorRep {
                        code: "internal_error".into(),
                        message: "Something broke".into(),
                        id: Some("req-9".into()),
                    }),
                    body
                );
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unprocessable_patches_decode_their_error_shape() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/things/x")
            .match_header("content-type", APPLICATION_JSON)
            .with_status(422)
            .with_body(r#"{"code": "unprocessable_entity", "message": "Path does not exist"}"#)
            .create_async()
            .await;

        let request = ApiRequest::new("/api/v2/things/x".into())
            .json(&json!([{"op": "remove", "path": "/missing"}]))
            .unwrap();
        let error = client_for(&server)
            .execute::<serde_json::Value>(&PATCH_THING, request)
            .await
            .expect_err("request should fail");

        mock.assert_async().await;
        match error {
            ApiError::Api { response, body } => {
                assert_eq!(422, response.status());
                assert_eq!(ErrorKind::UnprocessableEntity, body.kind());
                assert_eq!(Some("unprocessable_entity"), body.code());
                assert_eq!(Some("Path does not exist"), body.message());
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_error_bodies_keep_the_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/things/x")
            .with_status(404)
            .with_body("<html>not here</html>")
            .create_async()
            .await;

        let result = client_for(&server)
            .execute::<serde_json::Value>(&GET_THING, ApiRequest::new("/api/v2/things/x".into()))
            .await;

        match result {
            Err(ApiError::Decode { response, .. }) => {
                assert_eq!(404, response.status());
                assert_eq!("<html>not here</html>", response.text());
            }
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn redirects_are_not_successes() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/things/x")
            .with_status(302)
            .with_header("Location", "/elsewhere")
            .create_async()
            .await;

        let result = client_for(&server)
            .execute_no_content(&GET_THING, ApiRequest::new("/api/v2/things/x".into()))
            .await;

        match result {
            Err(ApiError::Http { response }) => {
                assert_eq!(302, response.status());
                assert_eq!(Some("/elsewhere"), response.header("location"));
            }
            other => panic!("expected an HTTP error, got {:?}", other),
        }
    }
}
