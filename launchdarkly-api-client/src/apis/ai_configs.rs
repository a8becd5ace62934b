use super::LdApiVersion;
use hyper::Method;
use crate::error::Error;
use crate::models::{
    AiConfig, AiConfigPatch, AiConfigPost, AiConfigVariation, AiConfigVariationPost,
    AiConfigVariationsResponse, AiConfigs, ErrorKind,
};
use crate::operation::{Operation, APPLICATION_JSON};
use crate::path::build_path;
use crate::query::QueryParams;
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::{Client, LD_API_VERSION_HEADER};

const AI_CONFIG_ERRORS: &[(u16, ErrorKind)] = &[
    (400, ErrorKind::InvalidRequest),
    (401, ErrorKind::Unauthorized),
    (403, ErrorKind::Forbidden),
    (404, ErrorKind::NotFound),
    (429, ErrorKind::RateLimited),
    (500, ErrorKind::Generic),
];

static GET_AI_CONFIGS: Operation = Operation {
    id: "getAIConfigs",
    method: Method::GET,
    path: "/api/v2/projects/{projectKey}/ai-configs",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: AI_CONFIG_ERRORS,
};

static GET_AI_CONFIG: Operation = Operation {
    id: "getAIConfig",
    method: Method::GET,
    path: "/api/v2/projects/{projectKey}/ai-configs/{configKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: AI_CONFIG_ERRORS,
};

static POST_AI_CONFIG: Operation = Operation {
    id: "postAIConfig",
    method: Method::POST,
    path: "/api/v2/projects/{projectKey}/ai-configs",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON],
    errors: AI_CONFIG_ERRORS,
};

static PATCH_AI_CONFIG: Operation = Operation {
    id: "patchAIConfig",
    method: Method::PATCH,
    path: "/api/v2/projects/{projectKey}/ai-configs/{configKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON],
    errors: AI_CONFIG_ERRORS,
};

static DELETE_AI_CONFIG: Operation = Operation {
    id: "deleteAIConfig",
    method: Method::DELETE,
    path: "/api/v2/projects/{projectKey}/ai-configs/{configKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: AI_CONFIG_ERRORS,
};

static GET_AI_CONFIG_VARIATION: Operation = Operation {
    id: "getAIConfigVariation",
    method: Method::GET,
    path: "/api/v2/projects/{projectKey}/ai-configs/{configKey}/variations/{variationKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: AI_CONFIG_ERRORS,
};

static POST_AI_CONFIG_VARIATION: Operation = Operation {
    id: "postAIConfigVariation",
    method: Method::POST,
    path: "/api/v2/projects/{projectKey}/ai-configs/{configKey}/variations",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON],
    errors: AI_CONFIG_ERRORS,
};

/// Every AI Config operation is in beta; the version header must be set explicitly.
fn beta_request(version: Option<LdApiVersion>, path: String) -> Result<ApiRequest, Error> {
    let version = version.ok_or(Error::ParameterRequired("ldAPIVersion"))?;
    Ok(ApiRequest::new(path).header(LD_API_VERSION_HEADER, version.to_string()))
}

/// Operations on AI Configs, returned by [Client::ai_configs].
///
/// ```no_run
/// # use launchdarkly_api_client::{apis::LdApiVersion, Client, ConfigBuilder, Error};
/// # async fn run(client: Client) -> Result<(), Error> {
/// let (config, _) = client
///     .ai_configs()
///     .get_ai_config("default", "chat-bot")
///     .ld_api_version(LdApiVersion::Beta)
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AiConfigsApi {
    client: Client,
}

impl AiConfigsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the AI Configs in a project.
    pub fn get_ai_configs(&self, project_key: impl Into<String>) -> GetAiConfigs {
        GetAiConfigs {
            client: self.client.clone(),
            project_key: project_key.into(),
            ld_api_version: None,
            sort: None,
            limit: None,
            offset: None,
            filter: None,
        }
    }

    /// Get a single AI Config.
    pub fn get_ai_config(
        &self,
        project_key: impl Into<String>,
        config_key: impl Into<String>,
    ) -> GetAiConfig {
        GetAiConfig {
            client: self.client.clone(),
            project_key: project_key.into(),
            config_key: config_key.into(),
            ld_api_version: None,
        }
    }

    /// Create an AI Config.
    pub fn post_ai_config(&self, project_key: impl Into<String>) -> PostAiConfig {
        PostAiConfig {
            client: self.client.clone(),
            project_key: project_key.into(),
            ld_api_version: None,
            body: None,
        }
    }

    /// Update an AI Config with a JSON merge patch.
    pub fn patch_ai_config(
        &self,
        project_key: impl Into<String>,
        config_key: impl Into<String>,
    ) -> PatchAiConfig {
        PatchAiConfig {
            client: self.client.clone(),
            project_key: project_key.into(),
            config_key: config_key.into(),
            ld_api_version: None,
            body: None,
        }
    }

    /// Delete an AI Config.
    pub fn delete_ai_config(
        &self,
        project_key: impl Into<String>,
        config_key: impl Into<String>,
    ) -> DeleteAiConfig {
        DeleteAiConfig {
            client: self.client.clone(),
            project_key: project_key.into(),
            config_key: config_key.into(),
            ld_api_version: None,
        }
    }

    /// Get every version of a variation of an AI Config.
    pub fn get_ai_config_variation(
        &self,
        project_key: impl Into<String>,
        config_key: impl Into<String>,
        variation_key: impl Into<String>,
    ) -> GetAiConfigVariation {
        GetAiConfigVariation {
            client: self.client.clone(),
            project_key: project_key.into(),
            config_key: config_key.into(),
            variation_key: variation_key.into(),
            ld_api_version: None,
        }
    }

    /// Create a variation of an AI Config.
    pub fn post_ai_config_variation(
        &self,
        project_key: impl Into<String>,
        config_key: impl Into<String>,
    ) -> PostAiConfigVariation {
        PostAiConfigVariation {
            client: self.client.clone(),
            project_key: project_key.into(),
            config_key: config_key.into(),
            ld_api_version: None,
            body: None,
        }
    }
}

/// Request builder for [AiConfigsApi::get_ai_configs].
#[must_use]
pub struct GetAiConfigs {
    client: Client,
    project_key: String,
    ld_api_version: Option<LdApiVersion>,
    sort: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    filter: Option<String>,
}

impl GetAiConfigs {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// Field to sort by, prefixed with `-` for descending order, e.g. `-createdAt`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Maximum number of AI Configs to return.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of AI Configs to skip, for pagination.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Filter expression, e.g. `tag:support`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(AiConfigs, ApiResponse), Error> {
        let path = build_path(GET_AI_CONFIGS.path, &[("projectKey", self.project_key.as_str())]);
        let request = beta_request(self.ld_api_version, path)?.query(
            QueryParams::new()
                .push_opt("sort", &self.sort)
                .push_opt("limit", &self.limit)
                .push_opt("offset", &self.offset)
                .push_opt("filter", &self.filter),
        );
        self.client.execute(&GET_AI_CONFIGS, request).await
    }
}

/// Request builder for [AiConfigsApi::get_ai_config].
#[must_use]
pub struct GetAiConfig {
    client: Client,
    project_key: String,
    config_key: String,
    ld_api_version: Option<LdApiVersion>,
}

impl GetAiConfig {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(AiConfig, ApiResponse), Error> {
        let path = build_path(
            GET_AI_CONFIG.path,
            &[("projectKey", self.project_key.as_str()), ("configKey", self.config_key.as_str())],
        );
        let request = beta_request(self.ld_api_version, path)?;
        self.client.execute(&GET_AI_CONFIG, request).await
    }
}

/// Request builder for [AiConfigsApi::post_ai_config].
#[must_use]
pub struct PostAiConfig {
    client: Client,
    project_key: String,
    ld_api_version: Option<LdApiVersion>,
    body: Option<AiConfigPost>,
}

impl PostAiConfig {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// The AI Config to create. Required.
    pub fn ai_config_post(mut self, body: AiConfigPost) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(AiConfig, ApiResponse), Error> {
        let path = build_path(POST_AI_CONFIG.path, &[("projectKey", self.project_key.as_str())]);
        let request = beta_request(self.ld_api_version, path)?;
        let body = self.body.ok_or(Error::ParameterRequired("aiConfigPost"))?;
        let request = request.json(&body)?;
        self.client.execute(&POST_AI_CONFIG, request).await
    }
}

/// Request builder for [AiConfigsApi::patch_ai_config].
#[must_use]
pub struct PatchAiConfig {
    client: Client,
    project_key: String,
    config_key: String,
    ld_api_version: Option<LdApiVersion>,
    body: Option<AiConfigPatch>,
}

impl PatchAiConfig {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// The fields to update. When no patch is set, an empty object is sent.
    pub fn ai_config_patch(mut self, body: AiConfigPatch) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(AiConfig, ApiResponse), Error> {
        let path = build_path(
            PATCH_AI_CONFIG.path,
            &[("projectKey", self.project_key.as_str()), ("configKey", self.config_key.as_str())],
        );
        let request = beta_request(self.ld_api_version, path)?;
        let request = request.json(&self.body.unwrap_or_default())?;
        self.client.execute(&PATCH_AI_CONFIG, request).await
    }
}

/// Request builder for [AiConfigsApi::delete_ai_config].
#[must_use]
pub struct DeleteAiConfig {
    client: Client,
    project_key: String,
    config_key: String,
    ld_api_version: Option<LdApiVersion>,
}

impl DeleteAiConfig {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<ApiResponse, Error> {
        let path = build_path(
            DELETE_AI_CONFIG.path,
            &[("projectKey", self.project_key.as_str()), ("configKey", self.config_key.as_str())],
        );
        let request = beta_request(self.ld_api_version, path)?;
        self.client.execute_no_content(&DELETE_AI_CONFIG, request).await
    }
}

/// Request builder for [AiConfigsApi::get_ai_config_variation].
#[must_use]
pub struct GetAiConfigVariation {
    client: Client,
    project_key: String,
    config_key: String,
    variation_key: String,
    ld_api_version: Option<LdApiVersion>,
}

impl GetAiConfigVariation {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(AiConfigVariationsResponse, ApiResponse), Error> {
        let path = build_path(
            GET_AI_CONFIG_VARIATION.path,
            &[
                ("projectKey", self.project_key.as_str()),
                ("configKey", self.config_key.as_str()),
                ("variationKey", self.variation_key.as_str()),
            ],
        );
        let request = beta_request(self.ld_api_version, path)?;
        self.client.execute(&GET_AI_CONFIG_VARIATION, request).await
    }
}

/// Request builder for [AiConfigsApi::post_ai_config_variation].
#[must_use]
pub struct PostAiConfigVariation {
    client: Client,
    project_key: String,
    config_key: String,
    ld_api_version: Option<LdApiVersion>,
    body: Option<AiConfigVariationPost>,
}

impl PostAiConfigVariation {
    /// Set the `LD-API-Version` header. Required.
    pub fn ld_api_version(mut self, version: LdApiVersion) -> Self {
        self.ld_api_version = Some(version);
        self
    }

    /// The variation to create. Required.
    pub fn ai_config_variation_post(mut self, body: AiConfigVariationPost) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(AiConfigVariation, ApiResponse), Error> {
        let path = build_path(
            POST_AI_CONFIG_VARIATION.path,
            &[("projectKey", self.project_key.as_str()), ("configKey", self.config_key.as_str())],
        );
        let request = beta_request(self.ld_api_version, path)?;
        let body = self
            .body
            .ok_or(Error::ParameterRequired("aiConfigVariationPost"))?;
        let request = request.json(&body)?;
        self.client.execute(&POST_AI_CONFIG_VARIATION, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiConfigMaintainer, Message};
    use crate::test_common::{
        basic_ai_config, basic_ai_config_variation, client_for, not_found_body, offline_client,
        API_KEY,
    };
    use crate::ApiErrorBody;
    use mockito::Matcher;

    #[tokio::test]
    async fn missing_api_version_is_rejected_before_sending() {
        let (client, transport) = offline_client();

        let result = client.ai_configs().get_ai_configs("default").execute().await;
        assert!(matches!(result, Err(Error::ParameterRequired("ldAPIVersion"))));

        let result = client
            .ai_configs()
            .delete_ai_config("default", "chat-bot")
            .execute()
            .await;
        assert!(matches!(result, Err(Error::ParameterRequired("ldAPIVersion"))));

        assert_eq!(0, transport.calls());
    }

    #[tokio::test]
    async fn missing_body_is_rejected_before_sending() {
        let (client, transport) = offline_client();

        let result = client
            .ai_configs()
            .post_ai_config("default")
            .ld_api_version(LdApiVersion::Beta)
            .execute()
            .await;

        assert!(matches!(result, Err(Error::ParameterRequired("aiConfigPost"))));
        assert_eq!(0, transport.calls());
    }

    #[tokio::test]
    async fn list_sends_version_header_and_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/projects/default/ai-configs")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sort".into(), "-createdAt".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("offset".into(), "3000000000".into()),
                Matcher::UrlEncoded("filter".into(), "tag:support".into()),
            ]))
            .match_header("ld-api-version", "beta")
            .match_header("authorization", API_KEY)
            .with_status(200)
            .with_body(
                json!({
                    "items": [basic_ai_config("chat-bot"), basic_ai_config("summarizer")],
                    "totalCount": 2,
                    "_links": {}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (configs, response) = client_for(&server)
            .ai_configs()
            .get_ai_configs("default")
            .ld_api_version(LdApiVersion::Beta)
            .sort("-createdAt")
            .limit(10)
            .offset(3_000_000_000)
            .filter("tag:support")
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(200, response.status());
        assert_eq!(2, configs.items.len());
        assert_eq!(Some(2), configs.total_count);
    }

    #[tokio::test]
    async fn path_parameters_are_encoded_as_single_segments() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/projects/team%2Falpha/ai-configs/my%20config")
            .with_status(200)
            .with_body(basic_ai_config("my config").to_string())
            .create_async()
            .await;

        let (config, _) = client_for(&server)
            .ai_configs()
            .get_ai_config("team/alpha", "my config")
            .ld_api_version(LdApiVersion::Beta)
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!("my config", config.key);
    }

    #[tokio::test]
    async fn create_posts_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/projects/default/ai-configs")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "key": "chat-bot",
                "name": "Chat bot",
                "maintainerTeamKey": "support"
            })))
            .with_status(201)
            .with_body(
                json!({
                    "key": "chat-bot",
                    "name": "Chat bot",
                    "maintainer": {"kind": "team", "key": "support", "name": "Support"},
                    "version": 1,
                    "createdAt": 1700000000000i64,
                    "updatedAt": 1700000000000i64
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (config, response) = client_for(&server)
            .ai_configs()
            .post_ai_config("default")
            .ld_api_version(LdApiVersion::Beta)
            .ai_config_post(AiConfigPost::new("chat-bot", "Chat bot").set_maintainer_team_key("support"))
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(201, response.status());
        assert!(matches!(config.maintainer, Some(AiConfigMaintainer::Team { .. })));
        assert!(config.variations.is_empty());
    }

    #[tokio::test]
    async fn patch_sends_explicit_nulls() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/projects/default/ai-configs/chat-bot")
            .match_body(Matcher::Json(json!({"maintainerId": null, "maintainerTeamKey": null})))
            .with_status(200)
            .with_body(basic_ai_config("chat-bot").to_string())
            .create_async()
            .await;

        client_for(&server)
            .ai_configs()
            .patch_ai_config("default", "chat-bot")
            .ld_api_version(LdApiVersion::Beta)
            .ai_config_patch(AiConfigPatch::new().clear_maintainer())
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_returns_the_response_on_no_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v2/projects/default/ai-configs/chat-bot")
            .match_header("ld-api-version", "beta")
            .with_status(204)
            .create_async()
            .await;

        let response = client_for(&server)
            .ai_configs()
            .delete_ai_config("default", "chat-bot")
            .ld_api_version(LdApiVersion::Beta)
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(204, response.status());
        assert!(response.body().is_empty());
    }

    #[tokio::test]
    async fn unknown_config_decodes_not_found_shape() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/projects/default/ai-configs/missing")
            .with_status(404)
            .with_body(not_found_body())
            .create_async()
            .await;

        let result = client_for(&server)
            .ai_configs()
            .get_ai_config("default", "missing")
            .ld_api_version(LdApiVersion::Beta)
            .execute()
            .await;

        match result {
            Err(Error::Api { response, body }) => {
                assert_eq!(404, response.status());
                assert!(matches!(body, ApiErrorBody::NotFound(_)));
                assert_eq!(Some("not_found"), body.code());
            }
            other => panic!("expected a not found error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn variations_are_fetched_and_created() {
        let mut server = mockito::Server::new_async().await;
        let get = server
            .mock("GET", "/api/v2/projects/default/ai-configs/chat-bot/variations/concise")
            .with_status(200)
            .with_body(
                json!({"items": [basic_ai_config_variation("concise")], "totalCount": 1}).to_string(),
            )
            .create_async()
            .await;
        let post = server
            .mock("POST", "/api/v2/projects/default/ai-configs/chat-bot/variations")
            .match_body(Matcher::PartialJson(json!({"key": "concise", "name": "Concise"})))
            .with_status(201)
            .with_body(basic_ai_config_variation("concise").to_string())
            .create_async()
            .await;

        let client = client_for(&server);
        let (variations, _) = client
            .ai_configs()
            .get_ai_config_variation("default", "chat-bot", "concise")
            .ld_api_version(LdApiVersion::Beta)
            .execute()
            .await
            .expect("get should succeed");
        let (created, _) = client
            .ai_configs()
            .post_ai_config_variation("default", "chat-bot")
            .ld_api_version(LdApiVersion::Beta)
            .ai_config_variation_post(
                AiConfigVariationPost::new("concise", "Concise")
                    .set_messages(vec![Message::new("system", "Be brief.")]),
            )
            .execute()
            .await
            .expect("post should succeed");

        get.assert_async().await;
        post.assert_async().await;
        assert_eq!(1, variations.total_count);
        assert_eq!("concise", created.key);
        assert_eq!("system", created.messages[0].role);
    }
}
