use hyper::Method;
use crate::error::Error;
use crate::models::{ErrorKind, FeatureFlag, FeatureFlagBody, FeatureFlagPatch, FeatureFlags};
use crate::operation::{Operation, APPLICATION_JSON, SEMANTIC_PATCH};
use crate::path::build_path;
use crate::query::QueryParams;
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::Client;

const FLAG_READ_ERRORS: &[(u16, ErrorKind)] = &[
    (400, ErrorKind::InvalidRequest),
    (401, ErrorKind::Unauthorized),
    (403, ErrorKind::Forbidden),
    (404, ErrorKind::NotFound),
    (429, ErrorKind::RateLimited),
];

static GET_FEATURE_FLAGS: Operation = Operation {
    id: "getFeatureFlags",
    method: Method::GET,
    path: "/api/v2/flags/{projectKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: FLAG_READ_ERRORS,
};

static GET_FEATURE_FLAG: Operation = Operation {
    id: "getFeatureFlag",
    method: Method::GET,
    path: "/api/v2/flags/{projectKey}/{featureFlagKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: FLAG_READ_ERRORS,
};

static POST_FEATURE_FLAG: Operation = Operation {
    id: "postFeatureFlag",
    method: Method::POST,
    path: "/api/v2/flags/{projectKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON],
    errors: &[
        (400, ErrorKind::InvalidRequest),
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (409, ErrorKind::StatusConflict),
        (429, ErrorKind::RateLimited),
    ],
};

static PATCH_FEATURE_FLAG: Operation = Operation {
    id: "patchFeatureFlag",
    method: Method::PATCH,
    path: "/api/v2/flags/{projectKey}/{featureFlagKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON, SEMANTIC_PATCH],
    errors: &[
        (400, ErrorKind::InvalidRequest),
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (405, ErrorKind::MethodNotAllowed),
        (409, ErrorKind::StatusConflict),
        (429, ErrorKind::RateLimited),
    ],
};

static DELETE_FEATURE_FLAG: Operation = Operation {
    id: "deleteFeatureFlag",
    method: Method::DELETE,
    path: "/api/v2/flags/{projectKey}/{featureFlagKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (409, ErrorKind::StatusConflict),
        (429, ErrorKind::RateLimited),
    ],
};

fn flag_path(template: &str, project_key: &str, feature_flag_key: &str) -> String {
    build_path(
        template,
        &[("projectKey", project_key), ("featureFlagKey", feature_flag_key)],
    )
}

/// Operations on feature flags, returned by [Client::feature_flags].
#[derive(Clone)]
pub struct FeatureFlagsApi {
    client: Client,
}

impl FeatureFlagsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the feature flags of a project.
    pub fn get_feature_flags(&self, project_key: impl Into<String>) -> GetFeatureFlags {
        GetFeatureFlags {
            client: self.client.clone(),
            project_key: project_key.into(),
            env: None,
            tag: None,
            limit: None,
            offset: None,
            archived: None,
            summary: None,
            filter: None,
            sort: None,
            compare: None,
            expand: None,
        }
    }

    /// Get a single feature flag by key.
    pub fn get_feature_flag(
        &self,
        project_key: impl Into<String>,
        feature_flag_key: impl Into<String>,
    ) -> GetFeatureFlag {
        GetFeatureFlag {
            client: self.client.clone(),
            project_key: project_key.into(),
            feature_flag_key: feature_flag_key.into(),
            env: None,
            expand: None,
        }
    }

    /// Create a feature flag in a project.
    pub fn post_feature_flag(&self, project_key: impl Into<String>) -> PostFeatureFlag {
        PostFeatureFlag {
            client: self.client.clone(),
            project_key: project_key.into(),
            clone: None,
            body: None,
        }
    }

    /// Update a feature flag with a JSON patch or a semantic patch.
    pub fn patch_feature_flag(
        &self,
        project_key: impl Into<String>,
        feature_flag_key: impl Into<String>,
    ) -> PatchFeatureFlag {
        PatchFeatureFlag {
            client: self.client.clone(),
            project_key: project_key.into(),
            feature_flag_key: feature_flag_key.into(),
            ignore_conflicts: None,
            dry_run: None,
            body: None,
        }
    }

    /// Delete a feature flag from every environment of its project.
    pub fn delete_feature_flag(
        &self,
        project_key: impl Into<String>,
        feature_flag_key: impl Into<String>,
    ) -> DeleteFeatureFlag {
        DeleteFeatureFlag {
            client: self.client.clone(),
            project_key: project_key.into(),
            feature_flag_key: feature_flag_key.into(),
        }
    }
}

/// Request builder for [FeatureFlagsApi::get_feature_flags].
#[must_use]
pub struct GetFeatureFlags {
    client: Client,
    project_key: String,
    env: Option<String>,
    tag: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    archived: Option<bool>,
    summary: Option<bool>,
    filter: Option<String>,
    sort: Option<String>,
    compare: Option<bool>,
    expand: Option<String>,
}

impl GetFeatureFlags {
    /// Only include configuration for this environment.
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Only return flags with this tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Maximum number of flags to return.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of flags to skip.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Only return archived flags when `true`.
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    /// Omit prerequisites, targets and rules from the environment configurations when `true`.
    pub fn summary(mut self, summary: bool) -> Self {
        self.summary = Some(summary);
        self
    }

    /// A filter expression, e.g. `query:checkout,state:live`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Field to sort by. Prefix with `-` for descending order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Report which flags differ between the requested environments.
    pub fn compare(mut self, compare: bool) -> Self {
        self.compare = Some(compare);
        self
    }

    /// Comma separated list of fields to expand.
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(FeatureFlags, ApiResponse), Error> {
        let path = build_path(
            GET_FEATURE_FLAGS.path,
            &[("projectKey", self.project_key.as_str())],
        );
        let request = ApiRequest::new(path).query(
            QueryParams::new()
                .push_opt("env", &self.env)
                .push_opt("tag", &self.tag)
                .push_opt("limit", &self.limit)
                .push_opt("offset", &self.offset)
                .push_opt("archived", &self.archived)
                .push_opt("summary", &self.summary)
                .push_opt("filter", &self.filter)
                .push_opt("sort", &self.sort)
                .push_opt("compare", &self.compare)
                .push_opt("expand", &self.expand),
        );
        self.client.execute(&GET_FEATURE_FLAGS, request).await
    }
}

/// Request builder for [FeatureFlagsApi::get_feature_flag].
#[must_use]
pub struct GetFeatureFlag {
    client: Client,
    project_key: String,
    feature_flag_key: String,
    env: Option<String>,
    expand: Option<String>,
}

impl GetFeatureFlag {
    /// Only include configuration for this environment.
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Comma separated list of fields to expand.
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(FeatureFlag, ApiResponse), Error> {
        let path = flag_path(GET_FEATURE_FLAG.path, &self.project_key, &self.feature_flag_key);
        let request = ApiRequest::new(path).query(
            QueryParams::new()
                .push_opt("env", &self.env)
                .push_opt("expand", &self.expand),
        );
        self.client.execute(&GET_FEATURE_FLAG, request).await
    }
}

/// Request builder for [FeatureFlagsApi::post_feature_flag].
#[must_use]
pub struct PostFeatureFlag {
    client: Client,
    project_key: String,
    clone: Option<String>,
    body: Option<FeatureFlagBody>,
}

impl PostFeatureFlag {
    /// Key of an existing flag whose settings the new flag copies. Sets the `clone` query
    /// parameter.
    pub fn clone_from_flag(mut self, flag_key: impl Into<String>) -> Self {
        self.clone = Some(flag_key.into());
        self
    }

    /// The flag to create. Required.
    pub fn feature_flag_body(mut self, body: FeatureFlagBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(FeatureFlag, ApiResponse), Error> {
        let body = self.body.ok_or(Error::ParameterRequired("featureFlagBody"))?;
        let path = build_path(
            POST_FEATURE_FLAG.path,
            &[("projectKey", self.project_key.as_str())],
        );
        let request = ApiRequest::new(path)
            .query(QueryParams::new().push_opt("clone", &self.clone))
            .json(&body)?;
        self.client.execute(&POST_FEATURE_FLAG, request).await
    }
}

/// Request builder for [FeatureFlagsApi::patch_feature_flag].
#[must_use]
pub struct PatchFeatureFlag {
    client: Client,
    project_key: String,
    feature_flag_key: String,
    ignore_conflicts: Option<bool>,
    dry_run: Option<bool>,
    body: Option<FeatureFlagPatch>,
}

impl PatchFeatureFlag {
    /// Apply the patch even if it conflicts with a pending scheduled change or approval.
    pub fn ignore_conflicts(mut self, ignore_conflicts: bool) -> Self {
        self.ignore_conflicts = Some(ignore_conflicts);
        self
    }

    /// Validate the patch and return the resulting flag without saving it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// The update to apply. Required.
    ///
    /// Accepts a [crate::models::PatchWithComment], a bare list of
    /// [crate::models::PatchOperation]s or a [crate::models::SemanticPatch]. Semantic patches are
    /// sent with the semantic patch content type.
    pub fn patch(mut self, patch: impl Into<FeatureFlagPatch>) -> Self {
        self.body = Some(patch.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(FeatureFlag, ApiResponse), Error> {
        let body = self.body.ok_or(Error::ParameterRequired("patchWithComment"))?;
        let path = flag_path(PATCH_FEATURE_FLAG.path, &self.project_key, &self.feature_flag_key);
        let request = ApiRequest::new(path).query(
            QueryParams::new()
                .push_opt("ignoreConflicts", &self.ignore_conflicts)
                .push_opt("dryRun", &self.dry_run),
        );
        let request = match &body {
            FeatureFlagPatch::Json(patch) => request.json(patch)?,
            FeatureFlagPatch::Semantic(patch) => request.json_as(SEMANTIC_PATCH, patch)?,
        };
        self.client.execute(&PATCH_FEATURE_FLAG, request).await
    }
}

/// Request builder for [FeatureFlagsApi::delete_feature_flag].
#[must_use]
pub struct DeleteFeatureFlag {
    client: Client,
    project_key: String,
    feature_flag_key: String,
}

impl DeleteFeatureFlag {
    /// Send the request.
    pub async fn execute(self) -> Result<ApiResponse, Error> {
        let path = flag_path(
            DELETE_FEATURE_FLAG.path,
            &self.project_key,
            &self.feature_flag_key,
        );
        self.client
            .execute_no_content(&DELETE_FEATURE_FLAG, ApiRequest::new(path))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ApiErrorBody, Instruction, Paginated, PatchOperation, PatchWithComment, SemanticPatch,
        Variation,
    };
    use crate::test_common::{basic_flag, client_for, not_found_body, offline_client};
    use mockito::Matcher;
    use test_case::test_case;

    #[tokio::test]
    async fn list_encodes_boolean_and_paging_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/flags/default")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("env".into(), "production".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
                Matcher::UrlEncoded("archived".into(), "false".into()),
                Matcher::UrlEncoded("summary".into(), "true".into()),
                Matcher::UrlEncoded("filter".into(), "query:checkout".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "items": [basic_flag("new-checkout"), basic_flag("old-checkout")],
                    "_links": {
                        "self": {"href": "/api/v2/flags/default?limit=2", "type": "application/json"},
                        "next": {"href": "/api/v2/flags/default?limit=2&offset=2", "type": "application/json"}
                    },
                    "totalCount": 5
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (flags, _) = client_for(&server)
            .feature_flags()
            .get_feature_flags("default")
            .env("production")
            .limit(2)
            .archived(false)
            .summary(true)
            .filter("query:checkout")
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(2, flags.items().len());
        assert_eq!(Some(5), flags.total_count);
        assert_eq!(Some("/api/v2/flags/default?limit=2&offset=2"), flags.next_link());
    }

    #[tokio::test]
    async fn single_flag_path_segments_are_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/flags/default/checkout%2Fv2")
            .match_query(Matcher::UrlEncoded("env".into(), "test".into()))
            .with_status(200)
            .with_body(basic_flag("checkout/v2").to_string())
            .create_async()
            .await;

        let (flag, _) = client_for(&server)
            .feature_flags()
            .get_feature_flag("default", "checkout/v2")
            .env("test")
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!("checkout/v2", flag.key);
    }

    #[tokio::test]
    async fn create_sends_body_and_clone_parameter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v2/flags/default")
            .match_query(Matcher::UrlEncoded("clone".into(), "old-checkout".into()))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "New checkout",
                "key": "new-checkout",
                "variations": [{"value": true}, {"value": false}],
                "temporary": true
            })))
            .with_status(201)
            .with_body(basic_flag("new-checkout").to_string())
            .create_async()
            .await;

        let (flag, response) = client_for(&server)
            .feature_flags()
            .post_feature_flag("default")
            .clone_from_flag("old-checkout")
            .feature_flag_body(
                FeatureFlagBody::new("New checkout", "new-checkout")
                    .set_variations(vec![Variation::new(true), Variation::new(false)])
                    .set_temporary(true),
            )
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(201, response.status());
        assert_eq!("new-checkout", flag.key);
    }

    #[tokio::test]
    async fn json_patch_is_sent_with_comment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/flags/default/new-checkout")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "patch": [{"op": "replace", "path": "/description", "value": "Checkout rework"}],
                "comment": "describe flag"
            })))
            .with_status(200)
            .with_body(basic_flag("new-checkout").to_string())
            .create_async()
            .await;

        client_for(&server)
            .feature_flags()
            .patch_feature_flag("default", "new-checkout")
            .patch(
                PatchWithComment::new(vec![PatchOperation::replace(
                    "/description",
                    "Checkout rework",
                )])
                .set_comment("describe flag"),
            )
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn semantic_patch_uses_semantic_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/v2/flags/default/new-checkout")
            .match_query(Matcher::UrlEncoded("dryRun".into(), "true".into()))
            .match_header(
                "content-type",
                "application/json; domain-model=launchdarkly.semanticpatch",
            )
            .match_body(Matcher::Json(json!({
                "environmentKey": "production",
                "instructions": [{"kind": "turnFlagOn"}]
            })))
            .with_status(200)
            .with_body(basic_flag("new-checkout").to_string())
            .create_async()
            .await;

        client_for(&server)
            .feature_flags()
            .patch_feature_flag("default", "new-checkout")
            .dry_run(true)
            .patch(
                SemanticPatch::new(vec![Instruction::new("turnFlagOn")])
                    .set_environment_key("production"),
            )
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_patch_is_rejected_before_sending() {
        let (client, transport) = offline_client();

        let result = client
            .feature_flags()
            .patch_feature_flag("default", "new-checkout")
            .execute()
            .await;

        assert!(matches!(result, Err(Error::ParameterRequired("patchWithComment"))));
        assert_eq!(0, transport.calls());
    }

    #[tokio::test]
    async fn missing_flag_body_is_rejected_before_sending() {
        let (client, transport) = offline_client();

        let result = client
            .feature_flags()
            .post_feature_flag("default")
            .execute()
            .await;

        assert!(matches!(result, Err(Error::ParameterRequired("featureFlagBody"))));
        assert_eq!(0, transport.calls());
    }

    #[test_case(400, r#"{"code": "invalid_request", "message": "bad patch"}"#; "invalid request")]
    #[test_case(405, r#"{"code": "method_not_allowed", "message": "Method not allowed"}"#; "method not allowed")]
    #[test_case(409, r#"{"code": "optimistic_locking_error", "message": "Conflict"}"#; "conflict")]
    #[tokio::test]
    async fn patch_errors_decode_into_declared_shapes(status: usize, body: &str) {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PATCH", "/api/v2/flags/default/new-checkout")
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;

        let result = client_for(&server)
            .feature_flags()
            .patch_feature_flag("default", "new-checkout")
            .patch(vec![PatchOperation::remove("/description")])
            .execute()
            .await;

        let error = result.expect_err("request should fail");
        assert_eq!(Some(status as u16), error.status());
        match (status, error.body()) {
            (400, Some(ApiErrorBody::InvalidRequest(_))) => {}
            (405, Some(ApiErrorBody::MethodNotAllowed(_))) => {}
            (409, Some(ApiErrorBody::StatusConflict(_))) => {}
            (_, other) => panic!("unexpected error body for {}: {:?}", status, other),
        }
    }

    #[tokio::test]
    async fn delete_returns_no_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v2/flags/default/new-checkout")
            .with_status(204)
            .create_async()
            .await;

        let response = client_for(&server)
            .feature_flags()
            .delete_feature_flag("default", "new-checkout")
            .execute()
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(204, response.status());
        assert!(response.body().is_empty());
    }

    #[tokio::test]
    async fn unknown_project_decodes_not_found_shape() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/flags/missing")
            .with_status(404)
            .with_body(not_found_body())
            .create_async()
            .await;

        let error = client_for(&server)
            .feature_flags()
            .get_feature_flags("missing")
            .execute()
            .await
            .expect_err("request should fail");

        assert!(matches!(error.body(), Some(ApiErrorBody::NotFound(_))));
    }
}
