use hyper::Method;
use crate::error::Error;
use crate::models::{
    ErrorKind, PatchOperation, RepositoryCollectionRep, RepositoryPost, RepositoryRep,
    StatisticCollectionRep, StatisticsRoot,
};
use crate::operation::{Operation, APPLICATION_JSON};
use crate::path::build_path;
use crate::query::QueryParams;
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::Client;

static GET_REPOSITORIES: Operation = Operation {
    id: "getRepositories",
    method: Method::GET,
    path: "/api/v2/code-refs/repositories",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (429, ErrorKind::RateLimited),
    ],
};

static GET_REPOSITORY: Operation = Operation {
    id: "getRepository",
    method: Method::GET,
    path: "/api/v2/code-refs/repositories/{repo}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimited),
    ],
};

static POST_REPOSITORY: Operation = Operation {
    id: "postRepository",
    method: Method::POST,
    path: "/api/v2/code-refs/repositories",
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

static PATCH_REPOSITORY: Operation = Operation {
    id: "patchRepository",
    method: Method::PATCH,
    path: "/api/v2/code-refs/repositories/{repo}",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON],
    errors: &[
        (400, ErrorKind::InvalidRequest),
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (409, ErrorKind::StatusConflict),
        (429, ErrorKind::RateLimited),
    ],
};

static DELETE_REPOSITORY: Operation = Operation {
    id: "deleteRepository",
    method: Method::DELETE,
    path: "/api/v2/code-refs/repositories/{repo}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimited),
    ],
};

static GET_ROOT_STATISTIC: Operation = Operation {
    id: "getRootStatistic",
    method: Method::GET,
    path: "/api/v2/code-refs/statistics",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (429, ErrorKind::RateLimited),
    ],
};

static GET_STATISTICS: Operation = Operation {
    id: "getStatistics",
    method: Method::GET,
    path: "/api/v2/code-refs/statistics/{projectKey}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimited),
    ],
};

/// Operations on code references, returned by [Client::code_refs].
#[derive(Clone)]
pub struct CodeRefsApi {
    client: Client,
}

impl CodeRefsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the repositories connected to code references.
    pub fn get_repositories(&self) -> GetRepositories {
        GetRepositories {
            client: self.client.clone(),
            with_branches: None,
            with_references_for_default_branch: None,
            proj_key: None,
            flag_key: None,
        }
    }

    /// Get a single repository by name.
    pub fn get_repository(&self, repo: impl Into<String>) -> GetRepository {
        GetRepository {
            client: self.client.clone(),
            repo: repo.into(),
        }
    }

    /// Connect a repository.
    pub fn post_repository(&self) -> PostRepository {
        PostRepository {
            client: self.client.clone(),
            body: None,
        }
    }

    /// Update a repository with a JSON patch.
    pub fn patch_repository(&self, repo: impl Into<String>) -> PatchRepository {
        PatchRepository {
            client: self.client.clone(),
            repo: repo.into(),
            body: None,
        }
    }

    /// Disconnect a repository and delete its references.
    pub fn delete_repository(&self, repo: impl Into<String>) -> DeleteRepository {
        DeleteRepository {
            client: self.client.clone(),
            repo: repo.into(),
        }
    }

    /// Get links to the per-project code reference statistics.
    pub fn get_root_statistic(&self) -> GetRootStatistic {
        GetRootStatistic {
            client: self.client.clone(),
        }
    }

    /// Get code reference statistics for the flags of a project.
    pub fn get_statistics(&self, project_key: impl Into<String>) -> GetStatistics {
        GetStatistics {
            client: self.client.clone(),
            project_key: project_key.into(),
            flag_key: None,
        }
    }
}

/// Request builder for [CodeRefsApi::get_repositories].
#[must_use]
pub struct GetRepositories {
    client: Client,
    with_branches: Option<String>,
    with_references_for_default_branch: Option<String>,
    proj_key: Option<String>,
    flag_key: Option<String>,
}

impl GetRepositories {
    /// Include the branches of each repository when set, e.g. to `1`.
    pub fn with_branches(mut self, with_branches: impl Into<String>) -> Self {
        self.with_branches = Some(with_branches.into());
        self
    }

    /// Include the references on each default branch when set, e.g. to `1`.
    pub fn with_references_for_default_branch(mut self, value: impl Into<String>) -> Self {
        self.with_references_for_default_branch = Some(value.into());
        self
    }

    /// Only return references to flags in this project.
    pub fn proj_key(mut self, proj_key: impl Into<String>) -> Self {
        self.proj_key = Some(proj_key.into());
        self
    }

    /// Only return references to this flag. Requires [Self::proj_key].
    pub fn flag_key(mut self, flag_key: impl Into<String>) -> Self {
        self.flag_key = Some(flag_key.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(RepositoryCollectionRep, ApiResponse), Error> {
        let request = ApiRequest::new(GET_REPOSITORIES.path.to_string()).query(
            QueryParams::new()
                .push_opt("withBranches", &self.with_branches)
                .push_opt(
                    "withReferencesForDefaultBranch",
                    &self.with_references_for_default_branch,
                )
                .push_opt("projKey", &self.proj_key)
                .push_opt("flagKey", &self.flag_key),
        );
        self.client.execute(&GET_REPOSITORIES, request).await
    }
}

/// Request builder for [CodeRefsApi::get_repository].
#[must_use]
pub struct GetRepository {
    client: Client,
    repo: String,
}

impl GetRepository {
    /// Send the request.
    pub async fn execute(self) -> Result<(RepositoryRep, ApiResponse), Error> {
        let path = build_path(GET_REPOSITORY.path, &[("repo", self.repo.as_str())]);
        self.client
            .execute(&GET_REPOSITORY, ApiRequest::new(path))
            .await
    }
}

/// Request builder for [CodeRefsApi::post_repository].
#[must_use]
pub struct PostRepository {
    client: Client,
    body: Option<RepositoryPost>,
}

impl PostRepository {
    /// The repository to connect. Required.
    pub fn repository_post(mut self, body: RepositoryPost) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(RepositoryRep, ApiResponse), Error> {
        let body = self.body.ok_or(Error::ParameterRequired("repositoryPost"))?;
        let request = ApiRequest::new(POST_REPOSITORY.path.to_string()).json(&body)?;
        self.client.execute(&POST_REPOSITORY, request).await
    }
}

/// Request builder for [CodeRefsApi::patch_repository].
#[must_use]
pub struct PatchRepository {
    client: Client,
    repo: String,
    body: Option<Vec<PatchOperation>>,
}

impl PatchRepository {
    /// The JSON patch to apply. Required.
    pub fn patch_operation(mut self, patch: Vec<PatchOperation>) -> Self {
        self.body = Some(patch);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(RepositoryRep, ApiResponse), Error> {
        let body = self.body.ok_or(Error::ParameterRequired("patchOperation"))?;
        let path = build_path(PATCH_REPOSITORY.path, &[("repo", self.repo.as_str())]);
        let request = ApiRequest::new(path).json(&body)?;
        self.client.execute(&PATCH_REPOSITORY, request).await
    }
}

/// Request builder for [CodeRefsApi::delete_repository].
#[must_use]
pub struct DeleteRepository {
    client: Client,
    repo: String,
}

impl DeleteRepository {
    /// Send the request.
    pub async fn execute(self) -> Result<ApiResponse, Error> {
        let path = build_path(DELETE_REPOSITORY.path, &[("repo", self.repo.as_str())]);
        self.client
            .execute_no_content(&DELETE_REPOSITORY, ApiRequest::new(path))
            .await
    }
}

/// Request builder for [CodeRefsApi::get_root_statistic].
#[must_use]
pub struct GetRootStatistic {
    client: Client,
}

impl GetRootStatistic {
    /// Send the request.
    pub async fn execute(self) -> Result<(StatisticsRoot, ApiResponse), Error> {
        let request = ApiRequest::new(GET_ROOT_STATISTIC.path.to_string());
        self.client.execute(&GET_ROOT_STATISTIC, request).await
    }
}

/// Request builder for [CodeRefsApi::get_statistics].
#[must_use]
pub struct GetStatistics {
    client: Client,
    project_key: String,
    flag_key: Option<String>,
}

impl GetStatistics {
    /// Only return statistics for this flag.
    pub fn flag_key(mut self, flag_key: impl Into<String>) -> Self {
        self.flag_key = Some(flag_key.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(StatisticCollectionRep, ApiResponse), Error> {
        let path = build_path(GET_STATISTICS.path, &[("projectKey", self.project_key.as_str())]);
        let request =
            ApiRequest::new(path).query(QueryParams::new().push_opt("flagKey", &self.flag_key));
        self.client.execute(&GET_STATISTICS, request).await
    }
}
