use hyper::Method;
use crate::error::Error;
use crate::models::{ErrorKind, Member, Members, NewMemberForm, PatchOperation};
use crate::operation::{Operation, APPLICATION_JSON};
use crate::path::build_path;
use crate::query::QueryParams;
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::Client;

static GET_MEMBERS: Operation = Operation {
    id: "getMembers",
    method: Method::GET,
    path: "/api/v2/members",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimited),
    ],
};

static GET_MEMBER: Operation = Operation {
    id: "getMember",
    method: Method::GET,
    path: "/api/v2/members/{id}",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimited),
    ],
};

static POST_MEMBERS: Operation = Operation {
    id: "postMembers",
    method: Method::POST,
    path: "/api/v2/members",
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

static PATCH_MEMBER: Operation = Operation {
    id: "patchMember",
    method: Method::PATCH,
    path: "/api/v2/members/{id}",
    accepts: &[APPLICATION_JSON],
    content_types: &[APPLICATION_JSON],
    errors: &[
        (400, ErrorKind::InvalidRequest),
        (401, ErrorKind::Unauthorized),
        (404, ErrorKind::NotFound),
        (409, ErrorKind::StatusConflict),
        (429, ErrorKind::RateLimited),
    ],
};

static DELETE_MEMBER: Operation = Operation {
    id: "deleteMember",
    method: Method::DELETE,
    path: "/api/v2/members/{id}",
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

/// Operations on account members, returned by [Client::account_members].
#[derive(Clone)]
pub struct AccountMembersApi {
    client: Client,
}

impl AccountMembersApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List account members.
    ///
    /// The result is paginated; pass `offset` to fetch later pages, or follow the `next` link
    /// of the returned [Members].
    pub fn get_members(&self) -> GetMembers {
        GetMembers {
            client: self.client.clone(),
            limit: None,
            offset: None,
            filter: None,
            expand: None,
            sort: None,
        }
    }

    /// Get a single account member by ID.
    pub fn get_member(&self, id: impl Into<String>) -> GetMember {
        GetMember {
            client: self.client.clone(),
            id: id.into(),
            expand: None,
        }
    }

    /// Invite one or more new members to the account.
    pub fn post_members(&self) -> PostMembers {
        PostMembers {
            client: self.client.clone(),
            body: None,
        }
    }

    /// Update an account member with a JSON patch.
    pub fn patch_member(&self, id: impl Into<String>) -> PatchMember {
        PatchMember {
            client: self.client.clone(),
            id: id.into(),
            body: None,
        }
    }

    /// Remove a member from the account.
    pub fn delete_member(&self, id: impl Into<String>) -> DeleteMember {
        DeleteMember {
            client: self.client.clone(),
            id: id.into(),
        }
    }
}

/// Request builder for [AccountMembersApi::get_members].
#[must_use]
pub struct GetMembers {
    client: Client,
    limit: Option<i64>,
    offset: Option<i64>,
    filter: Option<String>,
    expand: Option<String>,
    sort: Option<String>,
}

impl GetMembers {
    /// Maximum number of members to return. Defaults to 20.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of members to skip, for pagination.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Comma separated list of filters, e.g. `role:admin,query:sandy`.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Comma separated list of properties to expand, e.g. `customRoles,roleAttributes`.
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Field to sort by, prefixed with `-` for descending order, e.g. `-lastSeen`.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(Members, ApiResponse), Error> {
        let request = ApiRequest::new(GET_MEMBERS.path.to_string()).query(
            QueryParams::new()
                .push_opt("limit", &self.limit)
                .push_opt("offset", &self.offset)
                .push_opt("filter", &self.filter)
                .push_opt("expand", &self.expand)
                .push_opt("sort", &self.sort),
        );
        self.client.execute(&GET_MEMBERS, request).await
    }
}

/// Request builder for [AccountMembersApi::get_member].
#[must_use]
pub struct GetMember {
    client: Client,
    id: String,
    expand: Option<String>,
}

impl GetMember {
    /// Comma separated list of properties to expand, e.g. `customRoles`.
    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(Member, ApiResponse), Error> {
        let path = build_path(GET_MEMBER.path, &[("id", self.id.as_str())]);
        let request =
            ApiRequest::new(path).query(QueryParams::new().push_opt("expand", &self.expand));
        self.client.execute(&GET_MEMBER, request).await
    }
}

/// Request builder for [AccountMembersApi::post_members].
#[must_use]
pub struct PostMembers {
    client: Client,
    body: Option<Vec<NewMemberForm>>,
}

impl PostMembers {
    /// The members to invite. Required.
    pub fn new_member_form(mut self, members: Vec<NewMemberForm>) -> Self {
        self.body = Some(members);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(Members, ApiResponse), Error> {
        let body = self.body.ok_or(Error::ParameterRequired("newMemberForm"))?;
        let request = ApiRequest::new(POST_MEMBERS.path.to_string()).json(&body)?;
        self.client.execute(&POST_MEMBERS, request).await
    }
}

/// Request builder for [AccountMembersApi::patch_member].
#[must_use]
pub struct PatchMember {
    client: Client,
    id: String,
    body: Option<Vec<PatchOperation>>,
}

impl PatchMember {
    /// The JSON patch to apply. Required.
    pub fn patch_operation(mut self, patch: Vec<PatchOperation>) -> Self {
        self.body = Some(patch);
        self
    }

    /// Send the request.
    pub async fn execute(self) -> Result<(Member, ApiResponse), Error> {
        let body = self.body.ok_or(Error::ParameterRequired("patchOperation"))?;
        let path = build_path(PATCH_MEMBER.path, &[("id", self.id.as_str())]);
        let request = ApiRequest::new(path).json(&body)?;
        self.client.execute(&PATCH_MEMBER, request).await
    }
}

/// Request builder for [AccountMembersApi::delete_member].
#[must_use]
pub struct DeleteMember {
    client: Client,
    id: String,
}

impl DeleteMember {
    /// Send the request.
    pub async fn execute(self) -> Result<ApiResponse, Error> {
        let path = build_path(DELETE_MEMBER.path, &[("id", self.id.as_str())]);
        self.client
            .execute_no_content(&DELETE_MEMBER, ApiRequest::new(path))
            .await
    }
}
