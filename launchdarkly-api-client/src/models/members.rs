use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Access, Link, Nullable, Paginated};

/// A team the member belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamSummary {
    /// Custom role keys the team grants.
    #[serde(default)]
    pub custom_role_keys: Vec<String>,
    /// Key of the team.
    pub key: String,
    /// Name of the team.
    pub name: String,
    /// Hypermedia links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
}

/// A permission granted to the member for a resource, such as maintaining a team.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPermissionGrant {
    /// Name of the action set granted.
    pub action_set: String,
    /// Actions granted.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Resource the permission applies to.
    pub resource: String,
}

/// An account member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Hypermedia links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
    /// ID of the member.
    #[serde(rename = "_id")]
    pub id: String,
    /// First name of the member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Built-in role of the member: `reader`, `writer`, `admin`, `owner` or `no_access`.
    pub role: String,
    /// Email address of the member.
    pub email: String,
    /// Whether the member has a pending invitation.
    #[serde(rename = "_pendingInvite")]
    pub pending_invite: bool,
    /// Whether the member has verified their email address.
    #[serde(rename = "_verified")]
    pub verified: bool,
    /// Whether the member has a pending email verification.
    #[serde(rename = "_pendingEmailVerification", skip_serializing_if = "Option::is_none")]
    pub pending_email_verification: Option<bool>,
    /// Keys of the custom roles assigned to the member.
    #[serde(default)]
    pub custom_roles: Vec<String>,
    /// Whether multi-factor authentication is `enabled` or `disabled`.
    pub mfa: String,
    /// Dashboards the member has chosen to hide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_dashboards: Option<Vec<String>>,
    /// When the member last logged in, in epoch milliseconds.
    #[serde(rename = "_lastSeen")]
    pub last_seen: i64,
    /// Metadata about the member's last session.
    #[serde(rename = "_lastSeenMetadata", skip_serializing_if = "Option::is_none")]
    pub last_seen_metadata: Option<HashMap<String, String>>,
    /// Details of the integration that manages the member, if any.
    #[serde(
        rename = "_integrationMetadata",
        default,
        skip_serializing_if = "Nullable::is_absent"
    )]
    pub integration_metadata: Nullable<serde_json::Value>,
    /// Teams the member belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<MemberTeamSummary>>,
    /// Permissions granted to the member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_grants: Option<Vec<MemberPermissionGrant>>,
    /// When the member was created, in epoch milliseconds.
    pub creation_date: i64,
    /// ID of the OAuth provider the member signs in with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_provider_id: Option<String>,
    /// Details on the allowed and denied actions for the member.
    #[serde(rename = "_access", skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    /// Role attributes assigned to the member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_attributes: Option<HashMap<String, Vec<String>>>,
}

/// A page of account members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Members {
    /// The members on this page.
    pub items: Vec<Member>,
    /// Pagination links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    /// Total number of members matching the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i32>,
}

impl Paginated for Members {
    type Item = Member;

    fn items(&self) -> &[Member] {
        &self.items
    }

    fn links(&self) -> Option<&HashMap<String, Link>> {
        Some(&self.links)
    }
}

/// An invitation for a new account member.
///
/// ```
/// # use launchdarkly_api_client::models::NewMemberForm;
/// let invite = NewMemberForm::new("sandy@example.com")
///     .set_first_name("Sandy")
///     .set_role("writer");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberForm {
    /// Email address of the new member.
    pub email: String,
    /// Password of the new member. Only used by accounts without SSO.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// First name of the new member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name of the new member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Built-in role of the new member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Custom role keys to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_roles: Option<Vec<String>>,
    /// Team keys to add the new member to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_keys: Option<Vec<String>>,
    /// Role attributes to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_attributes: Option<HashMap<String, Vec<String>>>,
}

impl NewMemberForm {
    /// Create a new instance with the required fields.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the [password][Self::password] field.
    pub fn set_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the [first_name][Self::first_name] field.
    pub fn set_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the [last_name][Self::last_name] field.
    pub fn set_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the [role][Self::role] field.
    pub fn set_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the [custom_roles][Self::custom_roles] field.
    pub fn set_custom_roles<I, S>(mut self, custom_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_roles = Some(custom_roles.into_iter().map(Into::into).collect());
        self
    }

    /// Set the [team_keys][Self::team_keys] field.
    pub fn set_team_keys<I, S>(mut self, team_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_keys = Some(team_keys.into_iter().map(Into::into).collect());
        self
    }

    /// Set the [role_attributes][Self::role_attributes] field.
    pub fn set_role_attributes(mut self, role_attributes: HashMap<String, Vec<String>>) -> Self {
        self.role_attributes = Some(role_attributes);
        self
    }
}
