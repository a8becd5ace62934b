use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Access, Link, Paginated};

/// A contiguous block of source lines that references a flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunkRep {
    /// Line number of the first line of the hunk.
    pub starting_line_number: i32,
    /// The source lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<String>,
    /// Project the referenced flag belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proj_key: Option<String>,
    /// Key of the referenced flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_key: Option<String>,
    /// Aliases of the flag found in the hunk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// References to flags found in a single file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRep {
    /// Path of the file, relative to the repository root.
    pub path: String,
    /// Hint for syntax highlighting, usually the file extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// The hunks in the file.
    pub hunks: Vec<HunkRep>,
}

/// A branch of a code reference repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRep {
    /// Name of the branch.
    pub name: String,
    /// Commit the references were collected at.
    pub head: String,
    /// Manually set version number for the scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_sequence_id: Option<i64>,
    /// When the branch was last scanned, in epoch milliseconds.
    pub sync_time: i64,
    /// References found on the branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<ReferenceRep>>,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, serde_json::Value>,
}

/// A repository connected to code references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRep {
    /// Name of the repository.
    pub name: String,
    /// URL to the repository's source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    /// Template for constructing links to individual commits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_url_template: Option<String>,
    /// Template for constructing links to individual lines of code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunk_url_template: Option<String>,
    /// Type of the repository: `bitbucket`, `custom`, `github` or `gitlab`.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Name of the default branch.
    pub default_branch: String,
    /// Whether code reference collection is enabled.
    pub enabled: bool,
    /// Version of the code references tool that last scanned the repository.
    pub version: i32,
    /// Branches of the repository, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<BranchRep>>,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, serde_json::Value>,
    /// Details on the allowed and denied actions for the repository.
    #[serde(rename = "_access", skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
}

/// The repositories connected to code references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryCollectionRep {
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    /// The repositories.
    pub items: Vec<RepositoryRep>,
}

impl Paginated for RepositoryCollectionRep {
    type Item = RepositoryRep;

    fn items(&self) -> &[RepositoryRep] {
        &self.items
    }

    fn links(&self) -> Option<&HashMap<String, Link>> {
        Some(&self.links)
    }
}

/// Request body for connecting a repository.
///
/// ```
/// # use launchdarkly_api_client::models::RepositoryPost;
/// let body = RepositoryPost::new("api-server")
///     .set_type("github")
///     .set_source_link("https://github.com/example/api-server");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPost {
    /// Name of the repository.
    pub name: String,
    /// URL to the repository's source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    /// Template for constructing links to individual commits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_url_template: Option<String>,
    /// Template for constructing links to individual lines of code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunk_url_template: Option<String>,
    /// Type of the repository. Defaults to `custom`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Name of the default branch. Defaults to `main`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

impl RepositoryPost {
    /// Create a new instance with the required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the [source_link][Self::source_link] field.
    pub fn set_source_link(mut self, source_link: impl Into<String>) -> Self {
        self.source_link = Some(source_link.into());
        self
    }

    /// Set the [commit_url_template][Self::commit_url_template] field.
    pub fn set_commit_url_template(mut self, template: impl Into<String>) -> Self {
        self.commit_url_template = Some(template.into());
        self
    }

    /// Set the [hunk_url_template][Self::hunk_url_template] field.
    pub fn set_hunk_url_template(mut self, template: impl Into<String>) -> Self {
        self.hunk_url_template = Some(template.into());
        self
    }

    /// Set the `type` field.
    pub fn set_type(mut self, r#type: impl Into<String>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Set the [default_branch][Self::default_branch] field.
    pub fn set_default_branch(mut self, default_branch: impl Into<String>) -> Self {
        self.default_branch = Some(default_branch.into());
        self
    }
}

/// Code reference counts for one flag in one repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticRep {
    /// Name of the repository.
    pub name: String,
    /// Type of the repository.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Source URL of the repository.
    pub source_link: String,
    /// Default branch of the repository.
    pub default_branch: String,
    /// Whether code reference collection is enabled.
    pub enabled: bool,
    /// Version of the code references tool that last scanned the repository.
    pub version: i32,
    /// Number of hunks referencing the flag.
    pub hunk_count: i32,
    /// Number of files referencing the flag.
    pub file_count: i32,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    /// Latest commit scanned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_commit_time: Option<i64>,
}

/// Code reference statistics for a project, keyed by flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticCollectionRep {
    /// Per-repository counts, keyed by flag key.
    #[serde(default)]
    pub flags: HashMap<String, Vec<StatisticRep>>,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
}

/// Links to the per-project statistics resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsProject {
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
}

/// Root resource of the code reference statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsRoot {
    /// Projects with code reference statistics.
    #[serde(default)]
    pub projects: Vec<StatisticsProject>,
    /// Hypermedia links.
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, Link>>,
}
