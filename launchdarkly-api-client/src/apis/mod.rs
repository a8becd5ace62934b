//! Service handles and request builders, one module per API tag.
//!
//! A handle is obtained from the [crate::Client] (e.g. [crate::Client::feature_flags]). Its
//! methods take the path parameters of an operation and return a request builder. Optional
//! query parameters, headers and the body are set on the builder, and `execute().await` sends
//! the request.
//!
//! Required parameters that are not part of the path, such as request bodies or the
//! `LD-API-Version` header of beta operations, are checked by `execute` before anything is
//! sent; a missing one fails with [crate::Error::ParameterRequired].

use std::fmt::{self, Display, Formatter};

mod account_members;
mod ai_configs;
mod code_refs;
mod feature_flags;
mod other;

pub use account_members::{
    AccountMembersApi, DeleteMember, GetMember, GetMembers, PatchMember, PostMembers,
};
pub use ai_configs::{
    AiConfigsApi, DeleteAiConfig, GetAiConfig, GetAiConfigVariation, GetAiConfigs, PatchAiConfig,
    PostAiConfig, PostAiConfigVariation,
};
pub use code_refs::{
    CodeRefsApi, DeleteRepository, GetRepositories, GetRepository, GetRootStatistic,
    GetStatistics, PatchRepository, PostRepository,
};
pub use feature_flags::{
    DeleteFeatureFlag, FeatureFlagsApi, GetFeatureFlag, GetFeatureFlags, PatchFeatureFlag,
    PostFeatureFlag,
};
pub use other::{GetIps, GetRoot, OtherApi};

/// Value of the `LD-API-Version` header required by beta operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LdApiVersion {
    /// Opt in to a beta API.
    Beta,
}

impl Display for LdApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LdApiVersion::Beta => write!(f, "beta"),
        }
    }
}
