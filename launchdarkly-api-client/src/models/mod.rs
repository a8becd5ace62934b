//! Resource types exchanged with the LaunchDarkly REST API.
//!
//! Required fields are plain values and are always serialized. Optional fields are `Option`s
//! and are left out of the encoded JSON when unset; fields where an explicit `null` carries
//! meaning use [Nullable]. Unknown properties in responses are ignored.

mod ai_configs;
mod code_refs;
mod common;
mod errors;
mod flags;
mod members;
mod nullable;
mod other;
mod patch;

pub use ai_configs::{
    AiConfig, AiConfigMaintainer, AiConfigPatch, AiConfigPost, AiConfigVariation,
    AiConfigVariationPost, AiConfigVariationsResponse, AiConfigs, Message, ModelConfigRef,
};
pub use code_refs::{
    BranchRep, HunkRep, ReferenceRep, RepositoryCollectionRep, RepositoryPost, RepositoryRep,
    StatisticCollectionRep, StatisticRep, StatisticsProject, StatisticsRoot,
};
pub use common::{Access, AccessAllowed, AccessDenied, AccessReason, Link, Paginated};
pub use errors::{
    ApiErrorBody, ErrorKind, ForbiddenErrorRep, GenericErrorRep, InvalidRequestErrorRep,
    MethodNotAllowedErrorRep, NotFoundErrorRep, RateLimitedErrorRep, StatusConflictErrorRep,
    UnauthorizedErrorRep, UnprocessableEntityErrorRep,
};
pub use flags::{
    ClientSideAvailability, Defaults, FeatureFlag, FeatureFlagBody, FeatureFlagConfig,
    FeatureFlagPatch, FeatureFlags, Variation,
};
pub use members::{Member, MemberPermissionGrant, MemberTeamSummary, Members, NewMemberForm};
pub use nullable::Nullable;
pub use other::{IpList, RootResponse};
pub use patch::{Instruction, PatchOperation, PatchWithComment, SemanticPatch};
