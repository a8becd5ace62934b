//! launchdarkly-api-client is a client library for the LaunchDarkly REST API.
//!
//! The crate is organised the way the API is documented: resource types live in [models], and
//! each API tag gets a service handle in [apis] whose methods return request builders. A request
//! builder is populated with chained setters and finished with `execute().await`.
//!
//! ```no_run
//! # use launchdarkly_api_client::{Client, ConfigBuilder, Error};
//! # async fn run() -> Result<(), Error> {
//! let client = Client::build(ConfigBuilder::new().api_key("api-key").build())
//!     .expect("client failed to build");
//!
//! let (members, response) = client
//!     .account_members()
//!     .get_members()
//!     .limit(20)
//!     .filter("role:admin")
//!     .execute()
//!     .await?;
//!
//! println!("{} admins, {:?}", members.items.len(), response.rate_limit());
//! # Ok(())
//! # }
//! ```
//!
//! For more information, see the LaunchDarkly API documentation:
//! <https://launchdarkly.com/docs/api>

#![deny(rustdoc::missing_crate_level_docs)]
#![deny(missing_docs)]

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate serde_json;

use lazy_static::lazy_static;

pub use client::{BuildError, Client};
pub use config::{Config, ConfigBuilder};
pub use credentials::{ApiKey, CredentialProvider};
pub use error::Error;
pub use models::{ApiErrorBody, ErrorKind, Nullable, Paginated};
pub use rate_limit::{RateLimit, RetryAfter};
pub use response::ApiResponse;
pub use service_endpoints::{ServiceEndpoints, ServiceEndpointsBuilder};
pub use transport::{HttpTransport, TransportError};
pub use version::version_string;

pub mod apis;
pub mod models;

mod client;
mod config;
mod credentials;
mod error;
#[cfg(feature = "rustls")]
mod https_connector;
mod operation;
mod path;
mod query;
mod rate_limit;
mod request;
mod response;
mod service_endpoints;
mod test_common;
mod transport;
mod version;

static LD_API_VERSION_HEADER: &str = "LD-API-Version";

lazy_static! {
    pub(crate) static ref USER_AGENT: String =
        "launchdarkly-api-client-rust/".to_owned() + version::version_string();
}
