use hyper::Method;
use crate::error::Error;
use crate::models::{ErrorKind, IpList, RootResponse};
use crate::operation::{Operation, APPLICATION_JSON};
use crate::request::ApiRequest;
use crate::response::ApiResponse;
use crate::Client;

static GET_ROOT: Operation = Operation {
    id: "getRoot",
    method: Method::GET,
    path: "/api/v2",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[(429, ErrorKind::RateLimited)],
};

static GET_IPS: Operation = Operation {
    id: "getIps",
    method: Method::GET,
    path: "/api/v2/public-ip-list",
    accepts: &[APPLICATION_JSON],
    content_types: &[],
    errors: &[(429, ErrorKind::RateLimited)],
};

/// Operations that do not belong to a resource, returned by [Client::other].
#[derive(Clone)]
pub struct OtherApi {
    client: Client,
}

impl OtherApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the links to the top level resources of the API.
    pub fn get_root(&self) -> GetRoot {
        GetRoot {
            client: self.client.clone(),
        }
    }

    /// Get the IP ranges LaunchDarkly uses, e.g. for firewall allow lists.
    pub fn get_ips(&self) -> GetIps {
        GetIps {
            client: self.client.clone(),
        }
    }
}

/// Request builder for [OtherApi::get_root].
#[must_use]
pub struct GetRoot {
    client: Client,
}

impl GetRoot {
    /// Send the request.
    pub async fn execute(self) -> Result<(RootResponse, ApiResponse), Error> {
        let request = ApiRequest::new(GET_ROOT.path.to_string());
        self.client.execute(&GET_ROOT, request).await
    }
}

/// Request builder for [OtherApi::get_ips].
#[must_use]
pub struct GetIps {
    client: Client,
}

impl GetIps {
    /// Send the request.
    pub async fn execute(self) -> Result<(IpList, ApiResponse), Error> {
        let request = ApiRequest::new(GET_IPS.path.to_string());
        self.client.execute(&GET_IPS, request).await
    }
}
