use std::sync::Arc;

use futures::future::BoxFuture;
use hyper::client::connect::Connect;
use hyper::{Body, Request, Response};

/// Error produced by an [HttpTransport] when no response could be obtained.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Trait which performs a single HTTP exchange on behalf of the client.
///
/// The default transport is a [hyper::Client]; any `hyper::Client` built with a different
/// connector (proxies, custom TLS roots, ...) can be supplied through
/// [crate::ConfigBuilder::transport].
pub trait HttpTransport: Send + Sync {
    /// Send the request and resolve to the response headers and streaming body.
    fn send(
        &self,
        request: Request<Body>,
    ) -> BoxFuture<'static, Result<Response<Body>, TransportError>>;
}

impl<C> HttpTransport for hyper::Client<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    fn send(
        &self,
        request: Request<Body>,
    ) -> BoxFuture<'static, Result<Response<Body>, TransportError>> {
        let response = self.request(request);
        Box::pin(async move { response.await.map_err(TransportError::from) })
    }
}

#[cfg(feature = "rustls")]
pub(crate) fn default_transport() -> Arc<dyn HttpTransport> {
    let connector = crate::https_connector::create_https_connector();
    Arc::new(hyper::Client::builder().build::<_, Body>(connector))
}

#[cfg(not(feature = "rustls"))]
pub(crate) fn default_transport() -> Arc<dyn HttpTransport> {
    warn!("Built without the rustls feature; only plain HTTP endpoints can be reached");
    Arc::new(hyper::Client::new())
}
