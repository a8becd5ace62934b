use hyper::client::HttpConnector;
use hyper_rustls::HttpsConnector;
use hyper_rustls::HttpsConnectorBuilder;

// Creates the HTTPS connector used by the default transport.
//
// Certificates are verified against the system's native certificate store. Plain HTTP is still
// permitted so that the client can be pointed at a local mock of the API.
pub fn create_https_connector() -> HttpsConnector<HttpConnector> {
    HttpsConnectorBuilder::new()
        .with_native_roots()
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}
