/// Return the client library version
pub fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
