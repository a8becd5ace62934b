//! Substitution of path parameters into operation path templates.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched in a path segment: the RFC 3986 "unreserved" set.
pub(crate) const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Replaces each `{name}` placeholder in `template` with the percent-encoded value.
///
/// Every value becomes exactly one path segment, so a `/` inside a key cannot change the
/// route the request is sent to.
pub(crate) fn build_path(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |path, (name, value)| {
            path.replace(&format!("{{{}}}", name), &encode_segment(value))
        })
}

pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn substitutes_every_parameter() {
        let path = build_path(
            "/api/v2/projects/{projectKey}/ai-configs/{configKey}",
            &[("projectKey", "default"), ("configKey", "chat-bot")],
        );
        assert_eq!("/api/v2/projects/default/ai-configs/chat-bot", path);
    }

    #[test]
    fn reserved_characters_stay_within_one_segment() {
        let path = build_path(
            "/api/v2/projects/{projectKey}/ai-configs/{configKey}",
            &[("projectKey", "team/alpha"), ("configKey", "my config")],
        );
        assert_eq!("/api/v2/projects/team%2Falpha/ai-configs/my%20config", path);
        assert_eq!(7, path.split('/').count());
    }

    #[test]
    fn values_cannot_inject_placeholders() {
        let path = build_path(
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
            &[("projectKey", "{featureFlagKey}"), ("featureFlagKey", "flag")],
        );
        assert_eq!("/api/v2/flags/%7BfeatureFlagKey%7D/flag", path);
    }

    #[test_case("simple-key_1.0~x", "simple-key_1.0~x"; "unreserved characters are kept")]
    #[test_case("a b", "a%20b"; "space")]
    #[test_case("a/b", "a%2Fb"; "slash")]
    #[test_case("a?b#c", "a%3Fb%23c"; "query and fragment delimiters")]
    #[test_case("caf\u{e9}", "caf%C3%A9"; "non ascii")]
    #[test_case("", ""; "empty")]
    fn encodes_segments(value: &str, expected: &str) {
        assert_eq!(expected, encode_segment(value));
    }
}
