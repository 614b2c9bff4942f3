//! Turns raw probe errors into short messages fit for end users.

const MAX_RAW_LEN: usize = 100;

/// Ordered, first match wins. Patterns are case-sensitive substrings.
const KNOWN_ERRORS: &[(&[&str], &str)] = &[
    (
        &["no such host", "lookup"],
        "Website does not exist or cannot be reached",
    ),
    (&["connection refused"], "Connection refused by server"),
    (&["timeout"], "Request timed out"),
    (&["certificate"], "SSL certificate error"),
];

pub fn simplify_error(raw: &str) -> String {
    for (patterns, message) in KNOWN_ERRORS {
        if patterns.iter().any(|p| raw.contains(p)) {
            return (*message).to_string();
        }
    }

    if raw.chars().count() > MAX_RAW_LEN {
        return "Unable to reach website".to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_failures() {
        assert_eq!(
            simplify_error("dial tcp: lookup example.com: no such host"),
            "Website does not exist or cannot be reached"
        );
        assert_eq!(
            simplify_error("lookup failed"),
            "Website does not exist or cannot be reached"
        );
    }

    #[test]
    fn refused_and_timeouts() {
        assert_eq!(
            simplify_error("dial tcp 127.0.0.1:1: connect: connection refused"),
            "Connection refused by server"
        );
        assert_eq!(
            simplify_error("context deadline exceeded: timeout"),
            "Request timed out"
        );
    }

    #[test]
    fn certificate_errors() {
        assert_eq!(
            simplify_error("x509: certificate has expired"),
            "SSL certificate error"
        );
    }

    #[test]
    fn rules_apply_in_order() {
        // both "lookup" and "timeout": the first rule wins
        assert_eq!(
            simplify_error("lookup timeout"),
            "Website does not exist or cannot be reached"
        );
        // both "connection refused" and "certificate": refused comes first
        assert_eq!(
            simplify_error("certificate check skipped, connection refused"),
            "Connection refused by server"
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(simplify_error("TIMEOUT"), "TIMEOUT");
    }

    #[test]
    fn long_unknown_errors_are_collapsed() {
        let raw = "x".repeat(150);
        assert_eq!(simplify_error(&raw), "Unable to reach website");

        let boundary = "y".repeat(100);
        assert_eq!(simplify_error(&boundary), boundary);
    }

    #[test]
    fn short_unknown_errors_pass_through() {
        let raw = "unexpected EOF here";
        assert_eq!(raw.len(), 19);
        assert_eq!(simplify_error(raw), raw);
        assert_eq!(simplify_error(""), "");
    }
}
