//! Issue-reference extraction from free text.
//!
//! Titles and scenario names may embed ticket-style issue references
//! (`"Login [ISSUE-1,ISSUE-2]"`, `"should_login_JIRA-42"`). The extraction
//! rule is the shared contract between the resolver and downstream report
//! consumers: an uppercase alphanumeric project key, a hyphen, and digits,
//! optionally prefixed with `#`.

use std::sync::LazyLock;

use regex::Regex;

// The `#` prefix is consumed but not part of the returned identifier.
static ISSUE_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#?([A-Z][A-Z0-9]*-\d+)").unwrap());

/// Extract all issue references embedded in `text`, in the order
/// encountered. No deduplication; empty when none are found.
pub fn issues_in(text: &str) -> Vec<String> {
    ISSUE_REFERENCE_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
