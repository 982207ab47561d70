//! Method names derived from operation summaries.
//!
//! A summary like "Get Widget Version" is split into tokens; the first two
//! usable tokens are swapped and the rest appended, giving `widgetGetVersion`.

use tracing::{debug, error};

use crate::config::Policy;
use crate::error::{GenerateError, GenerateResult};
use crate::openapi::spec::Operation;

use super::utils::{capitalize_first, lowercase_first};

/// Characters removed once from every token, in this order.
const STRIPPED_ONCE: [char; 13] = [
    ')', '(', '[', ']', '-', ':', '.', ',', '/', '\\', '>', '<', '=',
];

/// Derive the client method name of an operation.
///
/// Returns `Ok(None)` when the operation must be skipped: an empty override
/// or a missing summary. Fails when the summary yields fewer than two tokens.
pub fn make_readable_method_name(
    method: &str,
    url: &str,
    operation: &Operation,
    policy: &Policy,
) -> GenerateResult<Option<String>> {
    let method = method.to_lowercase();

    if let Some(name) = policy.method_override(&method, url) {
        if name.is_empty() {
            debug!(%method, %url, "endpoint disabled by override");
            return Ok(None);
        }
        return Ok(Some(name.to_string()));
    }

    let Some(summary) = operation.summary.as_deref() else {
        error!(%method, %url, "operation has no summary, cannot derive a method name");
        return Ok(None);
    };

    let stripped = strip_placeholders(summary);
    let mut raw_parts: Vec<&str> = Vec::new();
    for part in stripped.split([' ', '/', ',']) {
        if !raw_parts.contains(&part) {
            raw_parts.push(part);
        }
    }
    debug!(%method, %url, parts = ?raw_parts, "summary tokens");

    let mut first: Option<String> = None;
    let mut second: Option<String> = None;
    let mut rest = String::new();

    for part in raw_parts.into_iter().filter(|p| !p.is_empty()) {
        let token = clean_token(part);
        if token.is_empty() {
            continue;
        }
        if first.is_none() {
            first = Some(token);
        } else if second.is_none() {
            second = Some(token);
        } else {
            rest.push_str(&token);
        }
    }

    match (first, second) {
        (Some(first), Some(second)) => Ok(Some(lowercase_first(&format!("{second}{first}{rest}")))),
        (first, second) => Err(GenerateError::MissingNamePrefix {
            method,
            url: url.to_string(),
            summary: summary.to_string(),
            first,
            second,
        }),
    }
}

/// Remove `{name}` placeholders (`[a-zA-Z0-9_-]+` inside braces).
fn strip_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let inner_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
            .unwrap_or(after.len());
        if inner_len > 0 && after[inner_len..].starts_with('}') {
            rest = &after[inner_len + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

/// Strip punctuation from a summary token and capitalize it.
///
/// Apostrophes go entirely, underscores up to three times, the remaining
/// punctuation once each; the first `&` reads as `And`.
fn clean_token(part: &str) -> String {
    let mut token = part.replace('\'', "").replacen('_', "", 3);
    for c in STRIPPED_ONCE {
        token = token.replacen(c, "", 1);
    }
    capitalize_first(&token.replacen('&', "And", 1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn op(summary: &str) -> Operation {
        Operation {
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    fn derive(summary: &str) -> GenerateResult<Option<String>> {
        make_readable_method_name("get", "/widget", &op(summary), &Policy::default())
    }

    #[test]
    fn test_object_is_moved_before_verb() {
        assert_eq!(derive("Get Widget Version").unwrap().as_deref(), Some("widgetGetVersion"));
        assert_eq!(derive("Get Widget").unwrap().as_deref(), Some("widgetGet"));
    }

    #[test]
    fn test_placeholders_and_separators() {
        assert_eq!(
            derive("get Widget/{widget_id} version,list").unwrap().as_deref(),
            Some("widgetGetVersionList")
        );
        // unmatched braces are kept as text and stripped later
        assert_eq!(strip_placeholders("a {b} {c d}"), "a  {c d}");
        assert_eq!(strip_placeholders("{}x"), "{}x");
    }

    #[test]
    fn test_tokens_are_deduplicated() {
        assert_eq!(
            derive("Get Widget Get Widget All").unwrap().as_deref(),
            Some("widgetGetAll")
        );
    }

    #[test]
    fn test_punctuation_is_cleaned() {
        assert_eq!(clean_token("user's"), "Users");
        assert_eq!(clean_token("a_b_c_d_e"), "Abcd_e");
        assert_eq!(clean_token("(beta)"), "Beta");
        assert_eq!(clean_token("p&g"), "PAndg");
        assert_eq!(clean_token("--"), "-");
        assert_eq!(clean_token("..."), "..");
        assert_eq!(
            derive("Create B_Program (version)").unwrap().as_deref(),
            Some("bProgramCreateVersion")
        );
    }

    #[test]
    fn test_tokens_emptied_by_cleaning_are_skipped() {
        assert_eq!(derive("Get - Widget").unwrap().as_deref(), Some("widgetGet"));
    }

    #[test]
    fn test_single_token_is_fatal() {
        let err = derive("Login").unwrap_err();
        assert!(matches!(
            &err,
            GenerateError::MissingNamePrefix { first: Some(first), second: None, url, .. }
                if first == "Login" && url == "/widget"
        ));
        assert!(err.to_string().contains("summary \"Login\""));
        assert!(matches!(
            derive("{id}"),
            Err(GenerateError::MissingNamePrefix { first: None, second: None, .. })
        ));
    }

    #[test]
    fn test_missing_summary_skips() {
        let name =
            make_readable_method_name("get", "/x", &Operation::default(), &Policy::default())
                .unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_overrides() {
        let policy = Policy::from_toml_str(
            r#"
[method-overrides]
"post:/login" = "__login"
"get:/websocket" = ""
"#,
        )
        .unwrap();

        // override wins even without a usable summary
        let name = make_readable_method_name("POST", "/login", &op("Login"), &policy).unwrap();
        assert_eq!(name.as_deref(), Some("__login"));

        let name =
            make_readable_method_name("get", "/websocket", &op("Get Socket"), &policy).unwrap();
        assert_eq!(name, None);
    }
}
