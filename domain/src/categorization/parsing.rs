//! Category response parsing.
//!
//! These functions turn a free-form LLM reply into category labels. They are
//! pure text handling with no I/O or retries.
//!
//! # Strategy
//!
//! | Reply shape | Result |
//! |-------------|--------|
//! | `{"categories": [...]}` | the `categories` items |
//! | `[...]` | the array items |
//! | any other JSON value | one-element list with the value as text |
//! | not JSON | comma-split fallback via [`split_fallback`] |
//!
//! Whatever the branch, [`normalize_categories`] runs last.

use serde_json::Value;

/// Outcome of the structured parse step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    /// The reply was valid JSON; raw (not yet normalized) labels.
    Structured(Vec<String>),
    /// The reply was not JSON.
    Malformed,
}

impl ParsedResponse {
    /// Try to read the reply as JSON.
    ///
    /// A reply wrapped in a markdown code fence (```` ```json ... ``` ````) is
    /// unwrapped first.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(strip_code_fence(raw)) {
            Ok(Value::Object(mut map)) if map.contains_key("categories") => {
                let categories = map.remove("categories").unwrap_or(Value::Null);
                ParsedResponse::Structured(value_to_labels(categories))
            }
            Ok(value) => ParsedResponse::Structured(value_to_labels(value)),
            Err(_) => ParsedResponse::Malformed,
        }
    }
}

/// Parse a raw model reply into normalized category labels.
///
/// # Examples
///
/// ```
/// use memcat_domain::parse_category_response;
///
/// assert_eq!(
///     parse_category_response(r#"{"categories": ["Work", " Family "]}"#),
///     vec!["work", "family"]
/// );
/// assert_eq!(parse_category_response(r#"["Health", "Travel"]"#), vec!["health", "travel"]);
/// assert_eq!(parse_category_response("Work,,  , Health"), vec!["work", "health"]);
/// ```
pub fn parse_category_response(raw: &str) -> Vec<String> {
    let labels = match ParsedResponse::parse(raw) {
        ParsedResponse::Structured(labels) => labels,
        ParsedResponse::Malformed => split_fallback(strip_code_fence(raw)),
    };
    normalize_categories(labels)
}

/// Split a non-JSON reply on commas, trimming fragments and dropping empty ones.
pub fn split_fallback(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase and trim every label; labels left empty are dropped.
pub fn normalize_categories<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| label.as_ref().trim().to_lowercase())
        .filter(|label| !label.is_empty())
        .collect()
}

fn value_to_labels(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        other => vec![value_to_text(other)],
    }
}

// Strings keep their content; everything else uses its JSON text.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return raw;
    };
    let Some(body) = body.strip_suffix("```") else {
        return raw;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.split_once('\n') {
        Some((_, rest)) => rest.trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_category_response Tests ====================

    #[test]
    fn test_categories_object() {
        let reply = r#"{"categories": ["Work", " Family "]}"#;
        assert_eq!(parse_category_response(reply), vec!["work", "family"]);
    }

    #[test]
    fn test_bare_array() {
        assert_eq!(
            parse_category_response(r#"["Health", "Travel"]"#),
            vec!["health", "travel"]
        );
    }

    #[test]
    fn test_comma_separated_text() {
        assert_eq!(
            parse_category_response("Work, Family, Health"),
            vec!["work", "family", "health"]
        );
    }

    #[test]
    fn test_comma_fallback_drops_empty_fragments() {
        assert_eq!(parse_category_response("Work,,  , Health"), vec!["work", "health"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(
            parse_category_response(r#"["Work", "work", "WORK "]"#),
            vec!["work", "work", "work"]
        );
    }

    #[test]
    fn test_scalar_values_become_one_element_list() {
        assert_eq!(parse_category_response("42"), vec!["42"]);
        assert_eq!(parse_category_response("true"), vec!["true"]);
        assert_eq!(parse_category_response(r#""Finance""#), vec!["finance"]);
    }

    #[test]
    fn test_object_without_categories_is_stringified() {
        assert_eq!(
            parse_category_response(r#"{"labels": ["Work"]}"#),
            vec![r#"{"labels":["work"]}"#]
        );
    }

    #[test]
    fn test_categories_key_with_scalar_value() {
        assert_eq!(
            parse_category_response(r#"{"categories": "Travel"}"#),
            vec!["travel"]
        );
    }

    #[test]
    fn test_non_string_array_items() {
        assert_eq!(parse_category_response("[1, false]"), vec!["1", "false"]);
    }

    #[test]
    fn test_empty_structured_entries_dropped() {
        assert_eq!(
            parse_category_response(r#"{"categories": ["", "  ", "Goals"]}"#),
            vec!["goals"]
        );
    }

    #[test]
    fn test_code_fenced_plain_text_uses_fence_body() {
        assert_eq!(
            parse_category_response("```\nWork, Family\n```"),
            vec!["work", "family"]
        );
    }

    #[test]
    fn test_code_fenced_json() {
        let reply = "```json\n{\"categories\": [\"Projects\", \"AI/ML & Technology\"]}\n```";
        assert_eq!(
            parse_category_response(reply),
            vec!["projects", "ai/ml & technology"]
        );
    }

    #[test]
    fn test_empty_reply_yields_nothing() {
        assert!(parse_category_response("").is_empty());
        assert!(parse_category_response("   ").is_empty());
    }

    // ==================== ParsedResponse Tests ====================

    #[test]
    fn test_parse_tags_malformed() {
        assert_eq!(ParsedResponse::parse("Work, Family"), ParsedResponse::Malformed);
        assert_eq!(ParsedResponse::parse("{not json"), ParsedResponse::Malformed);
    }

    #[test]
    fn test_parse_keeps_raw_labels() {
        assert_eq!(
            ParsedResponse::parse(r#"["  Work "]"#),
            ParsedResponse::Structured(vec!["  Work ".to_string()])
        );
    }

    #[test]
    fn test_unterminated_fence_is_malformed() {
        assert_eq!(
            ParsedResponse::parse("```json\n[\"Work\"]"),
            ParsedResponse::Malformed
        );
    }

    // ==================== Helpers ====================

    #[test]
    fn test_split_fallback_keeps_case() {
        assert_eq!(split_fallback(" News ,Legal"), vec!["News", "Legal"]);
    }

    #[test]
    fn test_normalize_categories() {
        assert_eq!(
            normalize_categories(["  Customer Support", "NEWS", "\t"]),
            vec!["customer support", "news"]
        );
    }
}
