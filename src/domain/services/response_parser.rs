use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{DomainError, ReviewComment, ReviewResult, Severity, MAX_REVIEW_COMMENTS};

/// Pull a JSON value out of raw model output.
///
/// Attempts, in order:
/// 1. the whole text;
/// 2. the span from the first `{` to the last `}`;
/// 3. that span with ```` ```json ```` / ```` ``` ```` fence markers removed.
///
/// Prose containing braces around the object can still defeat step 2; the
/// result is then a `MalformedResponse`, never a partial object.
pub fn extract_json(text: &str) -> Result<Value, DomainError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let (start, end) = match (text.find('{'), text.rfind('}')) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            warn!("Model response contains no JSON object");
            return Err(DomainError::malformed("no JSON object found in response"));
        }
    };

    let slice = &text[start..=end];
    if let Ok(value) = serde_json::from_str::<Value>(slice) {
        debug!("Recovered JSON object from surrounding prose");
        return Ok(value);
    }

    let unfenced = slice.replace("```json", "").replace("```", "");
    match serde_json::from_str::<Value>(&unfenced) {
        Ok(value) => {
            debug!("Recovered JSON object after stripping code fences");
            Ok(value)
        }
        Err(e) => {
            warn!("Could not parse model response as JSON: {e}");
            Err(DomainError::malformed(format!("invalid JSON in response: {e}")))
        }
    }
}

/// Coerce a parsed value into a [`ReviewResult`].
///
/// Malformed fields are dropped rather than failing the whole response.
pub fn normalize_review(value: &Value) -> ReviewResult {
    let comments: Vec<ReviewComment> = value
        .get("comments")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(normalize_comment)
                .take(MAX_REVIEW_COMMENTS)
                .collect()
        })
        .unwrap_or_default();

    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .map(str::to_string);

    ReviewResult::new(comments, summary)
}

fn normalize_comment(entry: &Value) -> Option<ReviewComment> {
    let text = entry.get("comment")?.as_str()?;
    let severity = Severity::from_model_value(entry.get("severity").and_then(Value::as_str));

    let mut comment = ReviewComment::new(text).with_severity(severity);
    if let Some(quote) = entry.get("quote").and_then(Value::as_str) {
        comment = comment.with_quote(quote);
    }
    Some(comment)
}

/// Extract and normalize a review from raw model output.
pub fn parse_review(text: &str) -> Result<ReviewResult, DomainError> {
    let value = extract_json(text)?;
    let result = normalize_review(&value);
    debug!(
        "Parsed review with {} comments (summary: {})",
        result.comments().len(),
        result.summary().is_some()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extract_json_roundtrips_serialized_values() {
        let values = [
            json!({"comments": [{"comment": "x", "severity": "info"}], "summary": "s"}),
            json!({"nested": {"a": [1, 2, 3]}, "flag": true, "none": null}),
            json!([1, "two", {"three": 3}]),
            json!("plain string"),
            json!(42),
        ];
        for value in values {
            let text = serde_json::to_string(&value).unwrap();
            assert_eq!(extract_json(&text).unwrap(), value);
        }
    }

    #[test]
    fn extract_json_tolerates_surrounding_prose() {
        let text = r#"prefix text {"comments":[],"summary":"s"} suffix"#;
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"comments": [], "summary": "s"}));
    }

    #[test]
    fn extract_json_tolerates_code_fences() {
        let inner = r#"{"comments":[{"comment":"x"}],"summary":"s"}"#;
        let fenced = format!("```json\n{inner}\n```");
        assert_eq!(
            extract_json(&fenced).unwrap(),
            extract_json(inner).unwrap()
        );
    }

    #[test]
    fn extract_json_strips_fences_inside_the_braces() {
        let text = "{\"comments\": [], ```json\n\"summary\": \"s\"}";
        let value = extract_json(text).unwrap();
        assert_eq!(value["summary"], "s");
    }

    #[test]
    fn extract_json_rejects_text_without_object() {
        let err = extract_json("I could not review this text.").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn extract_json_rejects_reversed_braces() {
        let err = extract_json("} nothing here {").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn extract_json_rejects_broken_object() {
        let err = extract_json(r#"Sure! {"comments": [ {"comment": "x", } oops }"#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn bogus_severity_becomes_info() {
        let result = normalize_review(&json!({
            "comments": [{"comment": "x", "severity": "bogus"}]
        }));
        assert_eq!(result.comments()[0].severity(), Severity::Info);
    }

    #[test]
    fn missing_severity_becomes_info() {
        let result = normalize_review(&json!({"comments": [{"comment": "x"}]}));
        assert_eq!(result.comments()[0].severity(), Severity::Info);
    }

    #[test]
    fn keeps_first_ten_comments_in_order() {
        let comments: Vec<Value> = (0..15)
            .map(|i| json!({"comment": format!("c{i}"), "severity": "warning"}))
            .collect();
        let result = normalize_review(&json!({ "comments": comments }));

        assert_eq!(result.comments().len(), 10);
        let texts: Vec<&str> = result.comments().iter().map(|c| c.comment()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("c{i}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn drops_entries_without_string_comment() {
        let result = normalize_review(&json!({
            "comments": [
                {"comment": 5},
                {"quote": "orphan"},
                "not an object",
                {"comment": "kept", "quote": "the data shows", "severity": "suggestion"}
            ]
        }));
        assert_eq!(result.comments().len(), 1);
        let kept = &result.comments()[0];
        assert_eq!(kept.comment(), "kept");
        assert_eq!(kept.quote(), Some("the data shows"));
        assert_eq!(kept.severity(), Severity::Suggestion);
    }

    #[test]
    fn non_string_quote_is_omitted() {
        let result = normalize_review(&json!({
            "comments": [{"comment": "x", "quote": ["a", "b"]}]
        }));
        assert_eq!(result.comments()[0].quote(), None);
    }

    #[test]
    fn non_array_comments_and_non_string_summary_are_ignored() {
        let result = normalize_review(&json!({"comments": {"comment": "x"}, "summary": 3}));
        assert!(result.comments().is_empty());
        assert_eq!(result.summary(), None);
    }

    #[test]
    fn non_object_value_yields_empty_review() {
        let result = normalize_review(&json!(["comment"]));
        assert!(result.is_empty());
    }

    #[test]
    fn parse_review_combines_extraction_and_normalization() {
        let raw = "Here is my review:\n```json\n{\"comments\":[{\"quote\":\"was\",\"comment\":\"Use 'were'.\",\"severity\":\"warning\"}],\"summary\":\"Solid draft.\"}\n```";
        let result = parse_review(raw).unwrap();
        assert_eq!(result.comments().len(), 1);
        assert_eq!(result.comments()[0].severity(), Severity::Warning);
        assert_eq!(result.summary(), Some("Solid draft."));
    }
}
