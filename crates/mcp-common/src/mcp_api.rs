use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGuideContentParams {
    /// The name of the guide (e.g., 'getting_started', 'active_record_basics')
    #[serde(rename = "guideName")]
    pub guide_name: String,
}

/// Success envelope: `value` rendered as pretty-printed JSON text.
///
/// Serialization failures are reported as an error envelope instead.
pub fn json_text_result<T: Serialize + ?Sized>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_text_result(format!("failed to serialize response: {e}")),
    }
}

/// Error envelope: a single text item with `isError` set.
pub fn error_text_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .expect("text content")
    }

    #[test]
    fn json_result_is_pretty_and_not_error() {
        let result = json_text_result(&serde_json::json!({ "a": [1, 2] }));
        assert_ne!(result.is_error, Some(true));
        let text = first_text(&result);
        assert!(text.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["a"][1], 2);
    }

    #[test]
    fn error_result_sets_flag() {
        let result = error_text_result("boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "boom");
    }

    #[test]
    fn params_use_camel_case_field() {
        let params: GetGuideContentParams =
            serde_json::from_value(serde_json::json!({ "guideName": "routing" })).unwrap();
        assert_eq!(params.guide_name, "routing");
    }
}
