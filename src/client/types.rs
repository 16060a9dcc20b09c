// Wire types for the transpiler API
//
// These mirror the service's request and response shapes. Unrecognized
// response keys are kept in `extra` so the full body can be echoed back
// to the operator unchanged.

use serde::{Deserialize, Serialize};

/// Request body for /api/v1/transpile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranspileRequest {
    /// JavaScript source to convert
    pub code: String,
}

/// Request body for /api/v1/decompile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompileRequest {
    /// INAV commands in execution order
    pub commands: Vec<String>,
}

/// Response body for both transform endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    /// Whether the service reports the transform as successful
    #[serde(default)]
    pub success: bool,
    /// Generated INAV commands (transpile direction)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
    /// Reconstructed JavaScript source (decompile direction)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Any other service-defined keys, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TransformResponse {
    /// Commands payload, present only when the service reported success
    /// and produced at least one command.
    pub fn generated_commands(&self) -> Option<&[String]> {
        if !self.success {
            return None;
        }
        self.commands.as_deref().filter(|commands| !commands.is_empty())
    }

    /// Code payload, present only when the service reported success and
    /// produced a non-empty snippet.
    pub fn generated_code(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_success_reads_as_failure() {
        let response: TransformResponse =
            serde_json::from_value(json!({ "commands": ["logic 0 1"] })).unwrap();
        assert!(!response.success);
        assert!(response.generated_commands().is_none());
    }

    #[test]
    fn test_generated_commands_requires_success_and_payload() {
        let response: TransformResponse = serde_json::from_value(json!({
            "success": true,
            "commands": ["logic 0 1", "setflight_arm"]
        }))
        .unwrap();
        assert_eq!(response.generated_commands().map(<[String]>::len), Some(2));

        let empty: TransformResponse = serde_json::from_value(json!({
            "success": true,
            "commands": []
        }))
        .unwrap();
        assert!(empty.generated_commands().is_none());
    }

    #[test]
    fn test_unknown_keys_are_preserved() {
        let response: TransformResponse = serde_json::from_value(json!({
            "success": true,
            "code": "if (x) { y(); }",
            "warnings": ["unused variable"],
            "timestamp": "2024-05-01T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(response.extra["warnings"], json!(["unused variable"]));
        assert_eq!(response.generated_code(), Some("if (x) { y(); }"));
    }

    #[test]
    fn test_empty_code_is_not_a_payload() {
        let response: TransformResponse = serde_json::from_value(json!({
            "success": true,
            "code": ""
        }))
        .unwrap();
        assert!(response.generated_code().is_none());
    }
}
