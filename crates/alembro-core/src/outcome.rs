//! Structured result returned to the caller for every command

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed human-readable messages shown to the app
pub mod messages {
    pub const ACTIVITY_NOT_FOUND: &str = "Chrome não encontrado";
    pub const NO_SIGNATURE: &str = "Nenhuma assinatura encontrada";
    pub const INTERNAL_ERROR_PREFIX: &str = "Erro ao obter assinatura";
    pub const NOT_IMPLEMENTED_PREFIX: &str = "Método não implementado";
    pub const INVALID_ARGUMENTS_PREFIX: &str = "Argumentos inválidos";
}

/// Stable error kinds exposed across the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented,
    #[serde(rename = "ACTIVITY_NOT_FOUND")]
    ActivityNotFound,
    #[serde(rename = "NO_SIGNATURE")]
    NoSignature,
    #[serde(rename = "ERROR")]
    InternalError,
}

impl FailureKind {
    /// Wire code, as seen by the UI layer
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::NotImplemented => "NOT_IMPLEMENTED",
            FailureKind::ActivityNotFound => "ACTIVITY_NOT_FOUND",
            FailureKind::NoSignature => "NO_SIGNATURE",
            FailureKind::InternalError => "ERROR",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Tagged outcome of one handler invocation
///
/// Serialized as `{"status":"success","value":…}` or
/// `{"status":"error","code":…,"message":…}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OperationOutcome {
    Success {
        value: Value,
    },
    #[serde(rename = "error")]
    Failure {
        #[serde(rename = "code")]
        kind: FailureKind,
        message: String,
    },
}

impl OperationOutcome {
    pub fn success(value: Value) -> Self {
        OperationOutcome::Success { value }
    }

    /// Success without payload
    pub fn unit() -> Self {
        OperationOutcome::Success { value: Value::Null }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        OperationOutcome::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn not_implemented(command: &str) -> Self {
        Self::failure(
            FailureKind::NotImplemented,
            format!("{}: {}", messages::NOT_IMPLEMENTED_PREFIX, command),
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            OperationOutcome::Success { .. } => None,
            OperationOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            OperationOutcome::Success { value } => Some(value),
            OperationOutcome::Failure { .. } => None,
        }
    }

    /// JSON wire form
    pub fn to_json(&self) -> String {
        // Value and String payloads always serialize
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"status":"error","code":"ERROR","message":{:?}}}"#,
                e.to_string()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_wire_form() {
        let outcome = OperationOutcome::success(json!({"digest": "abc="}));
        let value: Value = serde_json::from_str(&outcome.to_json()).unwrap();
        assert_eq!(value, json!({"status": "success", "value": {"digest": "abc="}}));
    }

    #[test]
    fn test_unit_success_wire_form() {
        let value: Value = serde_json::from_str(&OperationOutcome::unit().to_json()).unwrap();
        assert_eq!(value, json!({"status": "success", "value": null}));
    }

    #[test]
    fn test_failure_wire_form() {
        let outcome = OperationOutcome::failure(FailureKind::InternalError, "boom");
        let value: Value = serde_json::from_str(&outcome.to_json()).unwrap();
        assert_eq!(
            value,
            json!({"status": "error", "code": "ERROR", "message": "boom"})
        );
    }

    #[test]
    fn test_outcome_parses_back() {
        let outcome = OperationOutcome::failure(FailureKind::NoSignature, messages::NO_SIGNATURE);
        let parsed: OperationOutcome = serde_json::from_str(&outcome.to_json()).unwrap();
        assert_eq!(parsed, outcome);
        assert_eq!(parsed.failure_kind(), Some(FailureKind::NoSignature));
    }

    #[test]
    fn test_codes_match_serde_names() {
        for kind in [
            FailureKind::NotImplemented,
            FailureKind::ActivityNotFound,
            FailureKind::NoSignature,
            FailureKind::InternalError,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.code()));
        }
    }
}
