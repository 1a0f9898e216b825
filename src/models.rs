use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque poll identifier handed out by the service at creation time.
/// The driver never inspects it; it is only interpolated into request paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollId(String);

impl PollId {
    /// Builds an identifier from the `id` field of the create response.
    /// The service is free to use a number or a string; both are kept as
    /// the exact text that goes back into the URL.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(PollId(s.clone())),
            Value::Number(n) => Some(PollId(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregated tally returned by the service. The shape belongs to the
/// service; the driver only surfaces it to the caller and the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResults(pub Value);

impl PollResults {
    pub fn to_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn poll_id_keeps_numeric_ids_as_text() {
        let id = PollId::from_value(&json!(42)).unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(format!("/poll/{}/results", id), "/poll/42/results");
    }

    #[test]
    fn poll_id_keeps_string_ids_verbatim() {
        let id = PollId::from_value(&json!("a1b2-c3")).unwrap();
        assert_eq!(id.as_str(), "a1b2-c3");
    }

    #[test]
    fn poll_id_rejects_structured_values() {
        assert!(PollId::from_value(&json!({"nested": 1})).is_none());
        assert!(PollId::from_value(&json!(null)).is_none());
    }
}
