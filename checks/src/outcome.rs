use serde::Serialize;

/// Result of running a single check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub id: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn pass(id: String) -> Self {
        Self {
            id,
            passed: true,
            message: None,
        }
    }

    pub fn fail(id: String, message: String) -> Self {
        Self {
            id,
            passed: false,
            message: Some(message),
        }
    }
}
