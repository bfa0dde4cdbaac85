use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::shared::error::ErrorDescriptor;

/// Identity of one in-flight bridge invocation.
///
/// Minted when the scripting side issues a call and carried through logs and
/// completion delivery. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InvocationId(#[ts(type = "string")] Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The call envelope the scripting runtime sends across the boundary.
///
/// `text` is a single UTF-8 string, copied by value. The envelope performs no
/// validation; whether empty or malformed input is rejected is the receiving
/// method's decision.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MethodCall {
    pub module: String,
    pub method: String,
    pub text: String,
}

impl MethodCall {
    pub fn new(
        module: impl Into<String>,
        method: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            method: method.into(),
            text: text.into(),
        }
    }
}

/// Terminal outcome of one invocation, as delivered to the scripting side.
///
/// Exactly one `Outcome` exists per invocation: either the translated text or
/// a structured error, never both and never neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Outcome {
    Resolved { result: String },
    Rejected { error: ErrorDescriptor },
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved { .. })
    }
}

impl From<Result<String, ErrorDescriptor>> for Outcome {
    fn from(res: Result<String, ErrorDescriptor>) -> Self {
        match res {
            Ok(result) => Outcome::Resolved { result },
            Err(error) => Outcome::Rejected { error },
        }
    }
}
