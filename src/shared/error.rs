//! Error payloads crossing the bridge boundary
//!
//! Every failure reaches the caller through the rejection channel as an
//! [`ErrorDescriptor`]; nothing at this layer throws into the scripting
//! runtime or unwinds across the boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Structured error delivered through the rejection channel.
///
/// A code/message/domain triple, opaque to the bridge itself: whatever the
/// native implementation produces is delivered verbatim, with no rewriting
/// in transit. Bridge-layer failures use the `"bridge"` domain so callers
/// can tell a protocol fault from a native one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorDescriptor {
    pub code: String,
    pub message: String,
    pub domain: Option<String>,
}

impl ErrorDescriptor {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Faults raised by the bridge layer itself, as opposed to the native
/// implementation behind a method.
///
/// All variants are serializable for IPC and convert into an
/// [`ErrorDescriptor`] with a stable code before crossing the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum BridgeError {
    /// No module registered under this name
    #[error("module not registered: {0}")]
    ModuleNotFound(String),

    /// Module exists but exposes no method under this name
    #[error("method not registered: {0}")]
    MethodNotFound(String),

    /// A module with this name is already registered
    #[error("duplicate module registration: {0}")]
    DuplicateModule(String),

    /// A method with this name is already registered on the module
    #[error("duplicate method registration: {0}")]
    DuplicateMethod(String),

    /// The native handler went away without resolving or rejecting
    #[error("native handler dropped without completing")]
    HandlerDropped,

    /// The configured invocation deadline elapsed before completion
    #[error("invocation deadline elapsed")]
    DeadlineElapsed,

    /// The caller cancelled the invocation before completion
    #[error("invocation cancelled")]
    Cancelled,
}

impl BridgeError {
    /// Stable machine-readable code for the descriptor crossing the boundary.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::ModuleNotFound(_) => "module_not_found",
            BridgeError::MethodNotFound(_) => "method_not_found",
            BridgeError::DuplicateModule(_) => "duplicate_module",
            BridgeError::DuplicateMethod(_) => "duplicate_method",
            BridgeError::HandlerDropped => "handler_dropped",
            BridgeError::DeadlineElapsed => "deadline_elapsed",
            BridgeError::Cancelled => "cancelled",
        }
    }
}

impl From<BridgeError> for ErrorDescriptor {
    fn from(err: BridgeError) -> Self {
        ErrorDescriptor::new(err.code(), err.to_string()).with_domain("bridge")
    }
}
