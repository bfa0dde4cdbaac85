pub mod error;
pub mod settings;
pub mod types;

#[cfg(test)]
mod types_test;

// Re-export the boundary payloads for convenience
pub use error::{BridgeError, ErrorDescriptor};
pub use types::{InvocationId, MethodCall, Outcome};
