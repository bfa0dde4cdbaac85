//! Native bridge for nogodey's on-device translation.
//!
//! The scripting runtime addresses native capability by module and method
//! name; this crate is the native side of that boundary. A
//! [`BridgeRegistry`] maps names to typed async methods, each call becomes
//! one invocation with a single-shot completion (resolved with the
//! translated text or rejected with a structured error, never both, never
//! neither), and the [`NogoLlm`] module exposes `translate` on top of
//! whatever [`LanguageModel`] the host plugs in.
//!
//! ```no_run
//! use std::sync::Arc;
//! use nogodey_bridge::{BridgeRegistry, NogoLlm, PhraseTableModel};
//!
//! # async fn run() {
//! let mut registry = BridgeRegistry::new();
//! registry
//!     .register(NogoLlm::new(Arc::new(PhraseTableModel::new([("hello", "bonjour")]))).into_module())
//!     .unwrap();
//!
//! let outcome = registry
//!     .invoke("NogoLLM", "translate", "hello".to_string())
//!     .outcome()
//!     .await;
//! assert_eq!(outcome, Ok("bonjour".to_string()));
//! # }
//! ```

pub mod bridge;
pub mod llm;
pub mod nogo_llm;
pub mod shared;

pub use bridge::invocation::{Completer, InvocationHandle};
pub use bridge::method::{method_fn, BridgeMethod};
pub use bridge::module::{BridgeModule, BridgeModuleBuilder};
pub use bridge::registry::BridgeRegistry;
pub use llm::{LanguageModel, ModelError, PhraseTableModel};
pub use nogo_llm::NogoLlm;
pub use shared::error::{BridgeError, ErrorDescriptor};
pub use shared::settings::BridgeSettings;
pub use shared::types::{InvocationId, MethodCall, Outcome};
