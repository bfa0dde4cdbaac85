//! The `NogoLLM` bridge module
//!
//! Exposes `translate` to the scripting runtime: one UTF-8 string in, the
//! translated string or a structured error out. The error codes are the
//! ones the native implementation produces (`EMPTY_INPUT`, `no_model`,
//! `llm_error`); the bridge adds nothing of its own.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bridge::method::BridgeMethod;
use crate::bridge::module::BridgeModule;
use crate::llm::{LanguageModel, ModelError};
use crate::shared::error::ErrorDescriptor;

pub const MODULE_NAME: &str = "NogoLLM";
pub const TRANSLATE: &str = "translate";

/// The `NogoLLM` module, backed by whatever model the host supplies.
pub struct NogoLlm {
    model: Arc<dyn LanguageModel>,
}

impl NogoLlm {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Assemble the registrable module exposing `translate`.
    pub fn into_module(self) -> BridgeModule {
        BridgeModule::with_method(MODULE_NAME, TRANSLATE, TranslateMethod { model: self.model })
    }
}

struct TranslateMethod {
    model: Arc<dyn LanguageModel>,
}

#[async_trait]
impl BridgeMethod for TranslateMethod {
    async fn invoke(&self, text: String) -> Result<String, ErrorDescriptor> {
        if text.is_empty() {
            return Err(ErrorDescriptor::new("EMPTY_INPUT", "text must be non-empty"));
        }
        match self.model.generate(&text).await {
            Ok(out) => Ok(out),
            Err(ModelError::Unavailable) => {
                Err(ErrorDescriptor::new("no_model", "On-device LLM unavailable"))
            }
            Err(ModelError::Generation(message)) => Err(ErrorDescriptor::new("llm_error", message)),
        }
    }
}
