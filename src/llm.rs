//! Seam to the on-device language model
//!
//! The bridge never runs inference itself; it consumes whatever sits behind
//! [`LanguageModel`]. Hosts plug in the real device model; tests and
//! model-less environments use [`PhraseTableModel`].

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// The failure modes the native model actually produces: it is either not
/// present on the device at all, or it failed while generating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("On-device LLM unavailable")]
    Unavailable,

    #[error("{0}")]
    Generation(String),
}

/// The native translation capability behind the `NogoLLM` module.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, text: &str) -> Result<String, ModelError>;
}

/// Fixed lookup-table model for tests and hosts without a device model.
pub struct PhraseTableModel {
    table: HashMap<String, String>,
}

impl PhraseTableModel {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            table: entries
                .into_iter()
                .map(|(src, dst)| (src.to_string(), dst.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl LanguageModel for PhraseTableModel {
    async fn generate(&self, text: &str) -> Result<String, ModelError> {
        self.table
            .get(text)
            .cloned()
            .ok_or_else(|| ModelError::Generation(format!("no translation for {:?}", text)))
    }
}
