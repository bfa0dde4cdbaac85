//! End-to-end checks of the invocation contract: every call completes
//! exactly once, inputs and error payloads cross the boundary untouched,
//! and concurrent invocations stay independent.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use nogodey_bridge::{
    nogo_llm, BridgeRegistry, ErrorDescriptor, LanguageModel, MethodCall, ModelError, NogoLlm,
    Outcome, PhraseTableModel,
};

fn registry_with(model: impl LanguageModel + 'static) -> BridgeRegistry {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let mut registry = BridgeRegistry::new();
    registry
        .register(NogoLlm::new(Arc::new(model)).into_module())
        .unwrap();
    registry
}

#[tokio::test]
async fn translate_hello_resolves_bonjour() {
    let registry = registry_with(PhraseTableModel::new([("hello", "bonjour")]));
    let outcome = registry
        .call(MethodCall::new(
            nogo_llm::MODULE_NAME,
            nogo_llm::TRANSLATE,
            "hello",
        ))
        .await;
    assert_eq!(
        outcome,
        Outcome::Resolved {
            result: "bonjour".to_string()
        }
    );
}

#[tokio::test]
async fn translate_empty_rejects_with_the_exact_payload() {
    let registry = registry_with(PhraseTableModel::new([("hello", "bonjour")]));
    let outcome = registry
        .call(MethodCall::new(nogo_llm::MODULE_NAME, nogo_llm::TRANSLATE, ""))
        .await;
    assert_eq!(
        outcome,
        Outcome::Rejected {
            error: ErrorDescriptor::new("EMPTY_INPUT", "text must be non-empty")
        }
    );
}

/// Model that answers "a" slowly and "b" quickly, so the two invocations
/// complete out of submission order.
struct SkewedModel;

#[async_trait]
impl LanguageModel for SkewedModel {
    async fn generate(&self, text: &str) -> Result<String, ModelError> {
        let delay = if text == "a" { 80 } else { 5 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(format!("out:{}", text))
    }
}

#[tokio::test]
async fn concurrent_invocations_each_observe_their_own_outcome() {
    let registry = registry_with(SkewedModel);

    let first = registry.invoke(nogo_llm::MODULE_NAME, nogo_llm::TRANSLATE, "a".to_string());
    let second = registry.invoke(nogo_llm::MODULE_NAME, nogo_llm::TRANSLATE, "b".to_string());
    assert_ne!(first.id(), second.id());

    let (first, second) = tokio::join!(first.outcome(), second.outcome());
    assert_eq!(first, Ok("out:a".to_string()));
    assert_eq!(second, Ok("out:b".to_string()));
}

/// Model whose error payload carries every descriptor field, to check
/// nothing is rewritten in transit.
struct FailingModel;

#[async_trait]
impl LanguageModel for FailingModel {
    async fn generate(&self, _text: &str) -> Result<String, ModelError> {
        Err(ModelError::Generation(
            "context window exhausted at token 4096".to_string(),
        ))
    }
}

#[tokio::test]
async fn model_error_payload_arrives_unrewritten() {
    let registry = registry_with(FailingModel);
    let err = registry
        .invoke(nogo_llm::MODULE_NAME, nogo_llm::TRANSLATE, "hello".to_string())
        .outcome()
        .await
        .unwrap_err();
    assert_eq!(err.code, "llm_error");
    assert_eq!(err.message, "context window exhausted at token 4096");
    assert_eq!(err.domain, None);
}

/// Model that counts completions, to pin down the exactly-once guarantee
/// from the caller's side.
struct CountingModel(Arc<std::sync::Mutex<usize>>);

#[async_trait]
impl LanguageModel for CountingModel {
    async fn generate(&self, text: &str) -> Result<String, ModelError> {
        *self.0.lock().unwrap() += 1;
        Ok(text.to_string())
    }
}

#[tokio::test]
async fn each_invocation_runs_and_completes_exactly_once() {
    let count = Arc::new(std::sync::Mutex::new(0));
    let registry = registry_with(CountingModel(count.clone()));

    let outcome = registry
        .invoke(nogo_llm::MODULE_NAME, nogo_llm::TRANSLATE, "hello".to_string())
        .outcome()
        .await;
    assert_eq!(outcome, Ok("hello".to_string()));
    assert_eq!(*count.lock().unwrap(), 1);
}

/// Model that flags whether generation ever ran to completion.
struct TracedModel(Arc<std::sync::atomic::AtomicBool>);

#[async_trait]
impl LanguageModel for TracedModel {
    async fn generate(&self, text: &str) -> Result<String, ModelError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        self.0.store(true, std::sync::atomic::Ordering::SeqCst);
        Ok(text.to_string())
    }
}

#[tokio::test]
async fn cancel_aborts_the_worker_and_rejects_with_cancelled() {
    let completed = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let registry = registry_with(TracedModel(completed.clone()));

    let handle = registry.invoke(nogo_llm::MODULE_NAME, nogo_llm::TRANSLATE, "hello".to_string());
    let err = handle.cancel().unwrap_err();
    assert_eq!(err.code, "cancelled");
    assert_eq!(err.domain.as_deref(), Some("bridge"));

    // Give an un-aborted worker ample time to finish; the flag must stay off.
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(!completed.load(std::sync::atomic::Ordering::SeqCst));
}

#[tokio::test]
async fn outcome_serializes_for_the_scripting_side() {
    let registry = registry_with(PhraseTableModel::new([("hello", "bonjour")]));
    let outcome = registry
        .call(MethodCall::new(
            nogo_llm::MODULE_NAME,
            nogo_llm::TRANSLATE,
            "hello",
        ))
        .await;
    let wire = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        wire,
        serde_json::json!({"status": "resolved", "result": "bonjour"})
    );
}
