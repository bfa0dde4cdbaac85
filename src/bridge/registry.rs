//! Name-addressed dispatch across the runtime boundary
//!
//! The registry is the one place where a method name from the scripting
//! runtime becomes a typed native call. Lookup failures, deadlines, and
//! handler panics all come back through the invocation's rejection channel;
//! `invoke` itself never fails and never blocks the caller.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::Instrument;

use crate::bridge::invocation::{self, InvocationHandle};
use crate::bridge::module::BridgeModule;
use crate::shared::error::BridgeError;
use crate::shared::settings::BridgeSettings;
use crate::shared::types::{InvocationId, MethodCall, Outcome};

pub struct BridgeRegistry {
    modules: HashMap<String, Arc<BridgeModule>>,
    settings: BridgeSettings,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::with_settings(BridgeSettings::default())
    }

    pub fn with_settings(settings: BridgeSettings) -> Self {
        Self {
            modules: HashMap::new(),
            settings,
        }
    }

    /// Register a module under its name. Startup-time validation: a second
    /// module with the same name is a configuration error, not a runtime
    /// condition.
    pub fn register(&mut self, module: BridgeModule) -> Result<(), BridgeError> {
        let name = module.name().to_string();
        if self.modules.contains_key(&name) {
            return Err(BridgeError::DuplicateModule(name));
        }
        tracing::info!(
            module = %name,
            methods = ?module.method_names().collect::<Vec<_>>(),
            "bridge module registered"
        );
        self.modules.insert(name, Arc::new(module));
        Ok(())
    }

    /// Issue one invocation. Returns immediately with the handle; the method
    /// body runs on a tokio worker task. Unknown module or method names
    /// reject the handle rather than erroring here, so the scripting side
    /// always observes failures through the same channel.
    ///
    /// Must be called from within a tokio runtime.
    pub fn invoke(&self, module: &str, method: &str, text: String) -> InvocationHandle {
        let id = InvocationId::new();
        let (mut handle, completer) = invocation::channel(id, module, method);
        tracing::debug!(id = %id, module, method, issued_at = %handle.issued_at(), "invocation issued");

        let Some(module) = self.modules.get(module) else {
            completer.reject(BridgeError::ModuleNotFound(module.to_string()).into());
            return handle;
        };
        let Some(target) = module.method(method) else {
            completer.reject(BridgeError::MethodNotFound(method.to_string()).into());
            return handle;
        };

        let target = Arc::clone(target);
        let deadline = self.settings.invoke_timeout();
        let span = tracing::debug_span!("bridge_invoke", id = %id);
        let task = tokio::spawn(
            async move {
                let fut = target.invoke(text);
                let completion = match deadline {
                    Some(deadline) => match tokio::time::timeout(deadline, fut).await {
                        Ok(completion) => completion,
                        Err(_) => Err(BridgeError::DeadlineElapsed.into()),
                    },
                    None => fut.await,
                };
                // A panic inside `fut` unwinds past this point; the
                // completer's drop guard then rejects on our behalf.
                match completion {
                    Ok(result) => completer.resolve(result),
                    Err(error) => completer.reject(error),
                }
            }
            .instrument(span),
        );
        handle.set_abort(task.abort_handle());
        handle
    }

    /// Envelope entry point for the scripting runtime's late-bound calls.
    pub fn dispatch(&self, call: MethodCall) -> InvocationHandle {
        self.invoke(&call.module, &call.method, call.text)
    }

    /// Dispatch and await, returning the wire-shaped outcome.
    pub async fn call(&self, call: MethodCall) -> Outcome {
        self.dispatch(call).outcome().await.into()
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }
}

impl Default for BridgeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
