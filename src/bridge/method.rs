use std::future::Future;

use async_trait::async_trait;

use crate::shared::error::ErrorDescriptor;

/// One native operation addressable by name from the scripting runtime.
///
/// A method takes the call's text by value (the boundary copies, never
/// shares) and returns its single typed completion. Failures belong in the
/// `Err` arm as an [`ErrorDescriptor`]; a method must not panic to signal
/// an error.
#[async_trait]
pub trait BridgeMethod: Send + Sync {
    async fn invoke(&self, text: String) -> Result<String, ErrorDescriptor>;
}

/// Adapter turning an async function into a [`BridgeMethod`].
pub struct MethodFn<F>(F);

/// Wrap an async closure or function for registration on a module.
pub fn method_fn<F, Fut>(f: F) -> MethodFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, ErrorDescriptor>> + Send,
{
    MethodFn(f)
}

#[async_trait]
impl<F, Fut> BridgeMethod for MethodFn<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, ErrorDescriptor>> + Send,
{
    async fn invoke(&self, text: String) -> Result<String, ErrorDescriptor> {
        (self.0)(text).await
    }
}
