use std::collections::HashMap;
use std::sync::Arc;

use crate::bridge::method::BridgeMethod;
use crate::shared::error::BridgeError;

/// A named set of bridge methods, registered as one unit.
///
/// The module name is the identity the scripting runtime uses to locate its
/// methods; method names are validated for uniqueness when the module is
/// built, so name collisions surface at startup rather than at call time.
pub struct BridgeModule {
    name: String,
    methods: HashMap<String, Arc<dyn BridgeMethod>>,
}

impl BridgeModule {
    pub fn builder(name: impl Into<String>) -> BridgeModuleBuilder {
        BridgeModuleBuilder {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Convenience for the common single-method module.
    pub fn with_method(
        name: impl Into<String>,
        method_name: impl Into<String>,
        method: impl BridgeMethod + 'static,
    ) -> Self {
        let mut methods = HashMap::new();
        methods.insert(
            method_name.into(),
            Arc::new(method) as Arc<dyn BridgeMethod>,
        );
        Self {
            name: name.into(),
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self, name: &str) -> Option<&Arc<dyn BridgeMethod>> {
        self.methods.get(name)
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

pub struct BridgeModuleBuilder {
    name: String,
    methods: Vec<(String, Arc<dyn BridgeMethod>)>,
}

impl BridgeModuleBuilder {
    pub fn method(mut self, name: impl Into<String>, method: impl BridgeMethod + 'static) -> Self {
        self.methods.push((name.into(), Arc::new(method)));
        self
    }

    pub fn build(self) -> Result<BridgeModule, BridgeError> {
        let mut methods = HashMap::with_capacity(self.methods.len());
        for (name, method) in self.methods {
            if methods.insert(name.clone(), method).is_some() {
                return Err(BridgeError::DuplicateMethod(name));
            }
        }
        Ok(BridgeModule {
            name: self.name,
            methods,
        })
    }
}
