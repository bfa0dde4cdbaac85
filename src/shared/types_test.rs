//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use ts_rs::TS;

    use crate::shared::error::ErrorDescriptor;
    use crate::shared::settings::BridgeSettings;
    use crate::shared::types::{InvocationId, MethodCall, Outcome};

    #[test]
    fn export_bindings() {
        // Writes the TypeScript contract the scripting side compiles against
        // to bindings/.
        InvocationId::export().expect("Failed to export InvocationId");
        MethodCall::export().expect("Failed to export MethodCall");
        Outcome::export().expect("Failed to export Outcome");
        ErrorDescriptor::export().expect("Failed to export ErrorDescriptor");
        BridgeSettings::export().expect("Failed to export BridgeSettings");
    }
}
