pub mod invocation;
pub mod method;
pub mod module;
pub mod registry;
