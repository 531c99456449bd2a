// Adapters layer: concrete implementations for external systems (local
// snapshot files, REST backend, identity provider).

pub mod local;
pub mod rest;

pub use local::LocalSnapshots;
pub use rest::{RestBackend, RestIdentity};
