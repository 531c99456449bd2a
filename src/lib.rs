pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CmsConfig, Command};
pub use config::{RemoteConfig, ResolvedConfig};

pub use adapters::{LocalSnapshots, RestBackend, RestIdentity};
pub use core::store::{ContentStore, RemoteSync};
pub use utils::error::{CmsError, Result};
