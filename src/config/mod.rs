//! Configuration for loading and querying graphs from the command line.

pub mod loader;

pub use loader::{load_config, GraphConfig, GraphKind};
