//! Settings persistence for Kerbal Foundries.
//!
//! Reads and writes the host game's hierarchical node documents, resolves the
//! twelve global settings with create-on-missing defaulting, and canonicalizes
//! values on save. CLI overrides are applied via clap.

mod cli;
mod error;
mod node;
mod parse;
mod settings;
mod store;

pub use cli::CliArgs;
pub use error::{ConfigError, NodeError};
pub use node::ConfigNode;
pub use parse::Parsed;
pub use settings::{SettingKey, SettingKind, SettingValue, Settings};
pub use store::{LoadReport, ROOT_NODE, SettingsStore};
