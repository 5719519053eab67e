//! Kerbal Foundries application shell.
//!
//! Owns the settings store and dust color table for the lifetime of a session
//! and persists the settings on shutdown.

pub mod context;
pub mod paths;

pub use context::FoundryContext;
pub use paths::GamePaths;
