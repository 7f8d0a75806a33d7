// phpfix - Fix PHP buffers with phpcs/phpcbf, showing a diff of the changes
//
// This is the library crate containing the fix pipeline and its supporting
// types. The binary crate (main.rs) provides a CLI host around it; editor
// hosts integrate through the host::EditorHost trait.

pub mod config;
pub mod host;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use host::{EditorHost, deliver, wants_fix_on_save};
pub use models::{FixerConfig, Platform, Standard};
pub use services::{FixError, FixOutcome, FixPipeline, FixRequest};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
