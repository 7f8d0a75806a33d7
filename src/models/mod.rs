// Data model module
//
// Plain data types shared across the crate: the configuration snapshot and
// the coding-standard variant it carries.

pub mod config;

pub use config::{FixerConfig, Platform, Standard};
