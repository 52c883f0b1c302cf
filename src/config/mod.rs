//! Configuration handling for platman
//!
//! Settings are layered: built-in defaults, then the optional
//! `<home>/settings.yaml`, then environment variables.

pub mod settings;

pub use settings::Settings;
