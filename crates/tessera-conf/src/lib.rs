//! # Tessera Configuration
//!
//! Layered settings for the form layer.
//!
//! Values are merged from several [`ConfigSource`](settings::sources::ConfigSource)s
//! in priority order (environment variables > config files > defaults) and
//! deserialized into typed settings such as [`FormSettings`].
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera_conf::FormSettings;
//!
//! // A missing file contributes nothing; defaults and env vars still apply
//! let settings = FormSettings::load("does-not-exist.toml").unwrap();
//! assert_eq!(settings.required_marker, " *");
//! ```
//!
//! ## Module Organization
//!
//! - [`settings`]: sources, the merging builder and the form settings

pub mod settings;

pub use settings::builder::{MergedSettings, SettingsBuilder};
pub use settings::forms::{FORMS_ENV_PREFIX, FormSettings, LabelPosition};
pub use settings::{SettingsError, SettingsResult};
