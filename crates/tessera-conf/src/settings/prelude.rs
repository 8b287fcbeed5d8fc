//! Prelude module for convenient imports

pub use super::builder::{MergedSettings, SettingsBuilder};
pub use super::forms::{FORMS_ENV_PREFIX, FormSettings, LabelPosition};
pub use super::sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
pub use super::{SettingsError, SettingsResult};
