//! Presentation settings for generated forms

use super::builder::SettingsBuilder;
use super::sources::{ConfigSource, DefaultSource, EnvSource, TomlFileSource};
use super::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Prefix of environment variables read by [`FormSettings::load`]
pub const FORMS_ENV_PREFIX: &str = "TESSERA_FORMS_";

/// Where a field label is placed relative to its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
	#[default]
	Before,
	After,
}

/// Form presentation settings
///
/// Per-field maps and lists are keyed by field selector.
///
/// ```toml
/// input_class = "form-control"
/// label_class = "form-label"
/// default_input_size = 30
/// disabled_fields = ["user.id"]
///
/// [labels]
/// "user.email" = "E-mail address"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Class attribute of every generated input
	pub input_class: String,
	/// Class attribute of every generated label
	pub label_class: String,
	/// Appended to the label of required fields
	pub required_marker: String,
	/// Visual input size when the field has no `size` view attribute; 0 omits it
	pub default_input_size: usize,
	pub label_position: LabelPosition,
	/// Disable every input of the form
	pub disabled: bool,
	pub disabled_fields: Vec<String>,
	/// Fields neither rendered nor bound
	pub excluded_fields: Vec<String>,
	pub placeholders: HashMap<String, String>,
	pub labels: HashMap<String, String>,
	/// Use the field label as placeholder when none is configured
	pub generate_placeholders: bool,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			input_class: String::new(),
			label_class: String::new(),
			required_marker: " *".to_string(),
			default_input_size: 0,
			label_position: LabelPosition::Before,
			disabled: false,
			disabled_fields: Vec::new(),
			excluded_fields: Vec::new(),
			placeholders: HashMap::new(),
			labels: HashMap::new(),
			generate_placeholders: false,
		}
	}
}

impl FormSettings {
	/// Load settings from defaults, the TOML file at `path` and
	/// `TESSERA_FORMS_*` environment variables, in increasing precedence
	///
	/// A missing file is not an error.
	pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
		Self::builder(path)?.build()?.into_typed()
	}

	/// The source stack used by [`FormSettings::load`]
	pub fn builder(path: impl AsRef<Path>) -> SettingsResult<SettingsBuilder> {
		let defaults = DefaultSource::from_serializable(&Self::default()).map_err(|error| {
			SettingsError::Source {
				source_name: DefaultSource::new().description(),
				error,
			}
		})?;
		let env = EnvSource::new()
			.with_prefix(FORMS_ENV_PREFIX)
			.with_template(defaults.values());
		Ok(SettingsBuilder::new()
			.add_source(defaults)
			.add_source(TomlFileSource::new(path.as_ref()))
			.add_source(env))
	}

	pub fn is_field_disabled(&self, selector: &str) -> bool {
		self.disabled || self.disabled_fields.iter().any(|s| s == selector)
	}

	pub fn is_field_excluded(&self, selector: &str) -> bool {
		self.excluded_fields.iter().any(|s| s == selector)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::env;
	use std::fs;
	use tempfile::TempDir;

	#[rstest]
	#[serial(env)]
	fn test_load_missing_file_gives_defaults() {
		let temp_dir = TempDir::new().unwrap();
		let settings = FormSettings::load(temp_dir.path().join("tessera.toml")).unwrap();
		assert_eq!(settings, FormSettings::default());
	}

	#[rstest]
	#[serial(env)]
	fn test_env_overrides_file() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("tessera.toml");
		fs::write(
			&path,
			r#"
input_class = "from-file"
label_position = "after"
disabled_fields = ["user.id"]

[labels]
"user.email" = "E-mail"
"#,
		)
		.unwrap();

		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TESSERA_FORMS_INPUT_CLASS", "from-env");
			env::set_var("TESSERA_FORMS_DEFAULT_INPUT_SIZE", "25");
		}

		let settings = FormSettings::load(&path).unwrap();

		// SAFETY: See above.
		unsafe {
			env::remove_var("TESSERA_FORMS_INPUT_CLASS");
			env::remove_var("TESSERA_FORMS_DEFAULT_INPUT_SIZE");
		}

		assert_eq!(settings.input_class, "from-env");
		assert_eq!(settings.default_input_size, 25);
		assert_eq!(settings.label_position, LabelPosition::After);
		assert_eq!(settings.labels.get("user.email").map(String::as_str), Some("E-mail"));
		assert!(settings.is_field_disabled("user.id"));
		assert!(!settings.is_field_disabled("user.name"));
		assert_eq!(settings.required_marker, " *");
	}

	#[rstest]
	#[serial(env)]
	fn test_wrong_type_in_file_is_an_error() {
		let temp_dir = TempDir::new().unwrap();
		let path = temp_dir.path().join("tessera.toml");
		fs::write(&path, "default_input_size = \"wide\"\n").unwrap();

		assert!(matches!(FormSettings::load(&path), Err(SettingsError::Deserialize(_))));
	}

	#[rstest]
	#[serial(env)]
	fn test_env_values_follow_setting_types() {
		let temp_dir = TempDir::new().unwrap();

		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TESSERA_FORMS_DISABLED", "1");
			env::set_var("TESSERA_FORMS_INPUT_CLASS", "123");
			env::set_var("TESSERA_FORMS_REQUIRED_MARKER", "true");
		}

		let settings = FormSettings::load(temp_dir.path().join("tessera.toml"));

		// SAFETY: See above.
		unsafe {
			env::remove_var("TESSERA_FORMS_DISABLED");
			env::remove_var("TESSERA_FORMS_INPUT_CLASS");
			env::remove_var("TESSERA_FORMS_REQUIRED_MARKER");
		}

		let settings = settings.unwrap();
		assert!(settings.disabled);
		assert_eq!(settings.input_class, "123");
		assert_eq!(settings.required_marker, "true");
	}

	#[rstest]
	fn test_form_wide_disable() {
		let settings = FormSettings {
			disabled: true,
			..FormSettings::default()
		};
		assert!(settings.is_field_disabled("anything"));
	}
}
