//! Integration tests for layering configuration sources into form settings.

use rstest::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use tessera_conf::settings::sources::{DefaultSource, TomlFileSource};
use tessera_conf::{FormSettings, LabelPosition, SettingsBuilder};

/// Fixture providing temporary directory for test configuration files
#[fixture]
fn temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temporary directory")
}

/// Test: a TOML file overrides defaults and the result deserializes into FormSettings
#[rstest]
fn test_toml_over_defaults_into_form_settings(temp_dir: TempDir) {
	let path = temp_dir.path().join("forms.toml");
	fs::write(
		&path,
		r#"
label_class = "form-label"
generate_placeholders = true
excluded_fields = ["user.password_hash"]

[placeholders]
"user.name" = "Your name"
"#,
	)
	.expect("Failed to write forms.toml");

	let settings: FormSettings = SettingsBuilder::new()
		.add_source(TomlFileSource::new(&path))
		.add_source(
			DefaultSource::new()
				.with_value("label_class", json!("default-label"))
				.with_value("input_class", json!("default-input")),
		)
		.build()
		.expect("Failed to build settings")
		.into_typed()
		.expect("Failed to deserialize settings");

	assert_eq!(settings.label_class, "form-label");
	assert_eq!(settings.input_class, "default-input");
	assert!(settings.generate_placeholders);
	assert!(settings.is_field_excluded("user.password_hash"));
	assert_eq!(
		settings.placeholders.get("user.name").map(String::as_str),
		Some("Your name")
	);
	// keys no source set fall back to FormSettings::default()
	assert_eq!(settings.label_position, LabelPosition::Before);
	assert_eq!(settings.required_marker, " *");
}

/// Test: individual merged values can be read without a settings struct
#[rstest]
fn test_merged_values_by_key(temp_dir: TempDir) {
	let path = temp_dir.path().join("forms.toml");
	fs::write(&path, "default_input_size = 12\n").expect("Failed to write forms.toml");

	let merged = SettingsBuilder::new()
		.add_source(DefaultSource::new().with_value("default_input_size", json!(30)))
		.add_source(TomlFileSource::new(&path))
		.build()
		.expect("Failed to build settings");

	assert_eq!(merged.get::<usize>("default_input_size").unwrap(), 12);
	assert!(!merged.contains_key("labels"));
}
