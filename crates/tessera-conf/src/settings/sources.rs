//! Configuration sources for layered settings
//!
//! Sources are merged in priority order (environment variables > config
//! files > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Environment variable configuration source
///
/// Keys lose the prefix and are lower-cased. Keys listed in a template (see
/// [`EnvSource::with_template`]) are parsed to the JSON type of their
/// template value. Other keys are parsed heuristically: integers, then
/// boolean words, and keys ending in `_fields` become comma-separated lists.
pub struct EnvSource {
	prefix: Option<String>,
	template: IndexMap<String, Value>,
}

impl EnvSource {
	/// Create a source over all environment variables
	pub fn new() -> Self {
		Self {
			prefix: None,
			template: IndexMap::new(),
		}
	}

	/// Only load variables starting with `prefix`
	///
	/// # Examples
	///
	/// ```
	/// use tessera_conf::settings::sources::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::new().with_prefix("APP_");
	/// assert_eq!(source.description(), "Environment variables (prefix: APP_)");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Parse each variable to the type of the same key in `template`
	///
	/// String settings then keep numeric-looking values as text, and boolean
	/// settings also accept `1` and `0`.
	pub fn with_template(mut self, template: &IndexMap<String, Value>) -> Self {
		self.template = template.clone();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

fn parse_env_bool(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

fn parse_env_list(value: &str) -> Value {
	value
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(|s| Value::String(s.to_string()))
		.collect()
}

/// Convert one raw environment value to a JSON value shaped like `shape`
///
/// A value that does not fit the expected type is kept as a string, so
/// deserialization reports it against the right key.
fn parse_typed_env_value(shape: &Value, value: String) -> Value {
	match shape {
		Value::String(_) => Value::String(value),
		Value::Bool(_) => parse_env_bool(&value).map_or(Value::String(value), Value::Bool),
		Value::Number(_) => {
			let trimmed = value.trim();
			if let Ok(num) = trimmed.parse::<i64>() {
				Value::Number(num.into())
			} else if let Some(num) = trimmed
				.parse::<f64>()
				.ok()
				.and_then(serde_json::Number::from_f64)
			{
				Value::Number(num)
			} else {
				Value::String(value)
			}
		}
		Value::Array(_) => parse_env_list(&value),
		Value::Null | Value::Object(_) => Value::String(value),
	}
}

/// Convert one raw environment value to a JSON value
fn parse_env_value(key: &str, value: String) -> Value {
	if key.ends_with("_fields") {
		return parse_env_list(&value);
	}
	if let Ok(num) = value.parse::<i64>() {
		return Value::Number(num.into());
	}
	match value.trim().to_lowercase().as_str() {
		"true" | "yes" | "on" => Value::Bool(true),
		"false" | "no" | "off" => Value::Bool(false),
		_ => Value::String(value),
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();

		for (key, value) in std::env::vars() {
			let clean_key = match &self.prefix {
				Some(prefix) => match key.strip_prefix(prefix.as_str()) {
					Some(rest) => rest,
					None => continue,
				},
				None => key.as_str(),
			};
			if clean_key.is_empty() {
				continue;
			}

			let lower_key = clean_key.to_lowercase();
			let parsed_value = match self.template.get(&lower_key) {
				Some(shape) => parse_typed_env_value(shape, value),
				None => parse_env_value(&lower_key, value),
			};
			config.insert(lower_key, parsed_value);
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("Environment variables (prefix: {})", prefix),
			None => "Environment variables".to_string(),
		}
	}
}

/// TOML file configuration source
///
/// A missing file loads as empty.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use tessera_conf::settings::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("tessera.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create an empty default values source
	///
	/// # Examples
	///
	/// ```
	/// use tessera_conf::settings::sources::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("input_class", Value::String("form-control".to_string()))
	///     .with_value("default_input_size", Value::Number(30.into()));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// The default values by key
	pub fn values(&self) -> &IndexMap<String, Value> {
		&self.values
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}

	/// Take every top-level field of a serializable value as a default
	pub fn from_serializable<T: serde::Serialize>(defaults: &T) -> Result<Self, SourceError> {
		match serde_json::to_value(defaults)? {
			Value::Object(map) => Ok(Self {
				values: map.into_iter().collect(),
			}),
			other => Err(SourceError::InvalidSource(format!(
				"defaults must serialize to an object, got {}",
				other
			))),
		}
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use serial_test::serial;
	use std::env;
	use tempfile::TempDir;

	#[rstest]
	#[serial(env)]
	fn test_env_source_with_prefix() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TESSERA_SRC_TEST_INPUT_CLASS", "wide");
			env::set_var("TESSERA_SRC_TEST_DISABLED", "true");
			env::set_var("TESSERA_SRC_TEST_DEFAULT_INPUT_SIZE", "40");
			env::set_var("TESSERA_SRC_TEST_EXCLUDED_FIELDS", "id, created_at");
		}

		let config = EnvSource::new().with_prefix("TESSERA_SRC_TEST_").load().unwrap();

		assert_eq!(config.get("input_class").unwrap(), &Value::String("wide".to_string()));
		assert_eq!(config.get("disabled").unwrap(), &Value::Bool(true));
		assert_eq!(config.get("default_input_size").unwrap(), &Value::Number(40.into()));
		assert_eq!(
			config.get("excluded_fields").unwrap(),
			&serde_json::json!(["id", "created_at"])
		);
		assert!(config.keys().all(|k| k == &k.to_lowercase()));

		// SAFETY: See above.
		unsafe {
			env::remove_var("TESSERA_SRC_TEST_INPUT_CLASS");
			env::remove_var("TESSERA_SRC_TEST_DISABLED");
			env::remove_var("TESSERA_SRC_TEST_DEFAULT_INPUT_SIZE");
			env::remove_var("TESSERA_SRC_TEST_EXCLUDED_FIELDS");
		}
	}

	#[rstest]
	#[case("42", Value::Number(42.into()))]
	#[case("off", Value::Bool(false))]
	#[case("Yes", Value::Bool(true))]
	#[case("form-control", Value::String("form-control".to_string()))]
	fn test_parse_env_value(#[case] raw: &str, #[case] expected: Value) {
		assert_eq!(parse_env_value("key", raw.to_string()), expected);
	}

	#[rstest]
	#[case(json!(false), "1", json!(true))]
	#[case(json!(true), "0", json!(false))]
	#[case(json!(false), "maybe", json!("maybe"))]
	#[case(json!(""), "42", json!("42"))]
	#[case(json!(""), "true", json!("true"))]
	#[case(json!(0), " 25 ", json!(25))]
	#[case(json!(0), "wide", json!("wide"))]
	#[case(json!([]), "a, b,", json!(["a", "b"]))]
	fn test_parse_typed_env_value(
		#[case] shape: Value,
		#[case] raw: &str,
		#[case] expected: Value,
	) {
		assert_eq!(parse_typed_env_value(&shape, raw.to_string()), expected);
	}

	#[rstest]
	#[serial(env)]
	fn test_env_source_follows_template_types() {
		let template: IndexMap<String, Value> = [
			("disabled".to_string(), json!(false)),
			("input_class".to_string(), json!("")),
		]
		.into_iter()
		.collect();
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TESSERA_TPL_TEST_DISABLED", "1");
			env::set_var("TESSERA_TPL_TEST_INPUT_CLASS", "2024");
			env::set_var("TESSERA_TPL_TEST_OTHER", "7");
		}

		let config = EnvSource::new()
			.with_prefix("TESSERA_TPL_TEST_")
			.with_template(&template)
			.load()
			.unwrap();

		// SAFETY: See above.
		unsafe {
			env::remove_var("TESSERA_TPL_TEST_DISABLED");
			env::remove_var("TESSERA_TPL_TEST_INPUT_CLASS");
			env::remove_var("TESSERA_TPL_TEST_OTHER");
		}

		assert_eq!(config.get("disabled"), Some(&json!(true)));
		assert_eq!(config.get("input_class"), Some(&json!("2024")));
		assert_eq!(config.get("other"), Some(&json!(7)));
	}

	#[rstest]
	fn test_toml_source() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("tessera.toml");
		fs::write(
			&config_path,
			r#"
input_class = "form-control"
default_input_size = 25

[placeholders]
"user.email" = "you@example.com"
"#,
		)
		.unwrap();

		let config = TomlFileSource::new(&config_path).load().unwrap();

		assert_eq!(
			config.get("input_class").unwrap(),
			&Value::String("form-control".to_string())
		);
		assert_eq!(config.get("default_input_size").unwrap(), &Value::Number(25.into()));
		assert_eq!(
			config.get("placeholders").unwrap(),
			&serde_json::json!({"user.email": "you@example.com"})
		);
	}

	#[rstest]
	fn test_missing_toml_file_is_empty() {
		let temp_dir = TempDir::new().unwrap();
		let config = TomlFileSource::new(temp_dir.path().join("absent.toml")).load().unwrap();
		assert!(config.is_empty());
	}

	#[rstest]
	fn test_malformed_toml_is_an_error() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("broken.toml");
		fs::write(&config_path, "input_class = ").unwrap();

		let err = TomlFileSource::new(&config_path).load().unwrap_err();
		assert!(matches!(err, SourceError::Toml(_)));
	}

	#[rstest]
	fn test_default_source_from_serializable() {
		#[derive(serde::Serialize)]
		struct Defaults {
			size: u32,
		}

		let config = DefaultSource::from_serializable(&Defaults { size: 3 })
			.unwrap()
			.load()
			.unwrap();
		assert_eq!(config.get("size").unwrap(), &Value::Number(3.into()));
		assert!(matches!(
			DefaultSource::from_serializable(&5),
			Err(SourceError::InvalidSource(_))
		));
	}

	#[rstest]
	fn test_source_priority() {
		assert_eq!(EnvSource::new().priority(), 100);
		assert_eq!(TomlFileSource::new("test.toml").priority(), 50);
		assert_eq!(DefaultSource::new().priority(), 0);
	}
}
