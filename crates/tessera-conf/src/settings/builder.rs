//! Merging of configuration sources

use super::sources::ConfigSource;
use super::{SettingsError, SettingsResult};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Collects sources and merges them into [`MergedSettings`]
///
/// Sources are applied in ascending priority. Among sources of equal
/// priority the one added last wins.
///
/// # Examples
///
/// ```
/// use tessera_conf::SettingsBuilder;
/// use tessera_conf::settings::sources::DefaultSource;
/// use serde_json::json;
///
/// let merged = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("input_class", json!("field")))
///     .build()
///     .unwrap();
/// assert_eq!(merged.get::<String>("input_class").unwrap(), "field");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Load every source and merge the results
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Source`] for the first source that fails to load.
	pub fn build(mut self) -> SettingsResult<MergedSettings> {
		self.sources.sort_by_key(|source| source.priority());

		let mut values = IndexMap::new();
		for source in &self.sources {
			let loaded = source.load().map_err(|error| {
				tracing::warn!(
					source = %source.description(),
					%error,
					"failed to load configuration source"
				);
				SettingsError::Source {
					source_name: source.description(),
					error,
				}
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = loaded.len(),
				"loaded configuration source"
			);
			values.extend(loaded);
		}

		Ok(MergedSettings { values })
	}
}

/// Settings merged from all sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedSettings {
	values: IndexMap<String, Value>,
}

impl MergedSettings {
	/// Deserialize the value stored under `key`
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Missing`] when no source set the key and
	/// [`SettingsError::Invalid`] when it has the wrong shape.
	pub fn get<T: DeserializeOwned>(&self, key: &str) -> SettingsResult<T> {
		let value = self
			.values
			.get(key)
			.ok_or_else(|| SettingsError::Missing(key.to_string()))?;
		serde_json::from_value(value.clone()).map_err(|error| SettingsError::Invalid {
			key: key.to_string(),
			error,
		})
	}

	pub fn get_raw(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Deserialize all merged values into one settings struct
	pub fn into_typed<T: DeserializeOwned>(self) -> SettingsResult<T> {
		let object = Value::Object(self.values.into_iter().collect());
		Ok(serde_json::from_value(object)?)
	}
}
