//! Declarative field attributes
//!
//! Attributes are grouped under a tag key and written as
//! `name=value|flag|name=value`. Flags without `=` are stored with an empty
//! value.

use indexmap::IndexMap;

/// Tag key for model-level attributes (`maxlen`, `options`, `required`, `label`)
pub const MODEL_TAG: &str = "model";

/// Tag key for view-level attributes (`cols`, `rows`, `size`, `placeholder`, `class`, `disabled`)
pub const VIEW_TAG: &str = "view";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
	groups: IndexMap<String, IndexMap<String, String>>,
}

impl Tags {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse `attrs` and merge its attributes under `key`
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::Tags;
	///
	/// let tags = Tags::new().with("model", "maxlen=5|required");
	/// assert_eq!(tags.attrib("model", "maxlen"), Some("5"));
	/// assert!(tags.has("model", "required"));
	/// assert_eq!(tags.attrib("view", "cols"), None);
	/// ```
	pub fn with(mut self, key: impl Into<String>, attrs: &str) -> Self {
		self.insert(key, attrs);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, attrs: &str) {
		let group = self.groups.entry(key.into()).or_default();
		for part in attrs.split('|') {
			let part = part.trim();
			if part.is_empty() {
				continue;
			}
			match part.split_once('=') {
				Some((name, value)) => {
					group.insert(name.trim().to_string(), value.trim().to_string());
				}
				None => {
					group.insert(part.to_string(), String::new());
				}
			}
		}
	}

	/// Returns the value of attribute `name` under tag `key`
	pub fn attrib(&self, key: &str, name: &str) -> Option<&str> {
		self.groups
			.get(key)
			.and_then(|group| group.get(name))
			.map(String::as_str)
	}

	/// Returns true when attribute `name` is present under tag `key`
	pub fn has(&self, key: &str, name: &str) -> bool {
		self.attrib(key, name).is_some()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.values().all(IndexMap::is_empty)
	}
}
