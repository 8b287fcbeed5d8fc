//! Field descriptors

use crate::error::{ModelError, ModelResult};
use crate::kind::FieldKind;
use crate::tags::{MODEL_TAG, Tags};
use crate::value::FieldValue;
use std::fmt;

/// Descriptor of one model field
///
/// Holds the field's name, the selector used as its key in submitted form
/// data, its current value and its declarative attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
	pub name: String,
	pub selector: String,
	pub value: FieldValue,
	pub tags: Tags,
}

impl FieldMeta {
	/// Create a top-level field whose selector is its name
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::{FieldMeta, FieldValue};
	///
	/// let field = FieldMeta::new("age", FieldValue::Int(30));
	/// assert_eq!(field.selector(), "age");
	///
	/// let nested = FieldMeta::new("street", FieldValue::String(String::new())).nested_in("address");
	/// assert_eq!(nested.selector(), "address.street");
	/// ```
	pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
		let name = name.into();
		Self {
			selector: name.clone(),
			name,
			value,
			tags: Tags::new(),
		}
	}

	/// Prefix the selector with a parent path
	pub fn nested_in(mut self, parent: &str) -> Self {
		if !parent.is_empty() {
			self.selector = format!("{}.{}", parent, self.selector);
		}
		self
	}

	pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
		self.selector = selector.into();
		self
	}

	/// Merge tag attributes under `key`, see [`Tags::with`]
	pub fn with_tags(mut self, key: &str, attrs: &str) -> Self {
		self.tags.insert(key, attrs);
		self
	}

	pub fn selector(&self) -> &str {
		&self.selector
	}

	pub fn kind(&self) -> FieldKind {
		self.value.kind()
	}

	pub fn attrib(&self, key: &str, name: &str) -> Option<&str> {
		self.tags.attrib(key, name)
	}

	/// Returns true when the field carries the `required` model attribute
	pub fn is_required(&self) -> bool {
		self.tags.has(MODEL_TAG, "required")
	}

	/// Returns the declared maximum length, if any
	///
	/// # Errors
	///
	/// Returns [`ModelError::InvalidTagValue`] when `maxlen` is not a number.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::{FieldMeta, FieldValue};
	///
	/// let field = FieldMeta::new("code", FieldValue::String(String::new())).with_tags("model", "maxlen=5");
	/// assert_eq!(field.maxlen().unwrap(), Some(5));
	///
	/// let broken = FieldMeta::new("code", FieldValue::String(String::new())).with_tags("model", "maxlen=five");
	/// assert!(broken.maxlen().is_err());
	/// ```
	pub fn maxlen(&self) -> ModelResult<Option<usize>> {
		match self.attrib(MODEL_TAG, "maxlen") {
			None => Ok(None),
			Some(raw) => raw
				.parse::<usize>()
				.map(Some)
				.map_err(|_| ModelError::InvalidTagValue {
					tag: MODEL_TAG.to_string(),
					name: "maxlen".to_string(),
					value: raw.to_string(),
				}),
		}
	}

	/// Returns the selectable options of a choice field
	///
	/// `Choice` and `MultipleChoice` read the comma-separated `options` model
	/// attribute. `DynamicChoice` carries its options in the value. Other kinds
	/// have none.
	pub fn options(&self) -> Vec<String> {
		match &self.value {
			FieldValue::DynamicChoice(choice) => choice.options.clone(),
			FieldValue::Choice(_) | FieldValue::MultipleChoice(_) => self
				.attrib(MODEL_TAG, "options")
				.map(|raw| {
					raw.split(',')
						.map(|option| option.trim().to_string())
						.collect()
				})
				.unwrap_or_default(),
			_ => Vec::new(),
		}
	}

	/// Returns a lightweight summary for diagnostics
	pub fn descriptor(&self) -> FieldDescriptor {
		FieldDescriptor {
			name: self.name.clone(),
			selector: self.selector.clone(),
			type_name: self.value.type_name().to_string(),
		}
	}
}

/// Name, selector and type of a field, carried by errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	pub name: String,
	pub selector: String,
	pub type_name: String,
}

impl fmt::Display for FieldDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.selector, self.type_name)
	}
}
