//! Typed field values

use crate::kind::FieldKind;

/// Layout of a date or date-time string
///
/// `pattern` is the `chrono` format used to parse values, `hint` is the
/// human-readable form shown next to inputs. The hint has the same length as
/// a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLayout {
	pub pattern: &'static str,
	pub hint: &'static str,
}

pub const DATE_LAYOUT: DateLayout = DateLayout {
	pattern: "%Y-%m-%d",
	hint: "YYYY-MM-DD",
};

pub const DATETIME_LAYOUT: DateLayout = DateLayout {
	pattern: "%Y-%m-%d %H:%M:%S",
	hint: "YYYY-MM-DD HH:MM:SS",
};

/// An uploaded file held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
	pub name: String,
	pub data: Vec<u8>,
}

impl File {
	pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_empty() && self.data.is_empty()
	}
}

/// A choice whose options are supplied at runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicChoice {
	pub options: Vec<String>,
	pub index: Option<usize>,
}

impl DynamicChoice {
	/// Create a dynamic choice with no selection
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::DynamicChoice;
	///
	/// let choice = DynamicChoice::new(vec!["red".to_string(), "green".to_string()]);
	/// assert_eq!(choice.index, None);
	/// assert_eq!(choice.selected(), None);
	/// ```
	pub fn new(options: Vec<String>) -> Self {
		Self {
			options,
			index: None,
		}
	}

	pub fn with_index(mut self, index: usize) -> Self {
		self.index = Some(index);
		self
	}

	/// Returns the selected option, if the index is set and in range
	pub fn selected(&self) -> Option<&str> {
		self.index
			.and_then(|i| self.options.get(i))
			.map(String::as_str)
	}

	/// Returns the index of `option`
	pub fn position(&self, option: &str) -> Option<usize> {
		self.options.iter().position(|o| o == option)
	}
}

/// The value of one model field
///
/// Each variant is one editable kind. Text-like variants keep their raw
/// string; validation is a separate step (see [`validate`](crate::validate)).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	String(String),
	Text(String),
	Url(String),
	Email(String),
	Password(String),
	Phone(String),
	Bool(bool),
	Choice(String),
	MultipleChoice(Vec<String>),
	DynamicChoice(DynamicChoice),
	Date(String),
	DateTime(String),
	Float(f64),
	Int(i64),
	File(File),
	Blob(Vec<u8>),
	Custom { type_name: String, value: String },
}

impl FieldValue {
	/// Returns the kind tag of this value
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::{FieldKind, FieldValue};
	///
	/// assert_eq!(FieldValue::Int(3).kind(), FieldKind::Int);
	/// assert_eq!(FieldValue::Email(String::new()).kind(), FieldKind::Email);
	/// ```
	pub fn kind(&self) -> FieldKind {
		match self {
			FieldValue::String(_) => FieldKind::String,
			FieldValue::Text(_) => FieldKind::Text,
			FieldValue::Url(_) => FieldKind::Url,
			FieldValue::Email(_) => FieldKind::Email,
			FieldValue::Password(_) => FieldKind::Password,
			FieldValue::Phone(_) => FieldKind::Phone,
			FieldValue::Bool(_) => FieldKind::Bool,
			FieldValue::Choice(_) => FieldKind::Choice,
			FieldValue::MultipleChoice(_) => FieldKind::MultipleChoice,
			FieldValue::DynamicChoice(_) => FieldKind::DynamicChoice,
			FieldValue::Date(_) => FieldKind::Date,
			FieldValue::DateTime(_) => FieldKind::DateTime,
			FieldValue::Float(_) => FieldKind::Float,
			FieldValue::Int(_) => FieldKind::Int,
			FieldValue::File(_) => FieldKind::File,
			FieldValue::Blob(_) => FieldKind::Blob,
			FieldValue::Custom { .. } => FieldKind::Custom,
		}
	}

	/// Returns the type name used in diagnostics
	///
	/// Custom values report their own type name.
	pub fn type_name(&self) -> &str {
		match self {
			FieldValue::Custom { type_name, .. } => type_name,
			other => other.kind().as_str(),
		}
	}

	/// Returns the text shown for this value in an input
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::FieldValue;
	///
	/// assert_eq!(FieldValue::Float(1.5).display(), "1.5");
	/// assert_eq!(FieldValue::Float(3.0).display(), "3");
	/// assert_eq!(FieldValue::Int(-42).display(), "-42");
	/// assert_eq!(FieldValue::Bool(true).display(), "true");
	/// ```
	pub fn display(&self) -> String {
		match self {
			FieldValue::String(s)
			| FieldValue::Text(s)
			| FieldValue::Url(s)
			| FieldValue::Email(s)
			| FieldValue::Password(s)
			| FieldValue::Phone(s)
			| FieldValue::Choice(s)
			| FieldValue::Date(s)
			| FieldValue::DateTime(s) => s.clone(),
			FieldValue::Bool(b) => b.to_string(),
			FieldValue::MultipleChoice(options) => options.join(","),
			FieldValue::DynamicChoice(choice) => choice.selected().unwrap_or_default().to_string(),
			FieldValue::Float(f) => f.to_string(),
			FieldValue::Int(i) => i.to_string(),
			FieldValue::File(file) => file.name.clone(),
			FieldValue::Blob(_) => String::new(),
			FieldValue::Custom { value, .. } => value.clone(),
		}
	}

	/// Returns true when the value equals its kind's zero value
	///
	/// Booleans and numbers are never considered empty, so `required` does
	/// not reject `false` or `0`.
	pub fn is_empty(&self) -> bool {
		match self {
			FieldValue::String(s)
			| FieldValue::Text(s)
			| FieldValue::Url(s)
			| FieldValue::Email(s)
			| FieldValue::Password(s)
			| FieldValue::Phone(s)
			| FieldValue::Choice(s)
			| FieldValue::Date(s)
			| FieldValue::DateTime(s) => s.is_empty(),
			FieldValue::Bool(_) | FieldValue::Float(_) | FieldValue::Int(_) => false,
			FieldValue::MultipleChoice(options) => options.is_empty(),
			FieldValue::DynamicChoice(choice) => choice.index.is_none(),
			FieldValue::File(file) => file.is_empty(),
			FieldValue::Blob(data) => data.is_empty(),
			FieldValue::Custom { value, .. } => value.is_empty(),
		}
	}
}
