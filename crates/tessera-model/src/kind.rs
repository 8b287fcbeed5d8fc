//! Field kind tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying the kind of a [`FieldValue`](crate::FieldValue)
///
/// Controllers are registered per kind, so the set of kinds is the set of
/// value types a form can edit. `Custom` covers application-defined values
/// that no standard controller claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	String,
	Text,
	Url,
	Email,
	Password,
	Phone,
	Bool,
	Choice,
	MultipleChoice,
	DynamicChoice,
	Date,
	DateTime,
	Float,
	Int,
	File,
	Blob,
	Custom,
}

impl FieldKind {
	/// Every kind with a standard controller, in registration order
	pub const STANDARD: [FieldKind; 16] = [
		FieldKind::String,
		FieldKind::Text,
		FieldKind::Url,
		FieldKind::Email,
		FieldKind::Password,
		FieldKind::Phone,
		FieldKind::Bool,
		FieldKind::Choice,
		FieldKind::MultipleChoice,
		FieldKind::DynamicChoice,
		FieldKind::Date,
		FieldKind::DateTime,
		FieldKind::Float,
		FieldKind::Int,
		FieldKind::File,
		FieldKind::Blob,
	];

	/// Returns the name used in diagnostics
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::FieldKind;
	///
	/// assert_eq!(FieldKind::MultipleChoice.as_str(), "MultipleChoice");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldKind::String => "String",
			FieldKind::Text => "Text",
			FieldKind::Url => "Url",
			FieldKind::Email => "Email",
			FieldKind::Password => "Password",
			FieldKind::Phone => "Phone",
			FieldKind::Bool => "Bool",
			FieldKind::Choice => "Choice",
			FieldKind::MultipleChoice => "MultipleChoice",
			FieldKind::DynamicChoice => "DynamicChoice",
			FieldKind::Date => "Date",
			FieldKind::DateTime => "DateTime",
			FieldKind::Float => "Float",
			FieldKind::Int => "Int",
			FieldKind::File => "File",
			FieldKind::Blob => "Blob",
			FieldKind::Custom => "Custom",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
