use crate::kind::FieldKind;

/// Errors raised when reading or writing model fields
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
	#[error("Unknown model field: {0}")]
	UnknownField(String),
	#[error("Field {selector} holds a {found} value, cannot store a {expected} value")]
	KindMismatch {
		selector: String,
		expected: FieldKind,
		found: FieldKind,
	},
	#[error("Invalid value {value:?} for tag attribute {tag}:{name}")]
	InvalidTagValue {
		tag: String,
		name: String,
		value: String,
	},
}

pub type ModelResult<T> = Result<T, ModelError>;
