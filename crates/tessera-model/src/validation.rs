//! Per-kind value validation
//!
//! Binding stores submitted strings as-is; [`validate`] checks a field's
//! value against its kind and its declared attributes.

use crate::error::ModelError;
use crate::meta::FieldMeta;
use crate::value::{DATE_LAYOUT, DATETIME_LAYOUT, DateLayout, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

// HTTP/HTTPS URL: scheme, host labels without edge hyphens, optional port,
// path, query and fragment.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^https?://[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?(/[^\s?#]*)?(\?[^\s#]*)?(#[^\s]*)?$",
	)
	.expect("URL_REGEX: invalid regex pattern")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)+$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

// Optional leading plus, then digits with common separators.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[0-9 ()./\-]+$").expect("PHONE_REGEX: invalid regex pattern")
});

const MIN_PHONE_DIGITS: usize = 3;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("This field is required")]
	Required,
	#[error("Ensure this value has at most {max} characters (it has {actual})")]
	TooLong { max: usize, actual: usize },
	#[error("Invalid email address: {0}")]
	InvalidEmail(String),
	#[error("Invalid URL: {0}")]
	InvalidUrl(String),
	#[error("Invalid phone number: {0}")]
	InvalidPhone(String),
	#[error("Invalid choice: {0}")]
	InvalidChoice(String),
	#[error("Invalid date {value:?}, expected format {hint}")]
	InvalidDate { value: String, hint: &'static str },
	#[error(transparent)]
	Tag(#[from] ModelError),
}

/// Validate a field's current value
///
/// Empty values pass unless the field carries the `required` attribute.
///
/// # Examples
///
/// ```
/// use tessera_model::{FieldMeta, FieldValue, ValidationError, validate};
///
/// let email = FieldMeta::new("email", FieldValue::Email("ada@example.com".to_string()));
/// assert!(validate(&email).is_ok());
///
/// let missing = FieldMeta::new("email", FieldValue::Email(String::new())).with_tags("model", "required");
/// assert_eq!(validate(&missing), Err(ValidationError::Required));
/// ```
pub fn validate(field: &FieldMeta) -> Result<(), ValidationError> {
	if field.value.is_empty() {
		if field.is_required() {
			return Err(ValidationError::Required);
		}
		return Ok(());
	}

	match &field.value {
		FieldValue::String(s) | FieldValue::Text(s) | FieldValue::Password(s) => {
			check_maxlen(field, s)
		}
		FieldValue::Email(s) => {
			check_maxlen(field, s)?;
			if EMAIL_REGEX.is_match(s) {
				Ok(())
			} else {
				Err(ValidationError::InvalidEmail(s.clone()))
			}
		}
		FieldValue::Url(s) => {
			check_maxlen(field, s)?;
			if URL_REGEX.is_match(s) {
				Ok(())
			} else {
				Err(ValidationError::InvalidUrl(s.clone()))
			}
		}
		FieldValue::Phone(s) => {
			let digits = s.chars().filter(char::is_ascii_digit).count();
			if PHONE_REGEX.is_match(s) && digits >= MIN_PHONE_DIGITS {
				Ok(())
			} else {
				Err(ValidationError::InvalidPhone(s.clone()))
			}
		}
		FieldValue::Choice(s) => {
			if field.options().iter().any(|option| option == s) {
				Ok(())
			} else {
				Err(ValidationError::InvalidChoice(s.clone()))
			}
		}
		FieldValue::MultipleChoice(selected) => {
			let options = field.options();
			match selected.iter().find(|s| !options.contains(s)) {
				Some(unknown) => Err(ValidationError::InvalidChoice(unknown.clone())),
				None => Ok(()),
			}
		}
		FieldValue::DynamicChoice(choice) => match choice.index {
			Some(index) if index >= choice.options.len() => {
				Err(ValidationError::InvalidChoice(index.to_string()))
			}
			_ => Ok(()),
		},
		FieldValue::Date(s) => check_date(s, DATE_LAYOUT),
		FieldValue::DateTime(s) => check_datetime(s, DATETIME_LAYOUT),
		FieldValue::Bool(_)
		| FieldValue::Float(_)
		| FieldValue::Int(_)
		| FieldValue::File(_)
		| FieldValue::Blob(_)
		| FieldValue::Custom { .. } => Ok(()),
	}
}

fn check_maxlen(field: &FieldMeta, value: &str) -> Result<(), ValidationError> {
	if let Some(max) = field.maxlen()? {
		let actual = value.chars().count();
		if actual > max {
			return Err(ValidationError::TooLong { max, actual });
		}
	}
	Ok(())
}

fn check_date(value: &str, layout: DateLayout) -> Result<(), ValidationError> {
	chrono::NaiveDate::parse_from_str(value, layout.pattern)
		.map(|_| ())
		.map_err(|_| ValidationError::InvalidDate {
			value: value.to_string(),
			hint: layout.hint,
		})
}

fn check_datetime(value: &str, layout: DateLayout) -> Result<(), ValidationError> {
	chrono::NaiveDateTime::parse_from_str(value, layout.pattern)
		.map(|_| ())
		.map_err(|_| ValidationError::InvalidDate {
			value: value.to_string(),
			hint: layout.hint,
		})
}
