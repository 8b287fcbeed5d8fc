//! Controllers for string-valued fields

use super::{labelled, submitted};
use crate::controller::{FormFieldController, unsupported};
use crate::error::FormResult;
use crate::form::Form;
use crate::request::FormRequest;
use tessera_model::{FieldKind, FieldMeta, FieldValue, VIEW_TAG};
use tessera_views::{TextArea, TextField, TextFieldType, View};

/// Single-line input for `field` showing `text`
///
/// With `apply_maxlen`, a `maxlen` model attribute sets `maxlength` and
/// clamps the visual size.
fn single_line(
	field: &FieldMeta,
	form: &Form,
	text: &str,
	field_type: TextFieldType,
	apply_maxlen: bool,
) -> TextField {
	let mut input = TextField {
		field_type,
		class: form.field_input_class(field),
		size: form.input_size(field),
		disabled: form.is_field_disabled(field),
		placeholder: form.input_field_placeholder(field),
		..TextField::new(&field.selector, text)
	};
	if apply_maxlen {
		match field.maxlen() {
			Ok(Some(maxlen)) => {
				input.max_length = maxlen;
				if maxlen < input.size {
					input.size = maxlen;
				}
			}
			Ok(None) => {}
			Err(err) => {
				tracing::warn!(
					selector = %field.selector,
					error = %err,
					"ignoring malformed maxlen attribute"
				);
			}
		}
	}
	input
}

macro_rules! single_line_controller {
	($(#[$doc:meta])* $name:ident, $variant:ident, $field_type:expr, $apply_maxlen:expr) => {
		$(#[$doc])*
		#[derive(Debug, Clone, Copy, Default)]
		pub struct $name;

		impl FormFieldController for $name {
			fn kind(&self) -> FieldKind {
				FieldKind::$variant
			}

			fn new_input(
				&self,
				with_label: bool,
				field: &FieldMeta,
				form: &Form,
			) -> FormResult<Box<dyn View>> {
				let FieldValue::$variant(text) = &field.value else {
					return Err(unsupported(field));
				};
				let input = single_line(field, form, text, $field_type, $apply_maxlen);
				Ok(labelled(with_label, form, Box::new(input), field))
			}

			fn bind(
				&self,
				field: &FieldMeta,
				_form: &Form,
				request: &dyn FormRequest,
			) -> FormResult<FieldValue> {
				if field.kind() != FieldKind::$variant {
					return Err(unsupported(field));
				}
				Ok(FieldValue::$variant(submitted(field, request)))
			}
		}
	};
}

single_line_controller!(
	/// Text input; honours `maxlen`
	StringController,
	String,
	TextFieldType::Text,
	true
);
single_line_controller!(
	/// Text input for URLs
	UrlController,
	Url,
	TextFieldType::Text,
	false
);
single_line_controller!(
	/// `type="email"` input
	EmailController,
	Email,
	TextFieldType::Email,
	false
);
single_line_controller!(
	/// `type="password"` input; honours `maxlen`
	PasswordController,
	Password,
	TextFieldType::Password,
	true
);
single_line_controller!(
	/// Text input for phone numbers
	PhoneController,
	Phone,
	TextFieldType::Text,
	false
);

/// Reads an integer view attribute of a text area
///
/// # Panics
///
/// Panics when the attribute is present but not a number. Attributes are
/// declared with the model, so this is a programming error.
fn dimension(field: &FieldMeta, name: &str) -> usize {
	match field.attrib(VIEW_TAG, name) {
		None => 0,
		Some(raw) => raw.parse().unwrap_or_else(|err| {
			panic!(
				"invalid {} attribute {:?} on form field {}: {}",
				name, raw, field.selector, err
			)
		}),
	}
}

/// Multi-line `<textarea>` sized by the `cols` and `rows` view attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct TextController;

impl FormFieldController for TextController {
	fn kind(&self) -> FieldKind {
		FieldKind::Text
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::Text(text) = &field.value else {
			return Err(unsupported(field));
		};
		let input = TextArea {
			class: form.field_input_class(field),
			cols: dimension(field, "cols"),
			rows: dimension(field, "rows"),
			disabled: form.is_field_disabled(field),
			placeholder: form.input_field_placeholder(field),
			..TextArea::new(&field.selector, text)
		};
		Ok(labelled(with_label, form, Box::new(input), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Text {
			return Err(unsupported(field));
		}
		Ok(FieldValue::Text(submitted(field, request)))
	}
}
