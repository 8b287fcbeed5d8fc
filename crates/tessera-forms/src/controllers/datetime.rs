use super::submitted;
use crate::controller::{FormFieldController, unsupported};
use crate::error::FormResult;
use crate::form::{Form, add_label_for};
use crate::request::FormRequest;
use tessera_model::{DATE_LAYOUT, DATETIME_LAYOUT, DateLayout, FieldKind, FieldMeta, FieldValue};
use tessera_views::{Html, TextField, View, Views};

/// Format hint followed by a text field as wide as the hint
///
/// A label points at the text field rather than the hint.
fn hinted_input(
	with_label: bool,
	field: &FieldMeta,
	form: &Form,
	text: &str,
	layout: DateLayout,
) -> Box<dyn View> {
	let input = TextField {
		class: form.field_input_class(field),
		size: layout.hint.len(),
		disabled: form.is_field_disabled(field),
		placeholder: form.input_field_placeholder(field),
		..TextField::new(&field.selector, text)
	};
	let target = input.id.clone();
	let views = Views::new()
		.with(Html::new(format!("(Format: {})<br/>", layout.hint)))
		.with(input);
	if with_label {
		add_label_for(form, Box::new(views), field, Some(target))
	} else {
		Box::new(views)
	}
}

/// Text input for dates in [`DATE_LAYOUT`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DateController;

impl FormFieldController for DateController {
	fn kind(&self) -> FieldKind {
		FieldKind::Date
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::Date(text) = &field.value else {
			return Err(unsupported(field));
		};
		Ok(hinted_input(with_label, field, form, text, DATE_LAYOUT))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Date {
			return Err(unsupported(field));
		}
		Ok(FieldValue::Date(submitted(field, request)))
	}
}

/// Text input for timestamps in [`DATETIME_LAYOUT`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeController;

impl FormFieldController for DateTimeController {
	fn kind(&self) -> FieldKind {
		FieldKind::DateTime
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::DateTime(text) = &field.value else {
			return Err(unsupported(field));
		};
		Ok(hinted_input(with_label, field, form, text, DATETIME_LAYOUT))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::DateTime {
			return Err(unsupported(field));
		}
		Ok(FieldValue::DateTime(submitted(field, request)))
	}
}
