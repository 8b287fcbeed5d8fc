use super::{labelled, submitted};
use crate::controller::{FormFieldController, unsupported};
use crate::error::{FormError, FormResult};
use crate::form::Form;
use crate::request::FormRequest;
use std::str::FromStr;
use tessera_model::{FieldKind, FieldMeta, FieldValue};
use tessera_views::{TextField, View};

fn number_input(field: &FieldMeta, form: &Form) -> TextField {
	TextField {
		class: form.field_input_class(field),
		disabled: form.is_field_disabled(field),
		placeholder: form.input_field_placeholder(field),
		..TextField::new(&field.selector, field.value.display())
	}
}

/// Parse a submitted number; an empty submission is zero
fn parse_number<T: FromStr + Default>(
	field: &FieldMeta,
	request: &dyn FormRequest,
	what: &str,
) -> FormResult<T> {
	let raw = submitted(field, request);
	let raw = raw.trim();
	if raw.is_empty() {
		return Ok(T::default());
	}
	raw.parse().map_err(|_| FormError::InvalidValue {
		selector: field.selector.clone(),
		message: format!("{:?} is not a valid {}", raw, what),
	})
}

/// Text input for floating point fields
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatController;

impl FormFieldController for FloatController {
	fn kind(&self) -> FieldKind {
		FieldKind::Float
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		if field.kind() != FieldKind::Float {
			return Err(unsupported(field));
		}
		Ok(labelled(with_label, form, Box::new(number_input(field, form)), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Float {
			return Err(unsupported(field));
		}
		parse_number(field, request, "number").map(FieldValue::Float)
	}
}

/// Text input for integer fields
#[derive(Debug, Clone, Copy, Default)]
pub struct IntController;

impl FormFieldController for IntController {
	fn kind(&self) -> FieldKind {
		FieldKind::Int
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		if field.kind() != FieldKind::Int {
			return Err(unsupported(field));
		}
		Ok(labelled(with_label, form, Box::new(number_input(field, form)), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Int {
			return Err(unsupported(field));
		}
		parse_number(field, request, "integer").map(FieldValue::Int)
	}
}
