use super::is_checked;
use crate::controller::{FormFieldController, unsupported};
use crate::error::FormResult;
use crate::form::Form;
use crate::request::FormRequest;
use tessera_model::{FieldKind, FieldMeta, FieldValue};
use tessera_views::{Checkbox, View};

/// Checkbox for boolean fields
///
/// The label, when requested, is rendered by the checkbox itself. Binding
/// yields `true` for any non-empty submission, including `"false"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolController;

impl FormFieldController for BoolController {
	fn kind(&self) -> FieldKind {
		FieldKind::Bool
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::Bool(checked) = field.value else {
			return Err(unsupported(field));
		};
		let mut checkbox = Checkbox {
			class: form.field_input_class(field),
			disabled: form.is_field_disabled(field),
			..Checkbox::new(&field.selector, checked)
		};
		if with_label {
			checkbox.label = form.field_label(field);
		}
		Ok(Box::new(checkbox))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Bool {
			return Err(unsupported(field));
		}
		Ok(FieldValue::Bool(is_checked(request, &field.selector)))
	}
}
