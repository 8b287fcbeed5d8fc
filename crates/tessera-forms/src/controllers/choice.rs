//! Controllers for choice fields

use super::{is_checked, labelled, submitted};
use crate::controller::{FormFieldController, unsupported};
use crate::error::{FormError, FormResult};
use crate::form::Form;
use crate::request::FormRequest;
use tessera_model::{DynamicChoice, FieldKind, FieldMeta, FieldValue};
use tessera_views::{Checkbox, IndexedStringsSelectModel, Select, StringsSelectModel, View, Views};

/// Prefix `options` with an empty option unless it already starts with one
///
/// Returns true when an option was inserted.
fn prepend_empty_option(options: &mut Vec<String>) -> bool {
	if options.first().is_some_and(String::is_empty) {
		return false;
	}
	options.insert(0, String::new());
	true
}

/// Form key of the checkbox for option `index`
fn option_key(field: &FieldMeta, index: usize) -> String {
	format!("{}_{}", field.selector, index)
}

/// Drop-down over the `options` model attribute
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceController;

impl FormFieldController for ChoiceController {
	fn kind(&self) -> FieldKind {
		FieldKind::Choice
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::Choice(selected) = &field.value else {
			return Err(unsupported(field));
		};
		let mut options = field.options();
		prepend_empty_option(&mut options);

		let select = Select {
			class: form.field_input_class(field),
			disabled: form.is_field_disabled(field),
			size: 1,
			..Select::new(&field.selector, StringsSelectModel::new(options, selected))
		};
		Ok(labelled(with_label, form, Box::new(select), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Choice {
			return Err(unsupported(field));
		}
		Ok(FieldValue::Choice(submitted(field, request)))
	}
}

/// One checkbox per option, named `<selector>_<index>`
///
/// Binding rebuilds the selection from the submitted boxes, so binding the
/// same submission twice gives the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleChoiceController;

impl FormFieldController for MultipleChoiceController {
	fn kind(&self) -> FieldKind {
		FieldKind::MultipleChoice
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::MultipleChoice(selected) = &field.value else {
			return Err(unsupported(field));
		};
		let class = form.field_input_class(field);
		let disabled = form.is_field_disabled(field);

		let mut checkboxes = Views::new();
		for (index, option) in field.options().into_iter().enumerate() {
			let checked = selected.contains(&option);
			checkboxes = checkboxes.with(Checkbox {
				class: class.clone(),
				disabled,
				..Checkbox::new(option_key(field, index), checked).with_label(option)
			});
		}
		Ok(labelled(with_label, form, Box::new(checkboxes), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::MultipleChoice {
			return Err(unsupported(field));
		}
		let selected = field
			.options()
			.into_iter()
			.enumerate()
			.filter(|(index, _)| is_checked(request, &option_key(field, *index)))
			.map(|(_, option)| option)
			.collect();
		Ok(FieldValue::MultipleChoice(selected))
	}
}

/// Drop-down over options supplied by the value at runtime
///
/// When an empty option is prepended the selected index moves down by one,
/// and a missing selection selects the empty option.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicChoiceController;

impl FormFieldController for DynamicChoiceController {
	fn kind(&self) -> FieldKind {
		FieldKind::DynamicChoice
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		let FieldValue::DynamicChoice(choice) = &field.value else {
			return Err(unsupported(field));
		};
		let mut options = choice.options.clone();
		let mut index = choice.index;
		if prepend_empty_option(&mut options) {
			index = Some(index.map_or(0, |i| i + 1));
		}

		let select = Select {
			class: form.field_input_class(field),
			disabled: form.is_field_disabled(field),
			size: 1,
			..Select::new(&field.selector, IndexedStringsSelectModel::new(options, index))
		};
		Ok(labelled(with_label, form, Box::new(select), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		let FieldValue::DynamicChoice(choice) = &field.value else {
			return Err(unsupported(field));
		};
		let option = submitted(field, request);
		let index = if option.is_empty() {
			None
		} else {
			let position = choice.position(&option).ok_or_else(|| FormError::InvalidValue {
				selector: field.selector.clone(),
				message: format!("{:?} is not one of the available options", option),
			})?;
			Some(position)
		};
		Ok(FieldValue::DynamicChoice(DynamicChoice {
			options: choice.options.clone(),
			index,
		}))
	}
}
