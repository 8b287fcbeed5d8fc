//! Form field controller contract and registry

use crate::error::{FormError, FormResult};
use crate::form::Form;
use crate::request::FormRequest;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use tessera_model::{FieldKind, FieldMeta, FieldValue};
use tessera_views::View;

/// Binds one kind of model field to an HTML input and back
///
/// Controllers are stateless. `new_input` and `bind` only read their
/// arguments; [`set_value`](FormFieldController::set_value) is the single
/// place where a field is written.
pub trait FormFieldController: fmt::Debug + Send + Sync {
	/// The value kind this controller handles
	fn kind(&self) -> FieldKind;

	/// Returns true when this controller can handle `field`
	fn supports(&self, field: &FieldMeta, _form: &Form) -> bool {
		field.kind() == self.kind()
	}

	/// Build the input view for `field`, wrapped with a label when `with_label` is set
	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>>;

	/// Compute the field's new value from the submission
	fn bind(
		&self,
		field: &FieldMeta,
		form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue>;

	/// Bind and store the result in `field.value`
	fn set_value(
		&self,
		field: &mut FieldMeta,
		form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<()> {
		field.value = self.bind(field, form, request)?;
		Ok(())
	}
}

pub(crate) fn unsupported(field: &FieldMeta) -> FormError {
	FormError::UnsupportedType {
		field: field.descriptor(),
	}
}

static GLOBAL_CONTROLLERS: Lazy<FormFieldControllers> = Lazy::new(FormFieldControllers::standard);

/// Ordered controller registry with one controller per field kind
///
/// # Examples
///
/// ```
/// use tessera_forms::{Form, FormFieldControllers};
/// use tessera_model::{FieldMeta, FieldValue};
///
/// let controllers = FormFieldControllers::global();
/// let field = FieldMeta::new("age", FieldValue::Int(42));
/// assert!(controllers.supports(&field, &Form::new()));
/// ```
#[derive(Debug, Default)]
pub struct FormFieldControllers {
	controllers: Vec<Box<dyn FormFieldController>>,
	by_kind: HashMap<FieldKind, usize>,
}

impl FormFieldControllers {
	/// An empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry holding the controllers of every standard kind
	pub fn standard() -> Self {
		let mut registry = Self::new();
		for controller in crate::controllers::standard_controllers() {
			registry.push(controller);
		}
		registry
	}

	/// The process-wide standard registry
	pub fn global() -> &'static Self {
		&GLOBAL_CONTROLLERS
	}

	/// Register a controller for a kind not yet claimed
	///
	/// # Errors
	///
	/// Returns [`FormError::DuplicateController`] when another controller
	/// already handles the same kind. The registry is left unchanged.
	pub fn register(&mut self, controller: impl FormFieldController + 'static) -> FormResult<()> {
		let kind = controller.kind();
		if self.by_kind.contains_key(&kind) {
			tracing::warn!(%kind, "form field controller already registered for kind");
			return Err(FormError::DuplicateController(kind));
		}
		self.push(Box::new(controller));
		Ok(())
	}

	/// Builder form of [`register`](Self::register)
	pub fn with(mut self, controller: impl FormFieldController + 'static) -> FormResult<Self> {
		self.register(controller)?;
		Ok(self)
	}

	fn push(&mut self, controller: Box<dyn FormFieldController>) {
		let index = self.controllers.len();
		self.by_kind.entry(controller.kind()).or_insert(index);
		self.controllers.push(controller);
	}

	pub fn len(&self) -> usize {
		self.controllers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.controllers.is_empty()
	}

	/// Controllers in registration order
	pub fn iter(&self) -> impl Iterator<Item = &dyn FormFieldController> {
		self.controllers.iter().map(|c| c.as_ref())
	}

	/// Returns the controller handling `field`, if any
	pub fn controller_for(
		&self,
		field: &FieldMeta,
		form: &Form,
	) -> Option<&dyn FormFieldController> {
		self.by_kind
			.get(&field.kind())
			.map(|&index| self.controllers[index].as_ref())
			.filter(|controller| controller.supports(field, form))
	}

	fn dispatch(&self, field: &FieldMeta, form: &Form) -> FormResult<&dyn FormFieldController> {
		tracing::debug!(selector = %field.selector, kind = %field.kind(), "dispatching form field");
		self.controller_for(field, form).ok_or_else(|| unsupported(field))
	}

	pub fn supports(&self, field: &FieldMeta, form: &Form) -> bool {
		self.controller_for(field, form).is_some()
	}

	/// Build the input for `field` with its registered controller
	///
	/// # Errors
	///
	/// Returns [`FormError::UnsupportedType`] when no controller handles the field.
	pub fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		self.dispatch(field, form)?.new_input(with_label, field, form)
	}

	/// Compute the bound value of `field` without writing it
	pub fn bind(
		&self,
		field: &FieldMeta,
		form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		self.dispatch(field, form)?.bind(field, form, request)
	}

	/// Bind the submission into `field.value`
	pub fn set_value(
		&self,
		field: &mut FieldMeta,
		form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<()> {
		let controller = self.dispatch(field, form)?;
		controller.set_value(field, form, request)?;
		tracing::debug!(selector = %field.selector, "bound form field");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::FormData;
	use rstest::rstest;
	use tessera_views::Html;

	#[derive(Debug)]
	struct UpperCaseController;

	impl FormFieldController for UpperCaseController {
		fn kind(&self) -> FieldKind {
			FieldKind::Custom
		}

		fn supports(&self, field: &FieldMeta, _form: &Form) -> bool {
			matches!(&field.value, FieldValue::Custom { type_name, .. } if type_name == "Shout")
		}

		fn new_input(
			&self,
			_with_label: bool,
			field: &FieldMeta,
			_form: &Form,
		) -> FormResult<Box<dyn View>> {
			Ok(Box::new(Html::new(field.value.display().to_uppercase())))
		}

		fn bind(
			&self,
			field: &FieldMeta,
			_form: &Form,
			request: &dyn FormRequest,
		) -> FormResult<FieldValue> {
			Ok(FieldValue::Custom {
				type_name: "Shout".to_string(),
				value: request.form_value(&field.selector).unwrap_or_default().to_uppercase(),
			})
		}
	}

	fn custom(type_name: &str) -> FieldMeta {
		FieldMeta::new(
			"c",
			FieldValue::Custom {
				type_name: type_name.to_string(),
				value: "hey".to_string(),
			},
		)
	}

	#[rstest]
	fn test_standard_registry_holds_one_controller_per_kind() {
		let registry = FormFieldControllers::standard();
		assert_eq!(registry.len(), FieldKind::STANDARD.len());
		let kinds: Vec<FieldKind> = registry.iter().map(|c| c.kind()).collect();
		assert_eq!(kinds, FieldKind::STANDARD.to_vec());
	}

	#[rstest]
	fn test_custom_kind_is_unsupported_by_default() {
		let form = Form::new();
		let field = custom("Shout");
		let registry = FormFieldControllers::standard();

		assert!(!registry.supports(&field, &form));
		let err = registry.new_input(false, &field, &form).unwrap_err();
		assert_eq!(err.to_string(), "Type Shout of form field c not supported");
	}

	#[rstest]
	fn test_registering_custom_controller() {
		let form = Form::new();
		let registry = FormFieldControllers::standard().with(UpperCaseController).unwrap();
		let mut field = custom("Shout");

		assert!(registry.supports(&field, &form));
		assert!(!registry.supports(&custom("Whisper"), &form));

		let request = FormData::new().with_value("c", "quiet");
		registry.set_value(&mut field, &form, &request).unwrap();
		assert_eq!(field.value.display(), "QUIET");
	}

	#[rstest]
	fn test_duplicate_registration_is_rejected() {
		let mut registry = FormFieldControllers::new();
		registry.register(UpperCaseController).unwrap();

		let err = registry.register(UpperCaseController).unwrap_err();

		assert!(matches!(err, FormError::DuplicateController(FieldKind::Custom)));
		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn test_empty_registry_binds_nothing() {
		let registry = FormFieldControllers::new();
		let field = FieldMeta::new("n", FieldValue::Int(1));
		let err = registry.bind(&field, &Form::new(), &FormData::new()).unwrap_err();
		assert!(matches!(err, FormError::UnsupportedType { field } if field.selector == "n"));
	}
}
