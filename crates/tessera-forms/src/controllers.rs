//! Standard form field controllers, one per [`FieldKind`](tessera_model::FieldKind)

mod boolean;
mod choice;
mod datetime;
mod file;
mod number;
mod text;

pub use boolean::BoolController;
pub use choice::{ChoiceController, DynamicChoiceController, MultipleChoiceController};
pub use datetime::{DateController, DateTimeController};
pub use file::{BlobController, FileController};
pub use number::{FloatController, IntController};
pub use text::{
	EmailController, PasswordController, PhoneController, StringController, TextController,
	UrlController,
};

use crate::controller::FormFieldController;
use crate::form::{Form, add_standard_label};
use crate::request::FormRequest;
use tessera_model::FieldMeta;
use tessera_views::View;

/// Controllers of all standard kinds, in registration order
pub(crate) fn standard_controllers() -> Vec<Box<dyn FormFieldController>> {
	vec![
		Box::new(StringController),
		Box::new(TextController),
		Box::new(UrlController),
		Box::new(EmailController),
		Box::new(PasswordController),
		Box::new(PhoneController),
		Box::new(BoolController),
		Box::new(ChoiceController),
		Box::new(MultipleChoiceController),
		Box::new(DynamicChoiceController),
		Box::new(DateController),
		Box::new(DateTimeController),
		Box::new(FloatController),
		Box::new(IntController),
		Box::new(FileController),
		Box::new(BlobController),
	]
}

/// The submitted value for `field`, empty when absent
fn submitted(field: &FieldMeta, request: &dyn FormRequest) -> String {
	request
		.form_value(&field.selector)
		.unwrap_or_default()
		.to_string()
}

/// True when `key` was submitted with a non-empty value
fn is_checked(request: &dyn FormRequest, key: &str) -> bool {
	request.form_value(key).is_some_and(|value| !value.is_empty())
}

fn labelled(
	with_label: bool,
	form: &Form,
	input: Box<dyn View>,
	field: &FieldMeta,
) -> Box<dyn View> {
	if with_label {
		add_standard_label(form, input, field)
	} else {
		input
	}
}
