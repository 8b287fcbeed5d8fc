//! Form presentation policy and whole-model binding

use crate::controller::FormFieldControllers;
use crate::error::{FormError, FormResult};
use crate::request::FormRequest;
use std::collections::BTreeMap;
use tessera_conf::{FormSettings, LabelPosition};
use tessera_model::{FieldMeta, MODEL_TAG, Model, VIEW_TAG, validate};
use tessera_views::{Label, Text, View, ViewId, Views};

/// Presentation policy consulted by controllers
///
/// A `Form` answers per-field questions (class, size, placeholder, label,
/// disabled) from its [`FormSettings`] and the field's view attributes.
/// Controllers only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
	settings: FormSettings,
}

impl Form {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_settings(settings: FormSettings) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	/// Class of the field's input; the `class` view attribute wins over the form default
	pub fn field_input_class(&self, field: &FieldMeta) -> String {
		field
			.attrib(VIEW_TAG, "class")
			.unwrap_or(self.settings.input_class.as_str())
			.to_string()
	}

	/// Visual size of a single-line input
	///
	/// Reads the `size` view attribute. A malformed value is logged and the
	/// form default is used instead.
	pub fn input_size(&self, field: &FieldMeta) -> usize {
		match field.attrib(VIEW_TAG, "size") {
			None => self.settings.default_input_size,
			Some(raw) => raw.parse().unwrap_or_else(|_| {
				tracing::warn!(
					selector = %field.selector,
					value = raw,
					"ignoring malformed size attribute"
				);
				self.settings.default_input_size
			}),
		}
	}

	pub fn is_field_disabled(&self, field: &FieldMeta) -> bool {
		self.settings.is_field_disabled(&field.selector) || field.tags.has(VIEW_TAG, "disabled")
	}

	/// Excluded fields are neither rendered nor bound
	pub fn is_field_excluded(&self, field: &FieldMeta) -> bool {
		self.settings.is_field_excluded(&field.selector)
	}

	pub fn input_field_placeholder(&self, field: &FieldMeta) -> String {
		if let Some(placeholder) = self.settings.placeholders.get(&field.selector) {
			return placeholder.clone();
		}
		if let Some(placeholder) = field.attrib(VIEW_TAG, "placeholder") {
			return placeholder.to_string();
		}
		if self.settings.generate_placeholders {
			return self.field_label(field);
		}
		String::new()
	}

	/// Label text of a field
	///
	/// Configured labels come first, then the `label` model attribute, then
	/// the field name with underscores as spaces and the first letter upper-cased.
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::Form;
	/// use tessera_model::{FieldMeta, FieldValue};
	///
	/// let form = Form::new();
	/// let field = FieldMeta::new("first_name", FieldValue::String(String::new()));
	/// assert_eq!(form.field_label(&field), "First name");
	///
	/// let tagged = field.with_tags("model", "label=Given name");
	/// assert_eq!(form.field_label(&tagged), "Given name");
	/// ```
	pub fn field_label(&self, field: &FieldMeta) -> String {
		if let Some(label) = self.settings.labels.get(&field.selector) {
			return label.clone();
		}
		if let Some(label) = field.attrib(MODEL_TAG, "label") {
			return label.to_string();
		}
		humanize(&field.name)
	}

	pub fn label_class(&self) -> &str {
		&self.settings.label_class
	}

	pub fn label_position(&self) -> LabelPosition {
		self.settings.label_position
	}

	pub fn required_marker(&self) -> &str {
		&self.settings.required_marker
	}

	/// Render an input for every field of `model`, in field order
	pub fn new_inputs(
		&self,
		model: &dyn Model,
		controllers: &FormFieldControllers,
		with_label: bool,
	) -> FormResult<Views> {
		let mut views = Views::new();
		for field in model.fields() {
			if self.is_field_excluded(&field) {
				continue;
			}
			views.push(controllers.new_input(with_label, &field, self)?);
		}
		Ok(views)
	}

	/// Bind a submission into every field of `model`
	///
	/// Excluded and disabled fields are skipped. Each remaining field is bound,
	/// validated and written. Invalid input is collected per selector in the
	/// returned report and leaves the field untouched.
	///
	/// # Errors
	///
	/// Aborts on the first unsupported field, upload failure or model write
	/// failure.
	pub fn bind_model(
		&self,
		model: &mut dyn Model,
		controllers: &FormFieldControllers,
		request: &dyn FormRequest,
	) -> FormResult<BindReport> {
		let mut report = BindReport::default();
		for mut field in model.fields() {
			if self.is_field_excluded(&field) || self.is_field_disabled(&field) {
				continue;
			}

			field.value = match controllers.bind(&field, self, request) {
				Ok(value) => value,
				Err(FormError::InvalidValue { selector, message }) => {
					report.errors.insert(selector, message);
					continue;
				}
				Err(err) => return Err(err),
			};

			if let Err(err) = validate(&field) {
				tracing::debug!(
					selector = %field.selector,
					error = %err,
					"bound value failed validation"
				);
				report.errors.insert(field.selector, err.to_string());
				continue;
			}

			model.set_field(&field.selector, field.value)?;
			report.bound.push(field.selector);
		}
		Ok(report)
	}
}

fn humanize(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Outcome of [`Form::bind_model`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
	/// Selectors of the fields written to the model
	pub bound: Vec<String>,
	/// Error message per rejected selector
	pub errors: BTreeMap<String, String>,
}

impl BindReport {
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn error(&self, selector: &str) -> Option<&str> {
		self.errors.get(selector).map(String::as_str)
	}
}

/// Pair `input` with a label for `field`
///
/// The label points at the input's id, carries the form's label class and
/// ends with the required marker when the field is required. It is placed
/// before or after the input according to [`Form::label_position`].
pub fn add_standard_label(form: &Form, input: Box<dyn View>, field: &FieldMeta) -> Box<dyn View> {
	let target = input.id().cloned();
	add_label_for(form, input, field, target)
}

/// Like [`add_standard_label`], with the label pointing at `target`
///
/// Composite inputs have no id of their own; they pass the id of the
/// element that should receive focus.
pub fn add_label_for(
	form: &Form,
	input: Box<dyn View>,
	field: &FieldMeta,
	target: Option<ViewId>,
) -> Box<dyn View> {
	let mut text = form.field_label(field);
	if field.is_required() {
		text.push_str(form.required_marker());
	}

	let mut label = Label::new().with_class(form.label_class()).with_content(Text::new(text));
	label.for_input = target;

	let views: Vec<Box<dyn View>> = match form.label_position() {
		LabelPosition::Before => vec![Box::new(label), input],
		LabelPosition::After => vec![input, Box::new(label)],
	};
	Box::new(Views::from(views))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;
	use tessera_model::FieldValue;
	use tessera_views::{TextField, downcast_ref, render_to_string};

	fn text_field(name: &str) -> FieldMeta {
		FieldMeta::new(name, FieldValue::String(String::new()))
	}

	#[rstest]
	fn test_input_class_tag_overrides_default() {
		let form = Form::from_settings(FormSettings {
			input_class: "form-control".to_string(),
			..FormSettings::default()
		});
		assert_eq!(form.field_input_class(&text_field("a")), "form-control");
		assert_eq!(
			form.field_input_class(&text_field("a").with_tags(VIEW_TAG, "class=wide")),
			"wide"
		);
	}

	#[rstest]
	#[case("size=10", 10)]
	#[case("size=ten", 30)]
	#[case("", 30)]
	fn test_input_size(#[case] tags: &str, #[case] expected: usize) {
		let form = Form::from_settings(FormSettings {
			default_input_size: 30,
			..FormSettings::default()
		});
		assert_eq!(form.input_size(&text_field("a").with_tags(VIEW_TAG, tags)), expected);
	}

	#[rstest]
	fn test_placeholder_sources() {
		let form = Form::from_settings(FormSettings {
			placeholders: HashMap::from([("a".to_string(), "configured".to_string())]),
			generate_placeholders: true,
			..FormSettings::default()
		});
		assert_eq!(form.input_field_placeholder(&text_field("a")), "configured");
		assert_eq!(
			form.input_field_placeholder(
				&text_field("b").with_tags(VIEW_TAG, "placeholder=tagged")
			),
			"tagged"
		);
		assert_eq!(form.input_field_placeholder(&text_field("zip_code")), "Zip code");
		assert_eq!(Form::new().input_field_placeholder(&text_field("zip_code")), "");
	}

	#[rstest]
	fn test_disabled_by_tag_or_settings() {
		let form = Form::from_settings(FormSettings {
			disabled_fields: vec!["locked".to_string()],
			..FormSettings::default()
		});
		assert!(form.is_field_disabled(&text_field("locked")));
		assert!(form.is_field_disabled(&text_field("x").with_tags(VIEW_TAG, "disabled")));
		assert!(!form.is_field_disabled(&text_field("x")));
	}

	#[rstest]
	fn test_standard_label_before_input_with_required_marker() {
		let form = Form::from_settings(FormSettings {
			label_class: "lbl".to_string(),
			..FormSettings::default()
		});
		let field = text_field("email").with_tags(MODEL_TAG, "required");
		let input = TextField::new("email", "").with_id("in");

		let view = add_standard_label(&form, Box::new(input), &field);
		let html = render_to_string(view.as_ref()).unwrap();

		assert!(html.contains(r#"class="lbl" for="in">Email *</label><input id="in""#), "{}", html);
	}

	#[rstest]
	fn test_standard_label_after_input() {
		let form = Form::from_settings(FormSettings {
			label_position: LabelPosition::After,
			..FormSettings::default()
		});
		let view = add_standard_label(&form, Box::new(TextField::new("a", "")), &text_field("a"));
		let views = downcast_ref::<Views>(view.as_ref()).unwrap();

		let children: Vec<&dyn View> = views.iter().collect();
		assert!(downcast_ref::<TextField>(children[0]).is_some());
		assert!(downcast_ref::<Label>(children[1]).is_some());
	}

	#[rstest]
	#[case("name", "Name")]
	#[case("date_of_birth", "Date of birth")]
	#[case("", "")]
	fn test_humanize(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(humanize(name), expected);
	}
}
