//! Form input widgets

use crate::error::ViewResult;
use crate::id::ViewId;
use crate::response::Response;
use crate::view::View;

/// Input type of a [`TextField`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFieldType {
	#[default]
	Text,
	Password,
	Email,
}

impl TextFieldType {
	pub fn as_str(&self) -> &'static str {
		match self {
			TextFieldType::Text => "text",
			TextFieldType::Password => "password",
			TextFieldType::Email => "email",
		}
	}
}

/// Single line `<input>`
///
/// # Examples
///
/// ```
/// use tessera_views::{TextField, TextFieldType, render_to_string};
///
/// let field = TextField::new("user.email", "a@b.c")
///     .with_id("f1")
///     .with_type(TextFieldType::Email);
/// assert_eq!(
///     render_to_string(&field).unwrap(),
///     r#"<input id="f1" type="email" name="user.email" value="a@b.c" />"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextField {
	pub id: ViewId,
	pub field_type: TextFieldType,
	pub class: String,
	pub name: String,
	pub text: String,
	pub size: usize,
	pub max_length: usize,
	pub disabled: bool,
	pub placeholder: String,
}

impl TextField {
	pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			text: text.into(),
			..Self::default()
		}
	}

	pub fn with_id(mut self, id: impl Into<ViewId>) -> Self {
		self.id = id.into();
		self
	}

	pub fn with_type(mut self, field_type: TextFieldType) -> Self {
		self.field_type = field_type;
		self
	}
}

impl View for TextField {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("input")
			.attrib("id", self.id.as_str())
			.attrib("type", self.field_type.as_str())
			.attrib_if_not_default("class", self.class.as_str())
			.attrib("name", self.name.as_str())
			.attrib_if_not_default("value", self.text.as_str())
			.attrib_if_not_default("size", self.size)
			.attrib_if_not_default("maxlength", self.max_length)
			.attrib_flag("disabled", self.disabled)
			.attrib_if_not_default("placeholder", self.placeholder.as_str());
		response.xml.close_tag()
	}

	fn id(&self) -> Option<&ViewId> {
		Some(&self.id)
	}
}

/// Multi line `<textarea>`
#[derive(Debug, Clone, Default)]
pub struct TextArea {
	pub id: ViewId,
	pub class: String,
	pub name: String,
	pub text: String,
	pub cols: usize,
	pub rows: usize,
	pub disabled: bool,
	pub placeholder: String,
}

impl TextArea {
	pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			text: text.into(),
			..Self::default()
		}
	}
}

impl View for TextArea {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("textarea")
			.attrib("id", self.id.as_str())
			.attrib_if_not_default("class", self.class.as_str())
			.attrib("name", self.name.as_str())
			.attrib_if_not_default("cols", self.cols)
			.attrib_if_not_default("rows", self.rows)
			.attrib_flag("disabled", self.disabled)
			.attrib_if_not_default("placeholder", self.placeholder.as_str())
			.content(&self.text);
		response.xml.force_close_tag()
	}

	fn id(&self) -> Option<&ViewId> {
		Some(&self.id)
	}
}

/// Checkbox `<input>` followed by its own `<label>` when `label` is set
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
	pub id: ViewId,
	pub class: String,
	pub name: String,
	pub label: String,
	pub checked: bool,
	pub disabled: bool,
}

impl Checkbox {
	pub fn new(name: impl Into<String>, checked: bool) -> Self {
		Self {
			name: name.into(),
			checked,
			..Self::default()
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
}

impl View for Checkbox {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("input")
			.attrib("id", self.id.as_str())
			.attrib("type", "checkbox")
			.attrib_if_not_default("class", self.class.as_str())
			.attrib("name", self.name.as_str())
			.attrib("value", "true")
			.attrib_flag("checked", self.checked)
			.attrib_flag("disabled", self.disabled);
		response.xml.close_tag()?;

		if !self.label.is_empty() {
			response
				.xml
				.open_tag("label")
				.attrib("for", self.id.as_str())
				.content(&self.label);
			response.xml.force_close_tag()?;
		}
		Ok(())
	}

	fn id(&self) -> Option<&ViewId> {
		Some(&self.id)
	}
}

/// File upload `<input>`
#[derive(Debug, Clone, Default)]
pub struct FileInput {
	pub id: ViewId,
	pub class: String,
	pub name: String,
	pub disabled: bool,
}

impl FileInput {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}
}

impl View for FileInput {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("input")
			.attrib("id", self.id.as_str())
			.attrib("type", "file")
			.attrib_if_not_default("class", self.class.as_str())
			.attrib("name", self.name.as_str())
			.attrib_flag("disabled", self.disabled);
		response.xml.close_tag()
	}

	fn id(&self) -> Option<&ViewId> {
		Some(&self.id)
	}
}
