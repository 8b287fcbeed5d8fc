//! Select boxes and their option models

use crate::error::ViewResult;
use crate::id::ViewId;
use crate::response::Response;
use crate::view::View;
use std::fmt;

/// Options shown by a [`Select`]
pub trait SelectModel: fmt::Debug + Send + Sync {
	fn num_options(&self) -> usize;

	/// Submitted value of option `index`
	fn value(&self, index: usize) -> &str;

	/// Display text of option `index`
	fn label(&self, index: usize) -> &str {
		self.value(index)
	}

	fn selected(&self, index: usize) -> bool;

	/// Index of the first selected option
	fn selected_index(&self) -> Option<usize> {
		(0..self.num_options()).find(|&i| self.selected(i))
	}

	fn labels(&self) -> Vec<&str> {
		(0..self.num_options()).map(|i| self.label(i)).collect()
	}
}

/// Options selected by value
///
/// # Examples
///
/// ```
/// use tessera_views::{SelectModel, StringsSelectModel};
///
/// let model = StringsSelectModel::new(vec!["".into(), "a".into(), "b".into()], "a");
/// assert_eq!(model.selected_index(), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringsSelectModel {
	pub options: Vec<String>,
	pub selected: String,
}

impl StringsSelectModel {
	pub fn new(options: Vec<String>, selected: impl Into<String>) -> Self {
		Self {
			options,
			selected: selected.into(),
		}
	}
}

impl SelectModel for StringsSelectModel {
	fn num_options(&self) -> usize {
		self.options.len()
	}

	fn value(&self, index: usize) -> &str {
		&self.options[index]
	}

	fn selected(&self, index: usize) -> bool {
		self.options[index] == self.selected
	}
}

/// Options selected by position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedStringsSelectModel {
	pub options: Vec<String>,
	pub index: Option<usize>,
}

impl IndexedStringsSelectModel {
	pub fn new(options: Vec<String>, index: Option<usize>) -> Self {
		Self { options, index }
	}
}

impl SelectModel for IndexedStringsSelectModel {
	fn num_options(&self) -> usize {
		self.options.len()
	}

	fn value(&self, index: usize) -> &str {
		&self.options[index]
	}

	fn selected(&self, index: usize) -> bool {
		self.index == Some(index)
	}

	fn selected_index(&self) -> Option<usize> {
		self.index.filter(|&i| i < self.options.len())
	}
}

/// `<select>` drop-down or list box
#[derive(Debug)]
pub struct Select {
	pub id: ViewId,
	pub class: String,
	pub name: String,
	pub model: Box<dyn SelectModel>,
	pub disabled: bool,
	/// Visible rows; 1 renders a drop-down
	pub size: usize,
}

impl Select {
	pub fn new(name: impl Into<String>, model: impl SelectModel + 'static) -> Self {
		Self {
			id: ViewId::new(),
			class: String::new(),
			name: name.into(),
			model: Box::new(model),
			disabled: false,
			size: 1,
		}
	}
}

impl View for Select {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("select")
			.attrib("id", self.id.as_str())
			.attrib_if_not_default("class", self.class.as_str())
			.attrib("name", self.name.as_str())
			.attrib_if_not_default("size", self.size)
			.attrib_flag("disabled", self.disabled);

		for i in 0..self.model.num_options() {
			response
				.xml
				.open_tag("option")
				.attrib("value", self.model.value(i))
				.attrib_flag("selected", self.model.selected(i))
				.content(self.model.label(i));
			response.xml.force_close_tag()?;
		}
		response.xml.force_close_tag()
	}

	fn id(&self) -> Option<&ViewId> {
		Some(&self.id)
	}
}
