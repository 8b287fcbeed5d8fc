use crate::error::ViewResult;
use crate::id::ViewId;
use crate::response::Response;
use crate::view::View;

/// `<label>` pointing at an input
#[derive(Debug, Default)]
pub struct Label {
	pub id: ViewId,
	pub class: String,
	/// Id of the labelled input
	pub for_input: Option<ViewId>,
	pub content: Option<Box<dyn View>>,
}

impl Label {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	pub fn with_for(mut self, input: ViewId) -> Self {
		self.for_input = Some(input);
		self
	}

	pub fn with_content(mut self, content: impl View + 'static) -> Self {
		self.content = Some(Box::new(content));
		self
	}
}

impl View for Label {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("label")
			.attrib("id", self.id.as_str())
			.attrib_if_not_default("class", self.class.as_str());
		if let Some(input) = &self.for_input {
			response.xml.attrib("for", input.as_str());
		}
		let depth = response.xml.depth();
		let result = match &self.content {
			Some(content) => content.render(response),
			None => Ok(()),
		};
		response.xml.close_to(depth)?;
		response.xml.force_close_tag()?;
		result
	}

	fn iterate_children(&self, callback: &mut dyn FnMut(&dyn View, &dyn View)) {
		if let Some(content) = &self.content {
			callback(self, content.as_ref());
		}
	}

	fn id(&self) -> Option<&ViewId> {
		Some(&self.id)
	}
}
