use crate::error::ViewResult;
use crate::id::ViewId;
use crate::response::Response;
use crate::view::View;

/// Generic inline container
///
/// # Examples
///
/// ```
/// use tessera_views::{Span, Text, render_to_string};
///
/// let span = Span::new().with_id("s1").with_class("note").with_content(Text::new("hi"));
/// assert_eq!(render_to_string(&span).unwrap(), r#"<span id="s1" class="note">hi</span>"#);
/// ```
#[derive(Debug, Default)]
pub struct Span {
	pub id: ViewId,
	pub class: String,
	pub content: Option<Box<dyn View>>,
}

impl Span {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(mut self, id: impl Into<ViewId>) -> Self {
		self.id = id.into();
		self
	}

	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}

	pub fn with_content(mut self, content: impl View + 'static) -> Self {
		self.content = Some(Box::new(content));
		self
	}
}

impl View for Span {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response
			.xml
			.open_tag("span")
			.attrib("id", self.id.as_str())
			.attrib_if_not_default("class", self.class.as_str());
		let depth = response.xml.depth();
		let result = match &self.content {
			Some(content) => content.render(response),
			None => Ok(()),
		};
		response.xml.close_to(depth)?;
		// the end tag is written even when the child failed
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

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ViewError;
	use crate::view::{Html, downcast_ref, render_to_string};
	use rstest::rstest;

	#[derive(Debug)]
	struct Failing;

	impl View for Failing {
		fn render(&self, response: &mut Response) -> ViewResult<()> {
			response.xml.raw("partial");
			Err(ViewError::Render("child failed".to_string()))
		}
	}

	/// Fails while its own element is still open
	#[derive(Debug)]
	struct FailingInsideElement;

	impl View for FailingInsideElement {
		fn render(&self, response: &mut Response) -> ViewResult<()> {
			response.xml.open_tag("b").content("half");
			Err(ViewError::Render("inner failed".to_string()))
		}
	}

	#[rstest]
	fn test_span_with_class() {
		let span = Span::new().with_id("s1").with_class("c");
		insta::assert_snapshot!(
			render_to_string(&span).unwrap(),
			@r#"<span id="s1" class="c"></span>"#
		);
	}

	#[rstest]
	fn test_span_without_class_omits_attribute() {
		let span = Span::new().with_id("s2");
		insta::assert_snapshot!(render_to_string(&span).unwrap(), @r#"<span id="s2"></span>"#);
	}

	#[rstest]
	fn test_span_generated_id_is_rendered() {
		let span = Span::new();
		let html = render_to_string(&span).unwrap();
		assert_eq!(html, format!(r#"<span id="{}"></span>"#, span.id));
	}

	#[rstest]
	fn test_span_renders_child_between_tags() {
		let span = Span::new().with_id("s3").with_content(Html::new("<b>x</b>"));
		assert_eq!(render_to_string(&span).unwrap(), r#"<span id="s3"><b>x</b></span>"#);
	}

	#[rstest]
	fn test_span_child_error_propagates_and_stream_stays_balanced() {
		let span = Span::new().with_id("s4").with_content(Failing);
		let mut response = Response::new();

		let err = span.render(&mut response).unwrap_err();

		assert!(matches!(err, ViewError::Render(msg) if msg == "child failed"));
		assert_eq!(response.xml.depth(), 0);
		assert_eq!(response.finish().unwrap(), r#"<span id="s4">partial</span>"#);
	}

	#[rstest]
	fn test_span_closes_elements_left_open_by_failing_child() {
		let span = Span::new().with_id("s5").with_content(FailingInsideElement);
		let mut response = Response::new();

		let err = span.render(&mut response).unwrap_err();

		assert!(matches!(err, ViewError::Render(msg) if msg == "inner failed"));
		assert_eq!(response.finish().unwrap(), r#"<span id="s5"><b>half</b></span>"#);
	}

	#[rstest]
	fn test_span_iterates_single_child() {
		let span = Span::new().with_content(Html::new("x"));
		let mut calls = 0;
		span.iterate_children(&mut |parent, child| {
			calls += 1;
			assert!(downcast_ref::<Span>(parent).is_some());
			assert_eq!(downcast_ref::<Html>(child).unwrap().0, "x");
		});
		assert_eq!(calls, 1);
	}

	#[rstest]
	fn test_span_without_child_never_calls_back() {
		let mut calls = 0;
		Span::new().iterate_children(&mut |_, _| calls += 1);
		assert_eq!(calls, 0);
	}
}
