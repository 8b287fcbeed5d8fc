use crate::error::ViewResult;
use crate::xml::XmlWriter;

/// Output target of a render pass
///
/// Views write their markup through [`Response::xml`].
#[derive(Debug, Default)]
pub struct Response {
	pub xml: XmlWriter,
}

impl Response {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the rendered markup, failing if an element was left open
	pub fn finish(self) -> ViewResult<String> {
		self.xml.finish()
	}
}
