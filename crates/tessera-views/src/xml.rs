//! Tag writer
//!
//! [`XmlWriter`] emits balanced markup into a string buffer. A start tag stays
//! open for attributes until content is written or the element is closed, so
//! empty elements can be written self-closing.

use crate::error::{ViewError, ViewResult};

/// Escape HTML special characters for text and attribute values
///
/// # Examples
///
/// ```
/// use tessera_views::xml::html_escape;
///
/// assert_eq!(html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;");
/// ```
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Attribute values that have a zero value
///
/// [`XmlWriter::attrib_if_not_default`] skips attributes equal to their
/// type's zero value.
pub trait AttribValue {
	fn is_default(&self) -> bool;
	fn to_attrib(&self) -> String;
}

impl AttribValue for &str {
	fn is_default(&self) -> bool {
		self.is_empty()
	}

	fn to_attrib(&self) -> String {
		(*self).to_string()
	}
}

impl AttribValue for String {
	fn is_default(&self) -> bool {
		self.is_empty()
	}

	fn to_attrib(&self) -> String {
		self.clone()
	}
}

impl AttribValue for &String {
	fn is_default(&self) -> bool {
		self.is_empty()
	}

	fn to_attrib(&self) -> String {
		(*self).clone()
	}
}

macro_rules! impl_attrib_value_for_int {
	($($t:ty),*) => {
		$(
			impl AttribValue for $t {
				fn is_default(&self) -> bool {
					*self == 0
				}

				fn to_attrib(&self) -> String {
					self.to_string()
				}
			}
		)*
	};
}

impl_attrib_value_for_int!(usize, u32, i32, i64);

#[derive(Debug, Default)]
pub struct XmlWriter {
	buf: String,
	stack: Vec<&'static str>,
	start_tag_open: bool,
}

impl XmlWriter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Begin element `tag`; attributes may follow until content is written
	pub fn open_tag(&mut self, tag: &'static str) -> &mut Self {
		self.finish_start_tag();
		self.buf.push('<');
		self.buf.push_str(tag);
		self.stack.push(tag);
		self.start_tag_open = true;
		self
	}

	/// Write `name="value"` on the open start tag
	///
	/// Ignored with a warning when no start tag is open.
	pub fn attrib(&mut self, name: &str, value: impl AttribValue) -> &mut Self {
		if !self.start_tag_open {
			tracing::warn!(attribute = name, "attribute written outside of a start tag");
			return self;
		}
		self.buf.push(' ');
		self.buf.push_str(name);
		self.buf.push_str("=\"");
		self.buf.push_str(&html_escape(&value.to_attrib()));
		self.buf.push('"');
		self
	}

	/// Write the attribute only when `value` is not its zero value
	///
	/// # Examples
	///
	/// ```
	/// use tessera_views::xml::XmlWriter;
	///
	/// let mut xml = XmlWriter::new();
	/// xml.open_tag("td").attrib_if_not_default("class", "").attrib_if_not_default("colspan", 2usize);
	/// xml.force_close_tag().unwrap();
	/// assert_eq!(xml.finish().unwrap(), r#"<td colspan="2"></td>"#);
	/// ```
	pub fn attrib_if_not_default(&mut self, name: &str, value: impl AttribValue) -> &mut Self {
		if value.is_default() {
			return self;
		}
		self.attrib(name, value)
	}

	/// Write a bare boolean attribute such as `disabled` when `set` is true
	pub fn attrib_flag(&mut self, name: &str, set: bool) -> &mut Self {
		if set && self.start_tag_open {
			self.buf.push(' ');
			self.buf.push_str(name);
		}
		self
	}

	/// Write escaped text inside the current element
	pub fn content(&mut self, text: &str) -> &mut Self {
		self.finish_start_tag();
		self.buf.push_str(&html_escape(text));
		self
	}

	/// Write markup as-is
	pub fn raw(&mut self, html: &str) -> &mut Self {
		self.finish_start_tag();
		self.buf.push_str(html);
		self
	}

	/// Close the current element, self-closing it when it has no content
	pub fn close_tag(&mut self) -> ViewResult<()> {
		let tag = self.stack.pop().ok_or(ViewError::UnbalancedTag)?;
		if self.start_tag_open {
			self.buf.push_str(" />");
			self.start_tag_open = false;
		} else {
			self.write_end_tag(tag);
		}
		Ok(())
	}

	/// Close the current element with an explicit end tag
	pub fn force_close_tag(&mut self) -> ViewResult<()> {
		let tag = self.stack.pop().ok_or(ViewError::UnbalancedTag)?;
		self.finish_start_tag();
		self.write_end_tag(tag);
		Ok(())
	}

	/// Close open elements with end tags until only `depth` remain
	///
	/// # Examples
	///
	/// ```
	/// use tessera_views::xml::XmlWriter;
	///
	/// let mut xml = XmlWriter::new();
	/// xml.open_tag("div");
	/// let depth = xml.depth();
	/// xml.open_tag("p").content("a");
	/// xml.open_tag("b");
	/// xml.close_to(depth).unwrap();
	/// xml.force_close_tag().unwrap();
	/// assert_eq!(xml.finish().unwrap(), "<div><p>a<b></b></p></div>");
	/// ```
	pub fn close_to(&mut self, depth: usize) -> ViewResult<()> {
		while self.stack.len() > depth {
			self.force_close_tag()?;
		}
		Ok(())
	}

	/// Number of elements still open
	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	pub fn as_str(&self) -> &str {
		&self.buf
	}

	/// Returns the written markup
	///
	/// # Errors
	///
	/// Returns [`ViewError::UnbalancedTag`] when elements are still open.
	pub fn finish(self) -> ViewResult<String> {
		if !self.stack.is_empty() {
			return Err(ViewError::UnbalancedTag);
		}
		Ok(self.buf)
	}

	fn finish_start_tag(&mut self) {
		if self.start_tag_open {
			self.buf.push('>');
			self.start_tag_open = false;
		}
	}

	fn write_end_tag(&mut self, tag: &str) {
		self.buf.push_str("</");
		self.buf.push_str(tag);
		self.buf.push('>');
	}
}
