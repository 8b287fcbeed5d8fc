//! View trait and basic views

use crate::error::ViewResult;
use crate::id::ViewId;
use crate::response::Response;
use std::any::Any;
use std::fmt;

/// Type-erased access to a concrete view
pub trait AsAny {
	fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// A composable unit of HTML output
///
/// Views are built per request, rendered once and dropped. Rendering writes
/// a balanced element to the response. Child views are exposed through
/// [`iterate_children`](View::iterate_children) so tree walkers do not need
/// to know a node's arity.
pub trait View: AsAny + fmt::Debug + Send + Sync {
	/// Write this view's markup
	fn render(&self, response: &mut Response) -> ViewResult<()>;

	/// Call `callback(self, child)` for each direct child
	fn iterate_children(&self, _callback: &mut dyn FnMut(&dyn View, &dyn View)) {}

	/// Returns the id rendered for this view, if it has one
	fn id(&self) -> Option<&ViewId> {
		None
	}
}

/// Downcast a view to its concrete type
///
/// # Examples
///
/// ```
/// use tessera_views::{Span, View, downcast_ref};
///
/// let view: Box<dyn View> = Box::new(Span::new().with_class("c"));
/// let span = downcast_ref::<Span>(view.as_ref()).unwrap();
/// assert_eq!(span.class, "c");
/// ```
pub fn downcast_ref<T: View + 'static>(view: &dyn View) -> Option<&T> {
	view.as_any().downcast_ref::<T>()
}

/// Render `view` into a fresh response and return the markup
pub fn render_to_string(view: &dyn View) -> ViewResult<String> {
	let mut response = Response::new();
	view.render(&mut response)?;
	response.finish()
}

/// Depth-first walk over a view tree
///
/// `visitor` receives each view and its depth, the root at depth 0.
///
/// # Examples
///
/// ```
/// use tessera_views::{Html, Span, Views, walk};
///
/// let tree = Views::new()
///     .with(Html::new("a"))
///     .with(Span::new().with_content(Html::new("b")));
/// let mut depths = Vec::new();
/// walk(&tree, &mut |_, depth| depths.push(depth));
/// assert_eq!(depths, vec![0, 1, 1, 2]);
/// ```
pub fn walk(view: &dyn View, visitor: &mut dyn FnMut(&dyn View, usize)) {
	walk_at(view, 0, visitor);
}

fn walk_at(view: &dyn View, depth: usize, visitor: &mut dyn FnMut(&dyn View, usize)) {
	tracing::trace!(depth, view = ?view.id(), "visiting view");
	visitor(view, depth);
	view.iterate_children(&mut |_, child| walk_at(child, depth + 1, &mut *visitor));
}

/// An ordered list of sibling views rendered one after another
#[derive(Debug, Default)]
pub struct Views(pub Vec<Box<dyn View>>);

impl Views {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, view: impl View + 'static) -> Self {
		self.0.push(Box::new(view));
		self
	}

	pub fn push(&mut self, view: Box<dyn View>) {
		self.0.push(view);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &dyn View> {
		self.0.iter().map(|view| view.as_ref())
	}
}

impl From<Vec<Box<dyn View>>> for Views {
	fn from(views: Vec<Box<dyn View>>) -> Self {
		Self(views)
	}
}

impl View for Views {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		for view in &self.0 {
			view.render(response)?;
		}
		Ok(())
	}

	fn iterate_children(&self, callback: &mut dyn FnMut(&dyn View, &dyn View)) {
		for view in &self.0 {
			callback(self, view.as_ref());
		}
	}
}

/// Markup written without escaping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(pub String);

impl Html {
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}
}

impl View for Html {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response.xml.raw(&self.0);
		Ok(())
	}
}

/// Text written with HTML escaping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}
}

impl View for Text {
	fn render(&self, response: &mut Response) -> ViewResult<()> {
		response.xml.content(&self.0);
		Ok(())
	}
}
