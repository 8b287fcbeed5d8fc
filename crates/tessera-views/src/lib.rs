//! Server-side HTML views for Tessera
//!
//! A page is a tree of [`View`]s rendered into a [`Response`]. Each view
//! writes one balanced element through the response's [`XmlWriter`] and
//! exposes its children through [`View::iterate_children`].
//!
//! ## Example
//!
//! ```
//! use tessera_views::{Label, Span, TextField, Views, render_to_string};
//!
//! let input = TextField::new("name", "Ada").with_id("name-input");
//! let page = Span::new()
//!     .with_id("row")
//!     .with_class("field")
//!     .with_content(Views::new().with(Label::new().with_for(input.id.clone())).with(input));
//!
//! let html = render_to_string(&page).unwrap();
//! assert!(html.starts_with(r#"<span id="row" class="field"><label"#));
//! assert!(html.ends_with(r#"<input id="name-input" type="text" name="name" value="Ada" /></span>"#));
//! ```

pub mod error;
pub mod id;
pub mod inputs;
pub mod label;
pub mod response;
pub mod select;
pub mod span;
pub mod view;
pub mod xml;

pub use error::{ViewError, ViewResult};
pub use id::ViewId;
pub use inputs::{Checkbox, FileInput, TextArea, TextField, TextFieldType};
pub use label::Label;
pub use response::Response;
pub use select::{IndexedStringsSelectModel, Select, SelectModel, StringsSelectModel};
pub use span::Span;
pub use view::{AsAny, Html, Text, View, Views, downcast_ref, render_to_string, walk};
pub use xml::XmlWriter;
