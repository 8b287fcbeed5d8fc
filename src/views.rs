//! Views module.
//!
//! This module provides the HTML view tree: inputs, labels, selects and
//! the XML writer they render through.
//!
//! # Examples
//!
//! ```rust
//! use tessera::views::{Span, Text, render_to_string};
//!
//! let span = Span::new().with_id("greeting").with_content(Text::new("Hi & bye"));
//! assert_eq!(render_to_string(&span).unwrap(), r#"<span id="greeting">Hi &amp; bye</span>"#);
//! ```

pub use tessera_views::*;
