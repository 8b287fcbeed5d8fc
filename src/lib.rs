//! # Tessera
//!
//! Render typed models as HTML forms and bind submitted data back into them.
//!
//! Each model field carries a typed value and declarative tag attributes
//! (`maxlen`, `options`, `required`, `size`, ...). A registry of field
//! controllers turns every field into an input view and parses the
//! submission for that field back into a typed value.
//!
//! ## Feature Flags
//!
//! - `minimal` - Model values and views only
//! - `conf` - Layered form settings (defaults, TOML, environment)
//! - `forms` - Field controllers and request binding
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut profile = Record::new()
//!     .with_field(FieldMeta::new("email", FieldValue::Email(String::new())).with_tags("model", "required"))
//!     .with_field(FieldMeta::new("newsletter", FieldValue::Bool(false)));
//!
//! let form = Form::new();
//! let controllers = FormFieldControllers::global();
//!
//! let html = render_to_string(&form.new_inputs(&profile, controllers, true).unwrap()).unwrap();
//! assert!(html.contains(r#"type="email""#));
//!
//! let request = FormData::from_urlencoded(b"email=ada%40example.com&newsletter=true").unwrap();
//! let report = form.bind_model(&mut profile, controllers, &request).unwrap();
//! assert!(report.is_valid());
//! assert_eq!(profile.value("newsletter"), Some(&FieldValue::Bool(true)));
//! ```

pub mod model;
pub mod views;

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "forms")]
pub mod forms;

// Re-export the most used types at the crate root
pub use tessera_model::{FieldKind, FieldMeta, FieldValue, Model, Record};
pub use tessera_views::{View, Views, render_to_string};

#[cfg(feature = "conf")]
pub use tessera_conf::{FormSettings, LabelPosition};

#[cfg(feature = "forms")]
pub use tessera_forms::{
	BindReport, Form, FormData, FormError, FormFieldController, FormFieldControllers,
	FormRequest,
};

/// Prelude module for convenient imports
///
/// Import everything you need with `use tessera::prelude::*;`
pub mod prelude {
	// Model and views - always available
	pub use crate::{FieldKind, FieldMeta, FieldValue, Model, Record, View, Views, render_to_string};
	pub use tessera_model::{DynamicChoice, File, MODEL_TAG, VIEW_TAG, validate};

	// Conf feature
	#[cfg(feature = "conf")]
	pub use crate::{FormSettings, LabelPosition};

	// Forms feature
	#[cfg(feature = "forms")]
	pub use crate::{
		BindReport, Form, FormData, FormError, FormFieldController, FormFieldControllers,
		FormRequest,
	};
}
