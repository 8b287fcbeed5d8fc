//! Form binding for Tessera
//!
//! Turns typed model fields into HTML inputs and submitted form data back
//! into model values.
//!
//! - [`FormFieldController`]: one strategy per [`FieldKind`](tessera_model::FieldKind)
//! - [`FormFieldControllers`]: the registry dispatching fields to controllers
//! - [`Form`]: the presentation policy (classes, sizes, labels, placeholders)
//! - [`FormRequest`] / [`FormData`]: access to submitted values and uploads
//!
//! ## Example
//!
//! ```
//! use tessera_forms::{Form, FormData, FormFieldControllers};
//! use tessera_model::{FieldMeta, FieldValue, Record};
//!
//! let mut record = Record::new()
//!     .with_field(FieldMeta::new("name", FieldValue::String(String::new())).with_tags("model", "required"))
//!     .with_field(FieldMeta::new("age", FieldValue::Int(0)));
//!
//! let form = Form::new();
//! let controllers = FormFieldControllers::global();
//!
//! let inputs = form.new_inputs(&record, controllers, true).unwrap();
//! assert_eq!(inputs.len(), 2);
//!
//! let request = FormData::from_urlencoded(b"name=Ada&age=36").unwrap();
//! let report = form.bind_model(&mut record, controllers, &request).unwrap();
//! assert!(report.is_valid());
//! assert_eq!(record.value("age"), Some(&FieldValue::Int(36)));
//! ```

pub mod controller;
pub mod controllers;
pub mod error;
pub mod form;
pub mod request;

pub use controller::{FormFieldController, FormFieldControllers};
pub use error::{FormError, FormResult, UploadError};
pub use form::{BindReport, Form, add_label_for, add_standard_label};
pub use request::{FilePart, FormData, FormRequest, UploadedFile};
