//! Typed model layer for Tessera
//!
//! This crate describes the application-model side of form binding:
//! - [`FieldValue`]: a sum type over every value kind a form can edit
//! - [`FieldMeta`]: the descriptor of one model field (name, selector, value, tags)
//! - [`Tags`]: declarative struct-tag attributes such as `maxlen` or `cols`
//! - [`Model`] / [`Record`]: a model as an ordered set of fields
//! - [`validate`]: per-kind value validation
//!
//! ## Example
//!
//! ```
//! use tessera_model::{FieldMeta, FieldValue, Model, Record};
//!
//! let mut record = Record::new();
//! record.push(FieldMeta::new("email", FieldValue::Email(String::new())).with_tags("model", "required"));
//! record.set_field("email", FieldValue::Email("ada@example.com".to_string())).unwrap();
//!
//! assert_eq!(record.fields()[0].value.display(), "ada@example.com");
//! ```

pub mod error;
pub mod kind;
pub mod meta;
pub mod record;
pub mod tags;
pub mod validation;
pub mod value;

pub use error::{ModelError, ModelResult};
pub use kind::FieldKind;
pub use meta::{FieldDescriptor, FieldMeta};
pub use record::{Model, Record};
pub use tags::{MODEL_TAG, Tags, VIEW_TAG};
pub use validation::{ValidationError, validate};
pub use value::{DATE_LAYOUT, DATETIME_LAYOUT, DateLayout, DynamicChoice, FieldValue, File};
