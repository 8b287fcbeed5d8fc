//! Models as ordered field sets

use crate::error::{ModelError, ModelResult};
use crate::meta::FieldMeta;
use crate::value::FieldValue;
use indexmap::IndexMap;

/// A model whose fields can be listed and written by selector
///
/// Forms render [`fields`](Model::fields) in order and write bound values
/// back through [`set_field`](Model::set_field).
pub trait Model {
	/// Returns descriptors of all editable fields, in display order
	fn fields(&self) -> Vec<FieldMeta>;

	/// Stores `value` in the field addressed by `selector`
	fn set_field(&mut self, selector: &str, value: FieldValue) -> ModelResult<()>;
}

/// A dynamic model backed by an ordered map of field descriptors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: IndexMap<String, FieldMeta>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a field, replacing any field with the same selector
	pub fn push(&mut self, field: FieldMeta) {
		self.fields.insert(field.selector.clone(), field);
	}

	/// Builder form of [`push`](Record::push)
	///
	/// # Examples
	///
	/// ```
	/// use tessera_model::{FieldMeta, FieldValue, Record};
	///
	/// let record = Record::new()
	///     .with_field(FieldMeta::new("name", FieldValue::String("Ada".to_string())))
	///     .with_field(FieldMeta::new("admin", FieldValue::Bool(false)));
	/// assert_eq!(record.len(), 2);
	/// assert_eq!(record.get("name").unwrap().value.display(), "Ada");
	/// ```
	pub fn with_field(mut self, field: FieldMeta) -> Self {
		self.push(field);
		self
	}

	pub fn get(&self, selector: &str) -> Option<&FieldMeta> {
		self.fields.get(selector)
	}

	pub fn value(&self, selector: &str) -> Option<&FieldValue> {
		self.get(selector).map(|field| &field.value)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl Model for Record {
	fn fields(&self) -> Vec<FieldMeta> {
		self.fields.values().cloned().collect()
	}

	fn set_field(&mut self, selector: &str, value: FieldValue) -> ModelResult<()> {
		let field = self
			.fields
			.get_mut(selector)
			.ok_or_else(|| ModelError::UnknownField(selector.to_string()))?;
		if field.value.kind() != value.kind() {
			return Err(ModelError::KindMismatch {
				selector: selector.to_string(),
				expected: value.kind(),
				found: field.value.kind(),
			});
		}
		field.value = value;
		Ok(())
	}
}
