//! Submitted form data
//!
//! Controllers read submissions through [`FormRequest`]. [`FormData`] is the
//! in-memory implementation built from a urlencoded or multipart body.

use crate::error::UploadError;
use bytes::Bytes;
use futures_util::{future::ready, stream::once};
use std::collections::HashMap;
use std::fmt;
use std::io::{Cursor, Read};

/// Access to the values and files of a form submission
pub trait FormRequest {
	/// Returns the first value submitted under `key`
	fn form_value(&self, key: &str) -> Option<&str>;

	/// Opens the file uploaded under `key`
	fn form_file(&self, key: &str) -> Result<UploadedFile, UploadError>;
}

/// An uploaded file opened for reading
///
/// The underlying stream is released when the value is dropped.
pub struct UploadedFile {
	pub file_name: String,
	pub content_type: Option<String>,
	reader: Box<dyn Read + Send>,
}

impl UploadedFile {
	pub fn new(file_name: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
		Self {
			file_name: file_name.into(),
			content_type: None,
			reader: Box::new(reader),
		}
	}

	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	/// Read the whole payload, consuming the file
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::UploadedFile;
	///
	/// let file = UploadedFile::new("x.png", &b"\x89PNG"[..]);
	/// assert_eq!(file.read_to_end().unwrap(), b"\x89PNG");
	/// ```
	pub fn read_to_end(mut self) -> std::io::Result<Vec<u8>> {
		let mut data = Vec::new();
		self.reader.read_to_end(&mut data)?;
		Ok(data)
	}
}

impl fmt::Debug for UploadedFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UploadedFile")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.finish_non_exhaustive()
	}
}

/// A file part held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
	pub file_name: String,
	pub content_type: Option<String>,
	pub data: Bytes,
}

/// In-memory form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
	values: HashMap<String, String>,
	files: HashMap<String, FilePart>,
}

impl FormData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a value; the first value for a key is kept
	pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert_value(key.into(), value.into());
		self
	}

	pub fn with_file(
		mut self,
		key: impl Into<String>,
		file_name: impl Into<String>,
		data: impl Into<Bytes>,
	) -> Self {
		self.files.insert(
			key.into(),
			FilePart {
				file_name: file_name.into(),
				content_type: None,
				data: data.into(),
			},
		);
		self
	}

	fn insert_value(&mut self, key: String, value: String) {
		self.values.entry(key).or_insert(value);
	}

	/// Parse an `application/x-www-form-urlencoded` body
	///
	/// # Examples
	///
	/// ```
	/// use tessera_forms::{FormData, FormRequest};
	///
	/// let data = FormData::from_urlencoded(b"user.name=Ada+L&tags_0=on").unwrap();
	/// assert_eq!(data.form_value("user.name"), Some("Ada L"));
	/// assert_eq!(data.form_value("tags_1"), None);
	/// ```
	pub fn from_urlencoded(body: &[u8]) -> Result<Self, UploadError> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
		let mut data = Self::new();
		for (key, value) in pairs {
			data.insert_value(key, value);
		}
		Ok(data)
	}

	/// Parse a request body according to its `Content-Type`
	///
	/// Supports urlencoded and `multipart/form-data` bodies. Multipart parts
	/// carrying a non-empty file name are kept as files, the others as values.
	pub async fn from_body(content_type: &str, body: Bytes) -> Result<Self, UploadError> {
		let mime = content_type
			.split(';')
			.next()
			.unwrap_or_default()
			.trim()
			.to_ascii_lowercase();

		match mime.as_str() {
			"application/x-www-form-urlencoded" => Self::from_urlencoded(&body),
			"multipart/form-data" => Self::from_multipart(content_type, body).await,
			_ => Err(UploadError::UnsupportedContentType(content_type.to_string())),
		}
	}

	async fn from_multipart(content_type: &str, body: Bytes) -> Result<Self, UploadError> {
		let boundary = multer::parse_boundary(content_type)?;
		let stream = once(ready(Ok::<_, std::io::Error>(body)));
		let mut multipart = multer::Multipart::new(stream, boundary);

		let mut data = Self::new();
		while let Some(field) = multipart.next_field().await? {
			let name = field
				.name()
				.ok_or_else(|| UploadError::Multipart("Field name missing".to_string()))?
				.to_string();

			// browsers send an empty file name for a file input left blank
			match field.file_name().filter(|name| !name.is_empty()).map(str::to_string) {
				Some(file_name) => {
					let content_type = field.content_type().map(|mime| mime.to_string());
					let bytes = field.bytes().await?;
					tracing::debug!(
						field = %name,
						file_name = %file_name,
						size = bytes.len(),
						"received file part"
					);
					data.files.insert(
						name,
						FilePart {
							file_name,
							content_type,
							data: bytes,
						},
					);
				}
				None => {
					let text = field.text().await?;
					data.insert_value(name, text);
				}
			}
		}
		Ok(data)
	}

	pub fn file(&self, key: &str) -> Option<&FilePart> {
		self.files.get(key)
	}
}

impl FormRequest for FormData {
	fn form_value(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	fn form_file(&self, key: &str) -> Result<UploadedFile, UploadError> {
		let part = self
			.files
			.get(key)
			.ok_or_else(|| UploadError::MissingFile(key.to_string()))?;
		let file = UploadedFile::new(part.file_name.clone(), Cursor::new(part.data.clone()));
		Ok(match &part.content_type {
			Some(content_type) => file.with_content_type(content_type.clone()),
			None => file,
		})
	}
}
