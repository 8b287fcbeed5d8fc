use tessera_model::{FieldDescriptor, FieldKind, ModelError};
use tessera_views::ViewError;

/// Failures fetching submitted data from a request
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
	#[error("No file uploaded for form field {0}")]
	MissingFile(String),

	#[error("Multipart error: {0}")]
	Multipart(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Malformed urlencoded body: {0}")]
	Urlencoded(#[from] serde_urlencoded::de::Error),

	#[error("Unsupported content type: {0}")]
	UnsupportedContentType(String),
}

impl From<multer::Error> for UploadError {
	fn from(error: multer::Error) -> Self {
		UploadError::Multipart(error.to_string())
	}
}

/// Errors raised while rendering or binding form fields
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Type {} of form field {} not supported", .field.type_name, .field.selector)]
	UnsupportedType { field: FieldDescriptor },

	/// Request data could not be read; passed through as-is
	#[error(transparent)]
	Upload(#[from] UploadError),

	#[error("Invalid value for form field {selector}: {message}")]
	InvalidValue { selector: String, message: String },

	#[error("A form field controller for {0} values is already registered")]
	DuplicateController(FieldKind),

	#[error(transparent)]
	View(#[from] ViewError),

	#[error(transparent)]
	Model(#[from] ModelError),
}

pub type FormResult<T> = Result<T, FormError>;
