use super::labelled;
use crate::controller::{FormFieldController, unsupported};
use crate::error::{FormResult, UploadError};
use crate::form::Form;
use crate::request::{FormRequest, UploadedFile};
use tessera_model::{FieldKind, FieldMeta, File, FieldValue};
use tessera_views::{FileInput, View};

fn file_input(field: &FieldMeta, form: &Form) -> FileInput {
	FileInput {
		class: form.field_input_class(field),
		disabled: form.is_field_disabled(field),
		..FileInput::new(&field.selector)
	}
}

/// Fetch the upload for `field` and read it into memory
///
/// The upload is consumed by the read, so its stream is closed before
/// returning on success and on failure.
fn read_upload(field: &FieldMeta, request: &dyn FormRequest) -> FormResult<(String, Vec<u8>)> {
	let upload: UploadedFile = request.form_file(&field.selector)?;
	let file_name = upload.file_name.clone();
	let data = upload.read_to_end().map_err(UploadError::from)?;
	tracing::debug!(
		selector = %field.selector,
		file_name = %file_name,
		size = data.len(),
		"read uploaded file"
	);
	Ok((file_name, data))
}

/// File upload storing name and contents
#[derive(Debug, Clone, Copy, Default)]
pub struct FileController;

impl FormFieldController for FileController {
	fn kind(&self) -> FieldKind {
		FieldKind::File
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		if field.kind() != FieldKind::File {
			return Err(unsupported(field));
		}
		Ok(labelled(with_label, form, Box::new(file_input(field, form)), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::File {
			return Err(unsupported(field));
		}
		let (file_name, data) = read_upload(field, request)?;
		Ok(FieldValue::File(File::new(file_name, data)))
	}
}

/// File upload storing only the contents
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobController;

impl FormFieldController for BlobController {
	fn kind(&self) -> FieldKind {
		FieldKind::Blob
	}

	fn new_input(
		&self,
		with_label: bool,
		field: &FieldMeta,
		form: &Form,
	) -> FormResult<Box<dyn View>> {
		if field.kind() != FieldKind::Blob {
			return Err(unsupported(field));
		}
		Ok(labelled(with_label, form, Box::new(file_input(field, form)), field))
	}

	fn bind(
		&self,
		field: &FieldMeta,
		_form: &Form,
		request: &dyn FormRequest,
	) -> FormResult<FieldValue> {
		if field.kind() != FieldKind::Blob {
			return Err(unsupported(field));
		}
		let (_, data) = read_upload(field, request)?;
		Ok(FieldValue::Blob(data))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FormError;
	use crate::request::FormData;
	use rstest::rstest;
	use std::io::{self, Read};
	use std::sync::Arc;
	use std::sync::atomic::{AtomicBool, Ordering};
	use tessera_views::render_to_string;

	/// Reader that records when it is dropped and optionally fails
	struct TrackedReader {
		data: io::Cursor<Vec<u8>>,
		fail: bool,
		closed: Arc<AtomicBool>,
	}

	impl Read for TrackedReader {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			if self.fail {
				return Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away"));
			}
			self.data.read(buf)
		}
	}

	impl Drop for TrackedReader {
		fn drop(&mut self) {
			self.closed.store(true, Ordering::SeqCst);
		}
	}

	struct TrackedRequest {
		file_name: String,
		data: Vec<u8>,
		fail: bool,
		closed: Arc<AtomicBool>,
	}

	impl TrackedRequest {
		fn new(file_name: &str, data: Vec<u8>, fail: bool) -> Self {
			Self {
				file_name: file_name.to_string(),
				data,
				fail,
				closed: Arc::new(AtomicBool::new(false)),
			}
		}
	}

	impl FormRequest for TrackedRequest {
		fn form_value(&self, _key: &str) -> Option<&str> {
			None
		}

		fn form_file(&self, _key: &str) -> Result<UploadedFile, UploadError> {
			Ok(UploadedFile::new(
				self.file_name.clone(),
				TrackedReader {
					data: io::Cursor::new(self.data.clone()),
					fail: self.fail,
					closed: Arc::clone(&self.closed),
				},
			))
		}
	}

	fn avatar() -> FieldMeta {
		FieldMeta::new("avatar", FieldValue::File(File::default()))
	}

	#[rstest]
	#[case(0)]
	#[case(1)]
	#[case(64 * 1024)]
	fn test_file_upload_stores_name_and_data(#[case] size: usize) {
		let request = TrackedRequest::new("x.png", vec![7u8; size], false);

		let value = FileController.bind(&avatar(), &Form::new(), &request).unwrap();

		let FieldValue::File(file) = value else {
			panic!("expected a file value");
		};
		assert_eq!(file.name, "x.png");
		assert_eq!(file.data.len(), size);
		assert!(request.closed.load(Ordering::SeqCst));
	}

	#[rstest]
	fn test_read_failure_is_returned_and_stream_closed() {
		let request = TrackedRequest::new("x.png", vec![1, 2, 3], true);

		let err = FileController.bind(&avatar(), &Form::new(), &request).unwrap_err();

		assert!(matches!(
			err,
			FormError::Upload(UploadError::Io(ref e)) if e.kind() == io::ErrorKind::ConnectionReset
		));
		assert_eq!(err.to_string(), "IO error: client went away");
		assert!(request.closed.load(Ordering::SeqCst));
	}

	#[rstest]
	fn test_missing_upload_passes_through() {
		let err = BlobController
			.bind(
				&FieldMeta::new("doc", FieldValue::Blob(Vec::new())),
				&Form::new(),
				&FormData::new(),
			)
			.unwrap_err();
		assert!(matches!(err, FormError::Upload(UploadError::MissingFile(key)) if key == "doc"));
	}

	#[tokio::test]
	async fn test_blank_file_input_keeps_stored_upload() {
		let body = "--B\r\n\
			Content-Disposition: form-data; name=\"avatar\"; filename=\"\"\r\n\
			\r\n\
			\r\n\
			--B--\r\n";
		let request = FormData::from_body("multipart/form-data; boundary=B", body.into())
			.await
			.unwrap();
		let mut field =
			FieldMeta::new("avatar", FieldValue::File(File::new("old.png", vec![1, 2, 3])));

		let err = FileController.set_value(&mut field, &Form::new(), &request).unwrap_err();

		assert!(matches!(err, FormError::Upload(UploadError::MissingFile(key)) if key == "avatar"));
		assert_eq!(field.value, FieldValue::File(File::new("old.png", vec![1, 2, 3])));
	}

	#[rstest]
	fn test_blob_stores_only_data() {
		let request = FormData::new().with_file("doc", "report.pdf", &b"%PDF"[..]);
		let field = FieldMeta::new("doc", FieldValue::Blob(Vec::new()));
		let value = BlobController.bind(&field, &Form::new(), &request).unwrap();
		assert_eq!(value, FieldValue::Blob(b"%PDF".to_vec()));
	}

	#[rstest]
	fn test_file_input_rendering() {
		let view = FileController.new_input(false, &avatar(), &Form::new()).unwrap();
		let html = render_to_string(view.as_ref()).unwrap();
		assert!(html.ends_with(r#"type="file" name="avatar" />"#), "{}", html);
	}
}
