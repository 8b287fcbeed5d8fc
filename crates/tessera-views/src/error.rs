#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
	#[error("Render error: {0}")]
	Render(String),
	#[error("Format error: {0}")]
	Fmt(#[from] std::fmt::Error),
	#[error("Unbalanced tag: close without matching open, or element left open")]
	UnbalancedTag,
}

pub type ViewResult<T> = Result<T, ViewError>;
