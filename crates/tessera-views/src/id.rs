use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier rendered as a view's `id` attribute
///
/// [`ViewId::new`] hands out process-unique ids (`v1`, `v2`, ...). Explicit ids
/// can be set with [`From`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewId(String);

impl ViewId {
	/// Generate a fresh id
	///
	/// # Examples
	///
	/// ```
	/// use tessera_views::ViewId;
	///
	/// let a = ViewId::new();
	/// let b = ViewId::new();
	/// assert_ne!(a, b);
	/// assert!(a.as_str().starts_with('v'));
	/// ```
	pub fn new() -> Self {
		let n = NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed);
		Self(format!("v{}", n))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for ViewId {
	fn default() -> Self {
		Self::new()
	}
}

impl From<&str> for ViewId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for ViewId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
