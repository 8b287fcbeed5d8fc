//! Settings management

pub mod builder;
pub mod forms;
pub mod prelude;
pub mod sources;

use sources::SourceError;

/// Errors raised while building settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Source error in {source_name}: {error}")]
	Source {
		source_name: String,
		#[source]
		error: SourceError,
	},

	#[error("Missing setting: {0}")]
	Missing(String),

	#[error("Invalid value for {key}: {error}")]
	Invalid {
		key: String,
		#[source]
		error: serde_json::Error,
	},

	#[error("Deserialization error: {0}")]
	Deserialize(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
