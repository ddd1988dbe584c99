use reqwest::StatusCode;

/// Every way a run can fail. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("status code was not 200 OK.\nURL: {url}\nCode: {status}")]
	UpstreamStatus { url: String, status: StatusCode },

	#[error("could not parse response: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("invalid start URL: {0:?}")]
	InvalidUrl(String),

	#[error("config error: {0}")]
	Config(String),

	#[error("storage error: {0}")]
	Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SyncError {
	pub fn storage<E>(err: E) -> Self
	where
		E: Into<Box<dyn std::error::Error + Send + Sync>>,
	{
		SyncError::Storage(err.into())
	}
}
