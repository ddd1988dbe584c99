use crate::error::SyncError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const CONFIG_PATH: &str = "./config.json";

/// Credentials for the catalog API and the location of the table store.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub client_id: String,
	pub client_secret: String,
	pub token_url: String,

	/// Only needed by the program that writes the table.
	#[serde(default)]
	pub region: String,

	#[serde(default)]
	pub endpoint: String,
}

impl Config {
	/// Load configuration from a JSON file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SyncError> {
		let path = path.as_ref();
		let mut file = File::open(path).map_err(|e| {
			SyncError::Config(format!("Failed to open {}: {}", path.display(), e))
		})?;
		let mut contents = String::new();
		file.read_to_string(&mut contents).map_err(|e| {
			SyncError::Config(format!("Failed to read {}: {}", path.display(), e))
		})?;
		Self::from_json(&contents)
	}

	pub fn from_json(json: &str) -> Result<Self, SyncError> {
		serde_json::from_str(json)
			.map_err(|e| SyncError::Config(format!("Failed to decode config: {}", e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_all_fields() {
		let config = Config::from_json(
			r#"{
				"client_id": "id",
				"client_secret": "secret",
				"token_url": "https://accounts.example.com/api/token",
				"region": "ap-northeast-1",
				"endpoint": "http://localhost:8000"
			}"#,
		)
		.unwrap();
		assert_eq!(config.client_id, "id");
		assert_eq!(config.client_secret, "secret");
		assert_eq!(config.token_url, "https://accounts.example.com/api/token");
		assert_eq!(config.region, "ap-northeast-1");
		assert_eq!(config.endpoint, "http://localhost:8000");
	}

	#[test]
	fn storage_fields_are_optional() {
		let config = Config::from_json(
			r#"{"client_id": "id", "client_secret": "s", "token_url": "https://t", "extra": 1}"#,
		)
		.unwrap();
		assert!(config.region.is_empty());
		assert!(config.endpoint.is_empty());
	}

	#[test]
	fn missing_credentials_fail() {
		let err = Config::from_json(r#"{"client_id": "id"}"#).unwrap_err();
		assert!(matches!(err, SyncError::Config(_)));
	}

	#[test]
	fn missing_file_fails() {
		let err = Config::from_file("./does-not-exist/config.json").unwrap_err();
		assert!(matches!(err, SyncError::Config(_)));
	}
}
