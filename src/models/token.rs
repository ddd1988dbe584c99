use serde::Deserialize;

/// Body of a successful client-credentials exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
	pub access_token: String,
	#[serde(default)]
	pub token_type: String,
	#[serde(default)]
	pub expires_in: u64,
}
