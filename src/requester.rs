use crate::config::Config;
use crate::error::{Result, SyncError};
use crate::models::TokenResponse;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

const SHOW_ENDPOINT: &str = "https://api.spotify.com/v1/shows/";

/// Something that can fetch the raw body of a page with the run's token.
#[async_trait]
pub trait PageFetcher {
	async fn fetch(&self, url: &str) -> Result<String>;
}

/// Talks to the catalog API with a bearer token acquired once at
/// construction. The token is never refreshed.
pub struct Requester {
	net: Client,
	token: String,
}

impl Requester {
	pub async fn new(config: &Config) -> Result<Requester> {
		let net = Client::new();
		let token = Requester::get_auth_token(&net, config).await?;
		Ok(Requester {
			net,
			token: token.access_token,
		})
	}

	/// Exchange the configured client credentials for an access token.
	pub async fn get_auth_token(net: &Client, config: &Config) -> Result<TokenResponse> {
		let form = [
			("grant_type", "client_credentials"),
			("client_id", config.client_id.as_str()),
			("client_secret", config.client_secret.as_str()),
		];
		let response = net.post(&config.token_url).form(&form).send().await?;
		let text = Self::check_status(response).await?;
		let token = serde_json::from_str::<TokenResponse>(&text)?;
		log::debug!("Got {} token expiring in {}s", token.token_type, token.expires_in);
		Ok(token)
	}

	pub fn construct_show_url(show_id: &str) -> String {
		let mut string = String::with_capacity(SHOW_ENDPOINT.len() + show_id.len());
		string.push_str(SHOW_ENDPOINT);
		string.push_str(show_id);
		string
	}

	pub async fn get_page(&self, url: &str) -> Result<String> {
		let response = self.net.get(url).bearer_auth(&self.token).send().await?;
		Self::check_status(response).await
	}

	async fn check_status(response: Response) -> Result<String> {
		let status = response.status();
		if status != StatusCode::OK {
			return Err(SyncError::UpstreamStatus {
				url: response.url().to_string(),
				status,
			});
		}
		Ok(response.text().await?)
	}
}

#[async_trait]
impl PageFetcher for Requester {
	async fn fetch(&self, url: &str) -> Result<String> {
		self.get_page(url).await
	}
}

#[async_trait]
impl<'a, T: PageFetcher + Sync + ?Sized> PageFetcher for &'a T {
	async fn fetch(&self, url: &str) -> Result<String> {
		(**self).fetch(url).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn show_url_appends_id() {
		assert_eq!(
			Requester::construct_show_url("4zqDMbg9WSpC5l81gJCfEc"),
			"https://api.spotify.com/v1/shows/4zqDMbg9WSpC5l81gJCfEc"
		);
	}

	#[tokio::test]
	async fn unreachable_token_endpoint_is_transport_error() {
		let config = Config {
			client_id: "id".into(),
			client_secret: "secret".into(),
			token_url: "http://127.0.0.1:1/api/token".into(),
			region: String::new(),
			endpoint: String::new(),
		};
		let err = Requester::get_auth_token(&Client::new(), &config)
			.await
			.unwrap_err();
		assert!(matches!(err, SyncError::Transport(_)));
	}
}
