use super::de::null_elements_as_default;
use serde::Deserialize;

/// One episode as the catalog API lists it. Only `name` and `description`
/// are required; the rest is carried along untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Episode {
	pub name: String,
	pub description: String,

	pub id: Option<String>,
	pub uri: Option<String>,
	pub href: Option<String>,
	#[serde(rename = "type")]
	pub episode_type: Option<String>,
	pub release_date: Option<String>,
	pub release_date_precision: Option<String>,
	pub duration_ms: Option<u64>,
	pub explicit: Option<bool>,
	pub language: Option<String>,
	#[serde(default, deserialize_with = "null_elements_as_default")]
	pub languages: Vec<String>,
	pub html_description: Option<String>,
	pub audio_preview_url: Option<String>,
	pub is_externally_hosted: Option<bool>,
	pub is_playable: Option<bool>,
	pub external_urls: Option<ExternalUrls>,
	#[serde(default, deserialize_with = "null_elements_as_default")]
	pub images: Vec<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExternalUrls {
	pub spotify: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Image {
	pub url: String,
	pub height: Option<u32>,
	pub width: Option<u32>,
}

impl Episode {
	/// Bare episode with no passthrough metadata.
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Episode {
			name: name.into(),
			description: description.into(),
			..Default::default()
		}
	}
}
