use super::de::null_elements_as_default;
use super::Episode;
use crate::error::Result;
use serde::Deserialize;

/// The show document returned for the first request. Its episodes sit one
/// level down, inside `episodes`.
#[derive(Clone, Debug, Deserialize)]
pub struct Show {
	pub id: Option<String>,
	pub name: Option<String>,
	pub publisher: Option<String>,
	pub description: Option<String>,
	pub media_type: Option<String>,
	#[serde(default, deserialize_with = "null_elements_as_default")]
	pub languages: Vec<String>,
	#[serde(default, deserialize_with = "null_elements_as_default")]
	pub available_markets: Vec<String>,
	pub total_episodes: usize,
	pub episodes: EpisodeContainer,
}

/// A page of episodes. Nested in [`Show`] for the first page, the whole body
/// for every page after it. A `null` entry in `items` becomes an empty
/// episode so it still counts towards the total.
#[derive(Clone, Debug, Deserialize)]
pub struct EpisodeContainer {
	#[serde(deserialize_with = "null_elements_as_default")]
	pub items: Vec<Episode>,
	pub next: Option<String>,
	pub href: Option<String>,
	pub limit: Option<usize>,
	pub offset: Option<usize>,
	pub total: Option<usize>,
}

#[derive(Clone, Debug)]
pub enum Page {
	First {
		total: usize,
		items: Vec<Episode>,
		next: Option<String>,
	},
	Later {
		items: Vec<Episode>,
		next: Option<String>,
	},
}

impl Page {
	/// Decode a body fetched at position `index` of the page chain. The shape
	/// is picked by position only: index 0 is always a show document.
	pub fn parse(index: usize, body: &str) -> Result<Page> {
		if index == 0 {
			let show: Show = serde_json::from_str(body)?;
			Ok(Page::First {
				total: show.total_episodes,
				next: non_empty(show.episodes.next),
				items: show.episodes.items,
			})
		} else {
			let container: EpisodeContainer = serde_json::from_str(body)?;
			Ok(Page::Later {
				next: non_empty(container.next),
				items: container.items,
			})
		}
	}

	pub fn items(&self) -> &[Episode] {
		match self {
			Page::First { items, .. } | Page::Later { items, .. } => items,
		}
	}

	pub fn next(&self) -> Option<&str> {
		match self {
			Page::First { next, .. } | Page::Later { next, .. } => next.as_deref(),
		}
	}

	/// Expected item count, only known from the first page.
	pub fn total(&self) -> Option<usize> {
		match self {
			Page::First { total, .. } => Some(*total),
			Page::Later { .. } => None,
		}
	}

	pub fn into_parts(self) -> (Vec<Episode>, Option<String>) {
		match self {
			Page::First { items, next, .. } | Page::Later { items, next } => (items, next),
		}
	}
}

/// Empty and null both mean "last page". Anything else is followed as is.
fn non_empty(next: Option<String>) -> Option<String> {
	next.filter(|link| !link.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SyncError;

	const FIRST: &str = r#"{
		"id": "4zqDMbg9WSpC5l81gJCfEc",
		"name": "Some Show",
		"publisher": "Someone",
		"total_episodes": 3,
		"episodes": {
			"href": "https://api.spotify.com/v1/shows/4zqDMbg9WSpC5l81gJCfEc/episodes?offset=0&limit=2",
			"items": [
				{"name": "A", "description": "a"},
				{"name": "B", "description": "b"}
			],
			"limit": 2,
			"next": "https://api.spotify.com/v1/shows/4zqDMbg9WSpC5l81gJCfEc/episodes?offset=2&limit=2",
			"offset": 0,
			"previous": null,
			"total": 3
		}
	}"#;

	const LATER: &str = r#"{
		"href": "https://api.spotify.com/v1/shows/4zqDMbg9WSpC5l81gJCfEc/episodes?offset=2&limit=2",
		"items": [{"name": "C", "description": "c"}],
		"limit": 2,
		"next": null,
		"offset": 2,
		"previous": "https://api.spotify.com/v1/shows/4zqDMbg9WSpC5l81gJCfEc/episodes?offset=0&limit=2",
		"total": 3
	}"#;

	#[test]
	fn first_page_reads_nested_container() {
		let page = Page::parse(0, FIRST).unwrap();
		assert_eq!(page.total(), Some(3));
		let names: Vec<_> = page.items().iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, ["A", "B"]);
		assert!(page.next().unwrap().ends_with("offset=2&limit=2"));
	}

	#[test]
	fn later_page_reads_flat_container() {
		let page = Page::parse(1, LATER).unwrap();
		assert_eq!(page.total(), None);
		assert_eq!(page.items().len(), 1);
		assert_eq!(page.next(), None);
	}

	#[test]
	fn shape_follows_index_not_body() {
		assert!(Page::parse(0, LATER).is_err());
		assert!(Page::parse(1, FIRST).is_err());
	}

	#[test]
	fn empty_next_is_last_page() {
		let page = Page::parse(1, r#"{"items": [], "next": ""}"#).unwrap();
		assert_eq!(page.next(), None);
		let page = Page::parse(1, r#"{"items": []}"#).unwrap();
		assert_eq!(page.next(), None);
	}

	#[test]
	fn relative_next_is_followed_as_is() {
		let page = Page::parse(1, r#"{"items": [], "next": "page2"}"#).unwrap();
		assert_eq!(page.next(), Some("page2"));
	}

	#[test]
	fn null_lists_and_items_parse() {
		let page = Page::parse(
			0,
			r#"{
				"total_episodes": 2,
				"languages": null,
				"available_markets": null,
				"episodes": {"items": [null, {"name": "B", "description": "b"}], "next": null}
			}"#,
		)
		.unwrap();
		let items = page.items();
		assert_eq!(items.len(), 2);
		assert_eq!(items[0], Episode::default());
		assert_eq!(items[1].name, "B");

		let page = Page::parse(1, r#"{"items": null, "next": null}"#).unwrap();
		assert!(page.items().is_empty());
	}

	#[test]
	fn malformed_body_is_parse_error() {
		let err = Page::parse(1, "<html>").unwrap_err();
		assert!(matches!(err, SyncError::Parse(_)));
	}
}
