use crate::error::{Result, SyncError};
use crate::models::{Episode, Page};
use crate::requester::PageFetcher;
use reqwest::Url;

/// Running totals for one collection. Lives only for the duration of
/// [`Collector::collect`].
#[derive(Debug, Default)]
struct CollectionState {
	items: Vec<Episode>,
	total: usize,
	seen: usize,
}

impl CollectionState {
	fn absorb(&mut self, items: Vec<Episode>) {
		self.seen += items.len();
		self.items.extend(items);
	}

	fn count_reached(&self) -> bool {
		self.seen == self.total
	}
}

/// Follows next-page links from a show document until the catalog says there
/// is nothing left or the expected episode count has been seen.
pub struct Collector<F> {
	fetcher: F,
}

impl<F: PageFetcher> Collector<F> {
	pub fn new(fetcher: F) -> Self {
		Collector { fetcher }
	}

	pub async fn collect(&self, start_url: &str) -> Result<Vec<Episode>> {
		if Url::parse(start_url).is_err() {
			return Err(SyncError::InvalidUrl(start_url.to_owned()));
		}

		let mut state = CollectionState::default();
		let mut url = start_url.to_owned();
		for index in 0.. {
			let body = self.fetcher.fetch(&url).await?;
			let page = Page::parse(index, &body)?;
			if let Some(total) = page.total() {
				state.total = total;
			}
			let (items, next) = page.into_parts();
			log::debug!(
				"Page {} has {} items ({}/{} seen before it)",
				index,
				items.len(),
				state.seen,
				state.total
			);
			state.absorb(items);

			match next {
				Some(next) => url = next,
				None => {
					log::info!("No next link after page {}, {} items seen", index, state.seen);
					break;
				}
			}

			if state.count_reached() {
				log::info!("Count reached after page {}, {} items seen", index, state.seen);
				break;
			}
		}
		Ok(state.items)
	}
}
