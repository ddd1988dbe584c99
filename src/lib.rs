pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod requester;
pub mod sink;

pub use collector::Collector;
pub use config::Config;
pub use error::SyncError;
pub use requester::{PageFetcher, Requester};
pub use sink::{DynamoSink, EpisodeSink};

/// The show whose episodes are mirrored.
pub const SHOW_ID: &str = "4zqDMbg9WSpC5l81gJCfEc";

/// Collect every episode reachable from `start_url` and hand the list to
/// `sink`. Stops at the first error; the sink is not touched if collection
/// fails.
pub async fn sync<F, S>(fetcher: F, start_url: &str, sink: &S) -> error::Result<usize>
where
	F: PageFetcher,
	S: EpisodeSink + ?Sized,
{
	let episodes = Collector::new(fetcher).collect(start_url).await?;
	log::info!("Collected {} episodes", episodes.len());
	sink.replace_all(&episodes).await?;
	log::info!("Wrote {} episodes", episodes.len());
	Ok(episodes.len())
}

/// Initialise logging for the binaries. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_logger() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
