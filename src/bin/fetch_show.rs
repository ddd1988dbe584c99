use show_sync::config::{Config, CONFIG_PATH};
use show_sync::models::Page;
use show_sync::{Requester, SyncError, SHOW_ID};
use std::process::ExitCode;

async fn run() -> Result<(), SyncError> {
	let config = Config::from_file(CONFIG_PATH)?;
	let requester = Requester::new(&config).await?;
	let body = requester
		.get_page(&Requester::construct_show_url(SHOW_ID))
		.await?;
	let page = Page::parse(0, &body)?;
	log::info!(
		"Show lists {} episodes, {} on the first page",
		page.total().unwrap_or_default(),
		page.items().len()
	);
	println!("{}", body);
	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	show_sync::init_logger();
	match run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			ExitCode::FAILURE
		}
	}
}
