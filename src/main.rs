use show_sync::config::{Config, CONFIG_PATH};
use show_sync::{DynamoSink, Requester, SyncError, SHOW_ID};
use std::process::ExitCode;

async fn run() -> Result<(), SyncError> {
	let config = Config::from_file(CONFIG_PATH)?;
	let sink = DynamoSink::new(&config)?;
	let requester = Requester::new(&config).await?;
	let url = Requester::construct_show_url(SHOW_ID);
	show_sync::sync(requester, &url, &sink).await?;
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
