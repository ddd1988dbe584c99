use show_sync::config::{Config, CONFIG_PATH};
use show_sync::{Requester, SyncError};
use std::process::ExitCode;

async fn run() -> Result<(), SyncError> {
	let config = Config::from_file(CONFIG_PATH)?;
	let token = Requester::get_auth_token(&reqwest::Client::new(), &config).await?;
	println!("Access Token: {}", token.access_token);
	println!("Token Type: {}", token.token_type);
	println!("Expires In: {}", token.expires_in);
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
