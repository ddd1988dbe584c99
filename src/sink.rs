use crate::config::Config;
use crate::error::{Result, SyncError};
use crate::models::Episode;
use async_trait::async_trait;
use aws_sdk_dynamodb::client::Waiters;
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::types::{
	AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
	ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use std::time::Duration;

pub const TABLE_NAME: &str = "Program";
const KEY_ATTRIBUTE: &str = "Name";
const DESCRIPTION_ATTRIBUTE: &str = "Description";
const CAPACITY_UNITS: i64 = 5;
const TABLE_WAIT: Duration = Duration::from_secs(60);

/// Destination for a full episode list. Whatever was stored before is
/// replaced.
#[async_trait]
pub trait EpisodeSink {
	async fn replace_all(&self, episodes: &[Episode]) -> Result<()>;
}

/// Writes episodes into a DynamoDB table keyed by episode name, dropping and
/// recreating the table first.
pub struct DynamoSink {
	client: Client,
	table: String,
}

impl DynamoSink {
	pub fn new(config: &Config) -> Result<Self> {
		if config.region.is_empty() {
			return Err(SyncError::Config("Region was empty.".into()));
		}

		let credentials = Credentials::new("dummy", "dummy", Some("dummy".into()), None, "static");
		let mut builder = aws_sdk_dynamodb::Config::builder()
			.behavior_version(BehaviorVersion::latest())
			.region(Region::new(config.region.clone()))
			.credentials_provider(credentials);
		if !config.endpoint.is_empty() {
			builder = builder.endpoint_url(&config.endpoint);
		}

		Ok(DynamoSink {
			client: Client::from_conf(builder.build()),
			table: TABLE_NAME.to_owned(),
		})
	}

	/// Delete the table if it is there. A missing table is not an error.
	pub async fn delete_table(&self) -> Result<()> {
		let described = self
			.client
			.describe_table()
			.table_name(&self.table)
			.send()
			.await;
		match described {
			Ok(_) => {}
			Err(err)
				if err
					.as_service_error()
					.map_or(false, |e| e.is_resource_not_found_exception()) =>
			{
				log::debug!("Table {} does not exist, nothing to delete", self.table);
				return Ok(());
			}
			Err(err) => return Err(SyncError::storage(err)),
		}

		log::info!("Deleting table {}", self.table);
		self.client
			.delete_table()
			.table_name(&self.table)
			.send()
			.await
			.map_err(SyncError::storage)?;
		self.client
			.wait_until_table_not_exists()
			.table_name(&self.table)
			.wait(TABLE_WAIT)
			.await
			.map_err(SyncError::storage)?;
		Ok(())
	}

	pub async fn create_table(&self) -> Result<()> {
		log::info!("Creating table {}", self.table);
		let key_definition = AttributeDefinition::builder()
			.attribute_name(KEY_ATTRIBUTE)
			.attribute_type(ScalarAttributeType::S)
			.build()
			.map_err(SyncError::storage)?;
		let key_schema = KeySchemaElement::builder()
			.attribute_name(KEY_ATTRIBUTE)
			.key_type(KeyType::Hash)
			.build()
			.map_err(SyncError::storage)?;
		let throughput = ProvisionedThroughput::builder()
			.read_capacity_units(CAPACITY_UNITS)
			.write_capacity_units(CAPACITY_UNITS)
			.build()
			.map_err(SyncError::storage)?;

		self.client
			.create_table()
			.table_name(&self.table)
			.attribute_definitions(key_definition)
			.key_schema(key_schema)
			.provisioned_throughput(throughput)
			.send()
			.await
			.map_err(SyncError::storage)?;
		self.client
			.wait_until_table_exists()
			.table_name(&self.table)
			.wait(TABLE_WAIT)
			.await
			.map_err(SyncError::storage)?;
		Ok(())
	}

	pub async fn put_episodes(&self, episodes: &[Episode]) -> Result<()> {
		for episode in episodes {
			log::debug!("Putting {}", episode.name);
			self.client
				.put_item()
				.table_name(&self.table)
				.item(KEY_ATTRIBUTE, AttributeValue::S(episode.name.clone()))
				.item(
					DESCRIPTION_ATTRIBUTE,
					AttributeValue::S(episode.description.clone()),
				)
				.send()
				.await
				.map_err(SyncError::storage)?;
		}
		Ok(())
	}
}

#[async_trait]
impl EpisodeSink for DynamoSink {
	async fn replace_all(&self, episodes: &[Episode]) -> Result<()> {
		self.delete_table().await?;
		self.create_table().await?;
		self.put_episodes(episodes).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(region: &str, endpoint: &str) -> Config {
		Config {
			client_id: "id".into(),
			client_secret: "secret".into(),
			token_url: "https://accounts.example.com/api/token".into(),
			region: region.into(),
			endpoint: endpoint.into(),
		}
	}

	#[test]
	fn empty_region_is_rejected() {
		let err = DynamoSink::new(&config("", "http://localhost:8000"))
			.err()
			.unwrap();
		assert!(matches!(err, SyncError::Config(ref msg) if msg == "Region was empty."));
	}

	#[tokio::test]
	async fn targets_program_table() {
		let sink = DynamoSink::new(&config("ap-northeast-1", "http://localhost:8000")).unwrap();
		assert_eq!(sink.table, TABLE_NAME);
	}
}
