//! DynamoDB client bootstrap and attribute codec for the book shop backend.
//!
//! The client handle is built once at process start and cloned wherever a
//! store round trip is needed; it is never reconstructed per request.

pub mod codec;
mod error;

pub use error::StoreError;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use bookshop_kernel::settings::StoreSettings;

/// Build the process-wide DynamoDB client from store settings.
///
/// Credentials come from the SDK's default provider chain; the settings only
/// carry the region and an optional endpoint override (e.g. DynamoDB Local).
pub async fn connect(settings: &StoreSettings) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()));

    if let Some(endpoint) = &settings.endpoint {
        tracing::info!(endpoint = %endpoint, "using store endpoint override");
        loader = loader.endpoint_url(endpoint);
    }

    let config = loader.load().await;

    tracing::info!(region = %settings.region, table = %settings.table, "store client ready");

    Client::new(&config)
}
