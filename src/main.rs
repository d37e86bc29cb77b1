use std::sync::Arc;

use anyhow::Context;

use bookshop_app::modules;
use bookshop_app::modules::books::store::{DynamoBookStore, SharedBookStore};
use bookshop_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let settings = Settings::load().with_context(|| "failed to load settings")?;

    tracing::info!(
        env = ?settings.environment,
        region = %settings.store.region,
        table = %settings.store.table,
        "book shop bootstrap starting"
    );

    // One client handle for the process lifetime, cloned per store call.
    let client = bookshop_db::connect(&settings.store).await;
    let store: SharedBookStore = Arc::new(DynamoBookStore::new(client, settings.store.table.clone()));

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    bookshop_http::start_server(&registry, &settings).await?;

    registry.stop_all().await?;

    Ok(())
}
