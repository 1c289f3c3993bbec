use color_eyre::eyre::{eyre, Result};
use hello_members::{
    app_state::AppState,
    services::data_stores::HashmapMemberStore,
    utils::{constants::APP_ADDRESS, tracing::init_tracing},
    Application,
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let member_store = Arc::new(RwLock::new(HashmapMemberStore::default()));
    let app_state = AppState::new(member_store);

    let app = Application::build(app_state, &APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}
