use anyhow::Result;
use tracing::{debug, error, info};

use crate::config::initialize_app_state;
use crate::directory;

pub async fn create_superuser(email: &str, display_name: &str, password: &str) -> Result<()> {
    info!("Creating superuser account");
    debug!("Email: {}, display name: {}", email, display_name);

    let state = initialize_app_state().await?;

    match directory::create_superuser(&state.db, email, display_name, password).await {
        Ok(account) => {
            info!("Created superuser {} with ID {}", account, account.id);
            Ok(())
        }
        Err(e) => {
            error!("Failed to create superuser: {}", e);
            Err(e.into())
        }
    }
}
