use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::config::initialize_app_state;
use crate::directory;

pub async fn create_user(email: &str, display_name: &str, password: Option<&str>) -> Result<()> {
    info!("Creating user account");
    debug!("Email: {}, display name: {}", email, display_name);

    let state = initialize_app_state().await?;

    match directory::create_user(&state.db, email, display_name, password).await {
        Ok(account) => {
            info!("Created account {} with ID {}", account, account.id);
            if password.is_none() {
                warn!("Account has no usable password and cannot authenticate by password");
            }
            Ok(())
        }
        Err(e) => {
            error!("Failed to create account: {}", e);
            Err(e.into())
        }
    }
}
