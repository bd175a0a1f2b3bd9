//! Account construction and lookup.
//!
//! The factory operations here are the only way the rest of the application
//! creates accounts. They are plain functions over an injected
//! [`DatabaseConnection`]; the store's unique index on `email` arbitrates
//! concurrent creation attempts.

use model::entities::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::error::{DirectoryError, Result};
use crate::password::make_password;

/// Normalize an email address for storage and uniqueness comparison.
///
/// Surrounding whitespace is trimmed and the address is case-folded, so
/// `A@Example.com` and `a@example.com` are the same login identifier.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create a regular user account.
///
/// The account starts active with neither the staff nor the superuser flag.
/// A missing password leaves the record with an unusable hash: it exists but
/// cannot authenticate by password.
#[instrument(skip(db, password))]
pub async fn create_user(
    db: &DatabaseConnection,
    email: &str,
    display_name: &str,
    password: Option<&str>,
) -> Result<user::Model> {
    insert_account(db, email, display_name, password, false, false).await
}

/// Create a superuser account with the staff and superuser flags set.
///
/// Unlike [`create_user`] the password is required. Error conditions are
/// identical to [`create_user`] and propagate unchanged.
#[instrument(skip(db, password))]
pub async fn create_superuser(
    db: &DatabaseConnection,
    email: &str,
    display_name: &str,
    password: &str,
) -> Result<user::Model> {
    if password.is_empty() {
        warn!("Rejecting superuser creation without a password");
        return Err(DirectoryError::Validation("password required".to_string()));
    }
    insert_account(db, email, display_name, Some(password), true, true).await
}

/// Look up an account by its login identifier.
#[instrument(skip(db))]
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    let email = normalize_email(email);
    trace!("Looking up account by email");

    let found = user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(db)
        .await?;
    Ok(found)
}

/// Shared construction path for both factory operations.
///
/// Validates, normalizes, hashes and performs exactly one durable write.
/// Creating a superuser in a single insert means a failed creation never
/// leaves a half-privileged row behind.
async fn insert_account(
    db: &DatabaseConnection,
    email: &str,
    display_name: &str,
    password: Option<&str>,
    is_staff: bool,
    is_superuser: bool,
) -> Result<user::Model> {
    trace!("Entering insert_account");

    if email.trim().is_empty() {
        warn!("Rejecting account creation without an email address");
        return Err(DirectoryError::Validation("email required".to_string()));
    }
    if display_name.trim().is_empty() {
        warn!("Rejecting account creation without a display name");
        return Err(DirectoryError::Validation(
            "display name required".to_string(),
        ));
    }

    let email = normalize_email(email);
    debug!("Creating account for {}", email);

    let password_hash = make_password(password)?;

    let new_account = user::ActiveModel {
        email: Set(email.clone()),
        display_name: Set(display_name.to_string()),
        password_hash: Set(password_hash),
        is_active: Set(true),
        is_staff: Set(is_staff),
        is_superuser: Set(is_superuser),
        last_login: Set(None),
        ..Default::default()
    };

    trace!("Attempting to insert new account into database");
    match new_account.insert(db).await {
        Ok(account) => {
            info!(
                "Account created with ID: {}, email: {}",
                account.id, account.email
            );
            Ok(account)
        }
        Err(db_error) => {
            error!("Failed to create account '{}': {}", email, db_error);
            Err(creation_error(&email, db_error))
        }
    }
}

/// Map a uniqueness rejection from the store to [`DirectoryError::Conflict`];
/// every other database failure passes through unchanged.
fn creation_error(email: &str, db_error: DbErr) -> DirectoryError {
    match &db_error {
        DbErr::Exec(_) | DbErr::Query(_) => {
            // Check for unique constraint violations
            let error_msg = db_error.to_string().to_lowercase();
            if error_msg.contains("unique") || error_msg.contains("constraint") {
                DirectoryError::Conflict(format!("email '{}' already exists", email))
            } else {
                DirectoryError::Database(db_error)
            }
        }
        _ => DirectoryError::Database(db_error),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_email;

    #[test]
    fn test_normalize_email_folds_case() {
        assert_eq!(normalize_email("A@Example.com"), "a@example.com");
        assert_eq!(normalize_email("bob@EXAMPLE.ORG"), "bob@example.org");
    }

    #[test]
    fn test_normalize_email_trims_whitespace() {
        assert_eq!(normalize_email("  alice@example.com \n"), "alice@example.com");
    }

    #[test]
    fn test_normalize_email_without_at_sign() {
        // Malformed input is folded as-is; validation happens elsewhere
        assert_eq!(normalize_email("Not-An-Email"), "not-an-email");
    }
}
