use thiserror::Error;

/// Error types for account-directory operations
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A required field was missing or empty; raised before any write
    #[error("Validation error: {0}")]
    Validation(String),

    /// Email uniqueness violation reported by the store at insert time
    #[error("Conflict error: {0}")]
    Conflict(String),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Error from the password hashing collaborator
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

/// Type alias for Result with DirectoryError
pub type Result<T> = std::result::Result<T, DirectoryError>;
