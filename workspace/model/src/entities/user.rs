use sea_orm::entity::prelude::*;
use std::fmt;

/// Represents one authenticated identity.
///
/// The email address is the login identifier; there is no separate username.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Normalized login email, unique across all accounts.
    #[sea_orm(unique)]
    pub email: String,
    pub display_name: String,
    /// Opaque one-way hash; never holds a plaintext password.
    pub password_hash: String,
    /// A disabled account cannot authenticate.
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
    /// Grants access to the administrative console.
    #[sea_orm(default_value = "false")]
    pub is_staff: bool,
    /// Grants unrestricted permission bypass. Implies `is_staff`.
    #[sea_orm(default_value = "false")]
    pub is_superuser: bool,
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Retrieve full name of user
    pub fn get_full_name(&self) -> &str {
        &self.display_name
    }

    /// Retrieve short name of user
    pub fn get_short_name(&self) -> &str {
        &self.display_name
    }
}

/// The canonical string form of an account is its email.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}
