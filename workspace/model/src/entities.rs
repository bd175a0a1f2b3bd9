//! This file serves as the root for all SeaORM entity modules.
//! The account directory owns a single entity: the user record the
//! authentication subsystem treats as its source of identity.

pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create users
        let alice = user::ActiveModel {
            email: Set("alice@example.com".to_string()),
            display_name: Set("Alice Lidell".to_string()),
            password_hash: Set("$scrypt$dummy-hash-for-alice".to_string()),
            is_active: Set(true),
            is_staff: Set(false),
            is_superuser: Set(false),
            last_login: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let admin = user::ActiveModel {
            email: Set("admin@example.com".to_string()),
            display_name: Set("Admin".to_string()),
            password_hash: Set("$scrypt$dummy-hash-for-admin".to_string()),
            is_active: Set(true),
            is_staff: Set(true),
            is_superuser: Set(true),
            last_login: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.email == "alice@example.com"));
        assert!(users.iter().any(|u| u.email == "admin@example.com"));

        // Lookup by the login identifier
        let found = User::find()
            .filter(user::Column::Email.eq("alice@example.com"))
            .one(&db)
            .await?;
        assert_eq!(found.as_ref().map(|u| u.id), Some(alice.id));

        // Flags persisted as written
        let admin_row = User::find_by_id(admin.id).one(&db).await?.unwrap();
        assert!(admin_row.is_staff);
        assert!(admin_row.is_superuser);
        assert!(admin_row.is_active);
        assert!(admin_row.last_login.is_none());

        // The unique index on email rejects a duplicate insert even when the
        // directory layer is bypassed
        let duplicate = user::ActiveModel {
            email: Set("alice@example.com".to_string()),
            display_name: Set("Impostor".to_string()),
            password_hash: Set("$scrypt$dummy-hash-for-impostor".to_string()),
            is_active: Set(true),
            is_staff: Set(false),
            is_superuser: Set(false),
            last_login: Set(None),
            ..Default::default()
        };
        assert!(duplicate.insert(&db).await.is_err());

        Ok(())
    }

    #[test]
    fn test_name_accessors_and_string_form() {
        let account = user::Model {
            id: 1,
            email: "alice@example.com".to_string(),
            display_name: "Alice Lidell".to_string(),
            password_hash: "$scrypt$dummy".to_string(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            last_login: None,
        };

        assert_eq!(account.get_full_name(), "Alice Lidell");
        assert_eq!(account.get_short_name(), "Alice Lidell");
        assert_eq!(account.to_string(), "alice@example.com");
    }
}
