pub mod create_superuser;
pub mod create_user;
pub mod initdb;

pub use create_superuser::create_superuser;
pub use create_user::create_user;
pub use initdb::init_database;
