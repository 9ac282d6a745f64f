pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;
pub mod users;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::Repository;
pub use users::UserStore;
