// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition and liveness. No /api prefix for health and banner;
// register and login live under /api to match the client.

pub mod auth;
pub mod health;

pub use auth::{login_post, register_post};
pub use health::{health_get, root_get};
