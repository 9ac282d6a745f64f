// handlers/public/auth/mod.rs - Public authentication handlers
//
// Token acquisition endpoints that do not require authentication.

pub mod login;    // POST /api/login - authenticate and get JWT
pub mod register; // POST /api/register - create account and get JWT

pub use login::login_post;
pub use register::register_post;
