// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Middleware: jwt_auth_middleware injects the AuthUser extension.

pub mod auth;
pub mod resources;
