// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token required)
//
// Public handlers are reachable anonymously: banner, health, register, login.
// Protected handlers run behind jwt_auth_middleware and receive the caller as
// an `Extension<AuthUser>`; every query they issue is scoped to that user.

pub mod protected;
pub mod public;
