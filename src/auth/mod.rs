// auth/mod.rs - Credential primitives
//
// Password hashing (Argon2id, PHC strings) and bearer token issuing/verification
// (HS256 JWT). Both are pure with respect to request state: they hold only
// their configured parameters and can be shared behind an Arc.

pub mod password;
pub mod token;

pub use password::{HashError, PasswordHasher};
pub use token::{Claims, TokenError, TokenIssuer};
