//! `bazaar-auth` — store users, their roles and what each role may do.
//!
//! Credentials are compared in plaintext; there is no hashing layer here.

pub mod permissions;
pub mod roles;
pub mod user;

pub use permissions::Permission;
pub use roles::UserRole;
pub use user::User;
