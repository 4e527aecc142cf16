//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: JSON flat-file repositories plus in-memory fixtures.
//! - **credentials**: Argon2 password hashing.
//!
//! Adapters are thin translators between domain types and their stored
//! representation. They contain no business logic.

pub mod credentials;
pub mod persistence;
