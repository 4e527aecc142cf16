//! Lectern: teachers post lecture transcripts and get bullet-point notes;
//! students browse lectures, ask a canned chatbot and keep personal notes.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: entities, port traits and the services implementing them.
//! - [`inbound`]: the Actix HTTP adapter (pages, JSON API, sessions).
//! - [`outbound`]: JSON file persistence and Argon2 password hashing.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
