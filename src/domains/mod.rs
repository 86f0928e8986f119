//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single bounded context, `tools`.

pub mod tools;
