//! Domain logic for the MetaClass room-management backend.
//!
//! Everything in this crate is transport-free: no HTTP types, no SQL.
//! The `api` crate maps [`error::CoreError`] values to status codes and
//! the `db` crate applies the decisions produced here.

pub mod admin;
pub mod admission;
pub mod content;
pub mod error;
pub mod feedback;
pub mod stanza;
pub mod types;
