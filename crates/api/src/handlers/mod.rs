//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input through `metaclass_core`, delegate to the
//! repositories in `metaclass_db` and map errors via [`crate::error::AppError`].

pub mod admin;
pub mod meeting;
pub mod stanza;
pub mod utente;
