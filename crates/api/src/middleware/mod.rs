//! Request extractors enforcing authentication and admin privilege.

pub mod admin;
pub mod auth;
