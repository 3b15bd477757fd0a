//! Shared response envelope types.
//!
//! Every endpoint answers with one of two envelopes: an outcome
//! (`{"success": ..., "message": ...}`) or a value with an attached
//! message (`{"value": ..., "message": ...}`). Field names are the wire
//! contract and must not change.

use serde::Serialize;

/// Standard `{ "success": bool, "message": string }` envelope.
#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub success: bool,
    pub message: String,
}

impl OutcomeResponse {
    /// A successful outcome with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome with the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `{ "value": T, "message": string }` envelope for endpoints that
/// return data.
#[derive(Debug, Serialize)]
pub struct ValueResponse<T: Serialize> {
    pub value: T,
    pub message: String,
}

impl<T: Serialize> ValueResponse<T> {
    pub fn new(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }
}
