//! Method-call and envelope message structures.

use crate::WireValue;

/// Envelope marker byte: success, followed by one result value.
pub const MARKER_SUCCESS: u8 = 0x00;
/// Envelope marker byte: failure, followed by code, message, details.
pub const MARKER_ERROR: u8 = 0x01;

/// A method invocation: name plus a single argument value (which may be a
/// List or Map for multi-argument calls).
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub args: WireValue,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: WireValue) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// A structured error carried by a failure envelope. Not a codec defect —
/// a first-class decoded outcome the caller decides how to surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {}", .message.as_deref().unwrap_or("<no message>"))]
pub struct RemoteError {
    pub code: String,
    pub message: Option<String>,
    pub details: WireValue,
}

impl RemoteError {
    pub fn new(
        code: impl Into<String>,
        message: Option<impl Into<String>>,
        details: WireValue,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.map(Into::into),
            details,
        }
    }
}

/// A decoded response envelope — either a result value or a structured
/// remote error.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(WireValue),
    Error(RemoteError),
}
