//! Method-call and response-envelope codec, layered on the standard value
//! codec.

pub mod decoder;
pub mod encoder;
pub mod messages;

pub use decoder::{MethodDecodeError, MethodDecoder};
pub use encoder::MethodEncoder;
pub use messages::{Envelope, MethodCall, RemoteError, MARKER_ERROR, MARKER_SUCCESS};
