//! Standard binary codec for platform-channel style messaging.
//!
//! Two layers:
//! - [`standard`] — the value codec: a self-describing, type-tagged binary
//!   encoding of the dynamically-typed [`WireValue`] model.
//! - [`method`] — the RPC codec layered on top: method-call messages and
//!   success/error response envelopes.
//!
//! Both layers are pure and stateless between calls; every encode returns a
//! freshly owned buffer and every decode reads through a borrowed slice.

mod value;

pub mod method;
pub mod standard;

pub use channel_buffers::{BufferError, Endian, Reader, Writer};
pub use method::{
    Envelope, MethodCall, MethodDecodeError, MethodDecoder, MethodEncoder, RemoteError,
};
pub use standard::{DecodeError, EncodeError, StandardDecoder, StandardEncoder, Tag};
pub use value::WireValue;
