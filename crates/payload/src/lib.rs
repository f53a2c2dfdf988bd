//! Fixed JSON payloads for the root responder.
//!
//! A [`Payload`] is a single-entry JSON object such as `{"app":"v1.0.0"}`.
//! The historical payloads are named by [`Variant`].

pub mod error;
pub mod key;
pub mod payload;
pub mod variant;

pub use error::{UnknownKey, UnknownVariant};
pub use key::PayloadKey;
pub use payload::Payload;
pub use variant::Variant;
