use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::PayloadKey;

/// A JSON object with exactly one string entry.
///
/// Payloads built with [`Payload::new_static`] borrow their value, so cloning
/// one per request does not allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    key: PayloadKey,
    value: Cow<'static, str>,
}

impl Payload {
    /// Creates a payload from an owned or borrowed value.
    pub fn new(key: PayloadKey, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Creates a payload from a string literal.
    pub const fn new_static(key: PayloadKey, value: &'static str) -> Self {
        Self {
            key,
            value: Cow::Borrowed(value),
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key.as_str(), self.value.as_ref())?;
        map.end()
    }
}
