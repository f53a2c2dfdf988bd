use thiserror::Error;

/// A variant slug did not match any known [`Variant`](crate::Variant).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown payload variant: {0:?}")]
pub struct UnknownVariant(pub String);

/// A key name did not match any [`PayloadKey`](crate::PayloadKey).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown payload key: {0:?}")]
pub struct UnknownKey(pub String);
