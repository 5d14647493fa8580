//! Error taxonomy for the platform crate.
//!
//! Provider errors never escape [`PriceSynchronizer::refresh`](crate::PriceSynchronizer::refresh);
//! they are recorded per provider in the refresh outcome.

use crate::address::TokenAddress;
use thiserror::Error;

/// Failure of a single price provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport failure, non-success status, timeout or missing endpoint.
    #[error("provider unreachable: {0}")]
    Unreachable(String),
    /// The response body did not parse into a price mapping.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    pub fn unreachable(cause: impl Into<String>) -> Self {
        Self::Unreachable(cause.into())
    }

    pub fn malformed(cause: impl Into<String>) -> Self {
        Self::MalformedResponse(cause.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("token not found: {0}")]
    NotFound(TokenAddress),
    #[error("update targets unknown token: {0}")]
    UnknownToken(TokenAddress),
    #[error("token declared twice: {0}")]
    DuplicateToken(TokenAddress),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address length {0} outside 32..=44")]
    Length(usize),
    #[error("invalid base58 character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must lie in [0, 1], got {value}")]
    FeeOutOfRange { name: &'static str, value: f64 },
    #[error("{name} must not exceed {max}, got {value}")]
    FeeAboveCap {
        name: &'static str,
        value: f64,
        max: f64,
    },
}
