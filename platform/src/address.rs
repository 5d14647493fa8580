//! Opaque on-chain addresses.
//!
//! Only the textual shape is checked (base58 alphabet, 32 to 44 characters).
//! No key or curve logic lives here.

use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base58 address of a token mint or pool authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let len = s.chars().count();
        if !(32..=44).contains(&len) {
            return Err(AddressError::Length(len));
        }
        if let Some((pos, ch)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| !BASE58_ALPHABET.contains(*c))
        {
            return Err(AddressError::InvalidCharacter { ch, pos });
        }
        Ok(Self(s.to_string()))
    }

    /// Build an address from a compile-time literal.
    pub(crate) fn from_static(s: &'static str) -> Self {
        Self::parse(s).expect("static address is valid base58")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TokenAddress> for String {
    fn from(addr: TokenAddress) -> Self {
        addr.0
    }
}

impl AsRef<str> for TokenAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_mints() {
        let sol = TokenAddress::parse("So11111111111111111111111111111111111111112").unwrap();
        assert_eq!(sol.as_str(), "So11111111111111111111111111111111111111112");
        assert!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
            .parse::<TokenAddress>()
            .is_ok());
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(TokenAddress::parse("abc"), Err(AddressError::Length(3)));
        assert!(TokenAddress::parse(&"1".repeat(45)).is_err());
    }

    #[test]
    fn rejects_non_base58_characters() {
        // '0', 'O', 'I' and 'l' are excluded from base58.
        let bad = "0o11111111111111111111111111111111111111112";
        assert_eq!(
            TokenAddress::parse(bad),
            Err(AddressError::InvalidCharacter { ch: '0', pos: 0 })
        );
    }

    #[test]
    fn serde_goes_through_validation() {
        let ok: TokenAddress =
            serde_json::from_str("\"So11111111111111111111111111111111111111112\"").unwrap();
        assert_eq!(ok.to_string(), "So11111111111111111111111111111111111111112");
        assert!(serde_json::from_str::<TokenAddress>("\"nope\"").is_err());
    }
}
