//! In-memory token registry.

use crate::address::TokenAddress;
use crate::error::RegistryError;
use crate::tokens::{TokenDefinition, TokenRecord, SYNTHETIC_USD_PRICE, TOKEN_METADATA};
use std::collections::HashSet;
use std::fmt;

/// Result of a single price write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceUpdate {
    /// The price was written; carries the previous value.
    Applied { previous: Option<f64> },
    /// The token is synthetic; its pinned price was kept.
    PinnedSynthetic,
}

/// Ordered set of token records, keyed by address.
///
/// Iteration order is declaration order and is relied on for default selection.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    records: Vec<TokenRecord>,
}

impl TokenRegistry {
    pub fn from_records(records: Vec<TokenRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(RegistryError::DuplicateToken(record.id().clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn from_definitions(
        defs: impl IntoIterator<Item = TokenDefinition>,
    ) -> Result<Self, RegistryError> {
        Self::from_records(defs.into_iter().map(TokenDefinition::into_record).collect())
    }

    /// Registry seeded from the platform's static token metadata.
    pub fn platform_default() -> Result<Self, RegistryError> {
        Self::from_definitions(TOKEN_METADATA)
    }

    pub fn get(&self, id: &TokenAddress) -> Result<&TokenRecord, RegistryError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))
    }

    pub fn list_all(&self) -> &[TokenRecord] {
        &self.records
    }

    /// Ids of the tokens that take live prices, in declaration order.
    pub fn priced_ids(&self) -> Vec<TokenAddress> {
        self.records
            .iter()
            .filter(|r| !r.is_synthetic())
            .map(|r| r.id().clone())
            .collect()
    }

    pub fn apply_price(
        &mut self,
        id: &TokenAddress,
        price: f64,
    ) -> Result<PriceUpdate, RegistryError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RegistryError::UnknownToken(id.clone()))?;

        if record.is_synthetic() {
            record.usd_price = Some(SYNTHETIC_USD_PRICE);
            return Ok(PriceUpdate::PinnedSynthetic);
        }

        let previous = record.usd_price.replace(price);
        Ok(PriceUpdate::Applied { previous })
    }

    /// Reassert the fixed price on every synthetic token.
    pub fn pin_synthetic(&mut self) {
        for record in self.records.iter_mut().filter(|r| r.is_synthetic()) {
            record.usd_price = Some(SYNTHETIC_USD_PRICE);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for TokenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌──────────┬──────────────┬──────────┬──────────────────┐")?;
        writeln!(f, "│  Symbol  │     Name     │ Decimals │    Price (USD)   │")?;
        writeln!(f, "├──────────┼──────────────┼──────────┼──────────────────┤")?;
        for record in &self.records {
            let price = match record.usd_price() {
                Some(px) => format!("${:.8}", px),
                None => "—".to_string(),
            };
            let marker = if record.is_synthetic() { "*" } else { " " };
            writeln!(
                f,
                "│ {:>7}{} │ {:>12} │ {:>8} │ {:>16} │",
                record.symbol(),
                marker,
                record.display_name(),
                record.decimals(),
                price
            )?;
        }
        write!(f, "└──────────┴──────────────┴──────────┴──────────────────┘")
    }
}
