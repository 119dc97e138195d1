use std::path::Path;

use crate::domain::Symbol;
use crate::error::{LoadError, ValidationError};

/// How an instrument symbol is matched against the sector reference table.
///
/// Exact matching is the default. The prefix strategy exists for data sets
/// whose file stems only share a leading fragment with the reference
/// symbols; it is collision-prone (two unrelated instruments sharing a
/// prefix resolve to the same sector) and must be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Case-insensitive equality on the full symbol.
    ExactSymbol,
    /// Equality on the first `n` characters of both sides.
    Prefix(usize),
}

impl JoinStrategy {
    fn matches(self, reference: &str, symbol: &str) -> bool {
        match self {
            Self::ExactSymbol => reference.eq_ignore_ascii_case(symbol),
            Self::Prefix(len) => {
                let lhs = reference.chars().take(len).map(|ch| ch.to_ascii_uppercase());
                let rhs = symbol.chars().take(len).map(|ch| ch.to_ascii_uppercase());
                lhs.eq(rhs)
            }
        }
    }
}

/// Reference table joining instruments to sector labels.
#[derive(Debug, Clone)]
pub struct SectorMap {
    entries: Vec<(String, String)>,
    strategy: JoinStrategy,
}

impl SectorMap {
    pub fn new(
        entries: Vec<(String, String)>,
        strategy: JoinStrategy,
    ) -> Result<Self, ValidationError> {
        if let JoinStrategy::Prefix(0) = strategy {
            return Err(ValidationError::ZeroPrefixLength);
        }
        Ok(Self { entries, strategy })
    }

    /// Load the reference table from a CSV with symbol and sector columns
    /// (matched case-insensitively).
    pub fn from_csv(path: &Path, strategy: JoinStrategy) -> Result<Self, LoadError> {
        let file = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<unnamed>")
            .to_owned();

        let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
            file: file.clone(),
            source,
        })?;
        let headers = reader.headers().map_err(|source| LoadError::Csv {
            file: file.clone(),
            source,
        })?;

        let symbol_index = position(headers, "symbol").ok_or(LoadError::MissingField {
            file: file.clone(),
            field: "symbol",
        })?;
        let sector_index = position(headers, "sector").ok_or(LoadError::MissingField {
            file: file.clone(),
            field: "sector",
        })?;

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| LoadError::Csv {
                file: file.clone(),
                source,
            })?;
            let symbol = record.get(symbol_index).unwrap_or_default().trim();
            let sector = record.get(sector_index).unwrap_or_default().trim();
            if symbol.is_empty() || sector.is_empty() {
                continue;
            }
            entries.push((symbol.to_ascii_uppercase(), sector.to_owned()));
        }

        Self::new(entries, strategy).map_err(LoadError::from)
    }

    /// Resolve an instrument to its sector label. The first matching
    /// reference row wins.
    pub fn resolve(&self, symbol: &Symbol) -> Option<&str> {
        self.entries
            .iter()
            .find(|(reference, _)| self.strategy.matches(reference, symbol.as_str()))
            .map(|(_, sector)| sector.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn position(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(strategy: JoinStrategy) -> SectorMap {
        SectorMap::new(
            vec![
                ("INFY".to_owned(), "IT".to_owned()),
                ("ICICIBANK".to_owned(), "Banking".to_owned()),
            ],
            strategy,
        )
        .expect("valid map")
    }

    #[test]
    fn exact_join_requires_full_symbol() {
        let map = map(JoinStrategy::ExactSymbol);
        let infy = Symbol::parse("INFY").expect("symbol");
        let unknown = Symbol::parse("IN").expect("symbol");

        assert_eq!(map.resolve(&infy), Some("IT"));
        assert_eq!(map.resolve(&unknown), None);
    }

    #[test]
    fn prefix_join_matches_leading_fragment() {
        let map = map(JoinStrategy::Prefix(2));
        let colliding = Symbol::parse("INDIGO").expect("symbol");

        // Collision by design of the legacy strategy: IN* matches INFY.
        assert_eq!(map.resolve(&colliding), Some("IT"));
    }

    #[test]
    fn zero_prefix_is_rejected() {
        let err = SectorMap::new(Vec::new(), JoinStrategy::Prefix(0)).expect_err("must fail");
        assert!(matches!(err, ValidationError::ZeroPrefixLength));
    }
}
