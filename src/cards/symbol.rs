//! Card symbols and symbol pools.
//!
//! A `SymbolId` is an opaque reference (typically an image file name) that
//! tells card pairs apart. The engine never interprets it beyond equality.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Number of images in the stock pool.
pub const IMAGE_SYMBOL_COUNT: usize = 18;

/// Opaque symbol identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub String);

impl SymbolId {
    /// Create a symbol from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of symbols a board may draw from.
///
/// Duplicates are removed on construction, keeping first-seen order so that
/// seeded deals stay reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPool {
    symbols: Vec<SymbolId>,
}

impl SymbolPool {
    /// Build a pool from symbols, dropping repeats.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SymbolId>,
    {
        let mut seen = FxHashSet::default();
        let symbols = symbols
            .into_iter()
            .map(Into::into)
            .filter(|s: &SymbolId| seen.insert(s.clone()))
            .collect();
        Self { symbols }
    }

    /// The stock image pool: `1.png` through `18.png`.
    ///
    /// Enough for the largest default board (6x6 = 18 pairs).
    #[must_use]
    pub fn images() -> Self {
        Self::new((1..=IMAGE_SYMBOL_COUNT).map(|i| SymbolId(format!("{i}.png"))))
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The distinct symbols in insertion order.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::images()
    }
}

impl From<SymbolId> for String {
    fn from(symbol: SymbolId) -> Self {
        symbol.0
    }
}

impl From<String> for SymbolId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
