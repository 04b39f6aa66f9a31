#![forbid(unsafe_code)]

//! Lookup capability and the built-in static catalog.
//!
//! The control searches records through [`LookupProvider`], so the simulated
//! in-memory catalog can be swapped for a real backend without touching
//! control logic.

/// One searchable record: a stable id plus a display name.
///
/// Identity is `id`; `name` is display-only and never used for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupItem {
    /// Stable identifier, the token persisted in the raw value.
    pub id: String,
    /// Human-readable name shown on the chip.
    pub name: String,
}

impl LookupItem {
    /// Create a record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Where the control finds records.
pub trait LookupProvider {
    /// Find the record for a search query.
    ///
    /// The contract is a case-insensitive prefix match on the display name,
    /// returning the first hit in the provider's declaration order. The
    /// control never passes an empty query.
    fn search(&self, query: &str) -> Option<LookupItem>;

    /// Resolve a previously stored id back to its record.
    ///
    /// Used when the host hands the control an externally changed raw value
    /// and the chips must be rebuilt. Providers that cannot resolve may keep
    /// the default; unresolved tokens are then displayed verbatim.
    fn resolve(&self, id: &str) -> Option<LookupItem> {
        let _ = id;
        None
    }
}

/// Fixed in-memory catalog standing in for a real lookup service.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<LookupItem>,
}

impl StaticCatalog {
    /// Create a catalog over the given records. Search order is the order
    /// given here.
    #[must_use]
    pub fn new(entries: Vec<LookupItem>) -> Self {
        Self { entries }
    }

    /// The four-record sample dataset.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            LookupItem::new("1", "Contoso"),
            LookupItem::new("2", "Fabrikam"),
            LookupItem::new("3", "Adventure Works"),
            LookupItem::new("4", "Northwind"),
        ])
    }

    /// The catalog's records, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[LookupItem] {
        &self.entries
    }
}

impl LookupProvider for StaticCatalog {
    fn search(&self, query: &str) -> Option<LookupItem> {
        let term = query.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase().starts_with(&term))
            .cloned()
    }

    fn resolve(&self, id: &str) -> Option<LookupItem> {
        self.entries.iter().find(|entry| entry.id == id).cloned()
    }
}
