use crate::zoo::domain::types;

/// Read-only reference data the evaluation runs against.
pub trait Catalog: Sync {
    /// Looks up a species by name, ignoring case.
    fn find_species(&self, name: &str) -> Option<&types::Species>;

    /// All enclosures in catalog order.
    fn list_enclosures(&self) -> &[types::Enclosure];
}
