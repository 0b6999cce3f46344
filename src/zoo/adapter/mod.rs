pub mod json_catalog;
pub mod static_catalog;

use thiserror::Error;

use super::domain::types::EnclosureId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("missing or invalid field `{field}` in {context}")]
    InvalidField { field: &'static str, context: String },

    #[error("unknown biome `{0}`")]
    UnknownBiome(String),

    #[error("unknown social rule `{0}`")]
    UnknownSocialRule(String),

    #[error("species name cannot be empty")]
    EmptySpeciesName,

    #[error("duplicate species `{0}`")]
    DuplicateSpecies(String),

    #[error("duplicate enclosure {}", .0.id)]
    DuplicateEnclosure(EnclosureId),

    #[error("species `{0}` must have a positive size")]
    NonPositiveSize(String),

    #[error("enclosure {} must have a positive capacity", .0.id)]
    NonPositiveCapacity(EnclosureId),

    #[error("{0} must declare at least one biome")]
    EmptyBiomeSet(String),
}
