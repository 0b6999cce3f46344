use std::collections::HashSet;

use log::debug;

use super::CatalogError;
use crate::zoo::{
    domain::types::{self, Biome, BiomeSet, Enclosure, EnclosureId, SocialRule, Species},
    port::catalog::Catalog,
};

/// Catalog held entirely in memory, validated once when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    species: Vec<Species>,
    enclosures: Vec<Enclosure>,
}

impl StaticCatalog {
    pub fn new(species: Vec<Species>, enclosures: Vec<Enclosure>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for s in &species {
            if s.name.trim().is_empty() {
                return Err(CatalogError::EmptySpeciesName);
            }
            if !names.insert(s.name.to_lowercase()) {
                return Err(CatalogError::DuplicateSpecies(s.name.clone()));
            }
            if s.size == 0 {
                return Err(CatalogError::NonPositiveSize(s.name.clone()));
            }
            if s.biomes.is_empty() {
                return Err(CatalogError::EmptyBiomeSet(format!("species `{}`", s.name)));
            }
        }

        let mut ids = HashSet::new();
        for enclosure in &enclosures {
            if !ids.insert(enclosure.id) {
                return Err(CatalogError::DuplicateEnclosure(enclosure.id));
            }
            if enclosure.capacity == 0 {
                return Err(CatalogError::NonPositiveCapacity(enclosure.id));
            }
            if enclosure.biomes.is_empty() {
                return Err(CatalogError::EmptyBiomeSet(format!(
                    "enclosure {}",
                    enclosure.id.id
                )));
            }
        }

        debug!(
            "built catalog with {} species and {} enclosures",
            species.len(),
            enclosures.len()
        );

        Ok(Self {
            species,
            enclosures,
        })
    }

    /// The zoo's standing inventory.
    pub fn default_zoo() -> Self {
        fn species(
            name: &str,
            size: u32,
            biomes: BiomeSet,
            carnivore: bool,
            social: SocialRule,
        ) -> Species {
            Species {
                name: name.to_string(),
                size,
                biomes,
                carnivore,
                social,
            }
        }

        fn enclosure(id: u32, biomes: BiomeSet, capacity: u32, occupants: &[&str]) -> Enclosure {
            Enclosure {
                id: EnclosureId { id },
                biomes,
                capacity,
                occupants: occupants.iter().map(|o| o.to_string()).collect(),
            }
        }

        Self {
            species: vec![
                species("leao", 3, [Biome::Savanna].into(), true, SocialRule::Flexible),
                species("leopardo", 2, [Biome::Savanna].into(), true, SocialRule::Flexible),
                species("crocodilo", 3, [Biome::River].into(), true, SocialRule::Flexible),
                species(
                    "macaco",
                    1,
                    [Biome::Savanna, Biome::Forest].into(),
                    false,
                    SocialRule::NeverSolitary,
                ),
                species("gazela", 2, [Biome::Savanna].into(), false, SocialRule::Flexible),
                species(
                    "hipopotamo",
                    4,
                    [Biome::Savanna, Biome::River].into(),
                    false,
                    SocialRule::CommunalWater,
                ),
            ],
            enclosures: vec![
                enclosure(1, [Biome::Savanna].into(), 10, &["macaco", "macaco", "macaco"]),
                enclosure(2, [Biome::Forest].into(), 5, &[]),
                enclosure(3, BiomeSet::savanna_and_river(), 7, &["gazela"]),
                enclosure(4, [Biome::River].into(), 8, &[]),
                enclosure(5, [Biome::Savanna].into(), 9, &["leao"]),
            ],
        }
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }
}

impl Catalog for StaticCatalog {
    fn find_species(&self, name: &str) -> Option<&types::Species> {
        self.species.iter().find(|s| s.is_named(name))
    }

    fn list_enclosures(&self) -> &[types::Enclosure] {
        &self.enclosures
    }
}
