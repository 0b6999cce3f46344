//! Compatibility predicates over a species and an enclosure.
//!
//! Occupants that don't resolve against the catalog count as non-carnivorous
//! here; the evaluator's comfort check is what rejects them.

use std::collections::HashSet;

use super::types::{Enclosure, Species};
use crate::zoo::port::catalog::Catalog;

pub fn has_multiple_species(enclosure: &Enclosure) -> bool {
    let distinct: HashSet<String> = enclosure
        .occupants
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    distinct.len() > 1
}

pub fn has_carnivore(catalog: &impl Catalog, enclosure: &Enclosure) -> bool {
    enclosure
        .occupants
        .iter()
        .filter_map(|name| catalog.find_species(name))
        .any(|species| species.carnivore)
}

pub fn biome_compatible(species: &Species, enclosure: &Enclosure) -> bool {
    species.biomes.intersects(&enclosure.biomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo::adapter::static_catalog::StaticCatalog;
    use crate::zoo::domain::types::{Biome, EnclosureId};

    fn savanna_pen(occupants: &[&str]) -> Enclosure {
        Enclosure {
            id: EnclosureId { id: 1 },
            biomes: [Biome::Savanna].into(),
            capacity: 10,
            occupants: occupants.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn multiple_species_counts_distinct_names() {
        assert!(!has_multiple_species(&savanna_pen(&[])));
        assert!(!has_multiple_species(&savanna_pen(&["macaco", "macaco"])));
        assert!(!has_multiple_species(&savanna_pen(&["macaco", "MACACO"])));
        assert!(has_multiple_species(&savanna_pen(&["macaco", "gazela"])));
    }

    #[test]
    fn carnivore_detection_skips_unknown_occupants() {
        let zoo = StaticCatalog::default_zoo();
        assert!(has_carnivore(&zoo, &savanna_pen(&["gazela", "leao"])));
        assert!(!has_carnivore(&zoo, &savanna_pen(&["gazela", "macaco"])));
        assert!(!has_carnivore(&zoo, &savanna_pen(&["dragao"])));
    }

    #[test]
    fn biome_compatibility_needs_one_shared_tag() {
        let zoo = StaticCatalog::default_zoo();
        let hippo = zoo.find_species("hipopotamo").unwrap();
        let croc = zoo.find_species("crocodilo").unwrap();
        let monkey = zoo.find_species("macaco").unwrap();

        let pen = savanna_pen(&[]);
        assert!(biome_compatible(hippo, &pen));
        assert!(!biome_compatible(croc, &pen));
        assert!(biome_compatible(monkey, &pen));

        let river = Enclosure {
            biomes: [Biome::River].into(),
            ..savanna_pen(&[])
        };
        assert!(biome_compatible(croc, &river));
        assert!(!biome_compatible(monkey, &river));
    }
}
