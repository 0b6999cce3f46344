use super::{
    rules::has_multiple_species,
    types::{Enclosure, Space, Species},
};
use crate::zoo::port::catalog::Catalog;

/// Extra room consumed by housing several species together.
pub const SHARED_SPACE_OVERHEAD: Space = 1;

/// Sum of occupant body sizes. Unresolved occupants take no space.
pub fn occupied_space(catalog: &impl Catalog, enclosure: &Enclosure) -> Space {
    enclosure
        .occupants
        .iter()
        .filter_map(|name| catalog.find_species(name))
        .map(|species| Space::from(species.size))
        .sum()
}

/// Room left for `requested`, before any new individuals are placed.
///
/// An enclosure that already mixes species charges the shared-space overhead
/// once when the requested species would be a newcomer.
pub fn available_space(
    catalog: &impl Catalog,
    enclosure: &Enclosure,
    requested: &Species,
) -> Space {
    let mut available = Space::from(enclosure.capacity) - occupied_space(catalog, enclosure);

    let already_present = enclosure.occupants.iter().any(|name| requested.is_named(name));
    if has_multiple_species(enclosure) && !already_present {
        available -= SHARED_SPACE_OVERHEAD;
    }

    available
}

/// Space taken by `quantity` individuals of `species`.
///
/// Saturates at `Space::MAX`, which no enclosure can offer.
pub fn required_space(species: &Species, quantity: u32) -> Space {
    Space::from(species.size).saturating_mul(Space::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo::{
        adapter::static_catalog::StaticCatalog,
        domain::types::{Biome, EnclosureId, SocialRule},
    };

    fn pen(capacity: u32, occupants: &[&str]) -> Enclosure {
        Enclosure {
            id: EnclosureId { id: 9 },
            biomes: [Biome::Savanna].into(),
            capacity,
            occupants: occupants.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn occupied_space_sums_known_sizes() {
        let zoo = StaticCatalog::default_zoo();
        assert_eq!(occupied_space(&zoo, &pen(10, &[])), 0);
        assert_eq!(occupied_space(&zoo, &pen(10, &["macaco", "macaco", "macaco"])), 3);
        assert_eq!(occupied_space(&zoo, &pen(10, &["gazela", "hipopotamo"])), 6);
        assert_eq!(occupied_space(&zoo, &pen(10, &["gazela", "dragao"])), 2);
    }

    #[test]
    fn overhead_applies_to_newcomers_in_mixed_enclosures() {
        let zoo = StaticCatalog::default_zoo();
        let gazelle = zoo.find_species("gazela").unwrap();
        let monkey = zoo.find_species("macaco").unwrap();
        let hippo = zoo.find_species("hipopotamo").unwrap();

        let mixed = pen(10, &["macaco", "gazela"]);
        assert_eq!(available_space(&zoo, &mixed, gazelle), 7);
        assert_eq!(available_space(&zoo, &mixed, monkey), 7);
        assert_eq!(available_space(&zoo, &mixed, hippo), 6);

        // A single resident species never triggers the overhead.
        let single = pen(10, &["gazela"]);
        assert_eq!(available_space(&zoo, &single, monkey), 8);
    }

    #[test]
    fn overfull_enclosures_report_negative_room() {
        let zoo = StaticCatalog::default_zoo();
        let hippo = zoo.find_species("hipopotamo").unwrap();
        assert_eq!(available_space(&zoo, &pen(5, &["hipopotamo", "hipopotamo"]), hippo), -3);
    }

    #[test]
    fn required_space_scales_with_quantity() {
        let zoo = StaticCatalog::default_zoo();
        let lion = zoo.find_species("leao").unwrap();
        assert_eq!(required_space(lion, 1), 3);
        assert_eq!(required_space(lion, 4), 12);
        assert_eq!(required_space(lion, u32::MAX), 3 * Space::from(u32::MAX));
    }

    #[test]
    fn required_space_saturates_for_huge_animals() {
        let whale = Species {
            name: "baleia".to_string(),
            size: u32::MAX,
            biomes: [Biome::River].into(),
            carnivore: false,
            social: SocialRule::Flexible,
        };
        assert_eq!(required_space(&whale, u32::MAX), Space::MAX);
        assert_eq!(required_space(&whale, 2), 2 * Space::from(u32::MAX));
    }
}
