//! Decides whether one enclosure can take a requested placement.
//!
//! The checks run in a fixed order and stop at the first failure, which is
//! reported as a [`Rejection`].

use log::debug;
use thiserror::Error;

use super::{
    capacity::{available_space, required_space},
    rules::{biome_compatible, has_carnivore},
    types::{BiomeSet, Enclosure, SocialRule, Space, Species, SpeciesName},
};
use crate::zoo::port::catalog::Catalog;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Rejection {
    #[error("no shared biome")]
    BiomeMismatch,

    #[error("needs {required} units of space, {available} available")]
    InsufficientSpace { available: Space, required: Space },

    #[error("a carnivore already lives here")]
    CarnivoreOccupant,

    #[error("carnivores only live with their own species")]
    CarnivoreNeedsOwnSpecies,

    #[error("only shares an enclosure in savanna and river")]
    CommunalWaterBiome,

    #[error("cannot be placed alone")]
    NeverSolitary,

    #[error("occupant `{name}` is not in the catalog")]
    UnknownOccupant { name: SpeciesName },

    #[error("occupant `{name}` would no longer be comfortable")]
    OccupantUncomfortable { name: SpeciesName },
}

pub fn evaluate(
    catalog: &impl Catalog,
    enclosure: &Enclosure,
    species: &Species,
    quantity: u32,
) -> Result<(), Rejection> {
    if !biome_compatible(species, enclosure) {
        return Err(Rejection::BiomeMismatch);
    }

    let available = available_space(catalog, enclosure, species);
    let required = required_space(species, quantity);
    if available < required {
        return Err(Rejection::InsufficientSpace {
            available,
            required,
        });
    }

    if has_carnivore(catalog, enclosure) && !species.carnivore {
        return Err(Rejection::CarnivoreOccupant);
    }
    if species.carnivore && enclosure.occupants.iter().any(|o| !species.is_named(o)) {
        return Err(Rejection::CarnivoreNeedsOwnSpecies);
    }

    match species.social {
        SocialRule::CommunalWater
            if !enclosure.is_empty() && enclosure.biomes != BiomeSet::savanna_and_river() =>
        {
            return Err(Rejection::CommunalWaterBiome);
        }
        SocialRule::NeverSolitary if enclosure.is_empty() => {
            return Err(Rejection::NeverSolitary);
        }
        _ => {}
    }

    // Residents are measured against the room left before the newcomers move in.
    for name in &enclosure.occupants {
        let Some(resident) = catalog.find_species(name) else {
            return Err(Rejection::UnknownOccupant { name: name.clone() });
        };
        if !biome_compatible(resident, enclosure) || available < Space::from(resident.size) {
            return Err(Rejection::OccupantUncomfortable { name: name.clone() });
        }
    }

    Ok(())
}

pub fn is_viable(
    catalog: &impl Catalog,
    enclosure: &Enclosure,
    species: &Species,
    quantity: u32,
) -> bool {
    match evaluate(catalog, enclosure, species, quantity) {
        Ok(()) => true,
        Err(rejection) => {
            debug!(
                "enclosure {} rejected for {quantity} x {}: {rejection}",
                enclosure.id.id, species.name
            );
            false
        }
    }
}

/// Free space left after the placement.
pub fn free_space_after(
    catalog: &impl Catalog,
    enclosure: &Enclosure,
    species: &Species,
    quantity: u32,
) -> Space {
    available_space(catalog, enclosure, species).saturating_sub(required_space(species, quantity))
}

pub fn format(
    catalog: &impl Catalog,
    enclosure: &Enclosure,
    species: &Species,
    quantity: u32,
) -> String {
    format!(
        "Recinto {} (espaço livre: {} total: {})",
        enclosure.id.id,
        free_space_after(catalog, enclosure, species, quantity),
        enclosure.capacity
    )
}
