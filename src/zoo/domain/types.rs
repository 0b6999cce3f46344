use std::{collections::BTreeSet, fmt};

#[cfg(test)]
use proptest_derive::Arbitrary;

pub type SpeciesName = String;

/// Space units, signed so that an over-full enclosure reports negative room.
pub type Space = i64;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct EnclosureId {
    pub id: u32,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Biome {
    Savanna,
    River,
    Forest,
}

impl Biome {
    pub const ALL: [Biome; 3] = [Biome::Savanna, Biome::River, Biome::Forest];

    pub fn tag(&self) -> &'static str {
        match self {
            Biome::Savanna => "savana",
            Biome::River => "rio",
            Biome::Forest => "floresta",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        Self::ALL.into_iter().find(|biome| biome.tag() == tag)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default, Hash)]
pub struct BiomeSet(BTreeSet<Biome>);

impl BiomeSet {
    pub fn new(biomes: impl IntoIterator<Item = Biome>) -> Self {
        Self(biomes.into_iter().collect())
    }

    /// The combined savanna-and-river habitat.
    pub fn savanna_and_river() -> Self {
        Self::new([Biome::Savanna, Biome::River])
    }

    pub fn intersects(&self, other: &BiomeSet) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Biome> {
        self.0.iter()
    }
}

impl<const N: usize> From<[Biome; N]> for BiomeSet {
    fn from(biomes: [Biome; N]) -> Self {
        Self::new(biomes)
    }
}

impl fmt::Display for BiomeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.0.iter().map(Biome::tag).collect();
        write!(f, "{}", tags.join(" e "))
    }
}

/// Placement constraints tied to a particular species.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum SocialRule {
    #[default]
    Flexible,
    /// Shares an enclosure with others only in a savanna-and-river habitat.
    CommunalWater,
    /// Never placed into an empty enclosure.
    NeverSolitary,
}

impl SocialRule {
    pub fn tag(&self) -> &'static str {
        match self {
            SocialRule::Flexible => "flexible",
            SocialRule::CommunalWater => "communal-water",
            SocialRule::NeverSolitary => "never-solitary",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            SocialRule::Flexible,
            SocialRule::CommunalWater,
            SocialRule::NeverSolitary,
        ]
        .into_iter()
        .find(|rule| rule.tag() == tag)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Species {
    pub name: SpeciesName,
    pub size: u32,
    pub biomes: BiomeSet,
    pub carnivore: bool,
    pub social: SocialRule,
}

impl Species {
    /// Case-insensitive identity check against an occupant entry.
    pub fn is_named(&self, name: &str) -> bool {
        same_species(&self.name, name)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Enclosure {
    pub id: EnclosureId,
    pub biomes: BiomeSet,
    pub capacity: u32,
    pub occupants: Vec<SpeciesName>,
}

impl Enclosure {
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

pub fn same_species(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
