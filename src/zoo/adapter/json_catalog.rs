//! Loads a catalog from a JSON document.
//!
//! ```json
//! {
//!   "species": [{"name": "leao", "size": 3, "biomes": ["savana"], "carnivore": true}],
//!   "enclosures": [{"id": 5, "biomes": ["savana"], "capacity": 9, "occupants": ["leao"]}]
//! }
//! ```

use serde_json::{json, Value};

use super::{static_catalog::StaticCatalog, CatalogError};
use crate::zoo::{
    domain::types::{Biome, BiomeSet, Enclosure, EnclosureId, SocialRule, Species},
    port::catalog::Catalog,
};

pub fn from_str(text: &str) -> Result<StaticCatalog, CatalogError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| CatalogError::InvalidJson(e.to_string()))?;
    from_json(&value)
}

pub fn from_json(val: &Value) -> Result<StaticCatalog, CatalogError> {
    let species = array_field(val, "species", "catalog")?
        .iter()
        .enumerate()
        .map(|(i, s)| species_from_json(s, &format!("species #{i}")))
        .collect::<Result<Vec<_>, _>>()?;

    let enclosures = array_field(val, "enclosures", "catalog")?
        .iter()
        .enumerate()
        .map(|(i, e)| enclosure_from_json(e, &format!("enclosure #{i}")))
        .collect::<Result<Vec<_>, _>>()?;

    StaticCatalog::new(species, enclosures)
}

pub fn to_json(catalog: &StaticCatalog) -> Value {
    let species: Vec<Value> = catalog
        .species()
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "size": s.size,
                "biomes": biomes_to_json(&s.biomes),
                "carnivore": s.carnivore,
                "social": s.social.tag(),
            })
        })
        .collect();

    let enclosures: Vec<Value> = catalog
        .list_enclosures()
        .iter()
        .map(|e| {
            json!({
                "id": e.id.id,
                "biomes": biomes_to_json(&e.biomes),
                "capacity": e.capacity,
                "occupants": e.occupants,
            })
        })
        .collect();

    json!({"species": species, "enclosures": enclosures})
}

fn species_from_json(val: &Value, context: &str) -> Result<Species, CatalogError> {
    let name = val["name"]
        .as_str()
        .ok_or_else(|| invalid("name", context))?
        .to_string();
    let context = format!("species `{name}`");

    let size = u32_field(val, "size", &context)?;
    let biomes = biomes_from_json(val, &context)?;

    let carnivore = match &val["carnivore"] {
        Value::Null => false,
        Value::Bool(b) => *b,
        _ => return Err(invalid("carnivore", &context)),
    };

    let social = match &val["social"] {
        Value::Null => SocialRule::default(),
        Value::String(tag) => SocialRule::from_tag(tag)
            .ok_or_else(|| CatalogError::UnknownSocialRule(tag.clone()))?,
        _ => return Err(invalid("social", &context)),
    };

    Ok(Species {
        name,
        size,
        biomes,
        carnivore,
        social,
    })
}

fn enclosure_from_json(val: &Value, context: &str) -> Result<Enclosure, CatalogError> {
    let id = EnclosureId {
        id: u32_field(val, "id", context)?,
    };
    let context = format!("enclosure {}", id.id);

    let capacity = u32_field(val, "capacity", &context)?;
    let biomes = biomes_from_json(val, &context)?;

    let occupants = match &val["occupants"] {
        Value::Null => vec![],
        Value::Array(entries) => entries
            .iter()
            .map(|o| {
                o.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid("occupants", &context))
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(invalid("occupants", &context)),
    };

    Ok(Enclosure {
        id,
        biomes,
        capacity,
        occupants,
    })
}

fn biomes_from_json(val: &Value, context: &str) -> Result<BiomeSet, CatalogError> {
    let tags = array_field(val, "biomes", context)?;
    let biomes = tags
        .iter()
        .map(|tag| {
            let tag = tag.as_str().ok_or_else(|| invalid("biomes", context))?;
            Biome::from_tag(tag).ok_or_else(|| CatalogError::UnknownBiome(tag.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BiomeSet::new(biomes))
}

fn biomes_to_json(biomes: &BiomeSet) -> Value {
    biomes.iter().map(Biome::tag).collect::<Vec<_>>().into()
}

fn array_field<'a>(
    val: &'a Value,
    field: &'static str,
    context: &str,
) -> Result<&'a Vec<Value>, CatalogError> {
    val[field].as_array().ok_or_else(|| invalid(field, context))
}

fn u32_field(val: &Value, field: &'static str, context: &str) -> Result<u32, CatalogError> {
    val[field]
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(field, context))
}

fn invalid(field: &'static str, context: &str) -> CatalogError {
    CatalogError::InvalidField {
        field,
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_small_catalog() {
        let catalog = from_str(
            r#"{
                "species": [
                    {"name": "crocodilo", "size": 3, "biomes": ["rio"], "carnivore": true},
                    {"name": "macaco", "size": 1, "biomes": ["savana", "floresta"],
                     "social": "never-solitary"}
                ],
                "enclosures": [
                    {"id": 4, "biomes": ["rio"], "capacity": 8},
                    {"id": 1, "biomes": ["savana"], "capacity": 10, "occupants": ["macaco"]}
                ]
            }"#,
        )
        .unwrap();

        let croc = catalog.find_species("Crocodilo").unwrap();
        assert!(croc.carnivore);
        assert_eq!(croc.social, SocialRule::Flexible);
        assert_eq!(
            catalog.find_species("macaco").unwrap().social,
            SocialRule::NeverSolitary
        );

        let enclosures = catalog.list_enclosures();
        assert_eq!(enclosures[0].id, EnclosureId { id: 4 });
        assert!(enclosures[0].occupants.is_empty());
        assert_eq!(enclosures[1].occupants, vec!["macaco".to_string()]);
    }

    #[test]
    fn default_zoo_survives_serialization() {
        let zoo = StaticCatalog::default_zoo();
        let reloaded = from_json(&to_json(&zoo)).unwrap();
        assert_eq!(reloaded, zoo);
    }

    #[test]
    fn rejects_broken_documents() {
        assert!(matches!(
            from_str("{not json"),
            Err(CatalogError::InvalidJson(_))
        ));
        assert_eq!(
            from_str(r#"{"species": []}"#),
            Err(CatalogError::InvalidField {
                field: "enclosures",
                context: "catalog".to_string()
            })
        );
        assert_eq!(
            from_str(
                r#"{"species": [{"name": "leao", "size": -3, "biomes": ["savana"]}],
                    "enclosures": []}"#
            ),
            Err(CatalogError::InvalidField {
                field: "size",
                context: "species `leao`".to_string()
            })
        );
        assert_eq!(
            from_str(
                r#"{"species": [{"name": "camelo", "size": 3, "biomes": ["deserto"]}],
                    "enclosures": []}"#
            ),
            Err(CatalogError::UnknownBiome("deserto".to_string()))
        );
        assert_eq!(
            from_str(
                r#"{"species": [{"name": "leao", "size": 3, "biomes": ["savana"],
                                 "social": "grumpy"}],
                    "enclosures": []}"#
            ),
            Err(CatalogError::UnknownSocialRule("grumpy".to_string()))
        );
        assert_eq!(
            from_str(
                r#"{"species": [],
                    "enclosures": [{"id": 1, "biomes": ["rio"], "capacity": 0}]}"#
            ),
            Err(CatalogError::NonPositiveCapacity(EnclosureId { id: 1 }))
        );
    }
}
