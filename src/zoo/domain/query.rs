use log::info;
use regex::Regex;
use thiserror::Error;

use super::{
    evaluator::{format, is_viable},
    types::Species,
};
use crate::zoo::port::catalog::Catalog;

lazy_static::lazy_static! {
    static ref DECIMAL: Regex =
        Regex::new(r"^\s*([+-]?)(\d+)(?:\.(\d*))?(?:[eE]([+-]?\d+))?\s*$").unwrap();
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum QueryError {
    #[error("Animal inválido")]
    InvalidSpecies,
    #[error("Quantidade inválida")]
    InvalidQuantity,
    #[error("Não há recinto viável")]
    NoViableEnclosure,
}

pub fn query(
    catalog: &impl Catalog,
    species_name: &str,
    quantity: i64,
) -> Result<Vec<String>, QueryError> {
    let species = find_species(catalog, species_name)?;
    place(catalog, species, quantity)
}

/// Like [`query`], with the quantity still in its textual form.
///
/// The species is validated before the quantity is parsed.
pub fn query_text(
    catalog: &impl Catalog,
    species_name: &str,
    quantity: &str,
) -> Result<Vec<String>, QueryError> {
    let species = find_species(catalog, species_name)?;
    let quantity = parse_quantity(quantity)?;
    place(catalog, species, quantity)
}

/// Parses an integral quantity written as a decimal number.
///
/// Only the value matters: `"2.0"` and `"0.2e1"` are 2, `"1e2"` is 100, while
/// `"2.5"` and `"1e-1"` are rejected.
pub fn parse_quantity(text: &str) -> Result<i64, QueryError> {
    let captures = DECIMAL.captures(text).ok_or(QueryError::InvalidQuantity)?;
    let fraction = captures.get(3).map_or("", |m| m.as_str());
    let exponent: i64 = match captures.get(4) {
        Some(m) => m.as_str().parse().map_err(|_| QueryError::InvalidQuantity)?,
        None => 0,
    };

    let digits = format!("{}{fraction}", &captures[2]);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }

    // Power of ten applied to `significant`.
    let shift = exponent.saturating_sub(fraction.len() as i64);
    let whole = if shift >= 0 {
        // Anything longer overflows i64 anyway.
        if shift > 19 {
            return Err(QueryError::InvalidQuantity);
        }
        format!("{significant}{}", "0".repeat(shift as usize))
    } else {
        let cut = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
        if cut >= significant.len() {
            return Err(QueryError::InvalidQuantity);
        }
        let (whole, dropped) = significant.split_at(significant.len() - cut);
        if dropped.bytes().any(|b| b != b'0') {
            return Err(QueryError::InvalidQuantity);
        }
        whole.to_string()
    };

    format!("{}{whole}", &captures[1])
        .parse()
        .map_err(|_| QueryError::InvalidQuantity)
}

fn find_species<'a>(
    catalog: &'a impl Catalog,
    species_name: &str,
) -> Result<&'a Species, QueryError> {
    catalog
        .find_species(species_name)
        .ok_or(QueryError::InvalidSpecies)
}

fn place(
    catalog: &impl Catalog,
    species: &Species,
    quantity: i64,
) -> Result<Vec<String>, QueryError> {
    if quantity <= 0 {
        return Err(QueryError::InvalidQuantity);
    }

    // More individuals than any enclosure has units of space.
    let Ok(quantity) = u32::try_from(quantity) else {
        info!("{quantity} x {} exceeds every enclosure", species.name);
        return Err(QueryError::NoViableEnclosure);
    };

    let viable: Vec<String> = catalog
        .list_enclosures()
        .iter()
        .filter(|enclosure| is_viable(catalog, enclosure, species, quantity))
        .map(|enclosure| format(catalog, enclosure, species, quantity))
        .collect();

    info!(
        "{quantity} x {}: {} of {} enclosures viable",
        species.name,
        viable.len(),
        catalog.list_enclosures().len()
    );

    if viable.is_empty() {
        Err(QueryError::NoViableEnclosure)
    } else {
        Ok(viable)
    }
}
