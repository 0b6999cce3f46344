//! Enclosure planning for the zoo.
//!
//! The domain is independent of where the catalog comes from: it only sees the
//! [`Catalog`](port::catalog::Catalog) port, which the adapters implement.

pub mod adapter;
pub mod domain;
pub mod port;

use std::fmt;

use serde_json::{json, Value};

use self::{
    domain::{query, QueryError},
    port::catalog::Catalog,
};

/// Outcome of one placement request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Viable(Vec<String>),
    Failed(QueryError),
}

/// Analyzes a request whose quantity arrives as text.
pub fn analyze(catalog: &impl Catalog, species: &str, quantity: &str) -> Analysis {
    query::query_text(catalog, species, quantity).into()
}

/// Answers a JSON request of the form `{"animal": "MACACO", "quantidade": 2}`.
pub fn analyze_json(catalog: &impl Catalog, request: &Value) -> Analysis {
    let Some(species) = request["animal"].as_str() else {
        return Analysis::Failed(QueryError::InvalidSpecies);
    };

    let quantity = match &request["quantidade"] {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Still goes through `analyze` so an unknown species wins.
        _ => String::new(),
    };

    analyze(catalog, species, &quantity)
}

impl From<Result<Vec<String>, QueryError>> for Analysis {
    fn from(result: Result<Vec<String>, QueryError>) -> Self {
        match result {
            Ok(enclosures) => Analysis::Viable(enclosures),
            Err(e) => Analysis::Failed(e),
        }
    }
}

impl Analysis {
    pub fn is_viable(&self) -> bool {
        matches!(self, Analysis::Viable(_))
    }

    pub fn to_json(&self) -> Value {
        match self {
            Analysis::Viable(enclosures) => json!({"recintosViaveis": enclosures}),
            Analysis::Failed(e) => json!({"erro": e.to_string()}),
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Viable(enclosures) => write!(f, "{}", enclosures.join("\n")),
            Analysis::Failed(e) => write!(f, "{e}"),
        }
    }
}
