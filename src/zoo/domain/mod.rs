pub mod capacity;
pub mod evaluator;
pub mod query;
pub mod rules;
pub mod types;

pub use query::QueryError;
