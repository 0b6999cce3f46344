//! Finds the zoo enclosures that can take a number of animals of one species.

pub mod zoo;
