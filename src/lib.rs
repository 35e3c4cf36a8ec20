//! This crate provides a genetic algorithm engine which approximates solutions to the
//! Traveling Salesman Problem: given cities in the Euclidean plane, it searches for a
//! closed visiting order with minimal total tour length.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod evolution;
pub mod model;
pub mod operators;
pub mod population;
pub mod prelude;
pub mod search;
pub mod termination;
pub mod utils;
