//! This module contains the city and tour model of the problem.

mod city;
pub use self::city::*;

mod tour;
pub use self::tour::*;
