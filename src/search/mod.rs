//! This module contains local search refinement for tours.

mod two_opt;
pub use self::two_opt::*;
