//! This module contains stateless genetic operators which produce new tours from
//! existing ones.

mod construction;
pub use self::construction::*;

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;
