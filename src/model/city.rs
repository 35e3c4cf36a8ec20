use crate::utils::Float;
use std::hash::{Hash, Hasher};

/// A city in the Euclidean plane. Created once at load time and never mutated,
/// its identity is defined by the `id` field alone.
#[derive(Clone, Debug)]
pub struct City {
    /// A unique city identifier.
    pub id: String,
    /// An x-coordinate.
    pub x: Float,
    /// An y-coordinate.
    pub y: Float,
}

impl City {
    /// Creates a new instance of `City`.
    pub fn new(id: &str, x: Float, y: Float) -> Self {
        Self { id: id.to_string(), x, y }
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// Returns the Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> Float {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
