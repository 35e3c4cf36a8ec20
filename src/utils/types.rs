/// Alias to a scalar floating type used for coordinates and tour lengths.
pub type Float = f64;
