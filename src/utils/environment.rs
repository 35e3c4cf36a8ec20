use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes a string message.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environmental parameters shared within one evolution run.
#[derive(Clone)]
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A logger which reports evolution progress.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
