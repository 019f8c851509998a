use crate::config::AlgorithmConfig;
use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by list algorithms.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,

    /// Algorithm settings.
    pub config: AlgorithmConfig,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger, config: AlgorithmConfig) -> Self {
        Self { random, logger, config }
    }

    /// Returns a copy of environment with the given configuration.
    pub fn with_config(self, config: AlgorithmConfig) -> Self {
        Self { config, ..self }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            Arc::new(DefaultRandom::default()),
            Arc::new(|msg: &str| println!("{msg}")),
            AlgorithmConfig::default(),
        )
    }
}
