//! Hill-climbing configuration.

/// Configuration for the hill-climbing runner.
///
/// # Examples
///
/// ```
/// use searchlab::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_steps(500).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HcConfig {
    /// Hard cap on accepted moves. 0 = unbounded; termination is then
    /// guaranteed by the strict-improvement rule alone.
    pub max_steps: usize,

    /// Random seed for the initial state. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_steps: 0,
            seed: None,
        }
    }
}

impl HcConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. Present for parity with the other
    /// engines; every `HcConfig` is currently valid.
    pub fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
