//! SA configuration.

/// Configuration for the Simulated Annealing runner.
///
/// Cooling is geometric: `T ← T × cooling_rate` after every iteration,
/// whether or not the move was accepted.
///
/// # Examples
///
/// ```
/// use searchlab::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.999)
///     .with_target_cost(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The run stops when T drops below this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Stop as soon as the current cost is at or below this value.
    /// `None` runs until the temperature floor.
    pub target_cost: Option<f64>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            cooling_rate: 0.999,
            target_cost: None,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_target_cost(mut self, cost: f64) -> Self {
        self.target_cost = Some(cost);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
