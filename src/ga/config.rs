//! GA configuration.

/// Configuration for the GA runner.
///
/// # Examples
///
/// ```
/// use searchlab::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_max_generations(500)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population, fixed across
    /// generations. Must be at least 2.
    pub population_size: usize,

    /// Generation budget.
    pub max_generations: usize,

    /// Probability of mutating each offspring (0.0–1.0). A mutation
    /// reassigns one random gene to a random value.
    pub mutation_rate: f64,

    /// Tournament size: individuals sampled with replacement per parent
    /// selection. Must be at least 1.
    pub tournament_size: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.1,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }

    #[test]
    fn test_mutation_rate_is_clamped() {
        let config = GaConfig::default().with_mutation_rate(1.7);
        assert_eq!(config.mutation_rate, 1.0);
        assert!(config.validate().is_ok());
    }
}
