use super::{
    env::Env,
    error::{Error, Result},
    generator::NullPolicy,
};

pub const NULL_PROBABILITY_VAR: &str = "SUPPORTGEN_NULL_PROBABILITY";
pub const SEED_VAR: &str = "SUPPORTGEN_SEED";

/// Probability that a nullable field comes out as `null`.
pub const DEFAULT_NULL_PROBABILITY: f64 = 0.5;

/// Generator settings.
///
/// The command line only takes a record count, so everything else is read
/// from the environment (a `.env` file is loaded by the binaries first).
///
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Chance, in [0.0, 1.0], that each nullable field is `null`.
    pub null_probability: f64,

    /// Seed for a reproducible record stream. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            null_probability: DEFAULT_NULL_PROBABILITY,
            seed: None,
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults for
    /// unset variables. Set but malformed variables are errors.
    ///
    pub fn from_env(env: &Env) -> Result<Self> {
        let mut settings = Self::default();

        if let Ok(raw) = env.var(NULL_PROBABILITY_VAR) {
            let probability = raw.trim().parse::<f64>().map_err(|e| Error::InvalidConfig {
                var: NULL_PROBABILITY_VAR,
                reason: e.to_string(),
            })?;
            settings = settings.with_null_probability(probability)?;
        }

        if let Ok(raw) = env.var(SEED_VAR) {
            let seed = raw.trim().parse::<u64>().map_err(|e| Error::InvalidConfig {
                var: SEED_VAR,
                reason: e.to_string(),
            })?;
            settings.seed = Some(seed);
        }

        Ok(settings)
    }

    pub fn with_null_probability(mut self, probability: f64) -> Result<Self> {
        self.null_probability = NullPolicy::new(probability)?.null_probability();
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_when_unset() {
        let env = Env::mock(Vec::<(String, String)>::new());
        assert_eq!(Settings::from_env(&env).unwrap(), Settings::default());
    }

    #[test]
    fn test_reads_probability_and_seed() {
        let env = Env::mock([(NULL_PROBABILITY_VAR, " 0.25 "), (SEED_VAR, "42")]);
        let settings = Settings::from_env(&env).unwrap();
        assert_eq!(
            settings,
            Settings {
                null_probability: 0.25,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let env = Env::mock([(NULL_PROBABILITY_VAR, "1.5")]);
        let err = Settings::from_env(&env).unwrap_err();
        assert!(err.to_string().contains(NULL_PROBABILITY_VAR));
    }

    #[test]
    fn test_probability_check_matches_null_policy() {
        let from_settings = Settings::default().with_null_probability(2.0).unwrap_err();
        let from_policy = NullPolicy::new(2.0).unwrap_err();
        assert_eq!(from_settings.to_string(), from_policy.to_string());
    }

    #[test]
    fn test_rejects_nan_probability() {
        assert!(Settings::default().with_null_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_malformed_seed() {
        let env = Env::mock([(SEED_VAR, "-3")]);
        let err = Settings::from_env(&env).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { var: SEED_VAR, .. }));
    }
}
