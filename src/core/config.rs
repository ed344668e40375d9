use serde::{Deserialize, Serialize};

/// What to do when a reference seed contains no digits at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySeedPolicy {
    /// Substitute the current Unix time in milliseconds as the base number.
    ///
    /// The resulting reference can no longer be traced back to the seed.
    #[default]
    Timestamp,
    /// Fail with [`ReferenceError::NoDigits`](super::ReferenceError::NoDigits).
    Reject,
}

/// Configuration for creditor reference generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Behaviour for seeds without digits.
    pub empty_seed: EmptySeedPolicy,
    /// Reject base numbers longer than 21 digits (25-character ISO 11649 limit).
    pub enforce_max_length: bool,
}

impl ReferenceConfig {
    /// Reject digit-less seeds and over-long bases.
    pub fn strict() -> Self {
        Self {
            empty_seed: EmptySeedPolicy::Reject,
            enforce_max_length: true,
        }
    }
}

/// Builder for [`ReferenceConfig`].
///
/// # Example
///
/// ```
/// use maksu::core::{EmptySeedPolicy, ReferenceConfigBuilder};
///
/// let config = ReferenceConfigBuilder::new()
///     .empty_seed(EmptySeedPolicy::Reject)
///     .enforce_max_length(true)
///     .build();
/// assert_eq!(config.empty_seed, EmptySeedPolicy::Reject);
/// ```
#[derive(Debug, Default)]
pub struct ReferenceConfigBuilder {
    config: ReferenceConfig,
}

impl ReferenceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty_seed(mut self, policy: EmptySeedPolicy) -> Self {
        self.config.empty_seed = policy;
        self
    }

    pub fn enforce_max_length(mut self, enforce: bool) -> Self {
        self.config.enforce_max_length = enforce;
        self
    }

    pub fn build(self) -> ReferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        let config = ReferenceConfig::default();
        assert_eq!(config.empty_seed, EmptySeedPolicy::Timestamp);
        assert!(!config.enforce_max_length);
    }

    #[test]
    fn strict_preset() {
        let config = ReferenceConfig::strict();
        assert_eq!(config.empty_seed, EmptySeedPolicy::Reject);
        assert!(config.enforce_max_length);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ReferenceConfig = serde_json::from_str(r#"{"empty_seed":"reject"}"#).unwrap();
        assert_eq!(config.empty_seed, EmptySeedPolicy::Reject);
        assert!(!config.enforce_max_length);
    }
}
