//! Configuration for precedence decisions.

use yaamod_torah::Region;

use crate::error::AliyaError;

/// Tunable inputs of the precedence engine.
///
/// # Example
///
/// ```
/// use yaamod_aliya::PrecedenceConfig;
/// use yaamod_torah::Region;
///
/// let config = PrecedenceConfig::new()
///     .with_last_aliya_gap_days(60)
///     .with_region(Region::israel());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceConfig {
    last_aliya_gap_days: i64,
    region: Region,
}

impl PrecedenceConfig {
    /// Creates a configuration with defaults: a 90-day gap, diaspora.
    pub fn new() -> Self {
        Self {
            last_aliya_gap_days: 90,
            region: Region::diaspora(),
        }
    }

    /// Sets the number of days after the last aliya beyond which a member
    /// is owed one.
    pub fn with_last_aliya_gap_days(mut self, days: i64) -> Self {
        self.last_aliya_gap_days = days;
        self
    }

    /// Sets the synagogue's region, which selects the weekly-portion
    /// rotation.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn last_aliya_gap_days(&self) -> i64 {
        self.last_aliya_gap_days
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), AliyaError> {
        if self.last_aliya_gap_days < 0 {
            return Err(AliyaError::InvalidConfig {
                reason: format!(
                    "last_aliya_gap_days must be non-negative, got {}",
                    self.last_aliya_gap_days
                ),
            });
        }
        self.region.validate()?;
        Ok(())
    }
}

impl Default for PrecedenceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PrecedenceConfig::default();
        assert_eq!(config.last_aliya_gap_days(), 90);
        assert_eq!(config.region(), Region::diaspora());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_gap_rejected() {
        let config = PrecedenceConfig::new().with_last_aliya_gap_days(-1);
        assert!(matches!(
            config.validate(),
            Err(AliyaError::InvalidConfig { .. })
        ));
    }
}
