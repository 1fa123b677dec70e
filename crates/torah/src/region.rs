//! Regional reading custom of a synagogue.

use crate::error::TorahError;

/// Where a synagogue reads: the diaspora, Israel, or Jerusalem.
///
/// Israel keeps one festival day where the diaspora keeps two, and
/// Jerusalem reads for Purim on 15 Adar (Shushan Purim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    israel: bool,
    jerusalem: bool,
}

impl Region {
    /// Creates a region from the two synagogue flags.
    ///
    /// # Errors
    ///
    /// Returns [`TorahError::JerusalemOutsideIsrael`] if `jerusalem` is set
    /// without `israel`.
    pub fn new(israel: bool, jerusalem: bool) -> Result<Self, TorahError> {
        let region = Self { israel, jerusalem };
        region.validate()?;
        Ok(region)
    }

    /// Outside the land of Israel.
    pub fn diaspora() -> Self {
        Self {
            israel: false,
            jerusalem: false,
        }
    }

    /// In Israel, outside Jerusalem.
    pub fn israel() -> Self {
        Self {
            israel: true,
            jerusalem: false,
        }
    }

    /// In Jerusalem.
    pub fn jerusalem() -> Self {
        Self {
            israel: true,
            jerusalem: true,
        }
    }

    /// Returns true for Israel (including Jerusalem).
    pub fn in_israel(&self) -> bool {
        self.israel
    }

    /// Returns true for Jerusalem.
    pub fn in_jerusalem(&self) -> bool {
        self.jerusalem
    }

    /// Validates the flag combination.
    pub fn validate(&self) -> Result<(), TorahError> {
        if self.jerusalem && !self.israel {
            return Err(TorahError::JerusalemOutsideIsrael);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_diaspora() {
        assert_eq!(Region::default(), Region::diaspora());
        assert!(!Region::default().in_israel());
    }

    #[test]
    fn constructors() {
        assert!(Region::israel().in_israel());
        assert!(!Region::israel().in_jerusalem());
        assert!(Region::jerusalem().in_israel());
        assert!(Region::jerusalem().in_jerusalem());
    }

    #[test]
    fn new_validates() {
        assert_eq!(Region::new(true, true).unwrap(), Region::jerusalem());
        assert_eq!(Region::new(false, false).unwrap(), Region::diaspora());
        assert_eq!(
            Region::new(false, true).unwrap_err(),
            TorahError::JerusalemOutsideIsrael
        );
    }
}
