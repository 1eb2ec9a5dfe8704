use crate::error::{EngineError, EngineResult};

/// Aging-mode parameters plus the derived display alpha.
///
/// When aging is enabled, a cell is born at `max_age` and its value drops
/// by one per survived generation; a living neighbor only counts toward a
/// birth while its value is at least `end_breeding_age`. `alpha` is the
/// per-age-step opacity (`255 / max_age`) consumed by the rendering
/// collaborator; it is recomputed whenever `max_age` changes and has no
/// effect on the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgingParams {
    enabled: bool,
    max_age: u8,
    end_breeding_age: u8,
    alpha: u8,
}

impl Default for AgingParams {
    fn default() -> Self {
        Self {
            enabled: false,
            max_age: 3,
            end_breeding_age: 1,
            alpha: 255 / 3,
        }
    }
}

impl AgingParams {
    /// Validates `max_age >= 1` and derives `alpha`.
    pub fn new(enabled: bool, max_age: u8, end_breeding_age: u8) -> EngineResult<Self> {
        if max_age == 0 {
            return Err(EngineError::InvalidMaxAge);
        }

        Ok(Self {
            enabled,
            max_age,
            end_breeding_age,
            alpha: 255 / max_age,
        })
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub const fn max_age(&self) -> u8 {
        self.max_age
    }

    pub const fn end_breeding_age(&self) -> u8 {
        self.end_breeding_age
    }

    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Value assigned to a newly born cell.
    pub const fn birth_value(&self) -> u8 {
        if self.enabled { self.max_age } else { 1 }
    }

    /// One step of decay for a living cell: down by one in aging mode,
    /// straight to dead otherwise.
    pub const fn decay(&self, value: u8) -> u8 {
        if self.enabled { value.saturating_sub(1) } else { 0 }
    }

    /// Whether a living neighbor with this value counts toward a birth.
    pub const fn can_breed(&self, value: u8) -> bool {
        value >= self.end_breeding_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original() {
        let params = AgingParams::default();

        assert!(!params.enabled());
        assert_eq!(params.max_age(), 3);
        assert_eq!(params.end_breeding_age(), 1);
        assert_eq!(params.alpha(), 85);
    }

    #[test]
    fn alpha_derived_from_max_age() {
        assert_eq!(AgingParams::new(true, 5, 1).unwrap().alpha(), 51);
        assert_eq!(AgingParams::new(true, 255, 1).unwrap().alpha(), 1);
        assert_eq!(AgingParams::new(true, 4, 1).unwrap().alpha(), 63);
    }

    #[test]
    fn zero_max_age_rejected() {
        assert_eq!(AgingParams::new(true, 0, 1), Err(EngineError::InvalidMaxAge));
    }

    #[test]
    fn birth_value_per_mode() {
        assert_eq!(AgingParams::new(true, 7, 1).unwrap().birth_value(), 7);
        assert_eq!(AgingParams::new(false, 7, 1).unwrap().birth_value(), 1);
    }

    #[test]
    fn decay_per_mode() {
        let aging = AgingParams::new(true, 3, 1).unwrap();
        assert_eq!(aging.decay(3), 2);
        assert_eq!(aging.decay(1), 0);
        assert_eq!(aging.decay(0), 0);

        let plain = AgingParams::default();
        assert_eq!(plain.decay(1), 0);
    }

    #[test]
    fn breeding_threshold() {
        let params = AgingParams::new(true, 3, 2).unwrap();
        assert!(params.can_breed(3));
        assert!(params.can_breed(2));
        assert!(!params.can_breed(1));
    }
}
