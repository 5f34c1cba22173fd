use serde::{Deserialize, Serialize};

use crate::utils::constants::{COMFORT_MAX_TEMP, COMFORT_MIN_TEMP, EXTREME_HEAT_TEMP};

/// Named temperature band used to classify daily records.
///
/// `Comfortable` is the closed interval [18, 25] inclusive; `ExtremeHeat` has
/// an open lower bound at 35.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Comfortable,
    ExtremeHeat,
}

impl Band {
    pub fn contains(&self, temp_c: f32) -> bool {
        match self {
            Band::Comfortable => (COMFORT_MIN_TEMP..=COMFORT_MAX_TEMP).contains(&temp_c),
            Band::ExtremeHeat => temp_c > EXTREME_HEAT_TEMP,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Comfortable => "comfortable",
            Band::ExtremeHeat => "extreme heat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comfortable_bounds_inclusive() {
        assert!(Band::Comfortable.contains(18.0));
        assert!(Band::Comfortable.contains(25.0));
        assert!(Band::Comfortable.contains(21.3));
        assert!(!Band::Comfortable.contains(17.9));
        assert!(!Band::Comfortable.contains(25.1));
    }

    #[test]
    fn test_extreme_heat_open_lower_bound() {
        assert!(!Band::ExtremeHeat.contains(35.0));
        assert!(Band::ExtremeHeat.contains(35.1));
        assert!(!Band::ExtremeHeat.contains(20.0));
    }
}
