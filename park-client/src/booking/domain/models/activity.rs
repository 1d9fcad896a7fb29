use serde::{Deserialize, Serialize};

/// Rules a participant must satisfy to join an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityConstraints {
    /// Minimum age in years, `None` when the activity has no age limit
    pub min_age: Option<u32>,
    pub requires_clothing_size: bool,
}

impl ActivityConstraints {
    pub fn new(min_age: Option<u32>, requires_clothing_size: bool) -> Self {
        Self {
            min_age,
            requires_clothing_size,
        }
    }

    /// Combine two rule sets, keeping the stricter value of each rule
    pub fn stricter(self, other: ActivityConstraints) -> ActivityConstraints {
        let min_age = match (self.min_age, other.min_age) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        ActivityConstraints {
            min_age,
            requires_clothing_size: self.requires_clothing_size || other.requires_clothing_size,
        }
    }
}

/// Icon and accent color used to render an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStyle {
    pub icon: String,
    pub color: String,
}

/// Static description of a park activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInfo {
    /// Stable identifier, used in navigation parameters and style lookup
    pub id: String,
    /// Display name, matches the activity name sent by the booking API
    pub name: String,
    pub description: String,
    pub constraints: ActivityConstraints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stricter_constraints() {
        let catalog = ActivityConstraints::new(Some(8), false);
        let server = ActivityConstraints::new(Some(10), true);

        let merged = catalog.stricter(server);
        assert_eq!(merged.min_age, Some(10));
        assert!(merged.requires_clothing_size);

        let only_one = ActivityConstraints::new(None, false).stricter(ActivityConstraints::new(Some(12), false));
        assert_eq!(only_one.min_age, Some(12));
        assert!(!only_one.requires_clothing_size);
    }
}
