//! The closed set of intents the skill understands.

use std::collections::HashMap;

/// Slot values resolved by the platform. A slot may be present without a value.
pub type Slots = HashMap<String, Option<String>>;

/// Name of the slot carrying the player for additions and removals.
pub const PLAYER_SLOT: &str = "Player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Addition,
    Removal,
    Clean,
    Worst,
    Help,
    Stop,
    Cancel,
    Unrecognized,
}

impl Intent {
    /// Map a platform intent name to an [`Intent`]. Unknown names are
    /// [`Intent::Unrecognized`], never an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "WallOfShameAddition" => Intent::Addition,
            "WallOfShameRemoval" => Intent::Removal,
            "WallOfShameClean" => Intent::Clean,
            "WallOfShameWorst" => Intent::Worst,
            "AMAZON.HelpIntent" => Intent::Help,
            "AMAZON.StopIntent" => Intent::Stop,
            "AMAZON.CancelIntent" => Intent::Cancel,
            _ => Intent::Unrecognized,
        }
    }
}

/// Non-blank value of `name`, if the platform filled it.
pub fn slot_value<'a>(slots: &'a Slots, name: &str) -> Option<&'a str> {
    slots
        .get(name)
        .and_then(|value| value.as_deref())
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(Intent::from_name("WallOfShameAddition"), Intent::Addition);
        assert_eq!(Intent::from_name("WallOfShameRemoval"), Intent::Removal);
        assert_eq!(Intent::from_name("WallOfShameClean"), Intent::Clean);
        assert_eq!(Intent::from_name("WallOfShameWorst"), Intent::Worst);
        assert_eq!(Intent::from_name("AMAZON.HelpIntent"), Intent::Help);
        assert_eq!(Intent::from_name("AMAZON.StopIntent"), Intent::Stop);
        assert_eq!(Intent::from_name("AMAZON.CancelIntent"), Intent::Cancel);
    }

    #[test]
    fn test_names_match_exactly() {
        assert_eq!(Intent::from_name("wallofshameaddition"), Intent::Unrecognized);
        assert_eq!(Intent::from_name("AMAZON.FallbackIntent"), Intent::Unrecognized);
        assert_eq!(Intent::from_name(""), Intent::Unrecognized);
    }

    #[test]
    fn test_slot_value_skips_missing_and_blank() {
        let mut slots = Slots::new();
        assert_eq!(slot_value(&slots, PLAYER_SLOT), None);

        slots.insert(PLAYER_SLOT.to_string(), None);
        assert_eq!(slot_value(&slots, PLAYER_SLOT), None);

        slots.insert(PLAYER_SLOT.to_string(), Some("  ".to_string()));
        assert_eq!(slot_value(&slots, PLAYER_SLOT), None);

        slots.insert(PLAYER_SLOT.to_string(), Some("Waseem".to_string()));
        assert_eq!(slot_value(&slots, PLAYER_SLOT), Some("Waseem"));
    }
}
