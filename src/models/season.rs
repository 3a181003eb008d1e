use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Temperature (Celsius) at or above which it is summer
pub const SUMMER_THRESHOLD_C: f64 = 25.0;
/// Temperature (Celsius) at or below which it is winter
pub const WINTER_THRESHOLD_C: f64 = 15.0;

/// Coarse weather category used to tag outfits
///
/// `Summer` is the fallback whenever the weather cannot be determined.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Summer,
    Winter,
    Rainy,
}

impl Season {
    /// Maps a temperature in Celsius onto a season label
    pub fn from_temperature(celsius: f64) -> Self {
        if celsius >= SUMMER_THRESHOLD_C {
            Season::Summer
        } else if celsius <= WINTER_THRESHOLD_C {
            Season::Winter
        } else {
            Season::Rainy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Winter => "winter",
            Season::Rainy => "rainy",
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
