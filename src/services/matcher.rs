use rand::{seq::IndexedRandom, Rng};

use crate::models::{Dataset, OutfitRow};

/// How requested text is compared against dataset columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive, trimmed equality
    Exact,
    /// Case-insensitive containment, ignoring stray formula quotes
    Substring,
}

impl MatchMode {
    fn normalize(&self, text: &str) -> String {
        match self {
            MatchMode::Exact => text.trim().to_lowercase(),
            // Leftovers of hyperlink formulas the loader could not unwrap
            MatchMode::Substring => text
                .replace("\")", "")
                .replace('"', "")
                .trim()
                .to_lowercase(),
        }
    }

    fn accepts(&self, column: &str, wanted: &str) -> bool {
        match self {
            MatchMode::Exact => column == wanted,
            MatchMode::Substring => column.contains(wanted),
        }
    }
}

/// Normalized filter for one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    mode: MatchMode,
    event: String,
    season: Option<String>,
}

impl MatchCriteria {
    /// Both event and season must equal the row's columns
    pub fn exact(event: &str, season: &str) -> Self {
        let mode = MatchMode::Exact;
        Self {
            mode,
            event: mode.normalize(event),
            season: Some(mode.normalize(season)),
        }
    }

    /// Event (and season, when given and non-blank) must occur in the row's columns
    pub fn substring(event: &str, season: Option<&str>) -> Self {
        let mode = MatchMode::Substring;
        Self {
            mode,
            event: mode.normalize(event),
            season: season
                .map(|s| mode.normalize(s))
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn matches(&self, row: &OutfitRow) -> bool {
        if !self.mode.accepts(&self.mode.normalize(row.event()), &self.event) {
            return false;
        }

        match &self.season {
            Some(season) => self.mode.accepts(&self.mode.normalize(row.season()), season),
            None => true,
        }
    }
}

/// Every row satisfying `criteria`, in dataset order
pub fn find_outfits<'d>(dataset: &'d Dataset, criteria: &MatchCriteria) -> Vec<&'d OutfitRow> {
    let matches: Vec<&OutfitRow> = dataset
        .rows()
        .iter()
        .filter(|row| criteria.matches(row))
        .collect();

    tracing::debug!(
        mode = ?criteria.mode(),
        event = %criteria.event,
        season = ?criteria.season,
        matches = matches.len(),
        "Filtered outfit dataset"
    );

    matches
}

/// Uniformly random pick among the matches
pub fn choose_outfit<'d, R>(matches: &[&'d OutfitRow], rng: &mut R) -> Option<&'d OutfitRow>
where
    R: Rng + ?Sized,
{
    matches.choose(rng).copied()
}
