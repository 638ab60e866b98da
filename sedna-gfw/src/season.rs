use serde::{Deserialize, Serialize};

/// One of the four fixed three-month buckets used to aggregate effort
/// records within a single year's dataset.
///
/// Winter spans the month boundary: December of the dataset year is
/// grouped with January and February of the same year, even though
/// chronologically they precede it. Dashboard cards rely on this grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Display iteration order for dashboard cards.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// The zero-padded month keys belonging to this season.
    pub fn months(&self) -> [&'static str; 3] {
        match self {
            Season::Spring => ["03", "04", "05"],
            Season::Summer => ["06", "07", "08"],
            Season::Fall => ["09", "10", "11"],
            Season::Winter => ["12", "01", "02"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// The season containing a zero-padded month key, if the key is one
    /// of "01".."12".
    pub fn for_month_key(month_key: &str) -> Option<Season> {
        Season::ALL
            .into_iter()
            .find(|season| season.months().contains(&month_key))
    }

    pub fn contains(&self, month_key: &str) -> bool {
        self.months().contains(&month_key)
    }
}
