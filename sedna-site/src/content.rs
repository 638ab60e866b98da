//! Static site copy served alongside the derived data.

use serde::Serialize;

pub const HERO_TITLE: &str = "sEaDNA";
pub const HERO_TAGLINE: &str =
    "Understanding the effect of human action on sea life using molecular and open data";

pub const MISSION_HEADING: &str = "Our Mission & Goal";
pub const MISSION_INTRO: &str = "At sEaDNA, we track changes in ocean biodiversity by analyzing \
the evolving DNA signatures of marine species — from vertebrates to phytoplankton and beyond.";

/// A mission card with its own heading and body copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionCard {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const MISSION_CARDS: [MissionCard; 2] = [
    MissionCard {
        heading: "Monitoring Biodiversity",
        body: "Using molecular data from sampling stations across Europe, we monitor species \
diversity and presence over time. This allows us to detect and trace changes in habitats and \
entire ecosystems, bringing clarity to the ocean's complex dynamics.",
    },
    MissionCard {
        heading: "Empowering Ocean Stewardship",
        body: "Our mission is to turn molecular data into meaningful action. By making open data \
accessible and usable, we support decision-making, enhance sustainability strategies in the blue \
economy, and empower communities to protect marine life every day.",
    },
];

/// The monitoring target printed at the bottom of each season card for a
/// given year. Unknown years reuse the most recent target.
pub fn target_label(year: &str) -> &'static str {
    match year {
        "2021" => "Baseline coverage of coastal effort",
        "2022" => "Station coverage for all monitored fjords",
        _ => "Effort transparency across the full study area",
    }
}

#[cfg(test)]
mod tests {
    use super::{target_label, MISSION_CARDS};

    #[test]
    fn every_year_has_a_target() {
        assert_eq!(target_label("2021"), "Baseline coverage of coastal effort");
        assert_ne!(target_label("2022"), target_label("2021"));
        // unknown years fall back to the latest target
        assert_eq!(target_label("1999"), target_label("2023"));
    }

    #[test]
    fn mission_cards_have_copy() {
        assert_eq!(MISSION_CARDS.len(), 2);
        assert!(MISSION_CARDS.iter().all(|c| !c.body.is_empty()));
    }
}
