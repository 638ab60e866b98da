//! The data-sources panel: provider metadata and its open/close rule.
//!
//! The panel shows one expandable description at a time and closes
//! itself after a fixed delay. Re-toggling (or switching source) replaces
//! any pending deadline, so only the most recent open counts.

use std::time::{Duration, Instant};

use serde::Serialize;

/// How long an expanded source description stays open untouched.
pub const AUTO_CLOSE_MS: u64 = 8000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One provider in the "Data Sources" section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSource {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub links: &'static [SourceLink],
}

pub const DATA_SOURCES: [DataSource; 3] = [
    DataSource {
        id: "emodnet",
        name: "EMODnet",
        description: "A pan-European network providing open and standardized marine data, \
products, and services to support ocean research, policy development, and sustainable marine \
resource management.",
        links: &[SourceLink {
            label: "Website",
            url: "https://emodnet.ec.europa.eu",
        }],
    },
    DataSource {
        id: "emo-bon",
        name: "EMO BON",
        description: "A collaborative European initiative integrating omics technologies into \
marine biodiversity observation, advancing research, monitoring, and data sharing across ocean \
ecosystems.",
        links: &[SourceLink {
            label: "Website",
            url: "https://www.embrc.eu/emo-bon/",
        }],
    },
    DataSource {
        id: "gfw",
        name: "Global Fishing Watch",
        description: "A global non-profit organization providing open-access data and advanced \
analytics to monitor fishing activity and promote ocean transparency.",
        links: &[
            SourceLink {
                label: "Home",
                url: "https://globalfishingwatch.org",
            },
            SourceLink {
                label: "About",
                url: "https://globalfishingwatch.org/about-us/",
            },
        ],
    },
];

/// Look up a provider by its id.
pub fn source_by_id(id: &str) -> Option<&'static DataSource> {
    DATA_SOURCES.iter().find(|source| source.id == id)
}

/// Open/close state of the panel, with the auto-dismiss deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcesPanel {
    active: Option<String>,
    deadline: Option<Instant>,
}

impl SourcesPanel {
    pub fn new() -> SourcesPanel {
        SourcesPanel {
            active: None,
            deadline: None,
        }
    }

    /// Toggle a source: clicking the active one closes the panel, any
    /// other opens it and (re)arms the auto-dismiss deadline.
    pub fn toggle(&mut self, id: &str, now: Instant) {
        if self.active.as_deref() == Some(id) {
            self.active = None;
            self.deadline = None;
        } else {
            self.active = Some(id.to_string());
            self.deadline = Some(now + Duration::from_millis(AUTO_CLOSE_MS));
        }
    }

    /// Close the panel if its deadline has passed. Returns true when this
    /// tick dismissed it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.active = None;
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_source(&self) -> Option<&'static DataSource> {
        self.active().and_then(source_by_id)
    }
}

impl Default for SourcesPanel {
    fn default() -> SourcesPanel {
        SourcesPanel::new()
    }
}
