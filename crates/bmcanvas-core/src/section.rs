//! Canvas sections
//!
//! The Business Model Canvas has a fixed set of nine sections. Each one has a
//! display title, a key used in the persisted document, and a guiding prompt
//! shown to the user while the section is empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the nine canvas sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    KeyPartners,
    KeyActivities,
    KeyResources,
    ValueProposition,
    CustomerRelationships,
    Channels,
    CustomerSegments,
    CostStructure,
    RevenueStreams,
}

impl Section {
    /// All sections in canonical order
    pub const ALL: [Section; 9] = [
        Section::KeyPartners,
        Section::KeyActivities,
        Section::KeyResources,
        Section::ValueProposition,
        Section::CustomerRelationships,
        Section::Channels,
        Section::CustomerSegments,
        Section::CostStructure,
        Section::RevenueStreams,
    ];

    /// Number of sections on a canvas
    pub const COUNT: usize = 9;

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::KeyPartners => "Key Partners",
            Self::KeyActivities => "Key Activities",
            Self::KeyResources => "Key Resources",
            Self::ValueProposition => "Value Proposition",
            Self::CustomerRelationships => "Customer Relationships",
            Self::Channels => "Channels",
            Self::CustomerSegments => "Customer Segments",
            Self::CostStructure => "Cost Structure",
            Self::RevenueStreams => "Revenue Streams",
        }
    }

    /// Key used in the persisted canvas document
    pub fn key(&self) -> &'static str {
        match self {
            Self::KeyPartners => "keyPartners",
            Self::KeyActivities => "keyActivities",
            Self::KeyResources => "keyResources",
            Self::ValueProposition => "valueProposition",
            Self::CustomerRelationships => "customerRelationships",
            Self::Channels => "channels",
            Self::CustomerSegments => "customerSegments",
            Self::CostStructure => "costStructure",
            Self::RevenueStreams => "revenueStreams",
        }
    }

    /// Guiding question shown as placeholder and tooltip
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::KeyPartners => {
                "Who are your key partners and suppliers? What resources are you acquiring from them?"
            }
            Self::KeyActivities => "What key activities does your value proposition require?",
            Self::KeyResources => "What key resources does your value proposition require?",
            Self::ValueProposition => {
                "What value do you deliver to customers? Which problems are you solving?"
            }
            Self::CustomerRelationships => {
                "What type of relationship does each customer segment expect?"
            }
            Self::Channels => "Through which channels do your customers want to be reached?",
            Self::CustomerSegments => {
                "For whom are you creating value? Who are your most important customers?"
            }
            Self::CostStructure => {
                "What are the most important costs inherent in your business model?"
            }
            Self::RevenueStreams => {
                "For what value are your customers willing to pay? How would they prefer to pay?"
            }
        }
    }

    /// Position in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A string did not name any section
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown canvas section: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    /// Accepts a title ("Key Partners"), a key ("keyPartners"), or a
    /// kebab/snake form ("key-partners"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Section::ALL
            .into_iter()
            .find(|section| section.key().to_lowercase() == normalized)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}
