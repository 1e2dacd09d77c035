//! Canvas record
//!
//! A `CanvasRecord` holds the text of all nine sections. The field set is
//! fixed: an empty section is an empty string, never a missing value.

use crate::section::Section;
use serde::{Deserialize, Deserializer, Serialize};

/// Text content of every canvas section
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_partners: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_activities: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_resources: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value_proposition: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_relationships: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub channels: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_segments: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cost_structure: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub revenue_streams: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CanvasRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, section: Section, text: impl Into<String>) -> Self {
        self.set(section, text);
        self
    }

    /// Text of a section
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::KeyPartners => &self.key_partners,
            Section::KeyActivities => &self.key_activities,
            Section::KeyResources => &self.key_resources,
            Section::ValueProposition => &self.value_proposition,
            Section::CustomerRelationships => &self.customer_relationships,
            Section::Channels => &self.channels,
            Section::CustomerSegments => &self.customer_segments,
            Section::CostStructure => &self.cost_structure,
            Section::RevenueStreams => &self.revenue_streams,
        }
    }

    fn field_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::KeyPartners => &mut self.key_partners,
            Section::KeyActivities => &mut self.key_activities,
            Section::KeyResources => &mut self.key_resources,
            Section::ValueProposition => &mut self.value_proposition,
            Section::CustomerRelationships => &mut self.customer_relationships,
            Section::Channels => &mut self.channels,
            Section::CustomerSegments => &mut self.customer_segments,
            Section::CostStructure => &mut self.cost_structure,
            Section::RevenueStreams => &mut self.revenue_streams,
        }
    }

    /// Replace the text of a section
    pub fn set(&mut self, section: Section, text: impl Into<String>) {
        *self.field_mut(section) = text.into();
    }

    /// Clear a section and return its previous text
    pub fn take(&mut self, section: Section) -> String {
        std::mem::take(self.field_mut(section))
    }

    /// Iterate `(section, text)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> + '_ {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// Whether the section has any content
    pub fn is_filled(&self, section: Section) -> bool {
        !self.get(section).is_empty()
    }

    /// Number of sections with content
    pub fn filled_count(&self) -> usize {
        Section::ALL.iter().filter(|s| self.is_filled(**s)).count()
    }

    /// Fraction of filled sections, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        self.filled_count() as f64 / Section::COUNT as f64
    }

    /// True when every section is empty
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}
