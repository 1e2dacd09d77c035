//! Version snapshots
//!
//! An append-only log of identified, timestamped canvas snapshots. Versions
//! are never edited or removed once recorded.

use bmcanvas_core::{CanvasRecord, Section};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display format for version timestamps
const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reviewer feedback attached to a section of a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub section: Section,
    pub text: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

/// A stored canvas snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub data: CanvasRecord,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Version {
    /// Local-time label for a version list
    pub fn label(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format(LABEL_FORMAT)
            .to_string()
    }

    /// The stored record
    pub fn restore(&self) -> CanvasRecord {
        self.data.clone()
    }
}

/// Append-only version log
#[derive(Debug, Clone, Default)]
pub struct VersionStore {
    versions: Vec<Version>,
}

impl VersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` as a new version and return it
    pub fn snapshot(&mut self, record: CanvasRecord) -> Version {
        let version = Version {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            data: record,
            comments: Vec::new(),
        };
        self.versions.push(version.clone());
        tracing::debug!(
            id = %version.id,
            count = self.versions.len(),
            "Version snapshot recorded"
        );
        version
    }

    /// All versions, oldest first
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Look up a version by identifier
    pub fn get(&self, id: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// The most recent version
    pub fn latest(&self) -> Option<&Version> {
        self.versions.last()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
