//! Edition lifecycle states and document types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle state of an edition, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditionState {
    Draft,
    Submitted,
    Rejected,
    Scheduled,
    Published,
    Superseded,
    Archived,
    Deleted,
}

impl EditionState {
    pub fn as_str(self) -> &'static str {
        match self {
            EditionState::Draft => "draft",
            EditionState::Submitted => "submitted",
            EditionState::Rejected => "rejected",
            EditionState::Scheduled => "scheduled",
            EditionState::Published => "published",
            EditionState::Superseded => "superseded",
            EditionState::Archived => "archived",
            EditionState::Deleted => "deleted",
        }
    }

    /// Whether an edition in this state is visible on the public site.
    ///
    /// Only visible editions may be republished.
    pub fn is_publicly_visible(self) -> bool {
        matches!(self, EditionState::Published | EditionState::Archived)
    }
}

impl FromStr for EditionState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EditionState::Draft),
            "submitted" => Ok(EditionState::Submitted),
            "rejected" => Ok(EditionState::Rejected),
            "scheduled" => Ok(EditionState::Scheduled),
            "published" => Ok(EditionState::Published),
            "superseded" => Ok(EditionState::Superseded),
            "archived" => Ok(EditionState::Archived),
            "deleted" => Ok(EditionState::Deleted),
            other => Err(CoreError::Validation(format!(
                "Unknown edition state '{other}'"
            ))),
        }
    }
}

impl fmt::Display for EditionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public URL prefix for a document type.
///
/// Unknown types fall back to `/government/{type}s`.
pub fn base_path_prefix(document_type: &str) -> String {
    match document_type {
        "publication" => "/government/publications".to_string(),
        "news_article" => "/government/news".to_string(),
        "speech" => "/government/speeches".to_string(),
        "consultation" => "/government/consultations".to_string(),
        "case_study" => "/government/case-studies".to_string(),
        "detailed_guide" => "/guidance".to_string(),
        "statistical_data_set" => "/government/statistical-data-sets".to_string(),
        other => format!("/government/{}s", other.replace('_', "-")),
    }
}
