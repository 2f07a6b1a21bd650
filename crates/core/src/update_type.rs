//! Publishing API update types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tells the Publishing API how to treat an incoming version of a content item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// A significant change; the default for ordinary publish events.
    #[default]
    Major,
    Minor,
    /// Re-sending unchanged content, e.g. after a presenter change.
    Republish,
}

impl UpdateType {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateType::Major => "major",
            UpdateType::Minor => "minor",
            UpdateType::Republish => "republish",
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_major() {
        assert_eq!(UpdateType::default(), UpdateType::Major);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(UpdateType::Republish).unwrap(),
            serde_json::json!("republish")
        );
    }
}
