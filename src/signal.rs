//! Workspace signal model and the bundled sample feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const SAMPLE_SIGNALS: &str = include_str!("../data/sample_signals.json");

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("failed to read signals file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse signals: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Workspace surface a signal arrived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSource {
    Gmail,
    Calendar,
    Docs,
    Sheets,
}

impl SignalSource {
    pub fn label(&self) -> &'static str {
        match self {
            SignalSource::Gmail => "gmail",
            SignalSource::Calendar => "calendar",
            SignalSource::Docs => "docs",
            SignalSource::Sheets => "sheets",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
}

/// One inbound item from a connected workspace surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub source: SignalSource,
    pub title: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_read: bool,
}

/// The bundled sample feed, used when no signals file is given.
pub fn sample_signals() -> Result<Vec<Signal>, SignalError> {
    Ok(serde_json::from_str(SAMPLE_SIGNALS)?)
}

/// Load a signal feed from a JSON file.
pub fn load_signals(path: &Path) -> Result<Vec<Signal>, SignalError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bundled_feed_parses() {
        let signals = sample_signals().unwrap();
        assert_eq!(signals.len(), 5);

        let first = &signals[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.source, SignalSource::Gmail);
        assert_eq!(first.sender.name, "Sarah Jenkins");
        assert_eq!(first.priority, Priority::High);
        assert!(!first.is_read);
        assert_eq!(first.tags, vec!["Strategy", "Budget", "Q4"]);

        let last = &signals[4];
        assert_eq!(last.priority, Priority::Low);
        assert!(last.is_read);
    }

    #[test]
    fn loads_feed_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("signals.json");
        fs::write(
            &path,
            r#"[{
                "id": "x1",
                "source": "calendar",
                "title": "Standup",
                "content": "Daily sync at 9.",
                "sender": { "name": "Bot" },
                "timestamp": "2025-12-12T08:00:00Z",
                "priority": "low"
            }]"#,
        )
        .unwrap();

        let signals = load_signals(&path).unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].source, SignalSource::Calendar);
        assert!(signals[0].tags.is_empty());
        assert!(!signals[0].is_read);
    }

    #[test]
    fn serializes_with_wire_names() {
        let signals = sample_signals().unwrap();
        let value = serde_json::to_value(&signals[0]).unwrap();
        assert_eq!(value["isRead"], serde_json::json!(false));
        assert_eq!(value["source"], serde_json::json!("gmail"));
        assert_eq!(value["priority"], serde_json::json!("high"));
        assert!(value.get("is_read").is_none());
    }

    #[test]
    fn unknown_source_is_rejected() {
        let raw = r#"[{
            "id": "x1",
            "source": "slack",
            "title": "t",
            "content": "c",
            "sender": { "name": "n" },
            "timestamp": "2025-12-12T08:00:00Z",
            "priority": "low"
        }]"#;
        assert!(serde_json::from_str::<Vec<Signal>>(raw).is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("none.json");
        assert!(matches!(
            load_signals(&missing),
            Err(SignalError::ReadError(_))
        ));
    }
}
