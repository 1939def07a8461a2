//! Summary types - the structured output returned for every signal.
//!
//! Field names follow the wire format of the generation service
//! (camelCase, task `type` discriminator), so a schema-conformant
//! response body deserializes directly into [`SummaryResult`].

use serde::{Deserialize, Serialize};

/// Summary text returned when no API key is configured.
pub const MISSING_KEY_SUMMARY: &str =
    "AI Summary unavailable (Missing API Key). This is a simulated summary of the content.";

/// Summary text returned when generation or parsing fails.
pub const FAILED_SUMMARY: &str = "Failed to generate AI summary.";

/// Detected sentiment or urgency of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Urgent,
}

impl Sentiment {
    /// Wire-format label, e.g. `urgent`.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Urgent => "urgent",
        }
    }
}

/// Kind of action the assistant proposes to take on the user's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    EmailDraft,
    DocEdit,
    CalendarInvite,
    GeneralReply,
}

impl TaskKind {
    /// Wire-format label, e.g. `email_draft`.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::EmailDraft => "email_draft",
            TaskKind::DocEdit => "doc_edit",
            TaskKind::CalendarInvite => "calendar_invite",
            TaskKind::GeneralReply => "general_reply",
        }
    }
}

/// A proposed next action, complete enough to preview before applying.
///
/// When present, all four fields are guaranteed populated: a response
/// carrying a partial task fails deserialization and is degraded to the
/// fixed failure result instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTask {
    /// What kind of task this is.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Short human-readable title (e.g. "Draft Reply").
    pub title: String,
    /// Brief explanation of what the task accomplishes.
    pub description: String,
    /// Full content the task would produce (e.g. the draft email body).
    pub preview: String,
}

/// Structured summary of one signal.
///
/// Every call to [`SummaryClient::summarize`](crate::agent::SummaryClient::summarize)
/// produces one of these, on success and failure paths alike; `summary`
/// and `action_items` are always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// 1-2 sentence synopsis of the signal.
    pub summary: String,
    /// Specific actions required from the user; may be empty.
    pub action_items: Vec<String>,
    /// Sentiment/urgency classification, when the model provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Highest-impact next action the assistant can take, when suggested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_task: Option<SuggestedTask>,
}

impl SummaryResult {
    /// Fixed result for the no-credential path.
    ///
    /// Returned without any network activity when no API key is
    /// configured.
    pub fn missing_credential() -> Self {
        Self {
            summary: MISSING_KEY_SUMMARY.to_string(),
            action_items: vec![
                "Check API Key configuration".to_string(),
                "Review original message".to_string(),
            ],
            sentiment: Some(Sentiment::Neutral),
            suggested_task: None,
        }
    }

    /// Fixed result for the failure path.
    ///
    /// Returned when the service call or response parsing fails.
    pub fn generation_failed() -> Self {
        Self {
            summary: FAILED_SUMMARY.to_string(),
            action_items: Vec::new(),
            sentiment: Some(Sentiment::Neutral),
            suggested_task: None,
        }
    }

    /// True if a suggested task is attached.
    pub fn has_task(&self) -> bool {
        self.suggested_task.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_wire_format() {
        let body = json!({
            "summary": "Budget reallocation requested",
            "actionItems": ["Shift 20% spend to LinkedIn", "Confirm promo dates"],
            "sentiment": "urgent",
            "suggestedTask": {
                "type": "email_draft",
                "title": "Draft Reply",
                "description": "Acknowledge and confirm action",
                "preview": "Hi Sarah, ..."
            }
        });

        let result: SummaryResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.summary, "Budget reallocation requested");
        assert_eq!(result.action_items.len(), 2);
        assert_eq!(result.sentiment, Some(Sentiment::Urgent));
        let task = result.suggested_task.expect("task present");
        assert_eq!(task.kind, TaskKind::EmailDraft);
        assert_eq!(task.title, "Draft Reply");
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let body = json!({
            "summary": "Lunch plans",
            "actionItems": []
        });

        let result: SummaryResult = serde_json::from_value(body).unwrap();
        assert!(result.action_items.is_empty());
        assert_eq!(result.sentiment, None);
        assert!(!result.has_task());
    }

    #[test]
    fn missing_summary_is_a_parse_error() {
        let body = json!({ "actionItems": ["do the thing"] });
        assert!(serde_json::from_value::<SummaryResult>(body).is_err());
    }

    #[test]
    fn partial_task_is_a_parse_error() {
        let body = json!({
            "summary": "s",
            "actionItems": [],
            "suggestedTask": { "type": "doc_edit", "title": "Update section" }
        });
        assert!(serde_json::from_value::<SummaryResult>(body).is_err());
    }

    #[test]
    fn enums_use_wire_labels() {
        assert_eq!(
            serde_json::to_value(TaskKind::CalendarInvite).unwrap(),
            json!("calendar_invite")
        );
        assert_eq!(
            serde_json::to_value(Sentiment::Urgent).unwrap(),
            json!("urgent")
        );
        assert_eq!(TaskKind::GeneralReply.label(), "general_reply");
        assert_eq!(Sentiment::Negative.label(), "negative");
    }

    #[test]
    fn missing_credential_result_is_fully_populated() {
        let result = SummaryResult::missing_credential();
        assert_eq!(result.summary, MISSING_KEY_SUMMARY);
        assert_eq!(result.action_items.len(), 2);
        assert_eq!(result.sentiment, Some(Sentiment::Neutral));
        assert!(result.suggested_task.is_none());
    }

    #[test]
    fn failure_result_is_fully_populated() {
        let result = SummaryResult::generation_failed();
        assert_eq!(result.summary, FAILED_SUMMARY);
        assert!(result.action_items.is_empty());
        assert_eq!(result.sentiment, Some(Sentiment::Neutral));
        assert!(result.suggested_task.is_none());
    }
}
