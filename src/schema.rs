//! Structured-output schema descriptor for the generation service.
//!
//! The service accepts an OpenAPI-style schema in the request's
//! `generationConfig.responseSchema` and constrains the model's reply to
//! it. The descriptor is declared once as a static and shared by every
//! request instead of being rebuilt per call.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::summary::{Sentiment, TaskKind};

/// Value type of a schema node, in the service's uppercase spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Array,
    Object,
}

/// One node of the response schema.
///
/// Only the subset of the service's schema language this crate declares
/// is modelled; unused fields are omitted from the wire via
/// `skip_serializing_if`.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    /// A plain string field.
    pub fn string(description: &str) -> Self {
        Self {
            kind: SchemaType::String,
            description: Some(description.to_string()),
            allowed: None,
            items: None,
            properties: None,
            required: None,
        }
    }

    /// A string field restricted to a fixed set of values.
    pub fn string_enum(values: &[&str], description: &str) -> Self {
        Self {
            allowed: Some(values.iter().map(|v| v.to_string()).collect()),
            ..Self::string(description)
        }
    }

    /// An array field with uniform item schema.
    pub fn array_of(items: Schema, description: &str) -> Self {
        Self {
            kind: SchemaType::Array,
            description: Some(description.to_string()),
            allowed: None,
            items: Some(Box::new(items)),
            properties: None,
            required: None,
        }
    }

    /// An object with named properties, of which `required` must appear.
    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Self {
            kind: SchemaType::Object,
            description: None,
            allowed: None,
            items: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            required: Some(required.iter().map(|r| r.to_string()).collect()),
        }
    }
}

fn build_response_schema() -> Schema {
    let suggested_task = Schema::object(
        vec![
            (
                "type",
                Schema::string_enum(
                    &[
                        TaskKind::EmailDraft.label(),
                        TaskKind::DocEdit.label(),
                        TaskKind::CalendarInvite.label(),
                        TaskKind::GeneralReply.label(),
                    ],
                    "The type of task suggested.",
                ),
            ),
            (
                "title",
                Schema::string("Short title for the task (e.g., 'Draft Reply')."),
            ),
            (
                "description",
                Schema::string("Brief explanation of what this task accomplishes."),
            ),
            (
                "preview",
                Schema::string(
                    "The actual content of the task (e.g., the email body or invite details).",
                ),
            ),
        ],
        &["type", "title", "description", "preview"],
    );

    Schema::object(
        vec![
            (
                "summary",
                Schema::string("A 1-2 sentence summary of the signal."),
            ),
            (
                "actionItems",
                Schema::array_of(
                    Schema::string("One action item."),
                    "List of specific tasks or actions required from the user.",
                ),
            ),
            (
                "sentiment",
                Schema::string_enum(
                    &[
                        Sentiment::Positive.label(),
                        Sentiment::Neutral.label(),
                        Sentiment::Negative.label(),
                        Sentiment::Urgent.label(),
                    ],
                    "The detected sentiment or urgency level.",
                ),
            ),
            ("suggestedTask", suggested_task),
        ],
        // suggestedTask is declared required here, but the service does
        // not strictly enforce required fields in structured output, so
        // parsing still tolerates its absence.
        &["summary", "actionItems", "sentiment", "suggestedTask"],
    )
}

lazy_static! {
    /// The response schema sent with every summary request.
    pub static ref RESPONSE_SCHEMA: Schema = build_response_schema();
}

/// Shared schema descriptor for summary generation requests.
pub fn response_schema() -> &'static Schema {
    &RESPONSE_SCHEMA
}
