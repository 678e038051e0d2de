// Induction section domain module
// Contains the content module record, its value objects, and creation input

pub mod value_objects;

pub use value_objects::{Category, MediaType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One onboarding content module
///
/// Sections are immutable once created: the admin console only publishes and
/// deletes them. `order` is assigned at creation as `count + 1` and is never
/// renumbered when other sections are deleted, so order values may repeat or
/// leave gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InductionSection {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub last_updated: DateTime<Utc>,
    pub order: u32,
    pub attachments: Vec<MediaAttachment>,
}

/// A named link to an external multimedia resource
///
/// Owned exclusively by its parent section; the URL is an untrusted string
/// and is stored unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub name: String,
    pub url: String,
}

/// Partial input for publishing a section; missing fields receive store defaults
#[derive(Debug, Default, Deserialize)]
pub struct NewSection {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    #[serde(default)]
    pub attachments: Vec<NewAttachment>,
}

/// Attachment input as submitted by the admin console; ids are assigned by the store
#[derive(Debug, Deserialize)]
pub struct NewAttachment {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub name: String,
    pub url: String,
}
