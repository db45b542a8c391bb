//! Boundary payload shapes: authoritative load input and the save-order output
//!
//! These are the only shapes crossing into or out of the crate. The load
//! side is whatever the persistence collaborator serves for a course; the
//! save side is the pure ordering instruction built by the projector.
use serde::{Deserialize, Serialize};

use crate::types::LessonContent;

/// One lesson as served by the persistence collaborator. The content variant
/// rides along untouched; reordering only ever rewrites `order_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPayload {
    pub id: String,
    pub title: String,
    pub order_index: u32,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(flatten)]
    pub content: LessonContent,
}

/// One chapter as served by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPayload {
    pub id: String,
    pub title: String,
    pub order_index: u32,
    #[serde(default)]
    pub lessons: Vec<LessonPayload>,
}

/// Ordering instruction for one lesson. No entity fields beyond the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonOrder {
    pub lesson_id: String,
    pub order_index: u32,
}

/// Ordering instruction for one chapter and the lessons it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterOrder {
    pub chapter_id: String,
    pub order_index: u32,
    pub lessons: Vec<LessonOrder>,
}

/// The full save-order payload sent to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOrderPayload {
    pub chapters: Vec<ChapterOrder>,
}
