//! Error taxonomy: tree mutations are total and never fail, so the only
//! fallible surfaces are projection consistency and the editor save gate
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReorderError {
    /// A lesson's owning-chapter back-reference disagrees with the chapter it
    /// actually sits in. This is a programming defect, not a runtime
    /// condition; callers should surface a reload prompt, not attempt repair.
    #[error("lesson '{lesson_id}' claims chapter '{claimed}' but sits in chapter '{actual}'")]
    OrphanLesson {
        lesson_id: String,
        claimed: String,
        actual: String,
    },

    #[error("no pending reorder to save")]
    NothingToSave,

    #[error("a save is already in flight")]
    SaveInFlight,

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
