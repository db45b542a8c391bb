//! Ordering-consistency core for curriculum authoring screens.
//!
//! Maintains one two-level ordered tree (chapters containing lessons) under
//! drag-and-drop edits, keeps sibling `order_index` values contiguous, and
//! projects the tree into the minimal save-order payload the persistence
//! collaborator expects. All tree logic is synchronous and pure; the save
//! round-trip itself belongs to the caller, which reports its outcome back
//! through [`CurriculumEditor::save_succeeded`] / [`CurriculumEditor::save_failed`].
mod errors;
mod move_engine;
mod projector;
mod types;
mod wire;

pub use errors::ReorderError;
pub use move_engine::{MoveKind, MoveOutcome, NoopReason, reindex, resolve_move};
pub use projector::project_save_order;
pub use types::{Chapter, CourseTree, DragId, Lesson, LessonContent};
pub use wire::{ChapterOrder, ChapterPayload, LessonOrder, LessonPayload, SaveOrderPayload};

use log::{info, warn};

/// Save-cycle state of the editor's tree.
///
/// ```text
/// Loaded --move--> Dirty --begin_save--> Saving --save_succeeded--> Loaded
///                                          | \--save_failed------> Dirty
/// ```
///
/// Moves while `Saving` flip `dirtied`, and a dirtied save lands back in
/// `Dirty` on success: the acknowledged payload is stale relative to local
/// edits, so there is still something to save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Loaded,
    Dirty,
    Saving { dirtied: bool },
}

/// One authoring screen's view of a course: the tree plus its save-cycle
/// state. Exclusively owned by that screen; there is no sharing and no
/// interior mutability.
#[derive(Debug, Clone)]
pub struct CurriculumEditor {
    tree: CourseTree,
    state: EditorState,
}

impl CurriculumEditor {
    /// Build from authoritative load data, in the `Loaded` state.
    pub fn from_load(chapters: Vec<ChapterPayload>) -> Self {
        let tree = CourseTree::from_load(chapters);
        info!(
            "loaded curriculum: {} chapters, {} lessons",
            tree.chapter_count(),
            tree.total_lessons()
        );
        CurriculumEditor {
            tree,
            state: EditorState::Loaded,
        }
    }

    pub fn tree(&self) -> &CourseTree {
        &self.tree
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        matches!(
            self.state,
            EditorState::Dirty | EditorState::Saving { dirtied: true }
        )
    }

    /// Apply one drag-end gesture. No-ops leave both tree and state alone;
    /// an applied move installs the new tree and marks the editor dirty.
    pub fn apply_drag(&mut self, active: &str, over: &str) -> MoveOutcome {
        let (next, outcome) = resolve_move(&self.tree, active, over);
        if let MoveOutcome::Moved(kind) = outcome {
            self.tree = next;
            self.state = match self.state {
                EditorState::Saving { .. } => EditorState::Saving { dirtied: true },
                _ => EditorState::Dirty,
            };
            info!("applied {kind:?}; state {:?}", self.state);
        }
        outcome
    }

    /// Project the current tree and enter `Saving`. The caller owns the
    /// actual network call and must report back with [`save_succeeded`] or
    /// [`save_failed`]; until then further saves are refused.
    ///
    /// [`save_succeeded`]: CurriculumEditor::save_succeeded
    /// [`save_failed`]: CurriculumEditor::save_failed
    pub fn begin_save(&mut self) -> Result<SaveOrderPayload, ReorderError> {
        match self.state {
            EditorState::Loaded => Err(ReorderError::NothingToSave),
            EditorState::Saving { .. } => Err(ReorderError::SaveInFlight),
            EditorState::Dirty => {
                let payload = project_save_order(&self.tree)?;
                self.state = EditorState::Saving { dirtied: false };
                Ok(payload)
            }
        }
    }

    /// The in-flight save was accepted. Lands in `Loaded`, or back in `Dirty`
    /// when moves arrived while the save was out.
    pub fn save_succeeded(&mut self) {
        self.state = match self.state {
            EditorState::Saving { dirtied: false } => EditorState::Loaded,
            EditorState::Saving { dirtied: true } => EditorState::Dirty,
            other => {
                warn!("save_succeeded outside Saving; staying {other:?}");
                other
            }
        };
    }

    /// The in-flight save was rejected. Back to `Dirty`; retry is manual.
    pub fn save_failed(&mut self) {
        self.state = match self.state {
            EditorState::Saving { .. } => EditorState::Dirty,
            other => {
                warn!("save_failed outside Saving; staying {other:?}");
                other
            }
        };
    }

    /// Replace the local tree with fresh authoritative data.
    ///
    /// Last-writer-wins from the server: any unsaved local reordering is
    /// discarded, whatever state the editor was in. Runs after every
    /// server-confirmed create/update/delete and after explicit refreshes.
    pub fn reconcile(&mut self, chapters: Vec<ChapterPayload>) {
        if self.state != EditorState::Loaded {
            warn!(
                "reconcile in {:?}: discarding unsaved local reordering",
                self.state
            );
        }
        self.tree = CourseTree::from_load(chapters);
        self.state = EditorState::Loaded;
    }
}
