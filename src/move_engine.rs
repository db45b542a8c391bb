//! Move resolution and reindexing for drag-end events
//!
//! `resolve_move` is the whole contract between the UI layer and this crate:
//! the drag toolkit hands over the raw active/over element ids and gets back
//! a new tree plus an outcome describing what happened. The input tree is
//! never mutated; malformed gestures are no-ops, never panics.
use log::debug;

use crate::types::{CourseTree, DragId};

/// What an applied move did to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    ChapterReorder,
    /// Lesson moved within its own chapter.
    LessonReorder,
    /// Lesson moved to a different chapter.
    LessonTransfer,
}

/// Why a drag-end event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    SameTarget,
    /// Chapter dragged over a lesson or vice versa; not a supported move.
    CrossKind,
    MalformedId,
    UnknownActive,
    UnknownOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(MoveKind),
    Noop(NoopReason),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// Classify and apply a single drag-end event, copy-on-write.
///
/// On any no-op the returned tree is a plain clone of the input, deep-equal
/// to it.
pub fn resolve_move(tree: &CourseTree, active: &str, over: &str) -> (CourseTree, MoveOutcome) {
    if active == over {
        return noop(tree, active, over, NoopReason::SameTarget);
    }
    match (DragId::parse(active), DragId::parse(over)) {
        (Some(DragId::Chapter(a)), Some(DragId::Chapter(o))) => move_chapter(tree, &a, &o),
        (Some(DragId::Lesson(a)), Some(DragId::Lesson(o))) => move_lesson(tree, &a, &o),
        (Some(_), Some(_)) => noop(tree, active, over, NoopReason::CrossKind),
        _ => noop(tree, active, over, NoopReason::MalformedId),
    }
}

fn noop(
    tree: &CourseTree,
    active: &str,
    over: &str,
    reason: NoopReason,
) -> (CourseTree, MoveOutcome) {
    debug!("ignoring drag '{active}' over '{over}': {reason:?}");
    (tree.clone(), MoveOutcome::Noop(reason))
}

/// Array move among chapter siblings: remove the active chapter, reinsert it
/// at the over chapter's position.
fn move_chapter(tree: &CourseTree, active: &str, over: &str) -> (CourseTree, MoveOutcome) {
    let Some(from) = tree.chapters.get_index_of(active) else {
        return noop(tree, active, over, NoopReason::UnknownActive);
    };
    let Some(to) = tree.chapters.get_index_of(over) else {
        return noop(tree, active, over, NoopReason::UnknownOver);
    };
    let mut next = tree.clone();
    next.chapters.move_index(from, to);
    reindex(&mut next);
    (next, MoveOutcome::Moved(MoveKind::ChapterReorder))
}

/// Remove the active lesson from its source chapter and insert it into the
/// over lesson's chapter, immediately before the over lesson. Source and
/// destination may be the same chapter.
fn move_lesson(tree: &CourseTree, active: &str, over: &str) -> (CourseTree, MoveOutcome) {
    let Some(source_id) = tree.find_lesson(active).map(|(c, _)| c.id.clone()) else {
        return noop(tree, active, over, NoopReason::UnknownActive);
    };
    let Some(dest_id) = tree.find_lesson(over).map(|(c, _)| c.id.clone()) else {
        return noop(tree, active, over, NoopReason::UnknownOver);
    };

    let mut next = tree.clone();
    // Both lookups above succeeded on the source tree, so these hold.
    let Some(mut lesson) = next
        .chapters
        .get_mut(&source_id)
        .and_then(|c| c.lessons.shift_remove(active))
    else {
        return noop(tree, active, over, NoopReason::UnknownActive);
    };
    let Some(dest) = next.chapters.get_mut(&dest_id) else {
        return noop(tree, active, over, NoopReason::UnknownOver);
    };
    let Some(slot) = dest.lessons.get_index_of(over) else {
        return noop(tree, active, over, NoopReason::UnknownOver);
    };
    lesson.chapter_id = dest_id.clone();
    dest.lessons.shift_insert(slot, lesson.id.clone(), lesson);
    reindex(&mut next);

    let kind = if source_id == dest_id {
        MoveKind::LessonReorder
    } else {
        MoveKind::LessonTransfer
    };
    (next, MoveOutcome::Moved(kind))
}

/// Assign `order_index = position` by enumeration over the chapter sequence
/// and every lesson sequence. Idempotent; runs after every structural change.
pub fn reindex(tree: &mut CourseTree) {
    for (pos, chapter) in tree.chapters.values_mut().enumerate() {
        chapter.order_index = pos as u32;
        for (lpos, lesson) in chapter.lessons.values_mut().enumerate() {
            lesson.order_index = lpos as u32;
        }
    }
}
