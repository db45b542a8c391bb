//! Projection of the in-memory tree into the order-only save payload
use crate::errors::ReorderError;
use crate::types::CourseTree;
use crate::wire::{ChapterOrder, LessonOrder, SaveOrderPayload};

/// Serialize the tree's ordering into the minimal wire payload.
///
/// Every chapter and lesson appears exactly once and carries nothing but its
/// id and `order_index` — this is an ordering instruction, not an entity
/// update. Fails fast if any lesson's owning-chapter back-reference does not
/// match the chapter it sits in: that inconsistency is a programming defect
/// and must not be silently dropped from the payload.
pub fn project_save_order(tree: &CourseTree) -> Result<SaveOrderPayload, ReorderError> {
    let mut chapters = Vec::with_capacity(tree.chapter_count());
    for chapter in tree.chapters() {
        let mut lessons = Vec::with_capacity(chapter.lesson_count());
        for lesson in chapter.lessons.values() {
            if lesson.chapter_id != chapter.id {
                return Err(ReorderError::OrphanLesson {
                    lesson_id: lesson.id.clone(),
                    claimed: lesson.chapter_id.clone(),
                    actual: chapter.id.clone(),
                });
            }
            lessons.push(LessonOrder {
                lesson_id: lesson.id.clone(),
                order_index: lesson.order_index,
            });
        }
        chapters.push(ChapterOrder {
            chapter_id: chapter.id.clone(),
            order_index: chapter.order_index,
            lessons,
        });
    }
    Ok(SaveOrderPayload { chapters })
}
