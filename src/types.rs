//! Tree model for the two-level curriculum: chapters owning ordered lessons
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::move_engine::reindex;
use crate::wire::ChapterPayload;

/// Type-specific lesson content, tagged exactly the way the wire tags it.
/// Reordering never touches any of these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LessonContent {
    #[serde(rename = "VIDEO")]
    Video {
        #[serde(rename = "videoUrl")]
        video_url: String,
    },
    #[serde(rename = "YOUTUBE")]
    Youtube {
        #[serde(rename = "youtubeUrl")]
        youtube_url: String,
    },
    #[serde(rename = "MARKDOWN")]
    Markdown {
        #[serde(rename = "markdownContent")]
        markdown_content: String,
    },
    #[serde(rename = "PDF")]
    Pdf {
        #[serde(default)]
        attachments: Vec<String>,
    },
}

impl LessonContent {
    pub fn kind(&self) -> &'static str {
        match self {
            LessonContent::Video { .. } => "VIDEO",
            LessonContent::Youtube { .. } => "YOUTUBE",
            LessonContent::Markdown { .. } => "MARKDOWN",
            LessonContent::Pdf { .. } => "PDF",
        }
    }
}

/// Leaf content unit. `chapter_id` is the owning-chapter back-reference;
/// the projector verifies it against the chapter the lesson actually sits in.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub chapter_id: String,
    pub order_index: u32,
    /// Duration in minutes.
    pub duration: u32,
    pub content: LessonContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub order_index: u32,
    pub lessons: IndexMap<String, Lesson>,
}

impl Chapter {
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Sum of lesson durations, in minutes.
    pub fn total_duration(&self) -> u32 {
        self.lessons.values().map(|l| l.duration).sum()
    }
}

/// The invariant-bearing ordered tree for one course.
///
/// Sibling sequences are id-keyed insertion-ordered maps; `order_index`
/// values mirror map positions and are kept contiguous by [`reindex`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseTree {
    pub(crate) chapters: IndexMap<String, Chapter>,
}

impl CourseTree {
    /// Build a tree from authoritative load data. Siblings are sorted by the
    /// served `orderIndex` and then reindexed, so gaps or duplicates in the
    /// input normalize to contiguous zero-based indices.
    pub fn from_load(mut chapters: Vec<ChapterPayload>) -> Self {
        chapters.sort_by_key(|c| c.order_index);
        let mut map = IndexMap::with_capacity(chapters.len());
        for mut cp in chapters {
            cp.lessons.sort_by_key(|l| l.order_index);
            let mut lessons = IndexMap::with_capacity(cp.lessons.len());
            for lp in cp.lessons {
                lessons.insert(
                    lp.id.clone(),
                    Lesson {
                        id: lp.id,
                        title: lp.title,
                        chapter_id: cp.id.clone(),
                        order_index: lp.order_index,
                        duration: lp.duration,
                        content: lp.content,
                    },
                );
            }
            map.insert(
                cp.id.clone(),
                Chapter {
                    id: cp.id,
                    title: cp.title,
                    order_index: cp.order_index,
                    lessons,
                },
            );
        }
        let mut tree = CourseTree { chapters: map };
        reindex(&mut tree);
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn total_lessons(&self) -> usize {
        self.chapters.values().map(|c| c.lessons.len()).sum()
    }

    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.values()
    }

    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.get(id)
    }

    pub fn chapter_at(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get_index(index).map(|(_, c)| c)
    }

    pub fn lessons_of(&self, chapter_id: &str) -> Option<Vec<&Lesson>> {
        self.chapters
            .get(chapter_id)
            .map(|c| c.lessons.values().collect())
    }

    pub fn lesson_count(&self, chapter_id: &str) -> Option<usize> {
        self.chapters.get(chapter_id).map(Chapter::lesson_count)
    }

    pub fn total_duration(&self, chapter_id: &str) -> Option<u32> {
        self.chapters.get(chapter_id).map(Chapter::total_duration)
    }

    /// Find a lesson anywhere in the tree, together with its owning chapter.
    pub fn find_lesson(&self, lesson_id: &str) -> Option<(&Chapter, &Lesson)> {
        self.chapters
            .values()
            .find_map(|c| c.lessons.get(lesson_id).map(|l| (c, l)))
    }

    /// Append a new chapter with a fresh id and reindex.
    pub fn add_chapter(&mut self, title: impl Into<String>) -> &Chapter {
        let id = Uuid::new_v4().to_string();
        self.chapters.insert(
            id.clone(),
            Chapter {
                id: id.clone(),
                title: title.into(),
                order_index: 0,
                lessons: IndexMap::new(),
            },
        );
        reindex(self);
        &self.chapters[&id]
    }

    /// Append a new lesson to `chapter_id` with a fresh id and reindex.
    /// Returns `None` when the chapter is unknown.
    pub fn add_lesson(
        &mut self,
        chapter_id: &str,
        title: impl Into<String>,
        content: LessonContent,
        duration: u32,
    ) -> Option<&Lesson> {
        let chapter = self.chapters.get_mut(chapter_id)?;
        let id = Uuid::new_v4().to_string();
        chapter.lessons.insert(
            id.clone(),
            Lesson {
                id: id.clone(),
                title: title.into(),
                chapter_id: chapter_id.to_string(),
                order_index: 0,
                duration,
                content,
            },
        );
        reindex(self);
        self.chapters.get(chapter_id)?.lessons.get(&id)
    }

    pub fn rename_chapter(&mut self, chapter_id: &str, title: impl Into<String>) -> bool {
        match self.chapters.get_mut(chapter_id) {
            Some(c) => {
                c.title = title.into();
                true
            }
            None => false,
        }
    }

    pub fn rename_lesson(&mut self, lesson_id: &str, title: impl Into<String>) -> bool {
        for chapter in self.chapters.values_mut() {
            if let Some(l) = chapter.lessons.get_mut(lesson_id) {
                l.title = title.into();
                return true;
            }
        }
        false
    }

    /// Delete a chapter and everything it owns, then reindex the survivors.
    pub fn remove_chapter(&mut self, chapter_id: &str) -> bool {
        let removed = self.chapters.shift_remove(chapter_id).is_some();
        if removed {
            reindex(self);
        }
        removed
    }

    pub fn remove_lesson(&mut self, lesson_id: &str) -> bool {
        let mut removed = false;
        for chapter in self.chapters.values_mut() {
            if chapter.lessons.shift_remove(lesson_id).is_some() {
                removed = true;
                break;
            }
        }
        if removed {
            reindex(self);
        }
        removed
    }

    /// Full snapshot in the load-payload shape, for callers that round-trip
    /// the tree through their own persistence layer.
    pub fn snapshot(&self) -> Vec<ChapterPayload> {
        self.chapters
            .values()
            .map(|c| ChapterPayload {
                id: c.id.clone(),
                title: c.title.clone(),
                order_index: c.order_index,
                lessons: c
                    .lessons
                    .values()
                    .map(|l| crate::wire::LessonPayload {
                        id: l.id.clone(),
                        title: l.title.clone(),
                        order_index: l.order_index,
                        duration: l.duration,
                        content: l.content.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

const CHAPTER_PREFIX: &str = "chapter-";
const LESSON_PREFIX: &str = "lesson-";

/// A drag-event element id as the UI layer tags it: `chapter-<id>` or
/// `lesson-<id>`. Anything else fails to parse and drives the no-op path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragId {
    Chapter(String),
    Lesson(String),
}

impl DragId {
    pub fn parse(raw: &str) -> Option<DragId> {
        if let Some(rest) = raw.strip_prefix(CHAPTER_PREFIX) {
            if !rest.is_empty() {
                return Some(DragId::Chapter(rest.to_string()));
            }
        } else if let Some(rest) = raw.strip_prefix(LESSON_PREFIX) {
            if !rest.is_empty() {
                return Some(DragId::Lesson(rest.to_string()));
            }
        }
        None
    }

    pub fn encode(&self) -> String {
        match self {
            DragId::Chapter(id) => format!("{CHAPTER_PREFIX}{id}"),
            DragId::Lesson(id) => format!("{LESSON_PREFIX}{id}"),
        }
    }
}
