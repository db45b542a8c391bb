use curriculum_reconciler::{
    ChapterPayload, CurriculumEditor, EditorState, MoveKind, MoveOutcome,
};
use serde_json::json;

fn load_fixture() -> Vec<ChapterPayload> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "title": "Intro",
            "orderIndex": 0,
            "lessons": [
                {
                    "id": "10",
                    "title": "Welcome",
                    "orderIndex": 0,
                    "duration": 4,
                    "type": "VIDEO",
                    "videoUrl": "https://cdn.example/welcome.mp4",
                },
                {
                    "id": "11",
                    "title": "Course notes",
                    "orderIndex": 1,
                    "duration": 10,
                    "type": "MARKDOWN",
                    "markdownContent": "# Notes",
                },
            ],
        },
        {
            "id": "2",
            "title": "Advanced",
            "orderIndex": 1,
            "lessons": [
                {
                    "id": "20",
                    "title": "Deep dive",
                    "orderIndex": 0,
                    "duration": 30,
                    "type": "YOUTUBE",
                    "youtubeUrl": "https://youtu.be/deep",
                },
            ],
        },
    ]))
    .expect("parse load fixture")
}

#[test]
fn chapter_move_scenario() {
    // Move chapter 2 before chapter 1; lesson order within each chapter is
    // untouched.
    let mut ed = CurriculumEditor::from_load(load_fixture());
    let outcome = ed.apply_drag("chapter-2", "chapter-1");
    assert_eq!(outcome, MoveOutcome::Moved(MoveKind::ChapterReorder));

    let tree = ed.tree();
    let first = tree.chapter_at(0).expect("first chapter");
    let second = tree.chapter_at(1).expect("second chapter");
    assert_eq!((first.id.as_str(), first.order_index), ("2", 0));
    assert_eq!((second.id.as_str(), second.order_index), ("1", 1));

    let intro: Vec<_> = tree
        .lessons_of("1")
        .expect("intro lessons")
        .iter()
        .map(|l| (l.id.clone(), l.order_index))
        .collect();
    assert_eq!(intro, vec![("10".to_string(), 0), ("11".to_string(), 1)]);
    assert_eq!(tree.lessons_of("2").expect("advanced lessons").len(), 1);
}

#[test]
fn drag_save_reload_round_trip() {
    let mut ed = CurriculumEditor::from_load(load_fixture());

    // Pull the deep-dive lesson up into the intro chapter, before the notes.
    assert_eq!(
        ed.apply_drag("lesson-20", "lesson-11"),
        MoveOutcome::Moved(MoveKind::LessonTransfer)
    );
    assert_eq!(ed.tree().lesson_count("1"), Some(3));
    assert_eq!(ed.tree().lesson_count("2"), Some(0));
    assert_eq!(ed.tree().total_duration("1"), Some(44));

    let payload = ed.begin_save().expect("project save order");
    let wire = serde_json::to_value(&payload).expect("serialize payload");
    assert_eq!(
        wire,
        json!({
            "chapters": [
                {
                    "chapterId": "1",
                    "orderIndex": 0,
                    "lessons": [
                        { "lessonId": "10", "orderIndex": 0 },
                        { "lessonId": "20", "orderIndex": 1 },
                        { "lessonId": "11", "orderIndex": 2 },
                    ],
                },
                { "chapterId": "2", "orderIndex": 1, "lessons": [] },
            ],
        })
    );

    // Server accepts; the editor is clean again and a fresh load of what the
    // server now holds reconciles to the same tree.
    ed.save_succeeded();
    assert_eq!(ed.state(), EditorState::Loaded);
    let snapshot = ed.tree().snapshot();
    let before = ed.tree().clone();
    ed.reconcile(snapshot);
    assert_eq!(ed.tree(), &before);
}

#[test]
fn projection_counts_match_tree_after_many_moves() {
    let mut ed = CurriculumEditor::from_load(load_fixture());
    for (active, over) in [
        ("lesson-10", "lesson-20"),
        ("chapter-1", "chapter-2"),
        ("lesson-11", "lesson-10"),
        ("lesson-11", "bogus"),
        ("chapter-2", "lesson-10"),
    ] {
        ed.apply_drag(active, over);
    }

    let chapters = ed.tree().chapter_count();
    let lessons = ed.tree().total_lessons();
    assert_eq!(chapters, 2);
    assert_eq!(lessons, 3);

    let payload = ed.begin_save().expect("project save order");
    assert_eq!(payload.chapters.len(), chapters);
    let projected: usize = payload.chapters.iter().map(|c| c.lessons.len()).sum();
    assert_eq!(projected, lessons);
    for chapter in &payload.chapters {
        for (slot, lesson) in chapter.lessons.iter().enumerate() {
            assert_eq!(lesson.order_index as usize, slot);
        }
    }
}

#[test]
fn external_mutation_forces_reload_over_dirty_state() {
    let mut ed = CurriculumEditor::from_load(load_fixture());
    ed.apply_drag("chapter-2", "chapter-1");
    assert!(ed.is_dirty());

    // Another screen deleted the Advanced chapter; its confirmed mutation
    // arrives as a fresh authoritative load.
    let refreshed: Vec<ChapterPayload> = serde_json::from_value(json!([
        {
            "id": "1",
            "title": "Intro",
            "orderIndex": 0,
            "lessons": [
                {
                    "id": "10",
                    "title": "Welcome",
                    "orderIndex": 0,
                    "duration": 4,
                    "type": "VIDEO",
                    "videoUrl": "https://cdn.example/welcome.mp4",
                },
            ],
        },
    ]))
    .expect("parse refreshed load");

    ed.reconcile(refreshed);
    assert_eq!(ed.state(), EditorState::Loaded);
    assert_eq!(ed.tree().chapter_count(), 1);
    assert_eq!(ed.tree().total_lessons(), 1);
    assert!(matches!(
        ed.begin_save(),
        Err(curriculum_reconciler::ReorderError::NothingToSave)
    ));
}
