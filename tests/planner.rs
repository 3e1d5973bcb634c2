use academic_planner::attachment::{encode_bytes, AttachmentError};
use academic_planner::entities::{Category, ItemDetails, ItemId, Status, View};
use academic_planner::form::{FieldKind, FormValues};
use academic_planner::planner::{Planner, PlannerError, PlannerSettings, Submission};
use academic_planner::storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use std::collections::HashSet;

fn planner() -> Planner<MemoryStore> {
    Planner::load(MemoryStore::new(), PlannerSettings::default())
}

fn project_values(title: &str) -> FormValues {
    let mut values = FormValues::blank(Category::Projects);
    values.set(FieldKind::Title, title);
    values.set(FieldKind::Course, "CS101");
    values.set(FieldKind::Deadline, "2025-03-01");
    values
}

fn add_project(planner: &mut Planner<MemoryStore>, title: &str) -> ItemId {
    planner.open_add(Category::Projects);
    planner.submit(&project_values(title), None).unwrap()
}

fn add_book(planner: &mut Planner<MemoryStore>, title: &str, file: Option<(&str, &[u8])>) -> ItemId {
    let mut values = FormValues::blank(Category::Books);
    values.set(FieldKind::Title, title);
    values.set(FieldKind::Semester, "Spring");
    let attachment = file.map(|(name, bytes)| encode_bytes(name, bytes, 1024).unwrap());
    planner.open_add(Category::Books);
    planner.submit(&values, attachment).unwrap()
}

/// Store whose writes always fail
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}

#[test]
fn test_sequential_adds_get_distinct_ids() {
    let mut planner = planner();
    let ids: Vec<ItemId> = (0..20).map(|i| add_project(&mut planner, &format!("P{}", i))).collect();

    let unique: HashSet<&ItemId> = ids.iter().collect();
    assert_eq!(unique.len(), 20);
    assert_eq!(planner.state().items.projects.len(), 20);
    // Insertion order is display order
    assert_eq!(planner.state().items.projects[0].title, "P0");
    assert_eq!(planner.state().items.projects[19].title, "P19");
}

#[test]
fn test_add_persists_and_closes_modal() {
    let mut planner = planner();
    planner.open_add(Category::Projects);
    assert!(planner.modal().is_some());

    let id = planner.submit(&project_values("Thesis"), None).unwrap();
    assert!(planner.modal().is_none());
    assert_eq!(planner.store().write_count(), 1);

    let item = planner.item(Category::Projects, &id).unwrap();
    assert_eq!(item.status(), Some(Status::Pending));
    assert_eq!(item.course(), Some("CS101"));
}

#[test]
fn test_navigate_does_not_persist() {
    let mut planner = planner();
    planner.navigate(View::Category(Category::Cts));
    assert_eq!(planner.state().active_view, View::Category(Category::Cts));
    assert_eq!(planner.store().write_count(), 0);
}

#[test]
fn test_toggle_twice_restores_status() {
    let mut planner = planner();
    let id = add_project(&mut planner, "Thesis");
    let before = planner.item(Category::Projects, &id).cloned().unwrap();

    assert_eq!(planner.toggle_status(Category::Projects, &id).unwrap(), Some(Status::Done));
    assert_eq!(planner.toggle_status(Category::Projects, &id).unwrap(), Some(Status::Pending));

    assert_eq!(planner.item(Category::Projects, &id), Some(&before));
    assert_eq!(planner.store().write_count(), 3);
}

#[test]
fn test_toggle_ignores_unsupported_targets() {
    let mut planner = planner();
    let book = add_book(&mut planner, "Calculus", None);
    let writes = planner.store().write_count();

    assert_eq!(planner.toggle_status(Category::Books, &book).unwrap(), None);
    assert_eq!(
        planner.toggle_status(Category::Projects, &ItemId::new("missing")).unwrap(),
        None
    );
    assert_eq!(planner.store().write_count(), writes);
    assert!(planner.item(Category::Books, &book).unwrap().status().is_none());
}

#[test]
fn test_declined_delete_keeps_list() {
    let mut planner = planner();
    add_project(&mut planner, "A");
    let id = add_project(&mut planner, "B");
    let before = planner.state().items.clone();

    let removed = planner
        .delete_item(Category::Projects, &id, |item| {
            assert_eq!(item.title, "B");
            false
        })
        .unwrap();

    assert!(!removed);
    assert_eq!(planner.state().items, before);
}

#[test]
fn test_confirmed_delete_removes_item() {
    let mut planner = planner();
    let keep = add_project(&mut planner, "A");
    let id = add_project(&mut planner, "B");

    assert!(planner.delete_item(Category::Projects, &id, |_| true).unwrap());
    assert!(planner.item(Category::Projects, &id).is_none());
    assert!(planner.item(Category::Projects, &keep).is_some());
}

#[test]
fn test_missing_targets() {
    let mut planner = planner();
    let missing = ItemId::new("404");

    assert!(matches!(
        planner.open_edit(Category::Projects, &missing),
        Err(PlannerError::MissingTarget { .. })
    ));
    assert!(planner.modal().is_none());
    assert!(matches!(
        planner.delete_item(Category::Projects, &missing, |_| true),
        Err(PlannerError::MissingTarget { .. })
    ));
}

#[test]
fn test_update_keeps_id_created_at_and_status() {
    let mut planner = planner();
    let id = add_project(&mut planner, "Draft");
    planner.toggle_status(Category::Projects, &id).unwrap();
    let original = planner.item(Category::Projects, &id).cloned().unwrap();

    planner.open_edit(Category::Projects, &id).unwrap();
    assert_eq!(planner.state().editing_item.as_ref(), Some(&original));
    let mut values = FormValues::from_item(&original);
    values.set(FieldKind::Title, "Final");
    planner.submit(&values, None).unwrap();

    let updated = planner.item(Category::Projects, &id).unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.status(), Some(Status::Done));
    assert!(planner.state().editing_item.is_none());
    assert_eq!(planner.state().items.projects.len(), 1);
}

#[test]
fn test_update_without_file_keeps_attachment() {
    let mut planner = planner();
    let id = add_book(&mut planner, "Physics", Some(("notes.pdf", b"%PDF-1.4")));
    let book = planner.item(Category::Books, &id).cloned().unwrap();

    planner.open_edit(Category::Books, &id).unwrap();
    let mut values = FormValues::from_item(&book);
    values.set(FieldKind::Semester, "Fall");
    planner.submit(&values, None).unwrap();

    let updated = planner.item(Category::Books, &id).unwrap();
    assert_eq!(updated.semester(), Some("Fall"));
    assert_eq!(updated.attachment(), book.attachment());
}

#[test]
fn test_update_with_file_replaces_attachment() {
    let mut planner = planner();
    let id = add_book(&mut planner, "Physics", Some(("notes.pdf", b"%PDF-1.4")));
    let book = planner.item(Category::Books, &id).cloned().unwrap();

    planner.open_edit(Category::Books, &id).unwrap();
    let replacement = encode_bytes("slides.txt", b"hello", 1024).unwrap();
    planner.submit(&FormValues::from_item(&book), Some(replacement.clone())).unwrap();

    let updated = planner.item(Category::Books, &id).unwrap();
    assert_eq!(updated.attachment(), Some(&replacement));
    assert_eq!(replacement.file_url, "data:text/plain;base64,aGVsbG8=");
}

#[test]
fn test_classes_and_books_shapes() {
    let mut planner = planner();
    let mut values = FormValues::blank(Category::Classes);
    values.set(FieldKind::Title, "Databases");
    values.set(FieldKind::Time, "13:00");
    planner.open_add(Category::Classes);
    let class_id = planner.submit(&values, None).unwrap();

    let class = planner.item(Category::Classes, &class_id).unwrap();
    let meeting = class.schedule().unwrap();
    assert_eq!(meeting.day, chrono::Weekday::Mon);
    assert!(class.status().is_none());
    assert!(class.deadline().is_none());

    let book_id = add_book(&mut planner, "Networks", None);
    let book = planner.item(Category::Books, &book_id).unwrap();
    assert!(matches!(book.details, ItemDetails::Book(_)));
    assert!(book.status().is_none());
    assert!(book.attachment().is_none());
}

#[test]
fn test_invalid_form_keeps_modal_open() {
    let mut planner = planner();
    let session = planner.open_add(Category::Classes);
    let mut values = FormValues::blank(Category::Classes);
    values.set(FieldKind::Title, "Databases");

    assert!(matches!(planner.begin_submit(&values), Err(PlannerError::Form(_))));
    assert_eq!(planner.modal(), Some(&session));
    assert!(planner.state().items.classes.is_empty());
    assert_eq!(planner.store().write_count(), 0);
}

#[test]
fn test_submit_without_modal() {
    let mut planner = planner();
    assert!(matches!(
        planner.submit(&project_values("Orphan"), None),
        Err(PlannerError::NoModal)
    ));
}

#[test]
fn test_begin_submit_without_file_commits() {
    let mut planner = planner();
    planner.open_add(Category::Projects);
    match planner.begin_submit(&project_values("Quick")).unwrap() {
        Submission::Committed(id) => assert!(planner.item(Category::Projects, &id).is_some()),
        other => panic!("expected commit, got {:?}", other),
    }
}

#[test]
fn test_size_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let limit = PlannerSettings::default().max_attachment_bytes;

    let exact = dir.path().join("exact.pdf");
    std::fs::File::create(&exact).unwrap().set_len(limit).unwrap();
    let over = dir.path().join("over.pdf");
    std::fs::File::create(&over).unwrap().set_len(limit + 1).unwrap();

    let mut planner = planner();
    let mut values = FormValues::blank(Category::Books);
    values.set(FieldKind::Title, "Big book");

    planner.open_add(Category::Books);
    values.set(FieldKind::File, over.to_string_lossy());
    match planner.begin_submit(&values) {
        Err(PlannerError::Attachment(AttachmentError::Oversized { size, limit: l })) => {
            assert_eq!(size, limit + 1);
            assert_eq!(l, limit);
        }
        other => panic!("expected oversized error, got {:?}", other),
    }
    // No mutation, modal still open and accepting submits
    assert!(planner.state().items.books.is_empty());
    assert_eq!(planner.store().write_count(), 0);
    assert!(!planner.modal().unwrap().busy);

    values.set(FieldKind::File, exact.to_string_lossy());
    match planner.begin_submit(&values).unwrap() {
        Submission::Encoding(request) => {
            assert_eq!(request.path, exact);
            assert_eq!(request.limit, limit);
        }
        other => panic!("expected encoding, got {:?}", other),
    }
    assert!(planner.modal().unwrap().busy);
}

#[test]
fn test_busy_modal_rejects_submit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "notes").unwrap();

    let mut planner = planner();
    let mut values = FormValues::blank(Category::Books);
    values.set(FieldKind::Title, "Notes");
    values.set(FieldKind::File, path.to_string_lossy());

    planner.open_add(Category::Books);
    assert!(matches!(planner.begin_submit(&values), Ok(Submission::Encoding(_))));
    assert!(matches!(planner.begin_submit(&values), Err(PlannerError::Busy)));
}

#[test]
fn test_finish_submit_commits_encoded_file() {
    let mut planner = planner();
    let mut values = FormValues::blank(Category::Books);
    values.set(FieldKind::Title, "Notes");
    let session = planner.open_add(Category::Books);

    let encoded = encode_bytes("notes.txt", b"notes", 1024);
    let id = planner.finish_submit(session.generation, &values, encoded).unwrap().unwrap();

    let book = planner.item(Category::Books, &id).unwrap();
    assert_eq!(book.attachment().unwrap().file_name, "notes.txt");
    assert!(planner.modal().is_none());
}

#[test]
fn test_stale_encode_result_is_discarded() {
    let mut planner = planner();
    let mut values = FormValues::blank(Category::Books);
    values.set(FieldKind::Title, "Old");

    let first = planner.open_add(Category::Books);
    planner.close_modal();
    let second = planner.open_add(Category::Books);
    assert!(second.generation > first.generation);

    let encoded = encode_bytes("old.txt", b"old", 1024);
    assert_eq!(planner.finish_submit(first.generation, &values, encoded).unwrap(), None);
    assert!(planner.state().items.books.is_empty());
    assert_eq!(planner.modal(), Some(&second));
}

#[test]
fn test_failed_encode_keeps_modal_open() {
    let mut planner = planner();
    let mut values = FormValues::blank(Category::Books);
    values.set(FieldKind::Title, "Broken");
    let session = planner.open_add(Category::Books);

    let failed = Err(AttachmentError::InvalidDataUrl);
    assert!(matches!(
        planner.finish_submit(session.generation, &values, failed),
        Err(PlannerError::Attachment(_))
    ));
    assert!(planner.state().items.books.is_empty());
    let modal = planner.modal().unwrap();
    assert!(!modal.busy);
}

#[test]
fn test_storage_failure_keeps_in_memory_state() {
    let mut planner = Planner::load(ReadOnlyStore, PlannerSettings::default());
    planner.open_add(Category::Projects);

    let result = planner.submit(&project_values("Unsaved"), None);
    assert!(matches!(result, Err(PlannerError::Storage(_))));
    assert_eq!(planner.state().items.projects.len(), 1);
    assert!(planner.modal().is_none());
}

#[test]
fn test_save_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let mut planner = planner();
    let id = add_book(&mut planner, "Physics", Some(("notes.txt", b"hello")));

    let first = planner.save_attachment(Category::Books, &id, Some(dir.path())).unwrap();
    assert_eq!(first, dir.path().join("notes.txt"));
    assert_eq!(std::fs::read(&first).unwrap(), b"hello");

    // Existing files are never overwritten
    let second = planner.save_attachment(Category::Books, &id, Some(dir.path())).unwrap();
    assert_eq!(second, dir.path().join("notes (1).txt"));

    let plain = add_book(&mut planner, "No file", None);
    assert!(matches!(
        planner.save_attachment(Category::Books, &plain, Some(dir.path())),
        Err(PlannerError::NoAttachment { .. })
    ));
}

#[test]
fn test_reload_restores_items_only() {
    let mut planner = planner();
    add_project(&mut planner, "Persisted");
    planner.navigate(View::Category(Category::Projects));
    let items = planner.state().items.clone();

    let store = planner.store().clone();
    let reloaded = Planner::load(store, PlannerSettings::default());
    assert_eq!(reloaded.state().items, items);
    assert_eq!(reloaded.state().active_view, View::Dashboard);
}
