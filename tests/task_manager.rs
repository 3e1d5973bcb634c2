use academic_planner::entities::Category;
use academic_planner::form::FormValues;
use academic_planner::planner::EncodeRequest;
use academic_planner::ui::core::{Action, TaskManager};

#[tokio::test]
async fn test_encode_task_reports_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let (mut manager, mut rx) = TaskManager::new();
    let task_id = manager.spawn_attachment_encode(EncodeRequest {
        generation: 7,
        path: path.clone(),
        limit: 1024,
        values: FormValues::blank(Category::Books),
    });
    assert_eq!(manager.task_count(), 1);

    match rx.recv().await.unwrap() {
        Action::AttachmentEncoded { generation, result, .. } => {
            assert_eq!(generation, 7);
            assert_eq!(result.unwrap().file_url, "data:text/plain;base64,aGVsbG8=");
        }
        other => panic!("unexpected action {:?}", other),
    }

    // The handle may need another poll to report completion
    let mut finished = Vec::new();
    for _ in 0..100 {
        finished = manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    }
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].0, task_id);
    assert!(finished[0].1.contains("notes.txt"));
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_attachment_encode(EncodeRequest {
        generation: 1,
        path: "/nonexistent/file.pdf".into(),
        limit: 1024,
        values: FormValues::blank(Category::Books),
    });
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
