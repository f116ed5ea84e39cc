use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use taskswipe_core::{Category, Priority, Task, TaskDraft, TaskValidationError};
use uuid::Uuid;

fn due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 2).unwrap()
}

#[test]
fn draft_defaults_match_add_form() {
    let draft = TaskDraft::for_date(due());
    assert_eq!(draft.title, "");
    assert_eq!(draft.due_date, due());
    assert_eq!(draft.due_time, None);
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.category, Category::Personal);
}

#[test]
fn from_draft_sets_open_state_and_trims_title() {
    let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap();
    let mut draft = TaskDraft::for_date(due());
    draft.title = "  buy oats ".to_string();
    draft.category = Category::Shopping;

    let task = Task::from_draft(draft, now).unwrap();
    assert!(!task.id.is_nil());
    assert_eq!(task.title, "buy oats");
    assert!(!task.completed);
    assert_eq!(task.completed_at, None);
    assert_eq!(task.created_at, now);
    assert_eq!(task.category, Category::Shopping);
}

#[test]
fn blank_title_is_rejected() {
    let draft = TaskDraft::for_date(due());
    let err = Task::from_draft(draft, Utc::now()).unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyTitle);
}

#[test]
fn with_id_rejects_nil_id() {
    let mut draft = TaskDraft::for_date(due());
    draft.title = "x".to_string();
    let err = Task::with_id(Uuid::nil(), draft, Utc::now()).unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created = Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap();
    let done = Utc.with_ymd_and_hms(2026, 4, 2, 18, 0, 0).unwrap();

    let mut draft = TaskDraft::for_date(due());
    draft.title = "gym".to_string();
    draft.due_time = NaiveTime::from_hms_opt(7, 45, 0);
    draft.priority = Priority::High;
    draft.category = Category::Health;
    let mut task = Task::with_id(id, draft, created).unwrap();
    task.toggle_completed(done);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "gym");
    assert_eq!(json["dueDate"], "2026-04-02");
    assert_eq!(json["dueTime"], "07:45");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["category"], "health");
    assert_eq!(json["completed"], true);
    assert!(json["completedAt"].is_string());
    assert!(json["createdAt"].is_string());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_accepts_empty_due_time() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "read",
        "dueDate": "2026-04-02",
        "dueTime": "",
        "priority": "low",
        "category": "personal",
        "completed": false,
        "completedAt": null,
        "createdAt": "2026-04-01T09:30:00Z"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.due_time, None);
    assert_eq!(task.priority, Priority::Low);
}

#[test]
fn deserialize_rejects_inconsistent_completion() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "read",
        "dueDate": "2026-04-02",
        "completed": true,
        "completedAt": null,
        "createdAt": "2026-04-01T09:30:00Z"
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("completed_at does not match"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_category() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "read",
        "dueDate": "2026-04-02",
        "category": "hobby",
        "createdAt": "2026-04-01T09:30:00Z"
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}
