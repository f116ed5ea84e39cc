use chrono::{NaiveDate, Utc};
use taskswipe_core::{build_day_cells, CalendarWindow, Task, TaskDraft};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn task_due(day: NaiveDate) -> Task {
    let mut draft = TaskDraft::for_date(day);
    draft.title = "due".to_string();
    Task::from_draft(draft, Utc::now()).unwrap()
}

#[test]
fn week_window_spans_three_days_each_side() {
    let today = date(2026, 7, 15);
    let cells = build_day_cells(today, CalendarWindow::Week, today, today, &[]);

    assert_eq!(cells.len(), 7);
    assert_eq!(cells.first().unwrap().date, date(2026, 7, 12));
    assert_eq!(cells.last().unwrap().date, date(2026, 7, 18));
    assert!(cells[3].is_today);
    assert!(cells[3].is_selected);
    assert_eq!(cells.iter().filter(|cell| cell.is_today).count(), 1);
    assert_eq!(cells[3].day_name, "Wed");
    assert_eq!(cells[3].day_number, 15);
}

#[test]
fn month_window_has_thirty_ascending_days() {
    let today = date(2026, 1, 10);
    let cells = build_day_cells(today, CalendarWindow::Month, today, today, &[]);

    assert_eq!(cells.len(), 30);
    assert_eq!(cells[0].date, date(2025, 12, 26));
    assert!(cells.windows(2).all(|pair| pair[0].date.succ_opt() == Some(pair[1].date)));
    assert!(cells[15].is_today);
}

#[test]
fn flags_reflect_selection_and_tasks() {
    let today = date(2026, 7, 15);
    let selected = date(2026, 7, 17);
    let tasks = vec![task_due(date(2026, 7, 13)), task_due(date(2026, 8, 30))];

    let cells = build_day_cells(today, CalendarWindow::Week, today, selected, &tasks);
    let with_tasks: Vec<_> = cells.iter().filter(|c| c.has_tasks).map(|c| c.date).collect();
    assert_eq!(with_tasks, vec![date(2026, 7, 13)]);

    let selected_cells: Vec<_> = cells.iter().filter(|c| c.is_selected).collect();
    assert_eq!(selected_cells.len(), 1);
    assert_eq!(selected_cells[0].date, selected);
    assert!(!selected_cells[0].is_today);
}

#[test]
fn anchor_away_from_today_has_no_today_cell() {
    let today = date(2026, 7, 15);
    let cells = build_day_cells(date(2026, 9, 1), CalendarWindow::Week, today, today, &[]);
    assert!(cells.iter().all(|cell| !cell.is_today && !cell.is_selected));
}
