//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskswipe_core` linkage and print its version.
//! - Drive one scripted swipe session against an in-memory board.
//!
//! Set `TASKSWIPE_LOG_DIR` (absolute) to capture core logs.

use chrono::{Local, Utc};
use std::error::Error;
use taskswipe_core::{
    init_logging, BoardConfig, LogConfig, MemoryStorage, Priority, TaskBoard, ViewMode,
};

fn main() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LogConfig::from_env()? {
        init_logging(&config)?;
    }

    println!("taskswipe_core ping={}", taskswipe_core::ping());
    println!("taskswipe_core version={}", taskswipe_core::core_version());

    let today = Local::now().date_naive();
    let mut board = TaskBoard::open(MemoryStorage::default(), BoardConfig::default(), today)?;

    let mut draft = board.draft_for_selected();
    draft.title = "Morning run".to_string();
    draft.priority = Priority::High;
    board.add_task(draft, Utc::now())?;

    let mut draft = board.draft_for_selected();
    draft.title = "Old reminder".to_string();
    board.add_task(draft, Utc::now())?;

    for task in board.visible_tasks() {
        println!(
            "task due={} priority={} category={}",
            task.due_date,
            task.priority.as_str(),
            task.category.as_str()
        );
    }

    let ids: Vec<_> = board.tasks().iter().map(|task| task.id).collect();
    for (id, drag) in ids.into_iter().zip([90.0, -90.0]) {
        board.swipe_begin(id, 160.0);
        board.swipe_update(id, 160.0 + drag);
        let feedback = board.swipe_feedback(id);
        println!(
            "swipe offset={} tint={}",
            feedback.offset,
            feedback.tint.rgba()
        );
        if let Some(notice) = board.swipe_end(id, Utc::now())? {
            println!("notice: {}", notice.message());
        }
    }

    let progress = board.progress();
    let day = board.day_progress(today);
    println!(
        "{}: {}% completed, {} day streak, {} XP",
        ViewMode::Today.title(),
        day.percent,
        progress.streak,
        progress.xp
    );

    board.toggle_view();
    let week = board
        .calendar_cells()
        .iter()
        .map(|cell| {
            let marker = if cell.is_today { "*" } else { "" };
            let dot = if cell.has_tasks { "." } else { "" };
            format!("{}{}{marker}{dot}", cell.day_name, cell.day_number)
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}: {week}", board.title());

    Ok(())
}
