use taskswipe_core::{SwipeAction, SwipeClassifier, SwipeConfig};
use uuid::Uuid;

fn classifier() -> SwipeClassifier<Uuid> {
    SwipeClassifier::new(SwipeConfig::default())
}

#[test]
fn update_for_other_item_is_ignored_and_end_returns_no_action() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let mut classifier = classifier();

    classifier.begin(a, 10.0);
    let before = *classifier.state();
    classifier.update(b, 200.0);
    assert_eq!(*classifier.state(), before);

    assert_eq!(classifier.end(b), SwipeAction::NoAction);
    assert!(!classifier.is_tracking());
}

#[test]
fn small_drag_is_no_action() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.begin(id, 0.0);
    classifier.update(id, 5.0);
    assert_eq!(classifier.end(id), SwipeAction::NoAction);
}

#[test]
fn right_drag_past_threshold_completes() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.begin(id, 0.0);
    classifier.update(id, 80.0);
    assert_eq!(classifier.end(id), SwipeAction::Complete(id));
}

#[test]
fn left_drag_past_threshold_deletes() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.begin(id, 0.0);
    classifier.update(id, -80.0);
    assert_eq!(classifier.end(id), SwipeAction::Delete(id));
}

#[test]
fn tap_without_move_is_no_action() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.begin(id, 0.0);
    assert_eq!(classifier.end(id), SwipeAction::NoAction);
}

#[test]
fn only_last_update_counts() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.begin(id, 100.0);
    classifier.update(id, 250.0);
    classifier.update(id, 120.0);
    assert_eq!(classifier.end(id), SwipeAction::NoAction);
}

#[test]
fn state_is_fully_reset_after_every_end() {
    let id = Uuid::new_v4();
    let other = Uuid::new_v4();

    for (drag, ended_by) in [(90.0, id), (-90.0, id), (3.0, id), (90.0, other)] {
        let mut classifier = classifier();
        classifier.begin(id, 0.0);
        classifier.update(id, drag);
        classifier.end(ended_by);

        assert!(!classifier.is_tracking());
        assert_eq!(classifier.state().current_x, None);

        classifier.begin(id, 50.0);
        classifier.update(id, 130.0);
        assert_eq!(classifier.end(id), SwipeAction::Complete(id));
    }
}

#[test]
fn begin_for_new_item_cancels_previous_gesture() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let mut classifier = classifier();

    classifier.begin(first, 0.0);
    classifier.update(first, -120.0);
    classifier.begin(second, 300.0);

    assert_eq!(classifier.state().active_item, Some(second));
    assert_eq!(classifier.state().current_x, None);
    assert_eq!(classifier.end(first), SwipeAction::NoAction);
    assert_eq!(classifier.end(second), SwipeAction::NoAction);
}

#[test]
fn update_without_begin_is_ignored() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.update(id, 500.0);
    assert!(!classifier.is_tracking());
    assert_eq!(classifier.end(id), SwipeAction::NoAction);
}

#[test]
fn cancel_drops_armed_gesture() {
    let id = Uuid::new_v4();
    let mut classifier = classifier();
    classifier.begin(id, 0.0);
    classifier.update(id, 95.0);
    classifier.cancel();
    assert_eq!(classifier.end(id), SwipeAction::NoAction);
}
