//! Swipe gesture classifier.
//!
//! # Responsibility
//! - Track the single active pointer interaction for one list surface.
//! - Resolve a finished interaction into `Delete`, `Complete` or `NoAction`.
//!
//! # Invariants
//! - `end` always resets tracking state before returning.
//! - Events for an item other than the active one never touch state,
//!   except `end`, which resets it.
//! - A tap (`begin` then `end` with no `update`) resolves to `NoAction`.

use super::config::SwipeConfig;
use crate::model::task::TaskId;
use log::debug;

/// Horizontal direction of a drag relative to its start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Toward negative x; delete-leaning.
    Left,
    /// Toward positive x; complete-leaning.
    Right,
}

/// Outcome of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction<I = TaskId> {
    NoAction,
    Delete(I),
    Complete(I),
}

/// Live classification of an in-progress gesture for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// Not tracking this item, or no movement recorded yet.
    Idle,
    /// Moving but releasing now would not commit.
    Pending(SwipeDirection),
    /// Releasing now would commit in this direction.
    Armed(SwipeDirection),
}

/// Ephemeral tracking record for one interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState<I = TaskId> {
    pub active_item: Option<I>,
    pub start_x: f64,
    pub current_x: Option<f64>,
}

impl<I> Default for GestureState<I> {
    fn default() -> Self {
        Self {
            active_item: None,
            start_x: 0.0,
            current_x: None,
        }
    }
}

impl<I: Copy + PartialEq> GestureState<I> {
    /// Returns `current_x - start_x` when `item` is tracked and has moved.
    pub fn distance_for(&self, item: I) -> Option<f64> {
        if self.active_item != Some(item) {
            return None;
        }
        self.current_x.map(|current| current - self.start_x)
    }
}

/// Owns gesture state for one UI surface.
#[derive(Debug, Clone)]
pub struct SwipeClassifier<I = TaskId> {
    config: SwipeConfig,
    state: GestureState<I>,
}

impl<I: Copy + PartialEq> Default for SwipeClassifier<I> {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl<I: Copy + PartialEq> SwipeClassifier<I> {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: GestureState::default(),
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Read-only view used by the feedback mapper on every render.
    pub fn state(&self) -> &GestureState<I> {
        &self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state.active_item.is_some()
    }

    /// Starts tracking `item` at `x`, replacing any prior interaction.
    pub fn begin(&mut self, item: I, x: f64) {
        self.state = GestureState {
            active_item: Some(item),
            start_x: x,
            current_x: None,
        };
    }

    /// Records the latest pointer position for the active item.
    pub fn update(&mut self, item: I, x: f64) {
        if self.state.active_item != Some(item) {
            return;
        }
        self.state.current_x = Some(x);
    }

    /// Finishes the interaction for `item` and resolves its action.
    pub fn end(&mut self, item: I) -> SwipeAction<I> {
        let distance = self.state.distance_for(item);
        self.cancel();

        let Some(distance) = distance else {
            return SwipeAction::NoAction;
        };

        match classify(distance, self.config.commit_threshold) {
            Some(SwipeDirection::Left) => {
                debug!("event=swipe_commit module=gesture action=delete distance={distance}");
                SwipeAction::Delete(item)
            }
            Some(SwipeDirection::Right) => {
                debug!("event=swipe_commit module=gesture action=complete distance={distance}");
                SwipeAction::Complete(item)
            }
            None => SwipeAction::NoAction,
        }
    }

    /// Drops any tracked interaction without resolving it.
    pub fn cancel(&mut self) {
        self.state = GestureState::default();
    }

    /// Classifies the live drag for `item` without ending it.
    pub fn phase(&self, item: I) -> SwipePhase {
        let Some(distance) = self.state.distance_for(item) else {
            return SwipePhase::Idle;
        };
        if distance == 0.0 {
            return SwipePhase::Idle;
        }

        let direction = if distance < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };

        if classify(distance, self.config.commit_threshold).is_some() {
            SwipePhase::Armed(direction)
        } else {
            SwipePhase::Pending(direction)
        }
    }
}

fn classify(distance: f64, commit_threshold: f64) -> Option<SwipeDirection> {
    if distance <= -commit_threshold {
        Some(SwipeDirection::Left)
    } else if distance >= commit_threshold {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{SwipeAction, SwipeClassifier, SwipeDirection, SwipePhase};
    use crate::gesture::config::SwipeConfig;

    #[test]
    fn commit_boundary_is_inclusive() {
        let mut classifier = SwipeClassifier::<u32>::default();

        classifier.begin(1, 100.0);
        classifier.update(1, 170.0);
        assert_eq!(classifier.end(1), SwipeAction::Complete(1));

        classifier.begin(1, 100.0);
        classifier.update(1, 30.0);
        assert_eq!(classifier.end(1), SwipeAction::Delete(1));

        classifier.begin(1, 100.0);
        classifier.update(1, 169.99);
        assert_eq!(classifier.end(1), SwipeAction::NoAction);
    }

    #[test]
    fn phase_tracks_pending_and_armed() {
        let mut classifier = SwipeClassifier::<u32>::default();
        classifier.begin(7, 0.0);
        assert_eq!(classifier.phase(7), SwipePhase::Idle);

        classifier.update(7, -30.0);
        assert_eq!(classifier.phase(7), SwipePhase::Pending(SwipeDirection::Left));

        classifier.update(7, -75.0);
        assert_eq!(classifier.phase(7), SwipePhase::Armed(SwipeDirection::Left));

        classifier.update(7, 10.0);
        assert_eq!(classifier.phase(7), SwipePhase::Pending(SwipeDirection::Right));
        assert_eq!(classifier.phase(8), SwipePhase::Idle);
    }

    #[test]
    fn custom_commit_threshold_is_honored() {
        let mut classifier = SwipeClassifier::<u32>::new(
            SwipeConfig::default().with_commit_threshold(120.0),
        );
        classifier.begin(3, 0.0);
        classifier.update(3, 100.0);
        assert_eq!(classifier.end(3), SwipeAction::NoAction);

        classifier.begin(3, 0.0);
        classifier.update(3, 120.0);
        assert_eq!(classifier.end(3), SwipeAction::Complete(3));
    }
}
