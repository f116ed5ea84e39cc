//! Render-time drag feedback derived from gesture state.
//!
//! All functions are pure: the renderer polls them on every frame while a
//! gesture is active and gets neutral values for any other item.

use super::classifier::{GestureState, SwipeDirection};
use super::config::SwipeConfig;

/// Background tint hinting at the action a release would take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntentTint {
    #[default]
    None,
    DeleteHint,
    CompleteHint,
}

impl IntentTint {
    /// CSS color for the row background.
    pub fn rgba(self) -> &'static str {
        match self {
            Self::None => "transparent",
            Self::DeleteHint => "rgba(239, 68, 68, 0.2)",
            Self::CompleteHint => "rgba(34, 197, 94, 0.2)",
        }
    }
}

/// Everything a row needs to draw one frame of drag feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeFeedback {
    /// Horizontal translation for the row body.
    pub offset: f64,
    /// Overlay visibility in `[0, 1]`.
    pub opacity: f64,
    pub tint: IntentTint,
    /// Opacity of the trash indicator on the left edge.
    pub delete_indicator: f64,
    /// Opacity of the check indicator on the right edge.
    pub complete_indicator: f64,
}

impl SwipeFeedback {
    pub const NEUTRAL: Self = Self {
        offset: 0.0,
        opacity: 0.0,
        tint: IntentTint::None,
        delete_indicator: 0.0,
        complete_indicator: 0.0,
    };
}

/// Row translation; movement must exceed the noise floor to be shown.
pub fn offset<I: Copy + PartialEq>(state: &GestureState<I>, item: I, config: &SwipeConfig) -> f64 {
    match state.distance_for(item) {
        Some(distance) if distance.abs() > config.noise_floor => distance,
        _ => 0.0,
    }
}

/// Overlay opacity proportional to drag distance, saturating at 1.
pub fn opacity<I: Copy + PartialEq>(state: &GestureState<I>, item: I, config: &SwipeConfig) -> f64 {
    match state.distance_for(item) {
        Some(distance) if distance != 0.0 => (distance.abs() / config.opacity_span).min(1.0),
        _ => 0.0,
    }
}

/// Tint for the row background; the bounds at `±hint_threshold` are exclusive.
pub fn intent_tint<I: Copy + PartialEq>(
    state: &GestureState<I>,
    item: I,
    config: &SwipeConfig,
) -> IntentTint {
    match state.distance_for(item) {
        Some(distance) if distance < -config.hint_threshold => IntentTint::DeleteHint,
        Some(distance) if distance > config.hint_threshold => IntentTint::CompleteHint,
        _ => IntentTint::None,
    }
}

/// Opacity for the indicator on `side`; only the side the row is moving
/// toward is visible.
pub fn indicator_opacity<I: Copy + PartialEq>(
    state: &GestureState<I>,
    item: I,
    side: SwipeDirection,
    config: &SwipeConfig,
) -> f64 {
    let shown = offset(state, item, config);
    let leaning = if shown < 0.0 {
        Some(SwipeDirection::Left)
    } else if shown > 0.0 {
        Some(SwipeDirection::Right)
    } else {
        None
    };

    if leaning == Some(side) {
        opacity(state, item, config)
    } else {
        0.0
    }
}

/// Computes all feedback values for `item` in one pass.
pub fn feedback_for<I: Copy + PartialEq>(
    state: &GestureState<I>,
    item: I,
    config: &SwipeConfig,
) -> SwipeFeedback {
    if state.distance_for(item).is_none() {
        return SwipeFeedback::NEUTRAL;
    }

    SwipeFeedback {
        offset: offset(state, item, config),
        opacity: opacity(state, item, config),
        tint: intent_tint(state, item, config),
        delete_indicator: indicator_opacity(state, item, SwipeDirection::Left, config),
        complete_indicator: indicator_opacity(state, item, SwipeDirection::Right, config),
    }
}

#[cfg(test)]
mod tests {
    use super::{feedback_for, indicator_opacity, offset, IntentTint, SwipeFeedback};
    use crate::gesture::classifier::{GestureState, SwipeDirection};
    use crate::gesture::config::SwipeConfig;

    fn dragged(distance: f64) -> GestureState<u32> {
        GestureState {
            active_item: Some(1),
            start_x: 200.0,
            current_x: Some(200.0 + distance),
        }
    }

    #[test]
    fn offset_hides_noise() {
        let config = SwipeConfig::default();
        assert_eq!(offset(&dragged(4.0), 1, &config), 0.0);
        assert_eq!(offset(&dragged(-4.5), 1, &config), 0.0);
        assert_eq!(offset(&dragged(5.0), 1, &config), 0.0);
        assert_eq!(offset(&dragged(-5.0), 1, &config), 0.0);
        assert!((offset(&dragged(5.01), 1, &config) - 5.01).abs() < 1e-9);
        assert_eq!(offset(&dragged(-42.0), 1, &config), -42.0);
    }

    #[test]
    fn indicators_follow_drag_direction() {
        let config = SwipeConfig::default();
        let left = dragged(-60.0);
        assert!((indicator_opacity(&left, 1, SwipeDirection::Left, &config) - 0.6).abs() < 1e-9);
        assert_eq!(indicator_opacity(&left, 1, SwipeDirection::Right, &config), 0.0);

        let right = dragged(150.0);
        assert_eq!(indicator_opacity(&right, 1, SwipeDirection::Right, &config), 1.0);
        assert_eq!(indicator_opacity(&right, 1, SwipeDirection::Left, &config), 0.0);
    }

    #[test]
    fn feedback_is_neutral_for_other_items() {
        let config = SwipeConfig::default();
        assert_eq!(feedback_for(&dragged(90.0), 2, &config), SwipeFeedback::NEUTRAL);

        let own = feedback_for(&dragged(90.0), 1, &config);
        assert_eq!(own.tint, IntentTint::CompleteHint);
        assert_eq!(own.offset, 90.0);
    }
}
