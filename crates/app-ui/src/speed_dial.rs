//! Floating speed-dial button
//!
//! One continuous openness value drives the whole affordance: three stacked
//! action handles scale and rise out of the toggle handle, and the toggle's
//! plus icon rotates toward an ×. Action handles remain pressable at any
//! openness; the screen forwards presses to the panel router without gating
//! on the animation.

use crate::motion::{Interpolation, SpringValue};
use crate::tokens::spacing;
use serde::{Deserialize, Serialize};

/// Rotation of the toggle handle across the openness range, in degrees
const TOGGLE_ROTATION: Interpolation = Interpolation::new((0.0, 1.0), (0.0, 45.0));

/// The three dial actions, bottom slot to top slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpeedDialAction {
    /// Open the sign-in panel
    Login,
    /// Open the add-a-trashcan panel
    AddTrashcan,
    /// Open the leaderboard panel
    LeaderBoard,
}

impl SpeedDialAction {
    /// All actions in slot order
    pub fn all() -> [SpeedDialAction; 3] {
        [
            SpeedDialAction::Login,
            SpeedDialAction::AddTrashcan,
            SpeedDialAction::LeaderBoard,
        ]
    }

    /// Wire name for this action
    pub fn name(&self) -> &'static str {
        match self {
            SpeedDialAction::Login => "login",
            SpeedDialAction::AddTrashcan => "addTrashcan",
            SpeedDialAction::LeaderBoard => "leaderBoard",
        }
    }

    /// Parse a wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "login" => Some(SpeedDialAction::Login),
            "addTrashcan" => Some(SpeedDialAction::AddTrashcan),
            "leaderBoard" => Some(SpeedDialAction::LeaderBoard),
            _ => None,
        }
    }

    /// Icon name for this action's handle
    pub fn icon(&self) -> &'static str {
        match self {
            SpeedDialAction::Login => "person-outline",
            SpeedDialAction::AddTrashcan => "trash-outline",
            SpeedDialAction::LeaderBoard => "trophy-outline",
        }
    }

    /// Ladder slot, counted upward from the toggle handle
    fn slot(&self) -> f64 {
        match self {
            SpeedDialAction::Login => 1.0,
            SpeedDialAction::AddTrashcan => 2.0,
            SpeedDialAction::LeaderBoard => 3.0,
        }
    }
}

/// Transform applied to an action handle at the current openness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleTransform {
    /// Vertical offset in points (negative is up)
    pub translate_y: f64,
    /// Uniform scale
    pub scale: f64,
}

/// State of the floating speed-dial button
///
/// `open` flips instantly on toggle; the openness value follows it through a
/// damped spring, so intents dispatch immediately while the handles are
/// still in flight.
#[derive(Debug, Clone)]
pub struct SpeedDial {
    open: bool,
    openness: SpringValue,
}

impl Default for SpeedDial {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedDial {
    /// Create a closed speed dial
    pub fn new() -> Self {
        Self {
            open: false,
            openness: SpringValue::new(0.0),
        }
    }

    /// Whether the dial is logically open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current openness in [0, 1] at rest (transiently outside mid-bounce)
    pub fn openness(&self) -> f64 {
        self.openness.value()
    }

    /// Whether the openness spring is at rest
    pub fn is_at_rest(&self) -> bool {
        self.openness.is_settled()
    }

    /// Flip the dial and spring openness to the opposite endpoint
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.openness.spring_to(if self.open { 1.0 } else { 0.0 });
    }

    /// Advance the openness animation by `dt` seconds; returns whether it
    /// has settled
    pub fn tick(&mut self, dt: f64) -> bool {
        self.openness.step(dt)
    }

    /// Transform for an action handle at the current openness
    pub fn handle_transform(&self, action: SpeedDialAction) -> HandleTransform {
        let value = self.openness.value();
        let rise = Interpolation::new(
            (0.0, 1.0),
            (0.0, -action.slot() * f64::from(spacing::ACTION_RISE)),
        );
        HandleTransform {
            translate_y: rise.map(value),
            scale: value,
        }
    }

    /// Rotation of the toggle handle at the current openness, in degrees
    pub fn toggle_rotation(&self) -> f64 {
        TOGGLE_ROTATION.map(self.openness.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(dial: &mut SpeedDial) {
        for _ in 0..600 {
            if dial.tick(FRAME) {
                return;
            }
        }
        panic!("speed dial did not settle");
    }

    #[test]
    fn test_starts_closed_at_identity() {
        let dial = SpeedDial::new();
        assert!(!dial.is_open());
        assert_eq!(dial.openness(), 0.0);
        assert!(dial.is_at_rest());

        for action in SpeedDialAction::all() {
            let transform = dial.handle_transform(action);
            assert_eq!(transform.translate_y, 0.0);
            assert_eq!(transform.scale, 0.0);
        }
        assert_eq!(dial.toggle_rotation(), 0.0);
    }

    #[test]
    fn test_toggle_alternates_and_settles_at_endpoints() {
        let mut dial = SpeedDial::new();

        dial.toggle();
        assert!(dial.is_open());
        settle(&mut dial);
        assert_eq!(dial.openness(), 1.0);

        dial.toggle();
        assert!(!dial.is_open());
        settle(&mut dial);
        assert_eq!(dial.openness(), 0.0);

        dial.toggle();
        assert!(dial.is_open());
    }

    #[test]
    fn test_transforms_at_full_openness() {
        let mut dial = SpeedDial::new();
        dial.toggle();
        settle(&mut dial);

        assert_eq!(
            dial.handle_transform(SpeedDialAction::Login).translate_y,
            -15.0
        );
        assert_eq!(
            dial.handle_transform(SpeedDialAction::AddTrashcan).translate_y,
            -30.0
        );
        assert_eq!(
            dial.handle_transform(SpeedDialAction::LeaderBoard).translate_y,
            -45.0
        );
        assert_eq!(dial.handle_transform(SpeedDialAction::LeaderBoard).scale, 1.0);
        assert_eq!(dial.toggle_rotation(), 45.0);
    }

    #[test]
    fn test_transforms_are_pure_in_openness() {
        let mut dial = SpeedDial::new();
        dial.toggle();
        for _ in 0..5 {
            dial.tick(FRAME);
        }

        let value = dial.openness();
        let transform = dial.handle_transform(SpeedDialAction::AddTrashcan);
        assert_eq!(transform.translate_y, -30.0 * value);
        assert_eq!(transform.scale, value);
        assert_eq!(dial.toggle_rotation(), 45.0 * value);
    }

    #[test]
    fn test_toggle_mid_flight_reverses_smoothly() {
        let mut dial = SpeedDial::new();
        dial.toggle();
        for _ in 0..5 {
            dial.tick(FRAME);
        }
        let mid = dial.openness();
        assert!(mid > 0.0);

        dial.toggle();
        assert!(!dial.is_open());
        assert_eq!(dial.openness(), mid);

        settle(&mut dial);
        assert_eq!(dial.openness(), 0.0);
    }

    #[test]
    fn test_action_wire_names_round_trip() {
        for action in SpeedDialAction::all() {
            assert_eq!(SpeedDialAction::from_name(action.name()), Some(action));
        }
        assert_eq!(SpeedDialAction::from_name("unknown"), None);
    }

    #[test]
    fn test_action_serde_uses_wire_names() {
        let json = serde_json::to_string(&SpeedDialAction::AddTrashcan).unwrap();
        assert_eq!(json, "\"addTrashcan\"");

        let parsed: SpeedDialAction = serde_json::from_str("\"leaderBoard\"").unwrap();
        assert_eq!(parsed, SpeedDialAction::LeaderBoard);
    }
}
