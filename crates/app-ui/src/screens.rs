//! Map screen composition
//!
//! Glues the speed dial, the panel router, and the pin board together. The
//! external map surface reports marker taps by board index; everything else
//! the screen does is forwarding.

use app_state::{Pin, PinBoard};
use std::sync::Arc;

use crate::panels::{Panel, PanelRouter, RouteOutcome};
use crate::speed_dial::{SpeedDial, SpeedDialAction};

/// Marker tint derived from a pin's community score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTone {
    /// Score above +1: confirmed useful
    Positive,
    /// Score between -1 and +1 inclusive
    Neutral,
    /// Score below -1: likely gone or wrong
    Negative,
}

impl MarkerTone {
    /// Tone for a pin
    pub fn for_pin(pin: &Pin) -> Self {
        if pin.score() > 1 {
            MarkerTone::Positive
        } else if pin.score() < -1 {
            MarkerTone::Negative
        } else {
            MarkerTone::Neutral
        }
    }

    /// Marker asset name for this tone
    pub fn asset(&self) -> &'static str {
        match self {
            MarkerTone::Positive => "marker_green",
            MarkerTone::Neutral => "marker_gray",
            MarkerTone::Negative => "marker_red",
        }
    }
}

/// The trashcan map screen
pub struct MapScreen {
    speed_dial: SpeedDial,
    router: PanelRouter,
    pins: Arc<PinBoard>,
}

impl MapScreen {
    /// Create a screen over a router and a pin board
    pub fn new(router: PanelRouter, pins: Arc<PinBoard>) -> Self {
        Self {
            speed_dial: SpeedDial::new(),
            router,
            pins,
        }
    }

    /// The speed-dial button state
    pub fn speed_dial(&self) -> &SpeedDial {
        &self.speed_dial
    }

    /// The panel currently showing
    pub fn current_panel(&self) -> &Panel {
        self.router.current()
    }

    /// Toggle the speed dial open or closed
    pub fn toggle_speed_dial(&mut self) {
        self.speed_dial.toggle();
    }

    /// Advance the screen's animations by `dt` seconds
    pub fn tick(&mut self, dt: f64) -> bool {
        self.speed_dial.tick(dt)
    }

    /// A speed-dial action handle was pressed
    ///
    /// Handles are pressable at any openness; the press routes regardless of
    /// where the animation is.
    pub async fn press_action(&mut self, action: SpeedDialAction) -> RouteOutcome {
        self.router.dispatch(action).await
    }

    /// The map surface reported a marker tap at a board index
    pub fn marker_tapped(&mut self, index: usize) -> RouteOutcome {
        match self.pins.get(index) {
            Some(pin) => self.router.select_pin(pin.id, index),
            None => {
                tracing::debug!(index, "marker tap for unknown pin ignored");
                RouteOutcome::Ignored
            }
        }
    }

    /// The showing sheet was closed by gesture
    pub fn sheet_dismissed(&mut self) -> bool {
        self.router.dismiss()
    }

    /// Marker tone for the pin at a board index
    pub fn marker_tone(&self, index: usize) -> Option<MarkerTone> {
        self.pins.get(index).map(|pin| MarkerTone::for_pin(&pin))
    }
}
