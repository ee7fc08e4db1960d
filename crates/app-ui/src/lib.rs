//! User interface core for Trashmap
//!
//! This crate provides the presentational core of the trashcan map screen:
//! the floating speed-dial button with its choreographed reveal/conceal
//! animation, and the router that decides which overlay panel (pin info,
//! sign-in, add-a-trashcan, leaderboard) is showing.
//!
//! Rendering, the map, bottom sheets, and alerts live in the host; this
//! crate owns their state and drives them through small injected interfaces.
//!
//! # Modules
//!
//! - [`motion`] - Interpolation and damped-spring primitives
//! - [`speed_dial`] - The floating multi-action button
//! - [`panels`] - Overlay panel selection and dismissal
//! - [`screens`] - Map screen composition
//! - [`tokens`] - Design tokens (sizing, spacing, palette)
//!
//! # Example
//!
//! ```rust
//! use app_ui::speed_dial::{SpeedDial, SpeedDialAction};
//!
//! let mut dial = SpeedDial::new();
//! dial.toggle();
//! assert!(dial.is_open());
//!
//! // The host's frame loop drives the spring toward full openness.
//! while !dial.tick(1.0 / 60.0) {}
//! assert_eq!(dial.openness(), 1.0);
//! assert_eq!(dial.handle_transform(SpeedDialAction::LeaderBoard).translate_y, -45.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod motion;
pub mod panels;
pub mod screens;
pub mod speed_dial;
pub mod tokens;

pub use motion::{Interpolation, SpringConfig, SpringValue};
pub use panels::{
    AlertSurface, Panel, PanelRouter, PanelSheets, RouteOutcome, SheetHandle,
    LOGIN_REQUIRED_CONFIRM, LOGIN_REQUIRED_MESSAGE,
};
pub use screens::{MapScreen, MarkerTone};
pub use speed_dial::{HandleTransform, SpeedDial, SpeedDialAction};
