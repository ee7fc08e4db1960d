//! Overlay panel routing
//!
//! The map screen shows at most one bottom-sheet panel at a time. Which one
//! is encoded in a single tagged [`Panel`] value rather than per-panel
//! visibility booleans, so two panels showing at once is unrepresentable and
//! dismissal cannot leave a stale panel behind.
//!
//! The router owns that value and nothing else renders panels: speed-dial
//! intents and marker taps come in, the matching sheet's presentation handle
//! is asked to appear, and the sheet's own close gesture is wired back to
//! [`PanelRouter::dismiss`] by the host.

use app_state::CredentialSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::speed_dial::SpeedDialAction;

/// Message shown when add-trashcan is attempted while logged out
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in first!";

/// Confirm label for the login-required alert
pub const LOGIN_REQUIRED_CONFIRM: &str = "OK";

// =============================================================================
// Panel
// =============================================================================

/// Which overlay panel is showing
///
/// The pin selection lives inside the `Info` variant, so it exists exactly
/// as long as the info panel does and is cleared atomically on dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "panel", content = "params", rename_all = "camelCase")]
pub enum Panel {
    /// No panel; the map and speed dial have the screen
    #[default]
    None,
    /// Details for a tapped pin
    Info {
        /// Identifier of the selected pin
        pin_id: String,
        /// Board index of the selected pin
        pin_index: usize,
    },
    /// Sign-in panel
    Auth,
    /// Add-a-trashcan form
    Add,
    /// Leaderboard panel
    LeaderBoard,
}

impl Panel {
    /// Whether no panel is showing
    pub fn is_none(&self) -> bool {
        matches!(self, Panel::None)
    }

    /// Sheet snap points for this panel, as fractions of screen height
    pub fn snap_points(&self) -> &'static [f32] {
        match self {
            Panel::None => &[],
            Panel::Info { .. } => &[0.4, 0.7],
            Panel::Auth => &[0.3, 0.7],
            Panel::Add => &[1.0],
            Panel::LeaderBoard => &[1.0],
        }
    }
}

// =============================================================================
// Collaborator Interfaces
// =============================================================================

/// Presentation handle for one panel's bottom sheet
///
/// `present` shows the sheet. The sheet's dismissal gesture is the host's to
/// observe; it must call [`PanelRouter::dismiss`] when it fires.
pub trait SheetHandle: Send + Sync {
    /// Show the sheet
    fn present(&self);
}

/// User-facing blocking alert
///
/// Blocking for the user, fire-and-forget for the router.
pub trait AlertSurface: Send + Sync {
    /// Show an alert with a single confirm button
    fn show(&self, message: &str, confirm_label: &str);
}

/// One presentation handle per panel kind
#[derive(Clone)]
pub struct PanelSheets {
    /// Pin info sheet
    pub info: Arc<dyn SheetHandle>,
    /// Sign-in sheet
    pub auth: Arc<dyn SheetHandle>,
    /// Add-a-trashcan sheet
    pub add: Arc<dyn SheetHandle>,
    /// Leaderboard sheet
    pub leader_board: Arc<dyn SheetHandle>,
}

impl PanelSheets {
    fn handle(&self, panel: &Panel) -> Option<&dyn SheetHandle> {
        match panel {
            Panel::None => None,
            Panel::Info { .. } => Some(self.info.as_ref()),
            Panel::Auth => Some(self.auth.as_ref()),
            Panel::Add => Some(self.add.as_ref()),
            Panel::LeaderBoard => Some(self.leader_board.as_ref()),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// What a panel request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The requested panel is now showing
    Opened,
    /// The request was refused (unauthenticated add attempt); an alert was
    /// shown instead
    Blocked,
    /// Another panel is already showing; the request was dropped
    Ignored,
}

/// Mutually-exclusive selector over the overlay panels
///
/// `current` is the single source of truth and every operation checks it
/// first, which also covers re-entrant calls arriving while an async
/// credential lookup is in flight.
pub struct PanelRouter {
    current: Panel,
    credentials: Arc<dyn CredentialSource>,
    sheets: PanelSheets,
    alert: Arc<dyn AlertSurface>,
}

impl PanelRouter {
    /// Create a router with no panel showing
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        sheets: PanelSheets,
        alert: Arc<dyn AlertSurface>,
    ) -> Self {
        Self {
            current: Panel::None,
            credentials,
            sheets,
            alert,
        }
    }

    /// The panel currently showing
    pub fn current(&self) -> &Panel {
        &self.current
    }

    /// Open the sign-in panel
    pub fn request_login(&mut self) -> RouteOutcome {
        self.open(Panel::Auth)
    }

    /// Open the add-a-trashcan panel, if a credential is stored
    ///
    /// Without a stored credential the blocking alert is shown exactly once
    /// and `current` is left untouched.
    pub async fn request_add_trashcan(&mut self) -> RouteOutcome {
        if !self.current.is_none() {
            tracing::debug!(current = ?self.current, "add request ignored, panel already showing");
            return RouteOutcome::Ignored;
        }

        match self.credentials.current_user().await {
            Some(_) => self.open(Panel::Add),
            None => {
                tracing::debug!("add request blocked, no stored credential");
                self.alert.show(LOGIN_REQUIRED_MESSAGE, LOGIN_REQUIRED_CONFIRM);
                RouteOutcome::Blocked
            }
        }
    }

    /// Open the leaderboard panel
    pub fn request_leader_board(&mut self) -> RouteOutcome {
        self.open(Panel::LeaderBoard)
    }

    /// Open the info panel for a tapped pin
    pub fn select_pin(&mut self, pin_id: impl Into<String>, pin_index: usize) -> RouteOutcome {
        self.open(Panel::Info {
            pin_id: pin_id.into(),
            pin_index,
        })
    }

    /// Route a speed-dial action to the matching request
    pub async fn dispatch(&mut self, action: SpeedDialAction) -> RouteOutcome {
        match action {
            SpeedDialAction::Login => self.request_login(),
            SpeedDialAction::AddTrashcan => self.request_add_trashcan().await,
            SpeedDialAction::LeaderBoard => self.request_leader_board(),
        }
    }

    /// Close the showing panel; returns whether one was showing
    ///
    /// Clears the pin selection with it. Wire every sheet's close gesture
    /// here.
    pub fn dismiss(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        tracing::debug!(panel = ?self.current, "panel dismissed");
        self.current = Panel::None;
        true
    }

    fn open(&mut self, panel: Panel) -> RouteOutcome {
        if !self.current.is_none() {
            tracing::debug!(
                current = ?self.current,
                requested = ?panel,
                "panel request ignored, another panel is showing"
            );
            return RouteOutcome::Ignored;
        }

        if let Some(sheet) = self.sheets.handle(&panel) {
            sheet.present();
        }
        tracing::debug!(panel = ?panel, "panel opened");
        self.current = panel;
        RouteOutcome::Opened
    }
}
