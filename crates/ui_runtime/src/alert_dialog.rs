//! Alert-dialog state machine.
//!
//! An alert dialog is a modal confirmation that only closes through an explicit choice (cancel
//! or action), the native Escape dismissal, or a forced close on navigation. Backdrop clicks
//! never close it.

use crate::{dom_id_segment, ConfigError, DisclosureState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Open flag of one alert dialog. Fresh state is always closed.
pub struct AlertDialogState {
    open: bool,
}

impl AlertDialogState {
    /// Returns `true` while the modal is shown.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Projects every state marker from the single open flag.
    pub fn markers(self) -> AlertDialogMarkers {
        let state = DisclosureState::from_open(self.open);
        AlertDialogMarkers {
            container: state,
            dialog: state,
            overlay: state,
            content: state,
            trigger_expanded: self.open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `data-state` and `aria-expanded` values rendered by the dialog.
pub struct AlertDialogMarkers {
    /// Root container `data-state`.
    pub container: DisclosureState,
    /// Native `<dialog>` `data-state`.
    pub dialog: DisclosureState,
    /// Overlay `data-state`.
    pub overlay: DisclosureState,
    /// Content wrapper `data-state`.
    pub content: DisclosureState,
    /// Trigger `aria-expanded`.
    pub trigger_expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_alert_dialog`].
pub enum AlertDialogAction {
    /// Trigger activation.
    Open,
    /// Cancel or action button.
    Close,
    /// Navigation, page hide, or a programmatic request.
    ForceClose,
    /// The native element already closed itself (Escape).
    NativeDismiss,
    /// Pointer press on the overlay.
    BackdropClick,
    /// The native modal could not be shown after `Open`; state rolls back to closed.
    ModalUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects the view layer executes after a transition.
pub enum AlertDialogEffect {
    /// Call `showModal()` on the native dialog.
    ShowModal,
    /// Call `close()` on the native dialog.
    CloseModal,
    /// Return focus to the trigger.
    RestoreTriggerFocus,
}

/// Applies one action to dialog state and returns the effects to run.
pub fn reduce_alert_dialog(
    state: &mut AlertDialogState,
    action: AlertDialogAction,
) -> Vec<AlertDialogEffect> {
    match (action, state.open) {
        (AlertDialogAction::Open, false) => {
            state.open = true;
            vec![AlertDialogEffect::ShowModal]
        }
        (AlertDialogAction::Close, true) => {
            state.open = false;
            vec![
                AlertDialogEffect::CloseModal,
                AlertDialogEffect::RestoreTriggerFocus,
            ]
        }
        (AlertDialogAction::ForceClose, true) => {
            state.open = false;
            vec![AlertDialogEffect::CloseModal]
        }
        (AlertDialogAction::NativeDismiss | AlertDialogAction::ModalUnavailable, true) => {
            state.open = false;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// DOM ids derived from a dialog key.
pub struct AlertDialogIds {
    /// Root id.
    pub root: String,
    /// Native dialog id, referenced by the trigger's `aria-controls`.
    pub body: String,
    /// Title id, referenced by `aria-labelledby`.
    pub title: String,
    /// Description id, referenced by `aria-describedby`.
    pub description: String,
}

impl AlertDialogIds {
    /// Derives ids from a caller key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyKey`] when the key is empty or whitespace.
    pub fn new(key: &str) -> Result<Self, ConfigError> {
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyKey {
                component: "alert dialog",
            });
        }
        let root = dom_id_segment(key);
        Ok(Self {
            body: format!("{root}-body"),
            title: format!("{root}-title"),
            description: format!("{root}-description"),
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_markers_agree(state: AlertDialogState) {
        let markers = state.markers();
        let expected = DisclosureState::from_open(state.is_open());
        assert_eq!(
            [
                markers.container,
                markers.dialog,
                markers.overlay,
                markers.content
            ],
            [expected; 4]
        );
        assert_eq!(markers.trigger_expanded, state.is_open());
    }

    #[test]
    fn fresh_dialog_is_closed() {
        let state = AlertDialogState::default();
        assert!(!state.is_open());
        assert_markers_agree(state);
    }

    #[test]
    fn open_then_close_restores_trigger_focus() {
        let mut state = AlertDialogState::default();
        assert_eq!(
            reduce_alert_dialog(&mut state, AlertDialogAction::Open),
            vec![AlertDialogEffect::ShowModal]
        );
        assert!(state.is_open());
        assert_eq!(
            reduce_alert_dialog(&mut state, AlertDialogAction::Close),
            vec![
                AlertDialogEffect::CloseModal,
                AlertDialogEffect::RestoreTriggerFocus
            ]
        );
        assert!(!state.is_open());
    }

    #[test]
    fn backdrop_click_never_closes() {
        let mut state = AlertDialogState::default();
        reduce_alert_dialog(&mut state, AlertDialogAction::Open);
        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::BackdropClick).is_empty());
        assert!(state.is_open());
    }

    #[test]
    fn escape_and_force_close_skip_focus_restore() {
        let mut state = AlertDialogState::default();
        reduce_alert_dialog(&mut state, AlertDialogAction::Open);
        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::NativeDismiss).is_empty());
        assert!(!state.is_open());

        reduce_alert_dialog(&mut state, AlertDialogAction::Open);
        assert_eq!(
            reduce_alert_dialog(&mut state, AlertDialogAction::ForceClose),
            vec![AlertDialogEffect::CloseModal]
        );
        assert!(!state.is_open());
    }

    #[test]
    fn unavailable_modal_rolls_back_to_closed() {
        let mut state = AlertDialogState::default();
        reduce_alert_dialog(&mut state, AlertDialogAction::Open);
        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::ModalUnavailable).is_empty());
        assert!(!state.is_open());
        assert_markers_agree(state);

        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::ModalUnavailable).is_empty());
        assert!(!state.is_open());
    }

    #[test]
    fn repeated_actions_are_idempotent() {
        let mut state = AlertDialogState::default();
        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::ForceClose).is_empty());
        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::Close).is_empty());
        reduce_alert_dialog(&mut state, AlertDialogAction::Open);
        assert!(reduce_alert_dialog(&mut state, AlertDialogAction::Open).is_empty());
    }

    #[test]
    fn markers_agree_after_every_transition() {
        let mut state = AlertDialogState::default();
        for action in [
            AlertDialogAction::Open,
            AlertDialogAction::BackdropClick,
            AlertDialogAction::Close,
            AlertDialogAction::Open,
            AlertDialogAction::NativeDismiss,
            AlertDialogAction::Open,
            AlertDialogAction::ForceClose,
            AlertDialogAction::Open,
            AlertDialogAction::ModalUnavailable,
        ] {
            reduce_alert_dialog(&mut state, action);
            assert_markers_agree(state);
        }
    }

    #[test]
    fn ids_follow_the_key() {
        assert_eq!(
            AlertDialogIds::new("delete-account").expect("ids"),
            AlertDialogIds {
                root: "delete-account".to_string(),
                body: "delete-account-body".to_string(),
                title: "delete-account-title".to_string(),
                description: "delete-account-description".to_string(),
            }
        );
        assert_eq!(
            AlertDialogIds::new("   "),
            Err(ConfigError::EmptyKey {
                component: "alert dialog"
            })
        );
    }
}
