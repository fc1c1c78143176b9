//! Markup contract shared by rendered components and their behavior layer.
//!
//! Every hook the behavior layer needs is exposed as a `data-*` attribute value defined here so
//! rendering and event wiring cannot drift apart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Value of a `data-state` attribute on a disclosure element.
pub enum DisclosureState {
    /// Expanded/visible.
    Open,
    /// Collapsed/hidden.
    Closed,
}

impl DisclosureState {
    /// Maps an open flag to its disclosure state.
    pub const fn from_open(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Returns the `data-state` token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns `true` for [`DisclosureState::Open`].
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::Closed
    }
}

/// Hooks rendered by the accordion.
pub mod accordion {
    /// `data-controller` value on the accordion root.
    pub const CONTROLLER: &str = "accordion";
    /// `data-accordion-target` value on each item.
    pub const TARGET_ITEM: &str = "item";
    /// `data-accordion-target` value on each trigger button.
    pub const TARGET_TRIGGER: &str = "trigger";
    /// `data-accordion-target` value on each body region.
    pub const TARGET_BODY: &str = "body";
    /// `data-action` value on each trigger button.
    pub const ACTION_TOGGLE: &str = "click->accordion#toggle";
    /// `data-slot` value on each item.
    pub const SLOT_ITEM: &str = "accordion-item";
    /// `data-slot` value on each trigger button.
    pub const SLOT_TRIGGER: &str = "accordion-trigger";
    /// `data-slot` value on each body region.
    pub const SLOT_BODY: &str = "accordion-body";
}

/// Hooks rendered by the alert dialog.
pub mod alert_dialog {
    /// `data-controller` value on the dialog root.
    pub const CONTROLLER: &str = "alert-dialog";
    /// `data-alert-dialog-target` value on the native `<dialog>`.
    pub const TARGET_DIALOG: &str = "dialog";
    /// `data-action` value on the trigger.
    pub const ACTION_OPEN: &str = "click->alert-dialog#open";
    /// `data-action` value on cancel and action buttons.
    pub const ACTION_CLOSE: &str = "click->alert-dialog#close";
    /// `data-slot` value on the trigger.
    pub const SLOT_TRIGGER: &str = "alert-dialog-trigger";
    /// `data-slot` value on the backdrop overlay.
    pub const SLOT_OVERLAY: &str = "alert-dialog-overlay";
    /// `data-slot` value on the content panel.
    pub const SLOT_CONTENT: &str = "alert-dialog-content";
    /// `data-slot` value on the header block.
    pub const SLOT_HEADER: &str = "alert-dialog-header";
    /// `data-slot` value on the footer block.
    pub const SLOT_FOOTER: &str = "alert-dialog-footer";
    /// `data-slot` value on the title heading.
    pub const SLOT_TITLE: &str = "alert-dialog-title";
    /// `data-slot` value on the description paragraph.
    pub const SLOT_DESCRIPTION: &str = "alert-dialog-description";
    /// `data-slot` value on the cancel button.
    pub const SLOT_CANCEL: &str = "alert-dialog-cancel";
    /// `data-slot` value on the confirm button.
    pub const SLOT_ACTION: &str = "alert-dialog-action";
}

/// Hooks rendered by the avatar.
pub mod avatar {
    /// `data-controller` value on the avatar root.
    pub const CONTROLLER: &str = "avatar";
    /// `data-avatar-target` value on the image.
    pub const TARGET_IMAGE: &str = "image";
    /// `data-avatar-target` value on the fallback.
    pub const TARGET_FALLBACK: &str = "fallback";
    /// `data-action` value on the image.
    pub const ACTION_IMAGE: &str = "load->avatar#load error->avatar#error";
}

/// Hooks rendered by the theme toggle.
pub mod theme {
    /// `data-controller` value on the toggle.
    pub const CONTROLLER: &str = "theme";
    /// `data-action` value on the toggle.
    pub const ACTION_TOGGLE: &str = "click->theme#toggle";
    /// Persistent storage key holding the chosen theme.
    pub const STORAGE_KEY: &str = "theme";
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disclosure_tokens_follow_the_open_flag() {
        assert_eq!(DisclosureState::from_open(true).token(), "open");
        assert_eq!(DisclosureState::from_open(false).token(), "closed");
        assert_eq!(DisclosureState::default(), DisclosureState::Closed);
        assert!(DisclosureState::Open.is_open());
    }
}
