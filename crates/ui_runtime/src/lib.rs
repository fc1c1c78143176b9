//! Browser-agnostic state machines and contracts for the design-system widgets.
//!
//! This crate owns everything about the component library that can be decided without a DOM:
//! closed option sets and their parsing, configuration validation, the `data-*` attribute
//! contract shared by markup and behavior, deterministic id derivation, and the reducers that
//! drive accordion, alert-dialog, avatar, and theme state. `design_system` binds these to Leptos
//! signals and browser events.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod accordion;
pub mod alert_dialog;
pub mod avatar;
pub mod contract;
mod error;
mod ids;
pub mod options;
pub mod theme;

pub use accordion::{
    accordion_item_ids, reduce_accordion, AccordionAction, AccordionConfig, AccordionEffect,
    AccordionError, AccordionItemIds, AccordionItemSpec, AccordionItemState, AccordionMode,
    AccordionState, DefaultValue, NavigationKey,
};
pub use alert_dialog::{
    reduce_alert_dialog, AlertDialogAction, AlertDialogEffect, AlertDialogIds, AlertDialogMarkers,
    AlertDialogState,
};
pub use avatar::{AvatarEvent, AvatarState, AvatarVisibility};
pub use contract::DisclosureState;
pub use error::ConfigError;
pub use ids::dom_id_segment;
pub use options::{
    parse_option, AvatarSize, BadgeVariant, ButtonSize, ButtonTag, ButtonType, ButtonVariant,
    OptionToken,
};
pub use theme::{MemoryThemeStore, ThemeController, ThemePreference, ThemeStore, ThemeToggled};
