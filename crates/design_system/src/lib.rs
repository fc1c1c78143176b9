//! Styled Leptos component library with client-side disclosure behavior.
//!
//! Components emit utility-class markup plus a stable `data-*` contract (see
//! [`ui_runtime::contract`]). Interactive widgets keep their runtime state in one signal driven by
//! the pure reducers in [`ui_runtime`], so every marker attribute is projected from a single
//! source of truth.
//!
//! Child regions are declared as typed slots and filled through
//! [`SlotCollection::populate`]:
//!
//! ```ignore
//! view! {
//!     <Card slots=CardSlots::populate(|card| {
//!         card.with_title(|| "Invoices");
//!         card.with_body(|| "Nothing due.").classes("text-muted-foreground");
//!     }) />
//! }
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod browser;
pub mod classes;
mod icon;
mod primitives;
pub mod slots;
pub mod styles;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Accordion, AccordionHandle, AccordionItemOptions, AccordionItemSlots, AccordionSlots,
    AlertDialog, AlertDialogBodySlots, AlertDialogHandle, AlertDialogSlots, Avatar, AvatarImage,
    AvatarSlots, Badge, Breadcrumb, BreadcrumbItemKind, BreadcrumbItemOptions, BreadcrumbSlots,
    Button, Card, CardSlots, ThemeToggle,
};
pub use slots::{Content, ManySlot, Populate, SingleSlot, SlotCollection, SlotOptions};

/// Convenience imports for pages composing the component set.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionHandle, AccordionSlots, AlertDialog, AlertDialogHandle,
        AlertDialogSlots, Avatar, AvatarSlots, Badge, Breadcrumb, BreadcrumbSlots, Button, Card,
        CardSlots, Icon, IconName, IconSize, SlotCollection, ThemeToggle,
    };
    pub use ui_runtime::{
        AccordionEffect, AccordionMode, AvatarSize, BadgeVariant, ButtonSize, ButtonTag,
        ButtonType, ButtonVariant, DefaultValue,
    };
}
