//! Styled components and their slot collections.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::classes::bool_token;
use crate::slots::{Content, SlotOptions};
use crate::{Icon, IconName, IconSize};

mod accordion;
mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use accordion::{
    Accordion, AccordionHandle, AccordionItemOptions, AccordionItemSlots, AccordionSlots,
};
pub use controls::{Button, ThemeToggle};
pub use data_display::{Avatar, AvatarImage, AvatarSlots, Badge, Card, CardSlots};
pub use navigation::{Breadcrumb, BreadcrumbItemKind, BreadcrumbItemOptions, BreadcrumbSlots};
pub use overlays::{AlertDialog, AlertDialogBodySlots, AlertDialogHandle, AlertDialogSlots};

/// Renders a populated slot as a `div` carrying its `data-slot` name.
fn slot_div(
    entry: Option<(SlotOptions, Content)>,
    class: fn(Option<&str>) -> String,
    slot: &'static str,
) -> Option<View> {
    entry.map(|(options, content)| {
        view! {
            <div class=class(options.class_override()) data-slot=slot>
                {content.render()}
            </div>
        }
        .into_view()
    })
}
