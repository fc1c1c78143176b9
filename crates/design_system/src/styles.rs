//! Utility class tables for every component.
//!
//! Functions here are pure: (variant, size, state, caller classes) in, class string out. The
//! utility names are emitted verbatim and interpreted by the page stylesheet.

use ui_runtime::{AvatarSize, BadgeVariant, ButtonSize, ButtonVariant};

use crate::classes::{merge_classes, ClassList};

const FOCUS_RING: &str = "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]";
const DISABLED: &str = "disabled:pointer-events-none disabled:opacity-50";

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all";
const BUTTON_INVALID: &str = "aria-invalid:ring-destructive/20 aria-invalid:border-destructive";
const BUTTON_PRIMARY: &str = "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90";

fn button_variant(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Default => BUTTON_PRIMARY,
        ButtonVariant::Destructive => {
            "bg-destructive text-white shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20"
        }
        ButtonVariant::Outline => {
            "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground"
        }
        ButtonVariant::Secondary => {
            "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"
        }
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
    }
}

fn button_size(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
        ButtonSize::Sm => "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
        ButtonSize::Lg => "h-10 rounded-md px-6 has-[>svg]:px-4",
        ButtonSize::Icon => "size-9",
        ButtonSize::IconSm => "size-8",
        ButtonSize::IconLg => "size-10",
    }
}

/// Button classes: base, variant, size, then caller classes.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, classes: Option<&str>) -> String {
    ClassList::new()
        .with(BUTTON_BASE)
        .with(DISABLED)
        .with(FOCUS_RING)
        .with(BUTTON_INVALID)
        .with(button_variant(variant))
        .with(button_size(size))
        .with_caller(classes)
        .build()
}

const BADGE_BASE: &str = "inline-flex items-center justify-center rounded-full border px-3 py-0.5 text-xs font-medium w-fit whitespace-nowrap shrink-0 gap-1 [&>svg]:size-2 [&>svg]:pointer-events-none";
const BADGE_TAIL: &str = "aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive transition-[color,box-shadow] overflow-hidden";

fn badge_variant(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "border-0 bg-primary text-primary-foreground",
        BadgeVariant::Secondary => "border-0 bg-secondary text-secondary-foreground",
        BadgeVariant::Destructive => {
            "border-0 bg-destructive text-white focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60"
        }
        BadgeVariant::Outline => "text-foreground",
    }
}

/// Badge classes: base, variant, then caller classes.
pub fn badge_class(variant: BadgeVariant, classes: Option<&str>) -> String {
    ClassList::new()
        .with(BADGE_BASE)
        .with(FOCUS_RING)
        .with(BADGE_TAIL)
        .with(badge_variant(variant))
        .with_caller(classes)
        .build()
}

/// Avatar root classes.
pub fn avatar_class(size: AvatarSize, classes: Option<&str>) -> String {
    let size = match size {
        AvatarSize::Sm => "h-8 w-8 text-xs",
        AvatarSize::Md => "h-10 w-10 text-sm",
        AvatarSize::Lg => "h-14 w-14 text-lg",
    };
    ClassList::new()
        .with("relative flex shrink-0 overflow-hidden rounded-full")
        .with(size)
        .with_caller(classes)
        .build()
}

/// Avatar image classes.
pub const AVATAR_IMAGE: &str = "aspect-square h-full w-full object-cover";

/// Avatar fallback classes, without the visibility toggle.
pub fn avatar_fallback_class(classes: Option<&str>) -> String {
    merge_classes(
        "flex h-full w-full items-center justify-center rounded-full bg-muted font-medium",
        classes,
    )
}

/// Card root classes.
pub fn card_class(classes: Option<&str>) -> String {
    merge_classes(
        "bg-background text-foreground flex flex-col gap-6 rounded-xl border border-border py-6 shadow-sm",
        classes,
    )
}

/// Card header grid; gains a second column for the action slot.
pub fn card_header_class(has_action: bool) -> String {
    ClassList::new()
        .with("grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6")
        .with_if(has_action, "grid-cols-[1fr_auto]")
        .build()
}

/// Card title classes.
pub fn card_title_class(classes: Option<&str>) -> String {
    merge_classes("leading-none font-semibold", classes)
}

/// Card description classes.
pub fn card_description_class(classes: Option<&str>) -> String {
    merge_classes("text-muted-foreground text-sm", classes)
}

/// Card action classes.
pub fn card_action_class(classes: Option<&str>) -> String {
    merge_classes(
        "col-start-2 row-span-2 row-start-1 self-start justify-self-end",
        classes,
    )
}

/// Card body classes.
pub fn card_body_class(classes: Option<&str>) -> String {
    merge_classes("px-6", classes)
}

/// Card footer classes.
pub fn card_footer_class(classes: Option<&str>) -> String {
    merge_classes("flex items-center px-6", classes)
}

/// Accordion item container classes.
pub fn accordion_item_class(classes: Option<&str>) -> String {
    merge_classes("border-b last:border-b-0", classes)
}

/// Accordion trigger button classes.
pub fn accordion_trigger_class(classes: Option<&str>) -> String {
    ClassList::new()
        .with("flex flex-1 items-center justify-between gap-4 py-4 text-left text-sm font-medium")
        .with("rounded-md transition-all outline-none hover:underline")
        .with(FOCUS_RING)
        .with(DISABLED)
        .with("[&[aria-expanded=true]>svg]:rotate-180")
        .with_caller(classes)
        .build()
}

/// Accordion body region classes. Closed bodies hide through `data-state`, not `hidden`.
pub const ACCORDION_BODY: &str = "overflow-hidden text-sm data-[state=closed]:hidden";

/// Accordion body inner wrapper classes.
pub fn accordion_body_inner_class(classes: Option<&str>) -> String {
    merge_classes("pt-0 pb-4", classes)
}

/// Accordion chevron classes.
pub const ACCORDION_CHEVRON: &str =
    "text-muted-foreground pointer-events-none size-4 shrink-0 transition-transform duration-200";

/// Alert-dialog root classes.
pub fn alert_dialog_class(classes: Option<&str>) -> String {
    merge_classes("relative", classes)
}

/// Trigger and action button classes.
///
/// Without caller classes the primary variant is applied. With caller classes only the base
/// and size utilities are kept, so the caller fully owns the color treatment.
pub fn alert_dialog_button_class(classes: Option<&str>) -> String {
    let has_caller = classes.is_some_and(|classes| !classes.trim().is_empty());
    ClassList::new()
        .with(BUTTON_BASE)
        .with(DISABLED)
        .with(FOCUS_RING)
        .with("h-9 px-4 py-2")
        .with_if(!has_caller, BUTTON_PRIMARY)
        .with_caller(classes)
        .build()
}

/// Cancel button classes: outline treatment, caller classes appended.
pub fn alert_dialog_cancel_class(classes: Option<&str>) -> String {
    ClassList::new()
        .with(BUTTON_BASE)
        .with(DISABLED)
        .with(FOCUS_RING)
        .with("h-9 px-4 py-2")
        .with("border border-input bg-background text-foreground shadow-xs hover:bg-accent hover:text-accent-foreground")
        .with_caller(classes)
        .build()
}

/// Native `<dialog>` classes.
pub fn alert_dialog_dialog_class(classes: Option<&str>) -> String {
    ClassList::new()
        .with("p-0 m-0 border-0 max-w-none max-h-none bg-transparent fixed inset-0")
        .with("backdrop:bg-black/50 backdrop:backdrop-blur-sm")
        .with("data-[state=open]:animate-in data-[state=open]:fade-in-0")
        .with_caller(classes)
        .build()
}

/// Overlay classes.
pub const ALERT_DIALOG_OVERLAY: &str = "fixed inset-0 bg-black/50 data-[state=open]:animate-in data-[state=open]:fade-in-0 data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=closed]:duration-300 data-[state=open]:duration-300";

/// Centered content panel classes.
pub const ALERT_DIALOG_CONTENT: &str = "fixed left-[50%] top-[50%] translate-x-[-50%] translate-y-[-50%] w-full max-w-[calc(100%-2rem)] sm:max-w-lg grid gap-4 p-6 bg-background rounded-lg border shadow-lg data-[state=open]:zoom-in-95 data-[state=closed]:zoom-out-95 duration-200 min-w-0";

/// Header classes.
pub const ALERT_DIALOG_HEADER: &str = "flex flex-col gap-2 text-center sm:text-left";

/// Footer classes.
pub const ALERT_DIALOG_FOOTER: &str = "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end";

/// Title classes.
pub fn alert_dialog_title_class(classes: Option<&str>) -> String {
    merge_classes("text-lg font-semibold text-foreground", classes)
}

/// Description classes.
pub fn alert_dialog_description_class(classes: Option<&str>) -> String {
    merge_classes("text-sm text-muted-foreground", classes)
}

/// Breadcrumb list classes.
pub const BREADCRUMB_LIST: &str =
    "flex flex-wrap items-center gap-1.5 sm:gap-2.5 text-sm text-muted-foreground break-words";
/// Breadcrumb item classes.
pub const BREADCRUMB_ITEM: &str = "inline-flex items-center gap-1.5";
/// Breadcrumb separator classes.
pub const BREADCRUMB_SEPARATOR: &str = "[&>svg]:size-3.5";
/// Breadcrumb ellipsis classes.
pub const BREADCRUMB_ELLIPSIS: &str = "flex size-9 items-center justify-center";

/// Breadcrumb link classes.
pub fn breadcrumb_link_class(classes: Option<&str>) -> String {
    merge_classes(
        "hover:text-foreground flex gap-1.5 items-center justify-center transition-colors",
        classes,
    )
}

/// Breadcrumb current-page classes.
pub fn breadcrumb_page_class(classes: Option<&str>) -> String {
    merge_classes("text-foreground font-normal flex gap-1.5 items-center", classes)
}

/// Theme toggle classes.
pub fn theme_toggle_class(classes: Option<&str>) -> String {
    merge_classes(
        "inline-flex items-center justify-center rounded-md p-2 hover:bg-muted transition-colors cursor-pointer",
        classes,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn button_classes_order_base_variant_size_caller() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::IconSm, Some("ml-auto"));
        assert!(class.starts_with(BUTTON_BASE));
        let variant = class.find("hover:bg-accent").expect("variant");
        let size = class.find("size-8").expect("size");
        assert!(variant < size);
        assert!(class.ends_with("size-8 ml-auto"));
    }

    #[test]
    fn destructive_badge_carries_dark_mode_classes() {
        let class = badge_class(BadgeVariant::Destructive, None);
        assert!(class.contains("dark:bg-destructive/60"));
        assert!(class.ends_with("dark:bg-destructive/60"));
        assert!(badge_class(BadgeVariant::Outline, Some("h-5")).ends_with("text-foreground h-5"));
    }

    #[test]
    fn avatar_sizes_map_to_fixed_dimensions() {
        assert_eq!(
            avatar_class(AvatarSize::Lg, None),
            "relative flex shrink-0 overflow-hidden rounded-full h-14 w-14 text-lg"
        );
        assert_eq!(
            avatar_class(AvatarSize::Sm, Some("ring-2")),
            "relative flex shrink-0 overflow-hidden rounded-full h-8 w-8 text-xs ring-2"
        );
    }

    #[test]
    fn card_header_gains_action_column() {
        assert_eq!(
            card_header_class(false),
            "grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6"
        );
        assert_eq!(
            card_header_class(true),
            "grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6 grid-cols-[1fr_auto]"
        );
    }

    #[test]
    fn caller_classes_replace_primary_treatment_on_dialog_buttons() {
        let default = alert_dialog_button_class(None);
        assert!(default.ends_with(BUTTON_PRIMARY));

        let custom = alert_dialog_button_class(Some("bg-destructive text-white"));
        assert!(!custom.contains("bg-primary"));
        assert!(custom.ends_with("h-9 px-4 py-2 bg-destructive text-white"));

        let cancel = alert_dialog_cancel_class(Some("w-full"));
        assert!(cancel.contains("border-input"));
        assert!(cancel.ends_with("w-full"));
    }

    #[test]
    fn accordion_trigger_rotates_chevron_when_expanded() {
        let class = accordion_trigger_class(Some("px-2"));
        assert!(class.contains("[&[aria-expanded=true]>svg]:rotate-180"));
        assert!(class.ends_with("px-2"));
        assert_eq!(accordion_body_inner_class(None), "pt-0 pb-4");
    }

    #[test]
    fn closed_accordion_body_is_hidden_by_state_class() {
        assert!(ACCORDION_BODY.contains("data-[state=closed]:hidden"));
        assert!(!ACCORDION_BODY.split(' ').any(|class| class == "hidden"));
    }
}
