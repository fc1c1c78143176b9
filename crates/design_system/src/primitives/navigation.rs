use super::*;
use crate::slots::{ManySlot, SlotCollection};
use crate::styles::{
    breadcrumb_link_class, breadcrumb_page_class, BREADCRUMB_ELLIPSIS, BREADCRUMB_ITEM,
    BREADCRUMB_LIST, BREADCRUMB_SEPARATOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a breadcrumb item renders.
pub enum BreadcrumbItemKind {
    /// Navigable link.
    Link,
    /// Current page marker.
    Page,
    /// Collapsed-items placeholder.
    Ellipsis,
    /// Plain text without a destination.
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-item options of a [`Breadcrumb`].
pub struct BreadcrumbItemOptions {
    href: Option<String>,
    current: bool,
    ellipsis: bool,
    separator: bool,
    classes: Option<String>,
}

impl Default for BreadcrumbItemOptions {
    fn default() -> Self {
        Self {
            href: None,
            current: false,
            ellipsis: false,
            separator: true,
            classes: None,
        }
    }
}

impl BreadcrumbItemOptions {
    /// Link destination.
    pub fn href(&mut self, href: impl Into<String>) -> &mut Self {
        self.href = Some(href.into());
        self
    }

    /// Marks the item as the current page.
    pub fn current(&mut self, current: bool) -> &mut Self {
        self.current = current;
        self
    }

    /// Controls the separator after this item. The last item never gets one.
    pub fn separator(&mut self, separator: bool) -> &mut Self {
        self.separator = separator;
        self
    }

    /// Appends caller classes to the link or page element.
    pub fn classes(&mut self, classes: impl Into<String>) -> &mut Self {
        self.classes = Some(classes.into());
        self
    }

    /// Resolved rendering kind.
    pub fn kind(&self) -> BreadcrumbItemKind {
        if self.ellipsis {
            BreadcrumbItemKind::Ellipsis
        } else if self.current {
            BreadcrumbItemKind::Page
        } else if self.href.is_some() {
            BreadcrumbItemKind::Link
        } else {
            BreadcrumbItemKind::Text
        }
    }
}

#[derive(Debug, Default)]
/// Slots of a [`Breadcrumb`].
pub struct BreadcrumbSlots {
    items: ManySlot<BreadcrumbItemOptions, Option<Content>>,
}

impl SlotCollection for BreadcrumbSlots {}

impl BreadcrumbSlots {
    /// Appends a link, page, or text item.
    pub fn with_item<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut BreadcrumbItemOptions {
        self.items
            .push(BreadcrumbItemOptions::default(), Some(Content::view(content)))
    }

    /// Appends an ellipsis placeholder for collapsed items.
    pub fn with_ellipsis(&mut self) -> &mut BreadcrumbItemOptions {
        self.items.push(
            BreadcrumbItemOptions {
                ellipsis: true,
                ..BreadcrumbItemOptions::default()
            },
            None,
        )
    }

    fn separators(&self) -> Vec<bool> {
        let count = self.items.len();
        self.items
            .options()
            .enumerate()
            .map(|(index, options)| options.separator && index + 1 < count)
            .collect()
    }
}

#[component]
/// Hierarchical location trail.
pub fn Breadcrumb(
    #[prop(default = IconName::ChevronRight)] separator_icon: IconName,
    #[prop(default = "breadcrumb".to_string(), into)] aria_label: String,
    #[prop(optional, into)] classes: Option<String>,
    #[prop(optional)] slots: BreadcrumbSlots,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let mut slots = slots;
    let separators = slots.separators();

    let items = slots
        .items
        .take()
        .into_iter()
        .zip(separators)
        .flat_map(|((options, content), separator)| {
            let content = content.map(Content::render);
            let class = options.classes.as_deref();
            let inner = match options.kind() {
                BreadcrumbItemKind::Link => view! {
                    <a href=options.href.clone() class=breadcrumb_link_class(class) data-slot="breadcrumb-link">
                        {content}
                    </a>
                }
                .into_view(),
                BreadcrumbItemKind::Page => view! {
                    <span
                        role="link"
                        aria-disabled="true"
                        aria-current="page"
                        class=breadcrumb_page_class(class)
                        data-slot="breadcrumb-page"
                    >
                        {content}
                    </span>
                }
                .into_view(),
                BreadcrumbItemKind::Ellipsis => view! {
                    <span
                        role="presentation"
                        aria-hidden="true"
                        class=BREADCRUMB_ELLIPSIS
                        data-slot="breadcrumb-ellipsis"
                    >
                        <Icon icon=IconName::Ellipsis />
                        <span class="sr-only">"More"</span>
                    </span>
                }
                .into_view(),
                BreadcrumbItemKind::Text => view! {
                    <span class=breadcrumb_link_class(class)>{content}</span>
                }
                .into_view(),
            };
            let item = view! {
                <li class=BREADCRUMB_ITEM data-slot="breadcrumb-item">{inner}</li>
            };
            let separator = separator.then(|| {
                view! {
                    <li
                        role="presentation"
                        aria-hidden="true"
                        class=BREADCRUMB_SEPARATOR
                        data-slot="breadcrumb-separator"
                    >
                        <Icon icon=separator_icon size=IconSize::Xs />
                    </li>
                }
                .into_view()
            });
            std::iter::once(item.into_view()).chain(separator)
        })
        .collect_view();

    view! {
        <nav aria-label=aria_label class=classes data-slot="breadcrumb" {..attrs}>
            <ol class=BREADCRUMB_LIST data-slot="breadcrumb-list">
                {items}
            </ol>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn item_kind_resolution() {
        let slots = BreadcrumbSlots::populate(|trail| {
            trail.with_item(|| "Home").href("/");
            trail.with_ellipsis();
            trail.with_item(|| "Drafts");
            trail.with_item(|| "Widget").href("/w").current(true);
        });
        let kinds: Vec<BreadcrumbItemKind> = slots.items.options().map(|o| o.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                BreadcrumbItemKind::Link,
                BreadcrumbItemKind::Ellipsis,
                BreadcrumbItemKind::Text,
                BreadcrumbItemKind::Page,
            ]
        );
    }

    #[test]
    fn separators_go_between_items_only() {
        let slots = BreadcrumbSlots::populate(|trail| {
            trail.with_item(|| "Home").href("/");
            trail.with_item(|| "Docs").href("/docs").separator(false);
            trail.with_item(|| "Install").href("/docs/install");
            trail.with_item(|| "Linux").current(true);
        });
        assert_eq!(slots.separators(), vec![true, false, true, false]);
    }

    #[test]
    fn single_item_trail_has_no_separator() {
        let slots = BreadcrumbSlots::populate(|trail| {
            trail.with_item(|| "Home").current(true);
        });
        assert_eq!(slots.separators(), vec![false]);
    }
}
