use ui_runtime::contract::avatar;
use ui_runtime::{AvatarEvent, AvatarSize, AvatarState, BadgeVariant};

use super::*;
use crate::slots::{SingleSlot, SlotCollection};
use crate::styles::{
    avatar_class, avatar_fallback_class, badge_class, card_action_class, card_body_class,
    card_class, card_description_class, card_footer_class, card_header_class, card_title_class,
    AVATAR_IMAGE,
};

#[component]
/// Compact status label.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional, into)] classes: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant, classes.as_deref()) {..attrs}>
            {children.map(|children| children())}
        </span>
    }
}

#[derive(Debug, Default)]
/// Slots of a [`Card`].
pub struct CardSlots {
    title: SingleSlot<SlotOptions, Content>,
    description: SingleSlot<SlotOptions, Content>,
    action: SingleSlot<SlotOptions, Content>,
    body: SingleSlot<SlotOptions, Content>,
    footer: SingleSlot<SlotOptions, Content>,
}

impl SlotCollection for CardSlots {}

impl CardSlots {
    /// Heading line.
    pub fn with_title<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.title.set(Content::view(content))
    }

    /// Muted supporting text under the title.
    pub fn with_description<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.description.set(Content::view(content))
    }

    /// Control pinned to the header's trailing column.
    pub fn with_action<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.action.set(Content::view(content))
    }

    /// Main content.
    pub fn with_body<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.body.set(Content::view(content))
    }

    /// Bottom row.
    pub fn with_footer<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.footer.set(Content::view(content))
    }

    fn has_header(&self) -> bool {
        self.title.is_present() || self.description.is_present() || self.action.is_present()
    }
}

#[component]
/// Content container with optional header, body, and footer regions.
pub fn Card(
    #[prop(optional, into)] classes: Option<String>,
    #[prop(optional)] slots: CardSlots,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let mut slots = slots;
    let has_header = slots.has_header();
    let has_action = slots.action.is_present();

    let header = has_header.then(|| {
        let title = slot_div(slots.title.take(), card_title_class, "card-title");
        let description = slot_div(
            slots.description.take(),
            card_description_class,
            "card-description",
        );
        let action = slot_div(slots.action.take(), card_action_class, "card-action");
        view! {
            <div class=card_header_class(has_action) data-slot="card-header">
                {title}
                {description}
                {action}
            </div>
        }
    });
    let body = slot_div(slots.body.take(), card_body_class, "card-body");
    let footer = slot_div(slots.footer.take(), card_footer_class, "card-footer");

    view! {
        <div class=card_class(classes.as_deref()) data-slot="card" {..attrs}>
            {header}
            {body}
            {footer}
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Image source for an [`Avatar`].
pub struct AvatarImage {
    src: String,
    alt: String,
}

impl AvatarImage {
    /// Replaces the alternative text.
    pub fn alt(&mut self, alt: impl Into<String>) -> &mut Self {
        self.alt = alt.into();
        self
    }
}

#[derive(Debug, Default)]
/// Slots of an [`Avatar`].
pub struct AvatarSlots {
    image: SingleSlot<AvatarImage, ()>,
    fallback: SingleSlot<SlotOptions, Content>,
}

impl SlotCollection for AvatarSlots {}

impl AvatarSlots {
    /// Picture shown until it fails to load.
    pub fn with_image(&mut self, src: impl Into<String>) -> &mut AvatarImage {
        self.image.set_with(
            AvatarImage {
                src: src.into(),
                alt: String::new(),
            },
            (),
        )
    }

    /// Content shown when there is no image or the image fails, typically initials.
    pub fn with_fallback<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.fallback.set(Content::view(content))
    }
}

#[component]
/// Round user picture with a text fallback.
pub fn Avatar(
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional, into)] classes: Option<String>,
    #[prop(optional)] slots: AvatarSlots,
) -> impl IntoView {
    let mut slots = slots;
    let image = slots.image.take();
    let state = create_rw_signal(AvatarState::new(image.is_some()));
    let image_ref = create_node_ref::<html::Img>();
    let apply = move |event: AvatarEvent| state.update(|state| state.apply(event));

    // The load event may have fired before the listener was attached.
    create_effect(move |_| {
        if let Some(img) = image_ref.get() {
            if img.complete() {
                apply(if img.natural_width() > 0 {
                    AvatarEvent::Loaded
                } else {
                    AvatarEvent::Failed
                });
            }
        }
    });

    let image = image.map(|(image, ())| {
        view! {
            <img
                node_ref=image_ref
                src=image.src
                alt=image.alt
                class=AVATAR_IMAGE
                class:hidden=move || !state.get().visibility().image_visible
                data-avatar-target=avatar::TARGET_IMAGE
                data-action=avatar::ACTION_IMAGE
                on:load=move |_| apply(AvatarEvent::Loaded)
                on:error=move |_| apply(AvatarEvent::Failed)
            />
        }
    });
    let fallback = slots.fallback.take().map(|(options, content)| {
        view! {
            <span
                class=avatar_fallback_class(options.class_override())
                class:hidden=move || !state.get().visibility().fallback_visible
                data-avatar-target=avatar::TARGET_FALLBACK
            >
                {content.render()}
            </span>
        }
    });

    view! {
        <span
            class=avatar_class(size, classes.as_deref())
            data-slot="avatar"
            data-controller=avatar::CONTROLLER
        >
            {image}
            {fallback}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn card_header_requires_title_description_or_action() {
        let slots = CardSlots::populate(|card| {
            card.with_body(|| "Body");
            card.with_footer(|| "Footer").classes("justify-end");
        });
        assert!(!slots.has_header());

        let slots = CardSlots::populate(|card| {
            card.with_action(|| "Edit");
        });
        assert!(slots.has_header());
    }

    #[test]
    fn card_slots_keep_the_last_population() {
        let slots = CardSlots::populate(|card| {
            card.with_title(|| "Draft").classes("text-muted-foreground");
            card.with_title(|| "Final");
        });
        assert_eq!(
            slots.title.options().and_then(SlotOptions::class_override),
            None
        );
    }

    #[test]
    fn avatar_image_options_chain() {
        let slots = AvatarSlots::populate(|avatar| {
            avatar.with_image("/u/ada.png").alt("Ada Lovelace");
            avatar.with_fallback(|| "AL");
        });
        assert_eq!(
            slots.image.options(),
            Some(&AvatarImage {
                src: "/u/ada.png".to_string(),
                alt: "Ada Lovelace".to_string(),
            })
        );
        assert!(slots.fallback.is_present());
    }
}
