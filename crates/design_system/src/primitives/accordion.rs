use leptos::ev::KeyboardEvent;
use ui_runtime::contract::accordion::{
    ACTION_TOGGLE, CONTROLLER, SLOT_BODY, SLOT_ITEM, SLOT_TRIGGER, TARGET_BODY, TARGET_ITEM,
    TARGET_TRIGGER,
};
use ui_runtime::{
    accordion_item_ids, reduce_accordion, AccordionAction, AccordionConfig, AccordionEffect,
    AccordionItemSpec, AccordionMode, AccordionState, ConfigError, DefaultValue,
    DisclosureState, NavigationKey, OptionToken,
};

use super::*;
use crate::slots::{ManySlot, Populate, SingleSlot, SlotCollection};
use crate::styles::{
    accordion_body_inner_class, accordion_item_class, accordion_trigger_class, ACCORDION_BODY,
    ACCORDION_CHEVRON,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-item options of an [`Accordion`].
pub struct AccordionItemOptions {
    value: String,
    disabled: bool,
    classes: Option<String>,
}

impl AccordionItemOptions {
    /// Disables the item: its trigger ignores pointer and keyboard input.
    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// Appends caller classes to the item container.
    pub fn classes(&mut self, classes: impl Into<String>) -> &mut Self {
        self.classes = Some(classes.into());
        self
    }
}

#[derive(Debug, Default)]
/// Trigger and body of one accordion item.
pub struct AccordionItemSlots {
    trigger: SingleSlot<SlotOptions, Content>,
    body: SingleSlot<SlotOptions, Content>,
}

impl AccordionItemSlots {
    /// Heading button content.
    pub fn with_trigger<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.trigger.set(Content::view(content))
    }

    /// Collapsible region content.
    pub fn with_body<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.body.set(Content::view(content))
    }
}

#[derive(Debug, Default)]
/// Items of an [`Accordion`], in render order.
pub struct AccordionSlots {
    items: ManySlot<AccordionItemOptions, Populate<AccordionItemSlots>>,
}

impl SlotCollection for AccordionSlots {}

impl AccordionSlots {
    /// Appends an item keyed by `value`; `setup` fills its trigger and body at render time.
    pub fn with_item(
        &mut self,
        value: impl Into<String>,
        setup: impl FnOnce(&mut AccordionItemSlots) + 'static,
    ) -> &mut AccordionItemOptions {
        self.items.push(
            AccordionItemOptions {
                value: value.into(),
                disabled: false,
                classes: None,
            },
            Populate::new(setup),
        )
    }

    fn item_specs(&self) -> Vec<AccordionItemSpec> {
        self.items
            .options()
            .map(|options| AccordionItemSpec::new(options.value.clone()).disabled(options.disabled))
            .collect()
    }
}

#[derive(Clone, Copy)]
/// Programmatic access to a mounted [`Accordion`].
pub struct AccordionHandle {
    state: RwSignal<AccordionState>,
    on_change: StoredValue<Option<Callback<AccordionEffect>>>,
}

impl Default for AccordionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl AccordionHandle {
    /// Creates a handle owned by the current reactive scope.
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AccordionState::default()),
            on_change: store_value(None),
        }
    }

    /// Applies an action, publishes the resulting effects, and logs rejected actions.
    pub fn dispatch(self, action: AccordionAction) {
        let mut state = self.state.get_untracked();
        match reduce_accordion(&mut state, action) {
            Ok(effects) => {
                if effects.is_empty() {
                    return;
                }
                self.state.set(state);
                if let Some(on_change) = self.on_change.get_value() {
                    for effect in effects {
                        on_change.call(effect);
                    }
                }
            }
            Err(err) => logging::warn!("accordion action ignored: {err}"),
        }
    }

    /// Opens an item; in single mode others close.
    pub fn open(self, value: impl Into<String>) {
        self.dispatch(AccordionAction::Open {
            value: value.into(),
        });
    }

    /// Closes an item.
    pub fn close(self, value: impl Into<String>) {
        self.dispatch(AccordionAction::Close {
            value: value.into(),
        });
    }

    /// Toggles an item as a trigger click would.
    pub fn toggle(self, value: impl Into<String>) {
        self.dispatch(AccordionAction::Toggle {
            value: value.into(),
        });
    }

    /// Keys of open items in render order. Tracks.
    pub fn open_values(self) -> Vec<String> {
        self.state.with(AccordionState::open_values)
    }

    /// Whether an item is open. Tracks.
    pub fn is_open(self, value: &str) -> bool {
        self.state.with(|state| state.is_open(value))
    }
}

#[component]
/// Vertically stacked disclosure items.
///
/// Configuration errors (a key set under single mode, duplicate item keys) are returned to the
/// nearest `ErrorBoundary` instead of rendering.
pub fn Accordion(
    #[prop(default = AccordionMode::Single)] mode: AccordionMode,
    #[prop(optional)] collapsible: bool,
    #[prop(optional, into)] default_value: Option<DefaultValue>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] classes: Option<String>,
    #[prop(optional)] handle: Option<AccordionHandle>,
    #[prop(optional)] on_change: Option<Callback<AccordionEffect>>,
    #[prop(optional)] slots: AccordionSlots,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let mut slots = slots;
    let default_attr = default_value.as_ref().map(DefaultValue::to_attr);
    let state = match AccordionConfig::new(mode, collapsible, default_value)
        .and_then(|config| AccordionState::new(config, slots.item_specs()))
    {
        Ok(state) => state,
        Err(err) => {
            logging::warn!("accordion configuration rejected: {err}");
            return Err(err);
        }
    };

    let handle = handle.unwrap_or_default();
    handle.state.set(state);
    handle.on_change.set_value(on_change);

    let entries = slots.items.take();
    let triggers: StoredValue<Vec<(String, NodeRef<html::Button>)>> = store_value(
        entries
            .iter()
            .map(|(options, _)| (options.value.clone(), create_node_ref::<html::Button>()))
            .collect(),
    );
    let focus_trigger = move |value: &str| {
        let node = triggers.with_value(|triggers| {
            triggers
                .iter()
                .find(|(candidate, _)| candidate == value)
                .and_then(|(_, node)| node.get_untracked())
        });
        match node {
            Some(button) => {
                if let Err(err) = button.focus() {
                    logging::warn!("accordion trigger focus failed: {err:?}");
                }
            }
            None => logging::warn!("accordion trigger `{value}` is not mounted"),
        }
    };

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, (options, populate))| {
            let ids = accordion_item_ids(id.as_deref(), &options.value);
            let mut parts = populate.run();
            let value = options.value.clone();
            let open = create_memo(move |_| handle.state.with(|state| state.is_open(&value)));
            let state_token = move || DisclosureState::from_open(open.get()).token();
            let trigger_ref = triggers
                .with_value(|triggers| triggers.get(index).map(|(_, node)| *node))
                .unwrap_or_else(create_node_ref);

            let trigger = parts.trigger.take().map(|(trigger_options, content)| {
                let toggle_value = options.value.clone();
                let nav_value = options.value.clone();
                view! {
                    <h3 class="flex">
                        <button
                            node_ref=trigger_ref
                            type="button"
                            id=ids.trigger.clone()
                            class=accordion_trigger_class(trigger_options.class_override())
                            disabled=options.disabled
                            aria-expanded=move || bool_token(open.get())
                            aria-controls=ids.body.clone()
                            data-slot=SLOT_TRIGGER
                            data-accordion-target=TARGET_TRIGGER
                            data-action=ACTION_TOGGLE
                            on:click=move |_: MouseEvent| {
                                handle.dispatch(AccordionAction::Toggle {
                                    value: toggle_value.clone(),
                                });
                            }
                            on:keydown=move |ev: KeyboardEvent| {
                                let Some(key) = NavigationKey::from_key(&ev.key()) else {
                                    return;
                                };
                                ev.prevent_default();
                                let target = handle.state.with_untracked(|state| {
                                    state.focus_target(&nav_value, key).map(str::to_string)
                                });
                                if let Some(target) = target {
                                    focus_trigger(&target);
                                }
                            }
                        >
                            {content.render()}
                            <Icon icon=IconName::ChevronDown class=ACCORDION_CHEVRON />
                        </button>
                    </h3>
                }
            });

            let body = parts.body.take().map(|(body_options, content)| {
                view! {
                    <div
                        id=ids.body.clone()
                        role="region"
                        aria-labelledby=ids.trigger.clone()
                        class=ACCORDION_BODY
                        data-slot=SLOT_BODY
                        data-accordion-target=TARGET_BODY
                        data-state=state_token
                    >
                        <div class=accordion_body_inner_class(body_options.class_override())>
                            {content.render()}
                        </div>
                    </div>
                }
            });

            view! {
                <div
                    id=ids.item.clone()
                    class=accordion_item_class(options.classes.as_deref())
                    data-slot=SLOT_ITEM
                    data-state=state_token
                    data-value=options.value.clone()
                    data-accordion-target=TARGET_ITEM
                    data-disabled=options.disabled.then_some("")
                >
                    {trigger}
                    {body}
                </div>
            }
        })
        .collect_view();

    Ok::<View, ConfigError>(view! {
        <div
            id=id
            class=classes
            data-controller=CONTROLLER
            data-accordion-type-value=mode.token()
            data-accordion-collapsible-value=bool_token(collapsible)
            data-accordion-default-value-value={default_attr}
            {..attrs}
        >
            {items}
        </div>
    }
    .into_view())
}
