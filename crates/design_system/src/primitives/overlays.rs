use ui_runtime::contract::alert_dialog::{
    ACTION_CLOSE, ACTION_OPEN, CONTROLLER, SLOT_ACTION, SLOT_CANCEL, SLOT_CONTENT,
    SLOT_DESCRIPTION, SLOT_FOOTER, SLOT_HEADER, SLOT_OVERLAY, SLOT_TITLE, SLOT_TRIGGER,
    TARGET_DIALOG,
};
use ui_runtime::{
    reduce_alert_dialog, AlertDialogAction, AlertDialogEffect, AlertDialogIds, AlertDialogState,
    ConfigError,
};

use super::*;
use crate::slots::{Populate, SingleSlot, SlotCollection};
use crate::styles::{
    alert_dialog_button_class, alert_dialog_cancel_class, alert_dialog_class,
    alert_dialog_description_class, alert_dialog_dialog_class, alert_dialog_title_class,
    ALERT_DIALOG_CONTENT, ALERT_DIALOG_FOOTER, ALERT_DIALOG_HEADER, ALERT_DIALOG_OVERLAY,
};

#[derive(Debug, Default)]
/// Contents of the modal panel.
pub struct AlertDialogBodySlots {
    title: SingleSlot<SlotOptions, Content>,
    description: SingleSlot<SlotOptions, Content>,
    cancel: SingleSlot<SlotOptions, Content>,
    action: SingleSlot<SlotOptions, Content>,
}

impl AlertDialogBodySlots {
    /// Heading; labels the dialog.
    pub fn with_title<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.title.set(Content::view(content))
    }

    /// Explanatory text; describes the dialog when present.
    pub fn with_description<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.description.set(Content::view(content))
    }

    /// Dismiss button with outline styling.
    pub fn with_cancel<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.cancel.set(Content::view(content))
    }

    /// Confirm button. Caller classes replace the primary color treatment.
    pub fn with_action<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.action.set(Content::view(content))
    }

    fn has_footer(&self) -> bool {
        self.cancel.is_present() || self.action.is_present()
    }
}

#[derive(Debug, Default)]
/// Slots of an [`AlertDialog`].
pub struct AlertDialogSlots {
    trigger: SingleSlot<SlotOptions, Content>,
    body: SingleSlot<SlotOptions, Populate<AlertDialogBodySlots>>,
}

impl SlotCollection for AlertDialogSlots {}

impl AlertDialogSlots {
    /// Button that opens the dialog.
    pub fn with_trigger<V: IntoView>(
        &mut self,
        content: impl FnOnce() -> V + 'static,
    ) -> &mut SlotOptions {
        self.trigger.set(Content::view(content))
    }

    /// Modal panel; `setup` fills title, description, cancel, and action at render time.
    pub fn with_body(
        &mut self,
        setup: impl FnOnce(&mut AlertDialogBodySlots) + 'static,
    ) -> &mut SlotOptions {
        self.body.set(Populate::new(setup))
    }
}

#[derive(Clone, Copy)]
/// Programmatic access to a mounted [`AlertDialog`].
pub struct AlertDialogHandle {
    state: RwSignal<AlertDialogState>,
    dialog: NodeRef<html::Dialog>,
    trigger: NodeRef<html::Button>,
}

impl Default for AlertDialogHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertDialogHandle {
    /// Creates a handle owned by the current reactive scope.
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AlertDialogState::default()),
            dialog: create_node_ref(),
            trigger: create_node_ref(),
        }
    }

    /// Applies an action and runs its effects against the mounted elements.
    ///
    /// When the native modal cannot be shown the open transition is rolled back.
    pub fn dispatch(self, action: AlertDialogAction) {
        let before = self.state.get_untracked();
        let mut state = before;
        let effects = reduce_alert_dialog(&mut state, action);
        if state != before {
            self.state.set(state);
        }
        for effect in effects {
            if let Err(err) = self.run_effect(effect) {
                logging::warn!("{err}");
                if effect == AlertDialogEffect::ShowModal {
                    self.dispatch(AlertDialogAction::ModalUnavailable);
                }
            }
        }
    }

    /// Shows the modal.
    pub fn open(self) {
        self.dispatch(AlertDialogAction::Open);
    }

    /// Closes the modal and returns focus to the trigger.
    pub fn close(self) {
        self.dispatch(AlertDialogAction::Close);
    }

    /// Closes the modal without moving focus; for navigation and router integrations.
    pub fn force_close(self) {
        self.dispatch(AlertDialogAction::ForceClose);
    }

    /// Whether the modal is shown. Tracks.
    pub fn is_open(self) -> bool {
        self.state.with(|state| state.is_open())
    }

    fn run_effect(self, effect: AlertDialogEffect) -> Result<(), String> {
        match effect {
            AlertDialogEffect::ShowModal => self
                .dialog
                .get_untracked()
                .ok_or_else(|| "alert dialog element is not mounted".to_string())?
                .show_modal()
                .map_err(|err| format!("alert dialog showModal failed: {err:?}")),
            AlertDialogEffect::CloseModal => {
                if let Some(dialog) = self.dialog.get_untracked() {
                    dialog.close();
                }
                Ok(())
            }
            AlertDialogEffect::RestoreTriggerFocus => match self.trigger.get_untracked() {
                Some(trigger) => trigger
                    .focus()
                    .map_err(|err| format!("alert dialog trigger focus failed: {err:?}")),
                None => Ok(()),
            },
        }
    }
}

#[component]
/// Modal confirmation that only closes through an explicit choice, Escape, or navigation.
///
/// `id` is the key all element ids derive from. The dialog always renders closed.
pub fn AlertDialog(
    #[prop(into)] id: String,
    #[prop(optional, into)] classes: Option<String>,
    #[prop(optional)] handle: Option<AlertDialogHandle>,
    #[prop(optional)] slots: AlertDialogSlots,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let ids = match AlertDialogIds::new(&id) {
        Ok(ids) => ids,
        Err(err) => {
            logging::warn!("alert dialog configuration rejected: {err}");
            return Err(err);
        }
    };
    let handle = handle.unwrap_or_default();
    let trigger_ref = handle.trigger;
    let dialog_ref = handle.dialog;
    handle.state.set(AlertDialogState::default());
    let markers = move || handle.state.get().markers();

    let popstate = window_event_listener(ev::popstate, move |_| handle.force_close());
    on_cleanup(move || popstate.remove());
    let pagehide = window_event_listener(ev::pagehide, move |_| handle.force_close());
    on_cleanup(move || pagehide.remove());

    let mut slots = slots;
    let trigger = slots.trigger.take().map(|(options, content)| {
        view! {
            <button
                node_ref=trigger_ref
                type="button"
                class=alert_dialog_button_class(options.class_override())
                aria-haspopup="dialog"
                aria-expanded=move || bool_token(markers().trigger_expanded)
                aria-controls=ids.body.clone()
                data-slot=SLOT_TRIGGER
                data-action=ACTION_OPEN
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    handle.open();
                }
            >
                {content.render()}
            </button>
        }
    });

    let body = slots.body.take().map(|(options, populate)| {
        let mut parts = populate.run();
        let has_footer = parts.has_footer();
        let described_by = parts
            .description
            .is_present()
            .then(|| ids.description.clone());

        let title = parts.title.take().map(|(title_options, content)| {
            view! {
                <h2
                    id=ids.title.clone()
                    class=alert_dialog_title_class(title_options.class_override())
                    data-slot=SLOT_TITLE
                >
                    {content.render()}
                </h2>
            }
        });
        let description = parts.description.take().map(|(description_options, content)| {
            view! {
                <p
                    id=ids.description.clone()
                    class=alert_dialog_description_class(description_options.class_override())
                    data-slot=SLOT_DESCRIPTION
                >
                    {content.render()}
                </p>
            }
        });
        let cancel = parts.cancel.take().map(|(cancel_options, content)| {
            view! {
                <button
                    type="button"
                    class=alert_dialog_cancel_class(cancel_options.class_override())
                    data-slot=SLOT_CANCEL
                    data-action=ACTION_CLOSE
                    on:click=move |_: MouseEvent| handle.close()
                >
                    {content.render()}
                </button>
            }
        });
        let action = parts.action.take().map(|(action_options, content)| {
            view! {
                <button
                    type="button"
                    class=alert_dialog_button_class(action_options.class_override())
                    data-slot=SLOT_ACTION
                    data-action=ACTION_CLOSE
                    on:click=move |_: MouseEvent| handle.close()
                >
                    {content.render()}
                </button>
            }
        });
        let footer = has_footer.then(|| {
            view! {
                <div class=ALERT_DIALOG_FOOTER data-slot=SLOT_FOOTER>
                    {cancel}
                    {action}
                </div>
            }
        });

        view! {
            <dialog
                node_ref=dialog_ref
                id=ids.body.clone()
                class=alert_dialog_dialog_class(options.class_override())
                aria-labelledby=ids.title.clone()
                aria-describedby=described_by
                data-alert-dialog-target=TARGET_DIALOG
                data-state=move || markers().dialog.token()
                on:close=move |_| handle.dispatch(AlertDialogAction::NativeDismiss)
            >
                <div
                    class=ALERT_DIALOG_OVERLAY
                    data-slot=SLOT_OVERLAY
                    data-state=move || markers().overlay.token()
                    on:click=move |_: MouseEvent| handle.dispatch(AlertDialogAction::BackdropClick)
                ></div>
                <div
                    class=ALERT_DIALOG_CONTENT
                    data-slot=SLOT_CONTENT
                    data-state=move || markers().content.token()
                >
                    <div class=ALERT_DIALOG_HEADER data-slot=SLOT_HEADER>
                        {title}
                        {description}
                    </div>
                    {footer}
                </div>
            </dialog>
        }
    });

    Ok::<View, ConfigError>(view! {
        <div
            id=ids.root.clone()
            class=alert_dialog_class(classes.as_deref())
            data-controller=CONTROLLER
            data-alert-dialog-open-value=move || bool_token(handle.is_open())
            data-state=move || markers().container.token()
            {..attrs}
        >
            {trigger}
            {body}
        </div>
    }
    .into_view())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_needs_cancel_or_action() {
        let mut parts = AlertDialogBodySlots::default();
        parts.with_title(|| "Delete project?");
        parts.with_description(|| "This cannot be undone.");
        assert!(!parts.has_footer());

        parts.with_action(|| "Delete").classes("bg-destructive text-white");
        assert!(parts.has_footer());
    }

    #[test]
    fn open_without_a_mounted_dialog_stays_closed() {
        let runtime = create_runtime();
        let dialog = AlertDialogHandle::new();
        dialog.open();
        assert!(!dialog.is_open());
        assert!(!dialog.state.get_untracked().markers().trigger_expanded);

        dialog.force_close();
        assert!(!dialog.is_open());
        runtime.dispose();
    }

    #[test]
    fn body_population_is_deferred() {
        let mut slots = AlertDialogSlots::populate(|dialog| {
            dialog.with_trigger(|| "Delete");
            dialog.with_body(|body| {
                body.with_cancel(|| "Cancel");
            });
        });
        assert!(slots.trigger.is_present());
        let (_, populate) = slots.body.take().expect("body slot");
        let parts = populate.run();
        assert!(parts.cancel.is_present());
        assert!(!parts.title.is_present());
    }
}
