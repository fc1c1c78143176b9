use ui_runtime::contract::theme;
use ui_runtime::{
    ButtonSize, ButtonTag, ButtonType, ButtonVariant, OptionToken, ThemeController,
    ThemePreference, ThemeStore,
};

use super::*;
use crate::browser::{apply_root_theme, system_prefers_dark, WebThemeStore};
use crate::styles::{button_class, theme_toggle_class};

#[component]
/// Button rendered as `<button>` or, for navigation, `<a>`.
///
/// `type` is only emitted on `<button>`. Extra attributes passed with `attr:` land on the root
/// element after the computed ones.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(default = ButtonTag::Button)] tag: ButtonTag,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] classes: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, classes.as_deref());
    let handle_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    match tag {
        ButtonTag::Button => view! {
            <button
                type=button_type.token()
                class=class
                disabled=move || disabled.get()
                on:click=move |ev| handle_click(ev)
                {..attrs}
            >
                {children()}
            </button>
        }
        .into_view(),
        ButtonTag::Anchor => view! {
            <a
                href=href
                class=class
                aria-disabled=move || disabled.get().then_some("true")
                on:click=move |ev| handle_click(ev)
                {..attrs}
            >
                {children()}
            </a>
        }
        .into_view(),
    }
}

fn sync_root_theme(class: Option<&str>) {
    if let Err(err) = apply_root_theme(class) {
        logging::warn!("theme root class update failed: {err}");
    }
}

/// Flips the on-page appearance and tries to persist it. The flip applies even when storage
/// rejects the write.
fn flip_appearance<S: ThemeStore>(
    controller: &ThemeController<S>,
    current: ThemePreference,
) -> ThemePreference {
    let next = current.toggled();
    if let Err(err) = controller.persist(next) {
        logging::warn!("theme preference not saved: {err}");
    }
    next
}

#[component]
/// Light/dark toggle persisted in `localStorage`.
///
/// Without a stored choice the system color scheme decides and `<html>` carries neither class.
pub fn ThemeToggle(
    #[prop(optional, into)] classes: Option<String>,
    #[prop(default = "Toggle theme".to_string(), into)] aria_label: String,
) -> impl IntoView {
    let controller = ThemeController::new(WebThemeStore);
    let appearance = create_rw_signal(controller.effective(system_prefers_dark()));

    create_effect(move |_| sync_root_theme(controller.root_class()));

    let toggle = move |_: MouseEvent| {
        let next = flip_appearance(&controller, appearance.get_untracked());
        appearance.set(next);
        sync_root_theme(Some(next.token()));
    };

    view! {
        <button
            type="button"
            class=theme_toggle_class(classes.as_deref())
            aria-label=aria_label
            data-controller=theme::CONTROLLER
            data-action=theme::ACTION_TOGGLE
            data-theme=move || appearance.get().token()
            on:click=toggle
        >
            {move || {
                let icon = match appearance.get() {
                    ThemePreference::Dark => IconName::Sun,
                    ThemePreference::Light => IconName::Moon,
                };
                view! { <Icon icon=icon size=IconSize::Md /> }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_runtime::MemoryThemeStore;

    use super::*;

    struct ReadOnlyStore;

    impl ThemeStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Result<Option<String>, String> {
            Ok(None)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }
    }

    #[test]
    fn appearance_flips_even_when_storage_rejects_the_write() {
        let controller = ThemeController::new(ReadOnlyStore);
        let first = flip_appearance(&controller, ThemePreference::Light);
        assert_eq!(first, ThemePreference::Dark);
        assert_eq!(flip_appearance(&controller, first), ThemePreference::Light);
        assert_eq!(controller.stored(), None);
    }

    #[test]
    fn flipped_appearance_is_persisted_when_storage_works() {
        let controller = ThemeController::new(MemoryThemeStore::default());
        let next = flip_appearance(&controller, ThemePreference::Dark);
        assert_eq!(next, ThemePreference::Light);
        assert_eq!(controller.root_class(), Some("light"));
    }
}
