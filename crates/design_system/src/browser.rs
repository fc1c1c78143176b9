//! Browser glue: `localStorage`, `matchMedia`, and the document root class list.
//!
//! Calls are gated on `wasm32`; native builds get inert fallbacks so component crates still
//! compile and unit-test off the browser.

use ui_runtime::ThemeStore;

#[derive(Debug, Clone, Copy, Default)]
/// Theme store backed by `window.localStorage`.
pub struct WebThemeStore;

impl ThemeStore for WebThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            storage
                .get_item(key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Returns `true` when the system color scheme is dark.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Replaces the `light`/`dark` class on `<html>` with `class`, or clears it.
///
/// # Errors
///
/// Returns an error when the document root is unavailable or the class list rejects the update.
pub fn apply_root_theme(class: Option<&str>) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| "document root unavailable".to_string())?;
        let classes = root.class_list();
        classes
            .remove_2("light", "dark")
            .map_err(|e| format!("classList.remove failed: {e:?}"))?;
        if let Some(class) = class {
            classes
                .add_1(class)
                .map_err(|e| format!("classList.add failed: {e:?}"))?;
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = class;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_runtime::ThemeController;

    use super::*;

    #[test]
    fn native_fallbacks_are_inert() {
        let controller = ThemeController::new(WebThemeStore);
        assert_eq!(controller.stored(), None);
        assert!(!system_prefers_dark());
        assert_eq!(apply_root_theme(Some("dark")), Ok(()));
    }
}
