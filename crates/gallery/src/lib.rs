//! Browser gallery rendering every design-system component.

mod demos;
mod web_app;

pub use web_app::{GalleryApp, GalleryIndex};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
