use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::demos::{
    AccordionDemo, AlertDialogDemo, AvatarDemo, BadgeDemo, BreadcrumbDemo, ButtonDemo, CardDemo,
};
use design_system::prelude::*;

/// Gallery pages, in navigation order.
const PAGES: [(&str, &str); 7] = [
    ("accordion", "Accordion"),
    ("alert-dialog", "Alert Dialog"),
    ("avatar", "Avatar"),
    ("badge", "Badge"),
    ("breadcrumb", "Breadcrumb"),
    ("button", "Button"),
    ("card", "Card"),
];

#[component]
pub fn GalleryApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Design System Gallery" />
        <Meta name="description" content="Every design-system component with live behavior." />

        <Router>
            <header class="flex items-center justify-between border-b px-6 py-3">
                <A href="/" class="font-semibold">"Design System"</A>
                <ThemeToggle />
            </header>
            <main class="mx-auto flex max-w-3xl flex-col gap-8 p-6">
                <Routes>
                    <Route path="" view=GalleryIndex />
                    <Route path="/components/:name" view=ComponentRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn GalleryIndex() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">"Components"</h1>
            <ul class="grid grid-cols-2 gap-2">
                {PAGES
                    .into_iter()
                    .map(|(slug, label)| {
                        view! {
                            <li>
                                <A href=format!("/components/{slug}")>{label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn ComponentRoute() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.with(|map| map.get("name").cloned()).unwrap_or_default();

    move || {
        let name = name();
        let label = PAGES
            .iter()
            .find(|(slug, _)| *slug == name)
            .map(|(_, label)| *label);
        let demo = match name.as_str() {
            "accordion" => view! { <AccordionDemo /> }.into_view(),
            "alert-dialog" => view! { <AlertDialogDemo /> }.into_view(),
            "avatar" => view! { <AvatarDemo /> }.into_view(),
            "badge" => view! { <BadgeDemo /> }.into_view(),
            "breadcrumb" => view! { <BreadcrumbDemo /> }.into_view(),
            "button" => view! { <ButtonDemo /> }.into_view(),
            "card" => view! { <CardDemo /> }.into_view(),
            _ => view! { <p>"Unknown component."</p> }.into_view(),
        };
        view! {
            <section class="flex flex-col gap-6">
                <Breadcrumb slots=BreadcrumbSlots::populate(move |trail| {
                    trail.with_item(|| "Components").href("/");
                    trail.with_item(move || label.unwrap_or("Not found")).current(true);
                }) />
                {demo}
            </section>
        }
    }
}
