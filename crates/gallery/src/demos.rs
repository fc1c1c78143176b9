//! One demo page per component.

use design_system::prelude::*;
use leptos::*;
use leptos_router::use_location;
use ui_runtime::OptionToken;

#[component]
fn DemoSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
pub fn AccordionDemo() -> impl IntoView {
    let faq = AccordionHandle::new();
    let last_change = create_rw_signal(String::from("none"));

    view! {
        <DemoSection title="Single, collapsible">
            <Accordion
                collapsible=true
                default_value="shipping"
                id="faq"
                handle=faq
                on_change=Callback::new(move |effect: AccordionEffect| {
                    last_change.set(format!("{effect:?}"));
                })
                slots=AccordionSlots::populate(|accordion| {
                    accordion.with_item("shipping", |item| {
                        item.with_trigger(|| "What are the shipping options?");
                        item.with_body(|| "Standard delivery takes 3 to 5 business days.");
                    });
                    accordion.with_item("returns", |item| {
                        item.with_trigger(|| "Can I return my order?");
                        item.with_body(|| "Unused items can be returned within 30 days.")
                            .classes("text-muted-foreground");
                    });
                    accordion
                        .with_item("warranty", |item| {
                            item.with_trigger(|| "Is there a warranty?");
                            item.with_body(|| "Warranty details are being updated.");
                        })
                        .disabled(true);
                })
            />
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| faq.open("returns"))
                >
                    "Open returns"
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| faq.close("shipping"))
                >
                    "Close shipping"
                </Button>
            </div>
            <p class="text-sm">"Open: " {move || faq.open_values().join(", ")}</p>
            <p class="text-sm">"Last change: " {move || last_change.get()}</p>
        </DemoSection>

        <DemoSection title="Multiple">
            <Accordion
                mode=AccordionMode::Multiple
                default_value=vec!["colors", "type"]
                id="tokens"
                slots=AccordionSlots::populate(|accordion| {
                    for (value, label) in [("colors", "Colors"), ("type", "Typography"), ("space", "Spacing")] {
                        accordion.with_item(value, move |item| {
                            item.with_trigger(move || label);
                            item.with_body(move || format!("{label} tokens live in the stylesheet."));
                        });
                    }
                })
            />
        </DemoSection>

        <DemoSection title="Rejected configuration">
            <ErrorBoundary fallback=|errors| {
                view! {
                    <p class="text-sm text-destructive">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| err.to_string())
                                .collect::<Vec<_>>()
                                .join("; ")
                        }}
                    </p>
                }
            }>
                <Accordion
                    default_value=vec!["a", "b"]
                    slots=AccordionSlots::populate(|accordion| {
                        accordion.with_item("a", |item| {
                            item.with_trigger(|| "Never rendered");
                        });
                    })
                />
            </ErrorBoundary>
        </DemoSection>
    }
}

#[component]
pub fn AlertDialogDemo() -> impl IntoView {
    let dialog = AlertDialogHandle::new();
    let location = use_location();

    // Navigating away must never leave a modal on top of the next page.
    create_effect(move |_| {
        location.pathname.track();
        dialog.force_close();
    });

    view! {
        <DemoSection title="Destructive confirmation">
            <AlertDialog
                id="delete-account"
                handle=dialog
                slots=AlertDialogSlots::populate(|alert| {
                    alert.with_trigger(|| "Delete account");
                    alert.with_body(|body| {
                        body.with_title(|| "Are you absolutely sure?");
                        body.with_description(|| {
                            "This permanently deletes your account and removes your data."
                        });
                        body.with_cancel(|| "Cancel");
                        body.with_action(|| "Delete")
                            .classes("bg-destructive text-white hover:bg-destructive/90");
                    });
                })
            />
            <div class="flex items-center gap-2">
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| dialog.open())>
                    "Open programmatically"
                </Button>
                <span class="text-sm">
                    {move || if dialog.is_open() { "Dialog is open" } else { "Dialog is closed" }}
                </span>
            </div>
        </DemoSection>

        <DemoSection title="Acknowledgement only">
            <AlertDialog
                id="session-expired"
                slots=AlertDialogSlots::populate(|alert| {
                    alert.with_trigger(|| "Simulate expiry").classes("border bg-background");
                    alert.with_body(|body| {
                        body.with_title(|| "Session expired");
                        body.with_action(|| "Sign in again");
                    });
                })
            />
        </DemoSection>
    }
}

#[component]
pub fn AvatarDemo() -> impl IntoView {
    view! {
        <DemoSection title="Sizes">
            <div class="flex items-center gap-3">
                {AvatarSize::ALL
                    .iter()
                    .map(|size| {
                        view! {
                            <Avatar
                                size=*size
                                slots=AvatarSlots::populate(|avatar| {
                                    avatar.with_image("https://github.com/shadcn.png").alt("shadcn");
                                    avatar.with_fallback(|| "CN");
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </DemoSection>

        <DemoSection title="Fallback">
            <div class="flex items-center gap-3">
                <Avatar slots=AvatarSlots::populate(|avatar| {
                    avatar.with_image("/missing.png").alt("Broken image");
                    avatar.with_fallback(|| "BI");
                }) />
                <Avatar slots=AvatarSlots::populate(|avatar| {
                    avatar.with_fallback(|| "NA").classes("bg-primary text-primary-foreground");
                }) />
            </div>
        </DemoSection>
    }
}

#[component]
pub fn BadgeDemo() -> impl IntoView {
    view! {
        <DemoSection title="Variants">
            <div class="flex flex-wrap gap-2">
                {BadgeVariant::ALL
                    .iter()
                    .map(|variant| view! { <Badge variant=*variant>{variant.token()}</Badge> })
                    .collect_view()}
                <Badge classes="h-5 min-w-5 px-1 font-mono tabular-nums" attr:title="Unread">
                    "99+"
                </Badge>
            </div>
        </DemoSection>
    }
}

#[component]
pub fn BreadcrumbDemo() -> impl IntoView {
    view! {
        <DemoSection title="Collapsed trail">
            <Breadcrumb slots=BreadcrumbSlots::populate(|trail| {
                trail.with_item(|| "Home").href("/");
                trail.with_ellipsis();
                trail.with_item(|| "Components").href("/");
                trail.with_item(|| "Breadcrumb").current(true);
            }) />
        </DemoSection>

        <DemoSection title="Slash separator">
            <Breadcrumb
                separator_icon=IconName::Slash
                slots=BreadcrumbSlots::populate(|trail| {
                    trail.with_item(|| "Home").href("/");
                    trail.with_item(|| "Settings").href("/").separator(false);
                    trail.with_item(|| "Profile").current(true);
                })
            />
        </DemoSection>
    }
}

#[component]
pub fn ButtonDemo() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);

    view! {
        <DemoSection title="Variants">
            <div class="flex flex-wrap gap-2">
                {ButtonVariant::ALL
                    .iter()
                    .map(|variant| view! { <Button variant=*variant>{variant.token()}</Button> })
                    .collect_view()}
            </div>
        </DemoSection>

        <DemoSection title="Sizes">
            <div class="flex flex-wrap items-center gap-2">
                <Button size=ButtonSize::Sm>"Small"</Button>
                <Button>"Default"</Button>
                <Button size=ButtonSize::Lg>"Large"</Button>
                <Button size=ButtonSize::Icon attr:aria-label="Next">
                    <Icon icon=IconName::ChevronRight />
                </Button>
                <Button size=ButtonSize::IconSm variant=ButtonVariant::Outline attr:aria-label="More">
                    <Icon icon=IconName::Ellipsis />
                </Button>
                <Button size=ButtonSize::IconLg variant=ButtonVariant::Ghost attr:aria-label="Expand">
                    <Icon icon=IconName::ChevronDown size=IconSize::Md />
                </Button>
            </div>
        </DemoSection>

        <DemoSection title="States and tags">
            <div class="flex flex-wrap items-center gap-2">
                <Button on_click=Callback::new(move |_| clicks.update(|count| *count += 1))>
                    {move || format!("Clicked {}", clicks.get())}
                </Button>
                <Button disabled=true>"Disabled"</Button>
                <Button tag=ButtonTag::Anchor href="/" variant=ButtonVariant::Link>
                    "Back to index"
                </Button>
                <form class="flex gap-2" on:submit=|ev| ev.prevent_default()>
                    <Button button_type=ButtonType::Submit>"Submit"</Button>
                    <Button button_type=ButtonType::Reset variant=ButtonVariant::Outline>
                        "Reset"
                    </Button>
                </form>
            </div>
        </DemoSection>
    }
}

#[component]
pub fn CardDemo() -> impl IntoView {
    view! {
        <DemoSection title="Full card">
            <Card
                classes="max-w-sm"
                slots=CardSlots::populate(|card| {
                    card.with_title(|| "Login to your account");
                    card.with_description(|| "Enter your email below to login.");
                    card.with_action(|| view! { <Button variant=ButtonVariant::Link>"Sign up"</Button> });
                    card.with_body(|| "Form fields go here.");
                    card.with_footer(|| view! { <Button classes="w-full">"Login"</Button> })
                        .classes("flex-col gap-2");
                })
            />
        </DemoSection>

        <DemoSection title="Body only">
            <Card slots=CardSlots::populate(|card| {
                card.with_body(|| "A card without a header renders no header region.");
            }) />
        </DemoSection>
    }
}
