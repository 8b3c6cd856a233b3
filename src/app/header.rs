use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::{NAV_SECTIONS, PROFILE};

pub fn scroll_to_section(id: &str) {
    let el = if let Some(el) = document().get_element_by_id(id) {
        el
    } else {
        log::warn!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |id: &'static str| {
        set_menu_open(false);
        scroll_to_section(id);
    };

    let nav_items = move |class: &'static str| {
        NAV_SECTIONS
            .iter()
            .map(|section| {
                view! {
                    <button class=class on:click=move |_| go_to(section.id)>
                        {section.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 left-0 w-full z-50 bg-background/80 backdrop-blur-md border-b border-border">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#" class="font-serif text-xl md:text-2xl font-bold text-gradient">
                    {PROFILE.short_name}
                    "."
                </a>

                <nav class="hidden md:flex space-x-6">
                    {nav_items(
                        "text-sm uppercase tracking-wider text-muted-foreground hover:text-accent transition-colors",
                    )}
                </nav>

                <button
                    class="hidden md:flex px-4 py-2 rounded-md bg-accent hover:bg-accent/90 text-white transition-colors"
                    on:click=move |_| go_to("contact")
                >
                    "Contact"
                </button>

                <button
                    class="md:hidden p-2 text-foreground text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open()>
                <div class="md:hidden absolute top-16 left-0 w-full bg-background border-b border-border animate-fade-in">
                    <nav class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        {nav_items(
                            "text-sm uppercase tracking-wider text-muted-foreground hover:text-accent transition-colors py-2 text-left",
                        )}
                    </nav>
                </div>
            </Show>
        </header>
    }
}
