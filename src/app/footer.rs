use leptos::prelude::*;

use crate::{
    config,
    content::{SocialKind, PROFILE, SOCIAL_LINKS},
};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-border">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="text-center md:text-left">
                    <a href="#home" class="text-xl font-serif font-semibold text-gradient">
                        {PROFILE.short_name}
                    </a>
                    <p class="text-sm text-muted-foreground mt-2">
                        {format!("© {} {}. All rights reserved.", config::build_year(), PROFILE.full_name)}
                    </p>
                </div>
                <div class="flex space-x-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            let external = link.kind != SocialKind::Email;
                            view! {
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    aria-label=link.label
                                    class="h-10 w-10 rounded-full bg-secondary/50 flex items-center justify-center hover:text-accent hover:bg-accent/10 transition-colors"
                                >
                                    <i class=link.kind.icon_class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
