use leptos::prelude::*;

use super::{header::scroll_to_section, particles::ParticlesBackground, reveal::use_reveal};
use crate::{
    content::PROFILE,
    particles::{Intensity, Variant},
    reveal::{Direction, RevealOptions},
};

#[component]
pub fn HeroSection() -> impl IntoView {
    let intro = RevealOptions::default().immediately_visible(true);
    let (intro_ref, intro_visible) = use_reveal(intro);
    let portrait = RevealOptions::default()
        .direction(Direction::Scale)
        .delay_ms(300);
    let (portrait_ref, portrait_visible) = use_reveal(portrait);

    view! {
        <section id="home" class="min-h-screen flex items-center pt-16 pb-10 relative overflow-hidden">
            <ParticlesBackground variant=Variant::Hero intensity=Intensity::Medium />
            <div class="container mx-auto px-4 relative z-10">
                <div class="flex flex-col lg:flex-row items-center">
                    <div
                        node_ref=intro_ref
                        class="lg:w-1/2 space-y-6"
                        style=move || intro.style(intro_visible())
                    >
                        <div class="flex items-center space-x-2 mb-4">
                            <span class="h-2 w-2 rounded-full bg-accent animate-pulse"></span>
                            <p class="text-sm text-muted-foreground">{PROFILE.availability}</p>
                        </div>
                        <h2 class="text-2xl md:text-4xl font-light">{PROFILE.greeting}</h2>
                        <h1 class="text-4xl md:text-7xl font-serif font-bold text-gradient">
                            {PROFILE
                                .headline
                                .iter()
                                .map(|line| view! { <span class="block">{*line}</span> })
                                .collect_view()}
                        </h1>
                        <div class="mt-4 mb-6">
                            <h3 class="text-xl md:text-3xl font-serif">
                                {PROFILE
                                    .roles
                                    .iter()
                                    .map(|line| view! { <span class="block">{*line}</span> })
                                    .collect_view()}
                            </h3>
                            <p class="mt-4 text-muted-foreground max-w-lg">{PROFILE.tagline}</p>
                        </div>
                        <button
                            class="px-6 py-3 rounded-md bg-accent hover:bg-accent/90 text-white font-medium transition-all duration-200"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Get In Touch"
                        </button>
                    </div>

                    <div class="lg:w-1/2 mt-10 lg:mt-0 relative flex justify-center items-center">
                        <div
                            node_ref=portrait_ref
                            class="relative z-10 animate-float"
                            style=move || portrait.style(portrait_visible())
                        >
                            <div class="w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-accent/20">
                                <div class="w-full h-full bg-secondary rounded-full flex items-center justify-center">
                                    <span class="text-muted-foreground">"Profile Image"</span>
                                </div>
                            </div>
                        </div>
                        <div class="absolute inset-0 bg-gradient-to-br from-accent/20 to-transparent rounded-full blur-3xl opacity-30"></div>
                    </div>
                </div>
            </div>
            <div class="absolute top-1/4 right-10 w-64 h-64 bg-accent/5 rounded-full blur-3xl"></div>
            <div class="absolute bottom-1/4 left-10 w-64 h-64 bg-accent/5 rounded-full blur-3xl"></div>
        </section>
    }
}
