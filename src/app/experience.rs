use leptos::prelude::*;

use super::{
    particles::ParticlesBackground,
    reveal::{item_visible, use_reveal, use_stagger},
};
use crate::{
    content::{Experience, EXPERIENCE},
    particles::{Intensity, Variant},
    reveal::{motion_style, Direction, RevealOptions},
};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let heading = RevealOptions::default();
    let (heading_ref, heading_visible) = use_reveal(heading);
    let (grid_ref, entries_visible) = use_stagger(EXPERIENCE.len(), 120);

    view! {
        <section id="experience" class="py-20 relative overflow-hidden bg-secondary/20">
            <ParticlesBackground variant=Variant::Experience intensity=Intensity::Low />
            <div class="container mx-auto px-4 relative z-10">
                <div
                    node_ref=heading_ref
                    class="mb-12 text-center"
                    style=move || heading.style(heading_visible())
                >
                    <h2 class="text-accent font-medium mb-1">"MY JOURNEY"</h2>
                    <h3 class="text-3xl md:text-5xl font-serif">"Experience"</h3>
                </div>
                <div node_ref=grid_ref class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! { <ExperienceCard entry visible=item_visible(entries_visible, i) /> }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="absolute top-1/2 right-0 -translate-y-1/2 w-96 h-96 bg-accent/5 rounded-full blur-3xl -z-10"></div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static Experience, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="glass-morphism rounded-lg overflow-hidden group"
            style=move || motion_style(Direction::Up, 40.0, visible.get(), 0.6, 0)
        >
            <div class="p-6">
                <div class="h-1 w-20 bg-accent/30 mb-4 group-hover:w-32 transition-all duration-300"></div>
                <div class="flex items-start justify-between mb-3">
                    <h4 class="font-medium text-lg">{entry.title}</h4>
                    <span class="shrink-0 text-accent text-sm">{entry.period}</span>
                </div>
                <p class="text-sm text-muted-foreground mb-3">"@ " {entry.company}</p>
                <p class="text-sm text-muted-foreground">{entry.description}</p>
            </div>
        </div>
    }
}
