use leptos::prelude::*;

use super::{
    particles::ParticlesBackground,
    reveal::{item_visible, use_reveal, use_stagger},
};
use crate::{
    content::{ABOUT, EDUCATION, TRAITS},
    particles::{Intensity, Variant},
    reveal::{motion_style, Direction, RevealOptions},
};

#[component]
pub fn AboutSection() -> impl IntoView {
    let heading = RevealOptions::default().threshold(0.3);
    let (heading_ref, heading_visible) = use_reveal(heading);
    let bio = RevealOptions::default()
        .direction(Direction::Right)
        .delay_ms(200)
        .distance(80.0);
    let (bio_ref, bio_visible) = use_reveal(bio);
    let (cards_ref, cards_visible) = use_stagger(EDUCATION.len(), 150);

    view! {
        <section id="about" class="py-20 relative overflow-hidden">
            <ParticlesBackground variant=Variant::About intensity=Intensity::Medium />
            <div class="container mx-auto px-4 relative z-10">
                <div
                    node_ref=heading_ref
                    class="mb-16 text-center"
                    style=move || heading.style(heading_visible())
                >
                    <h2 class="text-accent font-medium mb-2 tracking-wider">"GET TO KNOW ME"</h2>
                    <h3 class="text-4xl md:text-6xl font-serif text-gradient-soft">"About Me"</h3>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 mb-16">
                    <div
                        node_ref=bio_ref
                        class="space-y-8 relative z-20"
                        style=move || bio.style(bio_visible())
                    >
                        {ABOUT
                            .iter()
                            .map(|p| {
                                let class = if p.highlight {
                                    "text-lg font-medium text-white leading-relaxed"
                                } else {
                                    "text-gray-200 leading-relaxed"
                                };
                                view! { <p class=class>{p.text}</p> }
                            })
                            .collect_view()}
                        <div class="flex flex-wrap gap-3 mt-8">
                            {TRAITS
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="px-4 py-2 bg-accent/10 border border-accent/20 rounded-full text-accent text-sm font-medium">
                                            {*t}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div node_ref=cards_ref class="relative z-20 space-y-8">
                        <h4 class="text-2xl font-serif mb-6 text-white">
                            "Educational Journey & Achievements"
                        </h4>
                        {EDUCATION
                            .iter()
                            .enumerate()
                            .map(|(i, edu)| {
                                let visible = item_visible(cards_visible, i);
                                view! {
                                    <div
                                        class="glass-morphism rounded-lg p-6 group hover:border-accent/30 hover:-translate-y-1 transition-all duration-300"
                                        style=move || {
                                            motion_style(Direction::Scale, 50.0, visible.get(), 0.6, 0)
                                        }
                                    >
                                        <div class="flex justify-between items-start mb-3">
                                            <h5 class="font-semibold text-lg text-white group-hover:text-accent transition-colors">
                                                {edu.school}
                                            </h5>
                                            <span class="text-accent text-sm font-medium bg-accent/10 px-3 py-1 rounded-full">
                                                {edu.period}
                                            </span>
                                        </div>
                                        <p class="text-sm text-accent/80 font-medium mb-2">{edu.degree}</p>
                                        <p class="text-sm leading-relaxed text-gray-200">{edu.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="absolute top-1/4 left-0 w-96 h-96 bg-accent/5 rounded-full blur-3xl -z-10 animate-drift"></div>
        </section>
    }
}
