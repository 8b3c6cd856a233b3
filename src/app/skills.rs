use leptos::prelude::*;

use super::{particles::ParticlesBackground, reveal::use_reveal};
use crate::{
    content::{SERVICES, SKILL_GROUPS},
    particles::{Intensity, Variant},
    reveal::{Direction, RevealOptions},
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let heading = RevealOptions::default();
    let (heading_ref, heading_visible) = use_reveal(heading);
    let groups = RevealOptions::default().direction(Direction::Left).delay_ms(150);
    let (groups_ref, groups_visible) = use_reveal(groups);
    let services = RevealOptions::default().direction(Direction::Fade).delay_ms(250);
    let (services_ref, services_visible) = use_reveal(services);

    view! {
        <section id="skills" class="py-20 relative overflow-hidden">
            <ParticlesBackground variant=Variant::Skills intensity=Intensity::Low />
            <div class="container mx-auto px-4 relative z-10">
                <div
                    node_ref=heading_ref
                    class="mb-12 text-center"
                    style=move || heading.style(heading_visible())
                >
                    <h2 class="text-accent font-medium mb-1">"WHAT I KNOW"</h2>
                    <h3 class="text-3xl md:text-5xl font-serif">"Skills"</h3>
                </div>

                <div
                    node_ref=groups_ref
                    class="grid grid-cols-1 lg:grid-cols-2 gap-10"
                    style=move || groups.style(groups_visible())
                >
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <Card title=group.title>
                                    <div class="flex flex-wrap gap-3">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-2 bg-secondary/50 rounded-md text-sm hover:bg-accent/20 transition-colors">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    node_ref=services_ref
                    class="mt-16"
                    style=move || services.style(services_visible())
                >
                    <Card title="Services">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            {SERVICES
                                .iter()
                                .map(|service| {
                                    view! {
                                        <div>
                                            <h5 class="text-lg mb-3">{service.title}</h5>
                                            <p class="text-muted-foreground">{service.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Card>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="glass-morphism rounded-lg relative overflow-hidden">
            <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-accent/80 to-accent/10"></div>
            <div class="p-6">
                <h4 class="text-xl font-serif mb-6">{title}</h4>
                {children()}
            </div>
        </div>
    }
}
