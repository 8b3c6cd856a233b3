use leptos::prelude::*;

use super::{
    particles::ParticlesBackground,
    reveal::{item_visible, use_reveal, use_stagger},
};
use crate::{
    content::{Project, PROJECTS},
    particles::{Intensity, Variant},
    reveal::{pop_in_style, Direction, RevealOptions},
};

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let heading = RevealOptions::default().direction(Direction::Down).distance(30.0);
    let (heading_ref, heading_visible) = use_reveal(heading);
    let (grid_ref, cards_visible) = use_stagger(PROJECTS.len(), 150);

    view! {
        <section id="portfolio" class="py-20 relative bg-secondary/20 overflow-hidden">
            <ParticlesBackground variant=Variant::Portfolio intensity=Intensity::Medium />
            <div class="container mx-auto px-4 relative z-10">
                <div
                    node_ref=heading_ref
                    class="mb-16 text-center"
                    style=move || heading.style(heading_visible())
                >
                    <h2 class="text-accent font-medium mb-1">"MY WORK"</h2>
                    <h3 class="text-3xl md:text-5xl font-serif text-gradient-soft">
                        "Featured Projects"
                    </h3>
                </div>
                <div node_ref=grid_ref class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <ProjectCard project visible=item_visible(cards_visible, index) />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="absolute bottom-0 left-1/4 w-96 h-96 bg-accent/5 rounded-full blur-3xl -z-10"></div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, visible: Signal<bool>) -> impl IntoView {
    let hidden = project.hidden_technology_count();

    view! {
        <div class="h-full" style=move || pop_in_style(visible.get())>
            <div class="h-full hover:-translate-y-2 transition-transform duration-300">
                <div class="glass-morphism rounded-lg overflow-hidden h-full group relative">
                    <div class="absolute inset-0 bg-gradient-to-br from-accent/10 to-purple-500/5 opacity-0 group-hover:opacity-100 transition-opacity duration-500 rounded-lg"></div>
                    <div class="relative z-10">
                        <div class="relative overflow-hidden h-48">
                            <img
                                src=project.image
                                alt=project.title
                                loading="lazy"
                                class="object-cover w-full h-full transition-transform duration-700 group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                            <div class="absolute top-4 right-4 bg-accent/90 backdrop-blur-sm text-white text-xs px-3 py-1 rounded-full font-medium">
                                {project.year}
                            </div>
                        </div>
                        <div class="p-6">
                            <h4 class="font-medium text-xl text-gradient-soft mb-3">{project.title}</h4>
                            <p class="text-muted-foreground mb-4 text-sm leading-relaxed">
                                {project.description}
                            </p>
                            <div class="flex flex-wrap gap-2 mb-6">
                                {project
                                    .visible_technologies()
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="text-xs px-3 py-1 bg-secondary/60 rounded-full border border-accent/20 hover:border-accent/40 hover:bg-accent/10 transition-all duration-300">
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                                {(hidden > 0)
                                    .then(|| {
                                        view! {
                                            <span class="text-xs px-3 py-1 bg-secondary/40 rounded-full text-muted-foreground">
                                                {format!("+{hidden}")}
                                            </span>
                                        }
                                    })}
                            </div>
                            <div class="flex space-x-3">
                                <CardLink href=project.github icon="devicon-github-plain" label="Code" />
                                <CardLink href=project.demo icon="extra-link" label="Demo" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CardLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-md border border-border hover:bg-accent/10 hover:border-accent/50 transition-all duration-300"
        >
            <i class=icon></i>
            <span>{label}</span>
        </a>
    }
}
