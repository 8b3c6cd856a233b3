use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::AboutSection, contact::ContactSection, experience::ExperienceSection,
    hero::HeroSection, portfolio::PortfolioSection, skills::SkillsSection,
};
use crate::content::PROFILE;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.page_title />
        <HeroSection />
        <AboutSection />
        <ExperienceSection />
        <SkillsSection />
        <PortfolioSection />
        <ContactSection />
    }
}
