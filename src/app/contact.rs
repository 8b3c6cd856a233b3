use leptos::{ev, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::{
    particles::ParticlesBackground,
    reveal::use_reveal,
    toast::{show_toast, ToastHost},
};
use crate::{
    config::RelayConfig,
    contact::{ContactError, ContactForm, Field, FieldError, Toast, ToastSlot},
    content::{SocialKind, CONTACT, SOCIAL_LINKS},
    particles::{Intensity, Variant},
    reveal::{Direction, RevealOptions},
};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-secondary bg-secondary/30 text-foreground placeholder-muted-foreground focus:outline-none focus:ring-2 focus:ring-accent transition-all duration-200";

#[component]
pub fn ContactSection() -> impl IntoView {
    let relay = StoredValue::new(RelayConfig::from_build_env());
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let sending = RwSignal::new(false);
    let toast = RwSignal::new(ToastSlot::default());

    let details = RevealOptions::default().direction(Direction::Left);
    let (details_ref, details_visible) = use_reveal(details);
    let card = RevealOptions::default()
        .direction(Direction::Right)
        .delay_ms(150);
    let (card_ref, card_visible) = use_reveal(card);

    // keep the draft across reloads
    #[cfg(feature = "hydrate")]
    {
        let (draft, set_draft, _) =
            use_local_storage::<ContactForm, JsonSerdeWasmCodec>("contact_draft");
        Effect::watch(
            || (),
            move |_, _, _| {
                let saved = draft.get_untracked();
                if !saved.is_empty() {
                    form.set(saved);
                }
            },
            true,
        );
        Effect::watch(
            move || form.get(),
            move |current, _, _| set_draft.set(current.clone()),
            false,
        );
    }

    let on_input = move |field: Field| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.set(field, value));
            errors.update(|es| es.retain(|e| e.field() != field));
        }
    };
    let value_of = move |field: Field| move || form.with(|f| f.get(field).to_string());
    let error_for = move |field: Field| {
        move || {
            errors.with(|es| {
                es.iter().find(|e| e.field() == field).map(|e| {
                    view! { <p class="text-xs text-red-400 mt-1">{e.to_string()}</p> }
                })
            })
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        if let Err(found) = snapshot.validate() {
            errors.set(found.clone());
            show_toast(toast, Toast::from_outcome(&Err(ContactError::Invalid(found))));
            return;
        }
        errors.set(Vec::new());
        sending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let relay = relay.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::contact::send(&relay, &snapshot).await;
                if let Err(e) = &outcome {
                    log::error!("contact form submission failed: {e}");
                }
                form.update(|f| f.settle(&outcome));
                sending.set(false);
                show_toast(toast, Toast::from_outcome(&outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (relay, snapshot);
            sending.set(false);
        }
    };

    view! {
        <section id="contact" class="py-20 relative overflow-hidden">
            <ParticlesBackground variant=Variant::Contact intensity=Intensity::Low />
            <div class="container mx-auto px-4 relative z-10">
                <div class="mb-12 text-center">
                    <h2 class="text-accent font-medium mb-1">"GET IN TOUCH"</h2>
                    <h3 class="text-3xl md:text-5xl font-serif">"Contact"</h3>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                    <div node_ref=details_ref style=move || details.style(details_visible())>
                        <h4 class="text-xl font-serif mb-6">{CONTACT.heading}</h4>
                        <p class="text-muted-foreground mb-8">{CONTACT.blurb}</p>
                        <div class="space-y-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    let external = link.kind != SocialKind::Email;
                                    view! {
                                        <div class="flex items-center space-x-3">
                                            <div class="h-10 w-10 rounded-full bg-accent/10 flex items-center justify-center text-accent">
                                                <i class=link.kind.icon_class()></i>
                                            </div>
                                            <a
                                                href=link.href
                                                target=external.then_some("_blank")
                                                rel=external.then_some("noopener noreferrer")
                                                class="hover:text-accent transition-colors"
                                            >
                                                {link.label}
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        node_ref=card_ref
                        class="glass-morphism rounded-lg p-6"
                        style=move || card.style(card_visible())
                    >
                        <h4 class="text-lg font-serif mb-6">"Send Me a Message"</h4>
                        <form class="space-y-4" novalidate=true on:submit=on_submit>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="space-y-2">
                                    <label for="name" class="text-sm">"Name"</label>
                                    <input
                                        id="name"
                                        name="name"
                                        placeholder="Your Name"
                                        class=INPUT_CLASS
                                        prop:value=value_of(Field::Name)
                                        on:input=on_input(Field::Name)
                                    />
                                    {error_for(Field::Name)}
                                </div>
                                <div class="space-y-2">
                                    <label for="email" class="text-sm">"Email"</label>
                                    <input
                                        id="email"
                                        name="email"
                                        type="email"
                                        placeholder="Your Email"
                                        class=INPUT_CLASS
                                        prop:value=value_of(Field::Email)
                                        on:input=on_input(Field::Email)
                                    />
                                    {error_for(Field::Email)}
                                </div>
                            </div>
                            <div class="space-y-2">
                                <label for="subject" class="text-sm">"Subject"</label>
                                <input
                                    id="subject"
                                    name="subject"
                                    placeholder="Subject"
                                    class=INPUT_CLASS
                                    prop:value=value_of(Field::Subject)
                                    on:input=on_input(Field::Subject)
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="message" class="text-sm">"Message"</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    placeholder="Your Message"
                                    class=format!("{INPUT_CLASS} min-h-[120px]")
                                    prop:value=value_of(Field::Message)
                                    on:input=on_input(Field::Message)
                                ></textarea>
                                {error_for(Field::Message)}
                            </div>
                            <button
                                type="submit"
                                class="w-full px-4 py-2 rounded-md bg-accent hover:bg-accent/90 text-white font-medium transition-colors disabled:opacity-60 disabled:cursor-not-allowed"
                                disabled=move || sending.get()
                            >
                                {move || if sending.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
            <ToastHost current=toast />
        </section>
    }
}
