use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{entered, Reveal, RevealAction, RevealOptions, Stagger};

const STAGGER_THRESHOLD: f64 = 0.1;

type Timers = Arc<Mutex<Vec<TimeoutHandle>>>;

fn clear_timers(timers: &Timers) {
    for handle in timers
        .lock()
        .expect("should be able to lock timers")
        .drain(..)
    {
        handle.clear();
    }
}

/// Attaches an intersection observer to the returned node and reports
/// `in view` transitions to `on_change`.
fn observe<F>(node_ref: NodeRef<html::Div>, threshold: f64, mut on_change: F)
where
    F: FnMut(bool) + Send + Sync + 'static,
{
    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            if let Some(entry) = entries.last() {
                on_change(entered(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                ));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
}

/// Scroll-triggered visibility for a single element.
pub fn use_reveal(options: RevealOptions) -> (NodeRef<html::Div>, ReadSignal<bool>) {
    let node_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(options.immediately_visible);
    let state = Arc::new(Mutex::new(Reveal::new(options)));
    let timers: Timers = Arc::default();

    {
        let timers = timers.clone();
        observe(node_ref, options.threshold, move |in_view| {
            let action = state
                .lock()
                .expect("should be able to lock reveal state")
                .observe(in_view);
            if !in_view && !options.trigger_once {
                clear_timers(&timers);
            }
            match action {
                RevealAction::Nothing => {}
                RevealAction::Show => set_visible(true),
                RevealAction::ShowAfter(ms) => {
                    let state = state.clone();
                    let handle = set_timeout_with_handle(
                        move || {
                            let fired = state
                                .lock()
                                .expect("should be able to lock reveal state")
                                .fire();
                            if fired {
                                set_visible(true);
                            }
                        },
                        Duration::from_millis(ms),
                    );
                    match handle {
                        Ok(h) => timers
                            .lock()
                            .expect("should be able to lock timers")
                            .push(h),
                        Err(e) => log::warn!("couldn't schedule reveal: {:?}", e),
                    }
                }
            }
        });
    }

    on_cleanup(move || clear_timers(&timers));

    (node_ref, visible)
}

/// Reveals `count` items one after another once the container scrolls in.
pub fn use_stagger(count: usize, base_delay_ms: u64) -> (NodeRef<html::Div>, ReadSignal<Vec<bool>>) {
    let node_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(vec![false; count]);
    let state = Arc::new(Mutex::new(Stagger::new(count, base_delay_ms)));
    let timers: Timers = Arc::default();

    let reveal = {
        let state = state.clone();
        move |index: usize| {
            let snapshot = {
                let mut stagger = state.lock().expect("should be able to lock stagger");
                stagger.reveal(index);
                stagger.visible().to_vec()
            };
            set_visible(snapshot);
        }
    };

    {
        let timers = timers.clone();
        observe(node_ref, STAGGER_THRESHOLD, move |in_view| {
            if !in_view {
                return;
            }
            let schedule = state
                .lock()
                .expect("should be able to lock stagger")
                .start();
            for (index, delay) in schedule {
                if delay == 0 {
                    reveal(index);
                    continue;
                }
                let reveal = reveal.clone();
                match set_timeout_with_handle(move || reveal(index), Duration::from_millis(delay)) {
                    Ok(h) => timers
                        .lock()
                        .expect("should be able to lock timers")
                        .push(h),
                    Err(e) => log::warn!("couldn't schedule staggered reveal: {:?}", e),
                }
            }
        });
    }

    on_cleanup(move || clear_timers(&timers));

    (node_ref, visible)
}

/// Visibility of one staggered item.
pub fn item_visible(items: ReadSignal<Vec<bool>>, index: usize) -> Signal<bool> {
    Signal::derive(move || items.with(|v| v.get(index).copied().unwrap_or(false)))
}
