use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Toast, ToastKind, ToastSlot};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Shows `toast` and dismisses it after a few seconds unless it was replaced.
pub fn show_toast(slot: RwSignal<ToastSlot>, toast: Toast) {
    let Some(generation) = slot.try_update(|s| s.show(toast)) else {
        return;
    };
    set_timeout(
        move || {
            slot.try_update(|s| s.expire(generation));
        },
        TOAST_LIFETIME,
    );
}

#[component]
pub fn ToastHost(current: RwSignal<ToastSlot>) -> impl IntoView {
    move || {
        current.with(|s| s.current().cloned()).map(|toast| {
            let accent = match toast.kind {
                ToastKind::Success => "border-green-500/50",
                ToastKind::Error => "border-red-500/50",
            };
            view! {
                <div
                    role="status"
                    aria-live="polite"
                    class=format!(
                        "fixed bottom-6 right-6 z-50 max-w-sm p-4 rounded-lg border bg-background/95 shadow-lg backdrop-blur-md animate-fade-in {accent}",
                    )
                >
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="font-medium">{toast.title}</p>
                            <p class="text-sm text-muted-foreground mt-1">{toast.body}</p>
                        </div>
                        <button
                            class="text-muted-foreground hover:text-foreground"
                            aria-label="Dismiss"
                            on:click=move |_| current.update(ToastSlot::dismiss)
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
