//! UI Components

use leptos::prelude::*;

use payme_core::StatusTone;

/// Status pill component
///
/// Text is always the raw status string; only the pill class is derived.
#[component]
pub fn StatusPill(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let class = move || format!("pill {}", StatusTone::for_status(&status.get()).css_class());

    view! {
        <span class=class>{move || status.get()}</span>
    }
}
