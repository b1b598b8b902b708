//! Pay Page

use leptos::prelude::*;

use payme_core::{invoice_id_from_path, Invoice};

use crate::api;
use crate::components::StatusPill;

/// Invoice payment page
///
/// Reads the invoice id from the page path (`/pay/{invoiceId}`) itself, so
/// the page needs no server-side templating to know which invoice it shows.
#[component]
pub fn PayPage() -> impl IntoView {
    let invoice_id = web_sys::window()
        .map(|w| w.location().pathname().unwrap_or_default())
        .and_then(|path| invoice_id_from_path(&path).map(str::to_string));

    match invoice_id {
        Some(id) => view! { <InvoicePanel invoice_id=id /> }.into_any(),
        None => view! { <InvalidLink /> }.into_any(),
    }
}

/// Terminal state for links missing the invoice id; nothing gets wired, so
/// there is no retry from here.
#[component]
fn InvalidLink() -> impl IntoView {
    view! {
        <div class="card invoice">
            <p class="description">"Invalid invoice link."</p>
            <div class="actions">
                <button class="btn btn-primary" disabled=true>"Pay"</button>
            </div>
        </div>
    }
}

#[component]
fn InvoicePanel(invoice_id: String) -> impl IntoView {
    let (invoice, set_invoice) = signal(None::<Invoice>);
    let (refreshing, set_refreshing) = signal(false);
    let (checkout_pending, set_checkout_pending) = signal(false);

    // Initial load. A failure leaves the empty page in place and only logs;
    // the user can still hit refresh.
    {
        let id = invoice_id.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_invoice(&id).await {
                Ok(wire) => set_invoice.set(Some(Invoice::from_wire(wire))),
                Err(e) => leptos::logging::error!("invoice load failed: {e}"),
            }
        });
    }

    let refresh = {
        let id = invoice_id.clone();
        move |_| {
            set_refreshing.set(true);
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api::fetch_invoice(&id).await {
                    Ok(wire) => set_invoice.set(Some(Invoice::from_wire(wire))),
                    Err(e) => leptos::logging::error!("invoice refresh failed: {e}"),
                }
                // The loading state always clears, even on a failed fetch
                set_refreshing.set(false);
            });
        }
    };

    let pay = {
        let id = invoice_id.clone();
        move |_| {
            // Disable immediately to block double submission
            set_checkout_pending.set(true);
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api::start_checkout(&id).await {
                    Ok(session) => {
                        if let Some(attempt) = &session.attempt_id {
                            leptos::logging::log!("checkout attempt {attempt}");
                        }
                        // Busy state stays on; the page is navigating away
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().assign(&session.checkout_url);
                        }
                    }
                    Err(e) => {
                        leptos::logging::error!("checkout start failed: {e}");
                        if let Some(window) = web_sys::window() {
                            let _ = window
                                .alert_with_message("Could not start checkout. Please try again.");
                        }
                        set_checkout_pending.set(false);
                    }
                }
            });
        }
    };

    let amount = move || invoice.get().map(|inv| inv.amount_label()).unwrap_or_default();
    let description = move || {
        invoice
            .get()
            .map(|inv| inv.description_label())
            .unwrap_or_default()
    };
    let created = move || invoice.get().map(|inv| inv.created_label()).unwrap_or_default();
    let expires = move || invoice.get().map(|inv| inv.expires_label()).unwrap_or_default();
    let status = Signal::derive(move || invoice.get().map(|inv| inv.status).unwrap_or_default());

    let payable = move || invoice.get().is_some_and(|inv| inv.payable);
    let pay_disabled = move || checkout_pending.get() || !payable();
    let pay_label = move || {
        if checkout_pending.get() {
            "Starting checkout\u{2026}".to_string()
        } else if invoice.get().is_none() || payable() {
            "Pay".to_string()
        } else {
            "Not payable".to_string()
        }
    };

    view! {
        <div class="card invoice">
            <div class="invoice-header">
                <h1>"Invoice"</h1>
                <Show when=move || invoice.get().is_some()>
                    <StatusPill status=status />
                </Show>
            </div>

            <div class="amount">{amount}</div>
            <p class="description">{description}</p>

            <dl class="meta">
                <dt>"Created"</dt>
                <dd>{created}</dd>
            </dl>
            <p class="expires muted">{expires}</p>

            <div class="actions">
                <button class="btn" class:loading=move || refreshing.get() on:click=refresh>
                    "Refresh"
                </button>
                <button class="btn btn-primary" disabled=pay_disabled on:click=pay>
                    {pay_label}
                </button>
            </div>
        </div>
    }
}
