//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::PayPage;

/// Root application component
///
/// Bare `/pay` is routed to the page as well so that a link missing its
/// invoice id lands in the page's invalid-link state instead of the 404
/// fallback.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/pay/:id") view=PayPage />
                    <Route path=path!("/pay") view=PayPage />
                </Routes>
            </main>
        </Router>
    }
}
