//! Landing page reached after a successful login.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col items-center justify-center gap-2 bg-theme-secondary">
            <h1 class="text-3xl font-bold text-theme-primary">"Welcome back"</h1>
            <p class="text-sm text-theme-secondary">"You are signed in."</p>
        </section>
    }
}
