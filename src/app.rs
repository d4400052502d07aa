use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::auth::{AuthBackend, HttpAuthBackend};
use crate::ui::{AuthPage, HomePage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The auth operations are constructed here and handed to the page, so
    // swapping the backend is a shell-level decision
    let backend: Arc<dyn AuthBackend> = Arc::new(HttpAuthBackend::new());

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/gatefold.css"/>

        // sets the document title
        <Title text="Gatefold - Account"/>

        <Router>
            <main class="w-full">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=move || view! { <AuthPage backend=backend.clone()/> }/>
                    <Route path=path!("/home") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
