//! Combined login / signup page.
//!
//! A single card that slides between the two forms. Field values live in
//! page-level signals shared by both slides, so toggling the mode never
//! clears what the user already typed; only a full remount resets them.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::auth::{AuthBackend, AuthMode, SubmitOutcome, submit};
use crate::core::notice::Notice;
use crate::ui::common::FormField;
use crate::ui::notice::NoticeBanner;

/// Where the browser is sent after a successful login. Full page load, so
/// the form and its state are dropped on purpose.
const HOME_PATH: &str = "/home";

/// The account page.
///
/// The authentication operations arrive as an initialization parameter
/// from the application shell; the page holds no ambient wiring of its own.
#[component]
pub fn AuthPage(
    /// Authentication operations the page dispatches to
    backend: Arc<dyn AuthBackend>,
) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);

    // Shared by both slides; survives mode toggles
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Single slot: a new notice replaces the previous one, the dismiss
    // button clears it
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = {
        let backend = backend.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let backend = backend.clone();
            let current_mode = mode.get();
            let email_val = email.get();
            let password_val = password.get();
            let confirm_val = confirm_password.get();

            spawn_local(async move {
                let outcome = submit(
                    current_mode,
                    &email_val,
                    &password_val,
                    &confirm_val,
                    backend.as_ref(),
                )
                .await;

                match outcome {
                    SubmitOutcome::Rejected(error) => notice.set(Some(error.notice())),
                    SubmitOutcome::LoggedIn => redirect(HOME_PATH),
                    SubmitOutcome::LoginFailed => {
                        // The backend reports plain failure with no reason
                        // attached; nothing is surfaced here
                    }
                    SubmitOutcome::SignupSubmitted => {
                        notice.set(Some(Notice::success("Account created successfully!")));
                    }
                }
            });
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-theme-secondary">
            <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme space-y-5">
                <h2 class="text-2xl font-bold text-center text-theme-primary">"Account"</h2>

                <NoticeBanner notice=notice />

                // Slide controls: two mutually-exclusive mode selectors
                <div class="slide-controls flex rounded-lg border border-theme overflow-hidden" role="tablist">
                    <ModeTab mode=mode target=AuthMode::Login label="Login" />
                    <ModeTab mode=mode target=AuthMode::Signup label="Sign Up" />
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <FormField
                        input_type="text"
                        placeholder="Email Address"
                        autocomplete="email"
                        required=true
                        value=email
                    />
                    <FormField
                        input_type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        required=true
                        value=password
                    />

                    <Show when=move || !mode.get().is_login()>
                        <FormField
                            input_type="password"
                            placeholder="Confirm Password"
                            autocomplete="new-password"
                            required=true
                            value=confirm_password
                        />
                    </Show>

                    <Show when=move || mode.get().is_login()>
                        <div class="pass-link text-sm">
                            <a href="#" class="text-accent-primary hover:text-accent-primary-hover">
                                "Reset password?"
                            </a>
                        </div>
                    </Show>

                    // Stays enabled while a login is in flight
                    <button
                        type="submit"
                        class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                               text-white font-medium rounded-lg transition-colors"
                    >
                        {move || mode.get().submit_label()}
                    </button>

                    <Show when=move || mode.get().is_login()>
                        <div class="signup-link text-center text-sm text-theme-secondary">
                            "Don't Have Account? "
                            <button
                                type="button"
                                class="text-accent-primary hover:text-accent-primary-hover font-medium"
                                on:click=move |_| mode.set(AuthMode::Signup)
                            >
                                "Create A New"
                            </button>
                        </div>
                    </Show>
                </form>
            </div>
        </div>
    }
}

/// One of the two slide selectors. Selecting a mode only swaps the rendered
/// field set and submit label; no validation runs and no field changes.
#[component]
fn ModeTab(
    /// Current mode signal
    mode: RwSignal<AuthMode>,
    /// Mode this control selects
    target: AuthMode,
    /// Display label
    label: &'static str,
) -> impl IntoView {
    let is_active = move || mode.get() == target;

    view! {
        <button
            type="button"
            id=format!("slide-{target}")
            role="tab"
            aria-selected=move || is_active().to_string()
            class="slide flex-1 py-2 text-sm font-medium transition-colors"
            class:slide-active=is_active
            on:click=move |_| mode.set(target)
        >
            {label}
        </button>
    }
}

/// Full-page navigation; unmounts the component and drops all form state.
fn redirect(path: &str) {
    #[cfg(not(feature = "ssr"))]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(feature = "ssr")]
    let _ = path;
}
