//! Notice banner for the account page.
//!
//! Renders the page's single notice slot. Every line of the notice becomes
//! its own element; line content is plain text, never markup.

use leptos::prelude::*;

use crate::core::notice::{Notice, Severity};

/// Single-slot dismissible notice banner. Shown while the signal holds a
/// notice; the dismiss button clears the slot.
#[component]
pub fn NoticeBanner(
    /// Slot holding the current notice, if any
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|current| {
                let (bg_class, border_class, icon_class, icon_path) = match current.severity {
                    Severity::Success => (
                        "bg-green-500/10",
                        "border-green-500/30",
                        "text-green-400",
                        "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
                    ),
                    Severity::Danger => (
                        "bg-red-500/10",
                        "border-red-500/30",
                        "text-red-400",
                        "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
                    ),
                    Severity::Warning => (
                        "bg-yellow-500/10",
                        "border-yellow-500/30",
                        "text-yellow-400",
                        "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
                    ),
                    Severity::Info => (
                        "bg-blue-500/10",
                        "border-blue-500/30",
                        "text-blue-400",
                        "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
                    ),
                };

                let container_class = format!(
                    "flex items-start gap-3 p-4 rounded-lg border shadow-lg {} {}",
                    bg_class, border_class
                );

                view! {
                    <div class=container_class role="alert">
                        <div class=icon_class>
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                            </svg>
                        </div>
                        <div class="flex-1 min-w-0">
                            {current
                                .lines
                                .into_iter()
                                .map(|line| view! { <p class="text-sm text-theme-primary">{line}</p> })
                                .collect_view()}
                        </div>
                        <button
                            type="button"
                            class="text-theme-muted hover:text-theme-primary transition-colors"
                            on:click=move |_| notice.set(None)
                        >
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            </svg>
                        </button>
                    </div>
                }
            })
        }}
    }
}
