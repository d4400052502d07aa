use leptos::prelude::*;

/// Single-line form input with placeholder styling shared by the auth
/// fields. Reads and writes the caller-owned value signal; no per-field
/// error slot, validation reports through the page's notice instead.
#[component]
pub fn FormField(
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Autocomplete hint forwarded to the browser
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Whether the browser should require a value before submit
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <input
                type=input_type
                class="input-base"
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
