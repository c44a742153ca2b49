//! Labelled form controls that display a per-field validation message.

use leptos::prelude::*;

/// Text input bound to a signal, with the field's error shown underneath.
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    /// Field value
    value: RwSignal<String>,
    /// Message of the last failed check for this field
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Run the field's rule when focus leaves the input
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Input type: "text" (default), "email", "tel", "url", "number", "password"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_t
                placeholder=input_placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

/// Multi-line variant of [`FormField`].
#[component]
pub fn FormTextArea(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(4)
                placeholder=input_placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
            ></textarea>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

/// Error text for `field` out of a reactive error map.
pub fn field_error(
    errors: RwSignal<contracts::shared::validation::FieldErrors>,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}
