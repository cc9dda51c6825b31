use leptos::prelude::*;

/// Labelled text field with an inline error line
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw text on every keystroke
    on_input: Callback<String>,
    /// Inline error under the field; also marks the field invalid
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default) or "password"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the input element, also used by the label
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let label_for = id.clone();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let field_class = move || {
        if error.get().is_some() {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=id
                class=field_class
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                autocomplete=move || autocomplete.get().unwrap_or_else(|| "off".to_string())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// Error line rendered under a form field
#[component]
pub fn FieldError(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || {
        error.get().map(|message| view! {
            <div class="form__error" role="alert">{message}</div>
        })
    }
}
