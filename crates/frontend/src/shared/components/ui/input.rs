use crate::shared::icons::icon;
use leptos::prelude::*;

/// Input component with label and optional leading icon
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, into)]
    input_type: Option<String>,
    /// Icon name drawn inside the field on the left
    #[prop(optional)]
    leading_icon: Option<&'static str>,
    /// ID for the input element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let input_id = id.unwrap_or_default();
    let input_placeholder = placeholder.unwrap_or_default();
    let input_t = input_type.unwrap_or_else(|| "text".to_string());
    let input_class = if leading_icon.is_some() {
        "form__input form__input--with-icon"
    } else {
        "form__input"
    };

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=input_id.clone()>
                    {l}
                </label>
            })}
            <div class="form__control">
                {leading_icon.map(|name| view! {
                    <span class="form__icon">{icon(name)}</span>
                })}
                <input
                    id=input_id
                    class=input_class
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
            </div>
        </div>
    }
}
