use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: Option<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let textarea_id = id.unwrap_or_default();
    let textarea_placeholder = placeholder.unwrap_or_default();

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=textarea_id.clone()>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=textarea_placeholder
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
