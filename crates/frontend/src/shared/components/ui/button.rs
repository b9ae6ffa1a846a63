use leptos::prelude::*;

/// Button component with variants and an optional leading icon.
///
/// Variants: "primary" (default, timber gradient), "ghost" (translucent
/// white over the preview), "outline", "success", "danger".
#[component]
pub fn Button(
    /// Button variant (reactive)
    #[prop(optional, into)]
    variant: Option<Signal<String>>,
    /// Highlight ring for toggles that are currently on
    #[prop(optional, into)]
    active: Option<Signal<bool>>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Tooltip text
    #[prop(optional, into)]
    title: Option<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let class_list = move || {
        let variant_class = match variant.map(|v| v.get()).as_deref().unwrap_or("primary") {
            "ghost" => "button--ghost",
            "outline" => "button--outline",
            "success" => "button--success",
            "danger" => "button--danger",
            _ => "button--primary",
        };
        let mut classes = vec!["button", variant_class];
        if block {
            classes.push("button--block");
        }
        if active.map(|a| a.get()).unwrap_or(false) {
            classes.push("button--active");
        }
        classes.join(" ")
    };

    view! {
        <button
            type="button"
            class=class_list
            title=title.unwrap_or_default()
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
